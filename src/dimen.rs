/*
 *  Copyright 2021 QuantumBadger
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

use std::fmt::{Display, Formatter};
use std::ops::{
    Add,
    AddAssign,
    Div,
    DivAssign,
    Mul,
    MulAssign,
    Neg,
    Sub,
    SubAssign
};

use num_traits::{Float, Zero};

/// A vector with two f64 values.
pub type Vector2D = Vector2<f64>;

/// A vector with two f32 values.
pub type Vec2 = Vector2<f32>;

/// A vector containing two numeric values. This may represent a point or a
/// displacement in the plane.
///
/// Operations which produce a vector (such as [Vector2::add] or
/// [Vector2::rotate]) take `self` by value and return a new vector, leaving
/// the original untouched. The setters ([Vector2::set_x], [Vector2::set_y]
/// and [Vector2::set]) modify the vector in place.
///
/// No operation validates its input. Dividing by zero, or normalizing a
/// vector of zero length, produces infinite or NaN components following the
/// usual floating point rules.
#[repr(C)]
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug, Default)]
pub struct Vector2<T>
{
    /// The horizontal component of the vector.
    pub x: T,
    /// The vertical component of the vector.
    pub y: T
}

impl<T> Vector2<T>
{
    /// Instantiates a new `Vector2` from the specified horizontal and vertical
    /// components.
    #[inline]
    #[must_use]
    pub const fn new(x: T, y: T) -> Self
    {
        Vector2 { x, y }
    }

    /// Replaces the horizontal component.
    #[inline]
    pub fn set_x(&mut self, x: T)
    {
        self.x = x;
    }

    /// Replaces the vertical component.
    #[inline]
    pub fn set_y(&mut self, y: T)
    {
        self.y = y;
    }

    /// Replaces both components.
    #[inline]
    pub fn set(&mut self, x: T, y: T)
    {
        self.x = x;
        self.y = y;
    }
}

impl<T: Copy> Vector2<T>
{
    /// Returns the horizontal component.
    #[inline]
    #[must_use]
    pub fn x(&self) -> T
    {
        self.x
    }

    /// Returns the vertical component.
    #[inline]
    #[must_use]
    pub fn y(&self) -> T
    {
        self.y
    }
}

impl<T: Zero> Vector2<T>
{
    /// Returns a vector with both components set to zero.
    #[inline]
    #[must_use]
    pub fn zero() -> Self
    {
        Vector2::new(T::zero(), T::zero())
    }
}

impl<T: Float> Vector2<T>
{
    /// Returns the sum of this vector and `other`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    #[must_use]
    pub fn add(self, other: Self) -> Self
    {
        Vector2::new(self.x + other.x, self.y + other.y)
    }

    /// Returns this vector minus `other`.
    #[inline]
    #[must_use]
    pub fn subtract(self, other: Self) -> Self
    {
        Vector2::new(self.x - other.x, self.y - other.y)
    }

    /// Returns this vector with both components multiplied by `scalar`.
    #[inline]
    #[must_use]
    pub fn multiply(self, scalar: T) -> Self
    {
        Vector2::new(self.x * scalar, self.y * scalar)
    }

    /// Returns this vector with both components divided by `scalar`.
    ///
    /// A `scalar` of zero is not rejected: the components become infinite,
    /// or NaN where the component itself is zero.
    #[inline]
    #[must_use]
    pub fn divide(self, scalar: T) -> Self
    {
        if scalar.is_zero() {
            log::trace!("Dividing vector by zero, result is not finite");
        }

        Vector2::new(self.x / scalar, self.y / scalar)
    }

    /// The dot product of this vector and `other`.
    #[inline]
    #[must_use]
    pub fn dot(self, other: Self) -> T
    {
        self.x * other.x + self.y * other.y
    }

    /// The 2D cross product, i.e. the z component of the 3D cross product of
    /// the two vectors extended with z = 0.
    ///
    /// The result is positive when `other` lies counter-clockwise of `self`.
    #[inline]
    #[must_use]
    pub fn cross(self, other: Self) -> T
    {
        self.x * other.y - self.y * other.x
    }

    /// The squared length of the vector.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> T
    {
        self.x * self.x + self.y * self.y
    }

    /// The length of the vector.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> T
    {
        self.magnitude_squared().sqrt()
    }

    /// Returns a vector pointing in the same direction with a length of one.
    ///
    /// Normalizing a zero-length vector yields `(NaN, NaN)`.
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Self
    {
        let magnitude = self.magnitude();

        if magnitude.is_zero() {
            log::trace!("Normalizing a zero-length vector, result is NaN");
        }

        Vector2::new(self.x / magnitude, self.y / magnitude)
    }

    /// Returns `true` if both components are exactly equal to those of
    /// `other`. No tolerance is applied, so NaN components never compare
    /// equal.
    #[inline]
    #[must_use]
    pub fn equals(self, other: Self) -> bool
    {
        self.x == other.x && self.y == other.y
    }

    /// The Euclidean distance between the two points.
    #[inline]
    #[must_use]
    pub fn distance(self, other: Self) -> T
    {
        self.subtract(other).magnitude()
    }

    /// The angle between the vector and the positive x axis, in radians.
    ///
    /// The result is in `-π..=π`, following `atan2`. A vector such as
    /// `(-1.0, -0.0)` gives `-π`.
    #[inline]
    #[must_use]
    pub fn angle(self) -> T
    {
        self.y.atan2(self.x)
    }

    /// Rotates the vector counter-clockwise around the origin by `angle`
    /// radians.
    #[inline]
    #[must_use]
    pub fn rotate(self, angle: T) -> Self
    {
        let (sin, cos) = angle.sin_cos();

        Vector2::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos
        )
    }

    /// Linear interpolation from this vector towards `other`.
    ///
    /// `t` is not clamped: values outside `0.0..=1.0` extrapolate along the
    /// line through both points.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: T) -> Self
    {
        Vector2::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y)
        )
    }
}

impl<T: Display + Zero + PartialEq> Display for Vector2<T>
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        // Negative zero is written as a plain zero
        let zero = T::zero();
        let x = if self.x == zero { &zero } else { &self.x };
        let y = if self.y == zero { &zero } else { &self.y };

        write!(f, "({}, {})", x, y)
    }
}

impl<T: Add<Output = T>> Add for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output
    {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Sub<Output = T>> Sub for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output
    {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Mul<Output = T> + Copy> Mul<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Div<Output = T> + Copy> Div<T> for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output
    {
        Vector2::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Neg<Output = T>> Neg for Vector2<T>
{
    type Output = Vector2<T>;

    #[inline]
    fn neg(self) -> Self::Output
    {
        Vector2::new(-self.x, -self.y)
    }
}

impl<T: AddAssign> AddAssign for Vector2<T>
{
    #[inline]
    fn add_assign(&mut self, rhs: Self)
    {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: SubAssign> SubAssign for Vector2<T>
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self)
    {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: MulAssign + Copy> MulAssign<T> for Vector2<T>
{
    #[inline]
    fn mul_assign(&mut self, rhs: T)
    {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: DivAssign + Copy> DivAssign<T> for Vector2<T>
{
    #[inline]
    fn div_assign(&mut self, rhs: T)
    {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T> From<(T, T)> for Vector2<T>
{
    #[inline]
    fn from(value: (T, T)) -> Self
    {
        Vector2::new(value.0, value.1)
    }
}

impl<T> From<[T; 2]> for Vector2<T>
{
    #[inline]
    fn from(value: [T; 2]) -> Self
    {
        let [x, y] = value;
        Vector2::new(x, y)
    }
}

impl<T> From<Vector2<T>> for (T, T)
{
    #[inline]
    fn from(value: Vector2<T>) -> Self
    {
        (value.x, value.y)
    }
}
