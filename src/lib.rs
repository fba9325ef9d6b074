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

//! A two-dimensional vector type with the usual geometric operations:
//! arithmetic, dot and cross products, length, normalization, rotation,
//! interpolation, distance and angle.
//!
//! ```rust
//! use vector2d::Vector2D;
//!
//! let a = Vector2D::new(3.0, 4.0);
//! let b = Vector2D::new(1.0, 2.0);
//!
//! assert_eq!(5.0, a.magnitude());
//! assert_eq!(11.0, b.dot(a));
//! assert_eq!("(4, 6)", a.add(b).to_string());
//! ```
//!
//! Operations never fail. Dividing by zero, or normalizing a zero-length
//! vector, produces infinite or NaN components rather than an error. These
//! cases are reported as `trace` records through the [log] facade.

pub use ::log as log;

/// Types representing positions and displacements.
pub mod dimen;

pub use crate::dimen::{Vec2, Vector2, Vector2D};
