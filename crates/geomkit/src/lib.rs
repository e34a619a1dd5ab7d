// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # geomkit
//!
//! Dual-precision geometric primitives for 2D and 3D: angles, vectors,
//! quaternions, matrices, lines and rays, triangles and affine converters.
//!
//! Every type is generic over a [`Scalar`] and comes with two aliases, one
//! per precision: the `F` suffix is `f32` and the `D` suffix is `f64`
//! (`Vector2F`, `Vector2D`, ...). Switching precision is always explicit,
//! through the `to_float` / `to_double` pair each type provides.
//!
//! Each precision has its own tolerance constants (see [`scalar`]). The
//! derived predicates `is_zero`, `is_unit` and `is_close_to` use them, while
//! `==` compares components exactly.
//!
//! ```rust
//! use geomkit::{Line2D, Triangle2D, Vector2D};
//!
//! let line = Line2D::new(Vector2D::ZERO, Vector2D::new(3.0, 4.0));
//! assert!(line.is_valid());
//! assert_eq!(line.direction(), Vector2D::new(0.6, 0.8));
//!
//! let degenerate = Line2D::new(Vector2D::ZERO, Vector2D::ZERO);
//! assert!(!degenerate.is_valid());
//!
//! let triangle = Triangle2D::new(
//!     Vector2D::new(0.0, 0.0),
//!     Vector2D::new(4.0, 0.0),
//!     Vector2D::new(0.0, 3.0),
//! );
//! assert_eq!(triangle.area(), 6.0);
//! ```

#![warn(missing_docs)]

// --- Declare Sub-Modules ---

pub mod angle;
pub mod converter;
pub mod error;
pub mod line;
pub mod matrix;
pub mod quaternion;
pub mod scalar;
pub mod triangle;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::angle::{Angle, AngleD, AngleF, AngleUnit};
pub use self::converter::{
    Converter2, Converter2D, Converter2F, Converter3, Converter3D, Converter3F,
};
pub use self::error::{GeometryError, Result};
pub use self::line::{
    Line2, Line2D, Line2F, Line3, Line3D, Line3F, LineSegment2, LineSegment2D, LineSegment2F,
    Ray2, Ray2D, Ray2F, Ray3, Ray3D, Ray3F,
};
pub use self::matrix::{
    Matrix2x2, Matrix2x2D, Matrix2x2F, Matrix3x3, Matrix3x3D, Matrix3x3F, MatrixKind,
};
pub use self::quaternion::{Quaternion, QuaternionD, QuaternionF};
pub use self::scalar::Scalar;
pub use self::triangle::{Triangle2, Triangle2D, Triangle2F, Triangle3, Triangle3D, Triangle3F};
pub use self::vector::{Vector2, Vector2D, Vector2F, Vector3, Vector3D, Vector3F};
