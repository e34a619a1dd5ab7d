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

//! Lines, rays and line segments in 2D and 3D.
//!
//! Lines and rays carry a base point, a unit direction and a validity flag.
//! The direction is normalized every time it is assigned; a near-zero
//! direction is stored as the zero vector and marks the primitive invalid.
//! Rays differ from lines only by name: `point_at` does not clamp negative
//! positions for either.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3};

macro_rules! line_type {
    ($name:ident, $float:ident, $double:ident, $vector:ident, $what:literal) => {
        #[doc = concat!("A ", $what, " given by a base point and a unit direction.")]
        #[derive(Debug, Default, Clone, Copy, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name<T: Scalar> {
            point: $vector<T>,
            direction: $vector<T>,
            valid: bool,
        }

        #[doc = concat!("A single-precision ", $what, ".")]
        pub type $float = $name<f32>;
        #[doc = concat!("A double-precision ", $what, ".")]
        pub type $double = $name<f64>;

        impl<T: Scalar> $name<T> {
            /// Creates a new primitive, normalizing `direction`.
            ///
            /// The result is invalid when `direction` is too short to normalize.
            pub fn new(point: $vector<T>, direction: $vector<T>) -> Self {
                let mut line = Self {
                    point,
                    direction,
                    valid: false,
                };
                line.set_direction(direction);
                line
            }

            /// Returns `true` if the stored direction is a unit vector.
            #[inline]
            pub fn is_valid(&self) -> bool {
                self.valid
            }

            /// Returns `true` if the direction could not be normalized.
            #[inline]
            pub fn is_degenerate(&self) -> bool {
                !self.valid
            }

            /// The base point.
            #[inline]
            pub fn point(&self) -> $vector<T> {
                self.point
            }

            /// The normalized direction, or zero for an invalid primitive.
            #[inline]
            pub fn direction(&self) -> $vector<T> {
                self.direction
            }

            /// Replaces both the base point and the direction.
            #[inline]
            pub fn set_values(&mut self, point: $vector<T>, direction: $vector<T>) {
                self.point = point;
                self.set_direction(direction);
            }

            /// Shifts the base point by `distance`.
            #[inline]
            pub fn move_at(&mut self, distance: $vector<T>) {
                self.point += distance;
            }

            /// Places the base point at `point`.
            #[inline]
            pub fn move_to(&mut self, point: $vector<T>) {
                self.point = point;
            }

            /// Replaces the direction, normalizing it and updating the validity flag.
            pub fn set_direction(&mut self, direction: $vector<T>) {
                self.direction = direction;
                self.valid = self.direction.normalize();
                if !self.valid {
                    log::trace!(
                        "{} direction {} is degenerate, marked invalid",
                        stringify!($name),
                        direction
                    );
                }
            }

            /// Returns `point + direction * position`.
            #[inline]
            pub fn point_at(&self, position: T) -> $vector<T> {
                self.point + self.direction * position
            }

            /// Converts to single precision, normalizing the converted direction again.
            #[inline]
            pub fn to_float(&self) -> $name<f32> {
                $name::new(self.point.to_float(), self.direction.to_float())
            }

            /// Converts to double precision, normalizing the converted direction again.
            #[inline]
            pub fn to_double(&self) -> $name<f64> {
                $name::new(self.point.to_double(), self.direction.to_double())
            }
        }

        impl<T: Scalar> fmt::Display for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} -> {}", self.point, self.direction)
            }
        }

        impl<T: Scalar> AbsDiffEq for $name<T> {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                self.valid == other.valid
                    && self.point.abs_diff_eq(&other.point, epsilon)
                    && self.direction.abs_diff_eq(&other.direction, epsilon)
            }
        }

        impl<T: Scalar> RelativeEq for $name<T> {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                self.valid == other.valid
                    && self.point.relative_eq(&other.point, epsilon, max_relative)
                    && self
                        .direction
                        .relative_eq(&other.direction, epsilon, max_relative)
            }
        }
    };
}

line_type!(Line2, Line2F, Line2D, Vector2, "2D line");
line_type!(Ray2, Ray2F, Ray2D, Vector2, "2D ray");
line_type!(Line3, Line3F, Line3D, Vector3, "3D line");
line_type!(Ray3, Ray3F, Ray3D, Vector3, "3D ray");

// --- LineSegment2 ---

/// A 2D segment between two endpoints. A segment with `a == b` is allowed.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct LineSegment2<T: Scalar> {
    /// The first endpoint.
    pub a: Vector2<T>,
    /// The second endpoint.
    pub b: Vector2<T>,
}

/// A single-precision 2D segment.
pub type LineSegment2F = LineSegment2<f32>;
/// A double-precision 2D segment.
pub type LineSegment2D = LineSegment2<f64>;

impl<T: Scalar> LineSegment2<T> {
    /// Creates a new segment from its endpoints.
    #[inline]
    pub const fn new(a: Vector2<T>, b: Vector2<T>) -> Self {
        Self { a, b }
    }

    /// Replaces both endpoints.
    #[inline]
    pub fn set_values(&mut self, a: Vector2<T>, b: Vector2<T>) {
        self.a = a;
        self.b = b;
    }

    /// Interpolates between the endpoints as `a * position + b * (1 - position)`.
    ///
    /// `position == 1` yields `a` and `position == 0` yields `b`.
    #[inline]
    pub fn point_at(&self, position: T) -> Vector2<T> {
        self.a * position + self.b * (T::UNIT - position)
    }

    /// The distance between the endpoints.
    #[inline]
    pub fn length(&self) -> T {
        (self.b - self.a).module()
    }

    /// Converts to a single-precision segment.
    #[inline]
    pub fn to_float(&self) -> LineSegment2<f32> {
        LineSegment2::new(self.a.to_float(), self.b.to_float())
    }

    /// Converts to a double-precision segment.
    #[inline]
    pub fn to_double(&self) -> LineSegment2<f64> {
        LineSegment2::new(self.a.to_double(), self.b.to_double())
    }
}

impl<T: Scalar> fmt::Display for LineSegment2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}

// SAFETY: `repr(C)` pair of `Pod` vectors, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for LineSegment2<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for LineSegment2<T> {}

impl<T: Scalar> AbsDiffEq for LineSegment2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon) && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl<T: Scalar> RelativeEq for LineSegment2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2D, Vector2F, Vector3D, Vector3F};
    use approx::assert_relative_eq;

    #[test]
    fn test_line2_normalizes_direction() {
        let line = Line2D::new(Vector2D::new(1.0, 1.0), Vector2D::new(3.0, 4.0));
        assert!(line.is_valid());
        assert!(!line.is_degenerate());
        assert_eq!(line.point(), Vector2D::new(1.0, 1.0));
        assert_eq!(line.direction(), Vector2D::new(0.6, 0.8));
    }

    #[test]
    fn test_line2_zero_direction_is_invalid() {
        let line = Line2D::new(Vector2D::new(2.0, -1.0), Vector2D::ZERO);
        assert!(!line.is_valid());
        assert!(line.is_degenerate());
        assert_eq!(line.direction(), Vector2D::ZERO);
        // Still computable: collapses to the base point.
        assert_eq!(line.point_at(10.0), Vector2D::new(2.0, -1.0));
    }

    #[test]
    fn test_huge_direction_stays_valid() {
        let line = Line2F::new(Vector2F::ZERO, Vector2F::new(3e19, 4e19));
        assert!(line.is_valid());
        assert!(!line.direction().is_zero());
        assert_relative_eq!(line.direction(), Vector2F::new(0.6, 0.8), epsilon = 1e-6);

        let ray = Ray3D::new(Vector3D::ZERO, Vector3D::new(0.0, 0.0, 1e300));
        assert!(ray.is_valid());
        assert_eq!(ray.direction(), Vector3D::Z);
    }

    #[test]
    fn test_infinite_direction_is_invalid() {
        let line = Line2D::new(Vector2D::ZERO, Vector2D::new(f64::INFINITY, 0.0));
        assert!(line.is_degenerate());
        assert_eq!(line.direction(), Vector2D::ZERO);
    }

    #[test]
    fn test_default_is_invalid() {
        let line = Line2F::default();
        assert!(line.is_degenerate());
        assert_eq!(line.point(), Vector2F::ZERO);
        assert_eq!(line.direction(), Vector2F::ZERO);
        assert!(!Ray3D::default().is_valid());
    }

    #[test]
    fn test_line2_point_at() {
        let line = Line2D::new(Vector2D::new(1.0, 2.0), Vector2D::new(0.0, 5.0));
        assert_eq!(line.point_at(0.0), Vector2D::new(1.0, 2.0));
        assert_eq!(line.point_at(3.0), Vector2D::new(1.0, 5.0));
        assert_eq!(line.point_at(-2.0), Vector2D::new(1.0, 0.0));
    }

    #[test]
    fn test_ray2_does_not_clamp() {
        let ray = Ray2D::new(Vector2D::ZERO, Vector2D::new(2.0, 0.0));
        assert_eq!(ray.point_at(-1.0), Vector2D::new(-1.0, 0.0));
    }

    #[test]
    fn test_set_direction_updates_validity() {
        let mut ray = Ray2F::new(Vector2F::ZERO, Vector2F::X);
        assert!(ray.is_valid());

        ray.set_direction(Vector2F::new(1e-8, 0.0));
        assert!(ray.is_degenerate());
        assert_eq!(ray.direction(), Vector2F::ZERO);

        ray.set_direction(Vector2F::new(0.0, -4.0));
        assert!(ray.is_valid());
        assert_eq!(ray.direction(), Vector2F::new(0.0, -1.0));
    }

    #[test]
    fn test_set_values_sets_point_and_direction() {
        let mut line = Line2D::default();
        line.set_values(Vector2D::new(5.0, 6.0), Vector2D::new(-3.0, 4.0));
        assert!(line.is_valid());
        assert_eq!(line.point(), Vector2D::new(5.0, 6.0));
        assert_eq!(line.direction(), Vector2D::new(-0.6, 0.8));
    }

    #[test]
    fn test_move_at_and_move_to() {
        let mut line = Line3D::new(Vector3D::new(1.0, 1.0, 1.0), Vector3D::Z);
        line.move_at(Vector3D::new(1.0, 2.0, 3.0));
        assert_eq!(line.point(), Vector3D::new(2.0, 3.0, 4.0));
        line.move_to(Vector3D::ZERO);
        assert_eq!(line.point(), Vector3D::ZERO);
        assert_eq!(line.direction(), Vector3D::Z);
        assert!(line.is_valid());
    }

    #[test]
    fn test_line3_point_at() {
        let line = Line3D::new(Vector3D::new(0.0, 0.0, 1.0), Vector3D::new(0.0, 2.0, 0.0));
        assert_eq!(line.direction(), Vector3D::Y);
        assert_eq!(line.point_at(2.5), Vector3D::new(0.0, 2.5, 1.0));
    }

    #[test]
    fn test_ray3_precision_conversion() {
        let ray = Ray3D::new(Vector3D::new(1.0, 2.0, 3.0), Vector3D::new(1.0, 1.0, 1.0));
        let float = ray.to_float();
        assert!(float.is_valid());
        assert_relative_eq!(float.direction().module(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(float.to_double(), ray, epsilon = 1e-6);

        let degenerate = Ray3F::new(Vector3F::X, Vector3F::ZERO).to_double();
        assert!(degenerate.is_degenerate());
        assert_eq!(degenerate.point(), Vector3D::X);
    }

    #[test]
    fn test_line_display() {
        let line = Line2D::new(Vector2D::new(1.0, 2.0), Vector2D::new(0.0, 3.0));
        assert_eq!(line.to_string(), "(1, 2) -> (0, 1)");
    }

    #[test]
    fn test_segment_point_at() {
        let segment = LineSegment2D::new(Vector2D::new(0.0, 0.0), Vector2D::new(4.0, 2.0));
        assert_eq!(segment.point_at(1.0), segment.a);
        assert_eq!(segment.point_at(0.0), segment.b);
        assert_eq!(segment.point_at(0.5), Vector2D::new(2.0, 1.0));
        assert_eq!(segment.point_at(0.25), Vector2D::new(3.0, 1.5));
    }

    #[test]
    fn test_segment_length_and_set_values() {
        let mut segment = LineSegment2F::default();
        assert_eq!(segment.length(), 0.0);
        segment.set_values(Vector2F::new(1.0, 1.0), Vector2F::new(4.0, 5.0));
        assert_eq!(segment.length(), 5.0);
        assert_eq!(segment.to_double().to_float(), segment);
        let expected = LineSegment2D::new(Vector2D::new(1.0, 1.0), Vector2D::new(4.0, 5.0));
        assert_relative_eq!(segment.to_double(), expected);
        assert_eq!(segment.to_string(), "[(1, 1), (4, 5)]");
    }
}
