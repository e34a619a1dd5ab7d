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

//! Triangles in 2D and 3D.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3};

// --- Triangle2 ---

/// A planar triangle given by its three vertices.
///
/// Collinear or coincident vertices are allowed; such a triangle simply has
/// zero area.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Triangle2<T: Scalar> {
    /// Vertex A.
    pub a: Vector2<T>,
    /// Vertex B.
    pub b: Vector2<T>,
    /// Vertex C.
    pub c: Vector2<T>,
}

/// A single-precision 2D triangle.
pub type Triangle2F = Triangle2<f32>;
/// A double-precision 2D triangle.
pub type Triangle2D = Triangle2<f64>;

impl<T: Scalar> Triangle2<T> {
    /// Creates a triangle from its vertices.
    #[inline]
    pub const fn new(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> Self {
        Self { a, b, c }
    }

    /// Replaces the three vertices.
    #[inline]
    pub fn set_values(&mut self, a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) {
        *self = Self::new(a, b, c);
    }

    /// Copies the vertices of another triangle of the same precision.
    #[inline]
    pub fn set_value_of(&mut self, triangle: &Self) {
        *self = *triangle;
    }

    /// `b - a`
    #[inline]
    pub fn vector_ab(&self) -> Vector2<T> {
        self.b - self.a
    }

    /// `a - b`
    #[inline]
    pub fn vector_ba(&self) -> Vector2<T> {
        self.a - self.b
    }

    /// `c - b`
    #[inline]
    pub fn vector_bc(&self) -> Vector2<T> {
        self.c - self.b
    }

    /// `b - c`
    #[inline]
    pub fn vector_cb(&self) -> Vector2<T> {
        self.b - self.c
    }

    /// `c - a`
    #[inline]
    pub fn vector_ac(&self) -> Vector2<T> {
        self.c - self.a
    }

    /// `a - c`
    #[inline]
    pub fn vector_ca(&self) -> Vector2<T> {
        self.a - self.c
    }

    /// Half the planar cross product of `AB` and `AC`.
    ///
    /// Positive when the vertices run counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> T {
        self.vector_ab().cross(&self.vector_ac()) / T::TWO
    }

    /// The unsigned area of the triangle.
    #[inline]
    #[doc(alias = "square")]
    pub fn area(&self) -> T {
        self.signed_area().abs()
    }

    /// The arithmetic mean of the three vertices.
    #[inline]
    #[doc(alias = "getMedianCentre")]
    pub fn centroid(&self) -> Vector2<T> {
        (self.a + self.b + self.c) / T::THREE
    }

    /// Converts to a single-precision triangle.
    #[inline]
    pub fn to_float(&self) -> Triangle2<f32> {
        Triangle2::new(self.a.to_float(), self.b.to_float(), self.c.to_float())
    }

    /// Converts to a double-precision triangle.
    #[inline]
    pub fn to_double(&self) -> Triangle2<f64> {
        Triangle2::new(self.a.to_double(), self.b.to_double(), self.c.to_double())
    }
}

impl<T: Scalar> fmt::Display for Triangle2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

// SAFETY: `repr(C)` triple of `Pod` vectors, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Triangle2<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Triangle2<T> {}

impl<T: Scalar> AbsDiffEq for Triangle2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Triangle2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
    }
}

// --- Triangle3 ---

/// A triangle in space given by its three vertices.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Triangle3<T: Scalar> {
    /// Vertex A.
    pub a: Vector3<T>,
    /// Vertex B.
    pub b: Vector3<T>,
    /// Vertex C.
    pub c: Vector3<T>,
}

/// A single-precision 3D triangle.
pub type Triangle3F = Triangle3<f32>;
/// A double-precision 3D triangle.
pub type Triangle3D = Triangle3<f64>;

impl<T: Scalar> Triangle3<T> {
    /// Creates a triangle from its vertices.
    #[inline]
    pub const fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self { a, b, c }
    }

    /// Replaces the three vertices.
    #[inline]
    pub fn set_values(&mut self, a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) {
        *self = Self::new(a, b, c);
    }

    /// Copies the vertices of another triangle of the same precision.
    #[inline]
    pub fn set_value_of(&mut self, triangle: &Self) {
        *self = *triangle;
    }

    /// `b - a`
    #[inline]
    pub fn vector_ab(&self) -> Vector3<T> {
        self.b - self.a
    }

    /// `a - b`
    #[inline]
    pub fn vector_ba(&self) -> Vector3<T> {
        self.a - self.b
    }

    /// `c - b`
    #[inline]
    pub fn vector_bc(&self) -> Vector3<T> {
        self.c - self.b
    }

    /// `b - c`
    #[inline]
    pub fn vector_cb(&self) -> Vector3<T> {
        self.b - self.c
    }

    /// `c - a`
    #[inline]
    pub fn vector_ac(&self) -> Vector3<T> {
        self.c - self.a
    }

    /// `a - c`
    #[inline]
    pub fn vector_ca(&self) -> Vector3<T> {
        self.a - self.c
    }

    /// Half the magnitude of `AB × AC`.
    #[inline]
    #[doc(alias = "square")]
    pub fn area(&self) -> T {
        self.vector_ab().cross(&self.vector_ac()).module() / T::TWO
    }

    /// The arithmetic mean of the three vertices.
    #[inline]
    #[doc(alias = "getMedianCentre")]
    pub fn centroid(&self) -> Vector3<T> {
        (self.a + self.b + self.c) / T::THREE
    }

    /// Converts to a single-precision triangle.
    #[inline]
    pub fn to_float(&self) -> Triangle3<f32> {
        Triangle3::new(self.a.to_float(), self.b.to_float(), self.c.to_float())
    }

    /// Converts to a double-precision triangle.
    #[inline]
    pub fn to_double(&self) -> Triangle3<f64> {
        Triangle3::new(self.a.to_double(), self.b.to_double(), self.c.to_double())
    }
}

impl<T: Scalar> fmt::Display for Triangle3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.a, self.b, self.c)
    }
}

// SAFETY: `repr(C)` triple of `Pod` vectors, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Triangle3<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Triangle3<T> {}

impl<T: Scalar> AbsDiffEq for Triangle3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.a.abs_diff_eq(&other.a, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
            && self.c.abs_diff_eq(&other.c, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Triangle3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.a.relative_eq(&other.a, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
            && self.c.relative_eq(&other.c, epsilon, max_relative)
    }
}

// --- Tests ---
