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

//! Provides 2D and 3D vector types and their associated operations.
//!
//! Both vectors follow the tolerance policy of [`crate::scalar`]: `is_zero`,
//! `is_unit` and `normalize` compare squared magnitudes against the
//! precision's `SQUARE_EPSILON` / `EPSILON`, while `==` stays an exact
//! comparison of the components.

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::{is_close_square, is_unit_square, is_zero_square, Scalar};

// --- Vector2 ---

/// A 2-dimensional vector.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2<T: Scalar> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
}

/// A single-precision 2D vector.
pub type Vector2F = Vector2<f32>;
/// A double-precision 2D vector.
pub type Vector2D = Vector2<f64>;

impl<T: Scalar> Vector2<T> {
    /// A vector with all components set to zero.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: T::UNIT,
        y: T::ZERO,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: T::ZERO,
        y: T::UNIT,
    };

    /// Creates a new `Vector2` with the specified components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Replaces both components.
    #[inline]
    pub fn set_values(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    /// Copies the components of another vector of the same precision.
    #[inline]
    pub fn set_value_of(&mut self, vector: &Self) {
        *self = *vector;
    }

    /// Sets every component to zero.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    #[doc(alias = "length_squared")]
    pub fn square_module(&self) -> T {
        self.x * self.x + self.y * self.y
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    #[doc(alias = "length")]
    pub fn module(&self) -> T {
        self.square_module().sqrt()
    }

    /// Returns `true` if the squared length does not exceed `SQUARE_EPSILON`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero_square(self.square_module())
    }

    /// Returns `true` if the squared length is within `EPSILON` of one.
    #[inline]
    pub fn is_unit(&self) -> bool {
        is_unit_square(self.square_module())
    }

    /// Scales the vector to unit length in place.
    ///
    /// If the squared length does not exceed `SQUARE_EPSILON` the vector is
    /// reset to zero and `false` is returned. The same happens to a vector
    /// with an infinite or NaN component.
    pub fn normalize(&mut self) -> bool {
        let mut square_module = self.square_module();

        if !square_module.is_finite() {
            // Finite components can still overflow once squared.
            let largest = self.x.abs().max(self.y.abs());
            *self /= largest;
            square_module = self.square_module();
        }

        if !square_module.is_finite() || is_zero_square(square_module) {
            self.set_to_zero();
            return false;
        }

        let module = square_module.sqrt();
        self.x /= module;
        self.y /= module;
        true
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    #[doc(alias = "dot")]
    pub fn scalar(&self, vector: &Self) -> T {
        self.x * vector.x + self.y * vector.y
    }

    /// Dot product with a vector given by its components.
    #[inline]
    pub fn scalar_components(&self, x: T, y: T) -> T {
        self.x * x + self.y * y
    }

    /// The z component of the 3D cross product of two planar vectors.
    ///
    /// Positive when `vector` lies counter-clockwise from `self`.
    #[inline]
    pub fn cross(&self, vector: &Self) -> T {
        self.x * vector.y - self.y * vector.x
    }

    /// Returns `true` if the squared distance to `vector` does not exceed `SQUARE_EPSILON`.
    #[inline]
    pub fn is_close_to(&self, vector: &Self) -> bool {
        is_close_square((*self - *vector).square_module())
    }

    /// Converts to a single-precision vector.
    #[inline]
    pub fn to_float(&self) -> Vector2<f32> {
        Vector2::new(self.x.as_f32(), self.y.as_f32())
    }

    /// Converts to a double-precision vector.
    #[inline]
    pub fn to_double(&self) -> Vector2<f64> {
        Vector2::new(self.x.as_f64(), self.y.as_f64())
    }
}

impl<T: Scalar> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// SAFETY: `repr(C)` struct made only of `Pod` scalars of one type, so no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Vector2<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Vector2<T> {}

// --- Operator Overloads ---

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Mul for Vector2<T> {
    type Output = T;
    /// Dot product, the operator form of [`Vector2::scalar`].
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.scalar(&rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;
    /// Divides the vector by a scalar. A zero divisor follows IEEE 754.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;
    /// Allows accessing a vector component by index (`v[0]`, `v[1]`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vector2"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector2<T> {
    /// Allows mutably accessing a vector component by index (`v[0] = ...`).
    ///
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vector2"),
        }
    }
}

impl<T: Scalar> AbsDiffEq for Vector2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Vector2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

// --- Vector3 ---

/// A 3-dimensional vector.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3<T: Scalar> {
    /// The x component of the vector.
    pub x: T,
    /// The y component of the vector.
    pub y: T,
    /// The z component of the vector.
    pub z: T,
}

/// A single-precision 3D vector.
pub type Vector3F = Vector3<f32>;
/// A double-precision 3D vector.
pub type Vector3D = Vector3<f64>;

impl<T: Scalar> Vector3<T> {
    /// A vector with all components set to zero.
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self {
        x: T::UNIT,
        y: T::ZERO,
        z: T::ZERO,
    };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self {
        x: T::ZERO,
        y: T::UNIT,
        z: T::ZERO,
    };
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
        z: T::UNIT,
    };

    /// Creates a new `Vector3` with the specified components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Replaces all three components.
    #[inline]
    pub fn set_values(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Copies the components of another vector of the same precision.
    #[inline]
    pub fn set_value_of(&mut self, vector: &Self) {
        *self = *vector;
    }

    /// Sets every component to zero.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    #[doc(alias = "length_squared")]
    pub fn square_module(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    #[doc(alias = "length")]
    pub fn module(&self) -> T {
        self.square_module().sqrt()
    }

    /// Returns `true` if the squared length does not exceed `SQUARE_EPSILON`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero_square(self.square_module())
    }

    /// Returns `true` if the squared length is within `EPSILON` of one.
    #[inline]
    pub fn is_unit(&self) -> bool {
        is_unit_square(self.square_module())
    }

    /// Scales the vector to unit length in place.
    ///
    /// If the squared length does not exceed `SQUARE_EPSILON` the vector is
    /// reset to zero and `false` is returned. The same happens to a vector
    /// with an infinite or NaN component.
    pub fn normalize(&mut self) -> bool {
        let mut square_module = self.square_module();

        if !square_module.is_finite() {
            // Finite components can still overflow once squared.
            let largest = self.x.abs().max(self.y.abs()).max(self.z.abs());
            *self /= largest;
            square_module = self.square_module();
        }

        if !square_module.is_finite() || is_zero_square(square_module) {
            self.set_to_zero();
            return false;
        }

        let module = square_module.sqrt();
        self.x /= module;
        self.y /= module;
        self.z /= module;
        true
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    #[doc(alias = "dot")]
    pub fn scalar(&self, vector: &Self) -> T {
        self.x * vector.x + self.y * vector.y + self.z * vector.z
    }

    /// Dot product with a vector given by its components.
    #[inline]
    pub fn scalar_components(&self, x: T, y: T, z: T) -> T {
        self.x * x + self.y * y + self.z * z
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    #[doc(alias = "vector")]
    pub fn cross(&self, vector: &Self) -> Self {
        Self {
            x: self.y * vector.z - self.z * vector.y,
            y: self.z * vector.x - self.x * vector.z,
            z: self.x * vector.y - self.y * vector.x,
        }
    }

    /// Scalar triple product `self · (second × third)`: the signed volume of
    /// the parallelepiped spanned by the three vectors.
    #[inline]
    pub fn triple(&self, second: &Self, third: &Self) -> T {
        self.x * second.y * third.z
            + self.y * second.z * third.x
            + self.z * second.x * third.y
            - self.z * second.y * third.x
            - self.y * second.x * third.z
            - self.x * second.z * third.y
    }

    /// Returns `true` if the squared distance to `vector` does not exceed `SQUARE_EPSILON`.
    #[inline]
    pub fn is_close_to(&self, vector: &Self) -> bool {
        is_close_square((*self - *vector).square_module())
    }

    /// Converts to a single-precision vector.
    #[inline]
    pub fn to_float(&self) -> Vector3<f32> {
        Vector3::new(self.x.as_f32(), self.y.as_f32(), self.z.as_f32())
    }

    /// Converts to a double-precision vector.
    #[inline]
    pub fn to_double(&self) -> Vector3<f64> {
        Vector3::new(self.x.as_f64(), self.y.as_f64(), self.z.as_f64())
    }
}

impl<T: Scalar> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// SAFETY: `repr(C)` struct made only of `Pod` scalars of one type, so no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Vector3<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Vector3<T> {}

// --- Operator Overloads ---

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Mul for Vector3<T> {
    type Output = T;
    /// Dot product, the operator form of [`Vector3::scalar`].
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.scalar(&rhs)
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    /// Divides the vector by a scalar. A zero divisor follows IEEE 754.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    /// Allows accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vector3"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    /// Allows mutably accessing a vector component by index.
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vector3"),
        }
    }
}

impl<T: Scalar> AbsDiffEq for Vector3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Vector3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

// Scalar on the left-hand side; one impl per concrete precision (orphan rules).
macro_rules! scalar_times_vector_impl {
    ($t:ty) => {
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;
            /// Multiplies a scalar by a vector.
            #[inline]
            fn mul(self, rhs: Vector2<$t>) -> Self::Output {
                rhs * self
            }
        }

        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            /// Multiplies a scalar by a vector.
            #[inline]
            fn mul(self, rhs: Vector3<$t>) -> Self::Output {
                rhs * self
            }
        }
    };
}

scalar_times_vector_impl!(f32);
scalar_times_vector_impl!(f64);

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    // Test Vector2

    #[test]
    fn test_vector2_new_and_constants() {
        let v = Vector2D::new(1.0, 2.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(Vector2D::default(), Vector2D::ZERO);
        assert_eq!(Vector2F::X, Vector2F::new(1.0, 0.0));
        assert_eq!(Vector2F::Y, Vector2F::new(0.0, 1.0));
    }

    #[test]
    fn test_vector2_ops() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);
        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(3.0 * v1, Vector2D::new(3.0, 6.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));

        let mut v = v1;
        v += v2;
        v -= Vector2D::new(1.0, 1.0);
        v *= 2.0;
        v /= 4.0;
        assert_eq!(v, Vector2D::new(1.5, 2.5));
    }

    #[test]
    fn test_vector2_scalar_and_cross() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);
        assert_eq!(v1.scalar(&v2), 11.0);
        assert_eq!(v1.scalar_components(3.0, 4.0), 11.0);
        assert_eq!(v1 * v2, 11.0);
        assert_eq!(Vector2D::X.cross(&Vector2D::Y), 1.0);
        assert_eq!(Vector2D::Y.cross(&Vector2D::X), -1.0);
    }

    #[test]
    fn test_vector2_module() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.square_module(), 25.0);
        assert_eq!(v.module(), 5.0);
        assert_eq!(Vector2D::ZERO.module(), 0.0);
    }

    #[test]
    fn test_vector2_normalize() {
        let mut v = Vector2D::new(3.0, 4.0);
        assert!(v.normalize());
        assert_eq!(v, Vector2D::new(0.6, 0.8));
        assert!(v.is_unit());

        let mut tiny = Vector2D::new(1e-16, -1e-16);
        assert!(!tiny.normalize());
        assert_eq!(tiny, Vector2D::ZERO);

        let mut v = Vector2F::new(0.0, -7.0);
        assert!(v.normalize());
        assert_eq!(v, Vector2F::new(0.0, -1.0));
    }

    #[test]
    fn test_vector2_normalize_huge_components() {
        // Squared length overflows f32 while every component is finite.
        let mut v = Vector2F::new(1e20, 0.0);
        assert!(v.normalize());
        assert_eq!(v, Vector2F::X);

        let mut v = Vector2F::new(3e19, 4e19);
        assert!(v.normalize());
        assert_abs_diff_eq!(v, Vector2F::new(0.6, 0.8), epsilon = 1e-6);

        let mut v = Vector2D::new(1e200, 1e200);
        assert!(v.normalize());
        assert_abs_diff_eq!(v.module(), 1.0, epsilon = <f64 as Scalar>::EPSILON);
        assert_abs_diff_eq!(v.x, v.y);
    }

    #[test]
    fn test_vector2_normalize_non_finite() {
        let mut v = Vector2D::new(f64::INFINITY, 1.0);
        assert!(!v.normalize());
        assert_eq!(v, Vector2D::ZERO);

        let mut v = Vector2F::new(f32::NAN, 0.0);
        assert!(!v.normalize());
        assert_eq!(v, Vector2F::ZERO);
    }

    #[test]
    fn test_vector2_zero_and_unit() {
        assert!(Vector2D::ZERO.is_zero());
        assert!(Vector2D::new(1e-16, 0.0).is_zero());
        assert!(!Vector2D::new(1e-14, 0.0).is_zero());
        assert!(Vector2F::new(1e-8, 0.0).is_zero());

        assert!(Vector2F::X.is_unit());
        assert!(!Vector2F::new(1.0, 1.0).is_unit());
        assert!(!Vector2D::ZERO.is_unit());
    }

    #[test]
    fn test_vector2_set_values() {
        let mut v = Vector2D::ZERO;
        v.set_values(5.0, 6.0);
        assert_eq!(v, Vector2D::new(5.0, 6.0));
        v.set_value_of(&Vector2D::new(-1.0, 1.0));
        assert_eq!(v, Vector2D::new(-1.0, 1.0));
        v.set_to_zero();
        assert_eq!(v, Vector2D::ZERO);
    }

    #[test]
    fn test_vector2_is_close_to() {
        let v = Vector2D::new(1.0, 2.0);
        assert!(v.is_close_to(&Vector2D::new(1.0 + 1e-16, 2.0)));
        assert!(!v.is_close_to(&Vector2D::new(1.0 + 1e-10, 2.0)));
        assert_abs_diff_eq!(v, Vector2D::new(1.0 + 1e-10, 2.0), epsilon = 1e-9);
    }

    #[test]
    fn test_vector2_precision_conversion() {
        let v = Vector2F::new(0.1, -2.5);
        assert_eq!(v.to_double().to_float(), v);
        assert_relative_eq!(Vector2D::new(0.1, -2.5).to_float(), v);
    }

    #[test]
    fn test_vector2_index() {
        let mut v = Vector2D::new(5.0, 6.0);
        assert_eq!(v[0], 5.0);
        assert_eq!(v[1], 6.0);
        v[0] = 10.0;
        assert_eq!(v.x, 10.0);
    }

    #[test]
    #[should_panic]
    fn test_vector2_index_out_of_bounds() {
        let v = Vector2D::new(1.0, 2.0);
        let _ = v[2]; // Should panic
    }

    #[test]
    fn test_vector2_display() {
        assert_eq!(Vector2D::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn test_vector2_cast_to_scalars() {
        let points = [Vector2F::new(1.0, 2.0), Vector2F::new(3.0, 4.0)];
        let raw: &[f32] = bytemuck::cast_slice(&points);
        assert_eq!(raw, &[1.0, 2.0, 3.0, 4.0]);
    }

    // Test Vector3

    #[test]
    fn test_vector3_constants() {
        assert_eq!(Vector3D::ZERO, Vector3D::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3D::X, Vector3D::new(1.0, 0.0, 0.0));
        assert_eq!(Vector3D::Y, Vector3D::new(0.0, 1.0, 0.0));
        assert_eq!(Vector3D::Z, Vector3D::new(0.0, 0.0, 1.0));
        assert_eq!(Vector3F::default(), Vector3F::ZERO);
    }

    #[test]
    fn test_vector3_ops() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, 5.0, 6.0);
        assert_eq!(v1 + v2, Vector3D::new(5.0, 7.0, 9.0));
        assert_eq!(v2 - v1, Vector3D::new(3.0, 3.0, 3.0));
        assert_eq!(v1 * 2.0, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * v1, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(v2 / 2.0, Vector3D::new(2.0, 2.5, 3.0));
        assert_eq!(-v1, Vector3D::new(-1.0, -2.0, -3.0));

        let mut v = v1;
        v += v2;
        v -= v1;
        v *= 3.0;
        v /= 2.0;
        assert_eq!(v, Vector3D::new(6.0, 7.5, 9.0));
    }

    #[test]
    fn test_vector3_scalar() {
        let v1 = Vector3D::new(1.0, 2.0, 3.0);
        let v2 = Vector3D::new(4.0, -5.0, 6.0);
        // 1*4 + 2*(-5) + 3*6 = 4 - 10 + 18 = 12
        assert_eq!(v1.scalar(&v2), 12.0);
        assert_eq!(v1.scalar_components(4.0, -5.0, 6.0), 12.0);
        assert_eq!(v1 * v2, 12.0);
        assert_eq!(Vector3D::X * Vector3D::Z, 0.0);
        assert_eq!(Vector3D::X.scalar(&Vector3D::Y), 0.0);
    }

    #[test]
    fn test_vector3_cross() {
        // Standard basis vectors
        assert_eq!(Vector3D::X.cross(&Vector3D::Y), Vector3D::Z);
        assert_eq!(Vector3D::Y.cross(&Vector3D::Z), Vector3D::X);
        assert_eq!(Vector3D::Z.cross(&Vector3D::X), Vector3D::Y);

        // The y component carries the negation: (z1*x2 - x1*z2).
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(4.0, 5.0, 6.0);
        assert_eq!(a.cross(&b), Vector3D::new(-3.0, 6.0, -3.0));
        assert_eq!(a.cross(&b), -b.cross(&a));

        // Parallel vectors
        assert_eq!(Vector3D::X.cross(&Vector3D::X), Vector3D::ZERO);
    }

    #[test]
    fn test_vector3_triple() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(4.0, 5.0, 6.0);
        let c = Vector3D::new(7.0, 8.0, 10.0);
        assert_eq!(a.triple(&b, &c), a.scalar(&b.cross(&c)));
        assert_eq!(Vector3D::X.triple(&Vector3D::Y, &Vector3D::Z), 1.0);
        assert_eq!(Vector3D::Y.triple(&Vector3D::X, &Vector3D::Z), -1.0);
    }

    #[test]
    fn test_vector3_normalize() {
        let mut v = Vector3D::new(3.0, 0.0, 0.0);
        assert!(v.normalize());
        assert_eq!(v, Vector3D::X);

        let mut v = Vector3D::new(1.0, 1.0, 1.0);
        assert!(v.normalize());
        assert_abs_diff_eq!(v.module(), 1.0, epsilon = <f64 as Scalar>::EPSILON);

        let mut zero = Vector3F::ZERO;
        assert!(!zero.normalize());
        assert_eq!(zero, Vector3F::ZERO);

        let mut tiny = Vector3F::new(1e-8, 1e-8, 0.0);
        assert!(!tiny.normalize());
        assert_eq!(tiny, Vector3F::ZERO);
    }

    #[test]
    fn test_vector3_normalize_huge_components() {
        let mut v = Vector3D::new(-2e160, 0.0, 0.0);
        assert!(v.normalize());
        assert_eq!(v, -Vector3D::X);

        let mut v = Vector3F::new(1e19, 2e19, 2e19);
        assert!(v.normalize());
        assert_abs_diff_eq!(v.module(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v, Vector3F::new(1.0, 2.0, 2.0) / 3.0, epsilon = 1e-6);

        let mut v = Vector3F::new(0.0, f32::NEG_INFINITY, 0.0);
        assert!(!v.normalize());
        assert_eq!(v, Vector3F::ZERO);
    }

    #[test]
    fn test_vector3_zero_unit_close() {
        assert!(Vector3D::ZERO.is_zero());
        assert!(Vector3D::Z.is_unit());
        assert!(!Vector3D::new(0.0, 2.0, 0.0).is_unit());
        assert!(Vector3D::new(1.0, 2.0, 3.0).is_close_to(&Vector3D::new(1.0, 2.0, 3.0)));
        assert!(!Vector3D::new(1.0, 2.0, 3.0).is_close_to(&Vector3D::new(1.0, 2.0, 3.1)));
    }

    #[test]
    fn test_vector3_precision_conversion() {
        let v = Vector3F::new(0.1, 0.2, 0.3);
        assert_eq!(v.to_double().to_float(), v);
        let d = Vector3D::new(0.1, 0.2, 0.3);
        assert_relative_eq!(d.to_float().to_double(), d, epsilon = 1e-7);
    }

    #[test]
    fn test_vector3_index() {
        let mut v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);
        v[1] = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    #[should_panic]
    fn test_vector3_index_out_of_bounds() {
        let v = Vector3D::ZERO;
        let _ = v[3];
    }
}
