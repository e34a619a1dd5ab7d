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

//! Rigid transforms: a rotation matrix followed by a shift.

use approx::{AbsDiffEq, RelativeEq};

use crate::angle::Angle;
use crate::matrix::{Matrix2x2, Matrix3x3};
use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3};

// --- Converter2 ---

/// Maps planar points through `rotation * point + shift`.
///
/// The rotation matrix is not required to be orthonormal unless it was built
/// from an angle.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Converter2<T: Scalar> {
    /// The linear part.
    pub rotation: Matrix2x2<T>,
    /// The translation applied after the linear part.
    pub shift: Vector2<T>,
}

/// A single-precision 2D converter.
pub type Converter2F = Converter2<f32>;
/// A double-precision 2D converter.
pub type Converter2D = Converter2<f64>;

impl<T: Scalar> Converter2<T> {
    /// The identity transform, which results in no change.
    pub const IDENTITY: Self = Self {
        rotation: Matrix2x2::IDENTITY,
        shift: Vector2::ZERO,
    };

    /// Creates a converter from a linear part and a shift.
    #[inline]
    pub fn new(rotation: Matrix2x2<T>, shift: Vector2<T>) -> Self {
        Self { rotation, shift }
    }

    /// Creates a counter-clockwise rotation by `angle` followed by `shift`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geomkit::{AngleD, Converter2D, Vector2D};
    /// use approx::assert_relative_eq;
    ///
    /// let quarter = AngleD::from_degrees(90.0);
    /// let turn = Converter2D::from_angle_and_shift(quarter, Vector2D::new(1.0, 0.0));
    /// assert_relative_eq!(turn.convert(Vector2D::X), Vector2D::new(1.0, 1.0), epsilon = 1e-12);
    /// ```
    #[inline]
    pub fn from_angle_and_shift(angle: Angle<T>, shift: Vector2<T>) -> Self {
        let mut converter = Self::IDENTITY;
        converter.build_from_angle_and_shift(angle, shift);
        converter
    }

    /// Resets to the identity transform.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Overwrites the rotation with `[[cos, -sin], [sin, cos]]` of `angle` and
    /// stores `shift`.
    pub fn build_from_angle_and_shift(&mut self, angle: Angle<T>, shift: Vector2<T>) {
        let (sin, cos) = angle.radians().sin_cos();
        self.rotation = Matrix2x2::new(cos, -sin, sin, cos);
        self.shift = shift;
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn convert(&self, point: Vector2<T>) -> Vector2<T> {
        self.rotation * point + self.shift
    }

    /// Converts to a single-precision converter.
    #[inline]
    pub fn to_float(&self) -> Converter2<f32> {
        Converter2::new(self.rotation.to_float(), self.shift.to_float())
    }

    /// Converts to a double-precision converter.
    #[inline]
    pub fn to_double(&self) -> Converter2<f64> {
        Converter2::new(self.rotation.to_double(), self.shift.to_double())
    }
}

// SAFETY: `repr(C)` matrix and vector of one `Pod` scalar type, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Converter2<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Converter2<T> {}

impl<T: Scalar> AbsDiffEq for Converter2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rotation.abs_diff_eq(&other.rotation, epsilon)
            && self.shift.abs_diff_eq(&other.shift, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Converter2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rotation.relative_eq(&other.rotation, epsilon, max_relative)
            && self.shift.relative_eq(&other.shift, epsilon, max_relative)
    }
}

// --- Converter3 ---

/// Maps points in space through `rotation * point + shift`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Converter3<T: Scalar> {
    /// The linear part.
    pub rotation: Matrix3x3<T>,
    /// The translation applied after the linear part.
    pub shift: Vector3<T>,
}

/// A single-precision 3D converter.
pub type Converter3F = Converter3<f32>;
/// A double-precision 3D converter.
pub type Converter3D = Converter3<f64>;

impl<T: Scalar> Converter3<T> {
    /// The identity transform, which results in no change.
    pub const IDENTITY: Self = Self {
        rotation: Matrix3x3::IDENTITY,
        shift: Vector3::ZERO,
    };

    /// Creates a converter from a linear part and a shift.
    #[inline]
    pub fn new(rotation: Matrix3x3<T>, shift: Vector3<T>) -> Self {
        Self { rotation, shift }
    }

    /// Resets to the identity transform.
    #[inline]
    pub fn load_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Applies the transform to a point.
    #[inline]
    pub fn convert(&self, point: Vector3<T>) -> Vector3<T> {
        self.rotation * point + self.shift
    }

    /// Converts to a single-precision converter.
    #[inline]
    pub fn to_float(&self) -> Converter3<f32> {
        Converter3::new(self.rotation.to_float(), self.shift.to_float())
    }

    /// Converts to a double-precision converter.
    #[inline]
    pub fn to_double(&self) -> Converter3<f64> {
        Converter3::new(self.rotation.to_double(), self.shift.to_double())
    }
}

// SAFETY: `repr(C)` matrix and vector of one `Pod` scalar type, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Converter3<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Converter3<T> {}

impl<T: Scalar> AbsDiffEq for Converter3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rotation.abs_diff_eq(&other.rotation, epsilon)
            && self.shift.abs_diff_eq(&other.shift, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Converter3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rotation.relative_eq(&other.rotation, epsilon, max_relative)
            && self.shift.relative_eq(&other.shift, epsilon, max_relative)
    }
}

// --- Tests ---
