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

//! Provides a Quaternion type as a plain four-component value.
//!
//! Only the magnitude and conjugation operations are defined here; rotation
//! composition is left to callers.

use std::fmt;

use approx::{AbsDiffEq, RelativeEq};

use crate::scalar::{is_close_square, is_unit_square, is_zero_square, Scalar};

/// A quaternion stored as `(w, x, y, z)`, where `w` is the scalar part and
/// `[x, y, z]` is the vector part.
///
/// Nothing keeps the quaternion normalized; `is_unit` and `is_zero` are
/// derived predicates over the squared magnitude of all four components.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion<T: Scalar> {
    /// The scalar (real) part.
    pub w: T,
    /// The x component of the vector part.
    pub x: T,
    /// The y component of the vector part.
    pub y: T,
    /// The z component of the vector part.
    pub z: T,
}

/// A single-precision quaternion.
pub type QuaternionF = Quaternion<f32>;
/// A double-precision quaternion.
pub type QuaternionD = Quaternion<f64>;

impl<T: Scalar> Quaternion<T> {
    /// The quaternion with all four components set to zero.
    pub const ZERO: Self = Self {
        w: T::ZERO,
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    /// The identity quaternion `(1, 0, 0, 0)`.
    pub const IDENTITY: Self = Self {
        w: T::UNIT,
        x: T::ZERO,
        y: T::ZERO,
        z: T::ZERO,
    };

    /// Creates a new quaternion from its raw components.
    #[inline]
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// Replaces all four components.
    #[inline]
    pub fn set_values(&mut self, w: T, x: T, y: T, z: T) {
        *self = Self::new(w, x, y, z);
    }

    /// Copies the components of another quaternion of the same precision.
    #[inline]
    pub fn set_value_of(&mut self, quaternion: &Self) {
        *self = *quaternion;
    }

    /// Sets every component to zero.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Calculates the squared length (magnitude) of the quaternion.
    #[inline]
    pub fn square_module(&self) -> T {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the length (magnitude) of the quaternion.
    #[inline]
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

    /// Returns `true` if the sum of squared component differences does not
    /// exceed `SQUARE_EPSILON`.
    pub fn is_close_to(&self, other: &Self) -> bool {
        let dw = self.w - other.w;
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        is_close_square(dw * dw + dx * dx + dy * dy + dz * dz)
    }

    /// Component form of [`Quaternion::is_close_to`].
    #[inline]
    pub fn is_close_to_components(&self, w: T, x: T, y: T, z: T) -> bool {
        self.is_close_to(&Self::new(w, x, y, z))
    }

    /// Negates the vector part in place.
    #[inline]
    pub fn conjugate(&mut self) {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
    }

    /// Returns the conjugate, leaving `self` untouched.
    #[inline]
    pub fn conjugated(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Scales the quaternion to unit length in place.
    ///
    /// Follows the same contract as [`crate::Vector3::normalize`]: a
    /// near-zero or non-finite quaternion is reset to zero and `false` is
    /// returned.
    pub fn normalize(&mut self) -> bool {
        let mut square_module = self.square_module();

        if !square_module.is_finite() {
            // Finite components can still overflow once squared.
            let largest = self.w.abs().max(self.x.abs()).max(self.y.abs()).max(self.z.abs());
            self.w /= largest;
            self.x /= largest;
            self.y /= largest;
            self.z /= largest;
            square_module = self.square_module();
        }

        if !square_module.is_finite() || is_zero_square(square_module) {
            self.set_to_zero();
            return false;
        }

        let module = square_module.sqrt();
        self.w /= module;
        self.x /= module;
        self.y /= module;
        self.z /= module;
        true
    }

    /// Converts to a single-precision quaternion.
    #[inline]
    pub fn to_float(&self) -> Quaternion<f32> {
        Quaternion::new(
            self.w.as_f32(),
            self.x.as_f32(),
            self.y.as_f32(),
            self.z.as_f32(),
        )
    }

    /// Converts to a double-precision quaternion.
    #[inline]
    pub fn to_double(&self) -> Quaternion<f64> {
        Quaternion::new(
            self.w.as_f64(),
            self.x.as_f64(),
            self.y.as_f64(),
            self.z.as_f64(),
        )
    }
}

impl<T: Scalar> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}; {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

// SAFETY: `repr(C)` struct of four `Pod` scalars of one type, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Quaternion<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Quaternion<T> {}

impl<T: Scalar> AbsDiffEq for Quaternion<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Quaternion<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

// --- Tests ---
