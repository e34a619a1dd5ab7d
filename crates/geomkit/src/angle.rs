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

//! Angles stored in radians, convertible to degrees and gradians.
//!
//! An [`Angle`] is a measure, not a bearing: its value is never wrapped into
//! `[0, 2π)`. Adding a full turn to an angle yields a different angle.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use approx::{AbsDiffEq, RelativeEq};

use crate::error::GeometryError;
use crate::scalar::Scalar;

// --- AngleUnit ---

/// The unit in which an angular value is expressed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AngleUnit {
    /// Radians; the canonical storage unit.
    #[default]
    Radians = 0,
    /// Degrees, 360 per turn.
    Degrees = 1,
    /// Gradians, 400 per turn.
    Gradians = 2,
}

impl AngleUnit {
    /// How many of this unit make up one radian.
    #[inline]
    pub fn per_radian<T: Scalar>(self) -> T {
        match self {
            AngleUnit::Radians => T::UNIT,
            AngleUnit::Degrees => T::DEGREES_IN_RADIAN,
            AngleUnit::Gradians => T::GRADIANS_IN_RADIAN,
        }
    }

    /// Converts `value`, expressed in this unit, to radians.
    #[inline]
    pub fn to_radians<T: Scalar>(self, value: T) -> T {
        match self {
            AngleUnit::Radians => value,
            _ => value / self.per_radian::<T>(),
        }
    }

    /// Converts `radians` to a value expressed in this unit.
    #[inline]
    pub fn from_radians<T: Scalar>(self, radians: T) -> T {
        match self {
            AngleUnit::Radians => radians,
            _ => radians * self.per_radian::<T>(),
        }
    }

    /// The short suffix used when formatting and parsing.
    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Radians => "rad",
            AngleUnit::Degrees => "deg",
            AngleUnit::Gradians => "grad",
        }
    }
}

impl TryFrom<u8> for AngleUnit {
    type Error = GeometryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(AngleUnit::Radians),
            1 => Ok(AngleUnit::Degrees),
            2 => Ok(AngleUnit::Gradians),
            _ => Err(GeometryError::UnknownAngleUnit(code)),
        }
    }
}

impl FromStr for AngleUnit {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radians),
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degrees),
            "grad" | "gradian" | "gradians" => Ok(AngleUnit::Gradians),
            _ => Err(GeometryError::UnparsableAngleUnit(s.to_owned())),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

// --- Angle ---

/// An angular measure, stored as radians.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Angle<T: Scalar> {
    radians: T,
}

/// A single-precision angle.
pub type AngleF = Angle<f32>;
/// A double-precision angle.
pub type AngleD = Angle<f64>;

impl<T: Scalar> Angle<T> {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: T::ZERO };

    /// Creates an angle from a value in radians.
    #[inline]
    pub const fn from_radians(radians: T) -> Self {
        Self { radians }
    }

    /// Creates an angle from a value in degrees.
    #[inline]
    pub fn from_degrees(degrees: T) -> Self {
        Self::new(degrees, AngleUnit::Degrees)
    }

    /// Creates an angle from a value in gradians.
    #[inline]
    pub fn from_gradians(gradians: T) -> Self {
        Self::new(gradians, AngleUnit::Gradians)
    }

    /// Creates an angle from a value expressed in `unit`.
    #[inline]
    pub fn new(value: T, unit: AngleUnit) -> Self {
        Self {
            radians: unit.to_radians(value),
        }
    }

    /// Returns the value of the angle expressed in `unit`.
    #[inline]
    pub fn get(&self, unit: AngleUnit) -> T {
        unit.from_radians(self.radians)
    }

    /// Replaces the angle with `value` expressed in `unit`.
    #[inline]
    pub fn set(&mut self, value: T, unit: AngleUnit) {
        self.radians = unit.to_radians(value);
    }

    /// Copies the value of another angle of the same precision.
    #[inline]
    pub fn set_value_of(&mut self, angle: &Self) {
        self.radians = angle.radians;
    }

    /// Resets the angle to zero.
    #[inline]
    pub fn set_to_zero(&mut self) {
        self.radians = T::ZERO;
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(&self) -> T {
        self.radians
    }

    /// Replaces the angle with a value in radians.
    #[inline]
    pub fn set_radians(&mut self, radians: T) {
        self.radians = radians;
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(&self) -> T {
        self.get(AngleUnit::Degrees)
    }

    /// Replaces the angle with a value in degrees.
    #[inline]
    pub fn set_degrees(&mut self, degrees: T) {
        self.set(degrees, AngleUnit::Degrees);
    }

    /// Returns the angle in gradians.
    #[inline]
    pub fn gradians(&self) -> T {
        self.get(AngleUnit::Gradians)
    }

    /// Replaces the angle with a value in gradians.
    #[inline]
    pub fn set_gradians(&mut self, gradians: T) {
        self.set(gradians, AngleUnit::Gradians);
    }

    /// Adds `value`, expressed in `unit`, to the angle.
    #[inline]
    pub fn add_measure(&mut self, value: T, unit: AngleUnit) {
        self.radians += unit.to_radians(value);
    }

    /// Subtracts `value`, expressed in `unit`, from the angle.
    #[inline]
    pub fn subtract_measure(&mut self, value: T, unit: AngleUnit) {
        self.radians -= unit.to_radians(value);
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(&self) -> T {
        self.radians.cos()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(&self) -> T {
        self.radians.sin()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(&self) -> T {
        self.radians.tan()
    }

    /// Cotangent of the angle. Infinite at multiples of π, as IEEE 754 dictates.
    #[inline]
    pub fn cot(&self) -> T {
        T::UNIT / self.radians.tan()
    }

    /// Returns `true` if both angles differ by at most `EPSILON` radians.
    #[inline]
    pub fn is_close_to(&self, other: &Self) -> bool {
        (self.radians - other.radians).abs() <= T::EPSILON
    }

    /// Converts to a single-precision angle.
    #[inline]
    pub fn to_float(&self) -> Angle<f32> {
        Angle::from_radians(self.radians.as_f32())
    }

    /// Converts to a double-precision angle.
    #[inline]
    pub fn to_double(&self) -> Angle<f64> {
        Angle::from_radians(self.radians.as_f64())
    }
}

impl<T: Scalar> fmt::Display for Angle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.radians, AngleUnit::Radians)
    }
}

// SAFETY: `Angle<T>` is `repr(transparent)` over a `Pod` scalar.
unsafe impl<T: Scalar> bytemuck::Zeroable for Angle<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Angle<T> {}

// --- Operator Overloads ---

impl<T: Scalar> Add for Angle<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl<T: Scalar> Add<T> for Angle<T> {
    type Output = Self;
    /// Adds a raw value in radians.
    #[inline]
    fn add(self, radians: T) -> Self::Output {
        Self::from_radians(self.radians + radians)
    }
}

impl<T: Scalar> Sub for Angle<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl<T: Scalar> Sub<T> for Angle<T> {
    type Output = Self;
    /// Subtracts a raw value in radians.
    #[inline]
    fn sub(self, radians: T) -> Self::Output {
        Self::from_radians(self.radians - radians)
    }
}

impl<T: Scalar> Mul<T> for Angle<T> {
    type Output = Self;
    #[inline]
    fn mul(self, value: T) -> Self::Output {
        Self::from_radians(self.radians * value)
    }
}

impl<T: Scalar> Div<T> for Angle<T> {
    type Output = Self;
    #[inline]
    fn div(self, value: T) -> Self::Output {
        Self::from_radians(self.radians / value)
    }
}

impl<T: Scalar> Div for Angle<T> {
    type Output = T;
    /// The ratio between two angles.
    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.radians / rhs.radians
    }
}

impl<T: Scalar> Neg for Angle<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::from_radians(-self.radians)
    }
}

impl<T: Scalar> AddAssign for Angle<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.radians += rhs.radians;
    }
}

impl<T: Scalar> AddAssign<T> for Angle<T> {
    #[inline]
    fn add_assign(&mut self, radians: T) {
        self.radians += radians;
    }
}

impl<T: Scalar> SubAssign for Angle<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.radians -= rhs.radians;
    }
}

impl<T: Scalar> SubAssign<T> for Angle<T> {
    #[inline]
    fn sub_assign(&mut self, radians: T) {
        self.radians -= radians;
    }
}

impl<T: Scalar> MulAssign<T> for Angle<T> {
    #[inline]
    fn mul_assign(&mut self, value: T) {
        self.radians *= value;
    }
}

impl<T: Scalar> DivAssign<T> for Angle<T> {
    #[inline]
    fn div_assign(&mut self, value: T) {
        self.radians /= value;
    }
}

impl<T: Scalar> PartialEq<T> for Angle<T> {
    /// Compares the stored radians with a raw radian value, exactly.
    #[inline]
    fn eq(&self, radians: &T) -> bool {
        self.radians == *radians
    }
}

// --- Approximate Equality ---

impl<T: Scalar> AbsDiffEq for Angle<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.radians.abs_diff_eq(&other.radians, epsilon)
    }
}

impl<T: Scalar> RelativeEq for Angle<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.radians
            .relative_eq(&other.radians, epsilon, max_relative)
    }
}
