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

//! The scalar abstraction and the tolerance policy shared by every primitive.
//!
//! Every geometric type in this crate is generic over a [`Scalar`], which is
//! implemented for exactly two types: `f32` and `f64`. Each precision carries
//! its own tolerance constants, and the predicates at the bottom of this module
//! are the single definition of "close to zero" and "close to one" used by
//! vectors, quaternions and the line validity flag.

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use approx::RelativeEq;
use num_traits::Float;

/// A floating-point scalar with its precision-specific numeric policy.
///
/// The trait is sealed in practice: the crate only implements it for `f32` and
/// `f64`, and the tolerance constants are chosen for those two formats.
pub trait Scalar:
    Float
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Default
    + Debug
    + Display
    + RelativeEq<Epsilon = Self>
    + bytemuck::Pod
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity, also the reference value of `is_unit` checks.
    const UNIT: Self;
    /// The constant `2`.
    const TWO: Self;
    /// The constant `3`.
    const THREE: Self;

    /// Largest deviation still treated as "equal" for plain values.
    const EPSILON: Self;
    /// `-EPSILON`.
    const NEGATIVE_EPSILON: Self;
    /// Threshold for squared magnitudes (`EPSILON²` scale).
    const SQUARE_EPSILON: Self;
    /// `-SQUARE_EPSILON`.
    const NEGATIVE_SQUARE_EPSILON: Self;

    /// Number of degrees in one radian.
    const DEGREES_IN_RADIAN: Self;
    /// Number of gradians in one radian.
    const GRADIANS_IN_RADIAN: Self;
    /// Number of degrees in one gradian.
    const DEGREES_IN_GRADIAN: Self;

    /// Converts to single precision, rounding if needed.
    fn as_f32(self) -> f32;

    /// Converts to double precision.
    fn as_f64(self) -> f64;
}

impl Scalar for f32 {
    const ZERO: Self = 0.0;
    const UNIT: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;

    const EPSILON: Self = 1e-7;
    const NEGATIVE_EPSILON: Self = -1e-7;
    const SQUARE_EPSILON: Self = 1e-14;
    const NEGATIVE_SQUARE_EPSILON: Self = -1e-14;

    #[allow(clippy::excessive_precision)]
    const DEGREES_IN_RADIAN: Self = 57.295_779_513_082_320_9;
    #[allow(clippy::excessive_precision)]
    const GRADIANS_IN_RADIAN: Self = 63.661_977_236_758_134_3;
    const DEGREES_IN_GRADIAN: Self = 0.9;

    #[inline]
    fn as_f32(self) -> f32 {
        self
    }

    #[inline]
    fn as_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const UNIT: Self = 1.0;
    const TWO: Self = 2.0;
    const THREE: Self = 3.0;

    const EPSILON: Self = 1e-15;
    const NEGATIVE_EPSILON: Self = -1e-15;
    const SQUARE_EPSILON: Self = 1e-30;
    const NEGATIVE_SQUARE_EPSILON: Self = -1e-30;

    #[allow(clippy::excessive_precision)]
    const DEGREES_IN_RADIAN: Self = 57.295_779_513_082_320_9;
    #[allow(clippy::excessive_precision)]
    const GRADIANS_IN_RADIAN: Self = 63.661_977_236_758_134_3;
    const DEGREES_IN_GRADIAN: Self = 0.9;

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn as_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

// --- Tolerance predicates ---

/// Returns `true` if a squared magnitude is small enough to be treated as zero.
#[inline]
pub fn is_zero_square<T: Scalar>(square: T) -> bool {
    square <= T::SQUARE_EPSILON
}

/// Returns `true` if a squared magnitude is within `EPSILON` of one.
#[inline]
pub fn is_unit_square<T: Scalar>(square: T) -> bool {
    let difference = square - T::UNIT;
    T::NEGATIVE_EPSILON <= difference && difference <= T::EPSILON
}

/// Returns `true` if the squared distance between two values is negligible.
///
/// Same threshold as [`is_zero_square`]; kept separate so call sites read as
/// "these two things are close" rather than "this thing is zero".
#[inline]
pub fn is_close_square<T: Scalar>(square_of_difference: T) -> bool {
    square_of_difference <= T::SQUARE_EPSILON
}
