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

//! Defines the `Matrix2x2` and `Matrix3x3` types and associated operations.
//!
//! Both matrices are stored row-major as arrays of row vectors, so
//! `m[i]` is the i-th row and `m[i][j]` the cell on row `i`, column `j`.

use std::fmt;
use std::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::error::GeometryError;
use crate::scalar::{is_close_square, Scalar};
use crate::vector::{Vector2, Vector3};

/// Selects the initial content of a freshly built matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum MatrixKind {
    /// Every cell is zero.
    Zero = 0,
    /// Ones on the diagonal, zeros elsewhere.
    Identity = 1,
}

impl TryFrom<i32> for MatrixKind {
    type Error = GeometryError;

    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(MatrixKind::Zero),
            1 => Ok(MatrixKind::Identity),
            other => Err(GeometryError::UnknownMatrixKind(other)),
        }
    }
}

// --- Matrix2x2 ---

/// A 2x2 row-major matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix2x2<T: Scalar> {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vector2<T>; 2],
}

/// A single-precision 2x2 matrix.
pub type Matrix2x2F = Matrix2x2<f32>;
/// A double-precision 2x2 matrix.
pub type Matrix2x2D = Matrix2x2<f64>;

impl<T: Scalar> Matrix2x2<T> {
    /// The 2x2 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vector2::X, Vector2::Y],
    };

    /// A 2x2 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vector2::ZERO; 2],
    };

    /// Builds a zero or identity matrix.
    #[inline]
    pub fn of_kind(kind: MatrixKind) -> Self {
        match kind {
            MatrixKind::Zero => Self::ZERO,
            MatrixKind::Identity => Self::IDENTITY,
        }
    }

    /// Creates a new matrix from two row vectors.
    #[inline]
    pub fn from_rows(r0: Vector2<T>, r1: Vector2<T>) -> Self {
        Self { rows: [r0, r1] }
    }

    /// Creates a new matrix from its cells, listed row by row.
    #[inline]
    pub fn new(r1c1: T, r1c2: T, r2c1: T, r2c2: T) -> Self {
        Self::from_rows(Vector2::new(r1c1, r1c2), Vector2::new(r2c1, r2c2))
    }

    /// Resets the matrix to identity.
    #[inline]
    pub fn set_to_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Resets every cell to zero.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Computes the determinant of the matrix.
    #[inline]
    pub fn determinant(&self) -> T {
        let [r0, r1] = self.rows;
        r0.x * r1.y - r0.y * r1.x
    }

    /// Returns a copy of the row at `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn row(&self, index: usize) -> Vector2<T> {
        self.rows[index]
    }

    /// Returns the column at `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    pub fn column(&self, index: usize) -> Vector2<T> {
        Vector2::new(self.rows[0][index], self.rows[1][index])
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1))
    }

    /// Returns `true` if the sum of squared cell differences does not exceed `SQUARE_EPSILON`.
    pub fn is_close_to(&self, other: &Self) -> bool {
        let sum = (self.rows[0] - other.rows[0]).square_module()
            + (self.rows[1] - other.rows[1]).square_module();
        is_close_square(sum)
    }

    /// Converts to a single-precision matrix.
    #[inline]
    pub fn to_float(&self) -> Matrix2x2<f32> {
        Matrix2x2::from_rows(self.rows[0].to_float(), self.rows[1].to_float())
    }

    /// Converts to a double-precision matrix.
    #[inline]
    pub fn to_double(&self) -> Matrix2x2<f64> {
        Matrix2x2::from_rows(self.rows[0].to_double(), self.rows[1].to_double())
    }
}

impl<T: Scalar> Default for Matrix2x2<T> {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> fmt::Display for Matrix2x2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.rows[0], self.rows[1])
    }
}

// SAFETY: `repr(C)` array of `Pod` row vectors, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Matrix2x2<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Matrix2x2<T> {}

impl<T: Scalar> Mul<Vector2<T>> for Matrix2x2<T> {
    type Output = Vector2<T>;
    /// Applies the linear map to a vector.
    #[inline]
    fn mul(self, v: Vector2<T>) -> Self::Output {
        Vector2::new(self.rows[0].scalar(&v), self.rows[1].scalar(&v))
    }
}

impl<T: Scalar> Mul<Matrix2x2<T>> for Matrix2x2<T> {
    type Output = Self;
    /// Composes two matrices (`self` applied after `rhs`).
    #[inline]
    fn mul(self, rhs: Matrix2x2<T>) -> Self::Output {
        let c0 = rhs.column(0);
        let c1 = rhs.column(1);
        Self::new(
            self.rows[0].scalar(&c0),
            self.rows[0].scalar(&c1),
            self.rows[1].scalar(&c0),
            self.rows[1].scalar(&c1),
        )
    }
}

impl<T: Scalar> MulAssign<Matrix2x2<T>> for Matrix2x2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix2x2<T>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Matrix2x2<T> {
    type Output = Self;
    /// Multiplies every cell by a scalar.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self::from_rows(self.rows[0] * rhs, self.rows[1] * rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix2x2<T> {
    type Output = Self;
    /// Divides every cell by a scalar. A zero divisor follows IEEE 754.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self::from_rows(self.rows[0] / rhs, self.rows[1] / rhs)
    }
}

impl<T: Scalar> MulAssign<T> for Matrix2x2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.rows[0] *= rhs;
        self.rows[1] *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Matrix2x2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.rows[0] /= rhs;
        self.rows[1] /= rhs;
    }
}

impl<T: Scalar> Index<usize> for Matrix2x2<T> {
    type Output = Vector2<T>;
    /// Allows accessing a row of the matrix by index.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix2x2<T> {
    /// Allows mutably accessing a row of the matrix by index.
    ///
    /// # Panics
    /// Panics if `index` is greater than 1.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<T: Scalar> AbsDiffEq for Matrix2x2<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rows[0].abs_diff_eq(&other.rows[0], epsilon)
            && self.rows[1].abs_diff_eq(&other.rows[1], epsilon)
    }
}

impl<T: Scalar> RelativeEq for Matrix2x2<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rows[0].relative_eq(&other.rows[0], epsilon, max_relative)
            && self.rows[1].relative_eq(&other.rows[1], epsilon, max_relative)
    }
}

// --- Matrix3x3 ---

/// A 3x3 row-major matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Matrix3x3<T: Scalar> {
    /// The rows of the matrix. `rows[0]` is the first row, and so on.
    pub rows: [Vector3<T>; 3],
}

/// A single-precision 3x3 matrix.
pub type Matrix3x3F = Matrix3x3<f32>;
/// A double-precision 3x3 matrix.
pub type Matrix3x3D = Matrix3x3<f64>;

impl<T: Scalar> Matrix3x3<T> {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        rows: [Vector3::X, Vector3::Y, Vector3::Z],
    };

    /// A 3x3 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        rows: [Vector3::ZERO; 3],
    };

    /// Builds a zero or identity matrix.
    #[inline]
    pub fn of_kind(kind: MatrixKind) -> Self {
        match kind {
            MatrixKind::Zero => Self::ZERO,
            MatrixKind::Identity => Self::IDENTITY,
        }
    }

    /// Creates a new matrix from three row vectors.
    #[inline]
    pub fn from_rows(r0: Vector3<T>, r1: Vector3<T>, r2: Vector3<T>) -> Self {
        Self { rows: [r0, r1, r2] }
    }

    /// Creates a new matrix from its nine cells, listed row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(
        r1c1: T,
        r1c2: T,
        r1c3: T,
        r2c1: T,
        r2c2: T,
        r2c3: T,
        r3c1: T,
        r3c2: T,
        r3c3: T,
    ) -> Self {
        Self::from_rows(
            Vector3::new(r1c1, r1c2, r1c3),
            Vector3::new(r2c1, r2c2, r2c3),
            Vector3::new(r3c1, r3c2, r3c3),
        )
    }

    /// Resets the matrix to identity.
    #[inline]
    pub fn set_to_identity(&mut self) {
        *self = Self::IDENTITY;
    }

    /// Resets every cell to zero.
    #[inline]
    pub fn set_to_zero(&mut self) {
        *self = Self::ZERO;
    }

    /// Computes the determinant by cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> T {
        let [r0, r1, r2] = self.rows;
        r0.x * (r1.y * r2.z - r1.z * r2.y) - r0.y * (r1.x * r2.z - r1.z * r2.x)
            + r0.z * (r1.x * r2.y - r1.y * r2.x)
    }

    /// Returns a copy of the row at `index`.
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn row(&self, index: usize) -> Vector3<T> {
        self.rows[index]
    }

    /// Returns the column at `index` as a vector.
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    pub fn column(&self, index: usize) -> Vector3<T> {
        Vector3::new(
            self.rows[0][index],
            self.rows[1][index],
            self.rows[2][index],
        )
    }

    /// Returns the transpose of the matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2))
    }

    /// Returns `true` if the sum of squared cell differences does not exceed `SQUARE_EPSILON`.
    pub fn is_close_to(&self, other: &Self) -> bool {
        let sum = self
            .rows
            .iter()
            .zip(other.rows.iter())
            .fold(T::ZERO, |acc, (a, b)| acc + (*a - *b).square_module());
        is_close_square(sum)
    }

    /// Converts to a single-precision matrix.
    #[inline]
    pub fn to_float(&self) -> Matrix3x3<f32> {
        Matrix3x3 {
            rows: self.rows.map(|row| row.to_float()),
        }
    }

    /// Converts to a double-precision matrix.
    #[inline]
    pub fn to_double(&self) -> Matrix3x3<f64> {
        Matrix3x3 {
            rows: self.rows.map(|row| row.to_double()),
        }
    }
}

impl<T: Scalar> Default for Matrix3x3<T> {
    /// Returns the identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar> fmt::Display for Matrix3x3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.rows[0], self.rows[1], self.rows[2])
    }
}

// SAFETY: `repr(C)` array of `Pod` row vectors, no padding.
unsafe impl<T: Scalar> bytemuck::Zeroable for Matrix3x3<T> {}
unsafe impl<T: Scalar> bytemuck::Pod for Matrix3x3<T> {}

impl<T: Scalar> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;
    /// Applies the linear map to a vector.
    #[inline]
    fn mul(self, v: Vector3<T>) -> Self::Output {
        Vector3::new(
            self.rows[0].scalar(&v),
            self.rows[1].scalar(&v),
            self.rows[2].scalar(&v),
        )
    }
}

impl<T: Scalar> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Self;
    /// Composes two matrices (`self` applied after `rhs`): every cell is the
    /// dot product of a row of `self` with a column of `rhs`.
    #[inline]
    fn mul(self, rhs: Matrix3x3<T>) -> Self::Output {
        let columns = [rhs.column(0), rhs.column(1), rhs.column(2)];
        Self {
            rows: self.rows.map(|row| {
                Vector3::new(
                    row.scalar(&columns[0]),
                    row.scalar(&columns[1]),
                    row.scalar(&columns[2]),
                )
            }),
        }
    }
}

impl<T: Scalar> MulAssign<Matrix3x3<T>> for Matrix3x3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix3x3<T>) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Matrix3x3<T> {
    type Output = Self;
    /// Multiplies every cell by a scalar.
    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Self {
            rows: self.rows.map(|row| row * rhs),
        }
    }
}

impl<T: Scalar> Div<T> for Matrix3x3<T> {
    type Output = Self;
    /// Divides every cell by a scalar. A zero divisor follows IEEE 754.
    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Self {
            rows: self.rows.map(|row| row / rhs),
        }
    }
}

impl<T: Scalar> MulAssign<T> for Matrix3x3<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        for row in &mut self.rows {
            *row *= rhs;
        }
    }
}

impl<T: Scalar> DivAssign<T> for Matrix3x3<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        for row in &mut self.rows {
            *row /= rhs;
        }
    }
}

impl<T: Scalar> Index<usize> for Matrix3x3<T> {
    type Output = Vector3<T>;
    /// Allows accessing a row of the matrix by index.
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Matrix3x3<T> {
    /// Allows mutably accessing a row of the matrix by index.
    ///
    /// # Panics
    /// Panics if `index` is greater than 2.
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.rows[index]
    }
}

impl<T: Scalar> AbsDiffEq for Matrix3x3<T> {
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: Scalar> RelativeEq for Matrix3x3<T> {
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::{Vector2D, Vector3D, Vector3F};
    use approx::assert_relative_eq;

    fn sample_mat3() -> Matrix3x3D {
        Matrix3x3D::new(2.0, 1.0, 0.0, 0.0, 3.0, 1.0, 1.0, 0.0, 4.0)
    }

    #[test]
    fn test_matrix_kind_from_tag() {
        assert_eq!(MatrixKind::try_from(0_i32), Ok(MatrixKind::Zero));
        assert_eq!(MatrixKind::try_from(1_i32), Ok(MatrixKind::Identity));
        assert_eq!(
            MatrixKind::try_from(7_i32),
            Err(GeometryError::UnknownMatrixKind(7))
        );
    }

    // --- Tests for Matrix2x2 ---

    #[test]
    fn test_mat2_identity_default() {
        assert_eq!(Matrix2x2D::default(), Matrix2x2D::IDENTITY);
        assert_eq!(Matrix2x2D::of_kind(MatrixKind::Identity), Matrix2x2D::IDENTITY);
        assert_eq!(Matrix2x2D::of_kind(MatrixKind::Zero), Matrix2x2D::ZERO);
        assert_eq!(Matrix2x2D::IDENTITY * Matrix2x2D::IDENTITY, Matrix2x2D::IDENTITY);

        let v = Vector2D::new(-3.5, 8.0);
        assert_eq!(Matrix2x2D::IDENTITY * v, v);
    }

    #[test]
    fn test_mat2_determinant() {
        assert_eq!(Matrix2x2D::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix2x2D::ZERO.determinant(), 0.0);
        assert_eq!(Matrix2x2D::new(1.0, 2.0, 3.0, 4.0).determinant(), -2.0);
    }

    #[test]
    fn test_mat2_mul_vec2() {
        let m = Matrix2x2D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m * Vector2D::new(1.0, 1.0), Vector2D::new(3.0, 7.0));
    }

    #[test]
    fn test_mat2_mul_mat2() {
        let a = Matrix2x2D::new(1.0, 2.0, 3.0, 4.0);
        let b = Matrix2x2D::new(0.0, 1.0, 5.0, -2.0);
        let product = a * b;
        assert_eq!(product, Matrix2x2D::new(10.0, -3.0, 20.0, -5.0));
        assert_eq!(product.determinant(), a.determinant() * b.determinant());

        let mut c = a;
        c *= b;
        assert_eq!(c, product);
    }

    #[test]
    fn test_mat2_rows_and_columns() {
        let m = Matrix2x2D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m.row(1), Vector2D::new(3.0, 4.0));
        assert_eq!(m.column(1), Vector2D::new(2.0, 4.0));
        assert_eq!(m.transpose(), Matrix2x2D::new(1.0, 3.0, 2.0, 4.0));
        assert_eq!(m.transpose().row(0), m.column(0));
        assert_eq!(m[0][1], 2.0);
    }

    #[test]
    fn test_mat2_scalar_ops() {
        let m = Matrix2x2D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(m * 2.0, Matrix2x2D::new(2.0, 4.0, 6.0, 8.0));
        assert_eq!(m / 2.0, Matrix2x2D::new(0.5, 1.0, 1.5, 2.0));

        let mut n = m;
        n *= 4.0;
        n /= 2.0;
        assert_eq!(n, m * 2.0);
    }

    #[test]
    fn test_mat2_set_and_index_mut() {
        let mut m = Matrix2x2F::ZERO;
        m[1][0] = 5.0;
        assert_eq!(m.column(0), crate::vector::Vector2F::new(0.0, 5.0));
        m.set_to_identity();
        assert_eq!(m, Matrix2x2F::IDENTITY);
        m.set_to_zero();
        assert_eq!(m, Matrix2x2F::ZERO);
    }

    #[test]
    fn test_mat2_close_and_precision() {
        let m = Matrix2x2D::new(0.1, 0.2, 0.3, 0.4);
        assert!(m.is_close_to(&Matrix2x2D::new(0.1, 0.2, 0.3, 0.4 + 1e-17)));
        assert!(!m.is_close_to(&Matrix2x2D::new(0.1, 0.2, 0.3, 0.41)));
        assert_eq!(m.to_float().to_double().to_float(), m.to_float());
        assert_relative_eq!(m.to_float().to_double(), m, epsilon = 1e-7);
    }

    #[test]
    fn test_mat2_display() {
        assert_eq!(
            Matrix2x2D::new(1.0, 2.0, 3.0, 4.0).to_string(),
            "[(1, 2), (3, 4)]"
        );
    }

    // --- Tests for Matrix3x3 ---

    #[test]
    fn test_mat3_identity_default() {
        assert_eq!(Matrix3x3D::default(), Matrix3x3D::IDENTITY);
        assert_eq!(Matrix3x3D::of_kind(MatrixKind::Zero), Matrix3x3D::ZERO);

        let m = sample_mat3();
        assert_eq!(m * Matrix3x3D::IDENTITY, m);
        assert_eq!(Matrix3x3D::IDENTITY * m, m);

        let v = Vector3D::new(1.0, -2.0, 0.25);
        assert_eq!(Matrix3x3D::IDENTITY * v, v);
    }

    #[test]
    fn test_mat3_determinant() {
        assert_eq!(Matrix3x3D::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix3x3D::ZERO.determinant(), 0.0);
        assert_eq!(sample_mat3().determinant(), 25.0);

        let singular = Matrix3x3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(singular.determinant(), 0.0);
    }

    #[test]
    fn test_mat3_mul_mat3() {
        let a = sample_mat3();
        let b = Matrix3x3D::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
        assert_eq!(b.determinant(), 1.0);

        // Every one of the nine cells takes part in the product.
        let product = a * b;
        assert_eq!(
            product,
            Matrix3x3D::new(2.0, 5.0, 10.0, 5.0, 9.0, 12.0, 21.0, 26.0, 3.0)
        );
        assert_eq!(product.determinant(), a.determinant() * b.determinant());

        let mut c = a;
        c *= b;
        assert_eq!(c, product);
    }

    #[test]
    fn test_mat3_mul_vec3() {
        let m = sample_mat3();
        assert_eq!(m * Vector3D::new(1.0, 1.0, 1.0), Vector3D::new(3.0, 4.0, 5.0));
        assert_eq!(m * Vector3D::Z, m.column(2));
    }

    #[test]
    fn test_mat3_transpose() {
        let m = Matrix3x3D::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let expected = Matrix3x3D::new(1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0);
        assert_eq!(m.transpose(), expected);
        assert_eq!(m.transpose().transpose(), m);
        for i in 0..3 {
            assert_eq!(m.row(i), m.transpose().column(i));
        }
    }

    #[test]
    fn test_mat3_scalar_ops() {
        let m = sample_mat3();
        assert_eq!((m * 2.0).determinant(), 8.0 * m.determinant());
        assert_eq!(m / 1.0, m);

        let mut n = m;
        n *= 3.0;
        n /= 3.0;
        assert_eq!(n, m);
    }

    #[test]
    fn test_mat3_precision_conversion() {
        let m = Matrix3x3F::new(0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9);
        assert_eq!(m.to_double().to_float(), m);
        assert!(m.is_close_to(&m.to_double().to_float()));
        assert_eq!(m.row(2), Vector3F::new(0.7, 0.8, 0.9));
    }

    #[test]
    fn test_mat3_index() {
        let mut m = Matrix3x3D::IDENTITY;
        assert_eq!(m[1], Vector3D::Y);
        m[2][0] = 4.0;
        assert_eq!(m.column(0), Vector3D::new(1.0, 0.0, 4.0));
    }

    #[test]
    #[should_panic]
    fn test_mat3_index_out_of_bounds() {
        let m = Matrix3x3D::IDENTITY;
        let _ = m[3];
    }
}
