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

use anyhow::Result;
use approx::assert_relative_eq;
use geomkit::{AngleD, AngleUnit, GeometryError, Matrix2x2F, Matrix3x3D, MatrixKind};

#[test]
fn test_angle_from_unit_code_and_name() -> Result<()> {
    let unit = AngleUnit::try_from(1_u8)?;
    let angle = AngleD::new(180.0, unit);
    assert_relative_eq!(angle.radians(), std::f64::consts::PI, epsilon = 1e-12);

    let unit: AngleUnit = " Gradians ".parse()?;
    assert_eq!(unit, AngleUnit::Gradians);
    assert_relative_eq!(angle.get(unit), 200.0, epsilon = 1e-10);

    let name = unit.to_string();
    assert_eq!(name.parse::<AngleUnit>()?, unit);
    Ok(())
}

#[test]
fn test_unknown_codes_are_rejected() {
    assert_eq!(
        AngleUnit::try_from(3_u8),
        Err(GeometryError::UnknownAngleUnit(3))
    );
    assert_eq!(
        "turns".parse::<AngleUnit>(),
        Err(GeometryError::UnparsableAngleUnit("turns".to_string()))
    );
    assert_eq!(
        MatrixKind::try_from(-1_i32),
        Err(GeometryError::UnknownMatrixKind(-1))
    );
}

#[test]
fn test_errors_propagate_through_anyhow() {
    fn unit_from_config(text: &str) -> Result<AngleUnit> {
        Ok(text.parse::<AngleUnit>()?)
    }

    let err = unit_from_config("furlongs").unwrap_err();
    assert_eq!(err.to_string(), "cannot parse 'furlongs' as an angle unit");
    assert!(err.downcast_ref::<GeometryError>().is_some());
}

#[test]
fn test_matrix_from_kind_tag() -> Result<()> {
    let identity = Matrix3x3D::of_kind(MatrixKind::try_from(1_i32)?);
    assert_eq!(identity, Matrix3x3D::IDENTITY);

    let zero = Matrix2x2F::of_kind(MatrixKind::try_from(0_i32)?);
    assert_eq!(zero.determinant(), 0.0);
    Ok(())
}
