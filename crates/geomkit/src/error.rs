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

//! Error type for the few fallible decoding operations of the crate.
//!
//! Numeric degeneracy (normalizing a zero vector, building a line from a zero
//! direction) is not an error: it is reported through `bool` results and the
//! line validity flag. Only decoding tags and unit names can fail.

use thiserror::Error;

/// An error raised while decoding a tag or a unit name into a geometry enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The numeric code does not name an [`AngleUnit`](crate::AngleUnit).
    #[error("unknown angle unit code {0}, expected 0 (radians), 1 (degrees) or 2 (gradians)")]
    UnknownAngleUnit(u8),
    /// The text does not name an [`AngleUnit`](crate::AngleUnit).
    #[error("cannot parse '{0}' as an angle unit")]
    UnparsableAngleUnit(String),
    /// The numeric tag does not name a [`MatrixKind`](crate::MatrixKind).
    #[error("unknown matrix kind tag {0}, expected 0 (zero) or 1 (identity)")]
    UnknownMatrixKind(i32),
}

/// A specialized `Result` type for geometry decoding operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
