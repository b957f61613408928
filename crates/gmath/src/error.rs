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

//! Error type for operations that can hit a numerical singularity.

use thiserror::Error;

/// A specialized `Result` type for fallible math operations.
pub type MathResult<T> = Result<T, MathError>;

/// An input for which a rotation or transform is not defined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    /// The quaternion is too close to zero to be normalized or inverted.
    #[error("quaternion with squared norm {norm_squared} cannot be normalized")]
    DegenerateQuaternion {
        /// The squared norm that fell below the threshold.
        norm_squared: f32,
    },
    /// The matrix has no inverse.
    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix {
        /// The determinant that was computed.
        determinant: f32,
    },
    /// A direction argument was too short to normalize.
    #[error("direction vector has zero length")]
    ZeroLengthVector,
    /// Two directions that must span a plane are collinear.
    #[error("direction vectors are parallel")]
    ParallelVectors,
}
