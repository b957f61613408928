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

//! # gmath
//!
//! Single-precision math primitives for games and simulations: unit-tagged
//! angles, 2D/3D/4D vectors, quaternions and 4x4 transform matrices.
//!
//! The interesting part is the rotation and transform subsystem. Quaternions
//! convert to and from rotation matrices and YXZ Euler angles, interpolate with
//! `slerp`, and can be built from look directions or shortest arcs. [`Mat4`]
//! composes translation, rotation and scale, inverts by cofactor expansion and
//! transforms points and directions.
//!
//! Every operation that can hit a numerical singularity reports it through
//! [`MathResult`] instead of silently returning identity or NaN.
//!
//! ```
//! use gmath::{Mat4, Quaternion, Vec3};
//!
//! let rotation = Quaternion::from_euler_angles(Vec3::new(10.0, 20.0, 30.0));
//! let transform = Mat4::from_trs(Vec3::new(0.0, 1.0, 2.0), rotation, Vec3::ONE);
//! let inverse = transform.inverse().unwrap();
//!
//! let p = Vec3::new(100.0, 200.0, 300.0);
//! let back = inverse.transform_point3(transform.transform_point3(p));
//! assert!(back.distance(p) < 0.1);
//! ```

#![warn(missing_docs)]

// --- Fundamental Constants ---

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

/// The coarse tolerance used by quaternion normalization, equality and slerp.
///
/// Squared norms within this distance of `1.0` count as already normalized, and
/// squared norms below it cannot be normalized at all.
pub const QUATERNION_EPSILON: f32 = 0.001;

// Re-export standard mathematical constants for convenience.
pub use std::f32::consts::{
    E, FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, LN_10, LN_2, LOG10_E, LOG2_E, PI,
    SQRT_2, TAU,
};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;
/// The factor to convert radians to degrees (180.0 / PI).
pub const RAD_TO_DEG: f32 = 180.0 / PI;

// --- Declare Sub-Modules ---

pub mod angle;
pub mod error;
pub mod matrix;
pub mod quaternion;
#[cfg(feature = "random")]
pub mod random;
pub mod scalar;
pub mod vector;

// --- Re-export Principal Types ---

pub use self::angle::{Degrees, Radians};
pub use self::error::{MathError, MathResult};
pub use self::matrix::Mat4;
pub use self::quaternion::Quaternion;
pub use self::scalar::{
    approx_eq, approx_eq_eps, clamp, clamp01, is_zero, is_zero_eps, lerp, lerp_unclamped,
    move_towards, saturate,
};
pub use self::vector::{Vec2, Vec3, Vec4};
