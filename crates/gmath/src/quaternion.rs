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

//! Provides a Quaternion type for representing 3D rotations.
//!
//! Euler angles are expressed in degrees as a [`Vec3`] of `(pitch, yaw, roll)`
//! and applied in YXZ order: yaw about [`Vec3::UP`], then pitch about
//! [`Vec3::RIGHT`], then roll about [`Vec3::FORWARD`].

use approx::AbsDiffEq;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::angle::{Degrees, Radians};
use crate::error::{MathError, MathResult};
use crate::scalar::{approx_eq_eps, clamp01, is_zero};
use crate::{Mat4, Vec3, EPSILON, QUATERNION_EPSILON};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

/// Rotation matrix entry beyond which pitch is treated as locked at +/-90 degrees.
const GIMBAL_LOCK_THRESHOLD: f32 = 0.999;

/// Squared sine below which `from_to` treats opposite inputs as exactly antiparallel.
const ANTIPARALLEL_SIN_SQ: f64 = 1e-24;

/// `|dot|` above which two rotations are reported as zero degrees apart.
const SAME_ROTATION_DOT: f32 = 0.999_999;

/// Represents a quaternion for efficient 3D rotations.
///
/// A quaternion is stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part
/// and `w` is the "scalar" part. For representing rotations, it should be a "unit
/// quaternion" where `x² + y² + z² + w² = 1`. `q` and `-q` encode the same rotation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// Note: This does not guarantee a unit quaternion. For creating rotations,
    /// prefer using `from_axis_angle` or other rotation-specific constructors.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// The axis is normalized first; a zero axis yields the vector part `(0, 0, 0)`.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle: Radians) -> Self {
        let normalized_axis = axis.normalize();
        let (s, c) = (angle * 0.5).sin_cos();
        Self {
            x: normalized_axis.x * s,
            y: normalized_axis.y * s,
            z: normalized_axis.z * s,
            w: c,
        }
    }

    /// Builds a rotation from `(pitch, yaw, roll)` Euler angles in degrees.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::{Quaternion, Vec3};
    /// let q = Quaternion::from_euler_angles(Vec3::new(10.0, 20.0, 30.0));
    /// assert!((q.w - 0.951_548_5).abs() < 1e-5);
    /// ```
    pub fn from_euler_angles(euler: Vec3) -> Self {
        let yaw = Self::from_axis_angle(Vec3::UP, Degrees(euler.y).to_radians());
        let pitch = Self::from_axis_angle(Vec3::RIGHT, Degrees(euler.x).to_radians());
        let roll = Self::from_axis_angle(Vec3::FORWARD, Degrees(euler.z).to_radians());
        yaw * pitch * roll
    }

    /// Decomposes the rotation into `(pitch, yaw, roll)` Euler angles in degrees.
    ///
    /// Each component lies in `[0, 360]`. When the pitch reaches +/-90 degrees the
    /// roll is folded into the yaw and reported as zero.
    pub fn to_euler_angles(&self) -> Vec3 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let xx = 2.0 * x * x;
        let yy = 2.0 * y * y;
        let zz = 2.0 * z * z;
        let xy = 2.0 * x * y;
        let xz = 2.0 * x * z;
        let yz = 2.0 * y * z;
        let wx = 2.0 * w * x;
        let wy = 2.0 * w * y;
        let wz = 2.0 * w * z;

        let r00 = 1.0 - (yy + zz);
        let r10 = xy + wz;
        let r01 = xy - wz;
        let r11 = 1.0 - (xx + zz);
        let r02 = xz + wy;
        let r12 = yz - wx;
        let r22 = 1.0 - (xx + yy);

        let (pitch, yaw, roll) = if r12 >= GIMBAL_LOCK_THRESHOLD {
            (-Radians::QUARTER_TURN, Radians::atan2(-r01, r00), Radians::ZERO)
        } else if r12 <= -GIMBAL_LOCK_THRESHOLD {
            (Radians::QUARTER_TURN, Radians::atan2(r01, r00), Radians::ZERO)
        } else {
            (
                Radians::asin(-r12),
                Radians::atan2(r02, r22),
                Radians::atan2(r10, r11),
            )
        };

        Vec3::new(
            pitch.to_degrees().normalize().0,
            yaw.to_degrees().normalize().0,
            roll.to_degrees().normalize().0,
        )
    }

    /// Creates a rotation whose local `+Z` points along `forward` and whose local
    /// `+Y` lies in the plane of `forward` and `up`.
    ///
    /// # Errors
    ///
    /// [`MathError::ZeroLengthVector`] if `forward` has no length, and
    /// [`MathError::ParallelVectors`] if `up` is zero or collinear with `forward`.
    pub fn look_rotation(forward: Vec3, up: Vec3) -> MathResult<Self> {
        let forward = forward.normalize();
        if forward == Vec3::ZERO {
            log::trace!("look_rotation called with a zero forward vector");
            return Err(MathError::ZeroLengthVector);
        }
        let mut right = up.cross(forward);
        if right.normalize_mut() == 0.0 {
            log::trace!("look_rotation called with up {:?} parallel to forward {:?}", up, forward);
            return Err(MathError::ParallelVectors);
        }
        let up = forward.cross(right);
        Ok(Self::from_basis(right, up, forward))
    }

    /// Same as [`Quaternion::look_rotation`] with the world [`Vec3::UP`] as reference.
    pub fn look_forward(forward: Vec3) -> MathResult<Self> {
        let right = Vec3::UP.cross(forward);
        let up = forward.cross(right);
        Self::look_rotation(forward, up)
    }

    /// Creates a quaternion from a 4x4 rotation matrix.
    ///
    /// Only the upper 3x3 part is read. Its columns are normalized first, so a
    /// positive scale baked into the matrix does not leak into the rotation.
    pub fn from_rotation_matrix(m: &Mat4) -> Self {
        Self::from_basis(
            m.cols[0].truncate().normalize(),
            m.cols[1].truncate().normalize(),
            m.cols[2].truncate().normalize(),
        )
    }

    // Converts an orthonormal basis (the images of X, Y and Z) into a rotation.
    fn from_basis(right: Vec3, up: Vec3, forward: Vec3) -> Self {
        let trace = right.x + up.y + forward.z;
        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let inv = 0.5 / s;
            return Self {
                x: (up.z - forward.y) * inv,
                y: (forward.x - right.z) * inv,
                z: (right.y - up.x) * inv,
                w: 0.5 * s,
            };
        }
        if right.x >= up.y && right.x >= forward.z {
            let s = (1.0 + right.x - up.y - forward.z).sqrt();
            let inv = 0.5 / s;
            return Self {
                x: 0.5 * s,
                y: (right.y + up.x) * inv,
                z: (right.z + forward.x) * inv,
                w: (up.z - forward.y) * inv,
            };
        }
        if up.y > forward.z {
            let s = (1.0 + up.y - right.x - forward.z).sqrt();
            let inv = 0.5 / s;
            return Self {
                x: (up.x + right.y) * inv,
                y: 0.5 * s,
                z: (forward.y + up.z) * inv,
                w: (forward.x - right.z) * inv,
            };
        }
        let s = (1.0 + forward.z - right.x - up.y).sqrt();
        let inv = 0.5 / s;
        Self {
            x: (forward.x + right.z) * inv,
            y: (forward.y + up.z) * inv,
            z: 0.5 * s,
            w: (right.y - up.x) * inv,
        }
    }

    /// The shortest-arc rotation taking the direction of `from` onto the direction of `to`.
    ///
    /// Exactly opposite directions have no unique shortest arc; the result is then
    /// a half turn about some axis perpendicular to `from`. Nearly opposite
    /// directions still turn about `from x to`.
    ///
    /// # Errors
    ///
    /// [`MathError::ZeroLengthVector`] if either input has no length.
    pub fn from_to(from: Vec3, to: Vec3) -> MathResult<Self> {
        let from_len_sq = from.dot_f64(from);
        let to_len_sq = to.dot_f64(to);
        let min_len_sq = f64::from(EPSILON) * f64::from(EPSILON);
        if from_len_sq <= min_len_sq || to_len_sq <= min_len_sq {
            log::trace!("from_to called with a zero-length vector ({:?}, {:?})", from, to);
            return Err(MathError::ZeroLengthVector);
        }

        let (a, b) = (from, to);
        let cross = [
            f64::from(a.y) * f64::from(b.z) - f64::from(a.z) * f64::from(b.y),
            f64::from(a.z) * f64::from(b.x) - f64::from(a.x) * f64::from(b.z),
            f64::from(a.x) * f64::from(b.y) - f64::from(a.y) * f64::from(b.x),
        ];
        let cross_len_sq = cross[0] * cross[0] + cross[1] * cross[1] + cross[2] * cross[2];
        let norm_sq = from_len_sq * to_len_sq;
        let dot = from.dot_f64(to);

        if dot < 0.0 && cross_len_sq <= ANTIPARALLEL_SIN_SQ * norm_sq {
            let inv_len = 1.0 / from_len_sq.sqrt();
            let unit_from = Vec3::new(
                (f64::from(from.x) * inv_len) as f32,
                (f64::from(from.y) * inv_len) as f32,
                (f64::from(from.z) * inv_len) as f32,
            );
            let axis = perpendicular(unit_from);
            log::debug!("from_to on opposite directions, turning half way around {:?}", axis);
            return Ok(Self::from_axis_angle(axis, Radians::HALF_TURN));
        }

        // (from x to, |from||to| + from.to) is the doubled half-angle rotation, up to scale.
        let w = norm_sq.sqrt() + dot;
        let inv_len = 1.0 / (cross_len_sq + w * w).sqrt();
        Ok(Self {
            x: (cross[0] * inv_len) as f32,
            y: (cross[1] * inv_len) as f32,
            z: (cross[2] * inv_len) as f32,
            w: (w * inv_len) as f32,
        })
    }

    /// Calculates the squared length of the quaternion.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length of the quaternion.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized copy of the quaternion.
    ///
    /// # Errors
    ///
    /// [`MathError::DegenerateQuaternion`] when the squared norm is below
    /// [`QUATERNION_EPSILON`] or not finite.
    pub fn normalize(&self) -> MathResult<Self> {
        let mut q = *self;
        q.normalize_mut()?;
        Ok(q)
    }

    /// Normalizes in place. A quaternion whose squared norm is already within
    /// [`QUATERNION_EPSILON`] of one is left untouched.
    ///
    /// On error `self` is not modified.
    pub fn normalize_mut(&mut self) -> MathResult<()> {
        let norm_squared = self.length_squared();
        if approx_eq_eps(norm_squared, 1.0, QUATERNION_EPSILON) {
            return Ok(());
        }
        if !norm_squared.is_finite() || norm_squared < QUATERNION_EPSILON {
            log::trace!("cannot normalize quaternion {:?}", self);
            return Err(MathError::DegenerateQuaternion { norm_squared });
        }
        *self = *self * (1.0 / norm_squared.sqrt());
        Ok(())
    }

    /// Computes the conjugate of the quaternion, which negates the vector part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// The normalized conjugate, i.e. the rotation that undoes this one.
    ///
    /// # Errors
    ///
    /// Fails like [`Quaternion::normalize`] on a degenerate quaternion.
    #[inline]
    pub fn inverse(&self) -> MathResult<Self> {
        self.conjugate().normalize()
    }

    /// Inverts in place. On error `self` is not modified.
    pub fn inverse_mut(&mut self) -> MathResult<()> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Computes the dot product of two quaternions.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Rotation equality: `true` when the dot product is within
    /// [`QUATERNION_EPSILON`] of one.
    ///
    /// The comparison is sign-sensitive, so `q` and `-q` do not compare equal
    /// even though they rotate vectors identically.
    #[inline]
    pub fn approx_eq(&self, other: Self) -> bool {
        approx_eq_eps(self.dot(other), 1.0, QUATERNION_EPSILON)
    }

    /// `true` when every component is within [`EPSILON`] of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero(self.x) && is_zero(self.y) && is_zero(self.z) && is_zero(self.w)
    }

    /// The angle between two rotations, in `[0, 180]` degrees.
    ///
    /// Rotations whose `|dot|` exceeds `0.999999` are reported as identical.
    pub fn angle_between(a: Self, b: Self) -> Degrees {
        let dot = a.dot(b).abs().min(1.0);
        if dot > SAME_ROTATION_DOT {
            return Degrees::ZERO;
        }
        (Radians::acos(dot) * 2.0).to_degrees()
    }

    /// Rotates a 3D vector by this quaternion.
    ///
    /// The quaternion is assumed to be unit length.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let x2 = self.x * 2.0;
        let y2 = self.y * 2.0;
        let z2 = self.z * 2.0;
        let xx = self.x * x2;
        let yy = self.y * y2;
        let zz = self.z * z2;
        let xy = self.x * y2;
        let xz = self.x * z2;
        let yz = self.y * z2;
        let wx = self.w * x2;
        let wy = self.w * y2;
        let wz = self.w * z2;

        Vec3 {
            x: (1.0 - (yy + zz)) * v.x + (xy - wz) * v.y + (xz + wy) * v.z,
            y: (xy + wz) * v.x + (1.0 - (xx + zz)) * v.y + (yz - wx) * v.z,
            z: (xz - wy) * v.x + (yz + wx) * v.y + (1.0 - (xx + yy)) * v.z,
        }
    }

    /// Spherical interpolation along the shorter arc, with `t` clamped to `[0, 1]`.
    #[inline]
    pub fn slerp(start: Self, end: Self, t: f32) -> Self {
        Self::slerp_unclamped(start, end, clamp01(t))
    }

    /// Spherical interpolation along the shorter arc without clamping `t`.
    ///
    /// Nearly identical rotations fall back to linear blending of the coefficients.
    /// The result is not renormalized.
    pub fn slerp_unclamped(start: Self, end: Self, t: f32) -> Self {
        let mut cos_theta = start.dot(end);
        let mut sign = 1.0;

        // A negative dot means the arc through `end` is the long way round.
        if cos_theta < 0.0 {
            cos_theta = -cos_theta;
            sign = -1.0;
        }

        let (scale_start, scale_end) = if cos_theta > 1.0 - QUATERNION_EPSILON {
            (1.0 - t, t)
        } else {
            let theta = Radians::acos(cos_theta);
            let inv_sin_theta = 1.0 / theta.sin();
            let t_theta = theta * t;
            (
                (theta - t_theta).sin() * inv_sin_theta,
                t_theta.sin() * inv_sin_theta,
            )
        };

        start * scale_start + end * (scale_end * sign)
    }

    /// Component-wise linear interpolation with `t` clamped to `[0, 1]`.
    ///
    /// The result is not renormalized.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self::lerp_unclamped(start, end, clamp01(t))
    }

    /// Component-wise linear interpolation without clamping `t`.
    #[inline]
    pub fn lerp_unclamped(start: Self, end: Self, t: f32) -> Self {
        start * (1.0 - t) + end * t
    }
}

// Some unit vector orthogonal to `v`, which must itself be unit length.
fn perpendicular(v: Vec3) -> Vec3 {
    let axis = Vec3::UP.cross(v);
    if axis.length_squared() > EPSILON {
        axis.normalize()
    } else {
        Vec3::RIGHT.cross(v).normalize()
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Quaternion> for Quaternion {
    type Output = Self;
    /// Combines two rotations using the Hamilton product.
    /// `a * b` applies `b` first, then `a`.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}

impl MulAssign<Quaternion> for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.rotate_vec3(rhs)
    }
}

impl Add<Quaternion> for Quaternion {
    type Output = Self;
    /// Adds two quaternions component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub<Quaternion> for Quaternion {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<f32> for Quaternion {
    type Output = Self;
    /// Scales all components of the quaternion by a scalar.
    #[inline]
    fn mul(self, scalar: f32) -> Self::Output {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            w: self.w * scalar,
        }
    }
}

impl Neg for Quaternion {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
            && self.w.abs_diff_eq(&other.w, epsilon)
    }
}
