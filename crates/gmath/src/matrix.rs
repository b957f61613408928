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

//! Provides the 4x4 transform matrix.

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};
use crate::{Quaternion, Vec3, Vec4, EPSILON};
use std::ops::Mul;

/// A 4x4 column-major matrix, used for 3D affine transformations.
///
/// Elements are addressed as `m(row, col)`; the memory layout is column-major,
/// which is what graphics APIs expect when the matrix is uploaded as raw bytes.
/// Serialized forms name each element row-major, `m00, m01, ..., m33`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
)]
#[serde(from = "RowMajor", into = "RowMajor")]
#[repr(C)]
pub struct Mat4 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// The 4x4 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vec4::X, Vec4::Y, Vec4::Z, Vec4::W],
    };

    /// A 4x4 matrix with all elements set to 0.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Creates a new matrix from four column vectors.
    #[inline]
    pub fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a new matrix from four row vectors.
    #[inline]
    pub fn from_rows(r0: Vec4, r1: Vec4, r2: Vec4, r3: Vec4) -> Self {
        Self::from_cols(r0, r1, r2, r3).transpose()
    }

    /// The element at `row`, `col`.
    ///
    /// # Panics
    /// Panics if either index is outside `0..4`.
    #[inline]
    pub fn m(&self, row: usize, col: usize) -> f32 {
        self.cols[col].get(row)
    }

    /// Returns a column of the matrix.
    ///
    /// # Panics
    /// Panics if `index` is outside `0..4`.
    #[inline]
    pub fn column(&self, index: usize) -> Vec4 {
        self.cols[index]
    }

    /// Returns a row of the matrix as a `Vec4`.
    ///
    /// # Panics
    /// Panics if `index` is outside `0..4`.
    #[inline]
    pub fn row(&self, index: usize) -> Vec4 {
        Vec4 {
            x: self.cols[0].get(index),
            y: self.cols[1].get(index),
            z: self.cols[2].get(index),
            w: self.cols[3].get(index),
        }
    }

    /// The translation stored in the last column.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        self.cols[3].truncate()
    }

    /// Creates a translation matrix.
    #[inline]
    pub fn from_translation(v: Vec3) -> Self {
        Self::from_cols(Vec4::X, Vec4::Y, Vec4::Z, Vec4::from_vec3(v, 1.0))
    }

    /// Creates a non-uniform scaling matrix.
    #[inline]
    pub fn from_scale(scale: Vec3) -> Self {
        Self::from_cols(
            Vec4::X * scale.x,
            Vec4::Y * scale.y,
            Vec4::Z * scale.z,
            Vec4::W,
        )
    }

    /// Creates a rotation matrix from a quaternion.
    ///
    /// The quaternion is assumed to be unit length.
    #[inline]
    pub fn from_quat(q: Quaternion) -> Self {
        let x2 = q.x + q.x;
        let y2 = q.y + q.y;
        let z2 = q.z + q.z;
        let xx = q.x * x2;
        let xy = q.x * y2;
        let xz = q.x * z2;
        let yy = q.y * y2;
        let yz = q.y * z2;
        let zz = q.z * z2;
        let wx = q.w * x2;
        let wy = q.w * y2;
        let wz = q.w * z2;

        Self::from_cols(
            Vec4::new(1.0 - (yy + zz), xy + wz, xz - wy, 0.0),
            Vec4::new(xy - wz, 1.0 - (xx + zz), yz + wx, 0.0),
            Vec4::new(xz + wy, yz - wx, 1.0 - (xx + yy), 0.0),
            Vec4::W,
        )
    }

    /// Composes translation, rotation and scale into one transform.
    ///
    /// Equivalent to `from_translation(position) * from_quat(rotation) * from_scale(scale)`:
    /// points are scaled first, then rotated, then moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::{Mat4, Quaternion, Vec3};
    /// let m = Mat4::from_trs(Vec3::new(1.0, 2.0, 3.0), Quaternion::IDENTITY, Vec3::ONE * 2.0);
    /// assert_eq!(m.transform_point3(Vec3::ONE), Vec3::new(3.0, 4.0, 5.0));
    /// ```
    pub fn from_trs(position: Vec3, rotation: Quaternion, scale: Vec3) -> Self {
        let r = Self::from_quat(rotation);
        Self::from_cols(
            r.cols[0] * scale.x,
            r.cols[1] * scale.y,
            r.cols[2] * scale.z,
            Vec4::from_vec3(position, 1.0),
        )
    }

    /// Returns the transpose of the matrix, where rows and columns are swapped.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> f32 {
        Minors::of(self).determinant()
    }

    /// Computes the inverse of the matrix.
    ///
    /// # Errors
    ///
    /// [`MathError::SingularMatrix`] when the determinant is zero or not finite.
    pub fn inverse(&self) -> MathResult<Self> {
        let a = |row, col| self.m(row, col);
        let minors = Minors::of(self);
        let det = minors.determinant();
        let Minors { s, c } = minors;
        if det == 0.0 || !det.is_finite() {
            log::trace!("cannot invert matrix with determinant {}", det);
            return Err(MathError::SingularMatrix { determinant: det });
        }
        let inv_det = 1.0 / det;

        let r0 = Vec4::new(
            a(1, 1) * c[5] - a(1, 2) * c[4] + a(1, 3) * c[3],
            -a(0, 1) * c[5] + a(0, 2) * c[4] - a(0, 3) * c[3],
            a(3, 1) * s[5] - a(3, 2) * s[4] + a(3, 3) * s[3],
            -a(2, 1) * s[5] + a(2, 2) * s[4] - a(2, 3) * s[3],
        );
        let r1 = Vec4::new(
            -a(1, 0) * c[5] + a(1, 2) * c[2] - a(1, 3) * c[1],
            a(0, 0) * c[5] - a(0, 2) * c[2] + a(0, 3) * c[1],
            -a(3, 0) * s[5] + a(3, 2) * s[2] - a(3, 3) * s[1],
            a(2, 0) * s[5] - a(2, 2) * s[2] + a(2, 3) * s[1],
        );
        let r2 = Vec4::new(
            a(1, 0) * c[4] - a(1, 1) * c[2] + a(1, 3) * c[0],
            -a(0, 0) * c[4] + a(0, 1) * c[2] - a(0, 3) * c[0],
            a(3, 0) * s[4] - a(3, 1) * s[2] + a(3, 3) * s[0],
            -a(2, 0) * s[4] + a(2, 1) * s[2] - a(2, 3) * s[0],
        );
        let r3 = Vec4::new(
            -a(1, 0) * c[3] + a(1, 1) * c[1] - a(1, 2) * c[0],
            a(0, 0) * c[3] - a(0, 1) * c[1] + a(0, 2) * c[0],
            -a(3, 0) * s[3] + a(3, 1) * s[1] - a(3, 2) * s[0],
            a(2, 0) * s[3] - a(2, 1) * s[1] + a(2, 2) * s[0],
        );

        Ok(Self::from_rows(r0 * inv_det, r1 * inv_det, r2 * inv_det, r3 * inv_det))
    }

    /// Transforms a point, including the homogeneous divide by the resulting `w`.
    ///
    /// Use this for projection matrices. A resulting `w` of zero yields
    /// non-finite components.
    pub fn project_point3(&self, p: Vec3) -> Vec3 {
        let v = *self * Vec4::from_vec3(p, 1.0);
        v.truncate() / v.w
    }

    /// Transforms a point by an affine matrix.
    ///
    /// The bottom row is assumed to be `[0, 0, 0, 1]` and no divide happens.
    #[inline]
    pub fn transform_point3(&self, p: Vec3) -> Vec3 {
        (*self * Vec4::from_vec3(p, 1.0)).truncate()
    }

    /// Full homogeneous transform of a `Vec4`, without divide.
    #[inline]
    pub fn transform_vec4(&self, v: Vec4) -> Vec4 {
        *self * v
    }

    /// Transforms a direction with the upper 3x3 part only, ignoring translation.
    #[inline]
    pub fn transform_vector3(&self, d: Vec3) -> Vec3 {
        self.cols[0].truncate() * d.x + self.cols[1].truncate() * d.y + self.cols[2].truncate() * d.z
    }
}

// 2x2 minors of the top two rows (`s`) and bottom two rows (`c`), shared by
// `determinant` and `inverse`.
#[derive(Clone, Copy)]
struct Minors {
    s: [f32; 6],
    c: [f32; 6],
}

impl Minors {
    fn of(m: &Mat4) -> Self {
        let a = |row, col| m.m(row, col);
        let pair = |r0: usize, r1: usize, c0: usize, c1: usize| {
            a(r0, c0) * a(r1, c1) - a(r1, c0) * a(r0, c1)
        };
        Self {
            s: [
                pair(0, 1, 0, 1),
                pair(0, 1, 0, 2),
                pair(0, 1, 0, 3),
                pair(0, 1, 1, 2),
                pair(0, 1, 1, 3),
                pair(0, 1, 2, 3),
            ],
            c: [
                pair(2, 3, 0, 1),
                pair(2, 3, 0, 2),
                pair(2, 3, 0, 3),
                pair(2, 3, 1, 2),
                pair(2, 3, 1, 3),
                pair(2, 3, 2, 3),
            ],
        }
    }

    fn determinant(self) -> f32 {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

// --- Serialization ---

#[derive(Serialize, Deserialize)]
struct RowMajor {
    m00: f32,
    m01: f32,
    m02: f32,
    m03: f32,
    m10: f32,
    m11: f32,
    m12: f32,
    m13: f32,
    m20: f32,
    m21: f32,
    m22: f32,
    m23: f32,
    m30: f32,
    m31: f32,
    m32: f32,
    m33: f32,
}

impl From<Mat4> for RowMajor {
    fn from(m: Mat4) -> Self {
        let [r0, r1, r2, r3] = [m.row(0), m.row(1), m.row(2), m.row(3)];
        Self {
            m00: r0.x,
            m01: r0.y,
            m02: r0.z,
            m03: r0.w,
            m10: r1.x,
            m11: r1.y,
            m12: r1.z,
            m13: r1.w,
            m20: r2.x,
            m21: r2.y,
            m22: r2.z,
            m23: r2.w,
            m30: r3.x,
            m31: r3.y,
            m32: r3.z,
            m33: r3.w,
        }
    }
}

impl From<RowMajor> for Mat4 {
    fn from(r: RowMajor) -> Self {
        Mat4::from_rows(
            Vec4::new(r.m00, r.m01, r.m02, r.m03),
            Vec4::new(r.m10, r.m11, r.m12, r.m13),
            Vec4::new(r.m20, r.m21, r.m22, r.m23),
            Vec4::new(r.m30, r.m31, r.m32, r.m33),
        )
    }
}

// --- Operators Overloading ---

impl Default for Mat4 {
    /// Returns the 4x4 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat4> for Mat4 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat4`; `a * b` applies `b` first.
    #[inline]
    fn mul(self, rhs: Mat4) -> Self::Output {
        Self::from_cols(
            self * rhs.cols[0],
            self * rhs.cols[1],
            self * rhs.cols[2],
            self * rhs.cols[3],
        )
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;
    /// Transforms a `Vec4` by this matrix.
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.cols[0] * rhs.x + self.cols[1] * rhs.y + self.cols[2] * rhs.z + self.cols[3] * rhs.w
    }
}

impl AbsDiffEq for Mat4 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Degrees, Radians};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn sample() -> Mat4 {
        Mat4::from_rows(
            Vec4::new(1., 2., 3., 4.),
            Vec4::new(5., 6., 7., 8.),
            Vec4::new(9., 10., 11., 12.),
            Vec4::new(13., 14., 15., 16.),
        )
    }

    #[test]
    fn test_identity() {
        assert_eq!(Mat4::default(), Mat4::IDENTITY);
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn test_element_access() {
        let m = sample();
        assert_eq!(m.m(0, 3), 4.0);
        assert_eq!(m.m(3, 0), 13.0);
        assert_eq!(m.row(1), Vec4::new(5., 6., 7., 8.));
        assert_eq!(m.column(1), Vec4::new(2., 6., 10., 14.));
        assert_eq!(m.cols[2], m.column(2));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range() {
        let _ = Mat4::IDENTITY.row(4);
    }

    #[test]
    #[should_panic]
    fn test_column_out_of_range() {
        let _ = Mat4::IDENTITY.column(4);
    }

    #[test]
    fn test_transpose() {
        let m = sample();
        let mt = m.transpose();
        assert_eq!(mt.row(0), Vec4::new(1., 5., 9., 13.));
        assert_eq!(mt.m(2, 1), m.m(1, 2));
        assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn test_from_quat_matches_quaternion_rotation() {
        let q = Quaternion::from_axis_angle(Vec3::new(1.0, 2.0, 3.0), Radians(crate::PI / 5.0));
        let m = Mat4::from_quat(q);
        let v = Vec3::new(5.0, -1.0, 2.0);
        assert_abs_diff_eq!(m.transform_point3(v), q * v, epsilon = 1e-5);
        assert_abs_diff_eq!(m.transform_vector3(v), q * v, epsilon = 1e-5);
    }

    #[test]
    fn test_translation_and_scale() {
        let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(t.transform_point3(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(t.transform_vector3(Vec3::ONE), Vec3::ONE);
        assert_eq!(t.translation(), Vec3::new(1.0, 2.0, 3.0));

        let s = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(s.transform_point3(Vec3::ONE), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_from_trs_matches_composition() {
        let position = Vec3::new(3.0, -1.0, 7.0);
        let rotation = Quaternion::from_euler_angles(Vec3::new(10.0, 20.0, 30.0));
        let scale = Vec3::new(2.0, 0.5, 3.0);

        let trs = Mat4::from_trs(position, rotation, scale);
        let composed =
            Mat4::from_translation(position) * Mat4::from_quat(rotation) * Mat4::from_scale(scale);
        assert_abs_diff_eq!(trs, composed, epsilon = 1e-5);
        assert_eq!(trs.translation(), position);
        assert_eq!(trs.row(3), Vec4::W);
    }

    #[test]
    fn test_mul_order() {
        let t = Mat4::from_translation(Vec3::new(1.0, 0.0, 0.0));
        let r = Mat4::from_quat(Quaternion::from_axis_angle(Vec3::FORWARD, Radians::QUARTER_TURN));
        let p = Vec3::new(1.0, 0.0, 0.0);

        // Translate, then rotate about Z.
        assert_abs_diff_eq!((r * t).transform_point3(p), Vec3::new(0.0, 2.0, 0.0), epsilon = 1e-5);
        // Rotate, then translate.
        assert_abs_diff_eq!((t * r).transform_point3(p), Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_determinant() {
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(sample().determinant(), 0.0);
        let s = Mat4::from_scale(Vec3::new(2.0, 3.0, 4.0));
        assert_relative_eq!(s.determinant(), 24.0);

        let rotation = Mat4::from_quat(Quaternion::from_euler_angles(Vec3::new(40.0, 10.0, 5.0)));
        assert_relative_eq!(rotation.determinant(), 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_inverse() {
        let m = Mat4::from_trs(
            Vec3::new(1., 2., 3.),
            Quaternion::from_axis_angle(Vec3::UP, Degrees(45.0).to_radians()),
            Vec3::new(1., 2., 1.),
        );
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(m * inv, Mat4::IDENTITY, epsilon = 1e-5);
        assert_abs_diff_eq!(inv * m, Mat4::IDENTITY, epsilon = 1e-5);

        let general = Mat4::from_rows(
            Vec4::new(2., 0., 1., 3.),
            Vec4::new(1., 1., 0., 0.),
            Vec4::new(0., 4., 1., 1.),
            Vec4::new(1., 0., 0., 2.),
        );
        let inv = general.inverse().unwrap();
        assert_abs_diff_eq!(general * inv, Mat4::IDENTITY, epsilon = 1e-5);
    }

    #[test]
    fn test_inverse_of_tiny_scale() {
        let m = Mat4::from_scale(Vec3::new(0.01, 0.01, 0.01));
        let inv = m.inverse().unwrap();
        assert_abs_diff_eq!(inv.transform_point3(Vec3::ONE), Vec3::ONE * 100.0, epsilon = 1e-2);
    }

    #[test]
    fn test_inverse_singular() {
        let singular = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(
            singular.inverse(),
            Err(MathError::SingularMatrix { determinant: 0.0 })
        );
        assert!(sample().inverse().is_err());

        let mut broken = Mat4::IDENTITY;
        broken.cols[1].y = f32::NAN;
        assert!(matches!(
            broken.inverse(),
            Err(MathError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn test_project_point3() {
        // w takes the value of z.
        let m = Mat4::from_rows(
            Vec4::new(1., 0., 0., 0.),
            Vec4::new(0., 1., 0., 0.),
            Vec4::new(0., 0., 1., 0.),
            Vec4::new(0., 0., 1., 0.),
        );
        let p = Vec3::new(2.0, 4.0, 2.0);
        assert_eq!(m.project_point3(p), Vec3::new(1.0, 2.0, 1.0));
        assert_eq!(m.transform_point3(p), p);
        assert_eq!(m.transform_vec4(Vec4::from_vec3(p, 1.0)), Vec4::new(2.0, 4.0, 2.0, 2.0));
    }
}
