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

//! Provides 2D, 3D, and 4D vector types and their associated operations.
//!
//! Vectors follow a left-handed, Y-up convention: [`Vec3::FORWARD`] is `+Z` and
//! [`Vec3::RIGHT`] is `+X`.

use approx::AbsDiffEq;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::angle::{Degrees, Radians};
use crate::scalar::clamp01;
use crate::EPSILON;
use std::ops::{Add, AddAssign, Div, Index, IndexMut, Mul, Neg, Sub, SubAssign};

// --- Vec2 ---

/// A 2-dimensional vector with `f32` components.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec2 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
}

impl Vec2 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self { x: 1.0, y: 0.0 };
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self { x: 0.0, y: 1.0 };

    /// Creates a new `Vec2` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculates the squared length (magnitude) of the vector.
    /// This is faster than `length()` as it avoids a square root.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    /// If the vector's length is near zero, it returns `Vec2::ZERO`.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mut v = *self;
        if v.normalize_mut() == 0.0 {
            Self::ZERO
        } else {
            v
        }
    }

    /// Normalizes the vector in place and returns its previous length.
    ///
    /// A near-zero vector is left untouched and `0.0` is returned.
    #[inline]
    pub fn normalize_mut(&mut self) -> f32 {
        let len = self.length();
        if len <= EPSILON {
            return 0.0;
        }
        *self = *self * (1.0 / len);
        len
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        (*self - other).length()
    }

    /// Returns `true` if the squared length is within [`EPSILON`] of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length_squared() < EPSILON
    }

    /// Returns `true` if every component is within [`EPSILON`] of `other`'s.
    #[inline]
    pub fn approx_eq(&self, other: Self) -> bool {
        self.abs_diff_eq(&other, EPSILON)
    }

    /// Returns `true` if no component is NaN.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan())
    }

    /// Performs a linear interpolation between two vectors.
    /// The interpolation factor `t` is clamped to the `[0.0, 1.0]` range.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self::lerp_unclamped(start, end, clamp01(t))
    }

    /// Performs a linear interpolation without clamping `t`.
    #[inline]
    pub fn lerp_unclamped(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

// --- Vec3 ---

/// A 3-dimensional vector with `f32` components.
#[derive(
    Debug,
    Default,
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
pub struct Vec3 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
}

impl Vec3 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);
    /// World up, `(0, 1, 0)`.
    pub const UP: Self = Self::Y;
    /// World down, `(0, -1, 0)`.
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);
    /// World right, `(1, 0, 0)`.
    pub const RIGHT: Self = Self::X;
    /// World left, `(-1, 0, 0)`.
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    /// World forward, `(0, 0, 1)`.
    pub const FORWARD: Self = Self::Z;
    /// World back, `(0, 0, -1)`.
    pub const BACK: Self = Self::new(0.0, 0.0, -1.0);

    /// Creates a new `Vec3` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector with a length of 1.
    ///
    /// A near-zero vector normalizes to `Vec3::ZERO` rather than NaN.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mut v = *self;
        if v.normalize_mut() == 0.0 {
            Self::ZERO
        } else {
            v
        }
    }

    /// Normalizes the vector in place and returns its previous length.
    ///
    /// A near-zero vector is left untouched and `0.0` is returned.
    #[inline]
    pub fn normalize_mut(&mut self) -> f32 {
        let len = self.length();
        if len <= EPSILON {
            return 0.0;
        }
        let inv_len = 1.0 / len;
        self.x *= inv_len;
        self.y *= inv_len;
        self.z *= inv_len;
        len
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector and another.
    #[inline]
    pub fn cross(&self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the squared distance between this vector and another.
    #[inline]
    pub fn distance_squared(&self, other: Self) -> f32 {
        (*self - other).length_squared()
    }

    /// Calculates the distance between this vector and another.
    #[inline]
    pub fn distance(&self, other: Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Returns `true` if the squared length is within [`EPSILON`] of zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length_squared() < EPSILON
    }

    /// Returns `true` if every component is within [`EPSILON`] of `other`'s.
    #[inline]
    pub fn approx_eq(&self, other: Self) -> bool {
        self.abs_diff_eq(&other, EPSILON)
    }

    /// Returns `true` if no component is NaN.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan())
    }

    /// Projects the vector onto the XZ ground plane as a `Vec2`.
    #[inline]
    pub fn xz(&self) -> Vec2 {
        Vec2::new(self.x, self.z)
    }

    /// Returns the vector with its `y` component zeroed.
    #[inline]
    pub fn x0z(&self) -> Self {
        Self::new(self.x, 0.0, self.z)
    }

    /// Performs a linear interpolation between two vectors, `t` clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(start: Self, end: Self, t: f32) -> Self {
        Self::lerp_unclamped(start, end, clamp01(t))
    }

    /// Performs a linear interpolation without clamping `t`.
    #[inline]
    pub fn lerp_unclamped(start: Self, end: Self, t: f32) -> Self {
        Self {
            x: start.x + (end.x - start.x) * t,
            y: start.y + (end.y - start.y) * t,
            z: start.z + (end.z - start.z) * t,
        }
    }

    /// Moves `current` in a straight line towards `target` by at most `max_distance_delta`.
    ///
    /// Returns `target` exactly once it is within reach. A negative delta moves away.
    pub fn move_towards(current: Self, target: Self, max_distance_delta: f32) -> Self {
        let to_target = target - current;
        let dist_sq = to_target.length_squared();
        if dist_sq == 0.0
            || (max_distance_delta >= 0.0 && dist_sq <= max_distance_delta * max_distance_delta)
        {
            return target;
        }
        current + to_target * (max_distance_delta / dist_sq.sqrt())
    }

    /// The unsigned angle between two directions, in `[0, 180]` degrees.
    ///
    /// Returns zero if either vector is too short to define a direction.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::Vec3;
    /// let right_angle = Vec3::angle(Vec3::FORWARD, Vec3::RIGHT);
    /// assert!((right_angle.0 - 90.0).abs() < 1e-4);
    /// ```
    pub fn angle(from: Self, to: Self) -> Degrees {
        let denominator = (from.dot_f64(from) * to.dot_f64(to)).sqrt();
        if denominator < 1e-15 {
            return Degrees::ZERO;
        }
        Radians::acos((from.dot_f64(to) / denominator) as f32).to_degrees()
    }

    // Dot product widened to f64: the products are exact and cannot overflow.
    #[inline]
    pub(crate) fn dot_f64(&self, other: Self) -> f64 {
        f64::from(self.x) * f64::from(other.x)
            + f64::from(self.y) * f64::from(other.y)
            + f64::from(self.z) * f64::from(other.z)
    }

    /// The angle between two directions, signed by their orientation around `axis`.
    ///
    /// Positive when `from x to` points the same way as `axis`.
    pub fn signed_angle(from: Self, to: Self, axis: Self) -> Degrees {
        let unsigned = Self::angle(from, to);
        if axis.dot(from.cross(to)) < 0.0 {
            -unsigned
        } else {
            unsigned
        }
    }

    /// Retrieves a component of the vector by its index.
    ///
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self[index]
    }
}

// --- Vec4 ---

/// A 4-dimensional vector with `f32` components, often used for homogeneous coordinates.
///
/// In 3D graphics, `Vec4` is primarily used to represent points (`w`=1.0) and
/// vectors (`w`=0.0) in homogeneous space, allowing them to be transformed by a `Mat4`.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[repr(C)]
pub struct Vec4 {
    /// The x component of the vector.
    pub x: f32,
    /// The y component of the vector.
    pub y: f32,
    /// The z component of the vector.
    pub z: f32,
    /// The w component, used for homogeneous coordinates.
    pub w: f32,
}

impl Vec4 {
    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive W-axis.
    pub const W: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a new `Vec4` with the specified components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a `Vec4` from a `Vec3` and a `w` component.
    #[inline]
    pub fn from_vec3(v: Vec3, w: f32) -> Self {
        Self::new(v.x, v.y, v.z, w)
    }

    /// Returns the `[x, y, z]` components of the vector as a `Vec3`, discarding `w`.
    #[inline]
    pub fn truncate(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Calculates the squared length (magnitude) of the vector.
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(*self)
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Returns a normalized version of the vector, or `Vec4::ZERO` if it is near zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mut v = *self;
        if v.normalize_mut() == 0.0 {
            Self::ZERO
        } else {
            v
        }
    }

    /// Normalizes the vector in place and returns its previous length.
    ///
    /// A near-zero vector is left untouched and `0.0` is returned.
    #[inline]
    pub fn normalize_mut(&mut self) -> f32 {
        let len = self.length();
        if len <= EPSILON {
            return 0.0;
        }
        *self = *self * (1.0 / len);
        len
    }

    /// Returns `true` if every component is within [`EPSILON`] of `other`'s.
    #[inline]
    pub fn approx_eq(&self, other: Self) -> bool {
        self.abs_diff_eq(&other, EPSILON)
    }

    /// Returns `true` if no component is NaN.
    #[inline]
    pub fn is_valid(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan() || self.z.is_nan() || self.w.is_nan())
    }

    /// Retrieves a component of the vector by its index.
    ///
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self[index]
    }
}

// --- Approximate Equality ---

impl AbsDiffEq for Vec2 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl AbsDiffEq for Vec4 {
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

// --- Operator Overloads ---

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec2> for Vec2 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Vec2) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl Index<usize> for Vec2 {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is not 0 or 1.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl IndexMut<usize> for Vec2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds for Vec2"),
        }
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl Mul<Vec3> for Vec3 {
    type Output = Self;
    /// Multiplies two vectors component-wise.
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is not 0, 1, or 2.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

impl IndexMut<usize> for Vec3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Index out of bounds for Vec3"),
        }
    }
}

impl Add for Vec4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z, self.w + rhs.w)
    }
}

impl Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z, self.w - rhs.w)
    }
}

impl Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs, self.w * rhs)
    }
}

impl Mul<Vec4> for f32 {
    type Output = Vec4;
    #[inline]
    fn mul(self, rhs: Vec4) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self * (1.0 / rhs)
    }
}

impl Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    /// # Panics
    /// Panics if `index` is not between 0 and 3.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

impl IndexMut<usize> for Vec4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Index out of bounds for Vec4"),
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_vec2_normalize() {
        let v = Vec2::new(3.0, 4.0);
        assert_abs_diff_eq!(v.normalize(), Vec2::new(0.6, 0.8));
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);

        let mut w = Vec2::new(0.0, -2.0);
        assert_relative_eq!(w.normalize_mut(), 2.0);
        assert_eq!(w, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_vec2_lerp_clamps() {
        let start = Vec2::new(0.0, 10.0);
        let end = Vec2::new(10.0, 0.0);
        assert_abs_diff_eq!(Vec2::lerp(start, end, 0.5), Vec2::new(5.0, 5.0));
        assert_eq!(Vec2::lerp(start, end, -0.5), start);
        assert_eq!(Vec2::lerp(start, end, 1.5), end);
        assert_abs_diff_eq!(Vec2::lerp_unclamped(start, end, 1.5), Vec2::new(15.0, -5.0));
    }

    #[test]
    #[should_panic]
    fn test_vec2_index_out_of_bounds() {
        let v = Vec2::new(1.0, 2.0);
        let _ = v[2];
    }

    #[test]
    fn test_direction_constants() {
        assert_eq!(Vec3::UP, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Vec3::DOWN, -Vec3::UP);
        assert_eq!(Vec3::LEFT, -Vec3::RIGHT);
        assert_eq!(Vec3::BACK, -Vec3::FORWARD);
        // Left-handed: right x up = forward.
        assert_eq!(Vec3::RIGHT.cross(Vec3::UP), Vec3::FORWARD);
    }

    #[test]
    fn test_cross() {
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::Z), Vec3::X);
        assert_eq!(Vec3::Z.cross(Vec3::X), Vec3::Y);
        assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
        assert_eq!(Vec3::X.cross(Vec3::X), Vec3::ZERO);
    }

    #[test]
    fn test_vec3_normalize_degenerate() {
        assert_eq!(Vec3::ZERO.normalize(), Vec3::ZERO);

        let mut tiny = Vec3::new(1e-7, 0.0, 0.0);
        assert_eq!(tiny.normalize_mut(), 0.0);
        assert_eq!(tiny, Vec3::new(1e-7, 0.0, 0.0));

        let mut v = Vec3::new(0.0, 3.0, 4.0);
        assert_relative_eq!(v.normalize_mut(), 5.0);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_vec3_validity_and_zero() {
        assert!(Vec3::ONE.is_valid());
        assert!(!Vec3::new(0.0, f32::NAN, 0.0).is_valid());
        assert!(!Vec4::new(0.0, 0.0, 0.0, f32::NAN).is_valid());
        assert!(Vec3::new(1e-4, 0.0, 0.0).is_zero());
        assert!(!Vec3::new(0.1, 0.0, 0.0).is_zero());
    }

    #[test]
    fn test_vec3_approx_eq() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert!(a.approx_eq(a + Vec3::new(EPSILON / 2.0, 0.0, 0.0)));
        assert!(!a.approx_eq(a + Vec3::new(0.0, 0.0, 0.01)));
    }

    #[test]
    fn test_vec3_swizzles() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.xz(), Vec2::new(1.0, 3.0));
        assert_eq!(v.x0z(), Vec3::new(1.0, 0.0, 3.0));
        assert_eq!(Vec4::from_vec3(v, 1.0).truncate(), v);
    }

    #[test]
    fn test_vec3_move_towards() {
        let current = Vec3::ZERO;
        let target = Vec3::new(10.0, 0.0, 0.0);
        assert_abs_diff_eq!(
            Vec3::move_towards(current, target, 4.0),
            Vec3::new(4.0, 0.0, 0.0)
        );
        assert_eq!(Vec3::move_towards(current, target, 12.0), target);
        assert_eq!(Vec3::move_towards(target, target, 1.0), target);
    }

    #[test]
    fn test_vec3_angle() {
        assert_relative_eq!(Vec3::angle(Vec3::FORWARD, Vec3::BACK).0, 180.0, epsilon = 1e-4);
        assert_eq!(Vec3::angle(Vec3::FORWARD, Vec3::FORWARD), Degrees(0.0));
        assert_eq!(Vec3::angle(Vec3::ZERO, Vec3::FORWARD), Degrees(0.0));

        let v = Vec3::new(-2.0, 5.0, 0.5);
        assert_relative_eq!(Vec3::angle(v, v * 3.0).0, 0.0, epsilon = 0.05);
    }

    #[test]
    fn test_vec3_angle_large_vectors() {
        let angle = Vec3::angle(Vec3::RIGHT * 1e20, Vec3::UP * 1e20);
        assert!(angle.0.is_finite());
        assert_relative_eq!(angle.0, 90.0, epsilon = 1e-4);

        let opposite = Vec3::angle(Vec3::new(3e25, -4e25, 0.0), Vec3::new(-3e25, 4e25, 0.0));
        assert_relative_eq!(opposite.0, 180.0, epsilon = 1e-3);
    }

    #[test]
    fn test_vec3_signed_angle() {
        let right_diag = Vec3::new(3.0, 0.0, 3.0).normalize();
        let left_diag = Vec3::new(-3.0, 0.0, 3.0).normalize();
        assert_relative_eq!(
            Vec3::signed_angle(Vec3::FORWARD, right_diag, Vec3::UP).0,
            45.0,
            epsilon = 1e-4
        );
        assert_relative_eq!(
            Vec3::signed_angle(Vec3::FORWARD, left_diag, Vec3::UP).0,
            -45.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_vec4_ops() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a + a, a * 2.0);
        assert_eq!(a - a, Vec4::ZERO);
        assert_eq!(-a, Vec4::new(-1.0, -2.0, -3.0, -4.0));
        assert_relative_eq!(a.dot(Vec4::W), 4.0);
        assert_relative_eq!(Vec4::new(0.0, 0.0, 3.0, 4.0).normalize().length(), 1.0);
        assert_eq!(a.get(3), 4.0);
    }

    #[test]
    fn test_vec4_normalize_mut() {
        let mut v = Vec4::new(0.0, 3.0, 0.0, 4.0);
        assert_relative_eq!(v.normalize_mut(), 5.0);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v, Vec4::new(0.0, 0.6, 0.0, 0.8), epsilon = 1e-6);

        let mut tiny = Vec4::new(1e-7, 0.0, 0.0, 0.0);
        assert_eq!(tiny.normalize_mut(), 0.0);
        assert_eq!(tiny, Vec4::new(1e-7, 0.0, 0.0, 0.0));
        assert_eq!(tiny.normalize(), Vec4::ZERO);
    }

    #[test]
    #[should_panic]
    fn test_vec4_get_out_of_bounds() {
        let _ = Vec4::ONE.get(4);
    }
}
