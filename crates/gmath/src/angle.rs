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

//! Unit-tagged angle types.
//!
//! [`Degrees`] and [`Radians`] wrap the same `f32` representation but are
//! distinct types, so mixing units requires an explicit conversion. Only
//! [`Radians`] exposes trigonometry.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::scalar;
use crate::{DEG_TO_RAD, RAD_TO_DEG};

const FULL_TURN_DEGREES: f64 = 360.0;
const FULL_TURN_RADIANS: f64 = std::f64::consts::TAU;

/// Reduces `value` into `[0, period]`.
///
/// The clamp guards against round-off pushing the result just outside the range.
#[inline]
fn wrap(value: f32, period: f64) -> f32 {
    let v = value as f64;
    let wrapped = v - (v / period).floor() * period;
    scalar::clamp(wrapped, 0.0, period) as f32
}

// --- Degrees ---

/// An angle measured in degrees.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Degrees(pub f32);

impl Degrees {
    /// A zero angle.
    pub const ZERO: Self = Self(0.0);
    /// A quarter turn.
    pub const QUARTER_TURN: Self = Self(90.0);
    /// A half turn.
    pub const HALF_TURN: Self = Self(180.0);
    /// A full turn.
    pub const FULL_TURN: Self = Self(360.0);

    /// Creates a new angle from a value in degrees.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the raw value in degrees.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Converts this angle to radians.
    #[inline]
    pub fn to_radians(self) -> Radians {
        Radians(self.0 * DEG_TO_RAD)
    }

    /// Multiplies the angle by a factor.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Reduces the angle into `[0, 360]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::Degrees;
    /// assert_eq!(Degrees(-90.0).normalize(), Degrees(270.0));
    /// assert_eq!(Degrees(725.0).normalize(), Degrees(5.0));
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        Self(wrap(self.0, FULL_TURN_DEGREES))
    }

    /// Reduces the angle into `[-180, 180]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::Degrees;
    /// assert_eq!(Degrees(270.0).normalize_half(), Degrees(-90.0));
    /// assert_eq!(Degrees(-90.0).normalize_half(), Degrees(-90.0));
    /// ```
    #[inline]
    pub fn normalize_half(self) -> Self {
        let n = self.normalize();
        if n.0 > 180.0 {
            Self(n.0 - 360.0)
        } else {
            n
        }
    }

    /// The signed shortest difference from `from` to `to`, in `[-180, 180]`.
    #[inline]
    pub fn delta(from: Self, to: Self) -> Self {
        (to - from).normalize_half()
    }

    /// Rotates `from` towards `to` along the shortest arc by at most `max_delta`.
    ///
    /// Returns `to` unchanged when it is already within reach. Otherwise the
    /// stepped angle is normalized into `[0, 360]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gmath::Degrees;
    /// let heading = Degrees::move_towards(Degrees(350.0), Degrees(20.0), Degrees(15.0));
    /// assert_eq!(heading, Degrees(5.0));
    /// ```
    pub fn move_towards(from: Self, to: Self, max_delta: Self) -> Self {
        let delta = Self::delta(from, to);
        if -max_delta.0 < delta.0 && delta.0 < max_delta.0 {
            return to;
        }
        let target = from.0 + delta.0;
        Self(scalar::move_towards(from.0, target, max_delta.0)).normalize()
    }
}

// --- Radians ---

/// An angle measured in radians.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    PartialOrd,
    bytemuck::Pod,
    bytemuck::Zeroable,
    Serialize,
    Deserialize,
    Encode,
    Decode,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Radians(pub f32);

impl Radians {
    /// A zero angle.
    pub const ZERO: Self = Self(0.0);
    /// A quarter turn.
    pub const QUARTER_TURN: Self = Self(crate::FRAC_PI_2);
    /// A half turn.
    pub const HALF_TURN: Self = Self(crate::PI);
    /// A full turn.
    pub const FULL_TURN: Self = Self(crate::TAU);

    /// Creates a new angle from a value in radians.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the raw value in radians.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Converts this angle to degrees.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * RAD_TO_DEG)
    }

    /// Multiplies the angle by a factor.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Reduces the angle into `[0, 2π]`.
    #[inline]
    pub fn normalize(self) -> Self {
        Self(wrap(self.0, FULL_TURN_RADIANS))
    }

    /// Reduces the angle into `[-π, π]`.
    #[inline]
    pub fn normalize_half(self) -> Self {
        let n = self.normalize();
        if n.0 > crate::PI {
            Self(n.0 - crate::TAU)
        } else {
            n
        }
    }

    /// The signed shortest difference from `from` to `to`, in `[-π, π]`.
    #[inline]
    pub fn delta(from: Self, to: Self) -> Self {
        (to - from).normalize_half()
    }

    /// Rotates `from` towards `to` along the shortest arc by at most `max_delta`.
    ///
    /// Same contract as [`Degrees::move_towards`], normalized into `[0, 2π]`.
    pub fn move_towards(from: Self, to: Self, max_delta: Self) -> Self {
        let delta = Self::delta(from, to);
        if -max_delta.0 < delta.0 && delta.0 < max_delta.0 {
            return to;
        }
        let target = from.0 + delta.0;
        Self(scalar::move_towards(from.0, target, max_delta.0)).normalize()
    }

    // --- Trigonometry ---

    /// The sine of the angle.
    #[inline]
    pub fn sin(self) -> f32 {
        self.0.sin()
    }

    /// The cosine of the angle.
    #[inline]
    pub fn cos(self) -> f32 {
        self.0.cos()
    }

    /// The tangent of the angle.
    #[inline]
    pub fn tan(self) -> f32 {
        self.0.tan()
    }

    /// The sine and cosine of the angle, in that order.
    #[inline]
    pub fn sin_cos(self) -> (f32, f32) {
        self.0.sin_cos()
    }

    /// The arcsine of `value`.
    ///
    /// `value` is clamped to `[-1, 1]` first, so a dot product that overshoots
    /// by a rounding error still yields a finite angle.
    #[inline]
    pub fn asin(value: f32) -> Self {
        Self(scalar::clamp(value, -1.0, 1.0).asin())
    }

    /// The arccosine of `value`, clamped to `[-1, 1]` first like [`Radians::asin`].
    #[inline]
    pub fn acos(value: f32) -> Self {
        Self(scalar::clamp(value, -1.0, 1.0).acos())
    }

    /// The arctangent of `value`.
    #[inline]
    pub fn atan(value: f32) -> Self {
        Self(value.atan())
    }

    /// The four-quadrant arctangent of `y / x`.
    #[inline]
    pub fn atan2(y: f32, x: f32) -> Self {
        Self(y.atan2(x))
    }
}

// --- Conversions ---

impl From<Degrees> for Radians {
    #[inline]
    fn from(angle: Degrees) -> Self {
        angle.to_radians()
    }
}

impl From<Radians> for Degrees {
    #[inline]
    fn from(angle: Radians) -> Self {
        angle.to_degrees()
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}

// --- Operator Overloads ---

impl Add for Degrees {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Degrees {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Degrees {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Degrees {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Degrees {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f32> for Degrees {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f32> for Degrees {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Add for Radians {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Radians {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Radians {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Radians {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Radians {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Mul<f32> for Radians {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f32> for Radians {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        Self(self.0 / rhs)
    }
}
