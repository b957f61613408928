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

//! Scalar helpers over `f32` shared by every other module.

use crate::EPSILON;

/// Clamps a value to a specified minimum and maximum range.
///
/// # Examples
///
/// ```
/// use gmath::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min_val: T, max_val: T) -> T {
    if value < min_val {
        min_val
    } else if value > max_val {
        max_val
    } else {
        value
    }
}

/// Clamps a floating-point value to the `[0.0, 1.0]` range.
///
/// # Examples
///
/// ```
/// use gmath::clamp01;
/// assert_eq!(clamp01(1.5), 1.0);
/// assert_eq!(clamp01(-0.5), 0.0);
/// ```
#[inline]
pub fn clamp01(value: f32) -> f32 {
    clamp(value, 0.0, 1.0)
}

/// Alias of [`clamp01`], the name shading languages use.
#[inline]
pub fn saturate(value: f32) -> f32 {
    clamp01(value)
}

/// Performs an approximate equality comparison between two floats with a custom tolerance.
///
/// # Examples
///
/// ```
/// use gmath::approx_eq_eps;
/// assert!(approx_eq_eps(0.001, 0.002, 1e-2));
/// assert!(!approx_eq_eps(0.001, 0.002, 1e-4));
/// ```
#[inline]
pub fn approx_eq_eps(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() < epsilon
}

/// Performs an approximate equality comparison using the crate's default [`EPSILON`].
///
/// # Examples
///
/// ```
/// use gmath::{approx_eq, EPSILON};
/// assert!(approx_eq(1.0, 1.0 + EPSILON / 2.0));
/// assert!(!approx_eq(1.0, 1.0 + EPSILON * 2.0));
/// ```
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_eq_eps(a, b, EPSILON)
}

/// Returns `true` if `value` lies strictly within `epsilon` of zero.
#[inline]
pub fn is_zero_eps(value: f32, epsilon: f32) -> bool {
    value.abs() < epsilon
}

/// Returns `true` if `value` lies strictly within [`EPSILON`] of zero.
#[inline]
pub fn is_zero(value: f32) -> bool {
    is_zero_eps(value, EPSILON)
}

/// Returns `true` if `value` is NaN.
#[inline]
pub fn is_nan(value: f32) -> bool {
    value.is_nan()
}

/// Moves `from` towards `to` by at most `max_delta`.
///
/// Returns `to` exactly once it is within reach, so repeated calls settle on the
/// target instead of oscillating around it.
///
/// # Examples
///
/// ```
/// use gmath::move_towards;
/// assert_eq!(move_towards(0.0, 10.0, 3.0), 3.0);
/// assert_eq!(move_towards(0.0, -10.0, 3.0), -3.0);
/// assert_eq!(move_towards(9.0, 10.0, 3.0), 10.0);
/// ```
#[inline]
pub fn move_towards(from: f32, to: f32, max_delta: f32) -> f32 {
    if (to - from).abs() <= max_delta {
        return to;
    }
    if to > from {
        from + max_delta
    } else {
        from - max_delta
    }
}

/// Linearly interpolates between `from` and `to` with `t` clamped to `[0, 1]`.
#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    lerp_unclamped(from, to, clamp01(t))
}

/// Linearly interpolates between `from` and `to`, extrapolating when `t` leaves `[0, 1]`.
#[inline]
pub fn lerp_unclamped(from: f32, to: f32, t: f32) -> f32 {
    (to - from) * t + from
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clamp_generic() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-2, 0, 3), 0);
        assert_eq!(clamp(2.5_f32, 0.0, 3.0), 2.5);
    }

    #[test]
    fn test_is_zero() {
        assert!(is_zero(0.0));
        assert!(is_zero(-EPSILON / 2.0));
        assert!(!is_zero(EPSILON * 2.0));
        assert!(is_zero_eps(0.05, 0.1));
        assert!(!is_zero_eps(-0.2, 0.1));
    }

    #[test]
    fn test_is_nan() {
        assert!(is_nan(f32::NAN));
        assert!(!is_nan(1.0));
    }

    #[test]
    fn test_move_towards_does_not_overshoot() {
        let mut value = 0.0;
        for _ in 0..10 {
            value = move_towards(value, 1.0, 0.3);
        }
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_lerp() {
        assert_relative_eq!(lerp(2.0, 4.0, 0.5), 3.0);
        assert_relative_eq!(lerp(2.0, 4.0, 2.0), 4.0);
        assert_relative_eq!(lerp(2.0, 4.0, -1.0), 2.0);
        assert_relative_eq!(lerp_unclamped(2.0, 4.0, 2.0), 6.0);
        assert_relative_eq!(lerp_unclamped(2.0, 4.0, -1.0), 0.0);
    }
}
