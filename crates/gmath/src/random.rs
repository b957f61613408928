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

//! Random sampling helpers, enabled by the `random` feature.
//!
//! Every function takes the generator explicitly, so results are reproducible
//! with a seeded RNG. The `random_*` forms draw from [`rand::thread_rng`].

use rand::distributions::uniform::SampleUniform;
use rand::Rng;

use crate::Vec2;

fn range<T, R>(rng: &mut R, min_inclusive: T, max_exclusive: T) -> T
where
    T: SampleUniform + PartialOrd + Copy,
    R: Rng + ?Sized,
{
    if min_inclusive == max_exclusive {
        return min_inclusive;
    }
    let (low, high) = if min_inclusive > max_exclusive {
        (max_exclusive, min_inclusive)
    } else {
        (min_inclusive, max_exclusive)
    };
    rng.gen_range(low..high)
}

/// A uniform integer in `[min_inclusive, max_exclusive)`.
///
/// Equal bounds return `min_inclusive`; reversed bounds are swapped, so the
/// result then lies in `[max_exclusive, min_inclusive)`.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// let mut rng = StdRng::seed_from_u64(7);
/// let roll = gmath::random::range_i64(&mut rng, 1, 7);
/// assert!((1..7).contains(&roll));
/// assert_eq!(gmath::random::range_i64(&mut rng, 3, 3), 3);
/// ```
pub fn range_i64<R: Rng + ?Sized>(rng: &mut R, min_inclusive: i64, max_exclusive: i64) -> i64 {
    range(rng, min_inclusive, max_exclusive)
}

/// [`range_i64`] for `i32`.
pub fn range_i32<R: Rng + ?Sized>(rng: &mut R, min_inclusive: i32, max_exclusive: i32) -> i32 {
    range(rng, min_inclusive, max_exclusive)
}

/// [`range_i64`] for `u32`.
pub fn range_u32<R: Rng + ?Sized>(rng: &mut R, min_inclusive: u32, max_exclusive: u32) -> u32 {
    range(rng, min_inclusive, max_exclusive)
}

/// [`range_i64`] for `usize`.
pub fn range_usize<R: Rng + ?Sized>(
    rng: &mut R,
    min_inclusive: usize,
    max_exclusive: usize,
) -> usize {
    range(rng, min_inclusive, max_exclusive)
}

/// A uniform `f32` in `[0, 1]`, both ends included.
#[inline]
pub fn unit_f32<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen_range(0.0..=1.0)
}

/// A uniform `f64` in `[0, 1]`, both ends included.
#[inline]
pub fn unit_f64<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(0.0..=1.0)
}

/// A point uniformly distributed over the ring between `min_radius` and `max_radius`.
///
/// The distance from the centre is `sqrt(u)` remapped onto the radii, which keeps
/// the density even across the area instead of bunching up at the centre.
pub fn inside_circle<R: Rng + ?Sized>(rng: &mut R, min_radius: f32, max_radius: f32) -> Vec2 {
    let theta = rng.gen::<f64>() * std::f64::consts::TAU;
    let r = unit_f64(rng).sqrt() * f64::from(max_radius - min_radius) + f64::from(min_radius);
    Vec2::new((theta.cos() * r) as f32, (theta.sin() * r) as f32)
}

/// A point uniformly distributed over the unit disc.
#[inline]
pub fn inside_unit_circle<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    inside_circle(rng, 0.0, 1.0)
}

/// [`unit_f32`] drawn from the thread-local generator.
pub fn random_unit_f32() -> f32 {
    unit_f32(&mut rand::thread_rng())
}

/// [`inside_unit_circle`] drawn from the thread-local generator.
pub fn random_inside_unit_circle() -> Vec2 {
    inside_unit_circle(&mut rand::thread_rng())
}
