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
use gmath::{Degrees, Quaternion, Vec3};

fn same_rotation(a: Quaternion, b: Quaternion) -> bool {
    (a.dot(b).abs() - 1.0).abs() < 1e-4
}

#[test]
fn test_euler_round_trip_away_from_gimbal_lock() {
    for pitch in [-80.0, -45.0, -10.0, 0.0, 25.0, 60.0, 80.0] {
        for yaw in [0.0, 45.0, 135.0, 200.0, 315.0] {
            for roll in [-170.0, -60.0, 0.0, 30.0, 120.0] {
                let euler = Vec3::new(pitch, yaw, roll);
                let q = Quaternion::from_euler_angles(euler);
                let decomposed = q.to_euler_angles();

                for angle in [decomposed.x, decomposed.y, decomposed.z] {
                    assert!((0.0..=360.0).contains(&angle), "{angle} out of range for {euler:?}");
                }
                assert!(
                    same_rotation(Quaternion::from_euler_angles(decomposed), q),
                    "round trip failed for {euler:?}: {decomposed:?}"
                );
            }
        }
    }
}

#[test]
fn test_gimbal_lock_keeps_the_rotation() {
    for yaw in [0.0, 30.0, 250.0] {
        for pitch in [90.0, -90.0] {
            let q = Quaternion::from_euler_angles(Vec3::new(pitch, yaw, 40.0));
            let decomposed = q.to_euler_angles();
            assert_eq!(decomposed.z, 0.0);
            assert!(same_rotation(Quaternion::from_euler_angles(decomposed), q));
        }
    }
}

#[test]
fn test_angle_between_is_symmetric() {
    let a = Quaternion::from_euler_angles(Vec3::new(10.0, 20.0, 30.0));
    let b = Quaternion::from_euler_angles(Vec3::new(-15.0, 100.0, 0.0));
    let ab = Quaternion::angle_between(a, b);
    let ba = Quaternion::angle_between(b, a);
    assert_relative_eq!(ab.0, ba.0, epsilon = 1e-4);
    assert!(ab > Degrees::ZERO && ab <= Degrees::HALF_TURN);
    assert_relative_eq!(
        Quaternion::angle_between(a, Quaternion::IDENTITY).0,
        35.8171,
        epsilon = 1e-3
    );
}

#[test]
fn test_from_to_composes_with_look_rotation() -> Result<()> {
    let forward = Vec3::new(1.0, 1.0, 1.0);
    let look = Quaternion::look_rotation(forward, Vec3::UP)?;
    let arc = Quaternion::from_to(Vec3::FORWARD, forward)?;

    // Both aim +Z at the same direction, even if they disagree about roll.
    let expected = forward.normalize();
    assert!((look * Vec3::FORWARD).distance(expected) < 1e-4);
    assert!((arc * Vec3::FORWARD).distance(expected) < 1e-4);
    Ok(())
}

#[test]
fn test_from_to_opposite_is_half_turn() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();

    let v = Vec3::new(0.0, -2.0, 5.0);
    let q = Quaternion::from_to(v, -v)?;
    assert_relative_eq!(Quaternion::angle_between(q, Quaternion::IDENTITY).0, 180.0, epsilon = 1e-2);
    assert!((q * v).distance(-v) < 1e-3);
    Ok(())
}

#[test]
fn test_slerp_walks_at_constant_speed() {
    let start = Quaternion::from_euler_angles(Vec3::new(0.0, 10.0, 0.0));
    let end = Quaternion::from_euler_angles(Vec3::new(0.0, 130.0, 0.0));

    let mut previous = start;
    for step in 1..=10 {
        let current = Quaternion::slerp(start, end, step as f32 / 10.0);
        let stride = Quaternion::angle_between(previous, current);
        assert_relative_eq!(stride.0, 12.0, epsilon = 1e-2);
        previous = current;
    }
    assert!(same_rotation(previous, end));
}
