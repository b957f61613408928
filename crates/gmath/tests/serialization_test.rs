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
use gmath::{Degrees, Mat4, Quaternion, Radians, Vec2, Vec3, Vec4};

#[test]
fn test_json_layout_of_vectors_and_angles() -> Result<()> {
    assert_eq!(
        serde_json::to_string(&Vec3::new(1.0, 2.5, -3.0))?,
        r#"{"x":1.0,"y":2.5,"z":-3.0}"#
    );
    assert_eq!(serde_json::to_string(&Vec2::new(0.5, 0.0))?, r#"{"x":0.5,"y":0.0}"#);
    assert_eq!(serde_json::to_string(&Degrees(45.0))?, "45.0");
    assert_eq!(serde_json::to_string(&Radians(1.5))?, "1.5");

    let q: Quaternion = serde_json::from_str(r#"{"x":0.0,"y":0.0,"z":0.0,"w":1.0}"#)?;
    assert_eq!(q, Quaternion::IDENTITY);
    Ok(())
}

#[test]
fn test_matrix_serializes_row_major() -> Result<()> {
    let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let value = serde_json::to_value(m)?;

    let object = value.as_object().expect("a matrix serializes as a map");
    assert_eq!(object.len(), 16);
    assert_eq!(value["m03"], 1.0);
    assert_eq!(value["m13"], 2.0);
    assert_eq!(value["m23"], 3.0);
    assert_eq!(value["m30"], 0.0);
    assert_eq!(value["m33"], 1.0);

    let back: Mat4 = serde_json::from_value(value)?;
    assert_eq!(back, m);
    Ok(())
}

#[test]
fn test_bincode_round_trip() -> Result<()> {
    let config = bincode::config::standard();

    let q = Quaternion::from_euler_angles(Vec3::new(10.0, 20.0, 30.0));
    let bytes = bincode::encode_to_vec(q, config)?;
    assert_eq!(bytes.len(), 16);
    let (decoded, read): (Quaternion, usize) = bincode::decode_from_slice(&bytes, config)?;
    assert_eq!((decoded, read), (q, 16));

    let m = Mat4::from_trs(Vec3::new(1.0, 2.0, 3.0), q, Vec3::ONE);
    let bytes = bincode::serde::encode_to_vec(m, config)?;
    assert_eq!(bytes.len(), 64);
    let (decoded, _): (Mat4, usize) = bincode::serde::decode_from_slice(&bytes, config)?;
    assert_eq!(decoded, m);
    Ok(())
}

#[test]
fn test_gpu_layout_is_column_major() {
    let m = Mat4::from_translation(Vec3::new(7.0, 8.0, 9.0));
    let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&m));
    assert_eq!(floats.len(), 16);
    assert_eq!(&floats[12..16], &[7.0, 8.0, 9.0, 1.0]);

    let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(bytemuck::bytes_of(&v).len(), 16);
    assert_eq!(std::mem::size_of::<Quaternion>(), 16);
    assert_eq!(std::mem::size_of::<Degrees>(), 4);
}
