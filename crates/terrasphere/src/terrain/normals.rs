//! Smooth per-vertex normals by face-normal accumulation.

use glam::Vec3;

use crate::config::DegenerateNormalPolicy;
use crate::constants::UP_NORMAL;
use crate::error::{TerrainError, TerrainResult};

/// Sum the unnormalized normal `(v2 - v1) × (v3 - v1)` of every face into
/// each of its three vertices. Larger faces weigh more.
pub fn accumulate_face_normals(positions: &[Vec3], faces: &[[u32; 3]]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];
    for &[a, b, c] in faces {
        let (a, b, c) = (a as usize, b as usize, c as usize);
        let v1 = positions[a];
        let face_normal = (positions[b] - v1).cross(positions[c] - v1);
        normals[a] += face_normal;
        normals[b] += face_normal;
        normals[c] += face_normal;
    }
    normals
}

/// Normalize accumulated normals in place.
///
/// Returns how many vertices had a zero-length (or non-finite) sum and were
/// replaced with the up vector. Under `DegenerateNormalPolicy::Fail` the
/// first such vertex aborts instead.
pub fn normalize_normals(
    normals: &mut [Vec3],
    policy: DegenerateNormalPolicy,
) -> TerrainResult<usize> {
    let up = Vec3::from(UP_NORMAL);
    let mut degenerate = 0;
    for (vertex, n) in normals.iter_mut().enumerate() {
        match n.try_normalize() {
            Some(unit) => *n = unit,
            None => match policy {
                DegenerateNormalPolicy::UnitUp => {
                    *n = up;
                    degenerate += 1;
                }
                DegenerateNormalPolicy::Fail => {
                    return Err(TerrainError::DegenerateGeometry { vertex });
                }
            },
        }
    }
    Ok(degenerate)
}

/// Accumulate and normalize in one go.
pub fn vertex_normals(
    positions: &[Vec3],
    faces: &[[u32; 3]],
    policy: DegenerateNormalPolicy,
) -> TerrainResult<(Vec<Vec3>, usize)> {
    let mut normals = accumulate_face_normals(positions, faces);
    let degenerate = normalize_normals(&mut normals, policy)?;
    Ok((normals, degenerate))
}
