//! Fault-plane displacement.
//!
//! Each pass drops a vertical plane at a random point of the domain with a
//! random horizontal normal, then raises every vertex in front of it by
//! `delta` and lowers every vertex behind (or on) it by `delta`. Hundreds of
//! overlapping steps add up to a rough, fractal-looking surface.

use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::config::FaultConfig;

/// A vertical plane through `point` with horizontal unit `normal` (z = 0).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaultPlane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl FaultPlane {
    /// Plane through `point` facing `direction`. The direction is flattened
    /// to the XY plane and normalized.
    pub fn new(point: Vec2, direction: Vec2) -> Option<Self> {
        let normal = direction.try_normalize()?;
        Some(Self {
            point: point.extend(0.0),
            normal: normal.extend(0.0),
        })
    }

    /// Random plane: point uniform in `[min, max]`, direction uniform on the
    /// unit circle.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, min: Vec2, max: Vec2) -> Self {
        let point = Vec2::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y));
        let angle: f32 = rng.gen_range(0.0..TAU);
        Self {
            point: point.extend(0.0),
            normal: Vec3::new(angle.cos(), angle.sin(), 0.0),
        }
    }

    /// Signed distance of `v` from the plane.
    #[inline]
    pub fn signed_distance(&self, v: Vec3) -> f32 {
        (v - self.point).dot(self.normal)
    }

    /// Step every vertex up or down by `delta` depending on its side.
    pub fn displace(&self, positions: &mut [Vec3], delta: f32) {
        for v in positions.iter_mut() {
            if self.signed_distance(*v) > 0.0 {
                v.z += delta;
            } else {
                v.z -= delta;
            }
        }
    }
}

/// Run `config.iterations` random fault passes over `positions`.
pub fn apply_faults<R: Rng + ?Sized>(
    positions: &mut [Vec3],
    min: Vec2,
    max: Vec2,
    config: &FaultConfig,
    rng: &mut R,
) {
    for _ in 0..config.iterations {
        let plane = FaultPlane::random(rng, min, max);
        plane.displace(positions, config.delta);
    }
}
