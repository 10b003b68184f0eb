//! Random batch insertion.

use glam::Vec3;
use rand::Rng;

use super::ParticleSet;
use crate::config::ParticleConfig;
use crate::error::ConfigError;

/// Sampling ranges for new spheres.
///
/// Only built from a validated `ParticleConfig`, so every range is ordered
/// and finite and the region lies inside the box.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnRegion {
    center: Vec3,
    half_extent: Vec3,
    velocity_min: Vec3,
    velocity_max: Vec3,
    radius_min: f32,
    radius_max: f32,
    batch_size: usize,
}

impl SpawnRegion {
    pub fn from_config(config: &ParticleConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            center: config.box_center(),
            half_extent: config.spawn_extent,
            velocity_min: config.velocity_min,
            velocity_max: config.velocity_max,
            radius_min: config.radius_min,
            radius_max: config.radius_max,
            batch_size: config.batch_size,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn half_extent(&self) -> Vec3 {
        self.half_extent
    }

    /// Per-axis velocity bounds, inclusive.
    pub fn velocity_range(&self) -> (Vec3, Vec3) {
        (self.velocity_min, self.velocity_max)
    }

    pub fn radius_range(&self) -> (f32, f32) {
        (self.radius_min, self.radius_max)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Append `batch_size` spheres. Existing entries are left untouched.
    pub fn spawn_batch<R: Rng + ?Sized>(&self, particles: &mut ParticleSet, rng: &mut R) -> usize {
        for _ in 0..self.batch_size {
            let offset = Vec3::new(
                rng.gen_range(-self.half_extent.x..=self.half_extent.x),
                rng.gen_range(-self.half_extent.y..=self.half_extent.y),
                rng.gen_range(-self.half_extent.z..=self.half_extent.z),
            );
            let velocity = Vec3::new(
                rng.gen_range(self.velocity_min.x..=self.velocity_max.x),
                rng.gen_range(self.velocity_min.y..=self.velocity_max.y),
                rng.gen_range(self.velocity_min.z..=self.velocity_max.z),
            );
            let radius = rng.gen_range(self.radius_min..=self.radius_max);
            let color = Vec3::new(rng.gen(), rng.gen(), rng.gen());

            particles.push(self.center + offset, velocity, radius, color);
        }
        log::debug!(
            "Spawned {} spheres ({} total)",
            self.batch_size,
            particles.len()
        );
        self.batch_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_batch_respects_ranges() {
        let config = ParticleConfig::default();
        let region = SpawnRegion::from_config(&config).unwrap();
        let mut particles = ParticleSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let added = region.spawn_batch(&mut particles, &mut rng);

        assert_eq!(added, config.batch_size);
        for p in particles.iter() {
            assert!((p.position - region.center()).abs().cmple(region.half_extent()).all());
            assert!(p.velocity.cmpge(config.velocity_min).all());
            assert!(p.velocity.cmple(config.velocity_max).all());
            assert!(p.radius.x >= config.radius_min && p.radius.x <= config.radius_max);
            assert_eq!(p.radius, Vec3::splat(p.radius.x));
            assert!(p.color.cmpge(Vec3::ZERO).all() && p.color.cmple(Vec3::ONE).all());
        }
    }

    #[test]
    fn test_degenerate_ranges_are_allowed() {
        let config = ParticleConfig {
            spawn_extent: Vec3::ZERO,
            velocity_min: Vec3::ONE,
            velocity_max: Vec3::ONE,
            radius_min: 0.2,
            radius_max: 0.2,
            batch_size: 3,
            ..Default::default()
        };
        let region = SpawnRegion::from_config(&config).unwrap();
        let mut particles = ParticleSet::new();
        region.spawn_batch(&mut particles, &mut ChaCha8Rng::seed_from_u64(5));

        assert_eq!(particles.len(), 3);
        for p in particles.iter() {
            assert_eq!(p.position, config.box_center());
            assert_eq!(p.velocity, Vec3::ONE);
            assert_eq!(p.radius, Vec3::splat(0.2));
        }
    }

    #[test]
    fn test_invalid_config_builds_no_region() {
        let config = ParticleConfig {
            radius_min: 0.4,
            radius_max: 0.3,
            ..Default::default()
        };
        assert!(matches!(
            SpawnRegion::from_config(&config),
            Err(ConfigError::InvalidRange { name: "radius", .. })
        ));
    }
}
