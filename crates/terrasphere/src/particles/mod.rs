//! Bouncing-sphere particles stored as parallel arrays.

pub mod integrator;
pub mod spawn;

use glam::Vec3;

use crate::vertex::SphereInstance;

pub use integrator::ParticleIntegrator;
pub use spawn::SpawnRegion;

/// Copy of one particle's state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Radius replicated on every axis
    pub radius: Vec3,
    pub color: Vec3,
}

/// Particle attributes in struct-of-arrays form.
///
/// Index `i` of every array describes the same particle. The arrays are only
/// reachable through methods that grow or clear all four together.
#[derive(Clone, Debug, Default)]
pub struct ParticleSet {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    radii: Vec<Vec3>,
    colors: Vec<Vec3>,
}

impl ParticleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            velocities: Vec::with_capacity(capacity),
            radii: Vec::with_capacity(capacity),
            colors: Vec::with_capacity(capacity),
        }
    }

    /// Append one sphere of uniform `radius`.
    pub fn push(&mut self, position: Vec3, velocity: Vec3, radius: f32, color: Vec3) {
        self.positions.push(position);
        self.velocities.push(velocity);
        self.radii.push(Vec3::splat(radius));
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Drop every particle at once.
    ///
    /// The whole set is replaced, so no array can be observed at a different
    /// length from the others.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn get(&self, index: usize) -> Option<Particle> {
        if index >= self.len() {
            return None;
        }
        Some(Particle {
            position: self.positions[index],
            velocity: self.velocities[index],
            radius: self.radii[index],
            color: self.colors[index],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Particle> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn radii(&self) -> &[Vec3] {
        &self.radii
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Mutable access to the dynamic state only. Radius and colour are fixed
    /// at creation.
    pub(crate) fn dynamics_mut(&mut self) -> (&mut [Vec3], &mut [Vec3], &[Vec3]) {
        (&mut self.positions, &mut self.velocities, &self.radii)
    }

    /// Sum of `0.5 · r³ · |v|²`, with volume standing in for mass.
    pub fn kinetic_energy(&self) -> f32 {
        self.velocities
            .iter()
            .zip(&self.radii)
            .map(|(v, r)| 0.5 * r.x.powi(3) * v.length_squared())
            .sum()
    }

    /// Per-instance records for the shared sphere mesh.
    pub fn instances(&self) -> Vec<SphereInstance> {
        self.iter()
            .map(|p| SphereInstance {
                position: p.position.to_array(),
                scale: p.radius.to_array(),
                color: p.color.to_array(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_arrays_parallel() {
        let mut particles = ParticleSet::new();
        particles.push(Vec3::ONE, Vec3::X, 0.25, Vec3::new(1.0, 0.0, 0.0));
        particles.push(Vec3::ZERO, Vec3::Y, 0.5, Vec3::new(0.0, 1.0, 0.0));

        assert_eq!(particles.len(), 2);
        assert_eq!(particles.velocities().len(), 2);
        assert_eq!(particles.radii().len(), 2);
        assert_eq!(particles.colors().len(), 2);
        assert_eq!(particles.radii()[1], Vec3::splat(0.5));
    }

    #[test]
    fn test_clear_empties_everything() {
        let mut particles = ParticleSet::with_capacity(8);
        for _ in 0..5 {
            particles.push(Vec3::ONE, Vec3::ZERO, 0.1, Vec3::ONE);
        }
        particles.clear();

        assert!(particles.is_empty());
        assert!(particles.velocities().is_empty());
        assert!(particles.radii().is_empty());
        assert!(particles.colors().is_empty());
    }

    #[test]
    fn test_get_out_of_range() {
        let mut particles = ParticleSet::new();
        particles.push(Vec3::ONE, Vec3::ZERO, 0.1, Vec3::ONE);
        assert!(particles.get(0).is_some());
        assert!(particles.get(1).is_none());
    }

    #[test]
    fn test_kinetic_energy() {
        let mut particles = ParticleSet::new();
        particles.push(Vec3::ZERO, Vec3::new(2.0, 0.0, 0.0), 1.0, Vec3::ONE);
        particles.push(Vec3::ZERO, Vec3::ZERO, 1.0, Vec3::ONE);
        assert!((particles.kinetic_energy() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_instances() {
        let mut particles = ParticleSet::new();
        particles.push(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 0.3, Vec3::new(0.1, 0.2, 0.3));
        let instances = particles.instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(instances[0].scale, [0.3, 0.3, 0.3]);
        assert_eq!(instances[0].color, [0.1, 0.2, 0.3]);
    }
}
