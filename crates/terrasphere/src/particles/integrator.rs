//! Per-tick sphere integration with inelastic wall response.
//!
//! Each tick:
//! 1. `position += velocity · step`
//! 2. `velocity = velocity · drag_factor + gravity · dt`
//! 3. per-axis collision against the container walls
//!
//! In `TimeStepping::Observed` mode `step` is the fixed `position_step` and
//! `drag_factor = drag^drag_exponent`, neither depending on `dt`. Only gravity
//! sees real elapsed time, so motion speeds up or slows down with frame rate.
//! `TimeStepping::FrameRateIndependent` uses `step = dt` and
//! `drag_factor = drag^(drag_exponent · dt / reference_dt)`.

use glam::Vec3;
use rand::Rng;

use super::spawn::SpawnRegion;
use super::ParticleSet;
use crate::config::{ParticleConfig, TimeStepping};
use crate::error::ConfigError;

/// Advances a `ParticleSet` inside an axis-aligned box.
#[derive(Clone, Debug)]
pub struct ParticleIntegrator {
    config: ParticleConfig,
    spawn: SpawnRegion,
}

impl ParticleIntegrator {
    /// Validate `config` and build an integrator for it.
    pub fn new(config: ParticleConfig) -> Result<Self, ConfigError> {
        let spawn = SpawnRegion::from_config(&config)?;
        Ok(Self { config, spawn })
    }

    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    pub fn spawn_region(&self) -> &SpawnRegion {
        &self.spawn
    }

    /// Append one configured batch of random spheres.
    pub fn spawn_batch<R: Rng + ?Sized>(&self, particles: &mut ParticleSet, rng: &mut R) -> usize {
        self.spawn.spawn_batch(particles, rng)
    }

    /// Velocity multiplier applied this tick.
    pub fn drag_factor(&self, dt: f32) -> f32 {
        let c = &self.config;
        match c.time_stepping {
            TimeStepping::Observed => c.drag.powf(c.drag_exponent),
            TimeStepping::FrameRateIndependent => {
                c.drag.powf(c.drag_exponent * dt / c.reference_dt)
            }
        }
    }

    /// Velocity multiplier for the position update this tick.
    pub fn position_step(&self, dt: f32) -> f32 {
        match self.config.time_stepping {
            TimeStepping::Observed => self.config.position_step,
            TimeStepping::FrameRateIndependent => dt,
        }
    }

    /// Advance every particle by one tick of `dt` seconds.
    pub fn step(&self, particles: &mut ParticleSet, dt: f32) {
        let drag_factor = self.drag_factor(dt);
        let position_step = self.position_step(dt);
        let gravity_impulse = self.config.gravity * dt;

        let (positions, velocities, radii) = particles.dynamics_mut();
        for ((position, velocity), radius) in positions.iter_mut().zip(velocities).zip(radii) {
            *position += *velocity * position_step;
            *velocity = *velocity * drag_factor + gravity_impulse;
            self.resolve_collisions(position, velocity, radius.x);
        }
    }

    /// Push a sphere back inside the box, one axis at a time.
    ///
    /// A wall hit places the sphere flush against that wall and reverses the
    /// axis velocity scaled by the restitution. Corner hits resolve each axis
    /// on its own.
    pub fn resolve_collisions(&self, position: &mut Vec3, velocity: &mut Vec3, radius: f32) {
        let min = self.config.box_min;
        let max = self.config.box_max;
        let restitution = self.config.restitution;

        for axis in 0..3 {
            if position[axis] - radius < min[axis] {
                position[axis] += min[axis] - (position[axis] - radius);
                velocity[axis] = -velocity[axis] * restitution;
            } else if position[axis] + radius > max[axis] {
                position[axis] -= (position[axis] + radius) - max[axis];
                velocity[axis] = -velocity[axis] * restitution;
            }
        }
    }
}
