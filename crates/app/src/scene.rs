//! Scene state: one terrain, one sphere container, one RNG.
//!
//! The scene is the single owner of everything the renderer reads. Commands
//! and `advance` take `&mut self`, so a render pass holding `&Scene` can never
//! observe the particle arrays mid-update.

use rand::rngs::StdRng;
use rand::SeedableRng;
use terrasphere::{
    ElevationBands, ParticleIntegrator, ParticleSet, SphereInstance, Terrain,
};

use crate::command::Command;
use crate::config::SceneConfig;
use crate::error::AppResult;

/// Snapshot of scene counters for logging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneStats {
    pub frame: u64,
    pub elapsed: f32,
    pub particles: usize,
    pub kinetic_energy: f32,
    pub terrain_vertices: usize,
    pub terrain_faces: usize,
}

impl SceneStats {
    pub fn format_summary(&self) -> String {
        format!(
            "frame {} | t = {:.2}s | spheres: {} | KE: {:.3} | terrain: {} verts, {} tris",
            self.frame,
            self.elapsed,
            self.particles,
            self.kinetic_energy,
            self.terrain_vertices,
            self.terrain_faces
        )
    }
}

pub struct Scene {
    terrain: Terrain,
    bands: ElevationBands,
    particles: ParticleSet,
    integrator: ParticleIntegrator,
    rng: StdRng,
    frame: u64,
    elapsed: f32,
}

impl Scene {
    /// Validate `config`, synthesize the terrain and set up an empty
    /// container. Terrain and spawning draw from the same seeded RNG, in
    /// that order.
    pub fn new(config: &SceneConfig) -> AppResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let terrain = Terrain::generate(&config.terrain, &mut rng)?;
        let integrator = ParticleIntegrator::new(config.particles.clone())?;

        log::info!(
            "Scene ready: seed {}, box {:?}..{:?}, {:?} time stepping",
            config.seed,
            config.particles.box_min,
            config.particles.box_max,
            config.particles.time_stepping
        );

        Ok(Self {
            terrain,
            bands: config.bands.clone(),
            particles: ParticleSet::with_capacity(config.particles.batch_size),
            integrator,
            rng,
            frame: 0,
            elapsed: 0.0,
        })
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SpawnBatch => {
                self.integrator.spawn_batch(&mut self.particles, &mut self.rng);
            }
            Command::Clear => {
                let removed = self.particles.len();
                self.particles.clear();
                log::debug!("Cleared {} spheres", removed);
            }
        }
    }

    /// Step the spheres by `dt` seconds. The terrain is static.
    pub fn advance(&mut self, dt: f32) {
        self.integrator.step(&mut self.particles, dt);
        self.frame += 1;
        self.elapsed += dt;
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn bands(&self) -> &ElevationBands {
        &self.bands
    }

    /// Terrain vertex colours under the configured bands.
    pub fn terrain_colors(&self) -> Vec<[f32; 3]> {
        self.terrain.vertex_colors(&self.bands)
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn integrator(&self) -> &ParticleIntegrator {
        &self.integrator
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Instance records for the current sphere state.
    pub fn sphere_instances(&self) -> Vec<SphereInstance> {
        self.particles.instances()
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            frame: self.frame,
            elapsed: self.elapsed,
            particles: self.particles.len(),
            kinetic_energy: self.particles.kinetic_energy(),
            terrain_vertices: self.terrain.num_vertices(),
            terrain_faces: self.terrain.num_faces(),
        }
    }
}
