//! Fault-plane terrain and bouncing-sphere simulation core.
//!
//! Two independent, renderer-agnostic components:
//!
//! - [`Terrain`]: a regular grid roughened by random fault planes, with
//!   smoothed vertex normals and a wireframe edge list. Built once.
//! - [`ParticleIntegrator`] over a [`ParticleSet`]: spheres under gravity and
//!   drag, bouncing inelastically inside an axis-aligned box. Stepped once
//!   per frame.
//!
//! Neither owns GPU resources. Both expose flat buffers and `bytemuck`
//! vertex records for a renderer to upload.
//!
//! # Example
//!
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use terrasphere::{ParticleConfig, ParticleIntegrator, ParticleSet, Terrain, TerrainConfig};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let terrain = Terrain::generate(&TerrainConfig::new(16, -6.0, 6.0, -6.0, 6.0), &mut rng)?;
//! assert_eq!(terrain.num_vertices(), 17 * 17);
//!
//! let integrator = ParticleIntegrator::new(ParticleConfig::default())?;
//! let mut spheres = ParticleSet::new();
//! integrator.spawn_batch(&mut spheres, &mut rng);
//! integrator.step(&mut spheres, 1.0 / 60.0);
//! assert_eq!(spheres.len(), 50);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod particles;
pub mod serde_utils;
pub mod terrain;
pub mod vertex;

pub use config::{DegenerateNormalPolicy, FaultConfig, ParticleConfig, TerrainConfig, TimeStepping};
pub use error::{ConfigError, TerrainError, TerrainResult};
pub use glam::{Vec2, Vec3};
pub use particles::{Particle, ParticleIntegrator, ParticleSet, SpawnRegion};
pub use terrain::{ElevationBands, FaultPlane, Terrain};
pub use vertex::{ColoredTerrainVertex, SphereInstance, TerrainVertex};
