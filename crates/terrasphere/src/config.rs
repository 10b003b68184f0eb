//! Construction parameters for the terrain synthesizer and particle integrator.
//!
//! All structs deserialize with per-field defaults, so a config file only has
//! to name what it overrides. Nothing here is read from the environment; call
//! `validate` (or let the constructors do it) before building anything.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{check_bounds, check_range, ConfigError};
use crate::serde_utils::{deserialize_vec3, serialize_vec3};

// =============================================================================
// TERRAIN
// =============================================================================

/// What to do with a vertex whose accumulated normal has zero length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateNormalPolicy {
    /// Substitute `(0, 0, 1)` and log a warning.
    #[default]
    UnitUp,
    /// Abort construction with `TerrainError::DegenerateGeometry`.
    Fail,
}

/// Fault-plane displacement parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FaultConfig {
    /// Number of random fault planes
    #[serde(default = "default_fault_iterations")]
    pub iterations: usize,
    /// Elevation change per plane on each side
    #[serde(default = "default_fault_delta")]
    pub delta: f32,
}

fn default_fault_iterations() -> usize {
    FAULT_ITERATIONS
}
fn default_fault_delta() -> f32 {
    FAULT_DELTA
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            iterations: FAULT_ITERATIONS,
            delta: FAULT_DELTA,
        }
    }
}

impl FaultConfig {
    /// No displacement at all; the grid stays flat.
    pub fn none() -> Self {
        Self {
            iterations: 0,
            delta: FAULT_DELTA,
        }
    }
}

/// Terrain grid description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainConfig {
    /// Cells per axis; the grid has `(divisions + 1)²` vertices
    #[serde(default = "default_divisions")]
    pub divisions: usize,
    #[serde(default = "default_terrain_min")]
    pub min_x: f32,
    #[serde(default = "default_terrain_max")]
    pub max_x: f32,
    #[serde(default = "default_terrain_min")]
    pub min_y: f32,
    #[serde(default = "default_terrain_max")]
    pub max_y: f32,
    #[serde(default)]
    pub fault: FaultConfig,
    #[serde(default)]
    pub degenerate_normals: DegenerateNormalPolicy,
}

fn default_divisions() -> usize {
    TERRAIN_DIVISIONS
}
fn default_terrain_min() -> f32 {
    -TERRAIN_HALF_EXTENT
}
fn default_terrain_max() -> f32 {
    TERRAIN_HALF_EXTENT
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            divisions: TERRAIN_DIVISIONS,
            min_x: -TERRAIN_HALF_EXTENT,
            max_x: TERRAIN_HALF_EXTENT,
            min_y: -TERRAIN_HALF_EXTENT,
            max_y: TERRAIN_HALF_EXTENT,
            fault: FaultConfig::default(),
            degenerate_normals: DegenerateNormalPolicy::default(),
        }
    }
}

impl TerrainConfig {
    /// Grid over `[min_x, max_x] × [min_y, max_y]` with default fault parameters.
    pub fn new(divisions: usize, min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self {
            divisions,
            min_x,
            max_x,
            min_y,
            max_y,
            ..Self::default()
        }
    }

    pub fn with_fault(mut self, fault: FaultConfig) -> Self {
        self.fault = fault;
        self
    }

    pub fn with_degenerate_normals(mut self, policy: DegenerateNormalPolicy) -> Self {
        self.degenerate_normals = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Face indices are u32, so every vertex index has to fit.
        let side = self.divisions.checked_add(1);
        let vertex_count = side.and_then(|n| n.checked_mul(n));
        if self.divisions == 0 || vertex_count.map_or(true, |n| n > u32::MAX as usize) {
            return Err(ConfigError::InvalidDivisions(self.divisions));
        }
        check_bounds('x', self.min_x, self.max_x)?;
        check_bounds('y', self.min_y, self.max_y)?;
        if !self.fault.delta.is_finite() {
            return Err(ConfigError::NonFinite("fault.delta"));
        }
        Ok(())
    }
}

// =============================================================================
// PARTICLES
// =============================================================================

/// How elapsed time enters the per-tick update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStepping {
    /// Gravity scales with elapsed time; the position step and the drag
    /// attenuation are fixed per tick. Motion speed depends on frame rate.
    #[default]
    Observed,
    /// Every term scales with elapsed time. Drag is normalized so that one
    /// tick of `reference_dt` matches the observed attenuation.
    FrameRateIndependent,
}

/// Container, force, and spawn parameters for the sphere simulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    #[serde(
        default = "default_box_min",
        serialize_with = "serialize_vec3",
        deserialize_with = "deserialize_vec3"
    )]
    pub box_min: Vec3,
    #[serde(
        default = "default_box_max",
        serialize_with = "serialize_vec3",
        deserialize_with = "deserialize_vec3"
    )]
    pub box_max: Vec3,
    #[serde(
        default = "default_gravity",
        serialize_with = "serialize_vec3",
        deserialize_with = "deserialize_vec3"
    )]
    pub gravity: Vec3,
    /// Base drag coefficient in (0, 1)
    #[serde(default = "default_drag")]
    pub drag: f32,
    #[serde(default = "default_drag_exponent")]
    pub drag_exponent: f32,
    /// Velocity multiplier for the per-tick position update
    #[serde(default = "default_position_step")]
    pub position_step: f32,
    #[serde(default = "default_restitution")]
    pub restitution: f32,
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Half extents of the spawn region, centred on the box centre
    #[serde(
        default = "default_spawn_extent",
        serialize_with = "serialize_vec3",
        deserialize_with = "deserialize_vec3"
    )]
    pub spawn_extent: Vec3,
    #[serde(
        default = "default_velocity_min",
        serialize_with = "serialize_vec3",
        deserialize_with = "deserialize_vec3"
    )]
    pub velocity_min: Vec3,
    #[serde(
        default = "default_velocity_max",
        serialize_with = "serialize_vec3",
        deserialize_with = "deserialize_vec3"
    )]
    pub velocity_max: Vec3,
    #[serde(default = "default_radius_min")]
    pub radius_min: f32,
    #[serde(default = "default_radius_max")]
    pub radius_max: f32,
    #[serde(default)]
    pub time_stepping: TimeStepping,
    /// Tick length the frame-rate independent mode is calibrated against
    #[serde(default = "default_reference_dt")]
    pub reference_dt: f32,
}

fn default_box_min() -> Vec3 {
    Vec3::splat(-BOX_HALF_EXTENT)
}
fn default_box_max() -> Vec3 {
    Vec3::splat(BOX_HALF_EXTENT)
}
fn default_gravity() -> Vec3 {
    Vec3::new(0.0, GRAVITY, 0.0)
}
fn default_drag() -> f32 {
    DRAG
}
fn default_drag_exponent() -> f32 {
    DRAG_EXPONENT
}
fn default_position_step() -> f32 {
    POSITION_STEP
}
fn default_restitution() -> f32 {
    RESTITUTION
}
fn default_batch_size() -> usize {
    SPAWN_BATCH
}
fn default_spawn_extent() -> Vec3 {
    Vec3::splat(SPAWN_HALF_EXTENT)
}
fn default_velocity_min() -> Vec3 {
    Vec3::splat(-SPAWN_SPEED)
}
fn default_velocity_max() -> Vec3 {
    Vec3::splat(SPAWN_SPEED)
}
fn default_radius_min() -> f32 {
    MIN_RADIUS
}
fn default_radius_max() -> f32 {
    MAX_RADIUS
}
fn default_reference_dt() -> f32 {
    REFERENCE_DT
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            box_min: default_box_min(),
            box_max: default_box_max(),
            gravity: default_gravity(),
            drag: DRAG,
            drag_exponent: DRAG_EXPONENT,
            position_step: POSITION_STEP,
            restitution: RESTITUTION,
            batch_size: SPAWN_BATCH,
            spawn_extent: default_spawn_extent(),
            velocity_min: default_velocity_min(),
            velocity_max: default_velocity_max(),
            radius_min: MIN_RADIUS,
            radius_max: MAX_RADIUS,
            time_stepping: TimeStepping::default(),
            reference_dt: REFERENCE_DT,
        }
    }
}

const AXES: [char; 3] = ['x', 'y', 'z'];

impl ParticleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (k, axis) in AXES.into_iter().enumerate() {
            check_bounds(axis, self.box_min[k], self.box_max[k])?;
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite("gravity"));
        }
        // Negated comparison so NaN is rejected as well.
        if !(self.drag > 0.0 && self.drag < 1.0) {
            return Err(ConfigError::InvalidDrag(self.drag));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        positive("drag_exponent", self.drag_exponent)?;
        positive("position_step", self.position_step)?;
        positive("reference_dt", self.reference_dt)?;
        if self.batch_size == 0 {
            return Err(ConfigError::EmptyBatch);
        }

        if !self.spawn_extent.is_finite() {
            return Err(ConfigError::NonFinite("spawn_extent"));
        }
        if self.spawn_extent.min_element() < 0.0 {
            return Err(ConfigError::NotPositive("spawn_extent"));
        }
        if !(self.spawn_extent * 2.0).is_finite() {
            return Err(ConfigError::NonFinite("spawn_extent"));
        }
        for k in 0..3 {
            check_range("velocity", self.velocity_min[k], self.velocity_max[k])?;
        }

        check_range("radius", self.radius_min, self.radius_max)?;
        positive("radius_min", self.radius_min)?;
        let extent = self.box_max - self.box_min;
        for (k, axis) in AXES.into_iter().enumerate() {
            if 2.0 * self.radius_max >= extent[k] {
                return Err(ConfigError::ParticleTooLarge {
                    axis,
                    radius: self.radius_max,
                    extent: extent[k],
                });
            }
            // New spheres must start fully inside the box.
            let half_extent = 0.5 * extent[k];
            if self.spawn_extent[k] + self.radius_max > half_extent {
                return Err(ConfigError::SpawnOutsideBox {
                    axis,
                    spawn_extent: self.spawn_extent[k],
                    radius: self.radius_max,
                    half_extent,
                });
            }
        }
        Ok(())
    }

    /// Centre of the container; spawn regions are placed around it.
    pub fn box_center(&self) -> Vec3 {
        (self.box_min + self.box_max) * 0.5
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite(name));
    }
    if value <= 0.0 {
        return Err(ConfigError::NotPositive(name));
    }
    Ok(())
}
