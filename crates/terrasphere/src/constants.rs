//! Default constants for terrain synthesis and the sphere simulation.
//!
//! ## Time conventions
//!
//! Elapsed time handed to the integrator is in **seconds**. Only gravity is
//! scaled by it in the default time-stepping mode; the position step and the
//! drag attenuation are applied once per tick (see `TimeStepping`).

// =============================================================================
// TERRAIN
// =============================================================================

/// Grid subdivisions per axis used by the flyover scene.
pub const TERRAIN_DIVISIONS: usize = 256;

/// Half extent of the square terrain domain (domain is `[-6, 6]²`).
pub const TERRAIN_HALF_EXTENT: f32 = 6.0;

/// Number of random fault planes applied to a fresh grid.
pub const FAULT_ITERATIONS: usize = 700;

/// Elevation step applied on either side of a fault plane.
pub const FAULT_DELTA: f32 = 0.0015;

/// Normal substituted for vertices whose accumulated normal vanishes.
pub const UP_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Elevation band colours [R, G, B], lowest band first.
pub const WATER_COLOR: [f32; 3] = [52.0 / 255.0, 152.0 / 255.0, 235.0 / 255.0];
pub const GRASS_COLOR: [f32; 3] = [101.0 / 255.0, 235.0 / 255.0, 52.0 / 255.0];
pub const ROCK_COLOR: [f32; 3] = [176.0 / 255.0, 134.0 / 255.0, 7.0 / 255.0];
pub const SNOW_COLOR: [f32; 3] = [1.0, 1.0, 1.0];

// =============================================================================
// PARTICLES
// =============================================================================

/// Gravity acceleration (units/s^2) - negative Y direction
pub const GRAVITY: f32 = -9.8;

/// Half extent of the cubic container (container is `[-5, 5]³`).
pub const BOX_HALF_EXTENT: f32 = 5.0;

/// Base drag coefficient, must lie in (0, 1).
pub const DRAG: f32 = 0.9;

/// Exponent applied to the drag coefficient once per tick.
pub const DRAG_EXPONENT: f32 = 0.15;

/// Fixed scalar multiplying velocity in the per-tick position update.
pub const POSITION_STEP: f32 = 0.15;

/// Fraction of velocity kept (and reversed) on a wall hit.
pub const RESTITUTION: f32 = 0.7;

/// Particles appended per spawn trigger.
pub const SPAWN_BATCH: usize = 50;

/// Half extent of the spawn region on every axis.
pub const SPAWN_HALF_EXTENT: f32 = 4.0;

/// Per-axis spawn speed bound (velocities drawn from `[-v, v]`).
pub const SPAWN_SPEED: f32 = 2.0;

/// Sphere radius range at spawn.
pub const MIN_RADIUS: f32 = 0.1;
pub const MAX_RADIUS: f32 = 0.5;

/// Reference frame time for frame-rate independent stepping (60 Hz).
pub const REFERENCE_DT: f32 = 1.0 / 60.0;
