//! Fault-plane terrain synthesis.
//!
//! A `Terrain` is built once and never changes afterwards:
//! 1. lay out a `(div + 1)²` vertex grid and its triangle topology,
//! 2. displace elevation with random fault planes,
//! 3. accumulate and normalize per-vertex normals,
//! 4. derive the wireframe edge list.
//!
//! Randomness is injected, so a seeded generator reproduces the same surface.

pub mod fault;
pub mod grid;
pub mod normals;
pub mod palette;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::config::TerrainConfig;
use crate::error::TerrainResult;
use crate::vertex::{ColoredTerrainVertex, TerrainVertex};

pub use fault::{apply_faults, FaultPlane};
pub use palette::ElevationBands;

/// Immutable terrain mesh ready for upload.
#[derive(Clone, Debug)]
pub struct Terrain {
    div: usize,
    min: Vec2,
    max: Vec2,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    edges: Vec<[u32; 2]>,
    degenerate_normals: usize,
}

impl Terrain {
    /// Build a terrain from `config`, drawing fault planes from `rng`.
    pub fn generate<R: Rng + ?Sized>(config: &TerrainConfig, rng: &mut R) -> TerrainResult<Self> {
        Self::build(config, |positions, min, max| {
            fault::apply_faults(positions, min, max, &config.fault, rng);
        })
    }

    /// Terrain with no fault passes, whatever `config.fault` says.
    pub fn flat(config: &TerrainConfig) -> TerrainResult<Self> {
        Self::build(config, |_, _, _| {})
    }

    fn build<F>(config: &TerrainConfig, displace: F) -> TerrainResult<Self>
    where
        F: FnOnce(&mut [Vec3], Vec2, Vec2),
    {
        config.validate()?;

        let div = config.divisions;
        let min = Vec2::new(config.min_x, config.min_y);
        let max = Vec2::new(config.max_x, config.max_y);

        let mut positions = grid::grid_positions(div, min, max);
        let faces = grid::grid_faces(div);

        displace(&mut positions, min, max);

        let (normals, degenerate_normals) =
            normals::vertex_normals(&positions, &faces, config.degenerate_normals)?;
        if degenerate_normals > 0 {
            log::warn!(
                "Terrain: {} vertices had zero-length normals, substituted +Z",
                degenerate_normals
            );
        }

        let edges = grid::wireframe_edges(&faces);

        let terrain = Self {
            div,
            min,
            max,
            positions,
            normals,
            faces,
            edges,
            degenerate_normals,
        };
        log::info!(
            "Terrain: generated {} vertices, {} triangles, {} edges",
            terrain.num_vertices(),
            terrain.num_faces(),
            terrain.num_edges()
        );
        terrain.dump_buffers();
        Ok(terrain)
    }

    pub fn divisions(&self) -> usize {
        self.div
    }

    /// Domain corners `(min, max)` in the XY plane.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.min, self.max)
    }

    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Vertices whose normal fell back to +Z.
    pub fn degenerate_normal_count(&self) -> usize {
        self.degenerate_normals
    }

    pub fn vertex_index(&self, i: usize, j: usize) -> usize {
        grid::vertex_index(self.div, i, j)
    }

    /// Position of the vertex at row `i`, column `j`.
    pub fn vertex(&self, i: usize, j: usize) -> Vec3 {
        self.positions[self.vertex_index(i, j)]
    }

    pub fn normal(&self, i: usize, j: usize) -> Vec3 {
        self.normals[self.vertex_index(i, j)]
    }

    pub fn elevation(&self, i: usize, j: usize) -> f32 {
        self.vertex(i, j).z
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Lowest and highest elevation over all vertices.
    pub fn elevation_range(&self) -> (f32, f32) {
        self.positions
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v.z), hi.max(v.z))
            })
    }

    // -------------------------------------------------------------------------
    // Renderer buffers
    // -------------------------------------------------------------------------

    /// Positions as `x, y, z` triples.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|v| v.to_array()).collect()
    }

    /// Normals as `x, y, z` triples.
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }

    /// Triangle list indices.
    pub fn index_buffer(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Line list indices for wireframe drawing.
    pub fn edge_buffer(&self) -> Vec<u32> {
        self.edges.iter().flatten().copied().collect()
    }

    pub fn mesh_vertices(&self) -> Vec<TerrainVertex> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(p, n)| TerrainVertex {
                position: p.to_array(),
                normal: n.to_array(),
            })
            .collect()
    }

    /// Per-vertex band colours over this terrain's own elevation range.
    pub fn vertex_colors(&self, bands: &ElevationBands) -> Vec<[f32; 3]> {
        let (lo, hi) = self.elevation_range();
        self.positions
            .iter()
            .map(|v| bands.color(v.z, lo, hi))
            .collect()
    }

    pub fn colored_mesh_vertices(&self, bands: &ElevationBands) -> Vec<ColoredTerrainVertex> {
        self.mesh_vertices()
            .into_iter()
            .zip(self.vertex_colors(bands))
            .map(|(v, color)| ColoredTerrainVertex {
                position: v.position,
                normal: v.normal,
                color,
            })
            .collect()
    }

    fn dump_buffers(&self) {
        if !log::log_enabled!(log::Level::Trace) {
            return;
        }
        for v in &self.positions {
            log::trace!("v {} {} {}", v.x, v.y, v.z);
        }
        for [a, b, c] in &self.faces {
            log::trace!("f {} {} {}", a, b, c);
        }
    }
}
