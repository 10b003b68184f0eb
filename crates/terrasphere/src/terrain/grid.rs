//! Regular grid topology: vertex layout, triangle fan, and wireframe edges.
//!
//! Vertices are stored row-major: row `i` runs along Y, column `j` along X,
//! and vertex `(i, j)` lives at index `i * (div + 1) + j`.

use glam::{Vec2, Vec3};

/// Flat index of the vertex at row `i`, column `j`.
#[inline]
pub fn vertex_index(div: usize, i: usize, j: usize) -> usize {
    i * (div + 1) + j
}

/// Lay out `(div + 1)²` vertices evenly over `[min, max]` at zero elevation.
pub fn grid_positions(div: usize, min: Vec2, max: Vec2) -> Vec<Vec3> {
    let dx = (max.x - min.x) / div as f32;
    let dy = (max.y - min.y) / div as f32;

    let mut positions = Vec::with_capacity((div + 1) * (div + 1));
    for i in 0..=div {
        for j in 0..=div {
            positions.push(Vec3::new(min.x + j as f32 * dx, min.y + i as f32 * dy, 0.0));
        }
    }
    positions
}

/// Two triangles per cell, both wound counter-clockwise seen from +Z.
///
/// Upper: `(idx, idx+1, idx+div+1)`. Lower: `(idx+1, idx+div+2, idx+div+1)`.
pub fn grid_faces(div: usize) -> Vec<[u32; 3]> {
    let row = (div + 1) as u32;
    let mut faces = Vec::with_capacity(2 * div * div);
    for i in 0..div {
        for j in 0..div {
            let idx = vertex_index(div, i, j) as u32;
            faces.push([idx, idx + 1, idx + row]);
            faces.push([idx + 1, idx + 1 + row, idx + row]);
        }
    }
    faces
}

/// Three edges per triangle. Edges shared by neighbouring triangles appear
/// once per triangle.
pub fn wireframe_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut edges = Vec::with_capacity(faces.len() * 3);
    for &[a, b, c] in faces {
        edges.push([a, b]);
        edges.push([b, c]);
        edges.push([c, a]);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_positions_layout() {
        let positions = grid_positions(2, Vec2::new(-1.0, 0.0), Vec2::new(1.0, 4.0));
        assert_eq!(positions.len(), 9);
        assert_eq!(positions[0], Vec3::new(-1.0, 0.0, 0.0));
        // Row 0, column 2
        assert_eq!(positions[2], Vec3::new(1.0, 0.0, 0.0));
        // Row 1, column 1
        assert_eq!(positions[vertex_index(2, 1, 1)], Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(positions[8], Vec3::new(1.0, 4.0, 0.0));
    }

    #[test]
    fn test_single_cell_faces() {
        let faces = grid_faces(1);
        assert_eq!(faces, vec![[0, 1, 2], [1, 3, 2]]);
    }

    #[test]
    fn test_face_count() {
        for div in 1..6 {
            assert_eq!(grid_faces(div).len(), 2 * div * div);
        }
    }

    #[test]
    fn test_wireframe_keeps_shared_edges() {
        let faces = grid_faces(1);
        let edges = wireframe_edges(&faces);
        assert_eq!(edges.len(), 6);
        // The diagonal 1-2 is emitted by both triangles.
        let diagonal = edges
            .iter()
            .filter(|e| (e[0] == 1 && e[1] == 2) || (e[0] == 2 && e[1] == 1))
            .count();
        assert_eq!(diagonal, 2);
    }
}
