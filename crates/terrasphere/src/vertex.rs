//! Plain-old-data layouts handed to the renderer for upload.

use bytemuck::{Pod, Zeroable};

/// Interleaved terrain vertex.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl TerrainVertex {
    pub const STRIDE: usize = std::mem::size_of::<TerrainVertex>();
    pub const NORMAL_OFFSET: usize = 12;
}

/// Terrain vertex with its elevation band colour.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColoredTerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
}

impl ColoredTerrainVertex {
    pub const STRIDE: usize = std::mem::size_of::<ColoredTerrainVertex>();
}

/// Per-instance record for drawing one sphere of the shared sphere mesh.
///
/// `scale` is the radius replicated per axis.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereInstance {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub color: [f32; 3],
}

impl SphereInstance {
    pub const STRIDE: usize = std::mem::size_of::<SphereInstance>();
}

/// View any slice of vertex records as raw bytes for buffer upload.
pub fn as_bytes<T: Pod>(records: &[T]) -> &[u8] {
    bytemuck::cast_slice(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_vertex_layout() {
        assert_eq!(TerrainVertex::STRIDE, 24);
        assert_eq!(TerrainVertex::NORMAL_OFFSET, std::mem::size_of::<[f32; 3]>());
    }

    #[test]
    fn test_colored_vertex_layout() {
        assert_eq!(ColoredTerrainVertex::STRIDE, 36);
    }

    #[test]
    fn test_sphere_instance_layout() {
        assert_eq!(SphereInstance::STRIDE, 36);
        let instances = [SphereInstance::zeroed(); 4];
        assert_eq!(as_bytes(&instances).len(), 4 * 36);
    }
}
