//! GPU-ready vertex data for the batched sphere mesh.
//!
//! [`SphereVertex`] is a 24-byte `Pod` vertex (position + normal) that can be
//! uploaded with a plain byte cast.

use crate::sphere_mesh::SphereMesh;

/// A single vertex of the batched sphere mesh.
///
/// Layout (24 bytes total):
///   - `[0..12]`  position `[f32; 3]`
///   - `[12..24]` normal `[f32; 3]` (flat face normal)
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(SphereVertex, [u8; 24]);

impl SphereVertex {
    /// Create a vertex from a position and its face normal.
    pub fn new(position: [f32; 3], normal: [f32; 3]) -> Self {
        Self { position, normal }
    }
}

/// A packed sphere mesh containing vertex and index buffers ready for GPU upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackedSphereMesh {
    /// Packed vertex buffer.
    pub vertices: Vec<SphereVertex>,
    /// Index buffer (triangles, 3 indices per triangle).
    pub indices: Vec<u32>,
}

impl PackedSphereMesh {
    /// Pack a flattened sphere mesh, giving each triangle its flat normal.
    ///
    /// Vertices keep the mesh's buffer order, so its sequential index buffer
    /// still addresses the same corners.
    pub fn from_mesh(mesh: &SphereMesh) -> Self {
        let mut vertices = Vec::with_capacity(mesh.vertex_count());

        for tri in mesh.triangles() {
            let normal = tri.unit_normal().to_array();
            vertices.extend(
                tri.vertices()
                    .iter()
                    .map(|p| SphereVertex::new(p.to_array(), normal)),
            );
        }

        Self {
            vertices,
            indices: mesh.indices().to_vec(),
        }
    }

    /// Returns `true` if the mesh contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the size of the vertex buffer in bytes.
    pub fn vertex_buffer_bytes(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<SphereVertex>()
    }

    /// Returns the size of the index buffer in bytes.
    pub fn index_buffer_bytes(&self) -> usize {
        self.indices.len() * std::mem::size_of::<u32>()
    }

    /// Returns the vertex data as a byte slice for GPU upload (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

impl From<&SphereMesh> for PackedSphereMesh {
    fn from(mesh: &SphereMesh) -> Self {
        Self::from_mesh(mesh)
    }
}
