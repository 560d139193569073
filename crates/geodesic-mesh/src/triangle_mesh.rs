//! Standalone three-vertex meshes, one per sphere triangle.

use geodesic_sphere::Triangle;
use glam::Vec3;

/// A single triangle emitted as its own mesh.
///
/// Carries local indices `[0, 1, 2]` and a flat normal on every vertex,
/// which is what recomputing normals over three unshared vertices yields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions in winding order.
    pub positions: [Vec3; 3],
    /// Per-vertex normals (all equal to the face normal).
    pub normals: [Vec3; 3],
    /// Local index triple.
    pub indices: [u32; 3],
}

impl TriangleMesh {
    /// Emit `tri` as a standalone mesh with its flat unit normal.
    pub fn from_triangle(tri: &Triangle) -> Self {
        let normal = tri.unit_normal();
        Self {
            positions: *tri.vertices(),
            normals: [normal; 3],
            indices: tri.local_indices(),
        }
    }

    /// The face normal shared by all three vertices.
    pub fn normal(&self) -> Vec3 {
        self.normals[0]
    }
}

impl From<&Triangle> for TriangleMesh {
    fn from(tri: &Triangle) -> Self {
        Self::from_triangle(tri)
    }
}
