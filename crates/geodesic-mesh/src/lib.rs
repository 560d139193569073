//! Mesh outputs for geodesic spheres: flattened vertex/index buffers,
//! per-triangle meshes, packed GPU vertices, and the presentation step.

pub mod packed;
pub mod presentation;
pub mod sphere_mesh;
pub mod triangle_mesh;
pub mod vertex_format;

pub use packed::{PackedSphereMesh, SphereVertex};
pub use presentation::{Presentation, PresentedSphere, RenderStrategy};
pub use sphere_mesh::{SphereMesh, build, to_vertex_index_buffers};
pub use triangle_mesh::TriangleMesh;
pub use vertex_format::{
    SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_LAYOUT, sphere_vertex_buffer_layout,
};
