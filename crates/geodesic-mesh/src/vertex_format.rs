//! Canonical `wgpu::VertexBufferLayout` for the batched sphere mesh.
//!
//! ## Attribute Packing
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |

use std::mem;

use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::packed::SphereVertex;

/// Vertex attributes for [`SphereVertex`].
pub const SPHERE_VERTEX_ATTRIBUTES: [VertexAttribute; 2] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
];

/// The vertex buffer layout for sphere render pipelines.
///
/// Uses [`SPHERE_VERTEX_ATTRIBUTES`] with a 24-byte stride matching [`SphereVertex`].
pub const SPHERE_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<SphereVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &SPHERE_VERTEX_ATTRIBUTES,
};

/// Return the sphere vertex buffer layout as an owned value.
pub fn sphere_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    SPHERE_VERTEX_LAYOUT
}

const _: () = assert!(
    mem::size_of::<SphereVertex>() == 24,
    "SphereVertex size changed, update SPHERE_VERTEX_LAYOUT"
);
const _: () =
    assert!(SPHERE_VERTEX_ATTRIBUTES[0].offset == mem::offset_of!(SphereVertex, position) as u64);
const _: () =
    assert!(SPHERE_VERTEX_ATTRIBUTES[1].offset == mem::offset_of!(SphereVertex, normal) as u64);
const _: () = assert!(
    SPHERE_VERTEX_ATTRIBUTES[1].offset + 12 <= mem::size_of::<SphereVertex>() as u64,
    "Last attribute exceeds vertex stride"
);
