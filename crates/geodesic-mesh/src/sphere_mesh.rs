//! Flattened vertex/index buffers for a whole sphere.

use geodesic_sphere::{GeometryError, MAX_RESOLUTION, SphereBuilder, Triangle};
use glam::Vec3;

/// Flatten a triangle list into vertex and index buffers.
///
/// Triangle `i` contributes vertices `3i`, `3i + 1`, `3i + 2` and the index
/// triple `(3i, 3i + 1, 3i + 2)`. Vertices shared by neighbouring triangles
/// are duplicated, not welded.
///
/// Indices are `u32`, so the input must hold fewer than `u32::MAX / 3`
/// triangles. A sphere at [`MAX_RESOLUTION`] stays far below that.
pub fn to_vertex_index_buffers(triangles: &[Triangle]) -> (Vec<Vec3>, Vec<u32>) {
    let len = triangles.len() * 3;
    debug_assert!(
        u32::try_from(len).is_ok(),
        "{len} vertices overflow a u32 index buffer"
    );
    let mut positions = Vec::with_capacity(len);
    let mut indices = Vec::with_capacity(len);

    for (i, tri) in triangles.iter().enumerate() {
        let base = (i * 3) as u32;
        positions.extend_from_slice(tri.vertices());
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    (positions, indices)
}

/// A whole sphere as one non-welded mesh, ready for a single batched draw.
///
/// Only built through [`SphereMesh::from_triangles`], so positions always come
/// three per triangle and the index buffer is always `0, 1, 2, ...`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SphereMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
}

impl SphereMesh {
    /// Flatten a triangle list. See [`to_vertex_index_buffers`].
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let (positions, indices) = to_vertex_index_buffers(triangles);
        Self { positions, indices }
    }

    /// Returns the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Vertex positions, three per triangle.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Index buffer (triangles, 3 indices per triangle).
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns `true` if the mesh contains no vertices.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate the mesh back as triangles, in buffer order.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        self.positions
            .chunks_exact(3)
            .map(|tri| Triangle::new(tri[0], tri[1], tri[2]))
    }

    /// Largest deviation of any vertex from the unit sphere.
    pub fn max_radius_error(&self) -> f32 {
        self.positions
            .iter()
            .map(|p| (p.length() - 1.0).abs())
            .fold(0.0, f32::max)
    }
}

/// Build a geodesic sphere mesh at the given subdivision depth.
///
/// Runs the whole pipeline: octahedron, `resolution` subdivision passes, and
/// flattening. Fails before doing any work if the resolution is unsupported.
pub fn build(resolution: u32) -> Result<SphereMesh, GeometryError> {
    let mut builder = SphereBuilder::new(resolution)?;
    let mesh = SphereMesh::from_triangles(builder.build()?);

    tracing::debug!(
        resolution,
        triangles = mesh.triangle_count(),
        vertices = mesh.vertex_count(),
        "built sphere mesh"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geodesic_sphere::{generate_initial_triangles, subdivide, triangle_count};

    #[test]
    fn test_buffer_lengths() {
        let base = generate_initial_triangles();
        for n in 0..=3 {
            let tris = subdivide(&base, n).unwrap();
            let (positions, indices) = to_vertex_index_buffers(&tris);
            assert_eq!(positions.len(), tris.len() * 3);
            assert_eq!(indices.len(), tris.len() * 3);
        }
    }

    #[test]
    fn test_indices_are_consecutive_triples() {
        let base = generate_initial_triangles();
        let (_, indices) = to_vertex_index_buffers(&base);
        let expected: Vec<u32> = (0..24).collect();
        assert_eq!(indices, expected);

        for (i, tri) in indices.chunks_exact(3).enumerate() {
            let base = (i * 3) as u32;
            assert_eq!(tri, [base, base + 1, base + 2]);
        }
    }

    #[test]
    fn test_max_resolution_fits_u32_indices() {
        let vertices = triangle_count(MAX_RESOLUTION).unwrap() * 3;
        assert!(u32::try_from(vertices).is_ok());
    }

    #[test]
    fn test_accessors_expose_flattened_buffers() {
        let base = generate_initial_triangles();
        let mesh = SphereMesh::from_triangles(&base);
        let (positions, indices) = to_vertex_index_buffers(&base);
        assert_eq!(mesh.positions(), positions.as_slice());
        assert_eq!(mesh.indices(), indices.as_slice());
    }

    #[test]
    fn test_triangles_agree_with_index_buffer() {
        let mesh = build(2).unwrap();
        let indexed = mesh.indices().chunks_exact(3).map(|tri| {
            let p = mesh.positions();
            Triangle::new(p[tri[0] as usize], p[tri[1] as usize], p[tri[2] as usize])
        });
        assert!(mesh.triangles().eq(indexed));
    }

    #[test]
    fn test_positions_follow_triangle_order() {
        let base = generate_initial_triangles();
        let (positions, _) = to_vertex_index_buffers(&base);
        for (i, tri) in base.iter().enumerate() {
            assert_eq!(&positions[i * 3..i * 3 + 3], tri.vertices());
        }
    }

    #[test]
    fn test_no_welding() {
        // The octahedron has 6 distinct vertices but 24 buffer entries.
        let mesh = SphereMesh::from_triangles(&generate_initial_triangles());
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_empty_input() {
        let mesh = SphereMesh::from_triangles(&[]);
        assert!(mesh.is_empty());
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh, SphereMesh::default());
    }

    #[test]
    fn test_triangles_roundtrip() {
        let tris = subdivide(&generate_initial_triangles(), 2).unwrap();
        let mesh = SphereMesh::from_triangles(&tris);
        assert_eq!(mesh.triangles().len(), tris.len());
        assert!(mesh.triangles().eq(tris.iter().copied()));
    }

    #[test]
    fn test_build_counts_and_radius() {
        for n in 0..=4 {
            let mesh = build(n).unwrap();
            assert_eq!(mesh.triangle_count(), 8 * 4usize.pow(n));
            assert_eq!(mesh.vertex_count(), mesh.triangle_count() * 3);
            assert!(mesh.max_radius_error() < 1e-6);
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build(3).unwrap(), build(3).unwrap());
    }

    #[test]
    fn test_build_rejects_unsupported_resolution() {
        let err = build(MAX_RESOLUTION + 1).unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
