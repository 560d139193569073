//! The [`Triangle`] face type.

use glam::Vec3;

use crate::error::GeometryError;
use crate::winding::triangle_winds_outward;

/// One face of the sphere: three ordered points.
///
/// Vertex order defines the winding and therefore the direction of the
/// face normal. Construction does not check that the points lie on the
/// unit sphere; the subdivision code establishes that itself.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Triangle {
    vertices: [Vec3; 3],
}

impl Triangle {
    /// Index triple for a triangle emitted as its own three-vertex mesh.
    pub const LOCAL_INDICES: [u32; 3] = [0, 1, 2];

    /// Creates a triangle from three points.
    #[inline]
    #[must_use]
    pub const fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }

    /// Creates a triangle from a slice that must hold exactly three points.
    pub fn from_slice(points: &[Vec3]) -> Result<Self, GeometryError> {
        match *points {
            [v0, v1, v2] => Ok(Self::new(v0, v1, v2)),
            _ => Err(GeometryError::InvalidVertexCount {
                count: points.len(),
            }),
        }
    }

    /// The three vertices in winding order.
    #[inline]
    pub fn vertices(&self) -> &[Vec3; 3] {
        &self.vertices
    }

    #[inline]
    pub fn v0(&self) -> Vec3 {
        self.vertices[0]
    }

    #[inline]
    pub fn v1(&self) -> Vec3 {
        self.vertices[1]
    }

    #[inline]
    pub fn v2(&self) -> Vec3 {
        self.vertices[2]
    }

    /// Local index triple `[0, 1, 2]`.
    #[inline]
    pub fn local_indices(&self) -> [u32; 3] {
        Self::LOCAL_INDICES
    }

    /// Average of the three vertices.
    #[inline]
    pub fn centroid(&self) -> Vec3 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) / 3.0
    }

    /// Unnormalized face normal `(v1 - v0) × (v2 - v0)`.
    ///
    /// Its length is twice the triangle's area.
    #[inline]
    pub fn face_normal(&self) -> Vec3 {
        (self.vertices[1] - self.vertices[0]).cross(self.vertices[2] - self.vertices[0])
    }

    /// Unit face normal, or [`Vec3::ZERO`] for a degenerate triangle.
    #[inline]
    pub fn unit_normal(&self) -> Vec3 {
        self.face_normal().normalize_or_zero()
    }

    /// Whether the face normal points away from the origin.
    #[inline]
    pub fn winds_outward(&self) -> bool {
        triangle_winds_outward(self.vertices[0], self.vertices[1], self.vertices[2])
    }
}

impl From<[Vec3; 3]> for Triangle {
    fn from(vertices: [Vec3; 3]) -> Self {
        Self { vertices }
    }
}

impl TryFrom<&[Vec3]> for Triangle {
    type Error = GeometryError;

    fn try_from(points: &[Vec3]) -> Result<Self, Self::Error> {
        Self::from_slice(points)
    }
}

impl TryFrom<Vec<Vec3>> for Triangle {
    type Error = GeometryError;

    fn try_from(points: Vec<Vec3>) -> Result<Self, Self::Error> {
        Self::from_slice(&points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_vertex_order() {
        let tri = Triangle::new(Vec3::Y, Vec3::Z, Vec3::X);
        assert_eq!(tri.v0(), Vec3::Y);
        assert_eq!(tri.v1(), Vec3::Z);
        assert_eq!(tri.v2(), Vec3::X);
        assert_eq!(tri.vertices(), &[Vec3::Y, Vec3::Z, Vec3::X]);
    }

    #[test]
    fn test_from_slice_accepts_three_points() {
        let points = [Vec3::Y, Vec3::Z, Vec3::X];
        let tri = Triangle::from_slice(&points).unwrap();
        assert_eq!(tri, Triangle::new(Vec3::Y, Vec3::Z, Vec3::X));
    }

    #[test]
    fn test_from_slice_rejects_wrong_lengths() {
        for len in [0, 1, 2, 4, 6] {
            let points = vec![Vec3::X; len];
            let err = Triangle::from_slice(&points).unwrap_err();
            assert_eq!(err, GeometryError::InvalidVertexCount { count: len });
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_try_from_vec() {
        let ok: Result<Triangle, _> = vec![Vec3::X, Vec3::Y, Vec3::Z].try_into();
        assert!(ok.is_ok());

        let err: Result<Triangle, _> = vec![Vec3::X, Vec3::Y].try_into();
        assert_eq!(err, Err(GeometryError::InvalidVertexCount { count: 2 }));
    }

    #[test]
    fn test_local_indices() {
        let tri = Triangle::new(Vec3::Y, Vec3::Z, Vec3::X);
        assert_eq!(tri.local_indices(), [0, 1, 2]);
    }

    #[test]
    fn test_face_normal_of_first_octant_face() {
        let tri = Triangle::new(Vec3::Y, Vec3::Z, Vec3::X);
        assert_eq!(tri.face_normal(), Vec3::ONE);
        let n = tri.unit_normal();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!(tri.winds_outward());
    }

    #[test]
    fn test_degenerate_triangle_has_zero_unit_normal() {
        let tri = Triangle::new(Vec3::X, Vec3::X, Vec3::Y);
        assert_eq!(tri.unit_normal(), Vec3::ZERO);
    }

    #[test]
    fn test_centroid() {
        let tri = Triangle::new(Vec3::X * 3.0, Vec3::Y * 3.0, Vec3::Z * 3.0);
        assert_eq!(tri.centroid(), Vec3::ONE);
    }
}
