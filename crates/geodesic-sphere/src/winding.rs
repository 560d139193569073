//! Winding order checks for sphere triangles.
//!
//! A face winds "outward" when its vertices run counter-clockwise seen from
//! outside the sphere, so the right-handed cross product of its edges points
//! away from the center. Back-face culling and flat normals both rely on it.

use glam::Vec3;

use crate::triangle::Triangle;

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the face normal (via cross product) has a positive dot
/// product with the centroid direction from the sphere center.
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;
    let face_normal = edge1.cross(edge2);

    let centroid = (v0 + v1 + v2) / 3.0;

    face_normal.dot(centroid) > 0.0
}

/// Scalar triple product `v0 · (v1 × v2)`.
///
/// Six times the signed volume of the tetrahedron spanned by the triangle and
/// the origin. Positive for outward-wound faces of a sphere centered on the
/// origin, negative for inward-wound ones.
#[inline]
pub fn signed_volume(v0: Vec3, v1: Vec3, v2: Vec3) -> f32 {
    v0.dot(v1.cross(v2))
}

/// Returns `true` if every triangle in the list winds outward.
pub fn all_wind_outward(triangles: &[Triangle]) -> bool {
    triangles.iter().all(Triangle::winds_outward)
}

/// Reverse a triangle's winding by swapping `v1` and `v2`.
#[must_use]
pub fn reverse_winding(tri: &Triangle) -> Triangle {
    Triangle::new(tri.v0(), tri.v2(), tri.v1())
}
