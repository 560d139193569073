//! The octahedron base case of the subdivision.
//!
//! Six vertices on the signed unit axes, eight faces. Every face touches one
//! pole (`+Y` or `-Y`) and two neighbouring equatorial axes, and winds
//! counter-clockwise when seen from outside the sphere.

use glam::Vec3;

use crate::triangle::Triangle;

/// Number of faces in the base octahedron.
pub const BASE_TRIANGLE_COUNT: usize = 8;

/// The six octahedron vertices: `+X, -X, +Y, -Y, +Z, -Z`.
pub const OCTAHEDRON_VERTICES: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Returns the eight octahedron faces in a fixed order.
///
/// The northern hemisphere walks the equator `+Z → +X → -Z → -X`, the
/// southern one walks it in reverse so both keep outward winding.
#[must_use]
pub fn generate_initial_triangles() -> [Triangle; BASE_TRIANGLE_COUNT] {
    [
        Triangle::new(Vec3::Y, Vec3::Z, Vec3::X),
        Triangle::new(Vec3::Y, Vec3::X, Vec3::NEG_Z),
        Triangle::new(Vec3::Y, Vec3::NEG_Z, Vec3::NEG_X),
        Triangle::new(Vec3::Y, Vec3::NEG_X, Vec3::Z),
        Triangle::new(Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
        Triangle::new(Vec3::NEG_Y, Vec3::NEG_X, Vec3::NEG_Z),
        Triangle::new(Vec3::NEG_Y, Vec3::NEG_Z, Vec3::X),
        Triangle::new(Vec3::NEG_Y, Vec3::X, Vec3::Z),
    ]
}
