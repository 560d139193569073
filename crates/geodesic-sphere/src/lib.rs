//! Geodesic sphere geometry: octahedron base case, midpoint projection, and
//! recursive 1-to-4 triangle subdivision onto the unit sphere.

mod error;
mod octahedron;
mod subdivision;
mod triangle;
pub mod winding;

pub use error::GeometryError;
pub use octahedron::{BASE_TRIANGLE_COUNT, OCTAHEDRON_VERTICES, generate_initial_triangles};
pub use subdivision::{
    DEGENERATE_EPSILON, MAX_RESOLUTION, MIN_RESOLUTION, RECOMMENDED_RESOLUTION, SphereBuilder,
    is_recommended_resolution, midpoint, subdivide, subdivide_one, triangle_count,
};
pub use triangle::Triangle;
pub use winding::{all_wind_outward, reverse_winding, signed_volume, triangle_winds_outward};

/// Re-exported so downstream crates share the same point type.
pub use glam::Vec3;
