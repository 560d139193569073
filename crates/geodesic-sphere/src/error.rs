//! Geometry error types.

use glam::Vec3;

/// Errors raised while constructing or subdividing sphere geometry.
///
/// All of them are detected synchronously, before any output is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A triangle was built from a point list whose length is not 3.
    #[error("a triangle needs exactly 3 vertices, got {count}")]
    InvalidVertexCount {
        /// Number of points that were supplied.
        count: usize,
    },

    /// The requested subdivision depth is outside the supported range.
    #[error("resolution {resolution} is out of range (supported: 0..={max})")]
    ResolutionOutOfRange {
        /// Requested subdivision depth.
        resolution: u32,
        /// Largest supported depth.
        max: u32,
    },

    /// The midpoint of two antipodal points has no direction to normalize.
    #[error("cannot project midpoint of {a} and {b} onto the sphere (antipodal points)")]
    DegenerateGeometry {
        /// First edge endpoint.
        a: Vec3,
        /// Second edge endpoint.
        b: Vec3,
    },
}

impl GeometryError {
    /// Returns `true` for errors caused by malformed caller input
    /// (as opposed to geometry that cannot be projected).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidVertexCount { .. } | Self::ResolutionOutOfRange { .. }
        )
    }
}
