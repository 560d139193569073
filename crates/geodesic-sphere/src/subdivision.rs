//! Geodesic 1-to-4 subdivision of sphere triangles.
//!
//! Each pass splits every triangle at its edge midpoints and pushes the
//! midpoints back onto the unit sphere. Starting from the octahedron, `n`
//! passes produce `8 · 4^n` triangles.

use std::ops::RangeInclusive;

use glam::Vec3;

use crate::error::GeometryError;
use crate::octahedron::{BASE_TRIANGLE_COUNT, generate_initial_triangles};
use crate::triangle::Triangle;

/// Smallest supported subdivision depth (the bare octahedron).
pub const MIN_RESOLUTION: u32 = 0;

/// Largest supported subdivision depth: 524 288 triangles.
pub const MAX_RESOLUTION: u32 = 8;

/// Depths that give a useful sphere at a sensible triangle count.
pub const RECOMMENDED_RESOLUTION: RangeInclusive<u32> = 1..=5;

/// Whether `resolution` lies in [`RECOMMENDED_RESOLUTION`].
///
/// Values outside the range still build as long as they do not exceed
/// [`MAX_RESOLUTION`]; callers decide whether to warn.
#[must_use]
pub fn is_recommended_resolution(resolution: u32) -> bool {
    RECOMMENDED_RESOLUTION.contains(&resolution)
}

/// Squared length below which an edge midpoint is treated as the zero vector.
pub const DEGENERATE_EPSILON: f32 = 1e-12;

/// Number of triangles after subdividing the octahedron `levels` times.
///
/// Returns `None` if the count does not fit in `usize`.
#[must_use]
pub fn triangle_count(levels: u32) -> Option<usize> {
    subdivided_len(BASE_TRIANGLE_COUNT, levels)
}

fn subdivided_len(len: usize, levels: u32) -> Option<usize> {
    4usize.checked_pow(levels)?.checked_mul(len)
}

/// Normalized midpoint of two points on the unit sphere.
///
/// Both inputs are expected to be unit length. Takes the arithmetic mean and
/// projects it onto the sphere. Fails with [`GeometryError::DegenerateGeometry`]
/// when the mean has no usable direction: antipodal inputs, or off-sphere
/// inputs whose mean is shorter than `sqrt(DEGENERATE_EPSILON)` or overflows.
pub fn midpoint(p0: Vec3, p1: Vec3) -> Result<Vec3, GeometryError> {
    let mean = (p0 + p1) * 0.5;
    let len_sq = mean.length_squared();

    if !len_sq.is_finite() || len_sq < DEGENERATE_EPSILON {
        return Err(GeometryError::DegenerateGeometry { a: p0, b: p1 });
    }

    Ok(mean / len_sq.sqrt())
}

/// Split a triangle into four.
///
/// For `(v0, v1, v2)` with edge midpoints `m01`, `m12`, `m20` the children are
/// `(v0, m01, m20)`, `(v1, m12, m01)`, `(v2, m20, m12)` and the center
/// `(m01, m12, m20)`. All four keep the parent's rotational order.
pub fn subdivide_one(tri: &Triangle) -> Result<[Triangle; 4], GeometryError> {
    let [v0, v1, v2] = *tri.vertices();

    let m01 = midpoint(v0, v1)?;
    let m12 = midpoint(v1, v2)?;
    let m20 = midpoint(v2, v0)?;

    Ok([
        Triangle::new(v0, m01, m20),
        Triangle::new(v1, m12, m01),
        Triangle::new(v2, m20, m12),
        Triangle::new(m01, m12, m20),
    ])
}

/// Subdivide every triangle `levels` times.
///
/// The output is allocated once at its final size and filled level by
/// level. The children of triangle `i` land in slots `4i..4i + 4`, so the
/// output order is a pure function of the input order.
pub fn subdivide(triangles: &[Triangle], levels: u32) -> Result<Vec<Triangle>, GeometryError> {
    let out_of_range = GeometryError::ResolutionOutOfRange {
        resolution: levels,
        max: MAX_RESOLUTION,
    };
    if levels > MAX_RESOLUTION {
        return Err(out_of_range);
    }
    let final_len = subdivided_len(triangles.len(), levels).ok_or(out_of_range)?;

    let mut buffer = Vec::with_capacity(final_len);
    buffer.extend_from_slice(triangles);
    buffer.resize(final_len, Triangle::default());

    let mut len = triangles.len();
    for _ in 0..levels {
        subdivide_level(&mut buffer, len)?;
        len *= 4;
    }

    debug_assert_eq!(len, final_len);
    Ok(buffer)
}

/// Expand the first `len` triangles of `buffer` into its first `4 * len` slots.
fn subdivide_level(buffer: &mut [Triangle], len: usize) -> Result<(), GeometryError> {
    // Walk backwards: slots 4i..4i+4 never overlap an unread triangle j < i.
    for i in (0..len).rev() {
        let children = subdivide_one(&buffer[i])?;
        buffer[4 * i..4 * i + 4].copy_from_slice(&children);
    }
    Ok(())
}

/// Builds the triangle list of a geodesic sphere.
///
/// Owns the list for the duration of a build. Each builder has its own
/// allocation, so independent builders can run on different threads.
#[derive(Clone, Debug)]
pub struct SphereBuilder {
    resolution: u32,
    depth: u32,
    triangles: Vec<Triangle>,
}

impl SphereBuilder {
    /// Create a builder targeting `resolution` subdivision levels.
    ///
    /// The builder starts out holding the octahedron base case.
    pub fn new(resolution: u32) -> Result<Self, GeometryError> {
        if resolution > MAX_RESOLUTION {
            return Err(GeometryError::ResolutionOutOfRange {
                resolution,
                max: MAX_RESOLUTION,
            });
        }

        Ok(Self {
            resolution,
            depth: 0,
            triangles: generate_initial_triangles().to_vec(),
        })
    }

    /// Target subdivision depth.
    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Number of subdivision passes applied to the current list.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Current triangle list.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Consume the builder, returning its triangle list.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }

    /// Reset the list to the eight octahedron faces.
    pub fn generate_initial_triangles(&mut self) -> &[Triangle] {
        self.triangles.clear();
        self.triangles.extend_from_slice(&generate_initial_triangles());
        self.depth = 0;
        &self.triangles
    }

    /// Replace the current list with its subdivision, `levels` times over.
    ///
    /// Fails without touching the list if the total depth would exceed
    /// [`MAX_RESOLUTION`] or a midpoint is degenerate.
    pub fn subdivide(&mut self, levels: u32) -> Result<&[Triangle], GeometryError> {
        let target = self.depth.saturating_add(levels);
        if target > MAX_RESOLUTION {
            return Err(GeometryError::ResolutionOutOfRange {
                resolution: target,
                max: MAX_RESOLUTION,
            });
        }

        self.triangles = subdivide(&self.triangles, levels)?;
        self.depth = target;

        tracing::debug!(
            levels,
            depth = self.depth,
            triangles = self.triangles.len(),
            "subdivided sphere"
        );

        Ok(&self.triangles)
    }

    /// Rebuild from the octahedron up to the target resolution.
    pub fn build(&mut self) -> Result<&[Triangle], GeometryError> {
        self.generate_initial_triangles();
        self.subdivide(self.resolution)
    }
}
