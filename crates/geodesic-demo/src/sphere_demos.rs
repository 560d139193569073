//! Sphere generation walkthroughs logged at startup.

use geodesic_mesh::{
    PresentedSphere, Presentation, RenderStrategy, SphereMesh, SphereVertex, build,
};
use geodesic_sphere::{
    GeometryError, Vec3, all_wind_outward, generate_initial_triangles, midpoint, subdivide,
    triangle_count,
};
use tracing::{info, warn};

/// Numbers reported after presenting a sphere.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PresentationSummary {
    pub strategy: RenderStrategy,
    pub triangles: usize,
    pub vertices: usize,
    pub draw_calls: usize,
    pub upload_bytes: usize,
    pub max_radius_error: f32,
}

/// Build a sphere at `resolution` and present it with the given strategy.
pub(crate) fn build_and_present(
    resolution: u32,
    strategy: RenderStrategy,
    material: &str,
) -> Result<PresentationSummary, GeometryError> {
    let mesh = build(resolution)?;
    let presentation = Presentation::new(material, strategy);
    Ok(summarize(&mesh, &presentation.present(&mesh)))
}

fn summarize(mesh: &SphereMesh, presented: &PresentedSphere<'_, &str>) -> PresentationSummary {
    let upload_bytes = match presented {
        PresentedSphere::Discrete { objects, .. } => {
            objects.len() * 3 * (size_of::<SphereVertex>() + size_of::<u32>())
        }
        PresentedSphere::Batched { mesh, .. } => {
            mesh.vertex_buffer_bytes() + mesh.index_buffer_bytes()
        }
    };

    PresentationSummary {
        strategy: presented.strategy(),
        triangles: presented.triangle_count(),
        vertices: mesh.vertex_count(),
        draw_calls: presented.draw_count(),
        upload_bytes,
        max_radius_error: mesh.max_radius_error(),
    }
}

/// Logs triangle counts and sphere error for each subdivision level.
pub(crate) fn demonstrate_subdivision_levels(max_level: u32) {
    info!("Starting subdivision level demonstration");

    let base = generate_initial_triangles();
    for level in 0..=max_level {
        match subdivide(&base, level) {
            Ok(tris) => {
                let closest_face = tris
                    .iter()
                    .map(|tri| tri.centroid().length())
                    .fold(f32::INFINITY, f32::min);
                info!(
                    "Level {}: {} triangles (expected {:?}), closest face center at r = {:.4}",
                    level,
                    tris.len(),
                    triangle_count(level),
                    closest_face
                );
            }
            Err(e) => warn!("Level {level} failed: {e}"),
        }
    }
}

/// Logs whether every face at `level` still winds outward.
pub(crate) fn demonstrate_winding_check(level: u32) {
    match subdivide(&generate_initial_triangles(), level) {
        Ok(tris) => info!(
            "Winding check at level {}: {} triangles, all outward = {}",
            level,
            tris.len(),
            all_wind_outward(&tris)
        ),
        Err(e) => warn!("Winding check failed: {e}"),
    }
}

/// Shows that antipodal midpoints are rejected instead of producing NaN.
pub(crate) fn demonstrate_degenerate_midpoint() {
    match midpoint(Vec3::X, Vec3::NEG_X) {
        Ok(p) => warn!("Antipodal midpoint unexpectedly produced {p}"),
        Err(e) => info!("Antipodal midpoint rejected: {e}"),
    }
}
