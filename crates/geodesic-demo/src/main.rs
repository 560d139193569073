//! Demo binary that builds a geodesic sphere and reports how it would be drawn.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p geodesic-demo -- --resolution 4 --batched true`.

mod sphere_demos;

use std::process::ExitCode;

use clap::Parser;
use geodesic_config::{CliArgs, Config, default_config_dir};
use geodesic_mesh::RenderStrategy;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().map(Ok).unwrap_or_else(default_config_dir);

    // Logging is not up yet, so keep the load result and report it afterwards.
    let loaded = config_dir
        .as_ref()
        .map_err(|e| e.to_string())
        .and_then(|dir| Config::load_or_create(dir).map_err(|e| e.to_string()));
    let mut config = loaded.clone().unwrap_or_default();
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().ok().map(|dir| dir.join("logs"));
    geodesic_log::init_logging(
        log_dir.as_deref(),
        cfg!(debug_assertions) && config.debug.log_to_file,
        Some(&config),
    );

    if let Err(e) = loaded {
        warn!("Failed to load config: {e}, using defaults");
    }
    if !geodesic_sphere::is_recommended_resolution(config.sphere.resolution) {
        warn!(
            "Resolution {} is outside the recommended range {:?}",
            config.sphere.resolution,
            geodesic_sphere::RECOMMENDED_RESOLUTION
        );
    }

    sphere_demos::demonstrate_subdivision_levels(config.sphere.resolution.min(5));
    sphere_demos::demonstrate_winding_check(config.sphere.resolution.min(5));
    sphere_demos::demonstrate_degenerate_midpoint();

    let strategy = RenderStrategy::from_batched(config.sphere.use_batched_draw);
    match sphere_demos::build_and_present(
        config.sphere.resolution,
        strategy,
        &config.sphere.material,
    ) {
        Ok(summary) => {
            info!(
                strategy = ?summary.strategy,
                material = %config.sphere.material,
                triangles = summary.triangles,
                vertices = summary.vertices,
                draw_calls = summary.draw_calls,
                upload_bytes = summary.upload_bytes,
                max_radius_error = summary.max_radius_error,
                "Sphere ready"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Sphere build failed: {e}");
            ExitCode::FAILURE
        }
    }
}
