//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Geodesic sphere command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "geodesic", about = "Geodesic sphere generator")]
pub struct CliArgs {
    /// Subdivision passes over the octahedron.
    #[arg(long, short)]
    pub resolution: Option<u32>,

    /// Present as one batched mesh (true) or one mesh per triangle (false).
    #[arg(long)]
    pub batched: Option<bool>,

    /// Material name passed through to the renderer.
    #[arg(long)]
    pub material: Option<String>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(resolution) = args.resolution {
            self.sphere.resolution = resolution;
        }
        if let Some(batched) = args.batched {
            self.sphere.use_batched_draw = batched;
        }
        if let Some(ref material) = args.material {
            self.sphere.material = material.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
