//! Command-line overrides for the sky map configuration.

use std::path::PathBuf;

use clap::Args;

use crate::Config;

/// Configuration overrides accepted on the command line.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Args, Debug, Default, Clone)]
pub struct CliArgs {
    /// Custom object catalog (JSON).
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Directory containing icon images.
    #[arg(long)]
    pub icon_dir: Option<PathBuf>,

    /// Icon used when a catalog entry names an unknown icon.
    #[arg(long)]
    pub fallback_icon: Option<String>,

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
        if let Some(ref path) = args.catalog {
            self.catalog.path = path.clone();
        }
        if let Some(ref dir) = args.icon_dir {
            self.assets.icon_dir = dir.clone();
        }
        if let Some(ref icon) = args.fallback_icon {
            self.assets.fallback_icon = Some(icon.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
