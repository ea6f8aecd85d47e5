//! The binary entry point: loads the custom object catalog into its sky
//! layer and prints what the renderer would receive.

mod platform;
mod report;

use std::process::ExitCode;

use clap::Parser;
use skymap_assets::{AssetError, IconRegistry, StringTable};
use skymap_config::{CliArgs, Config, ConfigError, FilePreferences};
use skymap_layers::{CustomObjectLayer, LayerError};
use tracing::{error, info, warn};

use crate::platform::{PlatformDirs, PlatformError};

/// Sky map custom object loader.
#[derive(Parser, Debug)]
#[command(name = "skymap", about = "Load and inspect the custom object sky layer")]
struct Cli {
    #[command(flatten)]
    overrides: CliArgs,

    /// Print objects whose name starts with this prefix instead of the full layer.
    #[arg(long)]
    search: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Assets(#[from] AssetError),
    #[error(transparent)]
    Layer(#[from] LayerError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("skymap: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let dirs = match &cli.overrides.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => PlatformDirs::resolve()?,
    };
    dirs.create_dirs()?;

    let mut config = Config::load_or_create(&dirs.config_dir)?;
    config.apply_cli_overrides(&cli.overrides);
    skymap_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    config.catalog.path = dirs.data_path(&config.catalog.path);
    config.assets.icon_dir = dirs.data_path(&config.assets.icon_dir);

    let icons = IconRegistry::from_dir(&config.assets.icon_dir, &config.assets.icon_extension)?;
    if icons.is_empty() {
        warn!("No icons found in {}", config.assets.icon_dir.display());
    }
    let strings = match &config.assets.strings {
        Some(path) => StringTable::load_overlay(&dirs.data_path(path))?,
        None => StringTable::english(),
    };
    let preferences = FilePreferences::load(&dirs.config_dir)?;

    let layer = CustomObjectLayer::load(&config, &icons, &strings)?;
    info!(
        objects = layer.objects().len(),
        visible = layer.base().is_visible(&preferences),
        "Custom object layer ready"
    );

    let lines = match &cli.search {
        Some(prefix) => report::search(&layer, prefix),
        None => report::layer_summary(&layer),
    };
    for line in lines {
        println!("{line}");
    }
    Ok(())
}
