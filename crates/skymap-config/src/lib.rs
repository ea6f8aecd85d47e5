//! Configuration system for the sky map.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! CLI overrides via clap, hot-reload detection, and the persisted preference
//! store that holds per-layer visibility toggles.

mod cli;
mod config;
mod error;
mod preferences;

pub use cli::CliArgs;
pub use config::{AssetConfig, CatalogConfig, Config, DebugConfig, LayerConfig};
pub use error::ConfigError;
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
