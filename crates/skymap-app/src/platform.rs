//! Platform abstraction module.
//!
//! Resolves the OS-specific directories the sky map reads its config,
//! catalog, icons and logs from.

use std::path::{Path, PathBuf};
use std::{fmt, io};

/// Errors that can occur during platform operations.
#[derive(Debug)]
pub enum PlatformError {
    /// The OS did not provide a configuration directory.
    NoConfigDir,
    /// An I/O error occurred (e.g., directory creation failed).
    Io(io::Error),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoConfigDir => write!(f, "could not determine OS configuration directory"),
            Self::Io(e) => write!(f, "platform I/O error: {e}"),
        }
    }
}

impl std::error::Error for PlatformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for PlatformError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// OS-specific directory paths.
///
/// Each field follows OS conventions (XDG on Linux, Known Folders on
/// Windows, Library on macOS).
pub struct PlatformDirs {
    /// `config.ron` and `preferences.ron`.
    pub config_dir: PathBuf,
    /// Catalog and icons; relative config paths resolve here.
    pub data_dir: PathBuf,
    /// Log files.
    pub log_dir: PathBuf,
}

const APP_NAME: &str = "skymap";

impl PlatformDirs {
    /// Resolve platform-specific directories without creating them on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::NoConfigDir`] if the OS does not expose a
    /// configuration directory.
    pub fn resolve() -> Result<Self, PlatformError> {
        let app_config = dirs::config_dir()
            .ok_or(PlatformError::NoConfigDir)?
            .join(APP_NAME);

        let data_dir = dirs::data_dir()
            .map(|d| d.join(APP_NAME))
            .unwrap_or_else(|| app_config.join("data"));

        Ok(Self {
            config_dir: app_config.clone(),
            data_dir,
            log_dir: app_config.join("logs"),
        })
    }

    /// Use `config_dir` for configuration and keep the OS defaults for the
    /// rest, falling back to subdirectories of `config_dir`.
    pub fn with_config_dir(config_dir: &Path) -> Self {
        match Self::resolve() {
            Ok(dirs) => Self {
                config_dir: config_dir.to_path_buf(),
                ..dirs
            },
            Err(_) => Self::resolve_with_root(config_dir),
        }
    }

    /// Resolve directories rooted under a custom base path.
    pub fn resolve_with_root(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.join("data"),
            log_dir: root.join("logs"),
        }
    }

    /// Create all directories on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Io`] if any directory cannot be created.
    pub fn create_dirs(&self) -> Result<(), PlatformError> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.log_dir)?;
        Ok(())
    }

    /// Absolute paths are returned unchanged; relative ones are joined onto
    /// the data directory.
    pub fn data_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.data_dir.join(path)
        }
    }
}
