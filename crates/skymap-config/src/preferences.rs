//! Persisted key-value preferences.
//!
//! Layers store their show/hide toggle under a fixed preference key. The
//! store only has to answer boolean lookups; [`FilePreferences`] persists
//! them as `preferences.ron` next to the config file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const PREFERENCES_FILE: &str = "preferences.ron";

/// Boolean preference lookup keyed by string.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `default` when unset.
    fn get_bool(&self, key: &str, default: bool) -> bool;

    /// Stores `value` under `key`.
    fn set_bool(&mut self, key: &str, value: bool);
}

/// Non-persistent store, used by tests and hosts that manage persistence
/// themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryPreferences {
    values: BTreeMap<String, bool>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), value);
    }
}

/// RON-backed store living in a config directory.
///
/// Writes are buffered in memory until [`FilePreferences::save`].
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
    values: MemoryPreferences,
}

impl FilePreferences {
    /// Load `preferences.ron` from `config_dir`. A missing file yields an
    /// empty store.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_dir.join(PREFERENCES_FILE);
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadError)?;
            let values: BTreeMap<String, bool> =
                ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::debug!("Loaded {} preferences from {}", values.len(), path.display());
            MemoryPreferences { values }
        } else {
            MemoryPreferences::new()
        };
        Ok(Self { path, values })
    }

    /// Write all preferences back to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
        }
        let serialized =
            ron::ser::to_string_pretty(&self.values.values, ron::ser::PrettyConfig::new())
                .map_err(ConfigError::SerializeError)?;
        std::fs::write(&self.path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        self.values.get_bool(key, default)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.values.set_bool(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_default_when_unset() {
        let prefs = MemoryPreferences::new();
        assert!(prefs.get_bool("source_provider.7", true));
        assert!(!prefs.get_bool("source_provider.7", false));
    }

    #[test]
    fn test_memory_set_overrides_default() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_bool("source_provider.7", false);
        assert!(!prefs.get_bool("source_provider.7", true));
    }

    #[test]
    fn test_file_missing_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::load(dir.path()).unwrap();
        assert!(prefs.get_bool("anything", true));
        assert_eq!(prefs.path(), dir.path().join("preferences.ron"));
    }

    #[test]
    fn test_file_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let mut prefs = FilePreferences::load(dir.path()).unwrap();
        prefs.set_bool("source_provider.7", false);
        prefs.set_bool("source_provider.0", true);
        prefs.save().unwrap();

        let reloaded = FilePreferences::load(dir.path()).unwrap();
        assert!(!reloaded.get_bool("source_provider.7", true));
        assert!(reloaded.get_bool("source_provider.0", false));
    }

    #[test]
    fn test_file_invalid_ron_is_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("preferences.ron"), "{{nope").unwrap();
        assert!(matches!(
            FilePreferences::load(dir.path()),
            Err(ConfigError::ParseError(_))
        ));
    }
}
