//! Localized display strings keyed by resource name.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::AssetError;

/// Built-in English strings.
const ENGLISH: &[(&str, &str)] = &[("show_custom_objects_pref", "Custom Objects")];

/// Key → localized text table.
#[derive(Debug, Clone, PartialEq)]
pub struct StringTable {
    strings: BTreeMap<String, String>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::english()
    }
}

impl StringTable {
    /// The built-in English table.
    pub fn english() -> Self {
        Self {
            strings: ENGLISH
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Overlay entries from a RON map, e.g. `{"show_custom_objects_pref": "Objets"}`.
    /// Keys not present in the overlay keep their current text.
    pub fn overlay_ron_str(&mut self, ron_str: &str) -> Result<(), AssetError> {
        let overlay: BTreeMap<String, String> = ron::from_str(ron_str)?;
        self.strings.extend(overlay);
        Ok(())
    }

    /// English table overlaid with the RON file at `path`.
    pub fn load_overlay(path: &Path) -> Result<Self, AssetError> {
        let contents = std::fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut table = Self::english();
        table.overlay_ron_str(&contents)?;
        log::debug!("Loaded string overlay from {}", path.display());
        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Looks up `key`, returning the key itself when it has no translation.
    pub fn get_or_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.get(key).unwrap_or(key)
    }
}
