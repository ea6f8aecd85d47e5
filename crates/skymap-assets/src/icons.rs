//! Icon registry: symbolic icon names to [`AssetHandle`]s.
//!
//! Handles are dense indices assigned in registration order. The registry is
//! immutable once handed to a layer.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::error::AssetError;

/// Opaque handle to a drawable asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetHandle(pub u32);

/// Resolves a symbolic icon name to a drawable handle.
pub trait IconResolver {
    /// Returns `None` if no icon with that name exists.
    fn resolve_icon(&self, name: &str) -> Option<AssetHandle>;
}

#[derive(Debug, Clone)]
struct IconEntry {
    name: String,
    path: Option<PathBuf>,
}

/// Name-indexed icon table.
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    /// Dense array: index == `AssetHandle.0`.
    entries: Vec<IconEntry>,
    name_to_handle: FxHashMap<String, AssetHandle>,
}

impl IconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry of path-less icons, one per name.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::DuplicateName`] or [`AssetError::EmptyName`].
    pub fn from_names<I, S>(names: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(name, None)?;
        }
        Ok(registry)
    }

    /// Register every file in `dir` whose extension matches `extension`,
    /// named by file stem. Files are registered in sorted path order so
    /// handles are stable between runs.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Io`] if the directory cannot be read.
    pub fn from_dir(dir: &Path, extension: &str) -> Result<Self, AssetError> {
        let read_dir = std::fs::read_dir(dir).map_err(|source| AssetError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|source| AssetError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let matches = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
            if path.is_file() && matches {
                paths.push(path);
            }
        }
        paths.sort();

        let mut registry = Self::new();
        for path in paths {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                log::warn!("Skipping icon with non UTF-8 name: {}", path.display());
                continue;
            };
            let stem = stem.to_string();
            registry.register(stem, Some(path))?;
        }
        log::info!("Registered {} icons from {}", registry.len(), dir.display());
        Ok(registry)
    }

    /// Add an icon and return its handle.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        path: Option<PathBuf>,
    ) -> Result<AssetHandle, AssetError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AssetError::EmptyName);
        }
        if self.name_to_handle.contains_key(&name) {
            return Err(AssetError::DuplicateName(name));
        }

        let handle = AssetHandle(self.entries.len() as u32);
        self.name_to_handle.insert(name.clone(), handle);
        self.entries.push(IconEntry { name, path });
        Ok(handle)
    }

    /// Symbolic name of a handle.
    pub fn name(&self, handle: AssetHandle) -> Option<&str> {
        self.entries
            .get(handle.0 as usize)
            .map(|entry| entry.name.as_str())
    }

    /// Backing file of a handle, if it was registered from disk.
    pub fn path(&self, handle: AssetHandle) -> Option<&Path> {
        self.entries
            .get(handle.0 as usize)
            .and_then(|entry| entry.path.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IconResolver for IconRegistry {
    fn resolve_icon(&self, name: &str) -> Option<AssetHandle> {
        self.name_to_handle.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_follow_registration_order() {
        let registry = IconRegistry::from_names(["star_on", "gift_on"]).unwrap();
        assert_eq!(registry.resolve_icon("star_on"), Some(AssetHandle(0)));
        assert_eq!(registry.resolve_icon("gift_on"), Some(AssetHandle(1)));
        assert_eq!(registry.name(AssetHandle(1)), Some("gift_on"));
        assert_eq!(registry.path(AssetHandle(0)), None);
    }

    #[test]
    fn test_unknown_icon_is_none() {
        let registry = IconRegistry::from_names(["star_on"]).unwrap();
        assert_eq!(registry.resolve_icon("comet"), None);
        assert_eq!(registry.name(AssetHandle(7)), None);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = IconRegistry::from_names(["star_on", "star_on"]).unwrap_err();
        assert!(matches!(err, AssetError::DuplicateName(name) if name == "star_on"));
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            IconRegistry::from_names([""]),
            Err(AssetError::EmptyName)
        ));
    }

    #[test]
    fn test_from_dir_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("star_on.png"), b"").unwrap();
        std::fs::write(dir.path().join("gift_on.PNG"), b"").unwrap();
        std::fs::write(dir.path().join("readme.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let registry = IconRegistry::from_dir(dir.path(), "png").unwrap();
        assert_eq!(registry.len(), 2);
        // Sorted by path: gift_on.PNG < star_on.png
        assert_eq!(registry.resolve_icon("gift_on"), Some(AssetHandle(0)));
        let star = registry.resolve_icon("star_on").unwrap();
        assert_eq!(
            registry.path(star),
            Some(dir.path().join("star_on.png").as_path())
        );
        assert_eq!(registry.resolve_icon("readme"), None);
    }

    #[test]
    fn test_from_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            IconRegistry::from_dir(&missing, "png"),
            Err(AssetError::Io { .. })
        ));
    }
}
