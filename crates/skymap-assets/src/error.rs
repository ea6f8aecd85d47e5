use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while building asset tables.
#[derive(Debug, Error)]
pub enum AssetError {
    /// I/O error scanning an icon directory or reading a string table.
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// RON deserialization error in a string table.
    #[error("ron parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    /// Two icons registered under the same name.
    #[error("duplicate icon name: {0}")]
    DuplicateName(String),

    /// Icon names must be non-empty.
    #[error("empty icon name")]
    EmptyName,
}
