//! Errors raised while building a layer.

use thiserror::Error;

/// Failure to construct a sky layer. Every variant is fatal to the layer;
/// no partially loaded layer is ever returned.
#[derive(Debug, Error)]
pub enum LayerError {
    /// The catalog could not be opened or read.
    #[error("catalog unavailable ({origin}): {source}")]
    CatalogUnavailable {
        /// File path or stream description the catalog was read from.
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// A record is missing a required field or has a field of the wrong shape.
    #[error("malformed catalog: {reason}")]
    MalformedCatalog { reason: String },

    /// An object's icon, and the fallback icon if any, could not be resolved.
    #[error("cannot resolve icon {icon:?} for object {object:?}")]
    AssetResolution { object: String, icon: String },
}

impl LayerError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedCatalog {
            reason: reason.into(),
        }
    }
}
