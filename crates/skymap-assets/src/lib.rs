//! Asset lookup for sky layers: icon handles resolved by symbolic name and
//! localized display strings.
//!
//! Layers never touch the file system for assets; they receive an
//! [`IconResolver`] and a [`StringTable`] from the host.

mod error;
mod icons;
mod strings;

pub use error::AssetError;
pub use icons::{AssetHandle, IconRegistry, IconResolver};
pub use strings::StringTable;
