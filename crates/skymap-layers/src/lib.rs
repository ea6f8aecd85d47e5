//! Sky layers built from user data.
//!
//! The custom object layer reads a JSON catalog of user-defined objects,
//! places each one on the sky sphere, and publishes an icon plus a label for
//! it to the renderer:
//!
//! - [`catalog`] parses and validates the catalog into [`CustomObject`]s.
//! - [`label`] composes the multi-line label text.
//! - [`custom_object`] builds one renderable per catalog entry.
//! - [`layer`] exposes the renderables to the host with a fixed depth order
//!   and preference key.

pub mod catalog;
pub mod custom_object;
pub mod error;
pub mod label;
pub mod layer;

pub use catalog::{
    CustomObject, load_catalog, parse_catalog, parse_catalog_str, parse_color, write_catalog,
};
pub use custom_object::CustomObjectRenderable;
pub use error::LayerError;
pub use label::compose_label;
pub use layer::{CustomObjectLayer, Layer, RenderablesLayer, SearchResult};
