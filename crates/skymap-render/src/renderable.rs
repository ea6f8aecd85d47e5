//! The contract between sky layers and the renderer.

use glam::Vec3;

use crate::primitives::{ImagePrimitive, TextPrimitive};
use crate::update::UpdateSet;

/// An object on the sky made of images and labels.
///
/// Layers build renderables once; the renderer then polls [`update`] each
/// tick and re-uploads whatever aspects it reports.
///
/// [`update`]: AstronomicalRenderable::update
pub trait AstronomicalRenderable: Send + Sync {
    /// Names the object can be found by.
    fn names(&self) -> &[String];

    /// Direction the search UI points at when this object is selected.
    fn search_location(&self) -> Vec3;

    fn images(&self) -> &[ImagePrimitive] {
        &[]
    }

    fn labels(&self) -> &[TextPrimitive] {
        &[]
    }

    /// Aspects that changed since the previous call.
    fn update(&mut self) -> UpdateSet;
}
