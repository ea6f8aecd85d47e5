//! Renderable for one catalog entry: a blended icon plus a text label at the
//! object's sky position.

use glam::Vec3;
use skymap_assets::{AssetHandle, IconResolver};
use skymap_coords::geocentric_coords;
use skymap_render::{AstronomicalRenderable, ImagePrimitive, TextPrimitive, UpdateSet};

use crate::catalog::CustomObject;
use crate::error::LayerError;
use crate::label::compose_label;

/// Icons are billboarded against world up, never rotated per object.
const UP: Vec3 = Vec3::Y;

/// Static renderable for a [`CustomObject`].
///
/// Position and appearance are fixed at build time, so [`update`] never
/// reports changes.
///
/// [`update`]: AstronomicalRenderable::update
#[derive(Clone, Debug)]
pub struct CustomObjectRenderable {
    location: Vec3,
    names: Vec<String>,
    images: Vec<ImagePrimitive>,
    labels: Vec<TextPrimitive>,
}

impl CustomObjectRenderable {
    /// Build the renderable, resolving the icon immediately.
    ///
    /// The object's own icon is tried first, then `fallback_icon`.
    ///
    /// # Errors
    ///
    /// Returns [`LayerError::AssetResolution`] if neither icon resolves.
    pub fn build(
        object: &CustomObject,
        icons: &dyn IconResolver,
        fallback_icon: Option<&str>,
    ) -> Result<Self, LayerError> {
        let image = resolve_icon(object, icons, fallback_icon)?;
        let location = geocentric_coords(object.ra, object.dec);

        let mut icon = ImagePrimitive::new(location, image, UP, object.size);
        icon.requires_blending = true;

        let text = compose_label(
            &object.name,
            object.catalog_name.as_deref(),
            object.baptism_date.as_deref(),
            object.comments.as_deref(),
        );
        let label = TextPrimitive::new(location, text, object.color as i32);

        Ok(Self {
            location,
            names: vec![object.name.clone()],
            images: vec![icon],
            labels: vec![label],
        })
    }

    pub fn image(&self) -> &ImagePrimitive {
        &self.images[0]
    }

    pub fn label(&self) -> &TextPrimitive {
        &self.labels[0]
    }
}

fn resolve_icon(
    object: &CustomObject,
    icons: &dyn IconResolver,
    fallback_icon: Option<&str>,
) -> Result<AssetHandle, LayerError> {
    if let Some(handle) = icons.resolve_icon(&object.icon) {
        return Ok(handle);
    }

    let fallback = fallback_icon.and_then(|name| icons.resolve_icon(name).map(|h| (name, h)));
    match fallback {
        Some((name, handle)) => {
            log::warn!(
                "Icon {:?} for {:?} not found, using {name:?}",
                object.icon,
                object.name
            );
            Ok(handle)
        }
        None => Err(LayerError::AssetResolution {
            object: object.name.clone(),
            icon: object.icon.clone(),
        }),
    }
}

impl AstronomicalRenderable for CustomObjectRenderable {
    fn names(&self) -> &[String] {
        &self.names
    }

    fn search_location(&self) -> Vec3 {
        self.location
    }

    fn images(&self) -> &[ImagePrimitive] {
        &self.images
    }

    fn labels(&self) -> &[TextPrimitive] {
        &self.labels
    }

    fn update(&mut self) -> UpdateSet {
        UpdateSet::empty()
    }
}
