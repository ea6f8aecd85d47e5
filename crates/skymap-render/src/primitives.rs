//! Image and text primitives placed on the sky sphere.

use glam::Vec3;
use skymap_assets::AssetHandle;

/// A billboard image anchored at a sky direction.
#[derive(Clone, Debug, PartialEq)]
pub struct ImagePrimitive {
    /// Unit direction on the sky sphere.
    pub location: Vec3,
    /// Drawable to show.
    pub image: AssetHandle,
    /// World-space up vector used to orient the billboard.
    pub up: Vec3,
    /// Size relative to the field of view.
    pub scale: f32,
    /// Draw with alpha blending instead of as an opaque quad.
    pub requires_blending: bool,
}

impl ImagePrimitive {
    /// New opaque image.
    pub fn new(location: Vec3, image: AssetHandle, up: Vec3, scale: f32) -> Self {
        Self {
            location,
            image,
            up,
            scale,
            requires_blending: false,
        }
    }
}

/// A text label anchored at a sky direction.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPrimitive {
    pub location: Vec3,
    /// Label text; `\n` separates lines.
    pub text: String,
    /// Packed `0xAARRGGBB` tint, stored signed as the renderer expects.
    pub color: i32,
}

impl TextPrimitive {
    pub fn new(location: Vec3, text: impl Into<String>, color: i32) -> Self {
        Self {
            location,
            text: text.into(),
            color,
        }
    }

    /// Tint as normalized RGBA.
    ///
    /// A packed value with a zero alpha byte is treated as fully opaque,
    /// since catalogs usually give plain `RRGGBB` colors.
    pub fn rgba(&self) -> [f32; 4] {
        let packed = self.color as u32;
        let channel = |shift: u32| ((packed >> shift) & 0xff) as f32 / 255.0;
        let alpha = if packed >> 24 == 0 { 1.0 } else { channel(24) };
        [channel(16), channel(8), channel(0), alpha]
    }

    /// Number of text lines.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }
}
