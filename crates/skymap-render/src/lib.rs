//! Renderable primitives handed from sky layers to the renderer: billboard
//! images, text labels, and the update flags the renderer polls each tick.

pub mod primitives;
pub mod renderable;
pub mod update;

pub use primitives::{ImagePrimitive, TextPrimitive};
pub use renderable::AstronomicalRenderable;
pub use update::{UpdateSet, UpdateType};
