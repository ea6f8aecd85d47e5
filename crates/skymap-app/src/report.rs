//! Console output for a loaded layer.

use skymap_coords::RaDec;
use skymap_layers::{CustomObject, CustomObjectLayer, Layer, SearchResult};
use skymap_render::AstronomicalRenderable;

/// One summary line per catalog entry.
pub fn object_line(object: &CustomObject, renderable: &dyn AstronomicalRenderable) -> String {
    let location = renderable.search_location();
    let lines = renderable
        .labels()
        .first()
        .map_or(0, |label| label.line_count());
    format!(
        "{:<24} RA {:>8.3}°  Dec {:>+8.3}°  ({:+.4}, {:+.4}, {:+.4})  icon={} label_lines={}",
        object.name, object.ra, object.dec, location.x, location.y, location.z, object.icon, lines
    )
}

/// One line per search hit.
pub fn search_line(hit: &SearchResult) -> String {
    let position = RaDec::from_geocentric(hit.location);
    format!(
        "{:<24} RA {:>8.3}°  Dec {:>+8.3}°",
        hit.name, position.ra, position.dec
    )
}

/// Full layer summary: a header, then one line per object.
pub fn layer_summary(layer: &CustomObjectLayer) -> Vec<String> {
    let mut lines = vec![format!(
        "{} (depth {}, preference {}): {} objects",
        layer.layer_name(),
        layer.layer_depth_order(),
        layer.preference_id(),
        layer.objects().len()
    )];
    lines.extend(
        layer
            .objects()
            .iter()
            .zip(layer.renderables())
            .map(|(object, renderable)| object_line(object, &**renderable)),
    );
    lines
}

/// Prefix search across object names, resolved to positions.
pub fn search(layer: &CustomObjectLayer, prefix: &str) -> Vec<String> {
    layer
        .base()
        .object_names_matching_prefix(prefix)
        .iter()
        .flat_map(|name| layer.base().search_by_object_name(name))
        .map(|hit| search_line(&hit))
        .collect()
}
