//! Layers: named, toggleable, depth-ordered collections of renderables.
//!
//! [`RenderablesLayer`] is the generic base shared by sky layers. It owns the
//! renderables, indexes their names for search, and reads its visibility
//! toggle from the host [`PreferenceStore`]. [`CustomObjectLayer`] fills one
//! from the user's catalog.

use std::collections::BTreeMap;
use std::io::Read;

use glam::Vec3;
use skymap_assets::{IconResolver, StringTable};
use skymap_config::{Config, PreferenceStore};
use skymap_render::{AstronomicalRenderable, UpdateSet};

use crate::catalog::{self, CustomObject};
use crate::custom_object::CustomObjectRenderable;
use crate::error::LayerError;

/// What the host layer manager needs from every layer.
pub trait Layer {
    /// Draw order; larger values are drawn on top.
    fn layer_depth_order(&self) -> i32;

    /// Preference key of the layer's show/hide toggle.
    fn preference_id(&self) -> &str;

    /// Localized display name.
    fn layer_name(&self) -> &str;

    fn renderables(&self) -> &[Box<dyn AstronomicalRenderable>];
}

/// A search hit.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Name as the renderable spells it.
    pub name: String,
    pub location: Vec3,
}

/// Generic layer over a fixed list of renderables.
pub struct RenderablesLayer {
    depth_order: i32,
    preference_id: String,
    name: String,
    default_visible: bool,
    renderables: Vec<Box<dyn AstronomicalRenderable>>,
    /// Lowercased name → indices into `renderables`.
    search_index: BTreeMap<String, Vec<usize>>,
}

impl RenderablesLayer {
    pub fn new(
        depth_order: i32,
        preference_id: impl Into<String>,
        name: impl Into<String>,
        default_visible: bool,
        renderables: Vec<Box<dyn AstronomicalRenderable>>,
    ) -> Self {
        let mut search_index: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (index, renderable) in renderables.iter().enumerate() {
            for name in renderable.names() {
                search_index
                    .entry(name.to_lowercase())
                    .or_default()
                    .push(index);
            }
        }

        Self {
            depth_order,
            preference_id: preference_id.into(),
            name: name.into(),
            default_visible,
            renderables,
            search_index,
        }
    }

    /// Case-insensitive exact lookup by object name.
    pub fn search_by_object_name(&self, name: &str) -> Vec<SearchResult> {
        let key = name.to_lowercase();
        let Some(indices) = self.search_index.get(&key) else {
            return Vec::new();
        };
        indices
            .iter()
            .map(|&index| {
                let renderable = &self.renderables[index];
                let name = renderable
                    .names()
                    .iter()
                    .find(|n| n.to_lowercase() == key)
                    .cloned()
                    .unwrap_or_else(|| name.to_string());
                SearchResult {
                    name,
                    location: renderable.search_location(),
                }
            })
            .collect()
    }

    /// Object names starting with `prefix`, case-insensitively, sorted and
    /// without duplicates. Names are returned as the renderables spell them.
    pub fn object_names_matching_prefix(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut names: Vec<String> = self
            .search_index
            .range(prefix.clone()..)
            .take_while(|(key, _)| key.starts_with(&prefix))
            .flat_map(|(key, indices)| {
                indices.iter().filter_map(move |&index| {
                    self.renderables[index]
                        .names()
                        .iter()
                        .find(|n| n.to_lowercase() == *key)
                        .cloned()
                })
            })
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Poll every renderable and return the union of their changes.
    pub fn refresh(&mut self) -> UpdateSet {
        self.renderables
            .iter_mut()
            .fold(UpdateSet::empty(), |acc, r| acc.union(r.update()))
    }

    pub fn is_visible(&self, preferences: &dyn PreferenceStore) -> bool {
        preferences.get_bool(&self.preference_id, self.default_visible)
    }

    pub fn set_visible(&self, preferences: &mut dyn PreferenceStore, visible: bool) {
        preferences.set_bool(&self.preference_id, visible);
    }

    pub fn len(&self) -> usize {
        self.renderables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }
}

impl Layer for RenderablesLayer {
    fn layer_depth_order(&self) -> i32 {
        self.depth_order
    }

    fn preference_id(&self) -> &str {
        &self.preference_id
    }

    fn layer_name(&self) -> &str {
        &self.name
    }

    fn renderables(&self) -> &[Box<dyn AstronomicalRenderable>] {
        &self.renderables
    }
}

/// Layer showing the user's custom object catalog.
pub struct CustomObjectLayer {
    objects: Vec<CustomObject>,
    base: RenderablesLayer,
}

impl CustomObjectLayer {
    /// Above most built-in layers, below the topmost ones.
    pub const LAYER_DEPTH_ORDER: i32 = 80;
    pub const PREFERENCE_ID: &'static str = "source_provider.7";
    /// String resource holding the display name.
    pub const LAYER_NAME_ID: &'static str = "show_custom_objects_pref";

    /// Load the catalog named by `config.catalog.path` and build the layer.
    pub fn load(
        config: &Config,
        icons: &dyn IconResolver,
        strings: &StringTable,
    ) -> Result<Self, LayerError> {
        let objects = catalog::load_catalog(&config.catalog.path)?;
        Self::from_objects(objects, icons, strings, config)
    }

    /// Parse a catalog stream and build the layer.
    pub fn from_reader(
        reader: impl Read,
        icons: &dyn IconResolver,
        strings: &StringTable,
        config: &Config,
    ) -> Result<Self, LayerError> {
        let objects = catalog::parse_catalog(reader)?;
        Self::from_objects(objects, icons, strings, config)
    }

    /// Build the layer from already parsed objects. Fails on the first icon
    /// that cannot be resolved.
    pub fn from_objects(
        objects: Vec<CustomObject>,
        icons: &dyn IconResolver,
        strings: &StringTable,
        config: &Config,
    ) -> Result<Self, LayerError> {
        let fallback_icon = config.assets.fallback_icon.as_deref();
        let renderables = objects
            .iter()
            .map(|object| {
                CustomObjectRenderable::build(object, icons, fallback_icon)
                    .map(|r| Box::new(r) as Box<dyn AstronomicalRenderable>)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let base = RenderablesLayer::new(
            Self::LAYER_DEPTH_ORDER,
            Self::PREFERENCE_ID,
            strings.get_or_key(Self::LAYER_NAME_ID),
            config.layer.default_visible,
            renderables,
        );
        log::debug!(
            "Built {} renderables for layer {:?}",
            base.len(),
            base.layer_name()
        );

        Ok(Self { objects, base })
    }

    /// Catalog entries in file order.
    pub fn objects(&self) -> &[CustomObject] {
        &self.objects
    }

    pub fn base(&self) -> &RenderablesLayer {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut RenderablesLayer {
        &mut self.base
    }
}

impl Layer for CustomObjectLayer {
    fn layer_depth_order(&self) -> i32 {
        self.base.layer_depth_order()
    }

    fn preference_id(&self) -> &str {
        self.base.preference_id()
    }

    fn layer_name(&self) -> &str {
        self.base.layer_name()
    }

    fn renderables(&self) -> &[Box<dyn AstronomicalRenderable>] {
        self.base.renderables()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skymap_assets::IconRegistry;
    use skymap_config::MemoryPreferences;

    const CATALOG: &str = r#"[
        {"name":"Nova X","ra":10.5,"dec":-20.0,"color":"0xff0000","size":0.02,"icon":"star_on"},
        {"name":"Nova Y","ra":11.0,"dec":-21.0,"color":"00ff00","size":0.03,"icon":"star_on",
         "catalogName":"NGC 9"},
        {"name":"Andromeda","ra":10.68,"dec":41.27,"color":"ffffff","size":0.05,"icon":"gift_on"}
    ]"#;

    fn build(json: &str) -> Result<CustomObjectLayer, LayerError> {
        let icons = IconRegistry::from_names(["star_on", "gift_on"]).unwrap();
        CustomObjectLayer::from_reader(
            json.as_bytes(),
            &icons,
            &StringTable::english(),
            &Config::default(),
        )
    }

    #[test]
    fn test_layer_declarations() {
        let layer = build(CATALOG).unwrap();
        assert_eq!(layer.layer_depth_order(), 80);
        assert_eq!(layer.preference_id(), "source_provider.7");
        assert_eq!(layer.layer_name(), "Custom Objects");
    }

    #[test]
    fn test_one_renderable_per_object_in_order() {
        let layer = build(CATALOG).unwrap();
        assert_eq!(layer.objects().len(), 3);
        let names: Vec<_> = layer
            .renderables()
            .iter()
            .map(|r| r.names()[0].clone())
            .collect();
        assert_eq!(names, ["Nova X", "Nova Y", "Andromeda"]);
    }

    #[test]
    fn test_empty_catalog_builds_empty_layer() {
        let layer = build("[]").unwrap();
        assert!(layer.base().is_empty());
    }

    #[test]
    fn test_malformed_catalog_fails_construction() {
        let err = build(r#"[{"name":"X"}]"#).err().unwrap();
        assert!(matches!(err, LayerError::MalformedCatalog { .. }));
    }

    #[test]
    fn test_unresolvable_icon_fails_construction() {
        let icons = IconRegistry::from_names(["gift_on"]).unwrap();
        let mut config = Config::default();
        config.assets.fallback_icon = None;
        let result = CustomObjectLayer::from_reader(
            CATALOG.as_bytes(),
            &icons,
            &StringTable::english(),
            &config,
        );
        assert!(matches!(result, Err(LayerError::AssetResolution { .. })));
    }

    #[test]
    fn test_search_by_name_is_case_insensitive() {
        let layer = build(CATALOG).unwrap();
        let hits = layer.base().search_by_object_name("andromeda");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Andromeda");
        assert_eq!(
            hits[0].location,
            skymap_coords::geocentric_coords(10.68, 41.27)
        );
        assert!(layer.base().search_by_object_name("Andro").is_empty());
    }

    #[test]
    fn test_prefix_matching() {
        let layer = build(CATALOG).unwrap();
        assert_eq!(
            layer.base().object_names_matching_prefix("NOVA"),
            ["Nova X", "Nova Y"]
        );
        assert_eq!(
            layer.base().object_names_matching_prefix(""),
            ["Andromeda", "Nova X", "Nova Y"]
        );
        assert!(layer.base().object_names_matching_prefix("zeta").is_empty());
    }

    #[test]
    fn test_layer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CustomObjectLayer>();

        let layer = std::sync::Arc::new(build(CATALOG).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let layer = std::sync::Arc::clone(&layer);
                std::thread::spawn(move || layer.base().search_by_object_name("nova x").len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 1);
        }
    }

    #[test]
    fn test_refresh_reports_nothing() {
        let mut layer = build(CATALOG).unwrap();
        for _ in 0..10 {
            assert!(layer.base_mut().refresh().is_empty());
        }
    }

    #[test]
    fn test_visibility_preference() {
        let layer = build(CATALOG).unwrap();
        let mut prefs = MemoryPreferences::new();
        assert!(layer.base().is_visible(&prefs));

        layer.base().set_visible(&mut prefs, false);
        assert!(!layer.base().is_visible(&prefs));
        assert!(!prefs.get_bool("source_provider.7", true));
    }

    #[test]
    fn test_layer_name_is_localized() {
        let icons = IconRegistry::from_names(["star_on"]).unwrap();
        let mut strings = StringTable::english();
        strings
            .overlay_ron_str(r#"{"show_custom_objects_pref": "Objets personnalisés"}"#)
            .unwrap();
        let layer =
            CustomObjectLayer::from_objects(Vec::new(), &icons, &strings, &Config::default())
                .unwrap();
        assert_eq!(layer.layer_name(), "Objets personnalisés");
    }
}
