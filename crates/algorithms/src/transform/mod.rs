//! Per-feature transforms
//!
//! Small attribute rewrites applied to every feature of a layer after the
//! data query: normalizing building heights, classifying roads, filling in
//! place ranks and so on. Each transform is named in configuration by its
//! snake_case name.

mod building;
mod landuse;
mod names;
mod place;
mod road;
mod tags;
pub mod units;

pub use building::{building_height, building_kind, building_min_height, building_trim_properties};
pub use landuse::{landuse_sort_key, remap_deprecated_landuse_kinds};
pub use names::short_street_name;
pub use place::{calculate_default_place_scalerank, place_ne_capital};
pub use road::{
    road_abbreviate_name, road_classifier, road_kind, road_oneway, road_sort_key, road_trim_properties, route_name,
    RoadKind,
};
pub use tags::{parse_hstore, tags_create_dict, tags_name_i18n, tags_remove};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vecpost_core::{AttributeValue, Feature, FeatureLayer, Properties, Result, TileLayers};

/// A named per-feature transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureTransform {
    AddIdToProperties,
    DetectOsmRelation,
    RemoveFeatureId,
    BuildingKind,
    BuildingHeight,
    BuildingMinHeight,
    BuildingTrimProperties,
    RoadKind,
    RoadClassifier,
    RoadSortKey,
    RoadTrimProperties,
    RoadOneway,
    RoadAbbreviateName,
    RouteName,
    PlaceNeCapital,
    CalculateDefaultPlaceScalerank,
    TagsCreateDict,
    TagsRemove,
    TagsNameI18n,
    RemapDeprecatedLanduseKinds,
    LanduseSortKey,
}

impl FeatureTransform {
    /// Apply the transform to one feature at `zoom`
    ///
    /// # Errors
    /// `Error::MissingAttribute` from road transforms on features without a
    /// `source`.
    pub fn apply(self, feature: &mut Feature, zoom: u32) -> Result<()> {
        match self {
            FeatureTransform::AddIdToProperties => add_id_to_properties(feature),
            FeatureTransform::DetectOsmRelation => detect_osm_relation(feature),
            FeatureTransform::RemoveFeatureId => remove_feature_id(feature),
            FeatureTransform::BuildingKind => building_kind(feature),
            FeatureTransform::BuildingHeight => building_height(feature),
            FeatureTransform::BuildingMinHeight => building_min_height(feature),
            FeatureTransform::BuildingTrimProperties => building_trim_properties(feature),
            FeatureTransform::RoadKind => return road_kind(feature),
            FeatureTransform::RoadClassifier => return road_classifier(feature),
            FeatureTransform::RoadSortKey => road_sort_key(feature, zoom),
            FeatureTransform::RoadTrimProperties => road_trim_properties(feature),
            FeatureTransform::RoadOneway => road_oneway(feature),
            FeatureTransform::RoadAbbreviateName => road_abbreviate_name(feature),
            FeatureTransform::RouteName => route_name(feature),
            FeatureTransform::PlaceNeCapital => place_ne_capital(feature),
            FeatureTransform::CalculateDefaultPlaceScalerank => calculate_default_place_scalerank(feature),
            FeatureTransform::TagsCreateDict => tags_create_dict(feature),
            FeatureTransform::TagsRemove => tags_remove(feature),
            FeatureTransform::TagsNameI18n => tags_name_i18n(feature),
            FeatureTransform::RemapDeprecatedLanduseKinds => remap_deprecated_landuse_kinds(feature),
            FeatureTransform::LanduseSortKey => landuse_sort_key(feature),
        }
        Ok(())
    }
}

/// Parameters for running transforms over one layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    pub layer: String,
    /// Applied to each feature in this order
    pub transforms: Vec<FeatureTransform>,
}

/// Run the configured transforms over every feature of a layer.
///
/// Returns `None` when the layer is not part of this tile.
pub fn apply_transforms<'a>(layers: &'a mut TileLayers, params: &TransformParams) -> Result<Option<&'a mut FeatureLayer>> {
    let zoom = layers.zoom;
    let Some(layer) = layers.get_mut(&params.layer) else {
        debug!(layer = %params.layer, "layer not present, skipping transforms");
        return Ok(None);
    };

    for feature in &mut layer.features {
        for transform in &params.transforms {
            transform.apply(feature, zoom)?;
        }
    }
    Ok(Some(layer))
}

/// First truthy value among `keys`
pub(crate) fn coalesce<'a>(props: &'a Properties, keys: &[&str]) -> Option<&'a AttributeValue> {
    keys.iter().filter_map(|k| props.get(*k)).find(|v| v.is_truthy())
}

pub(crate) fn remove_properties(props: &mut Properties, keys: &[&str]) {
    for key in keys {
        props.remove(*key);
    }
}

/// Scalar tag value as text, so numeric and string tags compare alike
pub(crate) fn tag(props: &Properties, key: &str) -> Option<String> {
    props.get(key).and_then(AttributeValue::lookup_key)
}

/// Expose the feature id as an `id` attribute
pub fn add_id_to_properties(feature: &mut Feature) {
    let id = feature.id.map_or(AttributeValue::Null, AttributeValue::Int);
    feature.set_property("id", id);
}

/// Negative ids are OSM relations
pub fn detect_osm_relation(feature: &mut Feature) {
    if feature.id.is_some_and(|id| id < 0) {
        feature.set_property("osm_relation", true);
    }
}

pub fn remove_feature_id(feature: &mut Feature) {
    feature.id = None;
}
