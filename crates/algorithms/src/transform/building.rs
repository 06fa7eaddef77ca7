//! Building attribute normalization

use vecpost_core::{AttributeValue, Feature};

use super::units::value_to_meters;
use super::{coalesce, remove_properties};

/// Meters per storey
const LEVEL_HEIGHT: f64 = 3.0;
/// Roof allowance added to a height derived from levels
const ROOF_HEIGHT: f64 = 2.0;

/// Set `kind` from the building type, or from amenity/shop/tourism when the
/// building is only tagged `yes`
pub fn building_kind(feature: &mut Feature) {
    let props = &feature.properties;
    let kind = match coalesce(props, &["building:part", "building"]) {
        Some(building) if building.as_str() != Some("yes") => Some(building),
        _ => coalesce(props, &["amenity", "shop", "tourism"]),
    };
    if let Some(kind) = kind.cloned() {
        feature.set_property("kind", kind);
    }
}

/// Height in meters from `height`, else from `building:levels`
pub fn building_height(feature: &mut Feature) {
    let height = derived_height(feature, "height", "building:levels", |levels| {
        levels.max(1.0) * LEVEL_HEIGHT + ROOF_HEIGHT
    });
    set_or_remove(feature, "height", height);
}

/// Base height in meters from `min_height`, else from `building:min_levels`
pub fn building_min_height(feature: &mut Feature) {
    let min_height = derived_height(feature, "min_height", "building:min_levels", |levels| {
        levels.max(0.0) * LEVEL_HEIGHT
    });
    set_or_remove(feature, "min_height", min_height);
}

pub fn building_trim_properties(feature: &mut Feature) {
    remove_properties(
        &mut feature.properties,
        &[
            "amenity",
            "shop",
            "tourism",
            "building",
            "building:part",
            "building:levels",
            "building:min_levels",
        ],
    );
}

fn derived_height(feature: &Feature, height_key: &str, levels_key: &str, from_levels: fn(f64) -> f64) -> Option<f64> {
    let parse = |key: &str| feature.get_property(key).and_then(value_to_meters);
    parse(height_key).or_else(|| parse(levels_key).map(from_levels))
}

fn set_or_remove(feature: &mut Feature, key: &str, value: Option<f64>) {
    match value {
        Some(v) => feature.set_property(key, AttributeValue::Float(v)),
        None => {
            feature.remove_property(key);
        }
    }
}
