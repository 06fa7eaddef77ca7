//! Landuse kind cleanup and draw order

use vecpost_core::Feature;

fn current_kind(deprecated: &str) -> Option<&'static str> {
    match deprecated {
        "station" | "sub_station" => Some("substation"),
        _ => None,
    }
}

/// Draw order shared between server-side cutting and client rendering
fn sort_order(kind: &str) -> Option<i64> {
    let order = match kind {
        "residential" | "rural" | "urban" => 1,
        "conservation" | "nature_reserve" | "park" => 2,
        "farm" | "farmland" | "forest" | "generator" | "plant" | "stadium" => 3,
        "aerodrome" | "cemetery" | "commercial" | "golf_course" | "hospital" | "parking" | "pedestrian"
        | "place_of_worship" | "playground" | "railway" | "recreation_ground" | "retail" | "school"
        | "substation" | "university" | "zoo" => 4,
        "apron" | "runway" => 5,
        _ => return None,
    };
    Some(order)
}

pub fn remap_deprecated_landuse_kinds(feature: &mut Feature) {
    if let Some(kind) = feature.get_str("kind").and_then(current_kind) {
        feature.set_property("kind", kind);
    }
}

/// Set `order` for landuse kinds with a known draw order
pub fn landuse_sort_key(feature: &mut Feature) {
    if let Some(order) = feature.get_str("kind").and_then(sort_order) {
        feature.set_property("order", order);
    }
}
