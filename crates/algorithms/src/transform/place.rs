//! Place labels: capitals and default scale ranks

use vecpost_core::Feature;

pub fn place_ne_capital(feature: &mut Feature) {
    if feature.get_str("source") != Some("naturalearthdata.com") {
        return;
    }
    let flag = match feature.get_str("kind") {
        Some("Admin-0 capital") => "capital",
        Some("Admin-1 capital") => "state_capital",
        _ => return,
    };
    feature.set_property(flag, "yes");
}

/// Rough scale rank of an OSM place kind
fn default_scalerank(kind: &str) -> Option<i64> {
    let rank = match kind {
        "locality" | "isolated_dwelling" | "farm" => 13,
        "hamlet" | "neighbourhood" => 12,
        "village" => 11,
        "suburb" | "quarter" | "borough" => 10,
        "town" | "city" => 8,
        "province" | "state" => 4,
        "sea" => 3,
        "country" | "ocean" | "continent" => 0,
        _ => return None,
    };
    Some(rank)
}

/// Fill in `scalerank` from the place kind when no curated one exists.
/// Capital cities and towns rank lower (more important).
pub fn calculate_default_place_scalerank(feature: &mut Feature) {
    if feature.get_property("scalerank").is_some_and(|v| !v.is_null()) {
        return;
    }
    let Some(kind) = feature.get_str("kind") else {
        return;
    };
    let Some(mut rank) = default_scalerank(kind) else {
        return;
    };

    if matches!(kind, "city" | "town") {
        if feature.get_str("state_capital") == Some("yes") {
            rank -= 1;
        } else if feature.get_str("capital") == Some("yes") {
            rank -= 2;
        }
    }

    feature.set_property("scalerank", rank);
}
