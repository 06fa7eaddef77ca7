//! Road classification and ordering

use geo::Geometry;
use vecpost_core::{Error, Feature, Result};

use super::names::short_street_name;
use super::units::to_float;
use super::{remove_properties, tag};

/// Source whose roads are already classified upstream
const NATURAL_EARTH: &str = "naturalearthdata.com";

/// Zoom from which bridges, tunnels and layers affect the sort key
const LAYERING_ZOOM: u32 = 15;

/// Coarse road class used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadKind {
    Highway,
    MajorRoad,
    Path,
    Rail,
    MinorRoad,
}

impl RoadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            RoadKind::Highway => "highway",
            RoadKind::MajorRoad => "major_road",
            RoadKind::Path => "path",
            RoadKind::Rail => "rail",
            RoadKind::MinorRoad => "minor_road",
        }
    }

    pub fn classify(highway: Option<&str>, railway: Option<&str>) -> Self {
        match highway {
            Some("motorway" | "motorway_link") => return RoadKind::Highway,
            Some(
                "trunk" | "trunk_link" | "primary" | "primary_link" | "secondary" | "secondary_link" | "tertiary"
                | "tertiary_link",
            ) => return RoadKind::MajorRoad,
            Some("footpath" | "track" | "footway" | "steps" | "pedestrian" | "path" | "cycleway") => {
                return RoadKind::Path
            }
            _ => {}
        }
        match railway {
            Some("rail" | "tram" | "light_rail" | "narrow_gauge" | "monorail" | "subway") => RoadKind::Rail,
            _ => RoadKind::MinorRoad,
        }
    }
}

/// Road queries always carry a `source`; Natural Earth roads are skipped.
fn is_osm_road(feature: &Feature, operation: &'static str) -> Result<bool> {
    match feature.get_property("source") {
        Some(source) if source.is_truthy() => Ok(source.as_str() != Some(NATURAL_EARTH)),
        _ => Err(Error::MissingAttribute {
            operation,
            name: "source",
        }),
    }
}

pub fn road_kind(feature: &mut Feature) -> Result<()> {
    if !is_osm_road(feature, "road_kind")? {
        return Ok(());
    }
    let kind = RoadKind::classify(
        tag(&feature.properties, "highway").as_deref(),
        tag(&feature.properties, "railway").as_deref(),
    );
    feature.set_property("kind", kind.as_str());
    Ok(())
}

/// Set `is_link`, `is_tunnel` and `is_bridge` to `yes` or `no`
pub fn road_classifier(feature: &mut Feature) -> Result<()> {
    if !is_osm_road(feature, "road_classifier")? {
        return Ok(());
    }
    let props = &feature.properties;
    let is_link = tag(props, "highway").is_some_and(|h| h.ends_with("_link"));
    let is_tunnel = is_yes(tag(props, "tunnel").as_deref());
    let is_bridge = is_yes(tag(props, "bridge").as_deref());

    feature.set_property("is_link", yes_no(is_link));
    feature.set_property("is_tunnel", yes_no(is_tunnel));
    feature.set_property("is_bridge", yes_no(is_bridge));
    Ok(())
}

fn is_yes(value: Option<&str>) -> bool {
    matches!(value, Some("yes" | "true"))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Draw order for roads in `0..=39`.
///
/// Road class gives 15 to 24. From zoom 15 bridges add 10 and tunnels
/// subtract 10, and an explicit `layer` (clamped to -5..=5) moves the road
/// to 34..=39 above or 0..=5 below everything else.
pub fn road_sort_key(feature: &mut Feature, zoom: u32) {
    let props = &feature.properties;
    let highway = tag(props, "highway").unwrap_or_default();
    let railway = tag(props, "railway").unwrap_or_default();
    let aeroway = tag(props, "aeroway").unwrap_or_default();

    let mut sort_key: i64 = if highway == "motorway" {
        24
    } else if matches!(railway.as_str(), "rail" | "tram" | "light_rail" | "narrow_gauge" | "monorail") {
        23
    } else if highway == "trunk" {
        22
    } else if highway == "primary" {
        21
    } else if highway == "secondary" || aeroway == "runway" {
        20
    } else if highway == "tertiary" || aeroway == "taxiway" {
        19
    } else if highway.ends_with("_link") {
        18
    } else if matches!(highway.as_str(), "residential" | "unclassified" | "road" | "living_street") {
        17
    } else if matches!(highway.as_str(), "service" | "minor") {
        16
    } else {
        15
    };

    if zoom >= LAYERING_ZOOM {
        let tunnel = tag(props, "tunnel");
        if is_yes(tag(props, "bridge").as_deref()) {
            sort_key += 10;
        } else if is_yes(tunnel.as_deref())
            || (railway == "subway" && !matches!(tunnel.as_deref(), Some("no" | "false")))
        {
            sort_key -= 10;
        }

        let layer = props
            .get("layer")
            .filter(|v| v.is_truthy())
            .and_then(|v| v.as_f64().or_else(|| v.as_str().and_then(to_float)));
        if let Some(layer) = layer {
            let layer = layer.clamp(-5.0, 5.0);
            if layer > 0.0 {
                sort_key = (layer + 34.0) as i64;
            } else if layer < 0.0 {
                sort_key = (layer + 5.0) as i64;
            }
        }
    }

    feature.set_property("sort_key", sort_key);
}

pub fn road_trim_properties(feature: &mut Feature) {
    remove_properties(&mut feature.properties, &["bridge", "layer", "tunnel"]);
}

/// Normalize `oneway` to `yes`/`no`, reversing lines drawn against the
/// direction of travel
pub fn road_oneway(feature: &mut Feature) {
    match tag(&feature.properties, "oneway").as_deref() {
        Some("-1" | "reverse") => {
            if let Geometry::LineString(line) = &mut feature.geometry {
                line.0.reverse();
                feature.set_property("oneway", "yes");
            }
        }
        Some("true" | "1") => feature.set_property("oneway", "yes"),
        Some("false" | "0") => feature.set_property("oneway", "no"),
        _ => {}
    }
}

/// Shorten street type and direction words in `name`
pub fn road_abbreviate_name(feature: &mut Feature) {
    let Some(name) = feature.get_str("name").filter(|n| !n.is_empty()) else {
        return;
    };
    let short = short_street_name(name);
    feature.set_property("name", short);
}

/// Drop `route_name` when it only repeats `name`
pub fn route_name(feature: &mut Feature) {
    let Some(route) = feature.get_property("route_name").filter(|v| v.is_truthy()) else {
        return;
    };
    if Some(route) == feature.get_property("name") {
        feature.remove_property("route_name");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{line_string, Point};
    use vecpost_core::AttributeValue;

    fn road(highway: &str) -> Feature {
        Feature::new(Point::new(0.0, 0.0))
            .with_property("source", "openstreetmap.org")
            .with_property("highway", highway)
    }

    fn sort_key(f: &Feature) -> Option<i64> {
        match f.get_property("sort_key") {
            Some(AttributeValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    #[test]
    fn test_kind() {
        for (highway, kind) in [
            ("motorway_link", "highway"),
            ("secondary", "major_road"),
            ("cycleway", "path"),
            ("residential", "minor_road"),
        ] {
            let mut f = road(highway);
            road_kind(&mut f).unwrap();
            assert_eq!(f.get_str("kind"), Some(kind), "{highway}");
        }

        let mut f = Feature::new(Point::new(0.0, 0.0))
            .with_property("source", "openstreetmap.org")
            .with_property("railway", "subway");
        road_kind(&mut f).unwrap();
        assert_eq!(f.get_str("kind"), Some("rail"));
    }

    #[test]
    fn test_source_required() {
        let mut f = Feature::new(Point::new(0.0, 0.0)).with_property("highway", "primary");
        assert!(matches!(
            road_kind(&mut f),
            Err(Error::MissingAttribute { name: "source", .. })
        ));
        assert!(road_classifier(&mut f).is_err());
    }

    #[test]
    fn test_natural_earth_untouched() {
        let mut f = road("primary").with_property("source", NATURAL_EARTH);
        road_kind(&mut f).unwrap();
        road_classifier(&mut f).unwrap();
        assert!(f.get_property("kind").is_none());
        assert!(f.get_property("is_link").is_none());
    }

    #[test]
    fn test_classifier() {
        let mut f = road("primary_link").with_property("bridge", "yes").with_property("tunnel", "no");
        road_classifier(&mut f).unwrap();
        assert_eq!(f.get_str("is_link"), Some("yes"));
        assert_eq!(f.get_str("is_bridge"), Some("yes"));
        assert_eq!(f.get_str("is_tunnel"), Some("no"));
    }

    #[test]
    fn test_sort_key_base() {
        let mut f = road("motorway");
        road_sort_key(&mut f, 10);
        assert_eq!(sort_key(&f), Some(24));

        let mut f = road("service").with_property("bridge", "yes");
        road_sort_key(&mut f, 12);
        assert_eq!(sort_key(&f), Some(16));

        let mut f = Feature::new(Point::new(0.0, 0.0)).with_property("aeroway", "runway");
        road_sort_key(&mut f, 10);
        assert_eq!(sort_key(&f), Some(20));
    }

    #[test]
    fn test_sort_key_layering() {
        let mut f = road("service").with_property("bridge", "yes");
        road_sort_key(&mut f, 15);
        assert_eq!(sort_key(&f), Some(26));

        let mut f = Feature::new(Point::new(0.0, 0.0)).with_property("railway", "subway");
        road_sort_key(&mut f, 16);
        assert_eq!(sort_key(&f), Some(5));

        let mut f = road("primary").with_property("layer", "12");
        road_sort_key(&mut f, 15);
        assert_eq!(sort_key(&f), Some(39));

        let mut f = road("primary").with_property("layer", -2);
        road_sort_key(&mut f, 15);
        assert_eq!(sort_key(&f), Some(3));
    }

    #[test]
    fn test_oneway_reverse() {
        let mut f = Feature::new(line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0)]).with_property("oneway", "-1");
        road_oneway(&mut f);
        assert_eq!(f.get_str("oneway"), Some("yes"));
        assert_eq!(f.geometry, Geometry::LineString(line_string![(x: 1.0, y: 0.0), (x: 0.0, y: 0.0)]));

        let mut f = road("primary").with_property("oneway", "reverse");
        road_oneway(&mut f);
        assert_eq!(f.get_str("oneway"), Some("reverse"));

        let mut f = road("primary").with_property("oneway", 1);
        road_oneway(&mut f);
        assert_eq!(f.get_str("oneway"), Some("yes"));
    }

    #[test]
    fn test_route_name() {
        let mut f = road("primary").with_property("name", "A1").with_property("route_name", "A1");
        route_name(&mut f);
        assert!(f.get_property("route_name").is_none());

        let mut f = road("primary").with_property("name", "High St").with_property("route_name", "A1");
        route_name(&mut f);
        assert_eq!(f.get_str("route_name"), Some("A1"));
    }

    #[test]
    fn test_abbreviate_name() {
        let mut f = road("residential").with_property("name", "North Main Street");
        road_abbreviate_name(&mut f);
        assert_eq!(f.get_str("name"), Some("N Main St"));
    }
}
