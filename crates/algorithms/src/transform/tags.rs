//! Raw OSM tag handling
//!
//! Features may carry their full OSM tag set under `tags`, either as
//! PostgreSQL hstore text (`"name:de"=>"Wien", "wheelchair"=>NULL`) or as
//! an already decoded map.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use vecpost_core::{AttributeValue, Feature};

static HSTORE_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""((?:[^"\\]|\\.)*)"\s*=>\s*(?:"((?:[^"\\]|\\.)*)"|(NULL))"#).unwrap()
});

const LOCALIZED_PREFIXES: [&str; 4] = ["name:", "alt_name:", "alt_name_", "old_name:"];

const NAME_ALTERNATES: [&str; 7] = [
    "int_name",
    "loc_name",
    "nat_name",
    "official_name",
    "old_name",
    "reg_name",
    "short_name",
];

/// Decode hstore text into a map. Pairs that do not parse are skipped.
pub fn parse_hstore(text: &str) -> BTreeMap<String, AttributeValue> {
    HSTORE_PAIR
        .captures_iter(text)
        .filter_map(|caps| {
            let key = unescape(caps.get(1)?.as_str());
            let value = match caps.get(2) {
                Some(v) => AttributeValue::String(unescape(v.as_str())),
                None => AttributeValue::Null,
            };
            Some((key, value))
        })
        .collect()
}

fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                out.push(escaped);
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Decode `tags` into a map when it is still hstore text
pub fn tags_create_dict(feature: &mut Feature) {
    let Some(text) = feature.get_str("tags").filter(|t| !t.is_empty()) else {
        return;
    };
    let tags = parse_hstore(text);
    feature.set_property("tags", tags);
}

pub fn tags_remove(feature: &mut Feature) {
    feature.remove_property("tags");
}

/// Copy localized and alternate names from `tags` onto the feature when
/// they differ from `name`
pub fn tags_name_i18n(feature: &mut Feature) {
    let Some(tags) = feature.get_property("tags").and_then(AttributeValue::as_map) else {
        return;
    };
    let Some(name) = feature.get_property("name").filter(|n| n.is_truthy()) else {
        return;
    };

    let mut names: Vec<(String, AttributeValue)> = tags
        .iter()
        .filter(|(k, v)| LOCALIZED_PREFIXES.iter().any(|p| k.starts_with(p)) && *v != name)
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    for key in NAME_ALTERNATES {
        if let Some(value) = tags.get(key).filter(|v| v.is_truthy() && *v != name) {
            names.push((key.to_string(), value.clone()));
        }
    }

    feature.properties.extend(names);
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Point;

    fn with_tags(tags: &str) -> Feature {
        Feature::new(Point::new(0.0, 0.0)).with_property("tags", tags)
    }

    #[test]
    fn test_parse_hstore() {
        let tags = parse_hstore(r#""name:de"=>"Wien", "note"=>"say \"hi\"", "wheelchair"=>NULL"#);
        assert_eq!(tags.len(), 3);
        assert_eq!(tags["name:de"], AttributeValue::from("Wien"));
        assert_eq!(tags["note"], AttributeValue::from("say \"hi\""));
        assert!(tags["wheelchair"].is_null());
    }

    #[test]
    fn test_create_dict() {
        let mut f = with_tags(r#""a"=>"1""#);
        tags_create_dict(&mut f);
        let tags = f.get_property("tags").and_then(AttributeValue::as_map).unwrap();
        assert_eq!(tags.get("a"), Some(&AttributeValue::from("1")));

        tags_remove(&mut f);
        assert!(f.get_property("tags").is_none());
    }

    #[test]
    fn test_name_i18n() {
        let mut f = with_tags(
            r#""name:de"=>"Wien", "name:en"=>"Vienna", "alt_name_1"=>"Wean", "official_name"=>"Wien", "short_name"=>"W", "int_name"=>"""#,
        )
        .with_property("name", "Wien");
        tags_create_dict(&mut f);
        tags_name_i18n(&mut f);

        assert_eq!(f.get_str("name:en"), Some("Vienna"));
        assert_eq!(f.get_str("alt_name_1"), Some("Wean"));
        assert_eq!(f.get_str("short_name"), Some("W"));
        assert!(f.get_property("name:de").is_none());
        assert!(f.get_property("official_name").is_none());
        assert!(f.get_property("int_name").is_none());
    }

    #[test]
    fn test_name_i18n_needs_name() {
        let mut f = with_tags(r#""name:en"=>"Vienna""#);
        tags_create_dict(&mut f);
        tags_name_i18n(&mut f);
        assert!(f.get_property("name:en").is_none());
    }
}
