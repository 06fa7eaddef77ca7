//! Parsing of free-form numeric tag values

use once_cell::sync::Lazy;
use regex::Regex;
use vecpost_core::AttributeValue;

static FEET: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^([+-]?[0-9.]+)'(?: *([+-]?[0-9.]+)")?"#).unwrap());
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]?[0-9.]+").unwrap());

const METERS_PER_INCH: f64 = 0.0254;

/// Parse a number, accepting `,` and `;` as decimal separators
pub fn to_float(text: &str) -> Option<f64> {
    text.trim().replace([';', ','], ".").parse().ok()
}

/// Parse a length in meters.
///
/// Accepts plain numbers, a ` m` suffix and feet/inches notation
/// (`5'`, `5'6"`). Anything else falls back to the first number found in
/// the text.
pub fn to_float_meters(text: &str) -> Option<f64> {
    if let Some(value) = to_float(text) {
        return Some(value);
    }

    let text = text.trim();

    if let Some(meters) = text.strip_suffix(" m").and_then(to_float) {
        return Some(meters);
    }

    if let Some(caps) = FEET.captures(text) {
        let feet = caps.get(1).and_then(|m| to_float(m.as_str()));
        let inches = caps.get(2).and_then(|m| to_float(m.as_str()));
        if feet.is_some() || inches.is_some() {
            let total = feet.unwrap_or(0.0) * 12.0 + inches.unwrap_or(0.0);
            return Some(total * METERS_PER_INCH);
        }
    }

    NUMBER.find_iter(text).find_map(|m| to_float(m.as_str()))
}

/// Numeric value of an attribute, parsing text as a length in meters
pub fn value_to_meters(value: &AttributeValue) -> Option<f64> {
    match value {
        AttributeValue::Int(_) | AttributeValue::Float(_) => value.as_f64(),
        AttributeValue::String(s) => to_float_meters(s),
        _ => None,
    }
}
