//! Cut priority resolution
//!
//! Decides the order in which the values of the cutting attribute are
//! applied. Earlier values are cut first and keep their area.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use vecpost_core::{AttributeValue, Error, Feature, Properties, Result};

/// Value of the cutting attribute on a feature. `None` is the absence
/// marker, shared by missing keys and explicit nulls.
pub type CutValue = Option<AttributeValue>;

/// Read the cut value of `key`, folding explicit null into absence
pub fn cut_value(props: &Properties, key: &str) -> CutValue {
    props.get(key).filter(|v| !v.is_null()).cloned()
}

/// How to order the cutting attribute values.
///
/// In configuration this is either a list of values (`["river", "lake"]`)
/// or a sort specification (`{"sort_key": "order", "reverse": true}`).
/// Leaving it out orders values as they are first seen in the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CutPriority {
    /// Values in priority order. `null` names the group without a value.
    Explicit(Vec<AttributeValue>),
    /// Order groups by the minimum of another attribute
    SortBy(SortSpec),
}

/// Order cut values by the smallest `sort_key` seen in each group
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortSpec {
    pub sort_key: Option<String>,
    /// Largest minimum first
    pub reverse: bool,
}

/// Resolve the ordered, de-duplicated list of cut values.
///
/// # Errors
/// `Error::MissingParameter` when a sort specification has no `sort_key`.
pub fn resolve_priority(
    features: &[Feature],
    attribute: &str,
    priority: Option<&CutPriority>,
) -> Result<Vec<CutValue>> {
    match priority {
        None => Ok(observed_values(features, attribute)),
        Some(CutPriority::Explicit(values)) => {
            let mut ordered: Vec<CutValue> = Vec::with_capacity(values.len());
            for value in values {
                let value = Some(value.clone()).filter(|v| !v.is_null());
                if !ordered.contains(&value) {
                    ordered.push(value);
                }
            }
            Ok(ordered)
        }
        Some(CutPriority::SortBy(spec)) => {
            let sort_key = spec.sort_key.as_deref().ok_or(Error::MissingParameter {
                operation: "cutting priority",
                name: "sort_key",
            })?;
            Ok(sorted_values(features, attribute, sort_key, spec.reverse))
        }
    }
}

/// Distinct values in first-seen order
fn observed_values(features: &[Feature], attribute: &str) -> Vec<CutValue> {
    let mut values: Vec<CutValue> = Vec::new();
    for feature in features {
        let value = cut_value(&feature.properties, attribute);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}

fn sorted_values(features: &[Feature], attribute: &str, sort_key: &str, reverse: bool) -> Vec<CutValue> {
    // (cut value, minimum sort value) in first-seen order
    let mut groups: Vec<(CutValue, Option<AttributeValue>)> = Vec::new();

    for feature in features {
        let key = cut_value(&feature.properties, attribute);
        let order = cut_value(&feature.properties, sort_key);

        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, current)) => {
                if let Some(order) = order {
                    let smaller = match current.as_ref() {
                        Some(existing) => compare_values(&order, existing) == Ordering::Less,
                        None => true,
                    };
                    if smaller {
                        *current = Some(order);
                    }
                }
            }
            None => groups.push((key, order)),
        }
    }

    // Stable sort: ties keep first-seen order, groups without any sort
    // value go last whichever direction is requested.
    groups.sort_by(|(_, a), (_, b)| match (a, b) {
        (Some(a), Some(b)) => {
            let ord = compare_values(a, b);
            if reverse {
                ord.reverse()
            } else {
                ord
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    groups.into_iter().map(|(key, _)| key).collect()
}

/// Total order over attribute values: booleans, then numbers, then strings,
/// then maps. Numbers compare by value regardless of `Int`/`Float`.
pub fn compare_values(a: &AttributeValue, b: &AttributeValue) -> Ordering {
    fn rank(v: &AttributeValue) -> u8 {
        match v {
            AttributeValue::Bool(_) => 0,
            AttributeValue::Int(_) | AttributeValue::Float(_) => 1,
            AttributeValue::String(_) => 2,
            AttributeValue::Map(_) => 3,
            AttributeValue::Null => 4,
        }
    }

    match (a, b) {
        (AttributeValue::Bool(x), AttributeValue::Bool(y)) => x.cmp(y),
        (AttributeValue::String(x), AttributeValue::String(y)) => x.cmp(y),
        (AttributeValue::Int(x), AttributeValue::Int(y)) => x.cmp(y),
        _ => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            _ => rank(a).cmp(&rank(b)),
        },
    }
}
