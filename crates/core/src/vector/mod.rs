//! Vector tile data structures
//!
//! - Feature: geometry + attributes + optional id
//! - FeatureLayer: named collection of features
//! - TileLayers: the layers of one tile request

mod attribute;
mod layer;

pub use attribute::{AttributeValue, Properties};
pub use layer::{FeatureLayer, TileLayers};

use geo_types::Geometry;

/// A map feature with geometry and attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Feature geometry
    pub geometry: Geometry<f64>,
    /// Feature attributes
    pub properties: Properties,
    /// Optional feature ID. Negative ids come from OSM relations.
    pub id: Option<i64>,
}

impl Feature {
    /// Create a new feature with geometry and no attributes
    pub fn new(geometry: impl Into<Geometry<f64>>) -> Self {
        Self {
            geometry: geometry.into(),
            properties: Properties::new(),
            id: None,
        }
    }

    /// Set the feature id
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder-style attribute assignment
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Set an attribute
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get an attribute
    pub fn get_property(&self, key: &str) -> Option<&AttributeValue> {
        self.properties.get(key)
    }

    /// Get a string attribute, `None` when absent or not a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(AttributeValue::as_str)
    }

    /// Remove an attribute, returning its old value
    pub fn remove_property(&mut self, key: &str) -> Option<AttributeValue> {
        self.properties.remove(key)
    }
}
