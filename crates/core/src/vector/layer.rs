//! Feature layers and the per-tile layer store

use super::Feature;

/// Named collection of features
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureLayer {
    /// Layer name, used for lookups
    pub name: String,
    /// Layer configuration passed through unmodified
    pub datum: serde_json::Value,
    pub features: Vec<Feature>,
}

impl FeatureLayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            datum: serde_json::Value::Null,
            features: Vec::new(),
        }
    }

    pub fn with_datum(mut self, datum: serde_json::Value) -> Self {
        self.datum = datum;
        self
    }

    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.features = features;
        self
    }

    /// Empty layer carrying a copy of this layer's metadata under a new name.
    ///
    /// A `"name"` entry in an object datum is renamed as well.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        let mut datum = self.datum.clone();
        if let Some(obj) = datum.as_object_mut() {
            obj.insert("name".to_string(), serde_json::Value::String(name.clone()));
        }
        Self {
            name,
            datum,
            features: Vec::new(),
        }
    }

    pub fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }
}

/// All feature layers of one tile request, plus the zoom they were built for.
///
/// Lookups return the first layer with a matching name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TileLayers {
    pub zoom: u32,
    pub layers: Vec<FeatureLayer>,
}

impl TileLayers {
    pub fn new(zoom: u32, layers: Vec<FeatureLayer>) -> Self {
        Self { zoom, layers }
    }

    /// Index of the first layer called `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.layers.iter().position(|l| l.name == name)
    }

    pub fn get(&self, name: &str) -> Option<&FeatureLayer> {
        self.layers.iter().find(|l| l.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FeatureLayer> {
        self.layers.iter_mut().find(|l| l.name == name)
    }

    /// Insert a layer, replacing an existing layer with the same name.
    pub fn insert(&mut self, layer: FeatureLayer) -> &mut FeatureLayer {
        let idx = match self.position(&layer.name) {
            Some(idx) => {
                self.layers[idx] = layer;
                idx
            }
            None => {
                self.layers.push(layer);
                self.layers.len() - 1
            }
        };
        &mut self.layers[idx]
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }
}
