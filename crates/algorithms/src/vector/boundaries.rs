//! Exterior boundaries of polygon layers
//!
//! For each polygon in a layer, emits the part of its outline that is not
//! shared with any neighbouring geometry. Shared borders between
//! administrative areas or landuse patches drop out, leaving only the
//! outer edge of each cluster.

use std::borrow::Cow;
use std::collections::BTreeMap;

use geo::{Geometry, Intersects};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vecpost_core::{Algorithm, AttributeValue, Error, Feature, FeatureLayer, Properties, Result, TileLayers};

use super::geometry::{self, GeometryKind};
use super::index::SpatialIndex;

/// How one output attribute is derived from the source feature.
///
/// In configuration: `true` copies, an object is a lookup table, any other
/// value is a constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AttributeValue", into = "AttributeValue")]
pub enum PropInstruction {
    /// Copy the source attribute of the same key, if present
    Copy,
    /// Map the source value (by its string form) through a table
    Lookup(BTreeMap<String, AttributeValue>),
    /// Always set this value
    Constant(AttributeValue),
}

impl From<AttributeValue> for PropInstruction {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Bool(true) => PropInstruction::Copy,
            AttributeValue::Map(table) => PropInstruction::Lookup(table),
            other => PropInstruction::Constant(other),
        }
    }
}

impl From<PropInstruction> for AttributeValue {
    fn from(instruction: PropInstruction) -> Self {
        match instruction {
            PropInstruction::Copy => AttributeValue::Bool(true),
            PropInstruction::Lookup(table) => AttributeValue::Map(table),
            PropInstruction::Constant(value) => value,
        }
    }
}

/// Output key to instruction
pub type PropTransform = BTreeMap<String, PropInstruction>;

/// Build the attributes of a derived feature from its source attributes
pub fn transform_properties(source: &Properties, transform: &PropTransform) -> Properties {
    let mut out = Properties::new();
    for (key, instruction) in transform {
        let value = match instruction {
            PropInstruction::Copy => source.get(key).cloned(),
            PropInstruction::Lookup(table) => source
                .get(key)
                .and_then(AttributeValue::lookup_key)
                .and_then(|k| table.get(&k).cloned()),
            PropInstruction::Constant(value) => Some(value.clone()),
        };
        if let Some(value) = value {
            out.insert(key.clone(), value);
        }
    }
    out
}

/// Parameters for exterior boundary extraction
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExteriorBoundariesParams {
    pub base_layer: String,
    /// Emit into a new layer of this name instead of the base layer. The
    /// base layer's own name appends to it.
    pub new_layer_name: Option<String>,
    pub prop_transform: PropTransform,
    /// Grow neighbours by this distance before subtracting them
    pub buffer_size: Option<f64>,
    /// Lowest zoom at which boundaries are produced
    pub start_zoom: u32,
}

/// Extract the unshared outline of every polygon in the base layer.
///
/// Returns the layer the boundaries were written to, or `None` below
/// `start_zoom` or when the base layer is not part of this tile.
pub fn exterior_boundaries<'a>(
    layers: &'a mut TileLayers,
    params: &ExteriorBoundariesParams,
) -> Option<&'a mut FeatureLayer> {
    if layers.zoom < params.start_zoom {
        debug!(zoom = layers.zoom, start_zoom = params.start_zoom, "below start zoom, skipping");
        return None;
    }
    let Some(base_idx) = layers.position(&params.base_layer) else {
        debug!(base = %params.base_layer, "layer not present, skipping");
        return None;
    };

    let base = &layers.layers[base_idx];
    let boundaries = collect_boundaries(&base.features, params);
    debug!(
        layer = %base.name,
        polygons = base.features.len(),
        boundaries = boundaries.len(),
        "extracted exterior boundaries"
    );

    // a new layer named like the base would replace the polygons, so append
    match params.new_layer_name.as_ref().filter(|name| **name != params.base_layer) {
        Some(name) => {
            let layer = base.renamed(name.as_str()).with_features(boundaries);
            Some(layers.insert(layer))
        }
        None => {
            let base = &mut layers.layers[base_idx];
            base.features.extend(boundaries);
            Some(base)
        }
    }
}

fn collect_boundaries(features: &[Feature], params: &ExteriorBoundariesParams) -> Vec<Feature> {
    let index = SpatialIndex::new(features.iter().map(|f| f.geometry.clone()).collect());
    let mut out = Vec::new();

    for (i, feature) in features.iter().enumerate() {
        if !matches!(
            GeometryKind::of(&feature.geometry),
            GeometryKind::Polygon | GeometryKind::MultiPolygon
        ) {
            continue;
        }

        let mut outline = geometry::boundary(&feature.geometry);

        for j in index.query(&outline) {
            if j == i {
                continue;
            }
            let Some(other) = index.get(j) else { continue };
            if !other.intersects(&outline) {
                continue;
            }

            let other: Cow<Geometry<f64>> = match params.buffer_size {
                Some(size) => Cow::Owned(geometry::buffer(other, size)),
                None => Cow::Borrowed(other),
            };
            outline = geometry::difference(&outline, &other);
            if geometry::is_empty(&outline) {
                break;
            }
        }

        if geometry::is_empty(&outline) {
            continue;
        }

        out.push(Feature {
            geometry: outline,
            properties: transform_properties(&feature.properties, &params.prop_transform),
            id: feature.id,
        });
    }

    out
}

/// Exterior boundary extraction as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct ExteriorBoundaries;

impl Algorithm for ExteriorBoundaries {
    type Input = TileLayers;
    type Output = TileLayers;
    type Params = ExteriorBoundariesParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Exterior Boundaries"
    }

    fn description(&self) -> &'static str {
        "Outline polygons, removing edges shared with neighbouring geometries"
    }

    fn execute(&self, mut input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        exterior_boundaries(&mut input, &params);
        Ok(input)
    }
}
