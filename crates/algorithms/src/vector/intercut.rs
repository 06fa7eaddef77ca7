//! Intercut and overlap: projecting attributes from one layer onto another
//!
//! `intercut` splits every feature of a base layer by the shapes of a
//! cutting layer. Parts inside a cutting shape get the cutting shape's
//! attribute value; parts outside keep their attributes unchanged. The
//! intended use is styling: e.g. tagging road segments with the landuse
//! they run through.
//!
//! `overlap` does the same classification without splitting: a base
//! feature takes the value of a cutting shape covering at least
//! `min_fraction` of its area.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vecpost_core::{Algorithm, Error, FeatureLayer, Result, TileLayers};

use super::cutter::{build_cut_index, Cutter, HardCut, MinOverlap, SplitPolicy, DEFAULT_MIN_FRACTION};
use super::priority::{resolve_priority, CutPriority};

/// Parameters for intercut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntercutParams {
    /// Layer whose features are cut
    pub base_layer: String,
    /// Layer providing the cutting shapes
    pub cutting_layer: String,
    /// Attribute read from cutting features (required)
    pub attribute: Option<String>,
    /// Attribute written onto inside parts, defaults to `attribute`
    pub target_attribute: Option<String>,
    /// Priority of cutting values; first-seen order when absent
    pub cutting_attrs: Option<CutPriority>,
    /// Only emit parts of the same geometry type as the original
    pub keep_geom_type: bool,
}

impl Default for IntercutParams {
    fn default() -> Self {
        Self {
            base_layer: String::new(),
            cutting_layer: String::new(),
            attribute: None,
            target_attribute: None,
            cutting_attrs: None,
            keep_geom_type: true,
        }
    }
}

/// Parameters for overlap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapParams {
    #[serde(flatten)]
    pub cut: IntercutParams,
    /// Fraction of a feature's area a cutting shape must cover
    #[serde(default = "default_min_fraction")]
    pub min_fraction: f64,
}

fn default_min_fraction() -> f64 {
    DEFAULT_MIN_FRACTION
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            cut: IntercutParams::default(),
            min_fraction: DEFAULT_MIN_FRACTION,
        }
    }
}

/// Cut the base layer by the cutting layer, in place.
///
/// Returns the modified base layer, or `None` when either layer is not part
/// of this tile (a client may request only some layers).
///
/// # Errors
/// `Error::MissingParameter` when `attribute` or a requested `sort_key` is
/// not configured.
pub fn intercut<'a>(layers: &'a mut TileLayers, params: &IntercutParams) -> Result<Option<&'a mut FeatureLayer>> {
    let attribute = required_attribute("intercut", params)?;
    intercut_impl("intercut", layers, params, attribute, HardCut)
}

/// Tag whole base features covered by cutting shapes, in place.
///
/// # Errors
/// As [`intercut`], plus `Error::InvalidParameter` when `min_fraction` is
/// not within `[0, 1]`.
pub fn overlap<'a>(layers: &'a mut TileLayers, params: &OverlapParams) -> Result<Option<&'a mut FeatureLayer>> {
    let attribute = required_attribute("overlap", &params.cut)?;
    if !(0.0..=1.0).contains(&params.min_fraction) {
        return Err(Error::InvalidParameter {
            name: "min_fraction",
            value: params.min_fraction.to_string(),
            reason: "must be between 0 and 1".into(),
        });
    }
    intercut_impl("overlap", layers, &params.cut, attribute, MinOverlap::new(params.min_fraction))
}

fn required_attribute<'p>(operation: &'static str, params: &'p IntercutParams) -> Result<&'p str> {
    params.attribute.as_deref().ok_or(Error::MissingParameter {
        operation,
        name: "attribute",
    })
}

fn intercut_impl<'a, P: SplitPolicy>(
    operation: &'static str,
    layers: &'a mut TileLayers,
    params: &IntercutParams,
    attribute: &str,
    policy: P,
) -> Result<Option<&'a mut FeatureLayer>> {
    let target = params.target_attribute.as_deref().unwrap_or(attribute);

    let (Some(base_idx), Some(cutting_idx)) = (
        layers.position(&params.base_layer),
        layers.position(&params.cutting_layer),
    ) else {
        debug!(
            operation,
            base = %params.base_layer,
            cutting = %params.cutting_layer,
            "layer not present, skipping"
        );
        return Ok(None);
    };

    let cutting_features = &layers.layers[cutting_idx].features;
    let priority = resolve_priority(cutting_features, attribute, params.cutting_attrs.as_ref())?;
    let levels = build_cut_index(cutting_features, attribute, &priority);
    let cutter = Cutter::new(levels, target, params.keep_geom_type, policy);

    let base = &mut layers.layers[base_idx];
    let features = std::mem::take(&mut base.features);
    let input = features.len();
    base.features = cutter.cut_all(features);

    debug!(
        operation,
        layer = %base.name,
        levels = cutter.levels().len(),
        input,
        output = base.features.len(),
        "cut layer"
    );

    Ok(Some(base))
}

/// Intercut as an [`Algorithm`] over a tile's layers
#[derive(Debug, Clone, Default)]
pub struct Intercut;

impl Algorithm for Intercut {
    type Input = TileLayers;
    type Output = TileLayers;
    type Params = IntercutParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Intercut"
    }

    fn description(&self) -> &'static str {
        "Split base layer features by cutting layer shapes, projecting an attribute onto the inside parts"
    }

    fn execute(&self, mut input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        intercut(&mut input, &params)?;
        Ok(input)
    }
}

/// Overlap as an [`Algorithm`] over a tile's layers
#[derive(Debug, Clone, Default)]
pub struct Overlap;

impl Algorithm for Overlap {
    type Input = TileLayers;
    type Output = TileLayers;
    type Params = OverlapParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Overlap"
    }

    fn description(&self) -> &'static str {
        "Assign a cutting layer attribute to base features mostly covered by a cutting shape"
    }

    fn execute(&self, mut input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        overlap(&mut input, &params)?;
        Ok(input)
    }
}
