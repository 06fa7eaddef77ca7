//! Post-process pipeline
//!
//! A tile's layers go through a configured list of steps after the data
//! query. Configuration is JSON:
//!
//! ```json
//! [
//!   {"fn": "transform", "params": {"layer": "roads", "transforms": ["road_kind"]}},
//!   {"fn": "intercut", "min_zoom": 14,
//!    "params": {"base_layer": "roads", "cutting_layer": "landuse", "attribute": "kind",
//!               "target_attribute": "landuse_kind"}},
//!   {"fn": "exterior_boundaries", "params": {"base_layer": "water", "new_layer_name": "water_boundaries"}}
//! ]
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use vecpost_core::{Algorithm, Error, Result, TileLayers};

use crate::transform::{apply_transforms, TransformParams};
use crate::vector::{
    exterior_boundaries, intercut, overlap, ExteriorBoundariesParams, IntercutParams, OverlapParams,
};

/// One post-process operation and its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "fn", content = "params", rename_all = "snake_case")]
pub enum Operation {
    Intercut(IntercutParams),
    Overlap(OverlapParams),
    ExteriorBoundaries(ExteriorBoundariesParams),
    Transform(TransformParams),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Intercut(_) => "intercut",
            Operation::Overlap(_) => "overlap",
            Operation::ExteriorBoundaries(_) => "exterior_boundaries",
            Operation::Transform(_) => "transform",
        }
    }

    /// Run the operation. `Ok(false)` when it was skipped because a layer
    /// it needs is not in this tile.
    pub fn run(&self, layers: &mut TileLayers) -> Result<bool> {
        let applied = match self {
            Operation::Intercut(p) => intercut(layers, p)?.is_some(),
            Operation::Overlap(p) => overlap(layers, p)?.is_some(),
            Operation::ExteriorBoundaries(p) => exterior_boundaries(layers, p).is_some(),
            Operation::Transform(p) => apply_transforms(layers, p)?.is_some(),
        };
        Ok(applied)
    }
}

/// A pipeline step, optionally limited to a zoom range (inclusive)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub operation: Operation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_zoom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u32>,
}

impl Step {
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            min_zoom: None,
            max_zoom: None,
        }
    }

    pub fn with_zoom_range(mut self, min_zoom: Option<u32>, max_zoom: Option<u32>) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self
    }

    pub fn applies_at(&self, zoom: u32) -> bool {
        self.min_zoom.map_or(true, |min| zoom >= min) && self.max_zoom.map_or(true, |max| zoom <= max)
    }
}

/// Ordered list of post-process steps
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostProcessConfig {
    pub steps: Vec<Step>,
}

impl PostProcessConfig {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parse a configuration from JSON text
    ///
    /// # Errors
    /// `Error::Config` when the text is not a valid step list.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Apply every step whose zoom range includes the tile's zoom, in order.
///
/// Steps whose layers are missing are skipped; configuration errors abort
/// the run.
pub fn run(layers: &mut TileLayers, config: &PostProcessConfig) -> Result<()> {
    for (i, step) in config.steps.iter().enumerate() {
        let name = step.operation.name();
        if !step.applies_at(layers.zoom) {
            debug!(step = i, operation = name, zoom = layers.zoom, "outside zoom range, skipping");
            continue;
        }
        let applied = step.operation.run(layers)?;
        debug!(step = i, operation = name, applied, "post-process step");
    }
    Ok(())
}

/// The whole pipeline as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct PostProcess;

impl Algorithm for PostProcess {
    type Input = TileLayers;
    type Output = TileLayers;
    type Params = PostProcessConfig;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Post Process"
    }

    fn description(&self) -> &'static str {
        "Run configured layer operations and feature transforms over a tile"
    }

    fn execute(&self, mut input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        run(&mut input, &params)?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::FeatureTransform;
    use geo::Point;
    use vecpost_core::{AttributeValue, Feature, FeatureLayer};

    fn places(zoom: u32) -> TileLayers {
        let mut layer = FeatureLayer::new("places");
        layer.push(Feature::new(Point::new(0.0, 0.0)).with_property("kind", "village"));
        TileLayers::new(zoom, vec![layer])
    }

    fn scalerank_step() -> Step {
        Step::new(Operation::Transform(TransformParams {
            layer: "places".into(),
            transforms: vec![FeatureTransform::CalculateDefaultPlaceScalerank],
        }))
    }

    #[test]
    fn test_parse_config() {
        let config = PostProcessConfig::from_json(
            r#"[
                {"fn": "transform", "params": {"layer": "places", "transforms": ["calculate_default_place_scalerank"]}},
                {"fn": "overlap", "min_zoom": 12,
                 "params": {"base_layer": "buildings", "cutting_layer": "landuse", "attribute": "kind", "min_fraction": 0.5}},
                {"fn": "exterior_boundaries", "max_zoom": 15,
                 "params": {"base_layer": "water", "prop_transform": {"kind": true}}}
            ]"#,
        )
        .unwrap();

        assert_eq!(config.steps.len(), 3);
        assert_eq!(config.steps[0], scalerank_step());
        match &config.steps[1].operation {
            Operation::Overlap(p) => {
                assert_eq!(p.min_fraction, 0.5);
                assert_eq!(p.cut.cutting_layer, "landuse");
            }
            other => panic!("expected overlap, got {other:?}"),
        }
        assert_eq!(config.steps[1].min_zoom, Some(12));
        assert_eq!(config.steps[2].operation.name(), "exterior_boundaries");
        assert_eq!(config.steps[2].max_zoom, Some(15));
    }

    #[test]
    fn test_unknown_fn_is_config_error() {
        let err = PostProcessConfig::from_json(r#"[{"fn": "buffer", "params": {}}]"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_zoom_gating() {
        let config = PostProcessConfig::new(vec![scalerank_step().with_zoom_range(Some(10), Some(12))]);

        let mut low = places(9);
        run(&mut low, &config).unwrap();
        assert!(low.layers[0].features[0].get_property("scalerank").is_none());

        let mut inside = places(12);
        run(&mut inside, &config).unwrap();
        assert_eq!(
            inside.layers[0].features[0].get_property("scalerank"),
            Some(&AttributeValue::Int(11))
        );
    }

    #[test]
    fn test_missing_parameter_aborts() {
        let config = PostProcessConfig::new(vec![
            Step::new(Operation::Intercut(IntercutParams {
                base_layer: "places".into(),
                cutting_layer: "places".into(),
                ..Default::default()
            })),
            scalerank_step(),
        ]);
        let mut layers = places(10);
        assert!(matches!(
            run(&mut layers, &config),
            Err(Error::MissingParameter { .. })
        ));
        assert!(layers.layers[0].features[0].get_property("scalerank").is_none());
    }

    #[test]
    fn test_algorithm_execute() {
        let config = PostProcessConfig::new(vec![scalerank_step()]);
        let out = PostProcess.execute(places(5), config).unwrap();
        assert!(out.layers[0].features[0].get_property("scalerank").is_some());
        assert_eq!(PostProcess.execute_default(places(5)).unwrap(), places(5));
    }
}
