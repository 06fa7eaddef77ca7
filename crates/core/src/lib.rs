//! # vecpost Core
//!
//! Core types and traits for post-processing vector tile layers.
//!
//! This crate provides:
//! - `AttributeValue` / `Properties`: feature attribute storage
//! - `Feature`: geometry + attributes + optional id
//! - `FeatureLayer`: named feature collection with pass-through metadata
//! - `TileLayers`: all layers of one tile request, looked up by name
//! - Algorithm trait for a consistent API across post-process operations

pub mod error;
pub mod vector;

pub use error::{Error, Result};
pub use vector::{AttributeValue, Feature, FeatureLayer, Properties, TileLayers};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::vector::{AttributeValue, Feature, FeatureLayer, Properties, TileLayers};
    pub use crate::Algorithm;
}

/// Core trait for all post-process operations.
///
/// Operations are pure functions of their input layers and parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(&self, input: Self::Input, params: Self::Params) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
