//! # vecpost Algorithms
//!
//! Post-processing of vector tile layers.
//!
//! ## Available Algorithm Categories
//!
//! - **vector**: Intercut, overlap, exterior boundaries
//! - **transform**: Per-feature attribute rewrites (roads, buildings, places, tags)
//! - **pipeline**: Configured sequence of the above, gated by zoom

pub mod pipeline;
pub mod transform;
pub mod vector;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::pipeline::{run, Operation, PostProcess, PostProcessConfig, Step};
    pub use crate::transform::{apply_transforms, FeatureTransform, TransformParams};
    pub use crate::vector::{
        exterior_boundaries, intercut, overlap, CutPriority, ExteriorBoundaries, ExteriorBoundariesParams, Intercut,
        IntercutParams, Overlap, OverlapParams, PropInstruction, SortSpec,
    };
    pub use vecpost_core::prelude::*;
}
