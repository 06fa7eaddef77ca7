//! Vector layer operations
//!
//! Operations that combine the features of several layers of a tile:
//! - Intercut: split base features by cutting shapes, tagging inside parts
//! - Overlap: tag whole base features mostly covered by a cutting shape
//! - Exterior boundaries: polygon outlines without shared edges
//!
//! Built on a small geometry adapter over `geo` and an `rstar` index.

mod boundaries;
mod cutter;
pub mod geometry;
mod index;
mod intercut;
mod priority;

pub use boundaries::{
    exterior_boundaries, transform_properties, ExteriorBoundaries, ExteriorBoundariesParams, PropInstruction,
    PropTransform,
};
pub use cutter::{build_cut_index, CutLevel, Cutter, HardCut, MinOverlap, SplitPolicy, DEFAULT_MIN_FRACTION};
pub use geometry::GeometryKind;
pub use index::SpatialIndex;
pub use intercut::{intercut, overlap, Intercut, IntercutParams, Overlap, OverlapParams};
pub use priority::{compare_values, cut_value, resolve_priority, CutPriority, CutValue, SortSpec};
