//! Geometry cutter
//!
//! Cuts base geometries against a priority-ordered list of spatial indexes,
//! one per value of the cutting attribute. The part of a base geometry
//! inside a cutting shape is emitted tagged with that shape's value; what
//! is left over is cut by the following values and finally emitted with
//! the original attributes.

use geo::{Geometry, Intersects};
use tracing::trace;
use vecpost_core::{Feature, Properties};

use super::geometry::{self, GeometryKind};
use super::index::SpatialIndex;
use super::priority::{cut_value, CutValue};

/// Default fraction of a shape's area that must be covered for
/// [`MinOverlap`] to count it as inside
pub const DEFAULT_MIN_FRACTION: f64 = 0.8;

/// Decides which part of a remainder lies inside a cutting shape
pub trait SplitPolicy {
    /// Split `remainder` by `cutting` into `(inside, outside)`
    fn split(&self, remainder: &Geometry<f64>, cutting: &Geometry<f64>) -> (Geometry<f64>, Geometry<f64>);
}

/// Exact partition: inside = intersection, outside = difference
#[derive(Debug, Clone, Copy, Default)]
pub struct HardCut;

impl SplitPolicy for HardCut {
    fn split(&self, remainder: &Geometry<f64>, cutting: &Geometry<f64>) -> (Geometry<f64>, Geometry<f64>) {
        (
            geometry::intersection(remainder, cutting),
            geometry::difference(remainder, cutting),
        )
    }
}

/// All-or-nothing split by covered area fraction.
///
/// The whole remainder is inside when at least `min_fraction` of its area
/// lies within the cutting shape, otherwise it is entirely outside.
/// Shapes without area never overlap.
#[derive(Debug, Clone, Copy)]
pub struct MinOverlap {
    pub min_fraction: f64,
}

impl MinOverlap {
    pub fn new(min_fraction: f64) -> Self {
        Self { min_fraction }
    }
}

impl Default for MinOverlap {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FRACTION)
    }
}

impl SplitPolicy for MinOverlap {
    fn split(&self, remainder: &Geometry<f64>, cutting: &Geometry<f64>) -> (Geometry<f64>, Geometry<f64>) {
        let area = geometry::area(remainder);

        if area > 0.0 && geometry::area(cutting) > 0.0 {
            let overlap = geometry::area(&geometry::intersection(remainder, cutting));
            if overlap / area >= self.min_fraction {
                return (remainder.clone(), geometry::empty_like(remainder));
            }
        }

        (geometry::empty_like(remainder), remainder.clone())
    }
}

/// One priority level: a cut value and the cutting shapes carrying it
#[derive(Debug, Clone)]
pub struct CutLevel {
    pub value: CutValue,
    pub index: SpatialIndex,
}

/// Group the cutting features by `attribute` and build one index per
/// value in `priority`. Values with no features are dropped.
pub fn build_cut_index(features: &[Feature], attribute: &str, priority: &[CutValue]) -> Vec<CutLevel> {
    let mut groups: Vec<(CutValue, Vec<Geometry<f64>>)> = Vec::new();
    for feature in features {
        let value = cut_value(&feature.properties, attribute);
        match groups.iter_mut().find(|(v, _)| *v == value) {
            Some((_, shapes)) => shapes.push(feature.geometry.clone()),
            None => groups.push((value, vec![feature.geometry.clone()])),
        }
    }

    let mut levels = Vec::new();
    for value in priority {
        if let Some((_, shapes)) = groups.iter_mut().find(|(v, _)| v == value) {
            if shapes.is_empty() {
                continue;
            }
            levels.push(CutLevel {
                value: value.clone(),
                index: SpatialIndex::new(std::mem::take(shapes)),
            });
        }
    }
    levels
}

/// Cuts features against prioritized levels with a split policy
#[derive(Debug, Clone)]
pub struct Cutter<P> {
    levels: Vec<CutLevel>,
    target_attribute: String,
    keep_geom_type: bool,
    policy: P,
}

impl<P: SplitPolicy> Cutter<P> {
    pub fn new(levels: Vec<CutLevel>, target_attribute: impl Into<String>, keep_geom_type: bool, policy: P) -> Self {
        Self {
            levels,
            target_attribute: target_attribute.into(),
            keep_geom_type,
            policy,
        }
    }

    pub fn levels(&self) -> &[CutLevel] {
        &self.levels
    }

    /// Cut one feature, pushing every resulting fragment onto `out`.
    pub fn cut(&self, feature: Feature, out: &mut Vec<Feature>) {
        let Feature { geometry, properties, id } = feature;
        let original = GeometryKind::of(&geometry);
        let mut remainder = geometry;

        for level in &self.levels {
            let candidates = level.index.query(&remainder);
            trace!(value = ?level.value, candidates = candidates.len(), "cut level");

            for i in candidates {
                if geometry::is_empty(&remainder) {
                    break;
                }
                let Some(cutting) = level.index.get(i) else {
                    continue;
                };
                if !remainder.intersects(cutting) {
                    continue;
                }

                let (inside, outside) = self.policy.split(&remainder, cutting);
                if !geometry::is_empty(&inside) {
                    let mut inside_props = properties.clone();
                    if let Some(value) = &level.value {
                        inside_props.insert(self.target_attribute.clone(), value.clone());
                    }
                    self.emit(inside, inside_props, id, original, out);
                }
                remainder = outside;
            }

            if geometry::is_empty(&remainder) {
                break;
            }
        }

        self.emit(remainder, properties, id, original, out);
    }

    /// Cut every feature of a layer
    pub fn cut_all(&self, features: Vec<Feature>) -> Vec<Feature> {
        let mut out = Vec::with_capacity(features.len());
        for feature in features {
            self.cut(feature, &mut out);
        }
        out
    }

    fn emit(
        &self,
        geom: Geometry<f64>,
        properties: Properties,
        id: Option<i64>,
        original: GeometryKind,
        out: &mut Vec<Feature>,
    ) {
        if geometry::is_empty(&geom) {
            return;
        }

        let kind = GeometryKind::of(&geom);
        if !self.keep_geom_type || kind == original {
            out.push(Feature {
                geometry: geom,
                properties,
                id,
            });
        } else if kind.multi_form() == Some(original) {
            // one part left of a multi-geometry
            out.push(Feature {
                geometry: geometry::into_multi(geom),
                properties,
                id,
            });
        } else if kind.is_multi() {
            for part in geometry::into_parts(geom) {
                self.emit(part, properties.clone(), id, original, out);
            }
        }
    }
}
