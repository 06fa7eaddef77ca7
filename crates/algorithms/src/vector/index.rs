//! Bulk-loaded spatial index over geometries
//!
//! An R*-tree of bounding rectangles. Queries are a bounding-box prefilter
//! only: callers re-check true intersection.

use geo::{BoundingRect, Geometry};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, AABB};

type Entry = GeomWithData<Rectangle<[f64; 2]>, usize>;

/// Spatial index owning the geometries it was built from
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: RTree<Entry>,
    geometries: Vec<Geometry<f64>>,
}

impl SpatialIndex {
    /// Bulk-load an index. Geometries without a bounding box (empty ones)
    /// are kept but can never be returned by a query.
    pub fn new(geometries: Vec<Geometry<f64>>) -> Self {
        let entries: Vec<Entry> = geometries
            .iter()
            .enumerate()
            .filter_map(|(i, geom)| {
                geom.bounding_rect().map(|r| {
                    let rect = Rectangle::from_corners([r.min().x, r.min().y], [r.max().x, r.max().y]);
                    GeomWithData::new(rect, i)
                })
            })
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
            geometries,
        }
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Geometry at insertion position `i`
    pub fn get(&self, i: usize) -> Option<&Geometry<f64>> {
        self.geometries.get(i)
    }

    /// Insertion positions of geometries whose bounds overlap the bounds of
    /// `shape`, in insertion order.
    pub fn query(&self, shape: &Geometry<f64>) -> Vec<usize> {
        let Some(r) = shape.bounding_rect() else {
            return Vec::new();
        };
        let envelope = AABB::from_corners([r.min().x, r.min().y], [r.max().x, r.max().y]);

        let mut hits: Vec<usize> = self
            .tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.data)
            .collect();
        hits.sort_unstable();
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, Point, Polygon};

    fn square(x: f64, y: f64, size: f64) -> Geometry<f64> {
        Geometry::Polygon(Polygon::new(
            LineString::from(vec![(x, y), (x + size, y), (x + size, y + size), (x, y + size), (x, y)]),
            vec![],
        ))
    }

    #[test]
    fn test_query_bbox_overlap() {
        let index = SpatialIndex::new(vec![
            square(0.0, 0.0, 1.0),
            square(5.0, 5.0, 1.0),
            square(0.5, 0.5, 1.0),
        ]);

        assert_eq!(index.len(), 3);
        assert_eq!(index.query(&square(0.2, 0.2, 0.1)), vec![0]);
        assert_eq!(index.query(&square(0.0, 0.0, 2.0)), vec![0, 2]);
        assert!(index.query(&square(10.0, 10.0, 1.0)).is_empty());
    }

    #[test]
    fn test_touching_bounds_are_candidates() {
        let index = SpatialIndex::new(vec![square(1.0, 0.0, 1.0)]);
        assert_eq!(index.query(&square(0.0, 0.0, 1.0)), vec![0]);
    }

    #[test]
    fn test_point_query() {
        let index = SpatialIndex::new(vec![square(0.0, 0.0, 10.0)]);
        assert_eq!(index.query(&Geometry::Point(Point::new(3.0, 3.0))), vec![0]);
    }

    #[test]
    fn test_empty_geometry_not_indexed() {
        let empty = Geometry::Polygon(Polygon::new(LineString::new(vec![]), vec![]));
        let index = SpatialIndex::new(vec![empty]);
        assert_eq!(index.len(), 1);
        assert!(index.query(&square(0.0, 0.0, 100.0)).is_empty());
    }
}
