//! Geometry adapter
//!
//! Thin layer over `geo` giving the cutting and boundary code the set
//! operations it needs on arbitrary `Geometry` values: intersection,
//! difference, boundary, buffer, area, emptiness and multi-part handling.
//!
//! Polygon/polygon operations and lines against areas use `geo`'s boolean
//! ops, treating the area as a closed set (a line lying on a polygon's edge
//! counts as inside it). Lines against lines are split by hand.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{
    Area, BooleanOps, Buffer, Coord, Geometry, GeometryCollection, Intersects, Line, LineString,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Parametric tolerance when splitting segments
const SPLIT_EPSILON: f64 = 1e-9;

/// Concrete geometry type, used to keep cut output the same type as its input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    Line,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
    Rect,
    Triangle,
}

impl GeometryKind {
    pub fn of(geom: &Geometry<f64>) -> Self {
        match geom {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::Line(_) => GeometryKind::Line,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
            Geometry::Rect(_) => GeometryKind::Rect,
            Geometry::Triangle(_) => GeometryKind::Triangle,
        }
    }

    /// Whether geometries of this kind decompose into parts
    pub fn is_multi(self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint
                | GeometryKind::MultiLineString
                | GeometryKind::MultiPolygon
                | GeometryKind::GeometryCollection
        )
    }

    /// The multi-geometry kind holding parts of this kind
    pub fn multi_form(self) -> Option<GeometryKind> {
        match self {
            GeometryKind::Point => Some(GeometryKind::MultiPoint),
            GeometryKind::Line | GeometryKind::LineString => Some(GeometryKind::MultiLineString),
            GeometryKind::Polygon | GeometryKind::Rect | GeometryKind::Triangle => Some(GeometryKind::MultiPolygon),
            _ => None,
        }
    }
}

/// True when the geometry covers no points at all
pub fn is_empty(geom: &Geometry<f64>) -> bool {
    match geom {
        Geometry::Point(_) | Geometry::Line(_) | Geometry::Rect(_) | Geometry::Triangle(_) => false,
        Geometry::LineString(ls) => ls.0.len() < 2,
        Geometry::Polygon(p) => p.exterior().0.is_empty(),
        Geometry::MultiPoint(mp) => mp.0.is_empty(),
        Geometry::MultiLineString(mls) => mls.0.iter().all(|ls| ls.0.len() < 2),
        Geometry::MultiPolygon(mp) => mp.0.iter().all(|p| p.exterior().0.is_empty()),
        Geometry::GeometryCollection(gc) => gc.0.iter().all(is_empty),
    }
}

/// Unsigned area; zero for points and lines
pub fn area(geom: &Geometry<f64>) -> f64 {
    match geom {
        Geometry::Polygon(p) => p.unsigned_area(),
        Geometry::MultiPolygon(mp) => mp.unsigned_area(),
        Geometry::Rect(r) => r.unsigned_area(),
        Geometry::Triangle(t) => t.unsigned_area(),
        Geometry::GeometryCollection(gc) => gc.0.iter().map(area).sum(),
        _ => 0.0,
    }
}

/// An empty geometry of the same type as `geom` where one exists.
///
/// Points, lines, rectangles and triangles have no empty form and map to
/// the empty multi-geometry of the same dimension.
pub fn empty_like(geom: &Geometry<f64>) -> Geometry<f64> {
    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => Geometry::MultiPoint(MultiPoint::new(vec![])),
        Geometry::Line(_) | Geometry::MultiLineString(_) => {
            Geometry::MultiLineString(MultiLineString::new(vec![]))
        }
        Geometry::LineString(_) => Geometry::LineString(LineString::new(vec![])),
        Geometry::Polygon(_) => Geometry::Polygon(Polygon::new(LineString::new(vec![]), vec![])),
        Geometry::MultiPolygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => {
            Geometry::MultiPolygon(MultiPolygon::new(vec![]))
        }
        Geometry::GeometryCollection(_) => Geometry::GeometryCollection(GeometryCollection(vec![])),
    }
}

/// Split a multi-part geometry into its parts. Single geometries are
/// returned as the only part.
pub fn into_parts(geom: Geometry<f64>) -> Vec<Geometry<f64>> {
    match geom {
        Geometry::MultiPoint(mp) => mp.0.into_iter().map(Geometry::Point).collect(),
        Geometry::MultiLineString(mls) => mls.0.into_iter().map(Geometry::LineString).collect(),
        Geometry::MultiPolygon(mp) => mp.0.into_iter().map(Geometry::Polygon).collect(),
        Geometry::GeometryCollection(gc) => gc.0,
        other => vec![other],
    }
}

/// Wrap a single geometry as a one-part multi-geometry. Multi-geometries
/// are returned unchanged.
pub fn into_multi(geom: Geometry<f64>) -> Geometry<f64> {
    match geom {
        Geometry::Point(p) => Geometry::MultiPoint(MultiPoint::new(vec![p])),
        Geometry::Line(l) => Geometry::MultiLineString(MultiLineString::new(vec![LineString::new(vec![l.start, l.end])])),
        Geometry::LineString(ls) => Geometry::MultiLineString(MultiLineString::new(vec![ls])),
        Geometry::Polygon(p) => Geometry::MultiPolygon(MultiPolygon::new(vec![p])),
        Geometry::Rect(r) => Geometry::MultiPolygon(MultiPolygon::new(vec![r.to_polygon()])),
        Geometry::Triangle(t) => Geometry::MultiPolygon(MultiPolygon::new(vec![t.to_polygon()])),
        other => other,
    }
}

/// Unwrap single-part multi-geometries, so a cut that leaves one polygon
/// yields a `Polygon` rather than a one-element `MultiPolygon`.
pub fn collapse(geom: Geometry<f64>) -> Geometry<f64> {
    match geom {
        Geometry::MultiPolygon(mut mp) if mp.0.len() == 1 => Geometry::Polygon(mp.0.remove(0)),
        Geometry::MultiLineString(mut mls) if mls.0.len() == 1 => Geometry::LineString(mls.0.remove(0)),
        Geometry::MultiPoint(mut mp) if mp.0.len() == 1 => Geometry::Point(mp.0.remove(0)),
        other => other,
    }
}

fn to_multi_polygon(geom: &Geometry<f64>) -> Option<MultiPolygon<f64>> {
    match geom {
        Geometry::Polygon(p) => Some(MultiPolygon::new(vec![p.clone()])),
        Geometry::MultiPolygon(mp) => Some(mp.clone()),
        Geometry::Rect(r) => Some(MultiPolygon::new(vec![r.to_polygon()])),
        Geometry::Triangle(t) => Some(MultiPolygon::new(vec![t.to_polygon()])),
        _ => None,
    }
}

fn to_lines(geom: &Geometry<f64>) -> Option<Vec<LineString<f64>>> {
    match geom {
        Geometry::Line(l) => Some(vec![LineString::new(vec![l.start, l.end])]),
        Geometry::LineString(ls) => Some(vec![ls.clone()]),
        Geometry::MultiLineString(mls) => Some(mls.0.clone()),
        _ => None,
    }
}

fn to_points(geom: &Geometry<f64>) -> Option<Vec<Point<f64>>> {
    match geom {
        Geometry::Point(p) => Some(vec![*p]),
        Geometry::MultiPoint(mp) => Some(mp.0.clone()),
        _ => None,
    }
}

/// Point-set intersection `a ∩ b`
pub fn intersection(a: &Geometry<f64>, b: &Geometry<f64>) -> Geometry<f64> {
    if let Geometry::GeometryCollection(gc) = a {
        return map_collection(gc, |part| intersection(part, b));
    }
    if matches!(b, Geometry::GeometryCollection(_)) {
        return difference(a, &difference(a, b));
    }

    if let Some(pa) = to_multi_polygon(a) {
        if let Some(pb) = to_multi_polygon(b) {
            return collapse(Geometry::MultiPolygon(pa.intersection(&pb)));
        }
        if let Some(lines) = to_lines(b) {
            return clip_lines(&lines, &pa, false);
        }
    }
    if let Some(lines) = to_lines(a) {
        if let Some(pb) = to_multi_polygon(b) {
            return clip_lines(&lines, &pb, false);
        }
        return match to_lines(b) {
            Some(cutter) => collect_lines(split_by_lines(&lines, &cutter).0),
            None => empty_like(a),
        };
    }
    if let Some(points) = to_points(a) {
        return filter_points(points, b, true);
    }
    match to_points(b) {
        Some(points) => filter_points(points, a, true),
        None => empty_like(a),
    }
}

/// Point-set difference `a − b`
pub fn difference(a: &Geometry<f64>, b: &Geometry<f64>) -> Geometry<f64> {
    if let Geometry::GeometryCollection(gc) = a {
        return map_collection(gc, |part| difference(part, b));
    }
    if let Geometry::GeometryCollection(gc) = b {
        let mut rest = a.clone();
        for part in &gc.0 {
            if is_empty(&rest) {
                break;
            }
            rest = difference(&rest, part);
        }
        return rest;
    }

    if let Some(pa) = to_multi_polygon(a) {
        return match to_multi_polygon(b) {
            Some(pb) => collapse(Geometry::MultiPolygon(pa.difference(&pb))),
            // Removing something without area leaves the polygon unchanged
            None => a.clone(),
        };
    }
    if let Some(lines) = to_lines(a) {
        if let Some(pb) = to_multi_polygon(b) {
            return clip_lines(&lines, &pb, true);
        }
        return match to_lines(b) {
            Some(cutter) => collect_lines(split_by_lines(&lines, &cutter).1),
            None => a.clone(),
        };
    }
    match to_points(a) {
        Some(points) => filter_points(points, b, false),
        None => a.clone(),
    }
}

fn map_collection<F>(gc: &GeometryCollection<f64>, op: F) -> Geometry<f64>
where
    F: Fn(&Geometry<f64>) -> Geometry<f64>,
{
    let parts: Vec<Geometry<f64>> = gc.0.iter().map(op).filter(|g| !is_empty(g)).collect();
    Geometry::GeometryCollection(GeometryCollection(parts))
}

fn filter_points(points: Vec<Point<f64>>, other: &Geometry<f64>, keep_intersecting: bool) -> Geometry<f64> {
    let kept: Vec<Point<f64>> = points
        .into_iter()
        .filter(|p| other.intersects(p) == keep_intersecting)
        .collect();
    collapse(Geometry::MultiPoint(MultiPoint::new(kept)))
}

/// Boundary of a polygonal geometry: all of its rings as lines.
///
/// Non-polygonal input has no area boundary here and yields an empty
/// `MultiLineString`.
pub fn boundary(geom: &Geometry<f64>) -> Geometry<f64> {
    let rings: Vec<LineString<f64>> = match to_multi_polygon(geom) {
        Some(mp) => mp
            .0
            .into_iter()
            .flat_map(|p| {
                let (exterior, interiors) = p.into_inner();
                std::iter::once(exterior).chain(interiors)
            })
            .filter(|ring| ring.0.len() >= 2)
            .collect(),
        None => Vec::new(),
    };
    collapse(Geometry::MultiLineString(MultiLineString::new(rings)))
}

/// Buffer a geometry by `distance`, always producing polygons
pub fn buffer(geom: &Geometry<f64>, distance: f64) -> Geometry<f64> {
    collapse(Geometry::MultiPolygon(geom.buffer(distance)))
}

/// Clip lines by an area: the part inside it, or with `invert` the part
/// outside. The area's boundary counts as inside.
///
/// Each line is clipped on its own so a closed ring cut open at its start
/// vertex can be joined back into one piece.
fn clip_lines(lines: &[LineString<f64>], area: &MultiPolygon<f64>, invert: bool) -> Geometry<f64> {
    let mut pieces = Vec::new();
    for ls in lines {
        let clipped = area.clip(&MultiLineString::new(vec![ls.clone()]), invert);
        let kept: Vec<LineString<f64>> = clipped.0.into_iter().filter(has_length).collect();
        pieces.extend(rejoin_ring(ls, kept));
    }
    collect_lines(pieces)
}

fn has_length(ls: &LineString<f64>) -> bool {
    ls.0.windows(2).any(|w| w[0] != w[1])
}

/// Join the piece ending at a ring's start vertex to the piece leaving it
fn rejoin_ring(ring: &LineString<f64>, mut pieces: Vec<LineString<f64>>) -> Vec<LineString<f64>> {
    if !ring.is_closed() || pieces.len() < 2 {
        return pieces;
    }
    let Some(&start) = ring.0.first() else {
        return pieces;
    };
    let head = pieces.iter().position(|p| p.0.first() == Some(&start));
    let tail = pieces.iter().position(|p| p.0.last() == Some(&start));
    if let (Some(head), Some(tail)) = (head, tail) {
        if head != tail {
            let leading = std::mem::take(&mut pieces[head].0);
            pieces[tail].0.extend(leading.into_iter().skip(1));
            pieces.remove(head);
        }
    }
    pieces
}

fn collect_lines(lines: Vec<LineString<f64>>) -> Geometry<f64> {
    collapse(Geometry::MultiLineString(MultiLineString::new(lines)))
}

/// Position of `c` along `seg` as a fraction of its length
fn segment_param(seg: &Line<f64>, c: Coord<f64>) -> f64 {
    let dx = seg.end.x - seg.start.x;
    let dy = seg.end.y - seg.start.y;
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return 0.0;
    }
    ((c.x - seg.start.x) * dx + (c.y - seg.start.y) * dy) / len2
}

fn point_at(seg: &Line<f64>, t: f64) -> Coord<f64> {
    if t <= 0.0 {
        seg.start
    } else if t >= 1.0 {
        seg.end
    } else {
        Coord {
            x: seg.start.x + (seg.end.x - seg.start.x) * t,
            y: seg.start.y + (seg.end.y - seg.start.y) * t,
        }
    }
}

/// Split lines by other lines into (overlapping, rest) pieces.
///
/// `clip` only takes areas, so line cutters are handled here: segments are
/// cut where they meet the cutter and each piece is classified by its
/// midpoint. Consecutive pieces of one class are joined.
fn split_by_lines(
    lines: &[LineString<f64>],
    cutter: &[LineString<f64>],
) -> (Vec<LineString<f64>>, Vec<LineString<f64>>) {
    let cutter_edges: Vec<Line<f64>> = cutter.iter().flat_map(|ls| ls.lines()).collect();
    let cutter = MultiLineString::new(cutter.to_vec());
    let mut inside = Vec::new();
    let mut outside = Vec::new();

    for ls in lines {
        let mut runs: Vec<(bool, Vec<Coord<f64>>)> = Vec::new();

        for seg in ls.lines() {
            if seg.start == seg.end {
                continue;
            }

            let mut ts: Vec<f64> = Vec::new();
            for edge in &cutter_edges {
                match line_intersection(seg, *edge) {
                    Some(LineIntersection::SinglePoint { intersection, .. }) => {
                        ts.push(segment_param(&seg, intersection));
                    }
                    Some(LineIntersection::Collinear { intersection }) => {
                        ts.push(segment_param(&seg, intersection.start));
                        ts.push(segment_param(&seg, intersection.end));
                    }
                    None => {}
                }
            }
            ts.retain(|t| t.is_finite() && *t > SPLIT_EPSILON && *t < 1.0 - SPLIT_EPSILON);
            ts.push(0.0);
            ts.push(1.0);
            ts.sort_by(f64::total_cmp);
            ts.dedup_by(|a, b| (*a - *b).abs() < SPLIT_EPSILON);

            for w in ts.windows(2) {
                let p = point_at(&seg, w[0]);
                let q = point_at(&seg, w[1]);
                let mid = Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0);
                let is_inside = cutter.intersects(&mid);

                let continues = matches!(
                    runs.last(),
                    Some((class, coords)) if *class == is_inside && coords.last() == Some(&p)
                );
                match runs.last_mut() {
                    Some((_, coords)) if continues => coords.push(q),
                    _ => runs.push((is_inside, vec![p, q])),
                }
            }
        }

        let (line_in, line_out): (Vec<_>, Vec<_>) = runs.into_iter().partition(|(class, _)| *class);
        let into_lines = |runs: Vec<(bool, Vec<Coord<f64>>)>| -> Vec<LineString<f64>> {
            runs.into_iter().map(|(_, coords)| LineString::new(coords)).collect()
        };
        inside.extend(rejoin_ring(ls, into_lines(line_in)));
        outside.extend(rejoin_ring(ls, into_lines(line_out)));
    }

    (inside, outside)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Geometry<f64> {
        Geometry::Polygon(Polygon::new(
            LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]),
            vec![],
        ))
    }

    #[test]
    fn test_polygon_intersection_and_difference() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 0.0, 15.0, 10.0);

        let inside = intersection(&a, &b);
        let outside = difference(&a, &b);

        assert_eq!(GeometryKind::of(&inside), GeometryKind::Polygon);
        assert_eq!(GeometryKind::of(&outside), GeometryKind::Polygon);
        assert_relative_eq!(area(&inside), 50.0, epsilon = 1e-9);
        assert_relative_eq!(area(&outside), 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_abutting_polygons_have_empty_intersection() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(1.0, 0.0, 2.0, 1.0);

        let inside = intersection(&a, &b);
        assert!(is_empty(&inside) || area(&inside) == 0.0);
        assert_relative_eq!(area(&difference(&a, &b)), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_line_split_by_polygon() {
        let line = Geometry::LineString(LineString::from(vec![(-5.0, 5.0), (15.0, 5.0)]));
        let square = rect(0.0, 0.0, 10.0, 10.0);

        let inside = intersection(&line, &square);
        let outside = difference(&line, &square);

        match inside {
            Geometry::LineString(ls) => {
                assert_eq!(ls.0, vec![Coord { x: 0.0, y: 5.0 }, Coord { x: 10.0, y: 5.0 }]);
            }
            other => panic!("expected a single line inside, got {other:?}"),
        }
        match outside {
            Geometry::MultiLineString(mls) => assert_eq!(mls.0.len(), 2),
            other => panic!("expected two lines outside, got {other:?}"),
        }
    }

    #[test]
    fn test_polygon_minus_line_is_unchanged() {
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let line = Geometry::LineString(LineString::from(vec![(-5.0, 5.0), (15.0, 5.0)]));
        assert_eq!(difference(&square, &line), square);
    }

    #[test]
    fn test_points() {
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let points = Geometry::MultiPoint(MultiPoint::new(vec![
            Point::new(1.0, 1.0),
            Point::new(20.0, 20.0),
        ]));

        assert_eq!(intersection(&points, &square), Geometry::Point(Point::new(1.0, 1.0)));
        assert_eq!(difference(&points, &square), Geometry::Point(Point::new(20.0, 20.0)));
    }

    #[test]
    fn test_boundary_of_polygon_with_hole() {
        let poly = Geometry::Polygon(Polygon::new(
            LineString::from(vec![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]),
            vec![LineString::from(vec![(2.0, 2.0), (8.0, 2.0), (8.0, 8.0), (2.0, 8.0), (2.0, 2.0)])],
        ));

        match boundary(&poly) {
            Geometry::MultiLineString(mls) => assert_eq!(mls.0.len(), 2),
            other => panic!("expected two rings, got {other:?}"),
        }
        assert!(is_empty(&boundary(&Geometry::Point(Point::new(0.0, 0.0)))));
    }

    #[test]
    fn test_shared_edge_removed_from_ring() {
        let ring = boundary(&rect(0.0, 0.0, 1.0, 1.0));
        let neighbour = rect(1.0, 0.0, 2.0, 1.0);

        match difference(&ring, &neighbour) {
            Geometry::LineString(ls) => {
                assert_eq!(
                    ls.0,
                    vec![
                        Coord { x: 1.0, y: 1.0 },
                        Coord { x: 0.0, y: 1.0 },
                        Coord { x: 0.0, y: 0.0 },
                        Coord { x: 1.0, y: 0.0 },
                    ]
                );
            }
            other => panic!("expected one open line, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_like_and_parts() {
        let square = rect(0.0, 0.0, 1.0, 1.0);
        let empty = empty_like(&square);
        assert_eq!(GeometryKind::of(&empty), GeometryKind::Polygon);
        assert!(is_empty(&empty));

        let multi = Geometry::MultiPolygon(MultiPolygon::new(vec![]));
        assert!(into_parts(multi).is_empty());
        assert_eq!(into_parts(square.clone()), vec![square]);
    }

    #[test]
    fn test_buffer_grows_area() {
        let square = rect(0.0, 0.0, 1.0, 1.0);
        let buffered = buffer(&square, 0.5);
        assert!(area(&buffered) > 1.0);
        assert!(matches!(
            GeometryKind::of(&buffered),
            GeometryKind::Polygon | GeometryKind::MultiPolygon
        ));
    }

    #[test]
    fn test_into_multi_matches_multi_form() {
        let square = rect(0.0, 0.0, 1.0, 1.0);
        let kind = GeometryKind::of(&square);
        let multi = into_multi(square);
        assert_eq!(kind.multi_form(), Some(GeometryKind::of(&multi)));
        assert_eq!(into_parts(multi).len(), 1);
        assert_eq!(GeometryKind::MultiPolygon.multi_form(), None);
    }

    #[test]
    fn test_line_touching_corner_has_no_inside() {
        let line = Geometry::LineString(LineString::from(vec![(10.0, 10.0), (20.0, 20.0)]));
        let square = rect(0.0, 0.0, 10.0, 10.0);

        assert!(is_empty(&intersection(&line, &square)));
        match difference(&line, &square) {
            Geometry::LineString(ls) => {
                assert_eq!(ls.0.first(), Some(&Coord { x: 10.0, y: 10.0 }));
                assert_eq!(ls.0.last(), Some(&Coord { x: 20.0, y: 20.0 }));
            }
            other => panic!("expected the whole line outside, got {other:?}"),
        }
    }

    #[test]
    fn test_line_split_by_line() {
        let line = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (10.0, 0.0)]));
        let cutter = Geometry::LineString(LineString::from(vec![(2.0, 0.0), (4.0, 0.0)]));

        match intersection(&line, &cutter) {
            Geometry::LineString(ls) => {
                assert_eq!(ls.0, vec![Coord { x: 2.0, y: 0.0 }, Coord { x: 4.0, y: 0.0 }]);
            }
            other => panic!("expected the shared run, got {other:?}"),
        }
        match difference(&line, &cutter) {
            Geometry::MultiLineString(mls) => assert_eq!(mls.0.len(), 2),
            other => panic!("expected two lines outside, got {other:?}"),
        }
    }

    #[test]
    fn test_line_minus_points_is_unchanged() {
        let line = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (10.0, 0.0)]));
        let point = Geometry::Point(Point::new(5.0, 0.0));
        assert_eq!(difference(&line, &point), line);
        assert!(is_empty(&intersection(&line, &point)));
    }
}
