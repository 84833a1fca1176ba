use num_traits::real::Real;
use smallvec::SmallVec;

use crate::{Region, geometry::{Axis, BoundingBox, Direction, LineSegment, Point, Polygon, Polyline}, math::{cmp_around, tolerance}};

type Candidates<C> = SmallVec<[Point<C>; 16]>;
type Boundary<C> = SmallVec<[Axis<C>; 8]>;

/// The part of `region` inside `bounds`, or `None` if they do not meet.
///
/// Boundary tests are inclusive, so neighboring regions clipped to the same box
/// share their common edge exactly as far as the arithmetic allows.
pub(crate) fn clip_region<C: Real>(bounds: &BoundingBox<C>, region: &Region<C>) -> Option<Polygon<C>> {
    let clipped = match region {
        Region::Polygonal { polygon, .. } => trim_polygon(bounds, polygon),
        Region::UShaped { left, right, polyline, .. } => trim_u_shape(bounds, left, right, polyline),
        Region::Strip { left, right, .. } => trim_strip(bounds, left, right),
        Region::HalfPlane { axis, .. } => trim_half_plane(bounds, axis),
        Region::Unbounded { .. } => Some(Polygon::singleton(bounds.corners().to_vec())),
    };
    if clipped.is_none() {
        tracing::trace!(vertex = region.vertex(), kind = ?region.kind(), "Region misses the clip box");
    }
    clipped
}

fn trim_polygon<C: Real>(bounds: &BoundingBox<C>, polygon: &Polygon<C>) -> Option<Polygon<C>> {
    match polygon.bounding_box() {
        Some(polygon_bounds) if bounds.contains_box(&polygon_bounds) => return Some(polygon.clone()),
        Some(_) => { }
        None => return None,
    }

    let mut candidates = Candidates::new();
    add_contained_points(&mut candidates, bounds, polygon.vertices());
    for edge in polygon.edges() {
        add_edge_intersections(&mut candidates, bounds, &edge);
    }

    // A cell is convex, but rounding can leave near-duplicate vertices whose short edges
    // point anywhere, so corners are tested against the polygon itself
    candidates.extend(bounds.corners().iter().copied().filter(|corner| polygon.contains(corner)));
    construct_polygon(candidates)
}

fn trim_u_shape<C: Real>(bounds: &BoundingBox<C>, left: &Axis<C>, right: &Axis<C>, polyline: &Polyline<C>) -> Option<Polygon<C>> {
    let mut candidates = Candidates::new();
    add_contained_points(&mut candidates, bounds, polyline.vertices());
    for segment in polyline.segments() {
        add_edge_intersections(&mut candidates, bounds, &segment);
    }
    add_half_axis_intersection(&mut candidates, bounds, left);
    add_half_axis_intersection(&mut candidates, bounds, right);

    let min_length = tolerance(polyline.vertices().iter().copied().chain(bounds.corners().iter().copied()));
    let mut boundary = Boundary::new();
    boundary.push(left.reverse());
    boundary.extend(polyline.segments().filter_map(|s| edge_axis(&s, min_length)));
    boundary.push(*right);
    add_contained_corners(&mut candidates, bounds, &boundary);
    construct_polygon(candidates)
}

fn trim_strip<C: Real>(bounds: &BoundingBox<C>, left: &Axis<C>, right: &Axis<C>) -> Option<Polygon<C>> {
    let mut candidates = Candidates::new();
    add_full_axis_intersection(&mut candidates, bounds, left);
    add_full_axis_intersection(&mut candidates, bounds, right);

    let mut boundary = Boundary::new();
    boundary.push(left.reverse());
    boundary.push(*right);
    add_contained_corners(&mut candidates, bounds, &boundary);
    construct_polygon(candidates)
}

fn trim_half_plane<C: Real>(bounds: &BoundingBox<C>, axis: &Axis<C>) -> Option<Polygon<C>> {
    let mut candidates = Candidates::new();
    add_full_axis_intersection(&mut candidates, bounds, axis);

    let mut boundary = Boundary::new();
    boundary.push(axis.reverse());
    add_contained_corners(&mut candidates, bounds, &boundary);
    construct_polygon(candidates)
}

/// The line through `edge`, unless the edge is too short for its direction to mean anything.
fn edge_axis<C: Real>(edge: &LineSegment<C>, min_length: C) -> Option<Axis<C>> {
    let (start, end) = edge.endpoints();
    if start.distance(&end) <= min_length {
        return None;
    }
    Direction::from_points(start, end).map(|d| Axis::new(start, d))
}

fn add_contained_points<C: Real>(candidates: &mut Candidates<C>, bounds: &BoundingBox<C>, points: &[Point<C>]) {
    candidates.extend(points.iter().copied().filter(|p| bounds.contains(p)));
}

fn add_edge_intersections<C: Real>(candidates: &mut Candidates<C>, bounds: &BoundingBox<C>, segment: &LineSegment<C>) {
    candidates.extend(bounds.edges().iter().filter_map(|edge| edge.intersect_segment(segment)));
}

fn add_half_axis_intersection<C: Real>(candidates: &mut Candidates<C>, bounds: &BoundingBox<C>, axis: &Axis<C>) {
    candidates.extend(bounds.edges().iter().filter_map(|edge| edge.intersect_half_axis(axis)));
}

fn add_full_axis_intersection<C: Real>(candidates: &mut Candidates<C>, bounds: &BoundingBox<C>, axis: &Axis<C>) {
    candidates.extend(bounds.edges().iter().filter_map(|edge| edge.intersect_axis_line(axis)));
}

fn add_contained_corners<C: Real>(candidates: &mut Candidates<C>, bounds: &BoundingBox<C>, boundary: &[Axis<C>]) {
    candidates.extend(bounds.corners().iter().copied().filter(|corner| left_of(corner, boundary)));
}

/// Whether `p` is on or left of every line of `boundary`.
fn left_of<C: Real>(p: &Point<C>, boundary: &[Axis<C>]) -> bool {
    boundary.iter().all(|axis| axis.signed_distance_from(p) >= C::zero())
}

/// Closes the convex hull of `candidates`, which must all lie on the hull boundary.
fn construct_polygon<C: Real>(mut candidates: Candidates<C>) -> Option<Polygon<C>> {
    let center = Point::centroid(candidates.iter().copied())?;
    let same = tolerance(candidates.iter().copied());
    candidates.sort_by(cmp_around(center));
    candidates.dedup_by(|a, b| a.distance(b) <= same);
    while candidates.len() > 1 && candidates[0].distance(&candidates[candidates.len() - 1]) <= same {
        candidates.pop();
    }
    Some(Polygon::singleton(candidates.into_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundingBox<f64> {
        BoundingBox::from_extrema(-10., 10., -10., 10.)
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn unbounded_is_the_box() {
        let polygon = clip_region(&bounds(), &Region::Unbounded { vertex: 0 }).unwrap();
        assert_eq!(polygon.vertices(), &bounds().corners()[..]);
    }

    #[test]
    fn half_plane_keeps_the_right_side() {
        // Everything right of an upward axis through x = 2
        let axis = Axis::new(Point::new(2., 0.), Direction::y_axis());
        let polygon = clip_region(&bounds(), &Region::HalfPlane { vertex: 0, axis }).unwrap();
        assert_close(polygon.area(), 8. * 20.);
        assert!(polygon.signed_area() > 0.);
        assert!(polygon.vertices().iter().all(|p| p.x() >= 2.));
    }

    #[test]
    fn half_plane_outside_the_box() {
        let axis = Axis::new(Point::new(20., 0.), Direction::y_axis());
        assert!(clip_region(&bounds(), &Region::HalfPlane { vertex: 0, axis }).is_none());
    }

    #[test]
    fn strip_between_axes() {
        let left = Axis::new(Point::new(1., 0.), Direction::y_axis());
        let right = Axis::new(Point::new(3., 0.), Direction::y_axis());
        let polygon = clip_region(&bounds(), &Region::Strip { vertex: 0, left, right }).unwrap();
        assert_close(polygon.area(), 2. * 20.);
        assert_eq!(polygon.vertices().len(), 4);
    }

    #[test]
    fn polygon_inside_is_untouched() {
        let polygon = Polygon::singleton(vec![Point::new(0., 0.), Point::new(1., 0.), Point::new(0., 1.)]);
        let clipped = clip_region(&bounds(), &Region::Polygonal { vertex: 0, polygon: polygon.clone() }).unwrap();
        assert_eq!(clipped, polygon);
    }

    #[test]
    fn polygon_over_a_corner() {
        let polygon = Polygon::singleton(vec![Point::new(5., 5.), Point::new(15., 5.), Point::new(15., 15.), Point::new(5., 15.)]);
        let clipped = clip_region(&bounds(), &Region::Polygonal { vertex: 0, polygon }).unwrap();
        assert_close(clipped.area(), 25.);
        assert_eq!(clipped.vertices().len(), 4);
    }

    #[test]
    fn polygon_with_nearly_repeated_vertex_keeps_its_corner() {
        // Two Voronoi vertices a rounding error apart: their tiny edge points backwards
        let polygon = Polygon::singleton(vec![
            Point::new(-20., -20.),
            Point::new(0., -20.),
            Point::new(0., 0.),
            Point::new(1e-15, 1e-15),
            Point::new(-20., 0.),
        ]);
        let clipped = clip_region(&bounds(), &Region::Polygonal { vertex: 0, polygon }).unwrap();
        assert_close(clipped.area(), 100.);
        assert!(clipped.vertices().contains(&Point::new(-10., -10.)));
    }

    #[test]
    fn u_shape_with_nearly_repeated_vertex_keeps_its_corner() {
        let apex = Point::new(2., 2.);
        let polyline = Polyline::new(vec![Point::new(2., 2. - 1e-15), Point::new(2. - 1e-15, 2. + 1e-15), apex]).unwrap();
        let left = Axis::new(polyline.vertices()[0], Direction::y_axis().reverse());
        let right = Axis::new(apex, Direction::x_axis().reverse());
        let clipped = clip_region(&bounds(), &Region::UShaped { vertex: 0, left, right, polyline }).unwrap();
        assert_close(clipped.area(), 12. * 12.);
        assert!(clipped.vertices().contains(&Point::new(-10., -10.)));
    }

    #[test]
    fn u_shape_around_a_corner() {
        // A quadrant opening toward -x, -y from (2, 2), described by a single Voronoi vertex
        let apex = Point::new(2., 2.);
        let polyline = Polyline::new(vec![apex]).unwrap();
        let left = Axis::new(apex, Direction::y_axis().reverse());
        let right = Axis::new(apex, Direction::x_axis().reverse());
        let clipped = clip_region(&bounds(), &Region::UShaped { vertex: 0, left, right, polyline }).unwrap();
        assert_close(clipped.area(), 12. * 12.);
        assert!(clipped.contains(&Point::new(-9., -9.)));
        assert!(!clipped.contains(&Point::new(5., 5.)));
    }
}
