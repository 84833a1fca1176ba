use num_traits::real::Real;

use super::{Axis, Point};

/// A closed line segment between two [Point]s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment<C> {
    start: Point<C>,
    end: Point<C>,
}

impl<C: Real> LineSegment<C> {
    pub fn new(start: Point<C>, end: Point<C>) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> Point<C> { self.start }
    pub fn end(&self) -> Point<C> { self.end }
    pub fn endpoints(&self) -> (Point<C>, Point<C>) { (self.start, self.end) }

    pub fn length(&self) -> C {
        self.start.distance(&self.end)
    }

    /// The single point shared by both segments. Parallel (including overlapping) segments yield `None`.
    pub fn intersect_segment(&self, other: &Self) -> Option<Point<C>> {
        let r = self.end - self.start;
        let w = other.end - other.start;
        let denom = r.cross(&w);
        if denom == C::zero() {
            return None;
        }
        let sp = other.start - self.start;
        let u = sp.cross(&w) / denom;
        let v = sp.cross(&r) / denom;
        if is_unit_interval(u) && is_unit_interval(v) {
            Some(self.point_at(u))
        } else {
            None
        }
    }

    /// Where the segment crosses the full line of `axis`.
    pub fn intersect_axis_line(&self, axis: &Axis<C>) -> Option<Point<C>> {
        self.intersect_axis(axis).map(|(_, p)| p)
    }

    /// Where the segment crosses the ray starting at the `axis` origin.
    pub fn intersect_half_axis(&self, axis: &Axis<C>) -> Option<Point<C>> {
        match self.intersect_axis(axis) {
            Some((t, p)) if t >= C::zero() => Some(p),
            _ => None,
        }
    }

    fn intersect_axis(&self, axis: &Axis<C>) -> Option<(C, Point<C>)> {
        let r = self.end - self.start;
        let d = axis.direction().as_vector();
        let denom = r.cross(&d);
        if denom == C::zero() {
            return None;
        }
        let op = axis.origin() - self.start;
        let u = op.cross(&d) / denom;
        if !is_unit_interval(u) {
            return None;
        }
        let t = op.cross(&r) / denom;
        Some((t, self.point_at(u)))
    }

    fn point_at(&self, u: C) -> Point<C> {
        // Snap the ends so intersections at a vertex reproduce it exactly
        if u == C::zero() {
            self.start
        } else if u == C::one() {
            self.end
        } else {
            self.start + (self.end - self.start).scale(u)
        }
    }
}

#[inline(always)]
fn is_unit_interval<C: Real>(u: C) -> bool {
    u >= C::zero() && u <= C::one()
}
