use num_traits::real::Real;

use super::{Direction, Point};

/// A directed line through `origin`. Used both as a full line and, by
/// [LineSegment::intersect_half_axis](super::LineSegment::intersect_half_axis), as a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis<C> {
    origin: Point<C>,
    direction: Direction<C>,
}

impl<C: Real> Axis<C> {
    pub fn new(origin: Point<C>, direction: Direction<C>) -> Self {
        Self { origin, direction }
    }

    pub fn origin(&self) -> Point<C> { self.origin }
    pub fn direction(&self) -> Direction<C> { self.direction }

    pub fn reverse(&self) -> Self {
        Self::new(self.origin, self.direction.reverse())
    }

    /// Position of the projection of `p` along the axis, relative to the origin.
    pub fn signed_distance_along(&self, p: &Point<C>) -> C {
        (*p - self.origin).dot(&self.direction.as_vector())
    }

    /// Perpendicular distance of `p` from the axis; positive on the left.
    pub fn signed_distance_from(&self, p: &Point<C>) -> C {
        self.direction.as_vector().cross(&(*p - self.origin))
    }

    pub fn point_at(&self, distance: C) -> Point<C> {
        self.origin + self.direction.as_vector().scale(distance)
    }
}
