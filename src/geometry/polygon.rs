use num_traits::real::Real;

use super::{BoundingBox, LineSegment, Point};

/// A single closed loop of vertices. The closing edge from the last vertex back
/// to the first is implicit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<C> {
    vertices: Vec<Point<C>>,
}

impl<C: Real> Polygon<C> {
    pub fn singleton(vertices: Vec<Point<C>>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point<C>] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point<C>> {
        self.vertices
    }

    pub fn edges(&self) -> impl Iterator<Item=LineSegment<C>> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| LineSegment::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn bounding_box(&self) -> Option<BoundingBox<C>> {
        BoundingBox::from_points(self.vertices.iter().copied())
    }

    /// Positive for counterclockwise loops.
    pub fn signed_area(&self) -> C {
        let two = C::one() + C::one();
        self.edges()
            .fold(C::zero(), |area, e| area + (e.start().x() * e.end().y() - e.end().x() * e.start().y()))
            / two
    }

    pub fn area(&self) -> C {
        self.signed_area().abs()
    }

    /// Even-odd containment; points on the boundary count as inside.
    pub fn contains(&self, p: &Point<C>) -> bool {
        let mut inside = false;
        for e in self.edges() {
            let (a, b) = e.endpoints();
            let ab = b - a;
            let ap = *p - a;
            if ab.cross(&ap) == C::zero()
                && p.x() >= a.x().min(b.x()) && p.x() <= a.x().max(b.x())
                && p.y() >= a.y().min(b.y()) && p.y() <= a.y().max(b.y()) {
                return true;
            }
            if (a.y() > p.y()) != (b.y() > p.y()) {
                let x = a.x() + (p.y() - a.y()) / (b.y() - a.y()) * (b.x() - a.x());
                if p.x() < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

/// An open chain of vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<C> {
    vertices: Vec<Point<C>>,
}

impl<C: Real> Polyline<C> {
    /// `None` when `vertices` is empty.
    pub fn new(vertices: Vec<Point<C>>) -> Option<Self> {
        if vertices.is_empty() {
            None
        } else {
            Some(Self { vertices })
        }
    }

    pub fn vertices(&self) -> &[Point<C>] {
        &self.vertices
    }

    pub fn segments(&self) -> impl Iterator<Item=LineSegment<C>> + '_ {
        self.vertices.windows(2).map(|w| LineSegment::new(w[0], w[1]))
    }

    pub fn first(&self) -> Point<C> {
        self.vertices[0]
    }

    pub fn last(&self) -> Point<C> {
        self.vertices[self.vertices.len() - 1]
    }
}
