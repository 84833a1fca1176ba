use num_traits::real::Real;

use super::{LineSegment, Point};

/// An axis-aligned rectangle. Containment tests include the boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<C> {
    min: Point<C>,
    max: Point<C>,
}

impl<C: Real> BoundingBox<C> {
    /// The box spanned by two opposite corners, in any order.
    pub fn new(p1: Point<C>, p2: Point<C>) -> Self {
        Self {
            min: Point::new(p1.x().min(p2.x()), p1.y().min(p2.y())),
            max: Point::new(p1.x().max(p2.x()), p1.y().max(p2.y())),
        }
    }

    pub fn from_extrema(min_x: C, max_x: C, min_y: C, max_y: C) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// The smallest box holding every point, or `None` for an empty iterator.
    pub fn from_points<I: IntoIterator<Item=Point<C>>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |b, p| b.extend(p)))
    }

    fn extend(self, p: Point<C>) -> Self {
        Self {
            min: Point::new(self.min.x().min(p.x()), self.min.y().min(p.y())),
            max: Point::new(self.max.x().max(p.x()), self.max.y().max(p.y())),
        }
    }

    pub fn min_x(&self) -> C { self.min.x() }
    pub fn max_x(&self) -> C { self.max.x() }
    pub fn min_y(&self) -> C { self.min.y() }
    pub fn max_y(&self) -> C { self.max.y() }

    pub fn min_vertex(&self) -> Point<C> { self.min }
    pub fn max_vertex(&self) -> Point<C> { self.max }

    pub fn width(&self) -> C { self.max.x() - self.min.x() }
    pub fn height(&self) -> C { self.max.y() - self.min.y() }
    pub fn area(&self) -> C { self.width() * self.height() }

    pub fn contains(&self, p: &Point<C>) -> bool {
        p.x() >= self.min.x() && p.x() <= self.max.x() && p.y() >= self.min.y() && p.y() <= self.max.y()
    }

    pub fn contains_box(&self, other: &Self) -> bool {
        self.contains(&other.min) && self.contains(&other.max)
    }

    /// Corners in counterclockwise order, starting at the minimum.
    pub fn corners(&self) -> [Point<C>; 4] {
        [
            self.min,
            Point::new(self.max.x(), self.min.y()),
            self.max,
            Point::new(self.min.x(), self.max.y()),
        ]
    }

    /// Edges in counterclockwise order, starting along the bottom.
    pub fn edges(&self) -> [LineSegment<C>; 4] {
        let [c0, c1, c2, c3] = self.corners();
        [
            LineSegment::new(c0, c1),
            LineSegment::new(c1, c2),
            LineSegment::new(c2, c3),
            LineSegment::new(c3, c0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_points() {
        let b = BoundingBox::from_points(vec![Point::new(1., 5.), Point::new(-2., 3.), Point::new(0., 7.)]).unwrap();
        assert_eq!(b, BoundingBox::from_extrema(-2., 1., 3., 7.));
        assert_eq!(b.width(), 3.);
        assert_eq!(b.height(), 4.);
        assert!(BoundingBox::<f32>::from_points(vec![]).is_none());
    }

    #[test]
    fn containment_is_closed() {
        let b = BoundingBox::new(Point::new(1., 1.), Point::new(-1., -1.));
        assert!(b.contains(&Point::new(1., 0.)));
        assert!(b.contains(&Point::new(-1., -1.)));
        assert!(!b.contains(&Point::new(1.0001, 0.)));
        assert!(b.contains_box(&BoundingBox::new(Point::new(0., 0.), Point::new(1., 1.))));
    }
}
