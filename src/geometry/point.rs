use std::{fmt, ops};

use num_traits::real::Real;

use super::Vector;

/// A position in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<C> {
    x: C,
    y: C,
}

impl<C: Real> Point<C> {
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self::new(C::zero(), C::zero())
    }

    #[inline(always)]
    pub fn x(&self) -> C { self.x }
    #[inline(always)]
    pub fn y(&self) -> C { self.y }

    pub fn midpoint(a: Self, b: Self) -> Self {
        let two = C::one() + C::one();
        Self::new((a.x + b.x) / two, (a.y + b.y) / two)
    }

    /// The average of `points`, or `None` if there are none.
    pub fn centroid<I: IntoIterator<Item=Self>>(points: I) -> Option<Self> {
        let mut count = C::zero();
        let mut x = C::zero();
        let mut y = C::zero();
        for p in points {
            count = count + C::one();
            x = x + p.x;
            y = y + p.y;
        }
        if count == C::zero() {
            None
        } else {
            Some(Self::new(x / count, y / count))
        }
    }

    pub fn distance_squared(&self, other: &Self) -> C {
        (*other - *self).length_squared()
    }

    pub fn distance(&self, other: &Self) -> C {
        self.distance_squared(other).sqrt()
    }

    pub fn translate_by(&self, v: Vector<C>) -> Self {
        Self::new(self.x + v.x(), self.y + v.y())
    }
}

impl<C: Real + fmt::Display> fmt::Display for Point<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<C: Real> ops::Sub for Point<C> {
    type Output = Vector<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<C: Real> ops::Add<Vector<C>> for Point<C> {
    type Output = Point<C>;

    fn add(self, rhs: Vector<C>) -> Self::Output {
        self.translate_by(rhs)
    }
}

impl<C: Real> From<[C; 2]> for Point<C> {
    fn from(v: [C; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl<C: Real> From<(C, C)> for Point<C> {
    fn from(v: (C, C)) -> Self {
        Self::new(v.0, v.1)
    }
}

impl<C: Real> From<Point<C>> for [C; 2] {
    fn from(p: Point<C>) -> Self {
        [p.x, p.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_of_nothing() {
        assert_eq!(Point::<f64>::centroid(Vec::new()), None);
    }

    #[test]
    fn centroid_and_midpoint() {
        let c = Point::centroid(vec![Point::new(0., 0.), Point::new(2., 0.), Point::new(2., 2.), Point::new(0., 2.)]).unwrap();
        assert_eq!(c, Point::new(1., 1.));
        assert_eq!(Point::midpoint(Point::new(-1., 3.), Point::new(1., 5.)), Point::new(0., 4.));
    }
}
