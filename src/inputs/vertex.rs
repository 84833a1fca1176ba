use std::fmt::Debug;

use num_traits::real::Real;

use crate::geometry::Point;

/// A two-dimensional site of the diagram.
///
/// The coordinate type must implement [num_traits::real::Real], reexported as [crate::Real].
/// Types that cannot implement this trait can still be used through the `*_by`
/// constructors, which take a position function instead.
pub trait Vertex {
    /// The type of the individual `x` and `y` coordinates
    type Coordinate: Real;

    /// The x [Vertex::Coordinate] value
    fn x(&self) -> Self::Coordinate;
    /// The y [Vertex::Coordinate] value
    fn y(&self) -> Self::Coordinate;

    /// Both coordinates as a [Point]
    #[inline(always)]
    fn position(&self) -> Point<Self::Coordinate> {
        Point::new(self.x(), self.y())
    }
}

impl<C: Debug + Real> Vertex for [C; 2] {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self[0]
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self[1]
    }
}

impl<C: Debug + Real> Vertex for (C, C) {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        self.0
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        self.1
    }
}

impl<C: Real> Vertex for Point<C> {
    type Coordinate = C;

    #[inline(always)]
    fn x(&self) -> Self::Coordinate {
        Point::x(self)
    }

    #[inline(always)]
    fn y(&self) -> Self::Coordinate {
        Point::y(self)
    }

    #[inline(always)]
    fn position(&self) -> Point<C> {
        *self
    }
}
