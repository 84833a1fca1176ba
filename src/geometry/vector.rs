use std::ops;

use num_traits::real::Real;

/// A displacement between two [Point](super::Point)s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector<C> {
    x: C,
    y: C,
}

impl<C: Real> Vector<C> {
    pub fn new(x: C, y: C) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn x(&self) -> C { self.x }
    #[inline(always)]
    pub fn y(&self) -> C { self.y }

    pub fn dot(&self, other: &Self) -> C {
        self.x * other.x + self.y * other.y
    }

    /// The z component of the 3D cross product; positive when `other` turns counterclockwise from `self`.
    pub fn cross(&self, other: &Self) -> C {
        self.x * other.y - self.y * other.x
    }

    pub fn length_squared(&self) -> C {
        self.dot(self)
    }

    pub fn length(&self) -> C {
        self.length_squared().sqrt()
    }

    pub fn scale(&self, s: C) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    pub fn direction(&self) -> Option<Direction<C>> {
        let length = self.length();
        // Infinite and NaN lengths are the ones where `length - length` is not zero
        if length == C::zero() || length - length != C::zero() {
            None
        } else {
            Some(Direction(Self::new(self.x / length, self.y / length)))
        }
    }
}

impl<C: Real> ops::Neg for Vector<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<C: Real> ops::Add for Vector<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// A unit length [Vector].
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Direction<C>(Vector<C>);

impl<C: Real> Direction<C> {
    /// The direction from `from` to `to`, or `None` if the two points coincide.
    pub fn from_points(from: super::Point<C>, to: super::Point<C>) -> Option<Self> {
        (to - from).direction()
    }

    pub fn x_axis() -> Self {
        Self(Vector::new(C::one(), C::zero()))
    }

    pub fn y_axis() -> Self {
        Self(Vector::new(C::zero(), C::one()))
    }

    #[inline(always)]
    pub fn x(&self) -> C { self.0.x }
    #[inline(always)]
    pub fn y(&self) -> C { self.0.y }

    pub fn as_vector(&self) -> Vector<C> { self.0 }

    pub fn rotate_counterclockwise(&self) -> Self {
        Self(Vector::new(-self.0.y, self.0.x))
    }

    pub fn rotate_clockwise(&self) -> Self {
        Self(Vector::new(self.0.y, -self.0.x))
    }

    pub fn reverse(&self) -> Self {
        Self(-self.0)
    }
}
