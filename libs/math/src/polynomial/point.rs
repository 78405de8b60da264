//! Point
use num_bigint::BigInt;
use std::fmt::Debug;

/// A point `(x, y)` with exact integer coordinates.
#[derive(Clone, PartialEq, Eq)]
pub struct Point {
    pub(crate) x: BigInt,
    pub(crate) y: BigInt,
}

impl Point {
    /// Creates a new point.
    pub fn new<X: Into<BigInt>, Y: Into<BigInt>>(x: X, y: Y) -> Point {
        Point { x: x.into(), y: y.into() }
    }

    /// The abscissa.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// The ordinate.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl Debug for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point").field("x", &self.x).field("y", &self.y).finish()
    }
}
