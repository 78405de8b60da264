//! Point Sequence.

use crate::{
    errors::{InterpolationError, PointSequenceNotFound},
    matrix::{DegenerateSystem, DivisionMode, Matrix},
    polynomial::{point::Point, Polynomial},
};
use num_bigint::BigInt;
use std::collections::HashSet;

/// Point sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PointSequence {
    points: Vec<Point>,
}

/// A polynomial recovered from a point sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpolation {
    /// The interpolated polynomial, lowest degree first.
    pub polynomial: Polynomial,

    /// Columns of the system that had no usable pivot.
    pub degeneracies: Vec<DegenerateSystem>,
}

impl PointSequence {
    /// Get the points in the sequence.
    pub fn points(&self) -> &Vec<Point> {
        &self.points
    }

    /// Consume the point sequence and return the points in it.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Check if points is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points in the sequence.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if there are any duplicated abscissas.
    pub fn has_duplicates(&self) -> bool {
        let mut x_set = HashSet::new();
        for p in self.points.iter() {
            x_set.insert(&p.x);
        }
        x_set.len() != self.points.len()
    }

    /// Add a point to the point sequence.
    pub fn push(&mut self, point: Point) {
        self.points.push(point)
    }

    /// Sorts the points by ascending abscissa.
    ///
    /// The sort is stable so points sharing an abscissa keep their relative order.
    pub fn sort_by_abscissa(&mut self) {
        self.points.sort_by(|a, b| a.x.cmp(&b.x));
    }

    /// Get the X coordinates of the sequence.
    pub fn abscissas(&self) -> Vec<BigInt> {
        self.points.iter().map(|point| point.x.clone()).collect()
    }

    /// Get the Y coordinates of the sequence.
    pub fn ordinates(&self) -> Vec<BigInt> {
        self.points.iter().map(|point| point.y.clone()).collect()
    }

    /// Get initial part of Point Sequence till count.
    pub fn take(&self, count: u64) -> Result<PointSequence, PointSequenceNotFound> {
        let count = usize::try_from(count).map_err(|_| PointSequenceNotFound)?;
        let points = self.points.get(..count).ok_or(PointSequenceNotFound)?;
        Ok(PointSequence { points: points.to_vec() })
    }

    /// Interpolates the unique polynomial of degree `len - 1` passing through every point.
    ///
    /// The Vandermonde system `[x_i^0 .. x_i^{len-1} | y_i]` is solved by fraction-free Gaussian elimination so
    /// the coefficients are exact no matter how large the ordinates are.
    pub fn interpolate(&self, division: DivisionMode) -> Result<Interpolation, InterpolationError> {
        if self.points.is_empty() {
            return Err(InterpolationError::EmptySequence);
        }
        let size = u16::try_from(self.points.len()).map_err(|_| InterpolationError::TooManyPoints(self.points.len()))?;
        let system = Matrix::vandermonde(&self.abscissas(), size)?.augment(&self.ordinates())?;
        let solution = system.solve(division)?;
        Ok(Interpolation { polynomial: Polynomial::new(solution.values), degeneracies: solution.degeneracies })
    }
}

impl From<Vec<Point>> for PointSequence {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
