//! Fraction-free Gaussian elimination over exact integers.
//!
//! Rows below the pivot are scaled by the pivot value before the pivot row is subtracted, so every
//! intermediate entry stays an integer and the only divisions happen during back substitution. The price is
//! fast growth in the magnitude of the entries, which [BigInt] absorbs.

use crate::matrix::{Matrix, MatrixError};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// How back substitution treats a quotient that is not an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DivisionMode {
    /// Keep the quotient rounded toward zero.
    #[default]
    Truncate,

    /// Fail with [MatrixError::InexactDivision] when there is a remainder.
    Exact,
}

impl fmt::Display for DivisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DivisionMode::Truncate => write!(f, "truncate"),
            DivisionMode::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for DivisionMode {
    type Err = UnknownDivisionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "truncate" => Ok(DivisionMode::Truncate),
            "exact" => Ok(DivisionMode::Exact),
            _ => Err(UnknownDivisionMode(s.to_string())),
        }
    }
}

/// The division mode name is not known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown division mode {0:?}, expected 'truncate' or 'exact'")]
pub struct UnknownDivisionMode(String);

/// A column whose pivot was zero.
///
/// The value solved for that column is left undivided. This is reported to callers rather than raised since the
/// rest of the solution is still computed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegenerateSystem {
    /// The column (and so the unknown) that had no usable pivot.
    pub column: u16,
}

impl fmt::Display for DegenerateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pivot column {} is entirely zero, its unknown was left undivided", self.column)
    }
}

/// The outcome of solving an augmented system.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The value of every unknown, in column order.
    pub values: Vec<BigInt>,

    /// The columns where the system was degenerate.
    pub degeneracies: Vec<DegenerateSystem>,
}

impl Matrix {
    /// Number of unknowns if this is an augmented `n x (n + 1)` system.
    fn unknowns(&self) -> Result<u16, MatrixError> {
        let n = self.nrows();
        if n.checked_add(1) != Some(self.ncols()) {
            return Err(MatrixError::NotAugmented(n, self.ncols()));
        }
        Ok(n)
    }

    /// Returns the row in `from..nrows` holding the largest absolute value in `column`.
    ///
    /// Ties keep the topmost row.
    fn pivot_row(&self, column: u16, from: u16) -> Result<u16, MatrixError> {
        let mut best = from;
        for row in from.saturating_add(1)..self.nrows() {
            if self.entry(row, column)?.abs() > self.entry(best, column)?.abs() {
                best = row;
            }
        }
        Ok(best)
    }

    /// Reduces an augmented system to upper triangular form in place, with partial pivoting.
    ///
    /// For every row `r` below pivot `i` this computes `row_r = row_r * pivot - row_r[i] * pivot_row` over columns
    /// `i..=n`. Columns whose pivot is zero after row selection are skipped.
    pub fn forward_eliminate(&mut self) -> Result<(), MatrixError> {
        let n = self.unknowns()?;
        for i in 0..n {
            let max_row = self.pivot_row(i, i)?;
            self.swap_rows(i, max_row)?;

            let denominator = self.entry(i, i)?.clone();
            if denominator.is_zero() {
                continue;
            }
            for r in i.saturating_add(1)..n {
                let numerator = self.entry(r, i)?.clone();
                *self.entry_mut(r, i)? = BigInt::zero();
                for j in i.saturating_add(1)..=n {
                    let pivot_value = self.entry(i, j)?.clone();
                    let value = self.entry_mut(r, j)?;
                    *value = &*value * &denominator - &numerator * pivot_value;
                }
            }
        }
        Ok(())
    }

    /// Solves an upper triangular augmented system from the last row up.
    pub fn back_substitute(&self, division: DivisionMode) -> Result<Solution, MatrixError> {
        let n = self.unknowns()?;
        let mut values = vec![BigInt::zero(); usize::from(n)];
        let mut degeneracies = Vec::new();
        for i in (0..n).rev() {
            let mut value = self.entry(i, n)?.clone();
            for j in i.saturating_add(1)..n {
                let solved = values.get(usize::from(j)).ok_or(MatrixError::IndexNotFound)?;
                value -= self.entry(i, j)? * solved;
            }
            let diagonal = self.entry(i, i)?;
            if diagonal.is_zero() {
                degeneracies.push(DegenerateSystem { column: i });
            } else {
                let (quotient, remainder) = value.div_rem(diagonal);
                if division == DivisionMode::Exact && !remainder.is_zero() {
                    return Err(MatrixError::InexactDivision { row: i, dividend: value, divisor: diagonal.clone() });
                }
                value = quotient;
            }
            *values.get_mut(usize::from(i)).ok_or(MatrixError::IndexNotFound)? = value;
        }
        degeneracies.reverse();
        Ok(Solution { values, degeneracies })
    }

    /// Solves the augmented system `[A | b]`, consuming the matrix. O(N^3) big integer operations.
    pub fn solve(mut self, division: DivisionMode) -> Result<Solution, MatrixError> {
        self.forward_eliminate()?;
        self.back_substitute(division)
    }
}
