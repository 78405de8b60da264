//! Crate errors.

use crate::matrix::MatrixError;
use thiserror::Error;

/// Point sequence not found.
#[derive(Error, Debug, Eq, PartialEq)]
#[error("point sequence not found")]
pub struct PointSequenceNotFound;

/// Failed Interpolation Error
#[derive(Error, Debug, Eq, PartialEq)]
pub enum InterpolationError {
    /// Empty point sequence.
    #[error("empty point sequence")]
    EmptySequence,

    /// The system would not fit a matrix.
    #[error("cannot interpolate {0} points")]
    TooManyPoints(usize),

    /// Matrix error.
    #[error("solving the linear system failed: {0}")]
    MatrixError(#[from] MatrixError),
}

/// Polynomial error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum PolynomialError {
    /// Coefficient not found.
    #[error("polynomial coefficient not found")]
    CoefficientNotFound,
}
