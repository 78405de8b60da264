//! Matrix operations.

pub mod elimination;
pub mod matrix;

pub use elimination::{DegenerateSystem, DivisionMode, Solution, UnknownDivisionMode};
pub use matrix::{Matrix, MatrixError};
