//! Matrix.

use num_bigint::BigInt;
use num_traits::One;
use thiserror::Error;

/// Matrix of exact integers, stored row major.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Matrix {
    /// Matrix.
    data: Vec<BigInt>,

    /// Number of rows.
    nrows: u16,

    /// Number of columns.
    ncols: u16,
}

impl Matrix {
    /// New matrix.
    pub fn new(data: Vec<BigInt>, nrows: u16, ncols: u16) -> Result<Matrix, MatrixError> {
        let n = usize::try_from(u32::from(nrows).checked_mul(u32::from(ncols)).ok_or(MatrixError::Arithmetic)?)
            .map_err(|_| MatrixError::Arithmetic)?;
        if n != data.len() {
            return Err(MatrixError::Build(data.len(), n));
        }
        Ok(Matrix { data, nrows, ncols })
    }

    /// Returns the reference to data.
    pub fn data(&self) -> &Vec<BigInt> {
        &self.data
    }

    /// Returns the data as a Vec consuming the matrix.
    pub fn to_vec(self) -> Vec<BigInt> {
        self.data
    }

    /// Number of rows.
    pub fn nrows(&self) -> u16 {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> u16 {
        self.ncols
    }

    fn index(&self, row: u16, col: u16) -> Result<usize, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexNotFound);
        }
        usize::try_from(
            u64::from(row)
                .checked_mul(u64::from(self.ncols))
                .ok_or(MatrixError::Arithmetic)?
                .checked_add(u64::from(col))
                .ok_or(MatrixError::Arithmetic)?,
        )
        .map_err(|_| MatrixError::Arithmetic)
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry(&self, row: u16, col: u16) -> Result<&BigInt, MatrixError> {
        let index = self.index(row, col)?;
        self.data.get(index).ok_or(MatrixError::IndexNotFound)
    }

    /// Get the matrix entry `M[row,col]`.
    pub fn entry_mut(&mut self, row: u16, col: u16) -> Result<&mut BigInt, MatrixError> {
        let index = self.index(row, col)?;
        self.data.get_mut(index).ok_or(MatrixError::IndexNotFound)
    }

    /// Vandermonde matrix from abscissas.
    ///
    /// Row `i` is `[x_i^0, x_i^1, ..., x_i^{ncols-1}]`, every power built by repeated multiplication.
    pub fn vandermonde(abscissas: &[BigInt], ncols: u16) -> Result<Matrix, MatrixError> {
        let size = usize::from(ncols);
        if abscissas.len() < size {
            return Err(MatrixError::Vandermonde(size, abscissas.len()));
        }
        let mut v = Vec::with_capacity(abscissas.len().saturating_mul(size));
        for a in abscissas {
            let mut b = BigInt::one();
            for _ in 0..size {
                let next = &b * a;
                v.push(b);
                b = next;
            }
        }
        let nrows = u16::try_from(abscissas.len()).map_err(|_| MatrixError::Arithmetic)?;
        Matrix::new(v, nrows, ncols)
    }

    /// Appends `column` to the right of the matrix, producing an augmented matrix.
    pub fn augment(self, column: &[BigInt]) -> Result<Matrix, MatrixError> {
        if column.len() != usize::from(self.nrows) {
            return Err(MatrixError::Augment(column.len(), usize::from(self.nrows)));
        }
        let ncols = self.ncols.checked_add(1).ok_or(MatrixError::Arithmetic)?;
        let mut data = Vec::with_capacity(usize::from(self.nrows).saturating_mul(usize::from(ncols)));
        let width = usize::from(self.ncols).max(1);
        if self.ncols == 0 {
            data.extend(column.iter().cloned());
        } else {
            for (row, value) in self.data.chunks(width).zip(column) {
                data.extend(row.iter().cloned());
                data.push(value.clone());
            }
        }
        Matrix::new(data, self.nrows, ncols)
    }

    /// Swaps two rows in place.
    pub fn swap_rows(&mut self, first: u16, second: u16) -> Result<(), MatrixError> {
        if first == second {
            return Ok(());
        }
        for col in 0..self.ncols {
            let a = self.index(first, col)?;
            let b = self.index(second, col)?;
            self.data.swap(a, b);
        }
        Ok(())
    }
}

/// Matrix Error.
#[derive(Error, Debug, Eq, PartialEq)]
pub enum MatrixError {
    /// Index not found error.
    #[error("index not found")]
    IndexNotFound,

    /// Integer overflow or underflow.
    #[error("integer overflow/underflow")]
    Arithmetic,

    /// Error building matrix.
    #[error("error building matrix, given data has {0} entries which does not match nrows x ncols = {1}")]
    Build(usize, usize),

    /// Error building vandermonde matrix.
    #[error("error building vandermonde matrix, given ncols {0} larger than number of abscissas {1}")]
    Vandermonde(usize, usize),

    /// Error augmenting a matrix.
    #[error("cannot augment matrix with a column of {0} entries, matrix has {1} rows")]
    Augment(usize, usize),

    /// The matrix is not an augmented square system.
    #[error("expected an augmented n x (n + 1) system, got {0} x {1}")]
    NotAugmented(u16, u16),

    /// A back substitution quotient was not an integer.
    #[error("division in row {row} is not exact: {dividend} / {divisor}")]
    InexactDivision {
        /// The row being solved.
        row: u16,

        /// The value being divided.
        dividend: BigInt,

        /// The diagonal entry.
        divisor: BigInt,
    },
}
