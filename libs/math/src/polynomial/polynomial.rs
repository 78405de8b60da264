//! Polynomial over the integers.

use crate::errors::PolynomialError;
use num_bigint::BigInt;
use num_traits::Zero;

/// Polynomial Expression.
///
/// Coefficients are stored in ascending degree order, so `coefficients[0]` is the constant term.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Polynomial {
    /// Coefficients of the polynomial.
    coefficients: Vec<BigInt>,
}

impl Polynomial {
    /// Creates a new polynomial expression.
    pub fn new(coefficients: Vec<BigInt>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// Check if polynomial is empty.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Get coefficients.
    pub fn coefficients(&self) -> &Vec<BigInt> {
        &self.coefficients
    }

    /// Consume the polynomial and return its coefficients.
    pub fn into_coefficients(self) -> Vec<BigInt> {
        self.coefficients
    }

    /// Get the degree of the polynomial, an empty polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Get coefficient at index.
    pub fn get_coefficient(&self, idx: usize) -> Result<&BigInt, PolynomialError> {
        self.coefficients.get(idx).ok_or(PolynomialError::CoefficientNotFound)
    }

    /// The constant term, which is also the value at zero.
    pub fn constant_term(&self) -> Result<&BigInt, PolynomialError> {
        self.get_coefficient(0)
    }

    /// Evaluates the polynomial at a given x using Horner's method.
    pub fn eval(&self, x: &BigInt) -> BigInt {
        let mut eval = BigInt::zero();
        for coefficient in self.coefficients.iter().rev() {
            eval = eval * x + coefficient;
        }
        eval
    }
}

impl From<Vec<BigInt>> for Polynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        Polynomial::new(coefficients)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    fn make_polynomial(coefficients: &[i64]) -> Polynomial {
        Polynomial::new(coefficients.iter().copied().map(BigInt::from).collect())
    }

    #[rstest]
    #[case(&[5, 3, 2], 1, 10)]
    #[case(&[5, 3, 2], 2, 19)]
    #[case(&[3, 0, 1], 6, 39)]
    #[case(&[-4, 1], 0, -4)]
    fn evaluation(#[case] coefficients: &[i64], #[case] x: i64, #[case] expected: i64) {
        let polynomial = make_polynomial(coefficients);
        assert_eq!(polynomial.eval(&BigInt::from(x)), BigInt::from(expected));
    }

    #[test]
    fn constant_term() {
        let polynomial = make_polynomial(&[42, 1, 1]);
        assert_eq!(polynomial.constant_term().unwrap(), &BigInt::from(42));
        assert_eq!(polynomial.degree(), 2);
    }

    #[test]
    fn empty_polynomial() {
        let polynomial = Polynomial::default();
        assert_eq!(polynomial.constant_term(), Err(PolynomialError::CoefficientNotFound));
        assert_eq!(polynomial.eval(&BigInt::from(3)), BigInt::zero());
        assert_eq!(polynomial.degree(), 0);
    }
}
