//! Decoding of share values written in an arbitrary radix.

use crate::errors::DecodeError;
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// The largest supported radix, digits `0-9` followed by `a-z`.
pub const MAX_RADIX: u32 = 36;

/// A number that documents may write either as a JSON number or as a string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    /// A JSON integer.
    Integer(i64),

    /// A JSON number with a fractional part or exponent, only accepted when it is integral.
    Float(f64),

    /// A JSON string expected to hold a number.
    Text(String),
}

impl NumericField {
    /// The value as a non-negative integer, if it is one.
    pub fn to_u64(&self) -> Option<u64> {
        match self {
            NumericField::Integer(value) => u64::try_from(*value).ok(),
            NumericField::Float(value) => integral(*value).and_then(|value| u64::try_from(value).ok()),
            NumericField::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Integer(value) => write!(f, "{value}"),
            NumericField::Float(value) => write!(f, "{value}"),
            NumericField::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// The value of `value` as an integer if it has no fractional part and fits an `i64`.
fn integral(value: f64) -> Option<i64> {
    // 2^63, the first float past `i64::MAX`.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if value.is_finite() && value.fract() == 0.0 && (-LIMIT..LIMIT).contains(&value) {
        Some(value as i64)
    } else {
        None
    }
}

impl From<u32> for NumericField {
    fn from(value: u32) -> Self {
        NumericField::Integer(i64::from(value))
    }
}

impl From<&str> for NumericField {
    fn from(value: &str) -> Self {
        NumericField::Text(value.to_string())
    }
}

/// A validated radix in `[2, 36]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radix(u32);

impl Radix {
    /// Validates a radix.
    pub fn new(radix: i64) -> Result<Self, DecodeError> {
        match u32::try_from(radix) {
            Ok(radix) if (MIN_RADIX..=MAX_RADIX).contains(&radix) => Ok(Radix(radix)),
            _ => Err(DecodeError::RadixOutOfRange(radix)),
        }
    }

    /// The radix as an integer.
    pub fn value(&self) -> u32 {
        self.0
    }

    /// Decodes an unsigned magnitude written in this radix.
    ///
    /// Letters are case-insensitive. There is no length limit.
    pub fn decode(&self, raw_value: &str) -> Result<BigUint, DecodeError> {
        if raw_value.is_empty() {
            return Err(DecodeError::EmptyValue);
        }
        let mut digits = Vec::with_capacity(raw_value.len());
        for (position, digit) in raw_value.chars().enumerate() {
            let value =
                digit.to_digit(self.0).ok_or(DecodeError::InvalidDigit { digit, position, radix: self.0 })?;
            // `to_digit` only returns values below the radix, which is at most 36.
            digits.push(value as u8);
        }
        // Every digit was validated above so this can't fail.
        BigUint::from_radix_be(&digits, self.0).ok_or(DecodeError::EmptyValue)
    }
}

impl TryFrom<&NumericField> for Radix {
    type Error = DecodeError;

    fn try_from(field: &NumericField) -> Result<Self, Self::Error> {
        match field {
            NumericField::Integer(radix) => Radix::new(*radix),
            NumericField::Float(radix) => {
                let radix = integral(*radix).ok_or_else(|| DecodeError::InvalidRadix(radix.to_string()))?;
                Radix::new(radix)
            }
            NumericField::Text(text) => {
                let radix = text.trim().parse::<i64>().map_err(|_| DecodeError::InvalidRadix(text.clone()))?;
                Radix::new(radix)
            }
        }
    }
}

/// Decodes `raw_value` written in radix `base` into an exact integer.
pub fn decode(base: &NumericField, raw_value: &str) -> Result<BigUint, DecodeError> {
    Radix::try_from(base)?.decode(raw_value)
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::hex(16, "ff", 255)]
    #[case::hex_upper(16, "FF", 255)]
    #[case::binary(2, "1010", 10)]
    #[case::base36(36, "z", 35)]
    #[case::base36_mixed_case(36, "Zz", 1295)]
    #[case::leading_zeros(10, "0007", 7)]
    #[case::zero(8, "0", 0)]
    #[case::base4(4, "213", 39)]
    fn decodes(#[case] base: u32, #[case] value: &str, #[case] expected: u64) {
        assert_eq!(decode(&base.into(), value), Ok(BigUint::from(expected)));
    }

    #[rstest]
    #[case::numeric("16")]
    #[case::padded(" 16 ")]
    fn radix_as_string(#[case] base: &str) {
        assert_eq!(decode(&base.into(), "ff"), Ok(BigUint::from(255u32)));
    }

    #[test]
    fn long_values_are_exact() {
        let value = "1".repeat(300);
        let decoded = decode(&10u32.into(), &value).unwrap();
        assert_eq!(decoded.to_string(), value);
    }

    #[test]
    fn rejects_invalid_digit() {
        assert_eq!(
            decode(&16u32.into(), "g"),
            Err(DecodeError::InvalidDigit { digit: 'g', position: 0, radix: 16 })
        );
        assert_eq!(decode(&2u32.into(), "1012"), Err(DecodeError::InvalidDigit { digit: '2', position: 3, radix: 2 }));
        assert_eq!(decode(&10u32.into(), "-5"), Err(DecodeError::InvalidDigit { digit: '-', position: 0, radix: 10 }));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(37)]
    #[case(-16)]
    fn rejects_radix_out_of_range(#[case] radix: i64) {
        assert_eq!(decode(&NumericField::Integer(radix), "1"), Err(DecodeError::RadixOutOfRange(radix)));
    }

    #[test]
    fn rejects_non_numeric_radix() {
        assert_eq!(decode(&"hex".into(), "ff"), Err(DecodeError::InvalidRadix("hex".to_string())));
    }

    #[rstest]
    #[case::integral("16.0", Ok(BigUint::from(255u32)))]
    #[case::exponent("1.6e1", Ok(BigUint::from(255u32)))]
    #[case::fractional("16.5", Err(DecodeError::InvalidRadix("16.5".to_string())))]
    #[case::out_of_range("40.0", Err(DecodeError::RadixOutOfRange(40)))]
    fn radix_as_json_float(#[case] base: &str, #[case] expected: Result<BigUint, DecodeError>) {
        let base: NumericField = serde_json::from_str(base).unwrap();
        assert!(matches!(base, NumericField::Float(_)));
        assert_eq!(decode(&base, "ff"), expected);
    }

    #[test]
    fn rejects_empty_value() {
        assert_eq!(decode(&10u32.into(), ""), Err(DecodeError::EmptyValue));
    }

    #[test]
    fn numeric_field_from_json() {
        let field: NumericField = serde_json::from_str("12").unwrap();
        assert_eq!(field.to_u64(), Some(12));
        let field: NumericField = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(field.to_u64(), Some(12));
        let field: NumericField = serde_json::from_str("-3").unwrap();
        assert_eq!(field.to_u64(), None);
        let field: NumericField = serde_json::from_str("3.0").unwrap();
        assert_eq!(field.to_u64(), Some(3));
        let field: NumericField = serde_json::from_str("3.5").unwrap();
        assert_eq!(field.to_u64(), None);
    }
}
