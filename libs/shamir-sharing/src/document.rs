//! Share documents.
//!
//! A document holds a reserved `keys` field with the share count `n` and the threshold `k`, and one
//! `{base, value}` record per share keyed by the share's abscissa:
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//! }
//! ```

use crate::{
    errors::{DecodeError, MalformedInputError, ReconstructionError},
    radix::{self, NumericField},
};
use log::warn;
use math_lib::polynomial::{Point, PointSequence};
use num_bigint::{BigInt, BigUint};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::str::FromStr;

/// The reserved document field holding the share set parameters.
pub const KEYS_FIELD: &str = "keys";

/// The share set parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    /// Total number of shares handed out. Informational only.
    pub n: Option<u64>,

    /// Number of shares needed to reconstruct the secret.
    pub k: u64,
}

/// A share as written in the document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ShareRecord {
    /// The radix `value` is written in.
    pub base: NumericField,

    /// The share's ordinate written in `base`.
    pub value: String,
}

impl ShareRecord {
    /// Decodes the ordinate.
    pub fn decode(&self) -> Result<BigUint, DecodeError> {
        radix::decode(&self.base, &self.value)
    }
}

/// A share record along with its position in the document.
#[derive(Clone, Debug, PartialEq)]
pub struct Share {
    /// The document key, kept for error reporting.
    pub key: String,

    /// The abscissa parsed from the key.
    pub x: u64,

    /// The record.
    pub record: ShareRecord,
}

impl Share {
    /// Decodes this share into a point.
    pub fn to_point(&self) -> Result<Point, ReconstructionError> {
        let y = self.record.decode().map_err(|source| ReconstructionError::Decode { key: self.key.clone(), source })?;
        Ok(Point::new(self.x, BigInt::from(y)))
    }
}

/// A parsed share document.
#[derive(Clone, Debug, PartialEq)]
pub struct ShareDocument {
    threshold: Threshold,
    shares: Vec<Share>,
}

impl ShareDocument {
    /// Builds a document from its parts.
    pub fn new(threshold: Threshold, shares: Vec<Share>) -> Self {
        Self { threshold, shares }
    }

    /// Parses a document from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, MalformedInputError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parses a document from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, MalformedInputError> {
        let Value::Object(mut fields) = value else {
            return Err(MalformedInputError::NotAnObject);
        };
        let keys = fields.remove(KEYS_FIELD).ok_or(MalformedInputError::MissingKeys)?;
        let threshold = parse_threshold(&keys)?;
        let shares = parse_shares(fields)?;
        if let Some(n) = threshold.n {
            if usize::try_from(n).ok() != Some(shares.len()) {
                warn!("Document declares {n} shares but contains {}", shares.len());
            }
        }
        Ok(Self { threshold, shares })
    }

    /// The share set parameters.
    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// The shares, in document order.
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }

    /// Decodes every share and returns the points sorted by ascending abscissa.
    pub fn points(&self) -> Result<PointSequence, ReconstructionError> {
        let mut points = self.shares.iter().map(Share::to_point).collect::<Result<PointSequence, _>>()?;
        points.sort_by_abscissa();
        if points.has_duplicates() {
            warn!("Document contains shares with the same abscissa");
        }
        Ok(points)
    }
}

impl FromStr for ShareDocument {
    type Err = MalformedInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json_str(s)
    }
}

fn parse_number(field: &'static str, value: &Value) -> Result<u64, MalformedInputError> {
    NumericField::deserialize(value)
        .ok()
        .and_then(|number| number.to_u64())
        .ok_or_else(|| MalformedInputError::NonNumeric { field, value: value.to_string() })
}

fn parse_threshold(keys: &Value) -> Result<Threshold, MalformedInputError> {
    let keys = keys.as_object().ok_or(MalformedInputError::KeysNotAnObject)?;
    let k = keys.get("k").ok_or(MalformedInputError::MissingThreshold)?;
    let k = parse_number("keys.k", k)?;
    if k == 0 {
        return Err(MalformedInputError::ZeroThreshold);
    }
    let n = keys.get("n").map(|n| parse_number("keys.n", n)).transpose()?;
    Ok(Threshold { n, k })
}

fn parse_shares(fields: Map<String, Value>) -> Result<Vec<Share>, MalformedInputError> {
    let mut shares = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let x = key.trim().parse::<u64>().map_err(|_| MalformedInputError::InvalidShareKey(key.clone()))?;
        let record = ShareRecord::deserialize(&value)
            .map_err(|source| MalformedInputError::InvalidShareRecord { key: key.clone(), source })?;
        shares.push(Share { key, x, record });
    }
    Ok(shares)
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    const EXAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    fn coordinates(points: &PointSequence) -> Vec<(BigInt, BigInt)> {
        points.points().iter().map(|point| (point.x().clone(), point.y().clone())).collect()
    }

    #[test]
    fn parse_example() {
        let document = ShareDocument::from_json_str(EXAMPLE).unwrap();
        assert_eq!(document.threshold(), &Threshold { n: Some(4), k: 3 });
        assert_eq!(document.shares().len(), 4);

        let points = document.points().unwrap();
        let expected: Vec<(BigInt, BigInt)> =
            [(1, 4), (2, 7), (3, 12), (6, 39)].into_iter().map(|(x, y)| (BigInt::from(x), BigInt::from(y))).collect();
        assert_eq!(coordinates(&points), expected);
    }

    #[test]
    fn points_are_sorted_numerically() {
        let document = ShareDocument::from_value(json!({
            "keys": { "k": 2 },
            "10": { "base": 10, "value": "100" },
            "9": { "base": 10, "value": "90" },
            "2": { "base": 10, "value": "20" },
        }))
        .unwrap();
        let points = document.points().unwrap();
        let abscissas: Vec<BigInt> = points.abscissas();
        assert_eq!(abscissas, vec![BigInt::from(2), BigInt::from(9), BigInt::from(10)]);
    }

    #[test]
    fn numeric_and_string_threshold() {
        let document = ShareDocument::from_value(json!({ "keys": { "n": "1", "k": "1" } })).unwrap();
        assert_eq!(document.threshold(), &Threshold { n: Some(1), k: 1 });
    }

    #[test]
    fn not_json() {
        let result = ShareDocument::from_json_str("{ keys");
        assert!(matches!(result, Err(MalformedInputError::Json(_))));
    }

    #[test]
    fn not_an_object() {
        let result = ShareDocument::from_value(json!([1, 2, 3]));
        assert!(matches!(result, Err(MalformedInputError::NotAnObject)));
    }

    #[test]
    fn missing_keys() {
        let result = ShareDocument::from_value(json!({ "1": { "base": 10, "value": "4" } }));
        assert!(matches!(result, Err(MalformedInputError::MissingKeys)));
    }

    #[test]
    fn missing_threshold() {
        let result = ShareDocument::from_value(json!({ "keys": { "n": 3 } }));
        assert!(matches!(result, Err(MalformedInputError::MissingThreshold)));
    }

    #[test]
    fn non_numeric_threshold() {
        let result = ShareDocument::from_value(json!({ "keys": { "k": "three" } }));
        assert!(matches!(result, Err(MalformedInputError::NonNumeric { field: "keys.k", .. })));
    }

    #[test]
    fn zero_threshold() {
        let result = ShareDocument::from_value(json!({ "keys": { "k": 0 } }));
        assert!(matches!(result, Err(MalformedInputError::ZeroThreshold)));
    }

    #[test]
    fn non_numeric_share_key() {
        let result = ShareDocument::from_value(json!({
            "keys": { "k": 1 },
            "first": { "base": 10, "value": "4" },
        }));
        assert!(matches!(result, Err(MalformedInputError::InvalidShareKey(key)) if key == "first"));
    }

    #[test]
    fn incomplete_share_record() {
        let result = ShareDocument::from_value(json!({
            "keys": { "k": 1 },
            "1": { "base": 10 },
        }));
        assert!(matches!(result, Err(MalformedInputError::InvalidShareRecord { key, .. }) if key == "1"));
    }

    #[test]
    fn float_radix() {
        let document = ShareDocument::from_value(json!({
            "keys": { "k": 1.0 },
            "1": { "base": 16.0, "value": "ff" },
            "2": { "base": 16.5, "value": "ff" },
        }))
        .unwrap();
        assert_eq!(document.threshold().k, 1);
        assert_eq!(document.shares().first().unwrap().to_point().unwrap(), Point::new(1, 255));
        assert!(matches!(
            document.points(),
            Err(ReconstructionError::Decode { key, source: DecodeError::InvalidRadix(radix) }) if key == "2" && radix == "16.5"
        ));
    }

    #[test]
    fn invalid_digit_names_the_share() {
        let document = ShareDocument::from_value(json!({
            "keys": { "k": 1 },
            "5": { "base": "16", "value": "fg" },
        }))
        .unwrap();
        let result = document.points();
        assert!(matches!(
            result,
            Err(ReconstructionError::Decode { key, source: DecodeError::InvalidDigit { digit: 'g', position: 1, radix: 16 } })
                if key == "5"
        ));
    }
}
