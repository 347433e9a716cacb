//! Numeric predicate and the raw value type accepted by the filter.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

static NUMERIC_REGEX: OnceLock<Regex> = OnceLock::new();

fn numeric_regex() -> &'static Regex {
    // Optional surrounding whitespace, optional sign, digits with at most one
    // decimal point, optional exponent. ASCII digits only.
    NUMERIC_REGEX.get_or_init(|| {
        Regex::new(
            r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$",
        )
        .unwrap()
    })
}

/// Returns true when `value` is fully parseable as a decimal number.
pub fn is_numeric(value: &str) -> bool {
    numeric_regex().is_match(value)
}

/// Raw filter value as submitted by the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericValue {
    /// Non-finite floats are not numeric, everything else follows [`is_numeric`].
    pub fn is_numeric(&self) -> bool {
        match self {
            NumericValue::Integer(_) => true,
            NumericValue::Float(f) => f.is_finite(),
            NumericValue::Text(s) => is_numeric(s),
        }
    }

    /// Decimal text of the value. Floats use their shortest round-trip form,
    /// so `99.99` becomes `"99.99"` and not its binary expansion.
    pub fn to_decimal_string(&self) -> String {
        match self {
            NumericValue::Integer(i) => i.to_string(),
            NumericValue::Float(f) => f.to_string(),
            NumericValue::Text(s) => s.trim().to_string(),
        }
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Integer(i) => write!(f, "{}", i),
            NumericValue::Float(v) => write!(f, "{}", v),
            NumericValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for NumericValue {
    fn from(value: &str) -> Self {
        NumericValue::Text(value.to_string())
    }
}

impl From<String> for NumericValue {
    fn from(value: String) -> Self {
        NumericValue::Text(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        NumericValue::Integer(value as i64)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Float(value)
    }
}
