use crate::errors::FilterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Comparison kind selected in the filter form.
///
/// Discriminants are the integer type codes used by the admin layer's number
/// operator choice; variants are declared in lookup table order.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OperatorCode {
    #[default]
    Equal = 3,
    GreaterEqual = 1,
    GreaterThan = 2,
    LessEqual = 4,
    LessThan = 5,
}

/// Fixed operator lookup table
pub const CHOICES: [(OperatorCode, &str); 5] = [
    (OperatorCode::Equal, "="),
    (OperatorCode::GreaterEqual, ">="),
    (OperatorCode::GreaterThan, ">"),
    (OperatorCode::LessEqual, "<="),
    (OperatorCode::LessThan, "<"),
];

impl OperatorCode {
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Comparison symbol for this code
    pub fn as_str(self) -> &'static str {
        match self {
            OperatorCode::Equal => "=",
            OperatorCode::GreaterEqual => ">=",
            OperatorCode::GreaterThan => ">",
            OperatorCode::LessEqual => "<=",
            OperatorCode::LessThan => "<",
        }
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All valid integer codes, in table order
    pub fn allowed_codes() -> Vec<i64> {
        OperatorCode::iter().map(OperatorCode::code).collect()
    }
}

impl TryFrom<i64> for OperatorCode {
    type Error = FilterError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        OperatorCode::iter()
            .find(|op| op.code() == code)
            .ok_or_else(|| FilterError::UnsupportedOperator {
                code,
                allowed: OperatorCode::allowed_codes(),
            })
    }
}

impl fmt::Display for OperatorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps an integer type code to its comparison operator.
pub fn resolve_operator(code: i64) -> Result<&'static str, FilterError> {
    OperatorCode::try_from(code).map(OperatorCode::as_str)
}
