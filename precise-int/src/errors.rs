/// Errors raised while normalizing filter values or resolving operators
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Operator type code outside the supported table, with all allowed codes
    UnsupportedOperator { code: i64, allowed: Vec<i64> },
    NotNumeric(String),
    OutOfRange(String),
    InvalidPrecision(u32),
    InvalidOptions(String),
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::InvalidOptions(err.to_string())
    }
}

impl From<FilterError> for String {
    fn from(error: FilterError) -> Self {
        error.to_string()
    }
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::UnsupportedOperator { code, allowed } => {
                let allowed = allowed
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join("\", \"");
                write!(
                    f,
                    "The type \"{}\" is not supported, allowed one are \"{}\".",
                    code, allowed
                )
            }
            FilterError::NotNumeric(value) => write!(f, "Value is not numeric: {:?}", value),
            FilterError::OutOfRange(value) => {
                write!(f, "Value {} does not fit into a 64-bit integer", value)
            }
            FilterError::InvalidPrecision(precision) => write!(
                f,
                "Unsupported precision {}: expected at most {} decimal places",
                precision,
                crate::precision::MAX_PRECISION
            ),
            FilterError::InvalidOptions(msg) => write!(f, "Invalid filter options: {}", msg),
        }
    }
}

impl std::error::Error for FilterError {}
