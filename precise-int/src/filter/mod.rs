//! Data-grid filter comparing a scaled integer column against decimal input.

mod query;

pub use query::{ProxyQuery, WhereClauseBuilder};

use crate::errors::FilterError;
use crate::numeric::NumericValue;
use crate::operator::OperatorCode;
use crate::precision::{normalize_with_precision, DEFAULT_PRECISION, MAX_PRECISION};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// How the filter's clause is combined with the rest of the query
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    #[default]
    And,
    Or,
}

/// Submitted filter form data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterData {
    #[serde(default)]
    pub value: Option<NumericValue>,
    /// Raw operator type code, [`OperatorCode::Equal`] when absent
    #[serde(default, rename = "type")]
    pub operator_type: Option<i64>,
}

impl FilterData {
    pub fn new(value: Option<NumericValue>, operator_type: Option<i64>) -> Self {
        Self {
            value,
            operator_type,
        }
    }

    pub fn with_value(value: impl Into<NumericValue>) -> Self {
        Self::new(Some(value.into()), None)
    }

    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub field_type: String,
    /// Passed through to the value widget untouched
    pub field_options: Map<String, Value>,
    pub label: Option<String>,
    pub operator_type: String,
    pub condition: Condition,
    pub precision: u32,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            field_type: "number".to_string(),
            field_options: Map::new(),
            label: None,
            operator_type: "number_operator".to_string(),
            condition: Condition::And,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl FilterOptions {
    pub fn from_json(json: &str) -> Result<Self, FilterError> {
        let options: FilterOptions = serde_json::from_str(json)?;
        if options.precision > MAX_PRECISION {
            return Err(FilterError::InvalidPrecision(options.precision));
        }
        Ok(options)
    }
}

/// Options handed to the form layer when the filter widget is built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormOptions {
    pub field_type: String,
    pub field_options: Map<String, Value>,
    pub label: Option<String>,
    pub operator_type: String,
}

/// Filters a column holding scaled integers (e.g. cents) by decimal input
/// (e.g. dollars): `12.34` is compared as `1234`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreciseIntFilter {
    name: String,
    options: FilterOptions,
}

impl PreciseIntFilter {
    pub fn new(name: impl Into<String>, options: FilterOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn default_options() -> FilterOptions {
        FilterOptions::default()
    }

    pub fn form_options(&self) -> FormOptions {
        FormOptions {
            field_type: self.options.field_type.clone(),
            field_options: self.options.field_options.clone(),
            label: self.options.label.clone(),
            operator_type: self.options.operator_type.clone(),
        }
    }

    /// Adds `alias.field <op> :param` to `query` and binds the scaled value.
    ///
    /// Returns `Ok(false)` without touching the query when no value was
    /// submitted or the value is not numeric. Exactly one parameter is bound
    /// otherwise.
    pub fn apply<Q: ProxyQuery + ?Sized>(
        &self,
        query: &mut Q,
        alias: &str,
        field: &str,
        data: &FilterData,
    ) -> Result<bool, FilterError> {
        let value = match &data.value {
            Some(value) if value.is_numeric() => value,
            Some(value) => {
                tracing::debug!(filter = %self.name, %value, "Skipping non-numeric filter value");
                return Ok(false);
            }
            None => return Ok(false),
        };

        let scaled = normalize_with_precision(value, self.options.precision)?;
        let operator = match data.operator_type {
            Some(code) => OperatorCode::try_from(code)?,
            None => OperatorCode::default(),
        };

        let parameter = format!("{}_{}", self.name, query.unique_parameter_id());
        let clause = format!("{}.{} {} :{}", alias, field, operator, parameter);
        tracing::debug!(filter = %self.name, %clause, scaled, "Applying filter");

        match self.options.condition {
            Condition::And => query.and_where(clause),
            Condition::Or => query.or_where(clause),
        }
        query.set_parameter(&parameter, scaled);
        Ok(true)
    }
}

#[cfg(test)]
mod tests;
