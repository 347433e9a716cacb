//! Filtering of scaled integer columns (cents, millis, ...) by decimal input.
//!
//! ```
//! use precise_int::{FilterData, FilterOptions, PreciseIntFilter, WhereClauseBuilder};
//!
//! let filter = PreciseIntFilter::new("price", FilterOptions::default());
//! let mut query = WhereClauseBuilder::new();
//! filter
//!     .apply(&mut query, "o", "price_cents", &FilterData::with_value("12.34"))
//!     .unwrap();
//! assert_eq!(query.to_sql(), "o.price_cents = :price_0");
//! assert_eq!(query.parameter("price_0"), Some(1234));
//! ```

pub mod errors;
pub mod filter;
pub mod numeric;
pub mod operator;
pub mod precision;

pub use errors::FilterError;
pub use filter::{
    Condition, FilterData, FilterOptions, FormOptions, PreciseIntFilter, ProxyQuery,
    WhereClauseBuilder,
};
pub use numeric::{is_numeric, NumericValue};
pub use operator::{resolve_operator, OperatorCode, CHOICES};
pub use precision::{
    denormalize, normalize, normalize_with_precision, DEFAULT_PRECISION, MAX_PRECISION,
};
