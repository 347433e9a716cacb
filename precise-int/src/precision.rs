//! Conversion between decimal input and scaled integers.
//!
//! A scaled integer is the decimal value multiplied by `10^precision`, so with
//! the default precision of 2 a price of `12.34` is stored as `1234`. All
//! arithmetic is done on exact decimals; extra fractional digits are rounded
//! half away from zero.

use crate::errors::FilterError;
use crate::numeric::NumericValue;
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::str::FromStr;

pub const DEFAULT_PRECISION: u32 = 2;
pub const MAX_PRECISION: u32 = 18;

/// Digits before the decimal point beyond which no value fits into an i64
const MAX_INTEGER_DIGITS: i64 = 19;

/// Scales `value` to an integer with [`DEFAULT_PRECISION`] decimal places.
pub fn normalize(value: &NumericValue) -> Result<i64, FilterError> {
    normalize_with_precision(value, DEFAULT_PRECISION)
}

pub fn normalize_with_precision(value: &NumericValue, precision: u32) -> Result<i64, FilterError> {
    if precision > MAX_PRECISION {
        return Err(FilterError::InvalidPrecision(precision));
    }
    if let NumericValue::Integer(i) = value {
        return i
            .checked_mul(10i64.pow(precision))
            .ok_or_else(|| FilterError::OutOfRange(value.to_string()));
    }
    if !value.is_numeric() {
        return Err(FilterError::NotNumeric(value.to_string()));
    }

    let text = value.to_decimal_string();
    let (negative, digits, scale) = match split_decimal(&text)? {
        Some(parts) => parts,
        None => return Ok(0),
    };

    let out_of_range = || FilterError::OutOfRange(text.clone());
    let scale = scale.checked_sub(precision as i64).ok_or_else(out_of_range)?;
    let integer_digits = (digits.len() as i64).checked_sub(scale).ok_or_else(out_of_range)?;
    if integer_digits > MAX_INTEGER_DIGITS {
        return Err(out_of_range());
    }
    if integer_digits < 0 {
        // Magnitude below 0.1 after scaling
        return Ok(0);
    }

    let mut unscaled =
        BigInt::from_str(&digits).map_err(|_| FilterError::NotNumeric(text.clone()))?;
    if negative {
        unscaled = -unscaled;
    }
    BigDecimal::new(unscaled, scale)
        .with_scale_round(0, RoundingMode::HalfUp)
        .to_i64()
        .ok_or_else(out_of_range)
}

/// Splits numeric text into sign, significant digits without leading zeros,
/// and the decimal scale of those digits. Returns `None` for values that are
/// zero or too small to survive any scaling.
fn split_decimal(text: &str) -> Result<Option<(bool, String, i64)>, FilterError> {
    let (mantissa, exponent_text) = match text.find(['e', 'E']) {
        Some(pos) => (&text[..pos], Some(&text[pos + 1..])),
        None => (text, None),
    };

    let (negative, unsigned) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };

    let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let digits = format!("{}{}", integer, fraction);
    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(None);
    }

    let exponent = match exponent_text.map(str::parse::<i64>) {
        None => 0,
        Some(Ok(exponent)) => exponent,
        // Only the magnitude can fail to parse, a huge negative exponent is zero
        Some(Err(_)) if exponent_text.is_some_and(|e| e.starts_with('-')) => return Ok(None),
        Some(Err(_)) => return Err(FilterError::OutOfRange(text.to_string())),
    };

    // Overflows only for exponents near i64::MIN
    match (fraction.len() as i64).checked_sub(exponent) {
        Some(scale) => Ok(Some((negative, digits.to_string(), scale))),
        None => Ok(None),
    }
}

/// Renders a scaled integer back as fixed-point decimal text, `1234` -> `"12.34"`.
pub fn denormalize(scaled: i64, precision: u32) -> Result<String, FilterError> {
    if precision > MAX_PRECISION {
        return Err(FilterError::InvalidPrecision(precision));
    }
    let sign = if scaled < 0 { "-" } else { "" };
    let magnitude = scaled.unsigned_abs().to_string();
    if precision == 0 {
        return Ok(format!("{}{}", sign, magnitude));
    }

    let width = precision as usize + 1;
    let padded = format!("{:0>width$}", magnitude, width = width);
    let (integer, fraction) = padded.split_at(padded.len() - precision as usize);
    Ok(format!("{}{}.{}", sign, integer, fraction))
}
