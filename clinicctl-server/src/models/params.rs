//! Request parameter coercion
//!
//! Parameters arrive as raw strings (query string or form body) and are
//! coerced here, before any storage access. Values are taken verbatim;
//! surrounding whitespace is not stripped from any field.

use chrono::NaiveDate;

use super::ValidationError;

/// ISO calendar date format accepted for `date_` parameters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Require a parameter to be present. Empty strings are accepted.
pub fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    value.ok_or(ValidationError::Missing { field })
}

/// Coerce a parameter into a finite floating point amount.
///
/// # Example
/// ```
/// use clinicctl_server::models::params::parse_amount;
///
/// assert_eq!(parse_amount("25.50", "amount").unwrap(), 25.5);
/// assert!(parse_amount("twelve", "amount").is_err());
/// ```
pub fn parse_amount(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| ValidationError::InvalidNumber {
            field,
            value: value.to_owned(),
        })
}

/// Coerce a parameter into a calendar date.
///
/// Only the exact `YYYY-MM-DD` shape is accepted: zero-padded month and
/// day, four-digit year, no sign and no surrounding whitespace.
pub fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        field,
        value: value.to_owned(),
    };

    if !is_iso_date_shape(value) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
