//! Validation error types

use std::fmt;

/// Validation error for request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required parameter was not supplied
    Missing { field: &'static str },

    /// Parameter is not a finite number
    InvalidNumber { field: &'static str, value: String },

    /// Parameter is not an ISO calendar date (YYYY-MM-DD)
    InvalidDate { field: &'static str, value: String },
}

impl ValidationError {
    /// Name of the offending parameter
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::InvalidNumber { field, .. }
            | Self::InvalidDate { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::InvalidNumber { field, value } => {
                write!(f, "{}: '{}' is not a valid number", field, value)
            }
            Self::InvalidDate { field, value } => {
                write!(f, "{}: '{}' is not a valid date (expected YYYY-MM-DD)", field, value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
