//! Error types for vectorviz

use thiserror::Error;

/// Main error type for vectorviz operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    #[error("Length mismatch for {what}: expected {expected}, got {actual}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid point array shape: expected {expected_columns} columns, got {actual_columns}")]
    InvalidShape {
        expected_columns: usize,
        actual_columns: usize,
    },

    #[error("Unknown color scale: {0}")]
    UnknownColorScale(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type alias for vectorviz operations
pub type Result<T> = std::result::Result<T, Error>;

/// Require `value` to be finite and strictly positive
pub fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("must be a finite value > 0, got {value}")))
    }
}

/// Require `value` to be finite and non-negative
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("must be a finite value >= 0, got {value}")))
    }
}

/// Require `value` to be finite and at least `minimum`
pub fn ensure_at_least(name: &'static str, value: f64, minimum: f64) -> Result<()> {
    if value.is_finite() && value >= minimum {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("must be a finite value >= {minimum}, got {value}")))
    }
}

/// Require `value` to be finite and strictly greater than `minimum`
pub fn ensure_greater_than(name: &'static str, value: f64, minimum: f64) -> Result<()> {
    if value.is_finite() && value > minimum {
        Ok(())
    } else {
        Err(Error::invalid_parameter(name, format!("must be a finite value > {minimum}, got {value}")))
    }
}

/// Require two parallel sequences to have the same length
pub fn ensure_same_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch { what, expected, actual })
    }
}
