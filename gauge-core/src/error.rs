//! Error type shared by the Gauge crates
//!
//! Conversion itself never fails: bad input text becomes zero and
//! non-finite numbers pass straight through. Errors only surface on the
//! strict parsing path, on dynamic unit lookups and on configuration.

use thiserror::Error;

/// Errors raised by fallible Gauge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaugeError {
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    #[error("Unknown unit: {0:?}")]
    UnknownUnit(String),

    #[error("Unknown category: {0:?}")]
    UnknownCategory(String),

    #[error("Unit {unit} belongs to {found}, not {expected}")]
    CategoryMismatch {
        unit: String,
        expected: String,
        found: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl GaugeError {
    pub fn category_mismatch(
        unit: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::CategoryMismatch {
            unit: unit.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// True for errors caused by caller-supplied values (as opposed to setup)
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}
