//! Gauge Core - Shared types
//!
//! This crate provides the pieces every Gauge crate leans on:
//! - `GaugeError`: errors for the few fallible operations
//! - `parse_input`: lenient decimal parsing with a zero fallback
//! - `format_value`: display formatting for converted values
//! - `float`: serde helpers that keep NaN and infinities in JSON

pub mod float;

mod error;
mod format;
mod input;

pub use error::GaugeError;
pub use format::{format_value, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
pub use input::{parse_input, try_parse_input, InputValue};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{format_value, parse_input, GaugeError, InputValue};
}
