//! Server configuration from environment variables

use std::env;
use gauge_core::{GaugeError, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};

/// Log filter used when neither GAUGE_LOG nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
    /// Fraction digits in formatted results
    pub fraction_digits: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            fraction_digits: DEFAULT_FRACTION_DIGITS,
        }
    }
}

impl ServerConfig {
    /// Read GAUGE_LOG (falling back to RUST_LOG) and GAUGE_FRACTION_DIGITS
    pub fn from_env() -> Result<Self, GaugeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, GaugeError> {
        let log_filter = get("GAUGE_LOG")
            .or_else(|| get("RUST_LOG"))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let fraction_digits = match get("GAUGE_FRACTION_DIGITS") {
            Some(raw) => parse_fraction_digits(&raw)?,
            None => DEFAULT_FRACTION_DIGITS,
        };

        Ok(ServerConfig { log_filter, fraction_digits })
    }
}

fn parse_fraction_digits(raw: &str) -> Result<usize, GaugeError> {
    let digits: usize = raw.trim().parse().map_err(|_| {
        GaugeError::Config(format!("GAUGE_FRACTION_DIGITS must be an integer, got {:?}", raw))
    })?;
    if digits > MAX_FRACTION_DIGITS {
        return Err(GaugeError::Config(format!(
            "GAUGE_FRACTION_DIGITS must be at most {}, got {}",
            MAX_FRACTION_DIGITS, digits
        )));
    }
    Ok(digits)
}
