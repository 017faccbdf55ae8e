//! Conversion requests and results exchanged with the presentation layer

use std::fmt;
use serde::{Deserialize, Deserializer, Serialize};
use gauge_core::{format_value, parse_input, GaugeError, DEFAULT_FRACTION_DIGITS};
use crate::convert::convert_in;
use crate::{Category, Unit};

/// One conversion as the user set it up: raw input text and two unit picks
///
/// Units deserialize from a name, symbol or alias. `input` may be given as
/// text or as a number; missing or `null` input is the empty field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub category: Category,
    pub from: Unit,
    pub to: Unit,
    /// Raw text from the input field, parsed with the zero fallback
    #[serde(default, deserialize_with = "deserialize_input")]
    pub input: String,
}

impl ConversionRequest {
    pub fn new(category: Category, from: Unit, to: Unit, input: impl Into<String>) -> Self {
        ConversionRequest {
            category,
            from,
            to,
            input: input.into(),
        }
    }

    /// The numeric input, zero if the text is not a number
    pub fn value(&self) -> f64 {
        parse_input(&self.input)
    }

    /// Run the conversion
    pub fn evaluate(&self) -> Result<ConversionResult, GaugeError> {
        let value = convert_in(self.value(), self.category, self.from, self.to)?;
        Ok(ConversionResult::new(value, self.to))
    }
}

fn deserialize_input<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInput {
        Text(String),
        Number(f64),
    }

    Ok(match Option::<RawInput>::deserialize(deserializer)? {
        None => String::new(),
        Some(RawInput::Text(text)) => text,
        Some(RawInput::Number(n)) => n.to_string(),
    })
}

/// A converted value with the symbol of the unit it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    #[serde(serialize_with = "gauge_core::float::serialize")]
    pub value: f64,
    pub symbol: &'static str,
}

impl ConversionResult {
    pub fn new(value: f64, unit: Unit) -> Self {
        ConversionResult {
            value,
            symbol: unit.symbol(),
        }
    }

    /// Formatted value followed by the unit symbol, e.g. "1,609.344 m"
    pub fn display(&self, max_fraction_digits: usize) -> String {
        format!("{} {}", format_value(self.value, max_fraction_digits), self.symbol)
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(DEFAULT_FRACTION_DIGITS))
    }
}
