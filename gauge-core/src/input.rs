//! Input text parsing
//!
//! The input field is re-read on every keystroke, so the lenient
//! `parse_input` never fails: anything that is not a complete number
//! reads as zero. `try_parse_input` and `InputValue` are the strict
//! variants for callers that want to render a blank instead.

use serde::{Deserialize, Serialize};
use crate::GaugeError;

/// Parse input text as a decimal number, falling back to zero
///
/// Empty, non-numeric and partially typed text ("-", ".", "1e") all
/// yield `0.0`. Surrounding whitespace is ignored.
pub fn parse_input(text: &str) -> f64 {
    try_parse_input(text).unwrap_or(0.0)
}

/// Parse input text as a decimal number
pub fn try_parse_input(text: &str) -> Result<f64, GaugeError> {
    // Leading and trailing whitespace is dropped, so " 42 " reads as 42
    // rather than falling back to zero.
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| GaugeError::InvalidNumber(trimmed.to_string()))
}

/// Classification of the text currently in an input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum InputValue {
    /// Nothing typed yet
    Empty,
    /// A prefix of a number that is not yet complete, e.g. "-" or "2e"
    Partial,
    /// Text that can never become a number
    Invalid,
    /// A complete number
    Number(#[serde(with = "crate::float")] f64),
}

impl InputValue {
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return InputValue::Empty;
        }
        if let Ok(n) = try_parse_input(trimmed) {
            return InputValue::Number(n);
        }
        if is_number_prefix(trimmed) {
            InputValue::Partial
        } else {
            InputValue::Invalid
        }
    }

    /// The number to convert, using the zero fallback for anything else
    pub fn value(&self) -> f64 {
        match self {
            InputValue::Number(n) => *n,
            _ => 0.0,
        }
    }

    pub fn is_number(&self) -> bool {
        matches!(self, InputValue::Number(_))
    }
}

/// True if `s` could still be extended into a decimal literal
fn is_number_prefix(s: &str) -> bool {
    #[derive(Clone, Copy, PartialEq)]
    enum State {
        Start,
        Sign,
        Int,
        Frac,
        Exp,
        ExpSign,
        ExpDigits,
    }

    let mut state = State::Start;
    for c in s.chars() {
        state = match (state, c) {
            (State::Start, '+' | '-') => State::Sign,
            (State::Start | State::Sign | State::Int, '0'..='9') => State::Int,
            (State::Start | State::Sign | State::Int, '.') => State::Frac,
            (State::Frac, '0'..='9') => State::Frac,
            (State::Int | State::Frac, 'e' | 'E') => State::Exp,
            (State::Exp, '+' | '-') => State::ExpSign,
            (State::Exp | State::ExpSign | State::ExpDigits, '0'..='9') => State::ExpDigits,
            _ => return false,
        };
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fallback() {
        assert_eq!(parse_input(""), 0.0);
        assert_eq!(parse_input("abc"), 0.0);
        assert_eq!(parse_input("-"), 0.0);
        assert_eq!(parse_input("."), 0.0);
        assert_eq!(parse_input("1e"), 0.0);
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_input("3.5"), 3.5);
        assert_eq!(parse_input("-12"), -12.0);
        assert_eq!(parse_input(" 42 "), 42.0);
        assert_eq!(parse_input("1.5e2"), 150.0);
        assert_eq!(parse_input(".5"), 0.5);
    }

    #[test]
    fn test_parse_non_finite_passes_through() {
        assert!(parse_input("inf").is_infinite());
        assert!(parse_input("NaN").is_nan());
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(try_parse_input(" 42 "), Ok(42.0));
        assert_eq!(try_parse_input("\t-1.5\n"), Ok(-1.5));
        assert_eq!(InputValue::classify(" 42 "), InputValue::Number(42.0));
    }

    #[test]
    fn test_non_finite_number_serializes_as_text() {
        let json = serde_json::to_value(InputValue::classify("inf")).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "number", "value": "Infinity"}));

        let back: InputValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, InputValue::Number(f64::INFINITY));
    }

    #[test]
    fn test_try_parse_reports_text() {
        let err = try_parse_input(" 1,5 ").unwrap_err();
        assert_eq!(err, GaugeError::InvalidNumber("1,5".to_string()));
    }

    #[test]
    fn test_classify() {
        assert_eq!(InputValue::classify(""), InputValue::Empty);
        assert_eq!(InputValue::classify("   "), InputValue::Empty);
        assert_eq!(InputValue::classify("-"), InputValue::Partial);
        assert_eq!(InputValue::classify("."), InputValue::Partial);
        assert_eq!(InputValue::classify("-."), InputValue::Partial);
        assert_eq!(InputValue::classify("2e"), InputValue::Partial);
        assert_eq!(InputValue::classify("2e-"), InputValue::Partial);
        assert_eq!(InputValue::classify("abc"), InputValue::Invalid);
        assert_eq!(InputValue::classify("1.2.3"), InputValue::Invalid);
        assert_eq!(InputValue::classify("3.5"), InputValue::Number(3.5));
    }

    #[test]
    fn test_classify_value_fallback() {
        assert_eq!(InputValue::classify("-").value(), 0.0);
        assert_eq!(InputValue::classify("7").value(), 7.0);
        assert!(InputValue::classify("7").is_number());
    }
}
