//! Display formatting for converted values

/// Fraction digits shown when the caller has no preference
pub const DEFAULT_FRACTION_DIGITS: usize = 6;

/// Largest fraction digit count accepted from configuration
pub const MAX_FRACTION_DIGITS: usize = 15;

/// Render a value for display
///
/// Rounds to at most `max_fraction_digits`, drops trailing zeros and
/// groups the integer part in thousands: `1609.344` → `"1,609.344"`.
pub fn format_value(value: f64, max_fraction_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let digits = max_fraction_digits.min(MAX_FRACTION_DIGITS);
    let fixed = format!("{:.prec$}", value, prec = digits);

    let (negative, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, fixed.as_str()),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (unsigned, ""),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    // Rounding can leave "-0"
    let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
    if negative && !is_zero {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(format_value(0.0, 6), "0");
        assert_eq!(format_value(212.0, 6), "212");
        assert_eq!(format_value(3600.0, 6), "3,600");
        assert_eq!(format_value(1234567.0, 6), "1,234,567");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_value(1609.344, 6), "1,609.344");
        assert_eq!(format_value(273.15, 6), "273.15");
        assert_eq!(format_value(0.000621371192237334, 6), "0.000621");
        assert_eq!(format_value(2.4, 0), "2");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_value(-40.0, 6), "-40");
        assert_eq!(format_value(-1234.5, 6), "-1,234.5");
        // Rounds to zero, sign dropped
        assert_eq!(format_value(-0.0000001, 6), "0");
        assert_eq!(format_value(-0.0, 6), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_value(f64::NAN, 6), "NaN");
        assert_eq!(format_value(f64::INFINITY, 6), "∞");
        assert_eq!(format_value(f64::NEG_INFINITY, 6), "-∞");
    }

    #[test]
    fn test_digit_cap() {
        assert_eq!(format_value(1.0 / 3.0, 40), "0.333333333333333");
    }
}
