//! Player input parsing.
//!
//! Free text becomes a number the way a browser's `Number(text)` reads it:
//! surrounding whitespace is ignored, empty text is zero, and anything
//! unreadable is NaN so the economy's own validation rejects it.

/// Reads a number from prompt text.
#[must_use]
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_digits(&text[2..], radix);
    }

    match text {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if text.chars().any(char::is_alphabetic) && !is_exponent_form(text) => f64::NAN,
        _ => text.parse().unwrap_or(f64::NAN),
    }
}

/// Digits after a `0x`/`0o`/`0b` prefix. No sign, at least one digit.
fn parse_radix_digits(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |value, c| {
            c.to_digit(radix)
                .map(|digit| value * f64::from(radix) + f64::from(digit))
        })
        .unwrap_or(f64::NAN)
}

/// Letters are allowed only as a single exponent marker (`1e5`, `2.5E-3`).
fn is_exponent_form(text: &str) -> bool {
    let mut letters = text.chars().filter(|c| c.is_alphabetic());
    matches!(letters.next(), Some('e' | 'E')) && letters.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("  7.5\n"), 7.5);
        assert_eq!(parse_number("1e5"), 100_000.0);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number("0x1A"), 26.0);
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_unreadable_is_nan() {
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("inf").is_nan());
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("12 monkeys").is_nan());
        assert!(parse_number("0xZZ").is_nan());
    }

    #[test]
    fn test_radix_prefix_takes_no_sign() {
        assert!(parse_number("0x+1A").is_nan());
        assert!(parse_number("0x-1A").is_nan());
        assert!(parse_number("0b").is_nan());
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0x10000000000000000"), 18_446_744_073_709_551_616.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }
}
