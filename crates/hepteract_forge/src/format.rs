//! Numeric formatting for player-facing text.
//!
//! Small numbers get thousands separators and a fixed number of decimals.
//! Past `1e6` (or `1e13` in long form) they switch to `m.mme+x` notation.

/// Formats `value` for display.
///
/// * `accuracy` - decimals shown below the scientific threshold
/// * `long` - raise the scientific threshold from `1e6` to `1e13`
#[must_use]
pub fn format_number(value: f64, accuracy: usize, long: bool) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let threshold = if long { 1e13 } else { 1e6 };
    if value.abs() < threshold {
        format_grouped(value, accuracy)
    } else {
        format!("{value:.2e}")
    }
}

fn format_grouped(value: f64, accuracy: usize) -> String {
    let digits = format!("{:.*}", accuracy, value.abs());
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if value < 0.0 && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}
