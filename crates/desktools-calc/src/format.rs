// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Result formatting with thousands separators.

/// Format `value` with `decimals` fixed decimal places and a comma between
/// each group of three integer digits, e.g. `1234.5` -> `"1,234.50"`.
///
/// Non-finite values are rendered as `inf`, `-inf` or `NaN`.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    if value < 0.0 && !rounds_to_zero {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values_have_no_separator() {
        assert_eq!(format_grouped(2.0, 2), "2.00");
        assert_eq!(format_grouped(999.994, 2), "999.99");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_grouped(1234.5, 2), "1,234.50");
        assert_eq!(format_grouped(1_234_567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(100_000.0, 0), "100,000");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(format_grouped(-9876.543, 1), "-9,876.5");
        assert_eq!(format_grouped(-0.001, 2), "0.00");
    }

    #[test]
    fn non_finite_passthrough() {
        assert_eq!(format_grouped(f64::INFINITY, 2), "inf");
        assert_eq!(format_grouped(f64::NAN, 2), "NaN");
    }
}
