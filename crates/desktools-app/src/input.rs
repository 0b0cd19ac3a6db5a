// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parsing of number-input text. Inputs keep the raw text the user typed and
// are parsed on every render, so a half-typed value only produces an inline
// message.

use desktools_core::error::{DesktoolsError, Result};

/// Parse a decimal number input. Surrounding whitespace is ignored.
pub fn parse_number(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(DesktoolsError::InvalidNumber(trimmed.to_string())),
    }
}

/// Parse a whole-number input such as feet or inches.
pub fn parse_whole(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| DesktoolsError::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimals() {
        assert_eq!(parse_number(" 1.70 ").unwrap(), 1.7);
        assert_eq!(parse_number("-3").unwrap(), -3.0);
        assert!(parse_number("").is_err());
        assert!(parse_number("abc").is_err());
        assert!(parse_number("inf").is_err());
        assert!(parse_number("NaN").is_err());
    }

    #[test]
    fn whole_numbers() {
        assert_eq!(parse_whole("5").unwrap(), 5);
        assert!(parse_whole("5.5").is_err());
        assert!(parse_whole("-1").is_err());
    }
}
