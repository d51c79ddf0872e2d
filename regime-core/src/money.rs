//! Money parsing and display formatting.
//!
//! All amounts in this crate are whole-ruble [`Decimal`] values. Input
//! arrives as free text, possibly with thousands separators (regular or
//! non-breaking spaces) and a comma decimal mark, e.g. `"1 000,50"`.
//!
//! Two parsers are provided:
//!
//! * [`parse_amount`] — lenient and total: anything unparseable becomes 0.
//!   This is the behavior form fields need, where a half-typed value must
//!   never break the recomputation.
//! * [`parse_amount_strict`] — returns an error for non-empty garbage.
//!   Used for command-line flags, where a typo should be reported.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a money amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes raw input: strips all whitespace (including non-breaking
/// spaces used as thousands separators) and turns the first comma into a
/// decimal point.
fn normalize_amount_input(s: &str) -> String {
    let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.replacen(',', ".", 1)
}

/// Parses free-text input into a [`Decimal`], degrading to zero.
///
/// Empty or whitespace-only input is 0. Unparseable input is 0 as well
/// (logged at debug level). This function is total: every input maps to a
/// defined numeric output, so callers never need an error path.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::money::parse_amount;
///
/// assert_eq!(parse_amount("1 000,50"), dec!(1000.5));
/// assert_eq!(parse_amount("1,5"), dec!(1.5));
/// assert_eq!(parse_amount("abc"), dec!(0));
/// ```
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        tracing::debug!(input = %s, "unparseable amount treated as zero: {}", e);
        Decimal::ZERO
    })
}

/// Parses free-text input into a [`Decimal`], rejecting garbage.
///
/// Accepts the same formats as [`parse_amount`] and still treats empty or
/// whitespace-only input as 0, but a non-empty input that does not parse
/// is an error rather than a silent zero.
pub fn parse_amount_strict(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseAmountError {
        input: s.to_string(),
        source: e,
    })
}

/// Formats an amount as whole rubles for display, e.g. `1 000 000 ₽`.
///
/// Rounds half-up to zero fraction digits and groups thousands with
/// non-breaking spaces. Display-only: stored totals are never rounded.
pub fn format_rub(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('\u{a0}');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}\u{a0}₽")
    } else {
        format!("{grouped}\u{a0}₽")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_space_thousands_and_comma_decimal() {
        assert_eq!(parse_amount("1 000,50"), dec!(1000.5));
        assert_eq!(parse_amount("1\u{a0}000\u{a0}000"), dec!(1000000));
    }

    #[test]
    fn parse_amount_accepts_comma_decimal_mark() {
        assert_eq!(parse_amount("1,5"), dec!(1.5));
    }

    #[test]
    fn parse_amount_accepts_plain_numbers() {
        assert_eq!(parse_amount("8000000"), dec!(8000000));
        assert_eq!(parse_amount("200000.75"), dec!(200000.75));
    }

    #[test]
    fn parse_amount_empty_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("   "), Decimal::ZERO);
        assert_eq!(parse_amount("\u{a0}\u{202f}"), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_garbage_is_zero() {
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
        assert_eq!(parse_amount("12abc"), Decimal::ZERO);
        // Second comma survives normalization and poisons the parse.
        assert_eq!(parse_amount("1,234,567"), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_strict_accepts_valid_input() {
        assert_eq!(parse_amount_strict("1 000,50").unwrap(), dec!(1000.5));
        assert_eq!(parse_amount_strict("").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_strict_rejects_garbage() {
        assert!(parse_amount_strict("abc").is_err());
        assert!(parse_amount_strict("12abc").is_err());
    }

    #[test]
    fn format_rub_groups_thousands() {
        assert_eq!(format_rub(dec!(1000000)), "1\u{a0}000\u{a0}000\u{a0}₽");
        assert_eq!(format_rub(dec!(970000)), "970\u{a0}000\u{a0}₽");
        assert_eq!(format_rub(dec!(500)), "500\u{a0}₽");
        assert_eq!(format_rub(Decimal::ZERO), "0\u{a0}₽");
    }

    #[test]
    fn format_rub_rounds_half_up_to_whole_rubles() {
        assert_eq!(format_rub(dec!(1234.5)), "1\u{a0}235\u{a0}₽");
        assert_eq!(format_rub(dec!(1234.4)), "1\u{a0}234\u{a0}₽");
    }
}
