//! Shared arithmetic helpers for scenario calculations.

use rust_decimal::Decimal;

/// Clamps a value to zero from below.
///
/// Profit bases (revenue minus expenses) floor at zero before the rate is
/// applied, so no scenario ever produces negative tax.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::floor_at_zero;
///
/// assert_eq!(floor_at_zero(dec!(100)), dec!(100));
/// assert_eq!(floor_at_zero(dec!(-100)), dec!(0));
/// ```
pub fn floor_at_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

/// Rounds to whole rubles using half-up rounding (midpoint away from
/// zero). Used only for display and chart labels, never for the totals
/// the best-scenario selection compares.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_to_ruble;
///
/// assert_eq!(round_to_ruble(dec!(123.4)), dec!(123));
/// assert_eq!(round_to_ruble(dec!(123.5)), dec!(124));
/// ```
pub fn round_to_ruble(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}
