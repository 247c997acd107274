//! Half-up rounding for hours and money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for hours, rates and amounts.
pub const DECIMAL_PLACES: u32 = 2;

/// Rounds to [`DECIMAL_PLACES`], with midpoints rounded away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_half_up;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_half_up(Decimal::from_str("7.125").unwrap()), Decimal::from_str("7.13").unwrap());
/// assert_eq!(round_half_up(Decimal::from_str("7.124").unwrap()), Decimal::from_str("7.12").unwrap());
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
