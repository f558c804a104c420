//! Money rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on every money amount.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a money amount to cents, halves away from zero.
///
/// The result always carries exactly two decimal places so that amounts
/// serialize uniformly (`"2000.00"`, not `"2000"`).
///
/// # Examples
///
/// ```
/// use hr_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("258.592").unwrap()).to_string(), "258.59");
/// assert_eq!(round_money(Decimal::from_str("0.125").unwrap()).to_string(), "0.13");
/// assert_eq!(round_money(Decimal::from(2000)).to_string(), "2000.00");
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    round_to(amount, MONEY_SCALE)
}

/// Rounds to `dp` decimal places, halves away from zero, padding the scale.
pub fn round_to(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}
