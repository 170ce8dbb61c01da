//! Shared rounding utilities.
//!
//! Hour figures round half-up to one decimal place and currency figures
//! round half-up to two decimal places. Every call site goes through these
//! helpers so that recomputing a payslip from identical inputs always
//! produces identical output.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds an hour figure half-up to one decimal place.
///
/// # Examples
///
/// ```
/// use payroll_engine::rounding::round_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_hours(Decimal::from_str("7.25").unwrap()).to_string(), "7.3");
/// assert_eq!(round_hours(Decimal::from_str("7.24").unwrap()).to_string(), "7.2");
/// ```
pub fn round_hours(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a currency figure half-up to two decimal places.
///
/// # Examples
///
/// ```
/// use payroll_engine::rounding::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("474.99975").unwrap()).to_string(), "475.00");
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// RD-001: half-up on the hours midpoint
    #[test]
    fn test_hours_midpoint_rounds_up() {
        assert_eq!(round_hours(dec("8.05")), dec("8.1"));
        assert_eq!(round_hours(dec("8.04")), dec("8.0"));
    }

    /// RD-002: half-up on the currency midpoint
    #[test]
    fn test_currency_midpoint_rounds_up() {
        assert_eq!(round_currency(dec("112.125")), dec("112.13"));
        assert_eq!(round_currency(dec("112.124")), dec("112.12"));
    }

    #[test]
    fn test_already_rounded_values_are_unchanged() {
        assert_eq!(round_hours(dec("8.0")), dec("8.0"));
        assert_eq!(round_currency(dec("1425.00")), dec("1425.00"));
    }

    #[test]
    fn test_whole_numbers_keep_scale() {
        assert_eq!(round_hours(dec("9")).to_string(), "9");
        assert_eq!(round_currency(dec("380.0000")).to_string(), "380.00");
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let once = round_currency(dec("267.5625"));
        assert_eq!(round_currency(once), once);
    }
}
