// ABOUTME: Conversion between decimal major currency units and integer minor units
// ABOUTME: Prices are stored as integer cents; callers speak in dollars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::currency::MINOR_UNITS_PER_MAJOR;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Convert an amount in major units (e.g. dollars) to integer minor units (cents)
///
/// Whole-cent amounts convert exactly. Sub-cent fractions round half away
/// from zero. Amounts too large for `i64` saturate, so an absurd upper price
/// bound behaves like no bound at all.
#[must_use]
pub fn to_minor_units(amount: Decimal) -> i64 {
    let Some(scaled) = amount.checked_mul(Decimal::from(MINOR_UNITS_PER_MAJOR)) else {
        return saturate(amount);
    };
    scaled
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_else(|| saturate(amount))
}

/// Convert integer minor units back to a decimal amount in major units
#[must_use]
pub fn from_minor_units(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}

fn saturate(amount: Decimal) -> i64 {
    if amount.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_units_multiply_by_one_hundred() {
        assert_eq!(to_minor_units(Decimal::from(50)), 5000);
        assert_eq!(to_minor_units(Decimal::from(120)), 12000);
        assert_eq!(to_minor_units(Decimal::ZERO), 0);
    }

    #[test]
    fn test_cents_convert_exactly() {
        // 0.29 * 100 is 28.999... in binary floating point
        assert_eq!(to_minor_units(Decimal::new(29, 2)), 29);
        assert_eq!(to_minor_units(Decimal::new(8599, 2)), 8599);
    }

    #[test]
    fn test_sub_cent_fractions_round_half_away_from_zero() {
        assert_eq!(to_minor_units(Decimal::new(10005, 4)), 100);
        assert_eq!(to_minor_units(Decimal::new(1005, 3)), 101);
        assert_eq!(to_minor_units(Decimal::new(-1005, 3)), -101);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        assert_eq!(to_minor_units(Decimal::MAX), i64::MAX);
        assert_eq!(to_minor_units(Decimal::MIN), i64::MIN);
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(from_minor_units(9350), Decimal::new(9350, 2));
        assert_eq!(from_minor_units(9350).to_string(), "93.50");
    }
}
