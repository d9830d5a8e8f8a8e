//! # Money Module
//!
//! Decimal arithmetic helpers for monetary values.
//!
//! ## Why `rust_decimal`?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In f64 arithmetic:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Shop prices carry fractional rates (10% markup, 20% discount)      │
//! │  and must round half-up to exactly 2 decimal places:                │
//! │    2.99 × 1.10 × 0.80 = 2.6312 → 2.63                               │
//! │                                                                     │
//! │  OUR SOLUTION: exact Decimal math, rounded ONCE as the final        │
//! │  step of a calculation — never in between                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use bodega_core::money::{apply_discount, apply_markup, round_money};
//! use rust_decimal_macros::dec;
//!
//! let marked_up = apply_markup(dec!(2.99), dec!(0.10));
//! let discounted = apply_discount(marked_up, dec!(0.20));
//! assert_eq!(round_money(discounted), dec!(2.63));
//! ```

use rust_decimal::{Decimal, RoundingStrategy};

/// Scale used for all monetary amounts exposed to callers.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to [`MONEY_SCALE`] decimal places, half-up.
///
/// Half-up means a midpoint rounds away from zero: 2.625 → 2.63.
/// Call this exactly once, as the final step of a calculation.
#[inline]
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a category markup: `price × (1 + rate)`.
///
/// The result is NOT rounded; rounding happens once at the end of the
/// enclosing price calculation.
#[inline]
pub fn apply_markup(price: Decimal, rate: Decimal) -> Decimal {
    price * (Decimal::ONE + rate)
}

/// Applies a fractional discount: `price × (1 − rate)`.
///
/// The result is NOT rounded; rounding happens once at the end of the
/// enclosing price calculation.
#[inline]
pub fn apply_discount(price: Decimal, rate: Decimal) -> Decimal {
    price * (Decimal::ONE - rate)
}

/// Extends a (already rounded) unit price over a quantity.
#[inline]
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price * Decimal::from(quantity)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_money_half_up() {
        assert_eq!(round_money(dec!(2.6312)), dec!(2.63));
        assert_eq!(round_money(dec!(2.635)), dec!(2.64));
        assert_eq!(round_money(dec!(2.625)), dec!(2.63));
        assert_eq!(round_money(dec!(2.00)), dec!(2.00));
    }

    #[test]
    fn test_apply_markup() {
        assert_eq!(apply_markup(dec!(2.99), dec!(0.10)), dec!(3.289));
        assert_eq!(apply_markup(dec!(5.00), dec!(0)), dec!(5.00));
    }

    #[test]
    fn test_apply_discount() {
        assert_eq!(apply_discount(dec!(3.289), dec!(0.20)), dec!(2.6312));
        assert_eq!(apply_discount(dec!(10.00), dec!(1)), dec!(0.00));
    }

    #[test]
    fn test_markup_then_discount_rounds_once() {
        // 2.99 × 1.10 × 0.80 = 2.6312 → 2.63 only after the final rounding
        let price = apply_discount(apply_markup(dec!(2.99), dec!(0.10)), dec!(0.20));
        assert_eq!(price, dec!(2.6312));
        assert_eq!(round_money(price), dec!(2.63));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(dec!(2.63), 2), dec!(5.26));
        assert_eq!(line_total(dec!(0.87), 3), dec!(2.61));
    }
}
