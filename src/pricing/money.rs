//! Money rounding
//!
//! The storefront displays whole currency units, so the single rounding
//! rule is half-up to zero decimal places. Intermediate arithmetic stays
//! at full `Decimal` precision; rounding is applied only where a figure
//! leaves the engine: displayed totals, coupon discounts, the payable
//! order total. Rounding per line and then summing would drift from the
//! sum-then-round figure across a multi-line cart.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::{PricingError, Result};

/// Display precision: whole currency units.
const DECIMAL_PLACES: u32 = 0;

/// Round a non-negative amount to whole units, half-up.
///
/// A negative amount is a caller bug, not a user-facing condition.
pub fn round_money(amount: Decimal) -> Result<Decimal> {
    ensure_amount(amount)?;
    Ok(round(amount))
}

/// Internal rounding for values already validated upstream.
pub(crate) fn round(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Reject negative monetary input.
pub(crate) fn ensure_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(PricingError::InvalidAmount(amount));
    }
    Ok(())
}

/// Reject percentages outside 0–100.
pub(crate) fn ensure_percentage(value: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(PricingError::InvalidAmount(value));
    }
    Ok(())
}
