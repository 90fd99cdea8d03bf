//! Coupon evaluation
//!
//! Stateless eligibility and amount computation. "Coupon doesn't apply"
//! is an expected outcome the checkout renders as feedback, so it comes
//! back as a value, not an error. Usage-limit decrementing and
//! one-coupon-per-order enforcement need the shared counters and belong
//! to the order-placement service.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::coupon::{Coupon, DiscountType};
use crate::pricing::money::{ensure_amount, round};
use crate::Result;

/// Why an otherwise well-formed coupon did not apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponRejection {
    Expired,
    BelowMinimum,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CouponOutcome {
    pub applies: bool,
    /// Zero unless `applies`.
    pub discount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CouponRejection>,
}

impl CouponOutcome {
    fn rejected(reason: CouponRejection) -> Self {
        Self { applies: false, discount: Decimal::ZERO, reason: Some(reason) }
    }

    fn applied(discount: Decimal) -> Self {
        Self { applies: true, discount, reason: None }
    }
}

/// Evaluate a coupon against a subtotal.
///
/// The computed discount is capped at the coupon's
/// `max_discount_amount` and then at the subtotal itself, so an applied
/// coupon can never drive a total negative, and is rounded to whole
/// units. `now` is explicit to keep evaluation deterministic.
///
/// A coupon record with negative numeric fields is malformed and fails
/// fast; a well-formed coupon that simply does not apply comes back as
/// a rejection value.
pub fn apply_coupon(coupon: &Coupon, subtotal: Decimal, now: DateTime<Utc>) -> Result<CouponOutcome> {
    ensure_amount(subtotal)?;
    ensure_amount(coupon.discount_value)?;
    ensure_amount(coupon.min_purchase_amount)?;
    ensure_amount(coupon.max_discount_amount)?;

    if now > coupon.expiration_date {
        tracing::debug!(code = %coupon.code, "coupon expired");
        return Ok(CouponOutcome::rejected(CouponRejection::Expired));
    }
    if subtotal < coupon.min_purchase_amount {
        tracing::debug!(
            code = %coupon.code,
            %subtotal,
            minimum = %coupon.min_purchase_amount,
            "subtotal below coupon minimum"
        );
        return Ok(CouponOutcome::rejected(CouponRejection::BelowMinimum));
    }

    let raw = match coupon.discount_type {
        DiscountType::Percentage => subtotal * coupon.discount_value / Decimal::ONE_HUNDRED,
        DiscountType::Fixed => coupon.discount_value,
    };
    let discount = raw.min(coupon.max_discount_amount).min(subtotal);
    Ok(CouponOutcome::applied(round(discount)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coupon(discount_type: DiscountType, value: i64, min: i64, max: i64) -> Coupon {
        Coupon {
            code: "SAVE".into(),
            description: None,
            discount_type,
            discount_value: Decimal::from(value),
            min_purchase_amount: Decimal::from(min),
            max_discount_amount: Decimal::from(max),
            expiration_date: Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            usage_limit: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_minimum_purchase_boundary() {
        let c = coupon(DiscountType::Fixed, 50, 500, 100);
        let below = apply_coupon(&c, Decimal::new(49999, 2), now()).unwrap(); // 499.99
        assert!(!below.applies);
        assert_eq!(below.reason, Some(CouponRejection::BelowMinimum));
        assert_eq!(below.discount, Decimal::ZERO);

        let at = apply_coupon(&c, Decimal::from(500), now()).unwrap();
        assert!(at.applies);
        assert_eq!(at.discount, Decimal::from(50));
    }

    #[test]
    fn test_expired_never_applies() {
        let mut c = coupon(DiscountType::Percentage, 20, 100, 1000);
        c.expiration_date = Utc.with_ymd_and_hms(2025, 5, 31, 23, 59, 59).unwrap();
        let out = apply_coupon(&c, Decimal::from(100_000), now()).unwrap();
        assert!(!out.applies);
        assert_eq!(out.reason, Some(CouponRejection::Expired));
    }

    #[test]
    fn test_not_expired_on_the_expiry_instant() {
        // Invalid strictly after the expiration date.
        let mut c = coupon(DiscountType::Fixed, 50, 100, 100);
        c.expiration_date = now();
        assert!(apply_coupon(&c, Decimal::from(200), now()).unwrap().applies);
    }

    #[test]
    fn test_percentage_capped_at_max_discount() {
        // 20% of 2000 = 400 raw, capped at 300
        let c = coupon(DiscountType::Percentage, 20, 1000, 300);
        let out = apply_coupon(&c, Decimal::from(2000), now()).unwrap();
        assert!(out.applies);
        assert_eq!(out.discount, Decimal::from(300));
    }

    #[test]
    fn test_fixed_discount_under_cap() {
        let c = coupon(DiscountType::Fixed, 300, 1000, 500);
        let out = apply_coupon(&c, Decimal::from(2000), now()).unwrap();
        assert_eq!(out.discount, Decimal::from(300));
    }

    #[test]
    fn test_discount_never_exceeds_subtotal() {
        // Legacy coupon authored before the max<=min form rule: fixed 800
        // off a 600 subtotal with min 500 would go negative without the
        // subtotal clamp.
        let c = coupon(DiscountType::Fixed, 800, 500, 900);
        let out = apply_coupon(&c, Decimal::from(600), now()).unwrap();
        assert_eq!(out.discount, Decimal::from(600));
    }

    #[test]
    fn test_fractional_discount_rounded() {
        // 15% of 1001 = 150.15 -> 150
        let c = coupon(DiscountType::Percentage, 15, 1000, 500);
        let out = apply_coupon(&c, Decimal::from(1001), now()).unwrap();
        assert_eq!(out.discount, Decimal::from(150));
    }

    #[test]
    fn test_negative_subtotal_is_an_error() {
        let c = coupon(DiscountType::Fixed, 50, 100, 100);
        assert!(apply_coupon(&c, Decimal::from(-1), now()).is_err());
    }

    #[test]
    fn test_malformed_coupon_fails_fast() {
        use crate::PricingError;

        // A negative discount must never flow through as an applied
        // negative amount.
        let c = coupon(DiscountType::Fixed, -50, 500, 100);
        assert_eq!(
            apply_coupon(&c, Decimal::from(2000), now()).unwrap_err(),
            PricingError::InvalidAmount(Decimal::from(-50))
        );

        let c = coupon(DiscountType::Percentage, 10, -500, 100);
        assert!(apply_coupon(&c, Decimal::from(2000), now()).is_err());

        let c = coupon(DiscountType::Percentage, 10, 500, -100);
        assert!(apply_coupon(&c, Decimal::from(2000), now()).is_err());
    }
}
