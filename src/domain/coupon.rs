//! Coupon records and authoring-time validation
//!
//! The constraints here are the admin form's rules, checked once when a
//! coupon is created or edited. Apply-time evaluation lives in
//! [`crate::pricing::coupon`] and only re-clamps what could make a total
//! go negative; it does not repeat these checks.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Percentage discounts are capped at 80% at authoring time.
const MAX_PERCENTAGE: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    Percentage,
    Fixed,
}

/// A coupon as authored in the back office. `code` is case-sensitive.
/// `usage_limit` is enforced transactionally by the order-placement
/// service, not by this crate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Coupon {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub min_purchase_amount: Decimal,
    pub max_discount_amount: Decimal,
    pub expiration_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_limit: Option<u32>,
}

impl Coupon {
    /// Authoring-time validation, run when the admin form submits.
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), CouponError> {
        if self.code.trim().is_empty() {
            return Err(CouponError::EmptyCode);
        }
        if self.discount_value <= Decimal::ZERO {
            return Err(CouponError::NonPositiveValue);
        }
        if self.discount_type == DiscountType::Percentage && self.discount_value > MAX_PERCENTAGE {
            return Err(CouponError::PercentageOutOfRange(self.discount_value));
        }
        if self.min_purchase_amount <= Decimal::ZERO || self.max_discount_amount <= Decimal::ZERO {
            return Err(CouponError::NonPositiveValue);
        }
        if self.max_discount_amount > self.min_purchase_amount {
            return Err(CouponError::MaxExceedsMinPurchase);
        }
        if self.expiration_date <= now {
            return Err(CouponError::ExpiresInPast);
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CouponError {
    #[error("coupon code must not be empty")]
    EmptyCode,

    #[error("discount and amount fields must be greater than zero")]
    NonPositiveValue,

    #[error("percentage must be between 0 and 80, got {0}")]
    PercentageOutOfRange(Decimal),

    #[error("maximum discount cannot be greater than minimum purchase amount")]
    MaxExceedsMinPurchase,

    #[error("expiration date must be in the future")]
    ExpiresInPast,
}
