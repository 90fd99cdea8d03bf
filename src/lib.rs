//! Storefront Pricing Engine
//!
//! Pure pricing library shared by the storefront's cart, checkout,
//! wishlist and product-detail surfaces.
//!
//! ## Features
//! - Line-item pricing with layered percentage offers
//! - Cart subtotal and "you saved" aggregation
//! - Coupon eligibility and capped discount evaluation
//! - Order-total composition with frozen line snapshots
//!
//! All monetary arithmetic is done in [`rust_decimal::Decimal`] at full
//! precision; rounding to whole currency units happens once, at the
//! display/submission boundary. The library holds no state and performs
//! no I/O; cart contents, coupon records and the clock are passed in by
//! the caller on every call.

use rust_decimal::Decimal;
use thiserror::Error;

pub mod domain;
pub mod pricing;

pub use domain::cart::{CartError, CartLine};
pub use domain::catalog::{CatalogItem, Offer, SizeVariant};
pub use domain::coupon::{Coupon, CouponError, DiscountType};
pub use domain::events::{DomainEvent, OrderEvent};
pub use domain::order::{Order, OrderLine};
pub use pricing::cart::{aggregate, CartTotals};
pub use pricing::checkout::{compose_total, place_order};
pub use pricing::coupon::{apply_coupon, CouponOutcome, CouponRejection};
pub use pricing::line::{effective_unit_price, line_savings, line_total};
pub use pricing::money::round_money;

// =============================================================================
// Error Types
// =============================================================================

/// Programmer-error inputs to the pricing functions.
///
/// Business-rule non-applicability (expired coupon, subtotal below the
/// minimum) is NOT an error; it comes back as a [`CouponOutcome`] for
/// the caller to render as user feedback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Negative amount, or a percentage outside 0–100, fed into a
    /// pricing function.
    #[error("invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Zero quantity. Negative and fractional quantities are ruled out
    /// by the `u32` type.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Order placement with no lines.
    #[error("order must contain at least one line")]
    EmptyOrder,
}

pub type Result<T> = std::result::Result<T, PricingError>;
