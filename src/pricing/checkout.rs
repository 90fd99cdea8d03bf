//! Order-total composition and placement
//!
//! The checkout's final numbers. [`compose_total`] is the display-side
//! figure; [`place_order`] freezes the cart into an [`Order`] whose line
//! prices can never drift from later catalog changes. The snapshot and
//! the subtotal are computed in the same pass, so the sum of frozen line
//! totals reconciles with the order subtotal exactly; the single
//! boundary rounding lands on the payable total.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::cart::CartLine;
use crate::domain::coupon::Coupon;
use crate::domain::order::{Order, OrderLine};
use crate::pricing::coupon::apply_coupon;
use crate::pricing::line::{effective_unit_price, line_savings};
use crate::pricing::money::{ensure_amount, round};
use crate::{PricingError, Result};

/// `subtotal - coupon_discount + shipping_fee`, clamped at zero and
/// rounded to whole units.
pub fn compose_total(subtotal: Decimal, coupon_discount: Decimal, shipping_fee: Decimal) -> Result<Decimal> {
    ensure_amount(subtotal)?;
    ensure_amount(coupon_discount)?;
    ensure_amount(shipping_fee)?;
    let total = (subtotal - coupon_discount + shipping_fee).max(Decimal::ZERO);
    Ok(round(total))
}

/// Freeze a cart into a placed order.
///
/// Each line is stamped with its effective unit price and line total at
/// full precision; the order subtotal is their exact sum. The coupon is
/// evaluated against the rounded subtotal, the same figure the cart
/// displays, so eligibility cannot differ between display and
/// submission. If it no longer applies anyway (expired in between, say),
/// the order is placed without it. Stock decrement, usage-limit
/// accounting and payment belong to the order-placement service
/// consuming the returned order.
pub fn place_order(
    lines: &[CartLine],
    coupon: Option<&Coupon>,
    shipping_fee: Decimal,
    now: DateTime<Utc>,
) -> Result<Order> {
    if lines.is_empty() {
        return Err(PricingError::EmptyOrder);
    }
    ensure_amount(shipping_fee)?;

    let mut frozen = Vec::with_capacity(lines.len());
    let mut subtotal = Decimal::ZERO;
    let mut savings = Decimal::ZERO;
    for line in lines {
        let price = effective_unit_price(line.item())?;
        let total_product_price = price * Decimal::from(line.quantity());
        subtotal += total_product_price;
        savings += line_savings(line.item(), line.quantity())?;
        frozen.push(OrderLine {
            product_id: line.item().id.clone(),
            size: line.size().to_string(),
            quantity: line.quantity(),
            price,
            total_product_price,
        });
    }

    let (coupon_discount, coupon_code) = match coupon {
        Some(c) => {
            let outcome = apply_coupon(c, round(subtotal), now)?;
            if outcome.applies {
                (outcome.discount, Some(c.code.clone()))
            } else {
                tracing::warn!(code = %c.code, reason = ?outcome.reason, "coupon dropped at placement");
                (Decimal::ZERO, None)
            }
        }
        None => (Decimal::ZERO, None),
    };

    let total = compose_total(subtotal, coupon_discount, shipping_fee)?;
    let order = Order::place(
        frozen,
        subtotal,
        savings + coupon_discount,
        coupon_discount,
        coupon_code,
        shipping_fee,
        total,
        now,
    );
    tracing::info!(order_id = %order.id(), %total, "order priced");
    Ok(order)
}
