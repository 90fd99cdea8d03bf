//! Placed orders
//!
//! An [`Order`] is created once, at checkout submission, by
//! [`crate::pricing::checkout::place_order`]. Its pricing fields are
//! frozen at that point: each line carries the effective unit price and
//! line total captured at placement, immune to later catalog changes.
//! Fulfillment/payment status lives with the order-placement service and
//! mutates independently of these figures.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::events::{DomainEvent, OrderEvent};

/// One line of a placed order, with the price frozen at placement time.
#[derive(Clone, Debug, Serialize)]
pub struct OrderLine {
    pub product_id: String,
    pub size: String,
    pub quantity: u32,
    /// Effective unit price at placement, full precision.
    pub price: Decimal,
    /// `price * quantity`, full precision. The order subtotal is exactly
    /// the sum of these.
    #[serde(rename = "totalProductPrice")]
    pub total_product_price: Decimal,
}

#[derive(Clone, Debug, Serialize)]
pub struct Order {
    id: String,
    order_items: Vec<OrderLine>,
    subtotal: Decimal,
    /// Item-level savings plus the coupon discount.
    total_discount: Decimal,
    coupon_discount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    coupon: Option<String>,
    shipping_fee: Decimal,
    /// Final payable amount, rounded to whole units and clamped at zero.
    total_price_with_discount: Decimal,
    placed_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn place(
        lines: Vec<OrderLine>,
        subtotal: Decimal,
        total_discount: Decimal,
        coupon_discount: Decimal,
        coupon: Option<String>,
        shipping_fee: Decimal,
        total_price_with_discount: Decimal,
        placed_at: DateTime<Utc>,
    ) -> Self {
        let id = Uuid::new_v4().to_string();
        let mut order = Self {
            id: id.clone(),
            order_items: lines,
            subtotal,
            total_discount,
            coupon_discount,
            coupon: coupon.clone(),
            shipping_fee,
            total_price_with_discount,
            placed_at,
            events: vec![],
        };
        if let Some(code) = coupon {
            order.raise_event(DomainEvent::Order(OrderEvent::CouponApplied {
                order_id: id.clone(),
                code,
                discount: coupon_discount,
            }));
        }
        order.raise_event(DomainEvent::Order(OrderEvent::Placed {
            order_id: id,
            total: total_price_with_discount,
        }));
        order
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.order_items
    }

    pub fn subtotal(&self) -> Decimal {
        self.subtotal
    }

    pub fn total_discount(&self) -> Decimal {
        self.total_discount
    }

    pub fn coupon_discount(&self) -> Decimal {
        self.coupon_discount
    }

    pub fn coupon(&self) -> Option<&str> {
        self.coupon.as_deref()
    }

    pub fn shipping_fee(&self) -> Decimal {
        self.shipping_fee
    }

    pub fn total_price_with_discount(&self) -> Decimal {
        self.total_price_with_discount
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, e: DomainEvent) {
        self.events.push(e);
    }
}
