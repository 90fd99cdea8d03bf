//! Domain events
use rust_decimal::Decimal;

#[derive(Clone, Debug)]
pub enum DomainEvent {
    Order(OrderEvent),
}

#[derive(Clone, Debug)]
pub enum OrderEvent {
    Placed { order_id: String, total: Decimal },
    CouponApplied { order_id: String, code: String, discount: Decimal },
}
