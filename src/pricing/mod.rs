//! Pricing functions: pure, synchronous, no hidden state.
pub mod cart;
pub mod checkout;
pub mod coupon;
pub mod line;
pub mod money;

pub use cart::{aggregate, CartTotals};
pub use checkout::{compose_total, place_order};
pub use coupon::{apply_coupon, CouponOutcome, CouponRejection};
pub use line::{effective_unit_price, line_savings, line_total};
pub use money::round_money;
