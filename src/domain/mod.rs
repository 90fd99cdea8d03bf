//! Domain model: catalog items, cart lines, coupons, placed orders.
pub mod cart;
pub mod catalog;
pub mod coupon;
pub mod events;
pub mod order;

pub use cart::{CartError, CartLine};
pub use catalog::{CatalogItem, Offer, SizeVariant};
pub use coupon::{Coupon, CouponError, DiscountType};
pub use events::{DomainEvent, OrderEvent};
pub use order::{Order, OrderLine};
