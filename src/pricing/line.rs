//! Line-item pricing
//!
//! The same formula the storefront shows everywhere: the item sells at
//! `offer_price`, and an attached offer takes a further percentage off
//! that. Results are full precision; they are combined into totals and
//! rounded once at the boundary, never per line.

use rust_decimal::Decimal;

use crate::domain::catalog::CatalogItem;
use crate::pricing::money::{ensure_amount, ensure_percentage};
use crate::{PricingError, Result};

/// Effective unit price: `offer_price` minus the attached offer
/// percentage, unrounded.
pub fn effective_unit_price(item: &CatalogItem) -> Result<Decimal> {
    ensure_amount(item.price)?;
    ensure_amount(item.offer_price)?;
    let off = match &item.offer {
        Some(offer) => {
            ensure_percentage(offer.offer_value)?;
            item.offer_price * offer.offer_value / Decimal::ONE_HUNDRED
        }
        None => Decimal::ZERO,
    };
    Ok(item.offer_price - off)
}

/// `effective_unit_price * quantity`, unrounded.
///
/// Callers must have checked the quantity against the selected size's
/// stock; that precondition is discharged by
/// [`crate::domain::cart::CartLine::new`].
pub fn line_total(item: &CatalogItem, quantity: u32) -> Result<Decimal> {
    ensure_quantity(quantity)?;
    Ok(effective_unit_price(item)? * Decimal::from(quantity))
}

/// What the shopper saved against the base price:
/// `(price - effective_unit_price) * quantity`, floored at zero when the
/// catalog data is inconsistent (`offer_price > price`).
pub fn line_savings(item: &CatalogItem, quantity: u32) -> Result<Decimal> {
    ensure_quantity(quantity)?;
    let per_unit = item.price - effective_unit_price(item)?;
    Ok((per_unit * Decimal::from(quantity)).max(Decimal::ZERO))
}

fn ensure_quantity(quantity: u32) -> Result<()> {
    if quantity == 0 {
        return Err(PricingError::InvalidQuantity(quantity));
    }
    Ok(())
}
