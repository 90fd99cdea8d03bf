//! Cart lines
//!
//! A cart line ties a catalog snapshot to a chosen size and quantity.
//! The pricing functions assume their preconditions were discharged at
//! construction time, so `CartLine::new` is the gate: quantity nonzero,
//! size known, quantity within that size's stock. Stock is a mutable
//! external resource, so the check here is against the snapshot the
//! caller just read, not a reservation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::CatalogItem;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
    item: CatalogItem,
    size: String,
    quantity: u32,
}

impl CartLine {
    pub fn new(item: CatalogItem, size: impl Into<String>, quantity: u32) -> Result<Self, CartError> {
        let size = size.into();
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        let variant = item.size(&size).ok_or_else(|| CartError::UnknownSize(size.clone()))?;
        if quantity > variant.stock {
            return Err(CartError::StockExceeded { requested: quantity, available: variant.stock });
        }
        Ok(Self { item, size, quantity })
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Quantity steppers re-validate against the snapshot's stock.
    pub fn set_quantity(&mut self, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        // Size was validated at construction.
        let available = self.item.size(&self.size).map(|v| v.stock).unwrap_or(0);
        if quantity > available {
            return Err(CartError::StockExceeded { requested: quantity, available });
        }
        self.quantity = quantity;
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be at least 1")]
    InvalidQuantity,

    #[error("unknown size: {0}")]
    UnknownSize(String),

    #[error("requested {requested} but only {available} in stock")]
    StockExceeded { requested: u32, available: u32 },
}
