//! Catalog read models
//!
//! These mirror the records the catalog/offer read API returns. Field
//! renames keep the wire shape of the API payloads (`offerPrice`,
//! `offer.offer_value`). The API guarantees `offer_price <= price`; the
//! pricing engine does not re-validate that here. Inconsistent data is
//! handled defensively where it matters (savings are floored at zero).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item as read from the API, with offer metadata embedded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    /// Base price (MRP), shown struck through in the UI.
    pub price: Decimal,
    /// Already-discounted sticker price the item actually sells at.
    #[serde(rename = "offerPrice")]
    pub offer_price: Decimal,
    /// Extra percentage promotion layered on top of `offer_price`.
    /// Product-level or inherited from the category; the read API
    /// attaches at most one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer: Option<Offer>,
    /// Per-size availability. Stock is authoritative per variant.
    #[serde(default)]
    pub sizes: Vec<SizeVariant>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Offer {
    /// Percentage off, 0–100.
    pub offer_value: Decimal,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SizeVariant {
    pub size: String,
    pub stock: u32,
}

impl CatalogItem {
    pub fn size(&self, size: &str) -> Option<&SizeVariant> {
        self.sizes.iter().find(|v| v.size == size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_lookup() {
        let item = CatalogItem {
            id: "P1".into(),
            price: Decimal::from(1000),
            offer_price: Decimal::from(900),
            offer: None,
            sizes: vec![
                SizeVariant { size: "M".into(), stock: 4 },
                SizeVariant { size: "L".into(), stock: 0 },
            ],
        };
        assert_eq!(item.size("L").unwrap().stock, 0);
        assert!(item.size("XL").is_none());
    }
}
