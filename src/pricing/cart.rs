//! Cart aggregation
//!
//! Sums line totals and line savings across a cart at full precision and
//! rounds each figure once at the end. Pure: same lines in, same totals
//! out, in any order.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::cart::CartLine;
use crate::pricing::line::{line_savings, line_total};
use crate::pricing::money::round;
use crate::Result;

/// Display totals for a cart: what the shopper pays for the items and
/// what they saved against base prices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub total_savings: Decimal,
}

/// Sum first, round last.
pub fn aggregate(lines: &[CartLine]) -> Result<CartTotals> {
    let mut subtotal = Decimal::ZERO;
    let mut total_savings = Decimal::ZERO;
    for line in lines {
        subtotal += line_total(line.item(), line.quantity())?;
        total_savings += line_savings(line.item(), line.quantity())?;
    }
    Ok(CartTotals { subtotal: round(subtotal), total_savings: round(total_savings) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{CatalogItem, Offer, SizeVariant};

    fn line(id: &str, price: i64, offer_price: i64, offer_value: Option<i64>, qty: u32) -> CartLine {
        let item = CatalogItem {
            id: id.into(),
            price: Decimal::from(price),
            offer_price: Decimal::from(offer_price),
            offer: offer_value.map(|v| Offer { offer_value: Decimal::from(v) }),
            sizes: vec![SizeVariant { size: "M".into(), stock: 99 }],
        };
        CartLine::new(item, "M", qty).unwrap()
    }

    #[test]
    fn test_empty_cart_is_zero() {
        assert_eq!(aggregate(&[]).unwrap(), CartTotals::default());
    }

    #[test]
    fn test_mixed_cart() {
        let lines = vec![
            line("P1", 1000, 900, Some(10), 2), // 1620, saved 380
            line("P2", 500, 450, None, 1),      // 450, saved 50
        ];
        let totals = aggregate(&lines).unwrap();
        assert_eq!(totals.subtotal, Decimal::from(2070));
        assert_eq!(totals.total_savings, Decimal::from(430));
    }

    #[test]
    fn test_order_independent() {
        let a = line("P1", 1200, 999, Some(15), 3);
        let b = line("P2", 700, 649, None, 2);
        let c = line("P3", 250, 199, Some(5), 1);
        let forward = aggregate(&[a.clone(), b.clone(), c.clone()]).unwrap();
        let reversed = aggregate(&[c, b, a]).unwrap();
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_sum_first_round_last() {
        // Each line prices at 825 - 2% = 808.50. Summed first the cart is
        // 1617 exactly; rounding per line would give 809 + 809 = 1618.
        let lines = vec![
            line("P1", 900, 825, Some(2), 1),
            line("P2", 900, 825, Some(2), 1),
        ];
        let totals = aggregate(&lines).unwrap();
        assert_eq!(totals.subtotal, Decimal::from(1617));
    }

    #[test]
    fn test_idempotent() {
        let lines = vec![line("P1", 1000, 900, Some(10), 2)];
        assert_eq!(aggregate(&lines).unwrap(), aggregate(&lines).unwrap());
    }
}
