//! Cart pricing calculations.

use crate::cart::CartItem;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Sales tax applied to every order, in basis points (12%).
pub const TAX_RATE_BPS: i64 = 1_200;

/// Tax rate as a whole percentage, for labels.
pub const TAX_RATE_PERCENT: i64 = TAX_RATE_BPS / 100;

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Shipping cost. Always free.
    pub shipping: Money,
    /// subtotal + tax + shipping.
    pub total: Money,
    /// Per-line breakdown.
    pub lines: Vec<LinePricing>,
}

impl CartPricing {
    /// Price a list of cart items.
    pub fn for_items(items: &[CartItem], currency: Currency) -> Self {
        let lines: Vec<LinePricing> = items
            .iter()
            .map(|item| LinePricing {
                product_id: item.product.id.clone(),
                unit_price: item.product.price,
                quantity: item.quantity,
                total: item.line_total(),
            })
            .collect();

        let subtotal = Money::sum(lines.iter().map(|l| &l.total), currency);
        let tax = subtotal.basis_points(TAX_RATE_BPS);
        let shipping = Money::zero(currency);

        Self {
            subtotal,
            tax,
            shipping,
            total: subtotal + tax + shipping,
            lines,
        }
    }

    /// Whether shipping is free (it always is).
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    pub product_id: ProductId,
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price × quantity.
    pub total: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::Cart;
    use crate::catalog::Product;

    #[test]
    fn test_twelve_percent_tax() {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", Money::usd(1000), "Brand", "Cat"), 2).unwrap();
        cart.add(&Product::new("b", "B", Money::usd(2000), "Brand", "Cat"), 1).unwrap();

        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal.amount_cents, 4000);
        assert_eq!(pricing.tax.amount_cents, 480);
        assert_eq!(pricing.total.amount_cents, 4480);
        assert_eq!(pricing.total.display(), "$44.80");
        assert!(pricing.free_shipping());
        assert_eq!(pricing.lines.len(), 2);
        assert_eq!(pricing.lines[0].total.amount_cents, 2000);
    }

    #[test]
    fn test_subtotal_matches_cart_total() {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", Money::usd(1999), "Brand", "Cat"), 3).unwrap();
        let pricing = cart.pricing();
        assert_eq!(pricing.subtotal, cart.total());
        // 5997 * 0.12 = 719.64
        assert_eq!(pricing.tax.amount_cents, 720);
    }

    #[test]
    fn test_empty_cart_prices_to_zero() {
        let pricing = Cart::new().pricing();
        assert!(pricing.subtotal.is_zero());
        assert!(pricing.tax.is_zero());
        assert!(pricing.total.is_zero());
        assert!(pricing.lines.is_empty());
    }
}
