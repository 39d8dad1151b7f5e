//! Order summary captured at payment time.

use crate::cart::{Cart, CartItem};
use crate::checkout::{BillingAddress, CustomerDetails};
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Snapshot of a paid cart, read by the confirmation page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// Unique order identifier.
    pub id: OrderId,
    /// Items as they were in the cart.
    pub items: Vec<CartItem>,
    pub subtotal: Money,
    pub tax: Money,
    pub shipping: Money,
    /// Grand total charged.
    pub total: Money,
    pub shipping_address: CustomerDetails,
    /// Billing address, None when it is the shipping address.
    pub billing_address: Option<CustomerDetails>,
}

impl OrderSummary {
    /// Snapshot `cart` with its addresses.
    pub fn from_cart(cart: &Cart, shipping: CustomerDetails, billing: BillingAddress) -> Self {
        let pricing = cart.pricing();
        let billing_address = match billing {
            BillingAddress::SameAsShipping => None,
            BillingAddress::Separate(details) => Some(details),
        };

        Self {
            id: OrderId::generate(),
            items: cart.items().to_vec(),
            subtotal: pricing.subtotal,
            tax: pricing.tax,
            shipping: pricing.shipping,
            total: pricing.total,
            shipping_address: shipping,
            billing_address,
        }
    }

    /// Billing address only when it names a different recipient than shipping.
    pub fn distinct_billing_address(&self) -> Option<&CustomerDetails> {
        self.billing_address
            .as_ref()
            .filter(|b| !b.same_recipient(&self.shipping_address))
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;
    use crate::checkout::address::sample_details;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(&Product::new("a", "A", Money::usd(1000), "Brand", "Cat"), 2).unwrap();
        cart.add(&Product::new("b", "B", Money::usd(2000), "Brand", "Cat"), 1).unwrap();
        cart
    }

    #[test]
    fn test_snapshot_pricing() {
        let order = OrderSummary::from_cart(&cart(), sample_details(), BillingAddress::SameAsShipping);
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.item_count(), 3);
        assert_eq!(order.subtotal.amount_cents, 4000);
        assert_eq!(order.tax.amount_cents, 480);
        assert!(order.shipping.is_zero());
        assert_eq!(order.total.amount_cents, 4480);
    }

    #[test]
    fn test_same_as_shipping_has_no_billing() {
        let order = OrderSummary::from_cart(&cart(), sample_details(), BillingAddress::SameAsShipping);
        assert!(order.billing_address.is_none());
        assert!(order.distinct_billing_address().is_none());
    }

    #[test]
    fn test_distinct_billing_shown_only_when_recipient_differs() {
        let mut billing = sample_details();
        billing.city = "Cambridge".into();
        let order = OrderSummary::from_cart(
            &cart(),
            sample_details(),
            BillingAddress::Separate(billing.clone()),
        );
        assert!(order.distinct_billing_address().is_none());

        billing.full_name = "Charles Babbage".into();
        let order = OrderSummary::from_cart(
            &cart(),
            sample_details(),
            BillingAddress::Separate(billing),
        );
        assert_eq!(
            order.distinct_billing_address().map(|b| b.full_name.as_str()),
            Some("Charles Babbage")
        );
    }
}
