//! Cart and cart item types.

use crate::cart::CartPricing;
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A shopping cart: products keyed by ID, each with a quantity of at least 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Items in the order they were first added.
    items: Vec<CartItem>,
    /// Cart currency.
    currency: Currency,
}

impl Cart {
    /// Create an empty USD cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add `quantity` of `product`.
    ///
    /// An existing entry for the same product ID has its quantity increased;
    /// otherwise a new entry is appended. Adding zero does nothing. Products
    /// priced in another currency are rejected.
    pub fn add(&mut self, product: &Product, quantity: u32) -> Result<(), CommerceError> {
        if product.price.currency != self.currency {
            return Err(CommerceError::Validation(format!(
                "product {} is priced in {}, cart is in {}",
                product.id, product.price.currency, self.currency
            )));
        }
        if quantity == 0 {
            return Ok(());
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
            debug!(product_id = %product.id, quantity = existing.quantity, "cart item merged");
            return Ok(());
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
        debug!(product_id = %product.id, quantity, "cart item added");
        Ok(())
    }

    /// Add a single unit of `product`.
    pub fn add_one(&mut self, product: &Product) -> Result<(), CommerceError> {
        self.add(product, 1)
    }

    /// Remove an item. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            debug!(product_id = %product_id, "cart item removed");
        }
        removed
    }

    /// Set an item's quantity. Zero or less removes the item.
    ///
    /// Returns false if the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        match self.items.iter_mut().find(|i| &i.product.id == product_id) {
            Some(item) => {
                item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                debug!(product_id = %product_id, quantity = item.quantity, "cart quantity set");
                true
            }
            None => false,
        }
    }

    /// Increase an item's quantity by one.
    pub fn increment(&mut self, product_id: &ProductId) -> bool {
        match self.get(product_id) {
            Some(item) => {
                let next = i64::from(item.quantity) + 1;
                self.set_quantity(product_id, next)
            }
            None => false,
        }
    }

    /// Decrease an item's quantity by one, stopping at 1.
    pub fn decrement(&mut self, product_id: &ProductId) -> bool {
        match self.get(product_id) {
            Some(item) => {
                let next = (i64::from(item.quantity) - 1).max(1);
                self.set_quantity(product_id, next)
            }
            None => false,
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        debug!("cart cleared");
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get an item by product ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities (the navbar badge).
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of price × quantity over all items, before tax.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(self.currency), |acc, i| acc + i.line_total())
    }

    /// Subtotal, tax, shipping and grand total.
    pub fn pricing(&self) -> CartPricing {
        CartPricing::for_items(&self.items, self.currency)
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(i64::from(self.quantity))
    }
}
