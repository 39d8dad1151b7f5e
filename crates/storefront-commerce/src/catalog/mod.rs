//! Product catalog module.
//!
//! The catalog is a fixed, in-memory list of products. Listing order is
//! the order products were loaded in.

mod product;
mod seed;

pub use product::Product;

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// An immutable product list, priced in a single currency.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "Vec<Product>", into = "Vec<Product>")]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    ///
    /// Every price and original price must share one currency.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        if let Some(first) = products.first() {
            let currency = first.price.currency;
            let mixed = products.iter().find(|p| {
                p.price.currency != currency || p.original_price.currency != currency
            });
            if let Some(product) = mixed {
                return Err(CommerceError::Validation(format!(
                    "product {} is not priced in {}",
                    product.id, currency
                )));
            }
        }
        Ok(Self { products })
    }

    /// The bundled demo catalog.
    pub fn demo() -> Self {
        Self {
            products: seed::demo_products(),
        }
    }

    /// Parse a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by ID, failing if it is unknown.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Currency of the listing (taken from the first product).
    pub fn currency(&self) -> Currency {
        self.products
            .first()
            .map(|p| p.price.currency)
            .unwrap_or_default()
    }

    /// Lowest and highest price, or zero/zero for an empty catalog.
    pub fn price_bounds(&self) -> (Money, Money) {
        let currency = self.currency();
        let min = self.products.iter().map(|p| p.price.amount_cents).min();
        let max = self.products.iter().map(|p| p.price.amount_cents).max();
        (
            Money::new(min.unwrap_or(0), currency),
            Money::new(max.unwrap_or(0), currency),
        )
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct brands in first-seen order.
    pub fn brands(&self) -> Vec<&str> {
        distinct(self.products.iter().map(|p| p.brand.as_str()))
    }
}

impl TryFrom<Vec<Product>> for Catalog {
    type Error = CommerceError;

    fn try_from(products: Vec<Product>) -> Result<Self, Self::Error> {
        Self::new(products)
    }
}

impl From<Catalog> for Vec<Product> {
    fn from(catalog: Catalog) -> Self {
        catalog.products
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("a", "Alpha", Money::usd(2500), "Acme", "Audio"),
            Product::new("b", "Beta", Money::usd(900), "Bolt", "Home"),
            Product::new("c", "Gamma", Money::usd(12000), "Acme", "Home"),
        ])
        .unwrap()
    }

    #[test]
    fn test_price_bounds() {
        let (min, max) = catalog().price_bounds();
        assert_eq!(min.amount_cents, 900);
        assert_eq!(max.amount_cents, 12000);
    }

    #[test]
    fn test_distinct_in_first_seen_order() {
        let c = catalog();
        assert_eq!(c.categories(), vec!["Audio", "Home"]);
        assert_eq!(c.brands(), vec!["Acme", "Bolt"]);
    }

    #[test]
    fn test_require_unknown_product() {
        let err = catalog().require(&ProductId::new("zzz")).unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("zzz".into()));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let c = catalog();
        let json = serde_json::to_string(&c).unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_mixed_currencies_are_rejected() {
        let json = r#"[
            {"id": "a", "name": "Alpha", "brand": "Acme", "category": "Audio",
             "price": {"amount_cents": 1000, "currency": "USD"},
             "originalPrice": {"amount_cents": 1000, "currency": "USD"}},
            {"id": "b", "name": "Beta", "brand": "Bolt", "category": "Home",
             "price": {"amount_cents": 2000, "currency": "EUR"},
             "originalPrice": {"amount_cents": 2000, "currency": "EUR"}}
        ]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert_eq!(err, CommerceError::Validation("product b is not priced in USD".into()));
    }

    #[test]
    fn test_original_price_currency_must_match() {
        let sale = Product::new("s", "Sale", Money::usd(900), "Acme", "Home")
            .on_sale(Money::new(1200, Currency::EUR));
        let err = Catalog::new(vec![
            Product::new("a", "Alpha", Money::usd(2500), "Acme", "Audio"),
            sale,
        ])
        .unwrap_err();
        assert!(matches!(err, CommerceError::Validation(_)));
    }

    #[test]
    fn test_demo_catalog_is_single_currency() {
        let demo = Catalog::demo();
        assert_eq!(Catalog::new(demo.products().to_vec()).unwrap(), demo);
    }

    #[test]
    fn test_demo_catalog_has_unique_ids() {
        let c = Catalog::demo();
        assert!(!c.is_empty());
        for p in c.products() {
            assert_eq!(c.products().iter().filter(|q| q.id == p.id).count(), 1);
        }
    }
}
