//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog. Reference data; never mutated after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Description for the listing card.
    #[serde(default)]
    pub description: String,
    /// Current price.
    pub price: Money,
    /// Price before any sale.
    pub original_price: Money,
    /// Image URL or asset path.
    #[serde(default)]
    pub image_url: String,
    /// Whether the product can currently be shipped.
    #[serde(default = "default_true")]
    pub is_in_stock: bool,
    /// Brand name.
    pub brand: String,
    /// Category name.
    pub category: String,
    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f32,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: u32,
    /// Whether the product is flagged as on sale.
    #[serde(default)]
    pub is_sale: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    /// Create an in-stock product with no sale pricing.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        brand: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            original_price: price,
            image_url: String::new(),
            is_in_stock: true,
            brand: brand.into(),
            category: category.into(),
            rating: 0.0,
            reviews: 0,
            is_sale: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Mark as on sale, with `original` as the struck-through price.
    pub fn on_sale(mut self, original: Money) -> Self {
        self.original_price = original;
        self.is_sale = true;
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.is_in_stock = false;
        self
    }

    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.reviews = reviews;
        self
    }

    /// Percentage off the original price, rounded to a whole number.
    ///
    /// None unless the product is on sale and actually cheaper.
    pub fn discount_percent(&self) -> Option<u8> {
        if !self.is_sale || self.original_price.amount_cents <= self.price.amount_cents {
            return None;
        }
        let saved = self.original_price.amount_cents - self.price.amount_cents;
        let pct = (saved as f64 / self.original_price.amount_cents as f64 * 100.0).round();
        Some(pct as u8)
    }

    /// Rating as five star glyphs, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let full = self.rating.round() as usize;
        let full = full.min(5);
        format!("{}{}", "\u{2605}".repeat(full), "\u{2606}".repeat(5 - full))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_percent() {
        let p = Product::new("p1", "Lamp", Money::usd(7500), "Lumen", "Home")
            .on_sale(Money::usd(10000));
        assert_eq!(p.discount_percent(), Some(25));
    }

    #[test]
    fn test_no_discount_without_sale_flag() {
        let mut p = Product::new("p1", "Lamp", Money::usd(7500), "Lumen", "Home");
        p.original_price = Money::usd(10000);
        assert_eq!(p.discount_percent(), None);
    }

    #[test]
    fn test_stars() {
        let p = Product::new("p1", "Lamp", Money::usd(100), "Lumen", "Home").with_rating(3.6, 12);
        assert_eq!(p.stars(), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "id": "p9",
            "name": "Mug",
            "price": {"amount_cents": 1200, "currency": "USD"},
            "originalPrice": {"amount_cents": 1200, "currency": "USD"},
            "brand": "Clay Co",
            "category": "Kitchen"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(p.is_in_stock);
        assert!(!p.is_sale);
        assert_eq!(p.reviews, 0);
    }
}
