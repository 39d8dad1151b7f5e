//! Listing filters.

use crate::catalog::{Catalog, Product};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock availability filter. The two checkboxes are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StockFilter {
    #[default]
    Any,
    InStock,
    OutOfStock,
}

impl StockFilter {
    fn matches(&self, product: &Product) -> bool {
        match self {
            StockFilter::Any => true,
            StockFilter::InStock => product.is_in_stock,
            StockFilter::OutOfStock => !product.is_in_stock,
        }
    }
}

/// Inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: &Money) -> bool {
        price.amount_cents >= self.min.amount_cents && price.amount_cents <= self.max.amount_cents
    }
}

/// Filter state of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Stock availability.
    pub stock: StockFilter,
    /// Inclusive price range.
    pub price: PriceRange,
    /// Selected categories; empty means all.
    pub categories: Vec<String>,
    /// Selected brands; empty means all.
    pub brands: Vec<String>,
}

impl ProductFilter {
    /// A filter that matches every product in `catalog`.
    pub fn for_catalog(catalog: &Catalog) -> Self {
        let (min, max) = catalog.price_bounds();
        Self {
            stock: StockFilter::Any,
            price: PriceRange::new(min, max),
            categories: Vec::new(),
            brands: Vec::new(),
        }
    }

    /// Check or uncheck "In stock". Checking it unchecks "Out of stock".
    pub fn set_in_stock(&mut self, checked: bool) {
        if checked {
            self.stock = StockFilter::InStock;
        } else if self.stock == StockFilter::InStock {
            self.stock = StockFilter::Any;
        }
    }

    /// Check or uncheck "Out of stock". Checking it unchecks "In stock".
    pub fn set_out_of_stock(&mut self, checked: bool) {
        if checked {
            self.stock = StockFilter::OutOfStock;
        } else if self.stock == StockFilter::OutOfStock {
            self.stock = StockFilter::Any;
        }
    }

    /// Change the lower bound, keeping the upper.
    pub fn set_min_price(&mut self, min: Money) {
        self.price.min = min;
    }

    /// Change the upper bound, keeping the lower.
    pub fn set_max_price(&mut self, max: Money) {
        self.price.max = max;
    }

    /// Select the category if unselected, unselect it otherwise.
    pub fn toggle_category(&mut self, category: &str) {
        toggle(&mut self.categories, category);
    }

    /// Select the brand if unselected, unselect it otherwise.
    pub fn toggle_brand(&mut self, brand: &str) {
        toggle(&mut self.brands, brand);
    }

    /// Whether `product` passes every criterion.
    pub fn matches(&self, product: &Product) -> bool {
        self.stock.matches(product)
            && self.price.contains(&product.price)
            && (self.categories.is_empty() || self.categories.contains(&product.category))
            && (self.brands.is_empty() || self.brands.contains(&product.brand))
    }
}

fn toggle(values: &mut Vec<String>, value: &str) {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
    } else {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("a", "Alpha", Money::usd(1000), "Acme", "Audio"),
            Product::new("b", "Beta", Money::usd(2000), "Bolt", "Home").out_of_stock(),
            Product::new("c", "Gamma", Money::usd(3000), "Acme", "Home"),
        ])
        .unwrap()
    }

    fn ids(catalog: &Catalog, filter: &ProductFilter) -> Vec<String> {
        catalog
            .products()
            .iter()
            .filter(|p| filter.matches(p))
            .map(|p| p.id.to_string())
            .collect()
    }

    #[test]
    fn test_default_filter_matches_all() {
        let c = catalog();
        let f = ProductFilter::for_catalog(&c);
        assert_eq!(ids(&c, &f), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_stock_checkboxes_are_exclusive() {
        let c = catalog();
        let mut f = ProductFilter::for_catalog(&c);
        f.set_in_stock(true);
        assert_eq!(ids(&c, &f), vec!["a", "c"]);

        f.set_out_of_stock(true);
        assert_eq!(f.stock, StockFilter::OutOfStock);
        assert_eq!(ids(&c, &f), vec!["b"]);

        // unchecking the box that is not active changes nothing
        f.set_in_stock(false);
        assert_eq!(f.stock, StockFilter::OutOfStock);

        f.set_out_of_stock(false);
        assert_eq!(f.stock, StockFilter::Any);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let c = catalog();
        let mut f = ProductFilter::for_catalog(&c);
        f.set_min_price(Money::usd(2000));
        assert_eq!(ids(&c, &f), vec!["b", "c"]);
        f.set_max_price(Money::usd(2000));
        assert_eq!(ids(&c, &f), vec!["b"]);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let c = catalog();
        let mut f = ProductFilter::for_catalog(&c);
        f.toggle_category("Home");
        assert_eq!(ids(&c, &f), vec!["b", "c"]);
        f.toggle_brand("Acme");
        assert_eq!(ids(&c, &f), vec!["c"]);
        f.toggle_brand("Acme");
        f.toggle_category("Home");
        assert_eq!(f, ProductFilter::for_catalog(&c));
    }

    #[test]
    fn test_multiple_categories_are_ored() {
        let c = catalog();
        let mut f = ProductFilter::for_catalog(&c);
        f.toggle_category("Audio");
        f.toggle_category("Home");
        assert_eq!(ids(&c, &f).len(), 3);
    }
}
