//! Listing query: filter plus sort.

use crate::catalog::{Catalog, Product};
use crate::search::ProductFilter;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Default,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Default,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Default => "default",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Default => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
        }
    }

    fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Default => Ordering::Equal,
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOption::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
        }
    }
}

/// Filter and sort state of the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    pub filter: ProductFilter,
    pub sort: SortOption,
}

impl CatalogQuery {
    /// The unfiltered, unsorted query for `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            filter: ProductFilter::for_catalog(catalog),
            sort: SortOption::Default,
        }
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Matching products, sorted. Ties keep catalog order.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut products: Vec<&Product> = catalog
            .products()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect();
        products.sort_by(|a, b| self.sort.compare(a, b));
        products
    }

    /// True when anything differs from the defaults ("Clear all" is shown).
    pub fn is_active(&self, catalog: &Catalog) -> bool {
        *self != Self::new(catalog)
    }

    /// Back to defaults.
    pub fn reset(&mut self, catalog: &Catalog) {
        *self = Self::new(catalog);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("1", "banana", Money::usd(300), "Farm", "Fruit"),
            Product::new("2", "Apple", Money::usd(100), "Farm", "Fruit"),
            Product::new("3", "cherry", Money::usd(300), "Orchard", "Fruit"),
        ])
        .unwrap()
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_default_keeps_catalog_order() {
        let c = catalog();
        let q = CatalogQuery::new(&c);
        assert_eq!(names(&q.apply(&c)), vec!["banana", "Apple", "cherry"]);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let c = catalog();
        let q = CatalogQuery::new(&c).with_sort(SortOption::NameAsc);
        assert_eq!(names(&q.apply(&c)), vec!["Apple", "banana", "cherry"]);
        let q = CatalogQuery::new(&c).with_sort(SortOption::NameDesc);
        assert_eq!(names(&q.apply(&c)), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let c = catalog();
        let q = CatalogQuery::new(&c).with_sort(SortOption::PriceDesc);
        assert_eq!(names(&q.apply(&c)), vec!["banana", "cherry", "Apple"]);
    }

    #[test]
    fn test_is_active_and_reset() {
        let c = catalog();
        let mut q = CatalogQuery::new(&c);
        assert!(!q.is_active(&c));

        q.filter.toggle_brand("Orchard");
        assert!(q.is_active(&c));
        assert_eq!(names(&q.apply(&c)), vec!["cherry"]);

        q.reset(&c);
        assert!(!q.is_active(&c));

        q.sort = SortOption::PriceAsc;
        assert!(q.is_active(&c));
    }

    #[test]
    fn test_sort_option_parse() {
        assert_eq!(SortOption::from_str("price-asc"), Some(SortOption::PriceAsc));
        assert_eq!(SortOption::from_str("relevance"), None);
        for o in SortOption::ALL {
            assert_eq!(SortOption::from_str(o.as_str()), Some(o));
        }
    }
}
