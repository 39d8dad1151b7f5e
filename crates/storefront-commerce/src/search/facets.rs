//! Facet counts for the filter sidebar.

use crate::catalog::Catalog;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A facet value and the number of catalog products carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub value: String,
    pub count: usize,
}

/// Counts over the whole catalog, independent of the active filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub categories: Vec<FacetCount>,
    pub brands: Vec<FacetCount>,
    pub min_price: Money,
    pub max_price: Money,
}

impl Facets {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let products = catalog.products();
        let in_stock = products.iter().filter(|p| p.is_in_stock).count();
        let (min_price, max_price) = catalog.price_bounds();

        let categories = catalog
            .categories()
            .into_iter()
            .map(|c| FacetCount {
                value: c.to_string(),
                count: products.iter().filter(|p| p.category == c).count(),
            })
            .collect();
        let brands = catalog
            .brands()
            .into_iter()
            .map(|b| FacetCount {
                value: b.to_string(),
                count: products.iter().filter(|p| p.brand == b).count(),
            })
            .collect();

        Self {
            in_stock,
            out_of_stock: products.len() - in_stock,
            categories,
            brands,
            min_price,
            max_price,
        }
    }
}
