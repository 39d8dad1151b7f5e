//! Listing search module.
//!
//! Filters, sort options and facet counts, all evaluated in memory.

mod facets;
mod filter;
mod query;

pub use facets::{FacetCount, Facets};
pub use filter::{PriceRange, ProductFilter, StockFilter};
pub use query::{CatalogQuery, SortOption};
