//! Storefront domain types and logic.
//!
//! Everything a storefront front end needs, held in memory:
//!
//! - **Catalog**: Products and the bundled demo catalog
//! - **Search**: Stock, price, category and brand filters; sorting; facets
//! - **Cart**: Cart store with quantities and 12% tax pricing
//! - **Checkout**: Customer details, simulated card payment, order summary
//! - **Session**: Page guards and the checkout → payment → confirmation flow
//!
//! # Example
//!
//! ```rust
//! use storefront_commerce::prelude::*;
//!
//! let mut session = StorefrontSession::new(Catalog::demo());
//! session.add_to_cart(&ProductId::new("2"), 2).unwrap();
//!
//! let pricing = session.cart().pricing();
//! assert_eq!(pricing.tax, pricing.subtotal.basis_points(TAX_RATE_BPS));
//!
//! // Payment needs shipping details first.
//! assert_eq!(session.navigate(Page::Payment).page, Page::Checkout);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod session;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Product};

    // Search
    pub use crate::search::{
        CatalogQuery, FacetCount, Facets, PriceRange, ProductFilter, SortOption, StockFilter,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, LinePricing, TAX_RATE_BPS, TAX_RATE_PERCENT};

    // Checkout
    pub use crate::checkout::{
        AddressField, BillingAddress, CardDetails, CustomerDetails, OrderSummary, PaymentReceipt,
        PaymentRequest, DEFAULT_PROCESSING_DELAY,
    };

    // Session
    pub use crate::session::{Access, Landing, Notice, Page, StorefrontSession};
}
