//! Shopping cart module.
//!
//! Contains the cart store, cart items and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::{CartPricing, LinePricing, TAX_RATE_BPS, TAX_RATE_PERCENT};
