//! Commerce error types.

use crate::session::Page;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// The cart has no items.
    #[error("Your cart is empty! Please add items to your cart before proceeding to payment.")]
    EmptyCart,

    /// Payment was attempted before shipping details were captured.
    #[error("Shipping address missing")]
    MissingShippingDetails,

    /// Confirmation was requested without a completed order.
    #[error("No order to confirm")]
    MissingOrder,

    /// Form input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CommerceError {
    /// The page a front end should send the user to when this error
    /// interrupts the checkout flow.
    pub fn redirect(&self) -> Option<Page> {
        match self {
            CommerceError::EmptyCart | CommerceError::MissingShippingDetails => {
                Some(Page::Checkout)
            }
            CommerceError::MissingOrder => Some(Page::Catalog),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_errors_redirect() {
        assert_eq!(CommerceError::EmptyCart.redirect(), Some(Page::Checkout));
        assert_eq!(
            CommerceError::MissingShippingDetails.redirect(),
            Some(Page::Checkout)
        );
        assert_eq!(CommerceError::MissingOrder.redirect(), Some(Page::Catalog));
        assert_eq!(CommerceError::Validation("cvv".into()).redirect(), None);
    }
}
