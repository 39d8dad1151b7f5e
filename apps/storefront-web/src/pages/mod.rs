//! Routed pages.

mod catalog;
mod checkout;
mod confirmation;
mod payment;

pub use catalog::CatalogPage;
pub use checkout::CheckoutPage;
pub use confirmation::ConfirmationPage;
pub use payment::PaymentPage;
