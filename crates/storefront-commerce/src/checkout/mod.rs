//! Checkout module.
//!
//! Customer details, simulated payment input and the order summary.

mod address;
mod order;
mod payment;

pub use address::{AddressField, CustomerDetails};
pub use order::OrderSummary;
pub use payment::{
    BillingAddress, CardDetails, PaymentReceipt, PaymentRequest, DEFAULT_PROCESSING_DELAY,
};

#[cfg(test)]
pub(crate) use address::sample_details;
#[cfg(test)]
pub(crate) use payment::sample_card;
