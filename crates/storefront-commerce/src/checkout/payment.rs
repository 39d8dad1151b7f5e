//! Simulated payment input.
//!
//! Nothing here talks to a payment processor. Card fields are validated
//! for shape, logged masked, and dropped.

use crate::checkout::CustomerDetails;
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// How long "processing payment" takes before confirmation is shown.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Card fields from the payment form.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: String,
    pub card_name: String,
    /// `MM/YY` or `MMYY`.
    pub expiry_date: String,
    pub cvv: String,
}

impl CardDetails {
    /// Card number with spaces removed.
    fn digits(&self) -> String {
        self.card_number.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Card number with all but the last four digits hidden.
    pub fn masked_number(&self) -> String {
        let digits = self.digits();
        let tail: String = digits
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("**** **** **** {}", tail)
    }

    /// Check each field's format.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let digits = self.digits();
        if !(13..=16).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::Validation(
                "Card number should be 13 to 16 digits".into(),
            ));
        }

        if self.card_name.trim().is_empty() {
            return Err(CommerceError::Validation("Name on card is required".into()));
        }

        if !valid_expiry(self.expiry_date.trim()) {
            return Err(CommerceError::Validation(
                "Expiry date must be in MM/YY format".into(),
            ));
        }

        let cvv = self.cvv.trim();
        if !(3..=4).contains(&cvv.len()) || !cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::Validation("CVV must be 3 or 4 digits".into()));
        }

        Ok(())
    }
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("card_number", &self.masked_number())
            .field("card_name", &self.card_name)
            .field("expiry_date", &self.expiry_date)
            .field("cvv", &"***")
            .finish()
    }
}

/// Month 01-12, optional slash, two digit year.
fn valid_expiry(s: &str) -> bool {
    let (month, year) = match s.split_once('/') {
        Some((m, y)) => (m, y),
        None if s.len() == 4 && s.is_ascii() => s.split_at(2),
        None => return false,
    };
    let two_digits = |v: &str| v.len() == 2 && v.chars().all(|c| c.is_ascii_digit());
    if !two_digits(month) || !two_digits(year) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(1..=12))
}

/// Where the bill goes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "address")]
pub enum BillingAddress {
    #[default]
    SameAsShipping,
    Separate(CustomerDetails),
}

/// Everything the payment form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRequest {
    pub card: CardDetails,
    pub billing: BillingAddress,
}

impl PaymentRequest {
    pub fn new(card: CardDetails, billing: BillingAddress) -> Self {
        Self { card, billing }
    }

    /// Validate card fields and any separate billing address.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.card.validate()?;
        if let BillingAddress::Separate(details) = &self.billing {
            details.validate()?;
        }
        Ok(())
    }
}

/// Result of an accepted payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub order_id: OrderId,
    /// Amount "charged".
    pub total: Money,
    /// Wait this long, then navigate to the confirmation page.
    pub delay: Duration,
}

#[cfg(test)]
pub(crate) fn sample_card() -> CardDetails {
    CardDetails {
        card_number: "4242 4242 4242 4242".into(),
        card_name: "A LOVELACE".into(),
        expiry_date: "09/29".into(),
        cvv: "123".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_card() {
        assert!(sample_card().validate().is_ok());
    }

    #[test]
    fn test_card_number_length() {
        let mut card = sample_card();
        card.card_number = "424242424242".into();
        assert!(card.validate().is_err());
        card.card_number = "4242424242424".into();
        assert!(card.validate().is_ok());
        card.card_number = "42424242424242424".into();
        assert!(card.validate().is_err());
        card.card_number = "4242x24242424242".into();
        assert!(card.validate().is_err());
    }

    #[test]
    fn test_expiry_formats() {
        assert!(valid_expiry("01/30"));
        assert!(valid_expiry("1230"));
        assert!(!valid_expiry("13/30"));
        assert!(!valid_expiry("00/30"));
        assert!(!valid_expiry("1/30"));
        assert!(!valid_expiry("12/2030"));
    }

    #[test]
    fn test_cvv() {
        let mut card = sample_card();
        card.cvv = "12".into();
        assert!(card.validate().is_err());
        card.cvv = "1234".into();
        assert!(card.validate().is_ok());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let out = format!("{:?}", sample_card());
        assert!(out.contains("**** **** **** 4242"));
        assert!(!out.contains("4242 4242 4242 4242"));
        assert!(!out.contains("123"));
    }

    #[test]
    fn test_separate_billing_is_validated() {
        let req = PaymentRequest::new(
            sample_card(),
            BillingAddress::Separate(CustomerDetails::default()),
        );
        assert!(matches!(req.validate(), Err(CommerceError::Validation(_))));
    }
}
