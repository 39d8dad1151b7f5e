//! Customer details (shipping or billing address).

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Name, email and postal address of a customer.
///
/// The same shape serves as shipping and billing address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub full_name: String,
    pub email: String,
    pub address_line1: String,
    /// Apartment, suite, etc. Empty when unused.
    #[serde(default)]
    pub address_line2: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// One input of the address form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressField {
    FullName,
    Email,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
    Country,
}

impl AddressField {
    /// Form order.
    pub const ALL: [AddressField; 8] = [
        AddressField::FullName,
        AddressField::Email,
        AddressField::AddressLine1,
        AddressField::AddressLine2,
        AddressField::City,
        AddressField::State,
        AddressField::ZipCode,
        AddressField::Country,
    ];

    /// Form input name, matching the serialized key.
    pub fn name(&self) -> &'static str {
        match self {
            AddressField::FullName => "fullName",
            AddressField::Email => "email",
            AddressField::AddressLine1 => "addressLine1",
            AddressField::AddressLine2 => "addressLine2",
            AddressField::City => "city",
            AddressField::State => "state",
            AddressField::ZipCode => "zipCode",
            AddressField::Country => "country",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AddressField::FullName => "Full Name",
            AddressField::Email => "Email",
            AddressField::AddressLine1 => "Address Line 1",
            AddressField::AddressLine2 => "Address Line 2 (Optional)",
            AddressField::City => "City",
            AddressField::State => "State / Province",
            AddressField::ZipCode => "ZIP / Postal Code",
            AddressField::Country => "Country",
        }
    }

    pub fn required(&self) -> bool {
        !matches!(self, AddressField::AddressLine2)
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            AddressField::Email => "email",
            _ => "text",
        }
    }
}

impl CustomerDetails {
    /// Read a field by form input.
    pub fn field(&self, field: AddressField) -> &str {
        match field {
            AddressField::FullName => &self.full_name,
            AddressField::Email => &self.email,
            AddressField::AddressLine1 => &self.address_line1,
            AddressField::AddressLine2 => &self.address_line2,
            AddressField::City => &self.city,
            AddressField::State => &self.state,
            AddressField::ZipCode => &self.zip_code,
            AddressField::Country => &self.country,
        }
    }

    /// Write a field by form input.
    pub fn set_field(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::FullName => &mut self.full_name,
            AddressField::Email => &mut self.email,
            AddressField::AddressLine1 => &mut self.address_line1,
            AddressField::AddressLine2 => &mut self.address_line2,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::ZipCode => &mut self.zip_code,
            AddressField::Country => &mut self.country,
        };
        *slot = value.into();
    }

    /// Second address line, if filled in.
    pub fn address_line2(&self) -> Option<&str> {
        let line = self.address_line2.trim();
        (!line.is_empty()).then_some(line)
    }

    /// Required fields that are blank.
    pub fn missing_fields(&self) -> Vec<AddressField> {
        AddressField::ALL
            .into_iter()
            .filter(|f| f.required() && self.field(*f).trim().is_empty())
            .collect()
    }

    /// Check required fields and the email shape.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let labels: Vec<&str> = missing.iter().map(|f| f.label()).collect();
            return Err(CommerceError::Validation(format!(
                "missing {}",
                labels.join(", ")
            )));
        }

        let email = self.email.trim();
        let valid_email = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid_email {
            return Err(CommerceError::Validation(format!(
                "invalid email address: {}",
                email
            )));
        }

        Ok(())
    }

    /// "City, State Zip"
    pub fn city_line(&self) -> String {
        format!("{}, {} {}", self.city, self.state, self.zip_code)
    }

    /// Postal label, one line per entry.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.full_name.clone(), self.address_line1.clone()];
        if let Some(line2) = self.address_line2() {
            lines.push(line2.to_string());
        }
        lines.push(self.city_line());
        lines.push(self.country.clone());
        lines
    }

    /// Whether this and `other` would print as the same recipient.
    ///
    /// Compares name, first address line and email only.
    pub fn same_recipient(&self, other: &CustomerDetails) -> bool {
        self.full_name == other.full_name
            && self.address_line1 == other.address_line1
            && self.email == other.email
    }
}

#[cfg(test)]
pub(crate) fn sample_details() -> CustomerDetails {
    CustomerDetails {
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        address_line1: "12 Analytical Row".into(),
        address_line2: String::new(),
        city: "London".into(),
        state: "Greater London".into(),
        zip_code: "NW1 6XE".into(),
        country: "United Kingdom".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_details() {
        assert!(sample_details().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let mut d = sample_details();
        d.city.clear();
        d.full_name = "   ".into();
        assert_eq!(
            d.missing_fields(),
            vec![AddressField::FullName, AddressField::City]
        );
        let err = d.validate().unwrap_err();
        assert_eq!(
            err,
            CommerceError::Validation("missing Full Name, City".into())
        );
    }

    #[test]
    fn test_address_line2_is_optional() {
        let d = sample_details();
        assert!(d.address_line2().is_none());
        assert!(!d.missing_fields().contains(&AddressField::AddressLine2));
    }

    #[test]
    fn test_bad_email() {
        let mut d = sample_details();
        d.email = "ada.example.com".into();
        assert!(matches!(d.validate(), Err(CommerceError::Validation(_))));
    }

    #[test]
    fn test_field_access_by_name() {
        let mut d = CustomerDetails::default();
        for f in AddressField::ALL {
            d.set_field(f, f.name());
        }
        assert_eq!(d.zip_code, "zipCode");
        assert_eq!(d.field(AddressField::AddressLine1), "addressLine1");
    }

    #[test]
    fn test_lines_skip_empty_line2() {
        let mut d = sample_details();
        assert_eq!(d.lines().len(), 4);
        d.address_line2 = "Flat 2".into();
        assert_eq!(d.lines()[2], "Flat 2");
    }

    #[test]
    fn test_same_recipient() {
        let a = sample_details();
        let mut b = a.clone();
        b.city = "Paris".into();
        assert!(a.same_recipient(&b));
        b.email = "other@example.com".into();
        assert!(!a.same_recipient(&b));
    }

    #[test]
    fn test_camel_case_keys() {
        let json = serde_json::to_value(sample_details()).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("zipCode").is_some());
    }
}
