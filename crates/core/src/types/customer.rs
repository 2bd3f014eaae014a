//! Customer contact data collected before the receipt is issued.

use serde::{Deserialize, Serialize};

use crate::mask;

/// Errors that can occur when validating [`CustomerData`].
///
/// Checks run in field order, so only the first problem is reported.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerDataError {
    /// The name field is empty.
    #[error("customer name is required")]
    MissingName,
    /// The phone field is empty.
    #[error("customer phone is required")]
    MissingPhone,
    /// The phone has fewer digits than a number with area code.
    #[error("customer phone must have at least {min} digits (got {digits})")]
    PhoneTooShort {
        /// Digits found after stripping formatting.
        digits: usize,
        /// Minimum accepted digit count.
        min: usize,
    },
}

/// Validated customer contact data.
///
/// ## Constraints
///
/// - Name: non-empty after trimming
/// - Phone: non-empty after trimming, at least 10 digits once formatting is
///   stripped (two-digit area code plus an eight-digit landline)
/// - Tax ID (CPF/CNPJ): optional, stored as typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerData {
    name: String,
    phone: String,
    tax_id: Option<String>,
}

impl CustomerData {
    /// Minimum phone digits: area code plus landline number.
    pub const MIN_PHONE_DIGITS: usize = 10;

    /// Validate raw form values. All three are trimmed first; an empty tax ID
    /// is stored as `None`.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in the order name, phone presence,
    /// phone length.
    pub fn parse(name: &str, phone: &str, tax_id: &str) -> Result<Self, CustomerDataError> {
        let name = name.trim();
        let phone = phone.trim();
        let tax_id = tax_id.trim();

        if name.is_empty() {
            return Err(CustomerDataError::MissingName);
        }

        if phone.is_empty() {
            return Err(CustomerDataError::MissingPhone);
        }

        let digits = mask::digits(phone).len();
        if digits < Self::MIN_PHONE_DIGITS {
            return Err(CustomerDataError::PhoneTooShort {
                digits,
                min: Self::MIN_PHONE_DIGITS,
            });
        }

        Ok(Self {
            name: name.to_owned(),
            phone: phone.to_owned(),
            tax_id: (!tax_id.is_empty()).then(|| tax_id.to_owned()),
        })
    }

    /// Customer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Phone as typed (usually already masked).
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// CPF or CNPJ, if the customer gave one.
    #[must_use]
    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_mobile() {
        let data = CustomerData::parse("Ana Souza", "(11) 98765-4321", "").unwrap();
        assert_eq!(data.name(), "Ana Souza");
        assert_eq!(data.phone(), "(11) 98765-4321");
        assert_eq!(data.tax_id(), None);
    }

    #[test]
    fn test_parse_trims_fields() {
        let data = CustomerData::parse("  Ana  ", " 1133334444 ", " 123.456.789-01 ").unwrap();
        assert_eq!(data.name(), "Ana");
        assert_eq!(data.phone(), "1133334444");
        assert_eq!(data.tax_id(), Some("123.456.789-01"));
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            CustomerData::parse("   ", "11987654321", ""),
            Err(CustomerDataError::MissingName)
        );
    }

    #[test]
    fn test_missing_phone() {
        assert_eq!(
            CustomerData::parse("Ana", "", ""),
            Err(CustomerDataError::MissingPhone)
        );
    }

    #[test]
    fn test_phone_digit_boundary() {
        assert_eq!(
            CustomerData::parse("Ana", "(11) 3333-444", ""),
            Err(CustomerDataError::PhoneTooShort { digits: 9, min: 10 })
        );
        assert!(CustomerData::parse("Ana", "(11) 3333-4444", "").is_ok());
        assert!(CustomerData::parse("Ana", "(11) 98765-4321", "").is_ok());
    }

    #[test]
    fn test_phone_formatting_only() {
        assert!(matches!(
            CustomerData::parse("Ana", "() -", ""),
            Err(CustomerDataError::PhoneTooShort { digits: 0, .. })
        ));
    }
}
