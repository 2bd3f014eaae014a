//! Payment methods offered at the register.

use core::fmt;

use serde::{Deserialize, Serialize};

/// How the customer intends to pay at the register.
///
/// Pix is handled by its own modal and is not a register payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Cash (`dinheiro`).
    #[serde(rename = "dinheiro")]
    Cash,
    /// Debit or credit card (`cartao`).
    #[serde(rename = "cartao")]
    Card,
}

impl PaymentMethod {
    /// Parse the method key used by the payment buttons.
    ///
    /// Only the exact keys `dinheiro` and `cartao` are recognized.
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "dinheiro" => Some(Self::Cash),
            "cartao" => Some(Self::Card),
            _ => None,
        }
    }

    /// The method key.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "dinheiro",
            Self::Card => "cartao",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
