//! Catalog product selected for purchase.

use serde::{Deserialize, Serialize};

use super::price::{Price, PriceError};

/// Errors that can occur when selecting a [`Product`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product name is empty or whitespace.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The product price is not a positive number.
    #[error("invalid product price: {0}")]
    InvalidPrice(#[from] PriceError),
}

/// A product a customer is buying: a display name and a unit price.
///
/// ## Examples
///
/// ```
/// use kesley_cakes_core::Product;
///
/// let bolo = Product::from_raw("Bolo de Cenoura", 45.0).unwrap();
/// assert_eq!(bolo.name(), "Bolo de Cenoura");
/// assert_eq!(bolo.price().formatted(), "45,00");
///
/// assert!(Product::from_raw("", 45.0).is_err());
/// assert!(Product::from_raw("Brigadeiro", -1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    name: String,
    price: Price,
}

impl Product {
    /// Create a product from a name and an already validated price.
    ///
    /// # Errors
    ///
    /// Returns [`ProductError::EmptyName`] if the name is blank.
    pub fn new(name: impl Into<String>, price: Price) -> Result<Self, ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        Ok(Self { name, price })
    }

    /// Create a product from unvalidated arguments.
    ///
    /// The name is checked before the price, so an empty name is reported
    /// even when the price is also invalid. A name made only of whitespace
    /// counts as empty, which is stricter than a plain emptiness check.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the price is not a positive
    /// finite number.
    pub fn from_raw(name: &str, price: f64) -> Result<Self, ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::EmptyName);
        }
        Self::new(name, Price::from_f64(price)?)
    }

    /// The product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unit price.
    #[must_use]
    pub const fn price(&self) -> Price {
        self.price
    }
}
