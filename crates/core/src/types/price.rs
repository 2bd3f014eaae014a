//! Type-safe price representation using decimal arithmetic.
//!
//! All prices in the store are Brazilian reais. Amounts are kept as
//! [`Decimal`] so the cart total never accumulates floating-point drift.

use core::fmt;
use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is NaN or infinite.
    #[error("price must be a finite number")]
    NotANumber,
    /// The input is zero or negative.
    #[error("price must be greater than zero (got {0})")]
    NotPositive(Decimal),
    /// The input is positive but below the smallest representable amount.
    #[error("price is too small to represent")]
    TooSmall,
    /// The input string is not a decimal number.
    #[error("price could not be parsed from {0:?}")]
    Unparseable(String),
}

/// A strictly positive amount in reais.
///
/// ## Examples
///
/// ```
/// use kesley_cakes_core::Price;
///
/// let price = Price::from_f64(20.0).unwrap();
/// assert_eq!(price.formatted(), "20,00");
/// assert_eq!(price.to_string(), "R$ 20,00");
///
/// assert!(Price::from_f64(0.0).is_err());
/// assert!(Price::from_f64(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] if the amount is zero or negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a floating-point amount, as handed over by markup
    /// attributes and script bindings.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not finite or not positive, or
    /// [`PriceError::TooSmall`] if it is positive but rounds to zero.
    pub fn from_f64(amount: f64) -> Result<Self, PriceError> {
        if !amount.is_finite() {
            return Err(PriceError::NotANumber);
        }
        let decimal = Decimal::from_f64(amount).ok_or(PriceError::NotANumber)?;
        if amount > 0.0 && decimal.is_zero() {
            return Err(PriceError::TooSmall);
        }
        Self::new(decimal)
    }

    /// Parse a price from text. Both `.` and `,` are accepted as the decimal
    /// separator (`"12.50"` and `"12,50"` are the same price).
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a decimal number or not positive.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let normalized = s.trim().replace(',', ".");
        let decimal = Decimal::from_str(&normalized)
            .map_err(|_| PriceError::Unparseable(s.to_string()))?;
        Self::new(decimal)
    }

    /// The underlying amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Two decimals with a comma separator, e.g. `20,00`. Halves round away
    /// from zero (`0,125` shows as `0,13`).
    #[must_use]
    pub fn formatted(&self) -> String {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{cents:.2}").replace('.', ",")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R$ {}", self.formatted())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}
