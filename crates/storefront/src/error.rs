//! Checkout error handling.
//!
//! Every failure in the purchase flow is a validation failure. Handlers show
//! [`CheckoutError::alert_message`] to the customer and return the error to
//! the caller; nothing is retried and no state is changed.

use kesley_cakes_core::{CustomerDataError, ProductError};
use thiserror::Error;

/// Errors raised while buying a product.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The product arguments handed over by the page are invalid.
    #[error("Invalid product: {0}")]
    Product(#[from] ProductError),

    /// The customer form failed validation.
    #[error("Invalid customer data: {0}")]
    Customer(#[from] CustomerDataError),

    /// Checkout was continued without a product being selected first.
    #[error("No product selected")]
    NoProductSelected,

    /// The receipt template failed to render.
    #[error("Receipt rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl CheckoutError {
    /// Text shown to the customer in the blocking alert.
    #[must_use]
    pub const fn alert_message(&self) -> &'static str {
        match self {
            Self::Product(_) => "Erro ao adicionar produto. Por favor, tente novamente.",
            Self::Customer(CustomerDataError::MissingName) => {
                "Por favor, preencha seu Nome Completo antes de continuar."
            }
            Self::Customer(CustomerDataError::MissingPhone) => {
                "Por favor, preencha seu Telefone (com DDD) antes de continuar."
            }
            Self::Customer(CustomerDataError::PhoneTooShort { .. }) => {
                "Por favor, verifique se o Telefone foi preenchido corretamente (mínimo 10 dígitos com DDD)."
            }
            Self::NoProductSelected => "Por favor, escolha um produto antes de continuar.",
            Self::Render(_) => "Não foi possível gerar a nota fiscal. Por favor, tente novamente.",
        }
    }
}

/// Result type alias for `CheckoutError`.
pub type Result<T> = std::result::Result<T, CheckoutError>;
