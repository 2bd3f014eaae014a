//! Receipt (nota fiscal) rendering.
//!
//! The receipt is built from customer-typed text, so it goes through an
//! Askama template with HTML escaping rather than string concatenation.

use askama::Template;
use kesley_cakes_core::{CustomerData, Product};

/// Shown in place of a CPF/CNPJ the customer left blank.
pub const TAX_ID_NOT_GIVEN: &str = "Não informado";

/// Receipt markup template.
#[derive(Template)]
#[template(path = "receipt.html")]
struct ReceiptTemplate<'a> {
    customer: &'a CustomerData,
    tax_id: &'a str,
    product: &'a Product,
}

/// A completed purchase: who bought what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    customer: CustomerData,
    product: Product,
}

impl Receipt {
    #[must_use]
    pub const fn new(customer: CustomerData, product: Product) -> Self {
        Self { customer, product }
    }

    #[must_use]
    pub const fn customer(&self) -> &CustomerData {
        &self.customer
    }

    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Render the receipt body as escaped HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if the template fails to render.
    pub fn render(&self) -> askama::Result<String> {
        ReceiptTemplate {
            customer: &self.customer,
            tax_id: self.customer.tax_id().unwrap_or(TAX_ID_NOT_GIVEN),
            product: &self.product,
        }
        .render()
    }
}
