//! Integration tests for the Kesley Cakes storefront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p kesley-cakes-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `navigation` - Login gate and header behavior
//! - `checkout` - Purchase flow from product click to receipt
//! - `input_masks` - Keystroke filters and live masks on the checkout form
//!
//! Every test drives a [`Storefront`] over a [`MemoryDocument`] built from
//! the default element contract, the same page the markup ships.

use kesley_cakes_storefront::dom::{Document, MemoryDocument, Selector};
use kesley_cakes_storefront::events::{DomEvent, Propagation};
use kesley_cakes_storefront::{Storefront, StorefrontConfig};

/// A bootstrapped storefront over an in-memory copy of the page.
pub struct TestStore {
    pub app: Storefront<MemoryDocument>,
}

impl TestStore {
    /// Default page, bootstrapped, with logging to stderr.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StorefrontConfig::default())
    }

    /// Page built from `config`'s element contract.
    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        kesley_cakes_storefront::telemetry::init();
        let doc = MemoryDocument::from_contract(&config.elements);
        let mut app = Storefront::new(doc, config);
        app.bootstrap();
        Self { app }
    }

    /// Element contract in use.
    #[must_use]
    pub fn ids(&self) -> &kesley_cakes_storefront::config::ElementIds {
        &self.app.config().elements
    }

    /// The page.
    #[must_use]
    pub const fn doc(&self) -> &MemoryDocument {
        self.app.document()
    }

    /// Type `text` into a field one key at a time, the way a browser would:
    /// keypress first (which may cancel the key), then append and fire
    /// `input`.
    pub fn type_into(&mut self, field: &Selector, text: &str) {
        for key in text.chars() {
            if self.app.dispatch(&DomEvent::keypress(field.clone(), key))
                == Propagation::PreventDefault
            {
                continue;
            }
            let doc = self.app.document_mut();
            let mut value = doc.value(field).unwrap_or_default();
            let max = doc
                .element(field)
                .and_then(|el| el.max_length)
                .and_then(|max| usize::try_from(max).ok());
            if max.is_some_and(|max| value.chars().count() >= max) {
                continue;
            }
            value.push(key);
            doc.set_value(field, &value);
            self.app.dispatch(&DomEvent::input(field.clone()));
        }
    }

    /// Paste `text` into a field in one go: no keypress filtering, one
    /// `input` event.
    pub fn paste_into(&mut self, field: &Selector, text: &str) {
        self.app.document_mut().set_value(field, text);
        self.app.dispatch(&DomEvent::input(field.clone()));
    }

    /// Fill the checkout form by typing.
    pub fn fill_customer_form(&mut self, name: &str, phone: &str, tax_id: &str) {
        let ids = self.ids().clone();
        self.type_into(&ids.name_input, name);
        self.type_into(&ids.phone_input, phone);
        self.type_into(&ids.tax_id_input, tax_id);
    }

    /// Current value of a field.
    #[must_use]
    pub fn value(&self, field: &Selector) -> String {
        self.doc().value(field).unwrap_or_default()
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}
