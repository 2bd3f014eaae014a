//! The storefront controller.
//!
//! One [`Storefront`] per page. It owns the session state and the event
//! table, performs every DOM change through the injected [`Document`], and
//! queues timer-delayed steps for the host to run.

use chrono::Datelike;
use kesley_cakes_core::filter::{is_digit_char, is_name_char};
use kesley_cakes_core::mask::{digits, format_phone, format_tax_id, tax_id_max_length};
use kesley_cakes_core::{CustomerData, PaymentMethod, Product};
use tracing::instrument;

use crate::config::StorefrontConfig;
use crate::dom::{Display, Document};
use crate::error::{CheckoutError, Result};
use crate::events::{DomEvent, EventKind, EventTable, Handler, Propagation, Target};
use crate::receipt::Receipt;
use crate::schedule::{Deferred, DeferredAction};
use crate::state::{PurchaseStage, SessionState};

/// Alert shown by the Pix button. Copying is simulated.
pub const PIX_COPIED_MESSAGE: &str = "Chave Pix copiada! (Simulação)";

/// Storefront interaction controller.
#[derive(Debug)]
pub struct Storefront<D> {
    doc: D,
    config: StorefrontConfig,
    state: SessionState,
    events: EventTable,
    pending: Vec<Deferred>,
}

impl<D: Document> Storefront<D> {
    /// Create a controller for a page. Call [`Self::bootstrap`] once the page
    /// is ready.
    pub fn new(doc: D, config: StorefrontConfig) -> Self {
        Self {
            doc,
            config,
            state: SessionState::new(),
            events: EventTable::new(),
            pending: Vec::new(),
        }
    }

    /// The page.
    pub const fn document(&self) -> &D {
        &self.doc
    }

    /// The page, for hosts that simulate user input.
    pub const fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// Session state.
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Active configuration.
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Registered listeners.
    pub const fn events(&self) -> &EventTable {
        &self.events
    }

    // =========================================================================
    // Page setup
    // =========================================================================

    /// Prepare the page once it has loaded: stamp the footer year and build
    /// the event table for the elements that are present.
    ///
    /// Safe to call again; the table is rebuilt from scratch.
    #[instrument(skip(self))]
    pub fn bootstrap(&mut self) -> &EventTable {
        let year = chrono::Local::now().year().to_string();
        self.doc.set_text(&self.config.elements.footer_year, &year);

        self.events.clear();
        let ids = &self.config.elements;

        if self.doc.contains(&ids.pix_button) {
            self.events.register(
                Target::Element(ids.pix_button.clone()),
                EventKind::Click,
                Handler::CopyPixKey,
            );
        }

        if self.doc.contains(&ids.name_input) {
            self.events.register(
                Target::Element(ids.name_input.clone()),
                EventKind::KeyPress,
                Handler::FilterNameKey,
            );
        }

        for (field, mask) in [
            (&ids.phone_input, Handler::MaskPhone),
            (&ids.tax_id_input, Handler::MaskTaxId),
        ] {
            if self.doc.contains(field) {
                let target = Target::Element(field.clone());
                self.events
                    .register(target.clone(), EventKind::KeyPress, Handler::FilterDigitKey);
                self.events.register(target, EventKind::Input, mask);
            }
        }

        self.events
            .register(Target::Window, EventKind::Scroll, Handler::RefreshHeader);
        self.events
            .register(Target::Window, EventKind::Load, Handler::RefreshHeader);

        tracing::debug!(listeners = self.events.len(), "storefront bootstrapped");
        &self.events
    }

    /// Route an event through the table.
    ///
    /// Unregistered events are ignored and keep their default action.
    pub fn dispatch(&mut self, event: &DomEvent) -> Propagation {
        let Some(handler) = self.events.lookup(&event.target, event.kind) else {
            tracing::trace!(?event, "no handler registered");
            return Propagation::Continue;
        };

        match handler {
            Handler::RefreshHeader => {
                self.handle_scroll();
                Propagation::Continue
            }
            Handler::CopyPixKey => {
                self.copy_pix_key();
                Propagation::PreventDefault
            }
            Handler::FilterNameKey => filter_key(event.key, is_name_char),
            Handler::FilterDigitKey => filter_key(event.key, is_digit_char),
            Handler::MaskPhone => {
                self.mask_phone();
                Propagation::Continue
            }
            Handler::MaskTaxId => {
                self.mask_tax_id();
                Propagation::Continue
            }
        }
    }

    // =========================================================================
    // Deferred steps
    // =========================================================================

    /// Hand the queued deferred steps to the host, oldest first.
    pub fn take_deferred(&mut self) -> Vec<Deferred> {
        std::mem::take(&mut self.pending)
    }

    /// Run one deferred step.
    pub fn run_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::ScrollToTopAndRefreshHeader => {
                self.doc.scroll_to_top();
                self.handle_scroll();
            }
            DeferredAction::Focus(target) => {
                self.doc.focus(&target);
            }
        }
    }

    /// Run every queued step now, ignoring delays. Steps queued while
    /// running are run as well.
    pub fn flush_deferred(&mut self) {
        loop {
            let batch = self.take_deferred();
            if batch.is_empty() {
                break;
            }
            for deferred in batch {
                self.run_deferred(deferred.action);
            }
        }
    }

    fn defer(&mut self, delay: std::time::Duration, action: DeferredAction) {
        self.pending.push(Deferred { delay, action });
    }

    // =========================================================================
    // Navigation & header
    // =========================================================================

    /// Reveal the store behind the login gate, then scroll to the top once
    /// the layout has settled.
    ///
    /// Needs both views; otherwise does nothing.
    #[instrument(skip(self))]
    pub fn login(&mut self) {
        let ids = &self.config.elements;
        if !(self.doc.contains(&ids.login_page) && self.doc.contains(&ids.store_page)) {
            tracing::warn!("login or store view missing, ignoring login");
            return;
        }

        self.doc.set_display(&ids.login_page, Display::None);
        self.doc.set_display(&ids.store_page, Display::Block);
        self.state.set_logged_in();
        self.defer(
            self.config.login_scroll_delay,
            DeferredAction::ScrollToTopAndRefreshHeader,
        );
        tracing::info!("store revealed");
    }

    /// Shrink the header past the scroll threshold, restore it otherwise.
    pub fn handle_scroll(&mut self) {
        let shrunk = self.doc.scroll_y() > self.config.scroll_threshold;
        self.doc.set_class(
            &self.config.elements.header,
            &self.config.header_shrunk_class,
            shrunk,
        );
    }

    // =========================================================================
    // Modals
    // =========================================================================

    /// Hide the Pix payment modal.
    pub fn close_pix(&mut self) {
        self.doc
            .set_display(&self.config.elements.pix_modal, Display::None);
    }

    /// Hide the receipt. Ends the purchase if one was showing.
    pub fn close_receipt(&mut self) {
        self.doc
            .set_display(&self.config.elements.receipt_modal, Display::None);
        if self.state.stage() == PurchaseStage::ReceiptShown {
            self.state.set_stage(PurchaseStage::Idle);
        }
    }

    /// Hide the register modal and the receipt behind it.
    pub fn close_register(&mut self) {
        self.doc
            .set_display(&self.config.elements.register_modal, Display::None);
        self.close_receipt();
    }

    /// Hide the customer-data modal and blank its fields. Abandons a purchase
    /// waiting for customer data.
    pub fn close_customer_modal(&mut self) {
        self.doc
            .set_display(&self.config.elements.customer_modal, Display::None);
        self.clear_customer_form();
        if self.state.stage() == PurchaseStage::AwaitingCustomerData {
            self.state.set_stage(PurchaseStage::Idle);
        }
    }

    /// Blank the name, phone and tax ID fields that exist.
    pub fn clear_customer_form(&mut self) {
        for field in self.config.elements.customer_fields() {
            self.doc.set_value(field, "");
        }
    }

    // =========================================================================
    // Purchase flow
    // =========================================================================

    /// Start buying a product: remember it and ask for the customer's data.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Product`] if the name is blank or the price is
    /// not a positive number. The customer is alerted and nothing changes.
    #[instrument(skip(self))]
    pub fn buy_product(&mut self, name: &str, price: f64) -> Result<()> {
        let product = match Product::from_raw(name, price) {
            Ok(product) => product,
            Err(e) => {
                tracing::error!(name, price, error = %e, "invalid product");
                return Err(self.fail(CheckoutError::from(e)));
            }
        };

        tracing::info!(product = product.name(), price = %product.price(), "purchase started");
        self.state.select(product);

        let ids = &self.config.elements;
        if self.doc.set_display(&ids.customer_modal, Display::Flex)
            && self.doc.contains(&ids.name_input)
        {
            let first_field = ids.name_input.clone();
            self.defer(self.config.focus_delay, DeferredAction::Focus(first_field));
        }
        Ok(())
    }

    /// Validate the customer form and issue the receipt.
    ///
    /// On success the customer modal is closed and cleared, the product goes
    /// through the cart, the receipt is shown, and the cart is emptied again:
    /// each checkout is a single-item transaction.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::NoProductSelected`] if no purchase was started,
    /// or [`CheckoutError::Customer`] if the form is incomplete. The customer
    /// is alerted and the modal stays open.
    #[instrument(skip(self))]
    pub fn continue_to_payment(&mut self) -> Result<Receipt> {
        let Some(product) = self.state.selected_product().cloned() else {
            tracing::warn!("checkout continued without a selected product");
            return Err(self.fail(CheckoutError::NoProductSelected));
        };

        let [name, phone, tax_id] = self
            .config
            .elements
            .customer_fields()
            .map(|field| self.doc.value(field).unwrap_or_default());

        let customer = match CustomerData::parse(&name, &phone, &tax_id) {
            Ok(customer) => customer,
            Err(e) => {
                tracing::warn!(error = %e, "customer data rejected");
                return Err(self.fail(CheckoutError::from(e)));
            }
        };

        let receipt = Receipt::new(customer, product);
        let html = match receipt.render() {
            Ok(html) => html,
            Err(e) => {
                tracing::error!(error = %e, "receipt rendering failed");
                return Err(self.fail(CheckoutError::from(e)));
            }
        };

        self.close_customer_modal();
        self.state.cart_mut().add(receipt.product());
        tracing::debug!(
            items = self.state.cart().len(),
            total = %self.state.cart().total(),
            "cart updated"
        );

        let ids = &self.config.elements;
        if self.doc.contains(&ids.receipt_details) && self.doc.contains(&ids.receipt_modal) {
            self.doc.set_inner_html(&ids.receipt_details, &html);
            self.doc.set_display(&ids.receipt_modal, Display::Flex);
        }

        self.state.cart_mut().clear();
        self.state.set_stage(PurchaseStage::ReceiptShown);
        tracing::info!(product = receipt.product().name(), "receipt issued");
        Ok(receipt)
    }

    /// Open the register modal for a cash or card payment.
    ///
    /// Unknown method keys are ignored.
    #[instrument(skip(self))]
    pub fn select_payment(&mut self, method: &str) -> Option<PaymentMethod> {
        let Some(method) = PaymentMethod::parse(method) else {
            tracing::debug!("unknown payment method ignored");
            return None;
        };
        self.doc
            .set_display(&self.config.elements.register_modal, Display::Flex);
        tracing::info!(%method, "register payment selected");
        Some(method)
    }

    /// Simulated copy of the Pix key.
    pub fn copy_pix_key(&mut self) {
        self.doc.alert(PIX_COPIED_MESSAGE);
    }

    // =========================================================================
    // Input masks
    // =========================================================================

    fn mask_phone(&mut self) {
        let field = &self.config.elements.phone_input;
        if let Some(value) = self.doc.value(field) {
            self.doc.set_value(field, &format_phone(&value));
        }
    }

    fn mask_tax_id(&mut self) {
        let field = &self.config.elements.tax_id_input;
        if let Some(value) = self.doc.value(field) {
            let max = tax_id_max_length(digits(&value).len());
            self.doc.set_max_length(field, max);
            self.doc.set_value(field, &format_tax_id(&value));
        }
    }

    /// Alert the customer and hand the error back.
    fn fail(&mut self, error: CheckoutError) -> CheckoutError {
        self.doc.alert(error.alert_message());
        error
    }
}

fn filter_key(key: Option<char>, allowed: impl Fn(char) -> bool) -> Propagation {
    match key {
        Some(c) if !allowed(c) => Propagation::PreventDefault,
        _ => Propagation::Continue,
    }
}
