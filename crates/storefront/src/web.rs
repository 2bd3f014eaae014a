//! Browser binding.
//!
//! Implements [`Document`] on top of `web-sys`, attaches one listener per
//! event-table row, runs deferred steps on `setTimeout`, and exports the
//! global functions the storefront markup calls from `onclick` attributes
//! under their original names.

use std::cell::RefCell;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::config::StorefrontConfig;
use crate::controller::Storefront;
use crate::dom::{Display, Document, Selector};
use crate::events::{DomEvent, Propagation, Registration, Target};
use crate::schedule::Deferred;
use crate::telemetry;

thread_local! {
    static APP: RefCell<Option<Storefront<WebDocument>>> = const { RefCell::new(None) };
    static LISTENERS: RefCell<Vec<EventListener>> = const { RefCell::new(Vec::new()) };
}

/// The live page.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Bind to the current window's document, if there is one.
    #[must_use]
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }

    fn element(&self, target: &Selector) -> Option<web_sys::Element> {
        match target {
            Selector::Id(id) => self.document.get_element_by_id(id),
            Selector::Tag(_) => self.document.query_selector(&target.css()).ok().flatten(),
        }
    }

    fn html_element(&self, target: &Selector) -> Option<HtmlElement> {
        self.element(target)?.dyn_into::<HtmlElement>().ok()
    }

    fn input(&self, target: &Selector) -> Option<HtmlInputElement> {
        self.element(target)?.dyn_into::<HtmlInputElement>().ok()
    }
}

impl Document for WebDocument {
    fn contains(&self, target: &Selector) -> bool {
        self.element(target).is_some()
    }

    fn set_display(&mut self, target: &Selector, display: Display) -> bool {
        self.html_element(target)
            .is_some_and(|el| el.style().set_property("display", display.as_css()).is_ok())
    }

    fn set_class(&mut self, target: &Selector, class: &str, enabled: bool) -> bool {
        let Some(el) = self.element(target) else {
            return false;
        };
        let classes = el.class_list();
        let result = if enabled {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        result.is_ok()
    }

    fn value(&self, target: &Selector) -> Option<String> {
        self.input(target).map(|input| input.value())
    }

    fn set_value(&mut self, target: &Selector, value: &str) -> bool {
        self.input(target).map(|input| input.set_value(value)).is_some()
    }

    fn set_max_length(&mut self, target: &Selector, max: u32) -> bool {
        let max = i32::try_from(max).unwrap_or(i32::MAX);
        self.input(target)
            .map(|input| input.set_max_length(max))
            .is_some()
    }

    fn set_inner_html(&mut self, target: &Selector, html: &str) -> bool {
        self.element(target)
            .map(|el| el.set_inner_html(html))
            .is_some()
    }

    fn set_text(&mut self, target: &Selector, text: &str) -> bool {
        self.element(target)
            .map(|el| el.set_text_content(Some(text)))
            .is_some()
    }

    fn focus(&mut self, target: &Selector) -> bool {
        self.html_element(target).is_some_and(|el| el.focus().is_ok())
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&mut self) {
        self.window.scroll_to_with_x_and_y(0.0, 0.0);
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(?e, "alert failed");
        }
    }
}

// =============================================================================
// Entry point
// =============================================================================

/// Module entry point.
///
/// Module scripts run after the document is parsed, so the page is ready for
/// bootstrap here.
///
/// # Errors
///
/// Returns an error if there is no window or document.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    telemetry::init_console();

    let document =
        WebDocument::from_window().ok_or_else(|| JsValue::from_str("no window document"))?;
    let mut app = Storefront::new(document, StorefrontConfig::default());
    let registrations = app.bootstrap().registrations();
    let page = app.document().clone();

    APP.with(|cell| *cell.borrow_mut() = Some(app));
    attach_listeners(&page, &registrations);
    Ok(())
}

fn attach_listeners(page: &WebDocument, registrations: &[Registration]) {
    let mut listeners = Vec::with_capacity(registrations.len());

    for registration in registrations {
        let target: web_sys::EventTarget = match &registration.target {
            Target::Window => page.window.clone().into(),
            Target::Element(selector) => match page.element(selector) {
                Some(el) => el.into(),
                None => continue,
            },
        };

        let dom_target = registration.target.clone();
        let kind = registration.kind;
        let listener = EventListener::new_with_options(
            &target,
            kind.as_str(),
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let key = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|keyboard| single_char(&keyboard.key()));
                let dom_event = DomEvent {
                    target: dom_target.clone(),
                    kind,
                    key,
                };
                if with_app(|app| app.dispatch(&dom_event)) == Some(Propagation::PreventDefault) {
                    event.prevent_default();
                }
            },
        );
        listeners.push(listener);
    }

    tracing::debug!(count = listeners.len(), "listeners attached");
    LISTENERS.with(|cell| cell.borrow_mut().extend(listeners));
}

/// The character a key produces, if it produces exactly one.
fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

/// Run `f` against the controller, then schedule whatever it deferred.
///
/// Returns `None` before `start` has run, or if the controller is already
/// busy further up the stack.
fn with_app<R>(f: impl FnOnce(&mut Storefront<WebDocument>) -> R) -> Option<R> {
    let (result, deferred) = APP.with(|cell| {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            tracing::warn!("storefront busy, dropping re-entrant call");
            return None;
        };
        let app = slot.as_mut()?;
        let result = f(app);
        Some((result, app.take_deferred()))
    })?;

    schedule(deferred);
    Some(result)
}

fn schedule(deferred: Vec<Deferred>) {
    for Deferred { delay, action } in deferred {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        let _ = Timeout::new(millis, move || {
            with_app(|app| app.run_deferred(action));
        })
        .forget();
    }
}

// =============================================================================
// Functions called from the markup
// =============================================================================

#[wasm_bindgen(js_name = login)]
pub fn login() {
    with_app(Storefront::login);
}

#[wasm_bindgen(js_name = handleScroll)]
pub fn handle_scroll() {
    with_app(Storefront::handle_scroll);
}

#[wasm_bindgen(js_name = fecharPix)]
pub fn close_pix() {
    with_app(Storefront::close_pix);
}

#[wasm_bindgen(js_name = fecharNota)]
pub fn close_receipt() {
    with_app(Storefront::close_receipt);
}

#[wasm_bindgen(js_name = fecharModalCaixa)]
pub fn close_register() {
    with_app(Storefront::close_register);
}

#[wasm_bindgen(js_name = fecharModalDados)]
pub fn close_customer_modal() {
    with_app(Storefront::close_customer_modal);
}

#[wasm_bindgen(js_name = limparFormularioDados)]
pub fn clear_customer_form() {
    with_app(Storefront::clear_customer_form);
}

#[wasm_bindgen(js_name = selecionarPagamento)]
pub fn select_payment(method: &str) {
    with_app(|app| app.select_payment(method));
}

/// `price` arrives from markup and may be any JS value; anything that is not
/// a number is rejected like a non-positive price.
#[wasm_bindgen(js_name = comprarProduto)]
pub fn buy_product(name: &str, price: JsValue) {
    let price = price.as_f64().unwrap_or(f64::NAN);
    // The customer has already been alerted on failure.
    let _ = with_app(|app| app.buy_product(name, price));
}

#[wasm_bindgen(js_name = continuarParaPagamento)]
pub fn continue_to_payment() {
    let _ = with_app(Storefront::continue_to_payment);
}

/// JSON snapshot of the session, for debugging from the console.
#[wasm_bindgen(js_name = sessionSnapshot)]
#[must_use]
pub fn session_snapshot() -> Option<String> {
    with_app(|app| serde_json::to_string(app.state()).ok()).flatten()
}
