//! In-memory page.
//!
//! Keeps just enough element state to observe what the handlers did:
//! inline display, classes, field values, markup, focus, scroll offset and
//! the alerts that were raised.

use std::collections::{BTreeSet, HashMap};

use super::{Display, Document, Selector};
use crate::config::ElementIds;

/// State of one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Inline `display`, `None` when never set.
    pub display: Option<Display>,
    pub classes: BTreeSet<String>,
    pub value: String,
    pub max_length: Option<u32>,
    pub inner_html: String,
    pub text: String,
}

impl Element {
    /// Whether the element has been shown with `block` or `flex`.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self.display, Some(Display::Block | Display::Flex))
    }

    /// Whether the class is present.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// A page held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: HashMap<Selector, Element>,
    scroll_y: f64,
    focused: Option<Selector>,
    alerts: Vec<String>,
}

impl MemoryDocument {
    /// Create an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page holding every element of the contract, in the state the
    /// markup loads with: login view shown, store view and modals hidden.
    #[must_use]
    pub fn from_contract(elements: &ElementIds) -> Self {
        let mut doc = Self::new();
        let all = [
            &elements.login_page,
            &elements.store_page,
            &elements.header,
            &elements.pix_modal,
            &elements.receipt_modal,
            &elements.receipt_details,
            &elements.register_modal,
            &elements.customer_modal,
            &elements.name_input,
            &elements.phone_input,
            &elements.tax_id_input,
            &elements.pix_button,
            &elements.footer_year,
        ];
        for selector in all {
            doc.insert(selector.clone());
        }

        doc.set_display(&elements.login_page, Display::Block);
        for hidden in [
            &elements.store_page,
            &elements.pix_modal,
            &elements.receipt_modal,
            &elements.register_modal,
            &elements.customer_modal,
        ] {
            doc.set_display(hidden, Display::None);
        }
        doc
    }

    /// Add an element with default state, replacing any existing one.
    pub fn insert(&mut self, selector: Selector) -> &mut Element {
        let element = self.elements.entry(selector).or_default();
        *element = Element::default();
        element
    }

    /// Remove an element, returning its last state.
    pub fn remove(&mut self, selector: &Selector) -> Option<Element> {
        self.elements.remove(selector)
    }

    /// Look up an element.
    #[must_use]
    pub fn element(&self, selector: &Selector) -> Option<&Element> {
        self.elements.get(selector)
    }

    /// Look up an element for modification.
    pub fn element_mut(&mut self, selector: &Selector) -> Option<&mut Element> {
        self.elements.get_mut(selector)
    }

    /// Whether the element exists and is shown.
    #[must_use]
    pub fn is_shown(&self, selector: &Selector) -> bool {
        self.element(selector).is_some_and(Element::is_shown)
    }

    /// Simulate the user scrolling to `offset`.
    pub const fn set_scroll_y(&mut self, offset: f64) {
        self.scroll_y = offset;
    }

    /// Element that last received focus.
    #[must_use]
    pub const fn focused(&self) -> Option<&Selector> {
        self.focused.as_ref()
    }

    /// Alerts raised so far, oldest first.
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drain the recorded alerts.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl Document for MemoryDocument {
    fn contains(&self, target: &Selector) -> bool {
        self.elements.contains_key(target)
    }

    fn set_display(&mut self, target: &Selector, display: Display) -> bool {
        self.element_mut(target)
            .map(|el| el.display = Some(display))
            .is_some()
    }

    fn set_class(&mut self, target: &Selector, class: &str, enabled: bool) -> bool {
        self.element_mut(target)
            .map(|el| {
                if enabled {
                    el.classes.insert(class.to_string());
                } else {
                    el.classes.remove(class);
                }
            })
            .is_some()
    }

    fn value(&self, target: &Selector) -> Option<String> {
        self.element(target).map(|el| el.value.clone())
    }

    fn set_value(&mut self, target: &Selector, value: &str) -> bool {
        self.element_mut(target)
            .map(|el| value.clone_into(&mut el.value))
            .is_some()
    }

    fn set_max_length(&mut self, target: &Selector, max: u32) -> bool {
        self.element_mut(target)
            .map(|el| el.max_length = Some(max))
            .is_some()
    }

    fn set_inner_html(&mut self, target: &Selector, html: &str) -> bool {
        self.element_mut(target)
            .map(|el| html.clone_into(&mut el.inner_html))
            .is_some()
    }

    fn set_text(&mut self, target: &Selector, text: &str) -> bool {
        self.element_mut(target)
            .map(|el| text.clone_into(&mut el.text))
            .is_some()
    }

    fn focus(&mut self, target: &Selector) -> bool {
        if !self.contains(target) {
            return false;
        }
        self.focused = Some(target.clone());
        true
    }

    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to_top(&mut self) {
        self.scroll_y = 0.0;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_is_noop() {
        let mut doc = MemoryDocument::new();
        let ghost = Selector::id("ghost");

        assert!(!doc.contains(&ghost));
        assert!(!doc.set_display(&ghost, Display::Flex));
        assert!(!doc.set_value(&ghost, "x"));
        assert!(!doc.focus(&ghost));
        assert_eq!(doc.value(&ghost), None);
        assert_eq!(doc.focused(), None);
    }

    #[test]
    fn test_class_toggle() {
        let mut doc = MemoryDocument::new();
        let header = Selector::tag("header");
        doc.insert(header.clone());

        doc.set_class(&header, "header-scroll", true);
        doc.set_class(&header, "header-scroll", true);
        assert!(doc.element(&header).unwrap().has_class("header-scroll"));

        doc.set_class(&header, "header-scroll", false);
        assert!(!doc.element(&header).unwrap().has_class("header-scroll"));
    }

    #[test]
    fn test_from_contract_initial_state() {
        let ids = ElementIds::default();
        let doc = MemoryDocument::from_contract(&ids);

        assert!(doc.is_shown(&ids.login_page));
        assert!(!doc.is_shown(&ids.store_page));
        assert!(!doc.is_shown(&ids.customer_modal));
        assert!(doc.contains(&ids.header));
        assert!(doc.contains(&ids.footer_year));
    }

    #[test]
    fn test_alerts_are_recorded_in_order() {
        let mut doc = MemoryDocument::new();
        doc.alert("first");
        doc.alert("second");
        assert_eq!(doc.alerts(), ["first", "second"]);
        assert_eq!(doc.take_alerts().len(), 2);
        assert!(doc.alerts().is_empty());
    }

    #[test]
    fn test_scroll_to_top() {
        let mut doc = MemoryDocument::new();
        doc.set_scroll_y(420.0);
        doc.scroll_to_top();
        assert!(doc.scroll_y().abs() < f64::EPSILON);
    }
}
