//! Page abstraction.
//!
//! Handlers never touch a browser API directly; they go through
//! [`Document`]. Every element operation returns whether the element was
//! found, and a missing element turns that operation into a no-op.

use core::fmt;

mod memory;

pub use memory::{Element, MemoryDocument};

/// How an element is located on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Selector {
    /// By `id` attribute.
    Id(String),
    /// First element with this tag name.
    Tag(String),
}

impl Selector {
    /// Select by `id` attribute.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self::Id(id.into())
    }

    /// Select the first element with this tag name.
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::Tag(tag.into())
    }

    /// CSS selector text, e.g. `#pixBtn` or `header`.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Id(id) => format!("#{id}"),
            Self::Tag(tag) => tag.clone(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.css())
    }
}

/// CSS `display` values the storefront switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Display {
    None,
    Block,
    /// Modals are flex containers so their dialog is centered.
    Flex,
}

impl Display {
    /// CSS value.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Block => "block",
            Self::Flex => "flex",
        }
    }
}

/// Operations the storefront performs on the page.
pub trait Document {
    /// Whether the element exists.
    fn contains(&self, target: &Selector) -> bool;

    /// Set the element's inline `display`.
    fn set_display(&mut self, target: &Selector, display: Display) -> bool;

    /// Add (`enabled`) or remove a class.
    fn set_class(&mut self, target: &Selector, class: &str, enabled: bool) -> bool;

    /// Current value of a form field.
    fn value(&self, target: &Selector) -> Option<String>;

    /// Replace a form field's value.
    fn set_value(&mut self, target: &Selector, value: &str) -> bool;

    /// Set a form field's `maxLength`.
    fn set_max_length(&mut self, target: &Selector, max: u32) -> bool;

    /// Replace the element's markup.
    fn set_inner_html(&mut self, target: &Selector, html: &str) -> bool;

    /// Replace the element's text content.
    fn set_text(&mut self, target: &Selector, text: &str) -> bool;

    /// Move keyboard focus to the element.
    fn focus(&mut self, target: &Selector) -> bool;

    /// Vertical scroll offset of the viewport, in CSS pixels.
    fn scroll_y(&self) -> f64;

    /// Scroll the viewport back to the top left.
    fn scroll_to_top(&mut self);

    /// Show a blocking alert dialog.
    fn alert(&mut self, message: &str);
}
