//! Event registration table.
//!
//! Listeners are data: each entry maps an event target and kind to a
//! [`Handler`]. The controller fills the table at bootstrap and dispatches
//! through it; the browser binding attaches one listener per entry.

use std::collections::HashMap;

use crate::dom::Selector;

/// DOM event types the storefront listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Click,
    KeyPress,
    Input,
    Scroll,
    Load,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::KeyPress => "keypress",
            Self::Input => "input",
            Self::Scroll => "scroll",
            Self::Load => "load",
        }
    }
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    Window,
    Element(Selector),
}

/// What runs when a registered event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    /// Re-evaluate the header's shrunk state.
    RefreshHeader,
    /// Simulated copy of the Pix key.
    CopyPixKey,
    /// Cancel keystrokes that are not letters or whitespace.
    FilterNameKey,
    /// Cancel keystrokes that are not digits.
    FilterDigitKey,
    /// Re-mask the phone field.
    MaskPhone,
    /// Re-mask the CPF/CNPJ field and adjust its `maxLength`.
    MaskTaxId,
}

/// An event as seen by the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub target: Target,
    pub kind: EventKind,
    /// Typed character, for keypress events that produce exactly one.
    pub key: Option<char>,
}

impl DomEvent {
    #[must_use]
    pub const fn click(target: Selector) -> Self {
        Self {
            target: Target::Element(target),
            kind: EventKind::Click,
            key: None,
        }
    }

    #[must_use]
    pub const fn keypress(target: Selector, key: char) -> Self {
        Self {
            target: Target::Element(target),
            kind: EventKind::KeyPress,
            key: Some(key),
        }
    }

    #[must_use]
    pub const fn input(target: Selector) -> Self {
        Self {
            target: Target::Element(target),
            kind: EventKind::Input,
            key: None,
        }
    }

    #[must_use]
    pub const fn scroll() -> Self {
        Self {
            target: Target::Window,
            kind: EventKind::Scroll,
            key: None,
        }
    }

    #[must_use]
    pub const fn load() -> Self {
        Self {
            target: Target::Window,
            kind: EventKind::Load,
            key: None,
        }
    }
}

/// Whether the event's default action should still happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    PreventDefault,
}

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub target: Target,
    pub kind: EventKind,
    pub handler: Handler,
}

/// Handlers keyed by target and event kind.
#[derive(Debug, Clone, Default)]
pub struct EventTable {
    entries: HashMap<(Target, EventKind), Handler>,
}

impl EventTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler, returning the one it replaces.
    pub fn register(&mut self, target: Target, kind: EventKind, handler: Handler) -> Option<Handler> {
        self.entries.insert((target, kind), handler)
    }

    /// Handler for this target and kind.
    #[must_use]
    pub fn lookup(&self, target: &Target, kind: EventKind) -> Option<Handler> {
        // Tuple keys can't be borrowed piecewise, so build the key.
        self.entries.get(&(target.clone(), kind)).copied()
    }

    /// All registrations, sorted by target then kind.
    #[must_use]
    pub fn registrations(&self) -> Vec<Registration> {
        let mut rows: Vec<Registration> = self
            .entries
            .iter()
            .map(|((target, kind), handler)| Registration {
                target: target.clone(),
                kind: *kind,
                handler: *handler,
            })
            .collect();
        rows.sort_by(|a, b| (&a.target, a.kind).cmp(&(&b.target, b.kind)));
        rows
    }

    /// Number of registrations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
