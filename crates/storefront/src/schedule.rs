//! Timer-delayed follow-up steps.
//!
//! Some handlers change visibility and then need the page to reflow before
//! the next step (scrolling, focusing). The controller queues those steps
//! instead of owning a timer; the host drains the queue and runs each action
//! once its delay has passed.

use std::time::Duration;

use crate::dom::Selector;

/// A step to run later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferredAction {
    /// Scroll the viewport to the top, then re-evaluate the header.
    ScrollToTopAndRefreshHeader,
    /// Focus a form field.
    Focus(Selector),
}

/// A queued action and how long after queueing it should run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deferred {
    pub delay: Duration,
    pub action: DeferredAction,
}
