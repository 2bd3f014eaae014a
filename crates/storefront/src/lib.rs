//! Kesley Cakes Storefront - Client-side interaction layer.
//!
//! Drives the single-page bakery storefront: the login gate, the shrinking
//! header, the purchase flow through the customer-data modal and the
//! receipt, the payment modals, and the masks on the checkout fields.
//!
//! # Architecture
//!
//! - [`controller::Storefront`] owns the session state and reacts to events
//! - [`dom::Document`] abstracts the page; [`dom::MemoryDocument`] is an
//!   in-memory page for tests and headless hosts
//! - [`events::EventTable`] maps (target, event kind) to a handler, built at
//!   bootstrap for the elements the page actually has
//! - Timer-delayed steps are queued as [`schedule::Deferred`] actions that the
//!   host runs after their delay
//! - Askama renders the receipt with HTML escaping
//!
//! The `web` feature adds the browser binding (`web-sys` document, listener
//! wiring, timers, and the global functions the markup calls).

#![cfg_attr(not(any(test, feature = "web")), forbid(unsafe_code))]

pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod events;
pub mod receipt;
pub mod schedule;
pub mod state;
pub mod telemetry;

// wasm-bindgen expands exported functions into unsafe FFI glue
#[cfg(feature = "web")]
#[allow(unsafe_code)]
pub mod web;

pub use config::StorefrontConfig;
pub use controller::Storefront;
pub use error::CheckoutError;
