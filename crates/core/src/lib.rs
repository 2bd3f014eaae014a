//! Kesley Cakes Core - Shared domain types.
//!
//! This crate provides the types the storefront interaction layer is built on:
//! - [`types`] - Prices, products, customer data and payment methods
//! - [`cart`] - The in-memory cart with its running total
//! - [`mask`] - Progressive phone and CPF/CNPJ formatting
//! - [`filter`] - Keystroke predicates for the checkout form fields
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no DOM access,
//! no timers, no logging. This keeps it lightweight and lets every rule be
//! unit tested without a browser.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filter;
pub mod mask;
pub mod types;

pub use cart::{Cart, CartItem};
pub use types::*;
