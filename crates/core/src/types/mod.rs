//! Core types for the storefront.
//!
//! This module provides validated wrappers for the few domain concepts a
//! purchase touches.

pub mod customer;
pub mod payment;
pub mod price;
pub mod product;

pub use customer::{CustomerData, CustomerDataError};
pub use payment::PaymentMethod;
pub use price::{Price, PriceError};
pub use product::{Product, ProductError};
