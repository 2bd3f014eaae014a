//! In-memory cart.
//!
//! The total is a running sum updated on every [`Cart::add`] and reset by
//! [`Cart::clear`]; it is never recomputed from the items. Those two methods
//! are the only mutation paths, which keeps `total == sum(items.price)`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, Product};

/// One purchased line: the product name and the price paid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: String,
    pub price: Price,
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name().to_owned(),
            price: product.price(),
        }
    }
}

/// Ordered line items plus their running total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    items: Vec<CartItem>,
    total: Decimal,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product and add its price to the total.
    pub fn add(&mut self, product: &Product) {
        let item = CartItem::from(product);
        self.total += item.price.amount();
        self.items.push(item);
        debug_assert!(self.is_consistent());
    }

    /// Remove every item and reset the total to zero.
    pub fn clear(&mut self) {
        self.items.clear();
        self.total = Decimal::ZERO;
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Running total.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Whether the running total matches the item prices.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let sum: Decimal = self.items.iter().map(|item| item.price.amount()).sum();
        sum == self.total
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(name: &str, price: &str) -> Product {
        Product::new(name, Price::parse(price).unwrap()).unwrap()
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.is_consistent());
    }

    #[test]
    fn test_add_updates_total() {
        let mut cart = Cart::new();
        cart.add(&product("Bolo de Pote", "12.50"));
        cart.add(&product("Brownie", "8.75"));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), Decimal::new(2125, 2));
        assert!(cart.is_consistent());
    }

    #[test]
    fn test_items_keep_order() {
        let mut cart = Cart::new();
        cart.add(&product("Brownie", "8"));
        cart.add(&product("Pudim", "15"));

        let names: Vec<&str> = cart.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Brownie", "Pudim"]);
    }

    #[test]
    fn test_clear_resets_items_and_total() {
        let mut cart = Cart::new();
        cart.add(&product("Pudim", "15"));
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total(), Decimal::ZERO);
        assert!(cart.is_consistent());
    }

    #[test]
    fn test_decimal_total_has_no_drift() {
        let mut cart = Cart::new();
        for _ in 0..10 {
            cart.add(&product("Bala", "0.10"));
        }
        assert_eq!(cart.total(), Decimal::ONE);
    }
}
