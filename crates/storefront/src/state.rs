//! Session state owned by the controller.

use kesley_cakes_core::{Cart, Product};
use serde::Serialize;

/// Where the customer is in the purchase flow.
///
/// `Idle → AwaitingCustomerData → ReceiptShown → Idle`. Closing the customer
/// modal abandons the purchase and also returns to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseStage {
    #[default]
    Idle,
    AwaitingCustomerData,
    ReceiptShown,
}

/// Everything one visitor's session holds.
///
/// Serializes to a snapshot hosts can log or expose for debugging.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    logged_in: bool,
    stage: PurchaseStage,
    selected: Option<Product>,
    cart: Cart,
}

impl SessionState {
    /// Fresh session: logged out, idle, nothing selected, empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the store view has been revealed.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    /// Current purchase stage.
    #[must_use]
    pub const fn stage(&self) -> PurchaseStage {
        self.stage
    }

    /// Product currently being bought.
    #[must_use]
    pub const fn selected_product(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    /// The cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    pub(crate) const fn set_logged_in(&mut self) {
        self.logged_in = true;
    }

    pub(crate) const fn set_stage(&mut self, stage: PurchaseStage) {
        self.stage = stage;
    }

    /// Store a product for purchase and wait for the customer's data.
    pub(crate) fn select(&mut self, product: Product) {
        self.selected = Some(product);
        self.stage = PurchaseStage::AwaitingCustomerData;
    }

    pub(crate) const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let state = SessionState::new();
        assert!(!state.is_logged_in());
        assert_eq!(state.stage(), PurchaseStage::Idle);
        assert!(state.selected_product().is_none());
        assert!(state.cart().is_empty());
    }

    #[test]
    fn test_select_overwrites() {
        let mut state = SessionState::new();
        state.select(Product::from_raw("Brownie", 8.0).unwrap());
        state.select(Product::from_raw("Pudim", 15.0).unwrap());

        assert_eq!(state.selected_product().unwrap().name(), "Pudim");
        assert_eq!(state.stage(), PurchaseStage::AwaitingCustomerData);
    }

    #[test]
    fn test_snapshot_json() {
        let mut state = SessionState::new();
        state.select(Product::from_raw("Brownie", 8.0).unwrap());

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["stage"], "awaiting_customer_data");
        assert_eq!(json["selected"]["name"], "Brownie");
        assert_eq!(json["cart"]["items"].as_array().unwrap().len(), 0);
    }
}
