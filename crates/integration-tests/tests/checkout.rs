//! Integration tests for the purchase flow: product click, customer form,
//! receipt and payment modals.

#![allow(clippy::unwrap_used)]

use kesley_cakes_core::{CustomerDataError, PaymentMethod};
use kesley_cakes_integration_tests::TestStore;
use kesley_cakes_storefront::CheckoutError;
use kesley_cakes_storefront::dom::{Display, Document};
use kesley_cakes_storefront::receipt::TAX_ID_NOT_GIVEN;
use kesley_cakes_storefront::state::PurchaseStage;
use rust_decimal::Decimal;

fn store_with_product(name: &str, price: f64) -> TestStore {
    let mut store = TestStore::new();
    store.app.login();
    store.app.flush_deferred();
    store.app.buy_product(name, price).unwrap();
    store.app.flush_deferred();
    store
}

fn receipt_html(store: &TestStore) -> String {
    store
        .doc()
        .element(&store.ids().receipt_details)
        .unwrap()
        .inner_html
        .clone()
}

// =============================================================================
// Product selection
// =============================================================================

#[test]
fn test_buy_product_opens_customer_modal() {
    let store = store_with_product("Bolo de Cenoura", 45.0);
    let ids = store.ids();

    let modal = store.doc().element(&ids.customer_modal).unwrap();
    assert_eq!(modal.display, Some(Display::Flex));
    assert_eq!(store.doc().focused(), Some(&ids.name_input));

    let state = store.app.state();
    assert_eq!(state.stage(), PurchaseStage::AwaitingCustomerData);
    assert_eq!(state.selected_product().unwrap().name(), "Bolo de Cenoura");
}

#[test]
fn test_buy_product_rejects_bad_arguments() {
    let mut store = TestStore::new();
    let ids = store.ids().clone();

    for (name, price) in [("Bolo", 0.0), ("Bolo", -3.0), ("Bolo", f64::NAN), ("  ", 10.0)] {
        let err = store.app.buy_product(name, price).unwrap_err();
        assert!(matches!(err, CheckoutError::Product(_)), "{name:?} {price}");
    }

    assert_eq!(store.doc().alerts().len(), 4);
    assert!(!store.doc().is_shown(&ids.customer_modal));
    assert!(store.app.state().selected_product().is_none());
    assert_eq!(store.app.state().stage(), PurchaseStage::Idle);
    assert!(store.app.take_deferred().is_empty());
}

#[test]
fn test_second_product_replaces_first() {
    let mut store = store_with_product("Brownie", 8.0);
    store.app.buy_product("Pudim", 15.0).unwrap();
    store.fill_customer_form("Ana", "11987654321", "");

    let receipt = store.app.continue_to_payment().unwrap();
    assert_eq!(receipt.product().name(), "Pudim");
}

// =============================================================================
// Customer form validation
// =============================================================================

#[test]
fn test_missing_name() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("", "11987654321", "");

    let err = store.app.continue_to_payment().unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::Customer(CustomerDataError::MissingName)
    ));
    assert_eq!(store.doc().alerts(), [err.alert_message()]);
    assert!(store.doc().is_shown(&store.ids().customer_modal));
}

#[test]
fn test_missing_phone() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "", "");

    let err = store.app.continue_to_payment().unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::Customer(CustomerDataError::MissingPhone)
    ));
}

#[test]
fn test_short_phone_keeps_form() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "119876543", "");

    let err = store.app.continue_to_payment().unwrap_err();
    assert!(matches!(
        err,
        CheckoutError::Customer(CustomerDataError::PhoneTooShort { digits: 9, min: 10 })
    ));

    // Nothing was cleared; the customer can fix the phone and retry.
    let ids = store.ids().clone();
    assert_eq!(store.value(&ids.name_input), "Ana");
    assert!(!store.value(&ids.phone_input).is_empty());
    assert_eq!(store.app.state().stage(), PurchaseStage::AwaitingCustomerData);

    store.type_into(&ids.phone_input, "1");
    assert!(store.app.continue_to_payment().is_ok());
}

#[test]
fn test_landline_is_accepted() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "1133334444", "");
    assert!(store.app.continue_to_payment().is_ok());
}

#[test]
fn test_continue_without_product() {
    let mut store = TestStore::new();
    store.fill_customer_form("Ana", "11987654321", "");

    let err = store.app.continue_to_payment().unwrap_err();
    assert!(matches!(err, CheckoutError::NoProductSelected));
    assert!(!store.doc().is_shown(&store.ids().receipt_modal));
}

// =============================================================================
// Receipt
// =============================================================================

#[test]
fn test_checkout_issues_receipt() {
    let mut store = store_with_product("Bolo de Cenoura", 45.0);
    store.fill_customer_form("Ana Souza", "11987654321", "12345678901");

    let receipt = store.app.continue_to_payment().unwrap();
    assert_eq!(receipt.customer().name(), "Ana Souza");
    assert_eq!(receipt.customer().phone(), "(11) 98765-4321");
    assert_eq!(receipt.customer().tax_id(), Some("123.456.789-01"));

    let ids = store.ids().clone();
    let doc = store.doc();
    assert!(!doc.is_shown(&ids.customer_modal));
    assert_eq!(
        doc.element(&ids.receipt_modal).unwrap().display,
        Some(Display::Flex)
    );
    for field in ids.customer_fields() {
        assert_eq!(store.value(field), "");
    }

    let html = receipt_html(&store);
    assert!(html.contains("Ana Souza"));
    assert!(html.contains("(11) 98765-4321"));
    assert!(html.contains("123.456.789-01"));
    assert!(html.contains("Bolo de Cenoura"));
    assert!(html.contains("R$ 45,00"));
}

#[test]
fn test_cart_is_single_item_per_checkout() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "11987654321", "");
    store.app.continue_to_payment().unwrap();

    let cart = store.app.state().cart();
    assert_eq!(cart.len(), 0);
    assert_eq!(cart.total(), Decimal::ZERO);
    assert!(cart.is_consistent());
}

#[test]
fn test_receipt_without_tax_id() {
    let mut store = store_with_product("Pudim", 15.0);
    store.fill_customer_form("Ana", "11987654321", "");
    store.app.continue_to_payment().unwrap();

    assert!(receipt_html(&store).contains(TAX_ID_NOT_GIVEN));
}

#[test]
fn test_receipt_price_rounds_half_up() {
    let mut store = store_with_product("Brigadeiro", 1.125);
    store.fill_customer_form("Ana", "11987654321", "");
    store.app.continue_to_payment().unwrap();

    assert!(receipt_html(&store).contains("R$ 1,13"));
}

#[test]
fn test_receipt_escapes_markup() {
    let mut store = TestStore::new();
    store.app.buy_product("Torta <em>& cia</em>", 30.0).unwrap();
    let ids = store.ids().clone();
    // Pasting skips the keystroke filter on the name field.
    store.paste_into(&ids.name_input, "<script>alert(1)</script>");
    store.type_into(&ids.phone_input, "11987654321");
    store.app.continue_to_payment().unwrap();

    let html = receipt_html(&store);
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<em>"));
    assert!(html.contains("&#60;script&#62;"));
    assert!(html.contains("Torta &#60;em&#62;&#38; cia"));
}

#[test]
fn test_receipt_missing_from_page() {
    let mut store = store_with_product("Bolo", 45.0);
    let ids = store.ids().clone();
    store.app.document_mut().remove(&ids.receipt_details);
    store.fill_customer_form("Ana", "11987654321", "");

    // The purchase still completes; there is just nowhere to show it.
    let receipt = store.app.continue_to_payment().unwrap();
    assert_eq!(receipt.product().name(), "Bolo");
    assert!(!store.doc().is_shown(&ids.receipt_modal));
    assert_eq!(store.app.state().stage(), PurchaseStage::ReceiptShown);
}

// =============================================================================
// Modals
// =============================================================================

#[test]
fn test_close_receipt_ends_purchase() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "11987654321", "");
    store.app.continue_to_payment().unwrap();
    assert_eq!(store.app.state().stage(), PurchaseStage::ReceiptShown);

    store.app.close_receipt();
    assert!(!store.doc().is_shown(&store.ids().receipt_modal));
    assert_eq!(store.app.state().stage(), PurchaseStage::Idle);
}

#[test]
fn test_close_customer_modal_abandons_purchase() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "1198", "");

    store.app.close_customer_modal();

    let ids = store.ids().clone();
    assert!(!store.doc().is_shown(&ids.customer_modal));
    assert_eq!(store.value(&ids.name_input), "");
    assert_eq!(store.value(&ids.phone_input), "");
    assert_eq!(store.app.state().stage(), PurchaseStage::Idle);
}

#[test]
fn test_clear_form_keeps_modal_open() {
    let mut store = store_with_product("Bolo", 45.0);
    store.fill_customer_form("Ana", "11987654321", "12345678901");

    store.app.clear_customer_form();

    let ids = store.ids().clone();
    for field in ids.customer_fields() {
        assert_eq!(store.value(field), "");
    }
    assert!(store.doc().is_shown(&ids.customer_modal));
    assert_eq!(store.app.state().stage(), PurchaseStage::AwaitingCustomerData);
}

#[test]
fn test_register_modal() {
    let mut store = TestStore::new();
    let ids = store.ids().clone();

    assert_eq!(store.app.select_payment("boleto"), None);
    assert!(!store.doc().is_shown(&ids.register_modal));

    assert_eq!(store.app.select_payment("dinheiro"), Some(PaymentMethod::Cash));
    assert!(store.doc().is_shown(&ids.register_modal));

    store.app.close_register();
    assert!(!store.doc().is_shown(&ids.register_modal));
    assert!(!store.doc().is_shown(&ids.receipt_modal));
}

#[test]
fn test_close_pix() {
    let mut store = TestStore::new();
    let ids = store.ids().clone();
    store
        .app
        .document_mut()
        .set_display(&ids.pix_modal, Display::Flex);
    store.app.close_pix();
    assert!(!store.doc().is_shown(&ids.pix_modal));
}

#[test]
fn test_session_snapshot() {
    let mut store = store_with_product("Brownie", 8.0);
    store.fill_customer_form("Ana", "11987654321", "");
    store.app.continue_to_payment().unwrap();

    let json = serde_json::to_value(store.app.state()).unwrap();
    assert_eq!(json["logged_in"], true);
    assert_eq!(json["stage"], "receipt_shown");
    assert_eq!(json["selected"]["name"], "Brownie");
    let total: Decimal = json["cart"]["total"].as_str().unwrap().parse().unwrap();
    assert_eq!(total, Decimal::ZERO);
}
