//! Checkout progress, cart and stub data together.

use std::sync::Arc;
use std::time::Duration;

use blush_commerce::data::{CatalogService, InMemoryCatalog, NoDelay, OrderService, StubCatalog, StubOrders};
use blush_commerce::prelude::*;
use blush_commerce::{Money, ProductId};

fn address() -> Address {
    Address::new(
        "Asha Rao",
        "9876543210",
        "12 MG Road",
        "Bengaluru",
        "Karnataka",
        "560001",
    )
}

#[test]
fn test_step_machine_saturates() {
    let mut progress = CheckoutProgress::new();
    for _ in 0..5 {
        progress.next_step();
    }
    assert_eq!(progress.current_step(), 3);

    for _ in 0..5 {
        progress.previous_step();
    }
    assert_eq!(progress.current_step(), 1);
}

#[test]
fn test_reset_clears_everything() {
    let mut progress = CheckoutProgress::new();
    progress.set_selected_address(address());
    progress.next_step();
    progress.next_step();
    progress.reset_checkout();

    assert_eq!(progress, CheckoutProgress::new());
    assert_eq!(progress.current_step(), 1);
    assert!(progress.selected_address().is_none());
    assert!(progress.selected_payment().is_none());
}

#[test]
fn test_full_checkout_walkthrough() {
    let mut cart = Cart::new();
    cart.add_item(ProductId::new("p-serum"), "Rose Glow Serum", Money::rupees(899), 2)
        .unwrap();

    let mut progress = CheckoutProgress::new();
    assert!(!progress.missing_for_next().is_empty());

    progress.set_selected_address(address());
    assert!(progress.missing_for_next().is_empty());
    progress.next_step();
    assert_eq!(progress.step(), Some(CheckoutStep::Payment));

    progress.set_selected_payment(PaymentMethod::new(PaymentKind::Upi));
    progress.next_step();
    assert_eq!(progress.step(), Some(CheckoutStep::Confirmation));
    assert_eq!(cart.subtotal(), Money::rupees(1798));

    cart.clear();
    progress.reset_checkout();
    assert!(cart.is_empty());
    assert_eq!(progress.step(), Some(CheckoutStep::Shipping));
}

#[tokio::test]
async fn test_stub_services_resolve_empty() {
    let catalog = StubCatalog::new(Arc::new(NoDelay), Duration::from_millis(500));
    let orders = StubOrders::new(Arc::new(NoDelay), Duration::from_millis(500));

    let page = catalog.fetch_products(&ListOptions::default()).await.unwrap();
    assert!(page.is_empty());
    assert!(!page.has_more);
    assert_eq!(catalog.fetch_product("anything").await.unwrap(), None);
    assert!(orders.fetch_orders(&ListOptions::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_in_memory_catalog_search() {
    let catalog = InMemoryCatalog::new(vec![Product::new(
        "p-1",
        "rose-glow-serum",
        "Rose Glow Serum",
        Money::rupees(899),
    )
    .with_brand("Blush")
    .with_category("skincare")]);

    let found = catalog
        .fetch_products(&ListOptions::default().with_query("rose"))
        .await
        .unwrap();
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].href(), "/product/rose-glow-serum");
}
