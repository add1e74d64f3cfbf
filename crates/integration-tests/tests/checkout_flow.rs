//! The cart-to-order commit sequence over a real data directory.

#![allow(clippy::unwrap_used)]

use mangastore_core::{ProductId, Username};
use mangastore_integration_tests::TestContext;
use mangastore_storefront::checkout::CheckoutError;
use mangastore_storefront::models::Receipt;
use mangastore_storefront::state::AppState;

fn log_in(state: &AppState, name: &str) -> Username {
    state
        .auth()
        .register(name, &format!("{name}@example.com"), "pw")
        .unwrap();
    state.auth().login(name, "pw").unwrap().username
}

#[test]
fn test_checkout_produces_a_durable_order() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    let id = ProductId::new("m003");
    let product = ctx.state.catalog().find(&id).unwrap().clone();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 2)
        .unwrap();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 1)
        .unwrap();

    let order = ctx.state.checkout(&alice).unwrap();
    assert!(order.id.as_str().starts_with("ORD-"));
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].qty, 3);
    assert_eq!(order.total, product.price.times(3));

    // Stock moved, cart emptied, history grew, all visible elsewhere.
    let other = ctx.another_context().unwrap();
    assert_eq!(other.catalog().find(&id).unwrap().stock, product.stock - 3);
    assert!(other.carts().fetch(&alice).unwrap().is_empty());
    let history = other.orders().list_for(&alice).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].id, order.id);
}

#[test]
fn test_two_line_checkout_totals_and_decrements_both_stocks() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    // 12000 x 1 + 11000 x 2 = 34000.
    let first_id = ProductId::new("m001");
    let second_id = ProductId::new("m002");
    let first = ctx.state.catalog().find(&first_id).unwrap().clone();
    let second = ctx.state.catalog().find(&second_id).unwrap().clone();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &first_id, 1)
        .unwrap();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &second_id, 2)
        .unwrap();

    let order = ctx.state.checkout(&alice).unwrap();
    assert_eq!(order.total.amount(), 34_000);
    assert_eq!(order.items.len(), 2);

    assert_eq!(
        ctx.state.catalog().find(&first_id).unwrap().stock,
        first.stock - 1
    );
    assert_eq!(
        ctx.state.catalog().find(&second_id).unwrap().stock,
        second.stock - 2
    );
    assert!(ctx.state.carts().fetch(&alice).unwrap().is_empty());
    assert_eq!(ctx.state.orders().list_for(&alice).unwrap().len(), 1);
}

#[test]
fn test_checkout_rejects_an_empty_cart() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    let err = ctx.state.checkout(&alice).unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
    assert!(ctx.state.orders().list_for(&alice).unwrap().is_empty());
}

#[test]
fn test_checkout_rejects_a_missing_session() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    let id = ctx.state.catalog().list()[0].id.clone();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 1)
        .unwrap();
    ctx.state.auth().logout().unwrap();

    let err = ctx.state.checkout(&alice).unwrap_err();
    assert!(matches!(err, CheckoutError::NoActiveSession));

    // Nothing moved.
    assert!(ctx.state.orders().list_for(&alice).unwrap().is_empty());
    assert_eq!(ctx.state.carts().fetch(&alice).unwrap().lines().len(), 1);
}

#[test]
fn test_sold_out_product_cannot_be_added_or_oversold_alone() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    // Buy out m004 (stock 4) entirely.
    let id = ProductId::new("m004");
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 4)
        .unwrap();
    ctx.state.checkout(&alice).unwrap();
    assert_eq!(ctx.state.catalog().find(&id).unwrap().stock, 0);

    // A later add sees the sold-out product and leaves the cart alone,
    // so no single context can oversell on its own.
    let cart = ctx
        .state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 1)
        .unwrap();
    assert!(cart.is_empty());
    let err = ctx.state.checkout(&alice).unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
}

#[test]
fn test_racing_contexts_oversell_and_stock_floors_at_zero() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    // Both contexts observe stock 4 and fill their carts before either
    // checks out; last writer wins, so the total sold exceeds stock.
    let id = ProductId::new("m004");
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 4)
        .unwrap();

    let mut second = ctx.another_context().unwrap();
    let bob = log_in(&second, "bob");
    second
        .carts()
        .add(second.catalog(), &bob, &id, 4)
        .unwrap();
    second.checkout(&bob).unwrap();

    // Alice's cart still holds four units from before the sellout; her
    // checkout saturates the decrement instead of going negative.
    ctx.state.auth().login("alice", "pw").unwrap();
    ctx.state.catalog_mut().reload().unwrap();
    ctx.state.checkout(&alice).unwrap();

    let fresh = ctx.another_context().unwrap();
    assert_eq!(fresh.catalog().find(&id).unwrap().stock, 0);
    assert_eq!(fresh.orders().list_for(&alice).unwrap().len(), 1);
    assert_eq!(fresh.orders().list_for(&bob).unwrap().len(), 1);
}

#[test]
fn test_two_checkouts_append_two_orders() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    let product = ctx.state.catalog().list()[0].clone();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &product.id, 1)
        .unwrap();
    ctx.state.checkout(&alice).unwrap();

    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &product.id, 2)
        .unwrap();
    ctx.state.checkout(&alice).unwrap();

    let history = ctx.state.orders().list_for(&alice).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].total, product.price);
    assert_eq!(history[1].total, product.price.times(2));
}

#[test]
fn test_receipt_serializes_the_scannable_triple() {
    let mut ctx = TestContext::new().unwrap();
    let alice = log_in(&ctx.state, "alice");

    let id = ctx.state.catalog().list()[0].id.clone();
    ctx.state
        .carts()
        .add(ctx.state.catalog(), &alice, &id, 1)
        .unwrap();
    let order = ctx.state.checkout(&alice).unwrap();

    let receipt = Receipt::from(&order);
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&receipt).unwrap()).unwrap();
    assert_eq!(json["id"], order.id.as_str());
    assert_eq!(json["total"], order.total.amount());
    assert!(json["date"].is_string());
}
