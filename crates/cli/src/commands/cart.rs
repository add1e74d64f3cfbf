//! Cart commands for the active user.

use mangastore_core::ProductId;
use mangastore_storefront::state::AppState;

use super::active_user;

/// Add a product to the active user's cart.
///
/// # Errors
///
/// Returns an error without a session or for an unknown product id.
pub fn add(state: &AppState, id: &str, qty: u32) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    let id = ProductId::new(id);
    let cart = state.carts().add(state.catalog(), &username, &id, qty)?;
    println!("cart subtotal {}", cart.subtotal());
    Ok(())
}

/// Set a line's quantity in the active user's cart.
///
/// # Errors
///
/// Returns an error without a session or for an unknown product id.
pub fn set(state: &AppState, id: &str, qty: u32) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    let id = ProductId::new(id);
    let cart = state
        .carts()
        .set_quantity(state.catalog(), &username, &id, qty)?;
    println!("cart subtotal {}", cart.subtotal());
    Ok(())
}

/// Remove a line from the active user's cart.
///
/// # Errors
///
/// Returns an error without a session.
pub fn remove(state: &AppState, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    let cart = state.carts().remove(&username, &ProductId::new(id))?;
    println!("cart subtotal {}", cart.subtotal());
    Ok(())
}

/// Empty the active user's cart.
///
/// # Errors
///
/// Returns an error without a session.
pub fn clear(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    state.carts().clear(&username)?;
    println!("cart cleared");
    Ok(())
}

/// Print the active user's cart with line totals.
///
/// # Errors
///
/// Returns an error without a session.
pub fn show(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    let cart = state.carts().fetch(&username)?;
    if cart.is_empty() {
        println!("cart is empty");
        return Ok(());
    }
    for line in cart.lines() {
        let total = line.line_total().to_string();
        println!("{}  {:<42} x{:<3} {total:>10}", line.id, line.title, line.qty);
    }
    println!(
        "total: {} ({} items)",
        cart.subtotal(),
        cart.total_quantity()
    );
    Ok(())
}
