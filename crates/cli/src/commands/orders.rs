//! Order history and checkout commands.

use mangastore_storefront::models::Receipt;
use mangastore_storefront::state::AppState;

use super::active_user;

/// Print the active user's order history, oldest first.
///
/// # Errors
///
/// Returns an error without a session.
pub fn list(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    let orders = state.orders().list_for(&username)?;
    if orders.is_empty() {
        println!("no orders yet");
        return Ok(());
    }
    for order in orders {
        let total = order.total.to_string();
        println!(
            "{}  {}  {total:>10}  ({} lines)",
            order.id,
            order.date,
            order.items.len()
        );
    }
    Ok(())
}

/// Place an order from the active user's cart and print the receipt as
/// JSON, ready for QR encoding.
///
/// # Errors
///
/// Returns an error without a session, with an empty cart, or if the
/// commit sequence fails.
pub fn checkout(state: &mut AppState) -> Result<(), Box<dyn std::error::Error>> {
    let username = active_user(state)?;
    let order = state.checkout(&username)?;
    let receipt = Receipt::from(&order);
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}
