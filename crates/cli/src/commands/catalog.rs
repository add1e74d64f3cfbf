//! Catalog browsing command.

use mangastore_storefront::catalog::SortOrder;
use mangastore_storefront::state::AppState;

/// Print the catalog, filtered and ordered.
///
/// # Errors
///
/// Currently infallible; keeps the command signature uniform.
pub fn browse(
    state: &AppState,
    query: &str,
    sort: SortOrder,
) -> Result<(), Box<dyn std::error::Error>> {
    let matches = state.catalog().browse(query, sort);
    if matches.is_empty() {
        println!("no products match");
        return Ok(());
    }
    for product in matches {
        let price = product.price.to_string();
        println!(
            "{}  {:<42} {:<20} {price:>10}  stock {}",
            product.id, product.title, product.author, product.stock
        );
    }
    Ok(())
}
