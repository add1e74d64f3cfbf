//! Catalog seeding command.

use mangastore_storefront::state::AppState;

/// Report the catalog size after startup seeding.
///
/// Seeding itself happens when the state opens: an absent products key is
/// populated with the sample list, a present one is left alone. This
/// command exists so a fresh data directory can be initialized without
/// running any other operation.
///
/// # Errors
///
/// Currently infallible; keeps the command signature uniform.
pub fn run(state: &AppState) -> Result<(), Box<dyn std::error::Error>> {
    println!("catalog holds {} products", state.catalog().list().len());
    Ok(())
}
