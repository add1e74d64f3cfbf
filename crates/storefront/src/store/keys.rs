//! Logical key layout of the persistent store.
//!
//! One key for all users, one for the full catalog, one for the current
//! session, plus one cart key and one order-history key per username. The
//! `_v1` suffix versions the record schemas; a future schema bump changes
//! the key rather than migrating in place.

use mangastore_core::Username;

/// All registered users.
pub const USERS: &str = "mangastore_users_v1";

/// The full product catalog.
pub const PRODUCTS: &str = "mangastore_products_v1";

/// The current session (absent when logged out).
pub const SESSION: &str = "mangastore_session_v1";

/// Cart key for one user.
#[must_use]
pub fn cart_for(username: &Username) -> String {
    format!("mangastore_cart_{username}")
}

/// Order-history key for one user.
#[must_use]
pub fn orders_for(username: &Username) -> String {
    format!("mangastore_orders_{username}")
}
