//! CLI command implementations.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod orders;
pub mod seed;

use mangastore_core::Username;
use mangastore_storefront::state::AppState;

/// The username of the active session, or a readable error when nobody
/// is logged in.
pub fn active_user(state: &AppState) -> Result<Username, Box<dyn std::error::Error>> {
    state
        .auth()
        .session()?
        .map(|session| session.username)
        .ok_or_else(|| "no active session; log in first".into())
}
