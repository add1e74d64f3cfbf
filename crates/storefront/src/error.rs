//! Unified error handling.
//!
//! Provides a unified `StorefrontError` type aggregating the typed failures
//! of every engine component. All failures are synchronous and locally
//! recoverable - the surface collaborator catches each and presents a
//! message; none is fatal to the process.

use thiserror::Error;

use crate::cart::CartError;
use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Application-level error type for the storefront engine.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Identity operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Cart ledger operation failed.
    #[error("cart error: {0}")]
    Cart(#[from] CartError),

    /// Catalog operation failed.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Checkout was rejected or failed mid-commit.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Persistent store operation failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
