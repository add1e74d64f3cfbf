//! Integration tests for MangaStore.
//!
//! Each test opens a fresh data directory, drives the engine through the
//! public `AppState` surface, and asserts on what was persisted. A second
//! `AppState` over the same directory stands in for another open context
//! (tab) of the same store.
//!
//! # Test Categories
//!
//! - `auth_flow` - Registration, login, and session lifecycle
//! - `checkout_flow` - Cart to order commit sequence
//! - `store_consistency` - Cross-context visibility and fallback behavior

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;

use mangastore_storefront::error::Result;
use mangastore_storefront::state::AppState;
use mangastore_storefront::store::Store;

/// A seeded engine over a throwaway data directory.
pub struct TestContext {
    dir: TempDir,
    pub state: AppState,
}

impl TestContext {
    /// Open a fresh data directory with the sample catalog seeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or catalog cannot be set up.
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().map_err(mangastore_storefront::store::StoreError::from)?;
        let store = Store::open(dir.path())?;
        let state = AppState::from_store(store, true)?;
        Ok(Self { dir, state })
    }

    /// A second engine over the same directory: another context sharing
    /// the store, like a second browser tab.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be reopened.
    pub fn another_context(&self) -> Result<AppState> {
        let store = Store::open(self.dir.path())?;
        AppState::from_store(store, false)
    }

    /// Path of the backing data directory.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}
