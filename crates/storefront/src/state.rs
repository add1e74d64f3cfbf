//! Application state.
//!
//! Wires the store and every service into one handle the surface holds
//! for the lifetime of the process.

use crate::cart::CartService;
use crate::catalog::Catalog;
use crate::checkout::{CheckoutEngine, CheckoutError};
use crate::config::Config;
use crate::error::Result;
use crate::models::Order;
use crate::orders::OrderLedger;
use crate::services::auth::AuthService;
use crate::store::Store;

use mangastore_core::Username;

/// Everything a storefront surface needs: the store plus one instance of
/// each service, all sharing the same context.
pub struct AppState {
    store: Store,
    catalog: Catalog,
    auth: AuthService,
    carts: CartService,
    orders: OrderLedger,
    checkout: CheckoutEngine,
}

impl AppState {
    /// Open the state against the configured data directory, seeding the
    /// catalog if configured to.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be opened or the
    /// catalog cannot be loaded.
    pub fn open(config: &Config) -> Result<Self> {
        let store = Store::open(&config.data_dir)?;
        Self::from_store(store, config.seed)
    }

    /// Build the state over an existing store handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or seeded.
    pub fn from_store(store: Store, seed: bool) -> Result<Self> {
        let catalog = if seed {
            Catalog::load_or_seed(store.clone())?
        } else {
            Catalog::load(store.clone())?
        };
        Ok(Self {
            catalog,
            auth: AuthService::new(store.clone()),
            carts: CartService::new(store.clone()),
            orders: OrderLedger::new(store.clone()),
            checkout: CheckoutEngine::new(store.clone()),
            store,
        })
    }

    /// The underlying store handle.
    #[must_use]
    pub const fn store(&self) -> &Store {
        &self.store
    }

    /// The product catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The product catalog, mutably.
    pub const fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// The identity directory.
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// The cart ledger.
    #[must_use]
    pub const fn carts(&self) -> &CartService {
        &self.carts
    }

    /// The order ledger.
    #[must_use]
    pub const fn orders(&self) -> &OrderLedger {
        &self.orders
    }

    /// Run a checkout for the user, borrowing the catalog for the stock
    /// decrements.
    ///
    /// # Errors
    ///
    /// See [`CheckoutEngine::checkout`].
    pub fn checkout(&mut self, username: &Username) -> std::result::Result<Order, CheckoutError> {
        self.checkout.checkout(&mut self.catalog, username)
    }
}
