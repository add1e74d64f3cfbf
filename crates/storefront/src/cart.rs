//! Cart ledger.
//!
//! Per-user pending purchases, persisted under a per-username key. Reads
//! never require a session; mutations do, and the active session must
//! belong to the cart's owner. Mutations that reference a product resolve
//! it against the catalog snapshot at mutation time.

use thiserror::Error;
use tracing::debug;

use mangastore_core::{ProductId, Username};

use crate::catalog::Catalog;
use crate::models::{Cart, CartItem};
use crate::store::{Store, StoreError, keys};

/// Errors that can occur during cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// A mutation was attempted without a matching active session.
    #[error("no active session")]
    NoActiveSession,

    /// No product with this id.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Persistent store failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Cart ledger over the persistent store.
pub struct CartService {
    store: Store,
}

impl CartService {
    /// Create a new cart ledger.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// The user's cart. Absent or malformed data reads as empty. No
    /// session check: anyone holding a username can read its cart.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn fetch(&self, username: &Username) -> Result<Cart, StoreError> {
        Ok(self
            .store
            .get(&keys::cart_for(username))?
            .unwrap_or_default())
    }

    fn require_session(&self, username: &Username) -> Result<(), CartError> {
        let session: Option<crate::models::Session> = self.store.get(keys::SESSION)?;
        match session {
            Some(session) if session.username == *username => Ok(()),
            _ => Err(CartError::NoActiveSession),
        }
    }

    fn persist(&self, username: &Username, cart: &Cart) -> Result<(), StoreError> {
        self.store.put(&keys::cart_for(username), cart)
    }

    /// Add a product to the cart, merging into an existing line for the
    /// same product. The resulting line quantity is capped at the stock
    /// observed now; requesting more than is available silently caps
    /// rather than erroring. A sold-out product adds nothing, keeping
    /// every line's quantity within stock.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoActiveSession` unless the active session
    /// belongs to `username`, and `CartError::ProductNotFound` if the
    /// id is absent from the catalog.
    pub fn add(
        &self,
        catalog: &Catalog,
        username: &Username,
        id: &ProductId,
        qty: u32,
    ) -> Result<Cart, CartError> {
        self.require_session(username)?;
        let product = catalog
            .find(id)
            .ok_or_else(|| CartError::ProductNotFound(id.clone()))?;

        let mut cart = self.fetch(username)?;
        if product.stock == 0 {
            return Ok(cart);
        }
        if let Some(line) = cart.line_mut(id) {
            line.qty = line.qty.saturating_add(qty).min(product.stock);
        } else {
            cart.push(CartItem::snapshot(product, qty.clamp(1, product.stock)));
        }
        self.persist(username, &cart)?;
        debug!(username = %username, product = %id, "cart line added");
        Ok(cart)
    }

    /// Set a line's quantity, clamped to `[1, stock]`. A line for an
    /// id absent from the cart is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoActiveSession` unless the active session
    /// belongs to `username`, and `CartError::ProductNotFound` if a
    /// present line's id no longer resolves against the catalog.
    pub fn set_quantity(
        &self,
        catalog: &Catalog,
        username: &Username,
        id: &ProductId,
        qty: u32,
    ) -> Result<Cart, CartError> {
        self.require_session(username)?;

        let mut cart = self.fetch(username)?;
        if let Some(line) = cart.line_mut(id) {
            let product = catalog
                .find(id)
                .ok_or_else(|| CartError::ProductNotFound(id.clone()))?;
            line.qty = qty.min(product.stock).max(1);
            self.persist(username, &cart)?;
        }
        Ok(cart)
    }

    /// Remove a line. Removing an absent line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoActiveSession` unless the active session
    /// belongs to `username`.
    pub fn remove(&self, username: &Username, id: &ProductId) -> Result<Cart, CartError> {
        self.require_session(username)?;

        let mut cart = self.fetch(username)?;
        cart.remove_line(id);
        self.persist(username, &cart)?;
        Ok(cart)
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns `CartError::NoActiveSession` unless the active session
    /// belongs to `username`.
    pub fn clear(&self, username: &Username) -> Result<(), CartError> {
        self.require_session(username)?;
        self.persist(username, &Cart::default())?;
        Ok(())
    }

    // Checkout clears the cart after the session was already validated.
    pub(crate) fn replace(&self, username: &Username, cart: &Cart) -> Result<(), StoreError> {
        self.persist(username, cart)
    }
}
