//! Checkout engine.
//!
//! Turns a non-empty cart into a durable order. The commit sequence is
//! fixed: the order is appended to the history first, then stock is
//! decremented per line, then the cart is cleared. A failure mid-sequence
//! leaves the earlier steps in place, so the order survives even when the
//! stock write or cart clear does not.

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use mangastore_core::{OrderId, Username};

use crate::cart::CartService;
use crate::catalog::{Catalog, CatalogError};
use crate::models::{Cart, Order, Session};
use crate::orders::OrderLedger;
use crate::store::{Store, StoreError, keys};

/// Errors that can occur during checkout.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// No active session for the buyer.
    #[error("no active session")]
    NoActiveSession,

    /// The cart has nothing to purchase.
    #[error("the cart is empty")]
    EmptyCart,

    /// Persistent store failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// Phase of a checkout attempt. Transient: traced for observability,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    /// Nothing in flight.
    Idle,
    /// Session and cart checks running.
    Validating,
    /// Order append, stock decrement, and cart clear running.
    Committing,
    /// The order is durable and the cart is cleared.
    Done,
    /// Validation failed; nothing was written.
    Rejected,
}

fn trace_state(state: CheckoutState) {
    info!(state = ?state, "checkout");
}

/// Checkout engine over the persistent store.
pub struct CheckoutEngine {
    store: Store,
    carts: CartService,
    orders: OrderLedger,
}

impl CheckoutEngine {
    /// Create a new checkout engine.
    #[must_use]
    pub fn new(store: Store) -> Self {
        let carts = CartService::new(store.clone());
        let orders = OrderLedger::new(store.clone());
        Self {
            store,
            carts,
            orders,
        }
    }

    fn validate(&self, username: &Username) -> Result<Cart, CheckoutError> {
        let session: Option<Session> = self.store.get(keys::SESSION)?;
        match session {
            Some(session) if session.username == *username => {}
            _ => return Err(CheckoutError::NoActiveSession),
        }
        let cart = self.carts.fetch(username)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(cart)
    }

    /// Place an order from the user's current cart.
    ///
    /// The order id is derived from the wall clock; two checkouts in the
    /// same millisecond would collide, which the demo accepts rather than
    /// retrying. Lines whose product has since vanished from the catalog
    /// still appear on the order but decrement no stock.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::NoActiveSession` unless the active session
    /// belongs to `username`, `CheckoutError::EmptyCart` for an empty
    /// cart, and `CheckoutError::Store` if any write in the commit
    /// sequence fails.
    pub fn checkout(
        &self,
        catalog: &mut Catalog,
        username: &Username,
    ) -> Result<Order, CheckoutError> {
        trace_state(CheckoutState::Validating);
        let cart = match self.validate(username) {
            Ok(cart) => cart,
            Err(err) => {
                trace_state(CheckoutState::Rejected);
                return Err(err);
            }
        };

        trace_state(CheckoutState::Committing);
        let date = Utc::now();
        let order = Order {
            id: OrderId::from_instant(date),
            date,
            items: cart.lines().to_vec(),
            total: cart.subtotal(),
        };

        // The order becomes durable before stock moves or the cart empties.
        self.orders.append(username, &order)?;

        for line in cart.lines() {
            match catalog.decrement_stock(&line.id, line.qty) {
                Ok(()) => {}
                Err(CatalogError::ProductNotFound(id)) => {
                    warn!(product = %id, "cart line refers to a vanished product");
                }
                Err(CatalogError::Store(err)) => return Err(err.into()),
            }
        }

        self.carts.replace(username, &Cart::default())?;

        trace_state(CheckoutState::Done);
        info!(order = %order.id, total = %order.total, "order placed");
        Ok(order)
    }
}
