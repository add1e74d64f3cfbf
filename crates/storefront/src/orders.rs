//! Order ledger.
//!
//! Append-only purchase history per user. Orders are never edited or
//! removed once written.

use mangastore_core::Username;

use crate::models::Order;
use crate::store::{Store, StoreError, keys};

/// Order ledger over the persistent store.
pub struct OrderLedger {
    store: Store,
}

impl OrderLedger {
    /// Create a new order ledger.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Append an order to the user's history.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the history cannot be read or written.
    pub fn append(&self, username: &Username, order: &Order) -> Result<(), StoreError> {
        let key = keys::orders_for(username);
        let mut orders: Vec<Order> = self.store.get(&key)?.unwrap_or_default();
        orders.push(order.clone());
        self.store.put(&key, &orders)
    }

    /// The user's order history, oldest first. Absent or malformed data
    /// reads as empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn list_for(&self, username: &Username) -> Result<Vec<Order>, StoreError> {
        Ok(self
            .store
            .get(&keys::orders_for(username))?
            .unwrap_or_default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mangastore_core::{OrderId, Price};

    fn order(millis_offset: i64) -> Order {
        let date = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
            + chrono::Duration::milliseconds(millis_offset);
        Order {
            id: OrderId::from_instant(date),
            date,
            items: Vec::new(),
            total: Price::new(1_000),
        }
    }

    #[test]
    fn test_history_starts_empty() {
        let ledger = OrderLedger::new(Store::in_memory());
        let username = Username::parse("alice").unwrap();
        assert!(ledger.list_for(&username).unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let ledger = OrderLedger::new(Store::in_memory());
        let username = Username::parse("alice").unwrap();

        let first = order(0);
        let second = order(1);
        ledger.append(&username, &first).unwrap();
        ledger.append(&username, &second).unwrap();

        let history = ledger.list_for(&username).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, first.id);
        assert_eq!(history[1].id, second.id);
    }

    #[test]
    fn test_histories_are_isolated_per_user() {
        let ledger = OrderLedger::new(Store::in_memory());
        let alice = Username::parse("alice").unwrap();
        let bob = Username::parse("bob").unwrap();

        ledger.append(&alice, &order(0)).unwrap();
        assert!(ledger.list_for(&bob).unwrap().is_empty());
    }
}
