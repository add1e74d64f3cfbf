//! Order records and the receipt payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mangastore_core::{OrderId, Price};

use super::cart::CartItem;

/// A completed purchase.
///
/// Immutable once created; appended to the owning user's order history and
/// never edited or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Time-derived order id (`ORD-` + base-36 millis).
    pub id: OrderId,
    /// When the order was placed.
    pub date: DateTime<Utc>,
    /// Snapshot of the cart lines at checkout.
    pub items: Vec<CartItem>,
    /// Sum of `price * quantity` over the items.
    pub total: Price,
}

/// The machine-scannable slice of an order.
///
/// The engine's contract ends at supplying this triple; encoding it into a
/// QR code and rendering the human-readable ticket is the surface
/// collaborator's concern.
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    /// Order id.
    pub id: OrderId,
    /// Creation instant.
    pub date: DateTime<Utc>,
    /// Order total.
    pub total: Price,
}

impl From<&Order> for Receipt {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            date: order.date,
            total: order.total,
        }
    }
}
