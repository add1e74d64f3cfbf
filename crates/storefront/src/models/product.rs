//! Product record.

use serde::{Deserialize, Serialize};

use mangastore_core::{Price, ProductId};

/// A catalog product.
///
/// Seeded once; stock is mutated only by checkout and never goes negative.
/// Products are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Unique product id (e.g. `m001`).
    pub id: ProductId,
    /// Volume title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Publishing house.
    pub editorial: String,
    /// Unit price in whole currency units.
    pub price: Price,
    /// Units available. Invariant: never negative (enforced by the type
    /// and by clamping decrements at zero).
    pub stock: u32,
    /// Cover image reference.
    pub img: String,
}
