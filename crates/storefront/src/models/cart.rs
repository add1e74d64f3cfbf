//! Cart records.

use serde::{Deserialize, Serialize};

use mangastore_core::{Price, ProductId};

use super::product::Product;

/// One pending purchase line: a denormalized snapshot of the product taken
/// at add-time. Title and price do not track later catalog edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product this line refers to.
    pub id: ProductId,
    /// Title as it was when added.
    pub title: String,
    /// Unit price as it was when added.
    pub price: Price,
    /// Units in the cart. Invariant: at least 1, and at most the product
    /// stock observed at mutation time.
    pub qty: u32,
    /// Cover image reference as it was when added.
    pub img: String,
}

impl CartItem {
    /// Snapshot a product into a new line.
    #[must_use]
    pub fn snapshot(product: &Product, qty: u32) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            price: product.price,
            qty,
            img: product.img.clone(),
        }
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// An ordered sequence of lines, unique by product id, scoped to one user.
///
/// Persisted as a plain JSON array under the user's cart key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartItem>,
}

impl Cart {
    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartItem] {
        &self.lines
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of `price * quantity` over all lines. Zero for an empty cart.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities over all lines. Zero for an empty cart.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().fold(0, |sum, line| sum.saturating_add(line.qty))
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&CartItem> {
        self.lines.iter().find(|line| line.id == *id)
    }

    pub(crate) fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartItem> {
        self.lines.iter_mut().find(|line| line.id == *id)
    }

    pub(crate) fn push(&mut self, line: CartItem) {
        self.lines.push(line);
    }

    pub(crate) fn remove_line(&mut self, id: &ProductId) {
        self.lines.retain(|line| line.id != *id);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("{id} title"),
            author: "author".to_owned(),
            editorial: "editorial".to_owned(),
            price: Price::new(price),
            stock,
            img: String::new(),
        }
    }

    #[test]
    fn test_empty_cart_sums_to_zero() {
        let cart = Cart::default();
        assert_eq!(cart.subtotal(), Price::ZERO);
        assert_eq!(cart.total_quantity(), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_subtotal_is_exact_sum_of_line_totals() {
        let mut cart = Cart::default();
        cart.push(CartItem::snapshot(&product("m001", 12_000, 10), 1));
        cart.push(CartItem::snapshot(&product("m002", 11_000, 10), 2));
        assert_eq!(cart.subtotal(), Price::new(34_000));
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_snapshot_is_independent_of_later_catalog_edits() {
        let mut source = product("m001", 12_000, 10);
        let line = CartItem::snapshot(&source, 1);
        source.price = Price::new(99_000);
        source.title = "renamed".to_owned();
        assert_eq!(line.price, Price::new(12_000));
        assert_eq!(line.title, "m001 title");
    }

    #[test]
    fn test_cart_serializes_as_plain_array() {
        let mut cart = Cart::default();
        cart.push(CartItem::snapshot(&product("m001", 100, 5), 2));
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }
}
