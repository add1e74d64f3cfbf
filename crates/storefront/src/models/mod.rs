//! Domain records persisted in the store.
//!
//! These are the stored shapes - the serialized field names are the
//! store's on-disk schema and must stay stable (the key layout carries the
//! version, see [`crate::store::keys`]).

pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use cart::{Cart, CartItem};
pub use order::{Order, Receipt};
pub use product::Product;
pub use session::Session;
pub use user::User;
