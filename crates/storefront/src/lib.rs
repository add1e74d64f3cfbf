//! MangaStore Storefront library - the cart/order consistency engine.
//!
//! All state lives in a local persistent key-value store (the
//! browser-localStorage analog); there is no backend and no network. The
//! engine keeps cart contents, product stock, and historical orders
//! mutually consistent across repeated user actions and across other open
//! contexts sharing the same store.
//!
//! Execution is single-threaded cooperative: every operation runs to
//! completion, so same-context operations are effectively atomic. Contexts
//! sharing the store race last-writer-wins with no merge - see
//! [`store::Store`] and [`checkout::CheckoutEngine`] for the accepted
//! consequences.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
pub mod orders;
pub mod services;
pub mod state;
pub mod store;
