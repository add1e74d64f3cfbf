//! MangaStore Core - Shared types library.
//!
//! This crate provides common types used across all MangaStore components:
//! - `storefront` - The catalog/cart/order consistency engine
//! - `cli` - Command-line surface driving the engine
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, usernames, emails,
//!   prices, and the (deliberately non-secure) password codec

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
