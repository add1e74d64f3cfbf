//! Core types for MangaStore.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod identity;
pub mod password;
pub mod price;

pub use id::*;
pub use identity::{Email, EmailError, Username, UsernameError};
pub use password::ObfuscatedPassword;
pub use price::Price;
