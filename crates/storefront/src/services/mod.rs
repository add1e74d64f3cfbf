//! Engine services.

pub mod auth;
