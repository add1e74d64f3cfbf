//! Identity error types.

use thiserror::Error;

use mangastore_core::{EmailError, UsernameError};

use crate::store::StoreError;

/// Errors that can occur during identity operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid username format.
    #[error("invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    /// A user with this username already exists (case-insensitive).
    #[error("username already exists")]
    DuplicateUsername,

    /// A user with this email already exists.
    #[error("email already registered")]
    DuplicateEmail,

    /// No user with this username.
    #[error("user not found")]
    UserNotFound,

    /// Password mismatch.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Persistent store failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}
