//! Identity directory.
//!
//! User records, credential checks, and the session lifecycle. Passwords
//! are stored with the reversible obfuscation from
//! [`mangastore_core::ObfuscatedPassword`] - deliberately NOT real
//! credential security, see that type's documentation.

mod error;

pub use error::AuthError;

use chrono::Utc;
use tracing::info;

use mangastore_core::{Email, ObfuscatedPassword, Username};

use crate::models::{Session, User};
use crate::store::{Store, StoreError, keys};

/// Identity directory over the persistent store.
pub struct AuthService {
    store: Store,
}

impl AuthService {
    /// Create a new identity directory.
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    fn users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.store.get(keys::USERS)?.unwrap_or_default())
    }

    /// Register a new user. Leaves any active session untouched.
    ///
    /// The username is normalized (trimmed, lowercased) before the
    /// case-insensitive uniqueness check.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidUsername`/`InvalidEmail` on malformed
    /// input, `DuplicateUsername` if the normalized username is taken,
    /// `DuplicateEmail` if the email is already registered.
    pub fn register(&self, username: &str, email: &str, password: &str) -> Result<User, AuthError> {
        let username = Username::parse(username)?;
        let email = Email::parse(email)?;

        let mut users = self.users()?;
        if users.iter().any(|u| u.username == username) {
            return Err(AuthError::DuplicateUsername);
        }
        if users.iter().any(|u| u.email == email) {
            return Err(AuthError::DuplicateEmail);
        }

        let user = User {
            username,
            email,
            password: ObfuscatedPassword::obfuscate(password),
            created_at: Utc::now(),
        };
        users.push(user.clone());
        self.store.put(keys::USERS, &users)?;

        info!(username = %user.username, "user registered");
        Ok(user)
    }

    /// Log in, creating and persisting a new session that replaces any
    /// prior one.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the normalized username is
    /// unknown and `InvalidCredentials` if the password does not match.
    pub fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let username = Username::parse(username)?;

        let users = self.users()?;
        let user = users
            .iter()
            .find(|u| u.username == username)
            .ok_or(AuthError::UserNotFound)?;
        if !user.password.matches(password) {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            username: user.username.clone(),
            email: user.email.clone(),
            since: Utc::now(),
        };
        self.store.put(keys::SESSION, &session)?;

        info!(username = %session.username, "session started");
        Ok(session)
    }

    /// Clear the session unconditionally. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be written.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.store.remove(keys::SESSION)
    }

    /// The current session, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the store cannot be read.
    pub fn session(&self) -> Result<Option<Session>, StoreError> {
        self.store.get(keys::SESSION)
    }
}
