//! User record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mangastore_core::{Email, ObfuscatedPassword, Username};

/// A registered user.
///
/// Created by registration, never mutated, never deleted. The normalized
/// username is the case-insensitive uniqueness key; the email must also be
/// unique across the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Normalized username (uniqueness and scoping key).
    pub username: Username,
    /// Unique email address.
    pub email: Email,
    /// Reversibly obfuscated password. NOT a security mechanism.
    pub password: ObfuscatedPassword,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
