//! Session record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use mangastore_core::{Email, Username};

/// The single active logged-in identity.
///
/// Created by login (replacing any prior session), destroyed by logout.
/// At most one session exists at a time; it lives under its own store key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Who is logged in.
    pub username: Username,
    /// Their email, denormalized for display.
    pub email: Email,
    /// When the session started.
    pub since: DateTime<Utc>,
}
