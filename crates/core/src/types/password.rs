//! Reversible password obfuscation.
//!
//! **This is not a security mechanism.** The storefront is a client-side
//! demo and deliberately stores passwords as reversible base64, exactly as
//! the system it models does. Do not "fix" this into a real hash: credential
//! comparison elsewhere relies on the encoding being deterministic, and the
//! demo's documented behavior is insecure by design. If real security is
//! ever required this type must be replaced wholesale, not patched.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// A base64-obfuscated password as persisted in the user directory.
///
/// Equality on the obfuscated form is how credentials are checked, so the
/// type derives `PartialEq` and keeps the encoding canonical (standard
/// alphabet, padded).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ObfuscatedPassword(String);

impl ObfuscatedPassword {
    /// Obfuscate a plaintext password. NOT hashing - fully reversible.
    #[must_use]
    pub fn obfuscate(plain: &str) -> Self {
        Self(STANDARD.encode(plain.as_bytes()))
    }

    /// Reverse the obfuscation.
    ///
    /// Returns the stored string unchanged when it is not valid base64
    /// (legacy records persisted before encoding was introduced).
    #[must_use]
    pub fn reveal(&self) -> String {
        STANDARD
            .decode(&self.0)
            .ok()
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_else(|| self.0.clone())
    }

    /// Check a plaintext password against the stored encoding.
    #[must_use]
    pub fn matches(&self, plain: &str) -> bool {
        Self::obfuscate(plain) == *self
    }
}
