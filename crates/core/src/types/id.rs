//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Catalog and order
//! ids are opaque strings in the stored data (`"m001"`, `"ORD-..."`), so
//! the wrappers hold a `String` rather than an integer.

use chrono::{DateTime, Utc};

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use mangastore_core::define_id;
/// define_id!(ProductId);
/// define_id!(OrderId);
///
/// let product_id = ProductId::new("m001");
///
/// // These are different types, so this won't compile:
/// // let _: OrderId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(OrderId);

impl OrderId {
    /// Derive an order id from a creation instant: `ORD-` followed by the
    /// uppercased base-36 encoding of the instant in milliseconds.
    ///
    /// Two checkouts within the same millisecond collide. That is an
    /// accepted limitation of the time-derived scheme; callers wanting a
    /// stronger guarantee must supply instants from a monotonic source.
    #[must_use]
    pub fn from_instant(instant: DateTime<Utc>) -> Self {
        let millis = instant.timestamp_millis().unsigned_abs();
        Self(format!("ORD-{}", to_base36_upper(millis)))
    }
}

/// Encode an integer in uppercase base-36.
fn to_base36_upper(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    while n > 0 {
        let digit = usize::try_from(n % 36).unwrap_or(0);
        out.push(DIGITS.get(digit).copied().unwrap_or(b'0'));
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_display_and_as_str() {
        let id = ProductId::new("m001");
        assert_eq!(id.as_str(), "m001");
        assert_eq!(format!("{id}"), "m001");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = ProductId::new("m007");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"m007\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_base36_known_values() {
        assert_eq!(to_base36_upper(0), "0");
        assert_eq!(to_base36_upper(35), "Z");
        assert_eq!(to_base36_upper(36), "10");
        assert_eq!(to_base36_upper(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn test_order_id_from_instant_format() {
        // 2023-11-14T22:13:20Z is exactly 1_700_000_000_000 ms.
        let instant = Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap();
        let id = OrderId::from_instant(instant);
        assert_eq!(id.as_str(), "ORD-LOYW3V28");
    }

    #[test]
    fn test_order_id_same_millisecond_collides() {
        // Documented limitation: identical instants yield identical ids.
        let instant = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(OrderId::from_instant(instant), OrderId::from_instant(instant));
    }
}
