//! Newtype IDs for type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Declares a string newtype. Generated values carry `$prefix`, so an
/// order id reads `ord-...` in URLs and logs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn generate() -> Self {
                Self(format!("{}-{}", $prefix, generate_id()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Catalog product.
    ProductId,
    "prd"
);
define_id!(
    /// Placed order; shown to customers as the order number.
    OrderId,
    "ord"
);
define_id!(AddressId, "adr");
define_id!(UserId, "usr");

/// Generate a unique ID from the wall clock and a process-wide counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let millis = chrono::Utc::now().timestamp_millis() as u64;
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}{:04x}", millis, counter & 0xffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("rose-serum");
        assert_eq!(id.as_str(), "rose-serum");
    }

    #[test]
    fn test_id_generation_is_unique() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
        assert!(id1.as_str().starts_with("ord-"));
        assert!(AddressId::generate().as_str().starts_with("adr-"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("rose-serum");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"rose-serum\"");
        let back: ProductId = serde_json::from_str("\"kajal\"").unwrap();
        assert_eq!(back.as_str(), "kajal");
    }

    #[test]
    fn test_id_display_and_from() {
        let id: UserId = "user-7".into();
        assert_eq!(format!("{}", id), "user-7");
    }
}
