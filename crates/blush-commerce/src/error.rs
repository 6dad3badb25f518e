//! Commerce and data-layer error types.

use thiserror::Error;

/// Errors raised by the client-side commerce state containers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(u32, u32),

    /// Address failed validation.
    #[error("Invalid address: missing or malformed {0}")]
    InvalidAddress(String),
}

/// Errors surfaced by catalog and order services.
///
/// Screens render these inline next to a retry control; they never reach a
/// global handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request could not be delivered.
    #[error("Network error: {0}")]
    Network(String),

    /// The service did not answer in time.
    #[error("Request timed out")]
    Timeout,

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The payload could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Whether retrying the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Timeout)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_retryable() {
        assert!(FetchError::Timeout.is_retryable());
        assert!(FetchError::Network("offline".to_string()).is_retryable());
        assert!(!FetchError::NotFound("order-1".to_string()).is_retryable());
        assert!(!FetchError::Decode("eof".to_string()).is_retryable());
    }

    #[test]
    fn test_fetch_error_from_json() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        assert!(matches!(FetchError::from(err), FetchError::Decode(_)));
    }
}
