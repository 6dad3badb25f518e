//! Error types for BlushCore.

use blush_router::RouteError;
use thiserror::Error;

/// Errors that can occur in BlushCore.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No route, not even a catch-all, matched.
    #[error("Route not found: {0}")]
    RouteNotFound(String),

    /// Route table problem other than a plain miss.
    #[error("Routing error: {0}")]
    Route(RouteError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Render error.
    #[error("Render error: {0}")]
    Render(String),

    /// Reading a config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RouteError> for StoreError {
    fn from(err: RouteError) -> Self {
        match err {
            RouteError::NoMatch(path) => StoreError::RouteNotFound(path),
            other => StoreError::Route(other),
        }
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_becomes_route_not_found() {
        let err: StoreError = RouteError::NoMatch("/x".to_string()).into();
        assert!(matches!(err, StoreError::RouteNotFound(ref p) if p == "/x"));

        let err: StoreError = RouteError::RedirectLoop("/a".to_string()).into();
        assert!(matches!(err, StoreError::Route(RouteError::RedirectLoop(_))));
    }

    #[test]
    fn test_display() {
        let err = StoreError::Config("per_page must be positive".to_string());
        assert_eq!(err.to_string(), "Configuration error: per_page must be positive");
    }
}
