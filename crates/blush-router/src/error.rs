//! Routing errors.

use thiserror::Error;

/// Errors raised while building or resolving routes.
///
/// An unmatched path is not an error; the catch-all route handles it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Nothing matched and the table has no catch-all.
    #[error("No route matches {0}")]
    NoMatch(String),

    /// Redirects did not settle within the hop limit.
    #[error("Redirect loop while resolving {0}")]
    RedirectLoop(String),

    /// A path pattern could not be parsed.
    #[error("Invalid route pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
