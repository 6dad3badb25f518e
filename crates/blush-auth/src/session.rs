//! Session snapshot consumed by guards.

use crate::user::User;
use serde::{Deserialize, Serialize};

/// What the app currently knows about the signed-in user.
///
/// Owned by the session provider's scope; guards read it and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<User>,
    /// Set when loading the session failed.
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::loading()
    }
}

impl Session {
    /// Initial state while the provider resolves the session.
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            is_loading: true,
            user: None,
            error: None,
        }
    }

    /// Resolved, nobody signed in.
    pub fn anonymous() -> Self {
        Self {
            is_authenticated: false,
            is_loading: false,
            user: None,
            error: None,
        }
    }

    /// Resolved, `user` signed in.
    pub fn authenticated(user: User) -> Self {
        Self {
            is_authenticated: true,
            is_loading: false,
            user: Some(user),
            error: None,
        }
    }

    /// Resolving the session failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_authenticated: false,
            is_loading: false,
            user: None,
            error: Some(message.into()),
        }
    }

    pub fn role(&self) -> Option<crate::Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
