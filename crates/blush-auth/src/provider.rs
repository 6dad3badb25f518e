//! Session provider collaborator.

use crate::error::AuthError;
use crate::user::User;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{info, warn};

/// The external owner of the session.
///
/// Guards only read the session; screens call `login`/`logout`.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Resolve the current user, `None` when nobody is signed in.
    async fn current(&self) -> Result<Option<User>, AuthError>;

    /// Fails with [`AuthError::InvalidCredentials`] on a bad email/password.
    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;
}

/// Provider holding seeded accounts in memory.
#[derive(Debug, Default)]
pub struct InMemorySessionProvider {
    accounts: HashMap<String, (String, User)>,
    active: RwLock<Option<User>>,
}

impl InMemorySessionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account.
    pub fn with_account(mut self, password: impl Into<String>, user: User) -> Self {
        self.accounts
            .insert(user.email.to_lowercase(), (password.into(), user));
        self
    }
}

#[async_trait]
impl SessionProvider for InMemorySessionProvider {
    async fn current(&self) -> Result<Option<User>, AuthError> {
        let active = self
            .active
            .read()
            .map_err(|e| AuthError::SessionUnavailable(e.to_string()))?;
        Ok(active.clone())
    }

    async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let user = match self.accounts.get(&email.trim().to_lowercase()) {
            Some((expected, user)) if expected == password => user.clone(),
            _ => {
                warn!(email, "login rejected");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let mut active = self
            .active
            .write()
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        *active = Some(user.clone());
        info!(email = %user.email, role = user.role.as_str(), "signed in");
        Ok(user)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        let mut active = self
            .active
            .write()
            .map_err(|e| AuthError::Internal(e.to_string()))?;
        *active = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn provider() -> InMemorySessionProvider {
        InMemorySessionProvider::new()
            .with_account("petals", User::new("u-1", "asha@example.com", Role::Customer))
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let provider = provider();
        assert_eq!(provider.current().await.unwrap(), None);

        let user = provider.login("Asha@Example.com", "petals").await.unwrap();
        assert_eq!(user.role, Role::Customer);
        assert_eq!(provider.current().await.unwrap(), Some(user));

        provider.logout().await.unwrap();
        assert_eq!(provider.current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let err = provider().login("asha@example.com", "wrong").await.unwrap_err();
        assert!(err.is_auth_failure());
    }
}
