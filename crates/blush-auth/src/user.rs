//! User types.

use blush_commerce::ids::UserId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// User role for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular customer.
    #[default]
    Customer,
    /// Store administrator.
    Admin,
}

impl Role {
    /// Get role as string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Admin => "admin",
        }
    }

    /// Where a user with this role lands by default.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Customer => "/",
            Role::Admin => "/admin/dashboard",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// A signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
}

impl User {
    pub fn new(id: impl Into<UserId>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: None,
            role,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for greetings, falling back to the email's local part.
    pub fn display_name(&self) -> &str {
        match self.name {
            Some(ref name) => name,
            None => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_home_paths() {
        assert_eq!(Role::Customer.home_path(), "/");
        assert_eq!(Role::Admin.home_path(), "/admin/dashboard");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("customer".parse::<Role>(), Ok(Role::Customer));
        assert!("staff".parse::<Role>().is_err());
    }

    #[test]
    fn test_display_name_fallback() {
        let user = User::new("u1", "asha@example.com", Role::Customer);
        assert_eq!(user.display_name(), "asha");
        assert_eq!(user.with_name("Asha").display_name(), "Asha");
    }
}
