//! Layouts and the chrome they render around their outlet.

use blush_auth::Role;
use serde::{Deserialize, Serialize};

/// Shared chrome pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chrome {
    Header,
    Footer,
    HeroBanner,
    Breadcrumbs,
    FilterSidebar,
    AuthCard,
    AccountSidebar,
    CheckoutHeader,
    Stepper,
    AdminHeader,
    AdminSidebar,
}

/// Who may see what a layout wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Access {
    Public,
    /// Signed-in visitors are sent away.
    GuestOnly,
    Authenticated,
    Role(Role),
}

impl Access {
    pub fn is_public(&self) -> bool {
        matches!(self, Access::Public)
    }
}

/// Layout components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutKind {
    /// Default site shell.
    Root,
    Marketing,
    Catalog,
    Auth,
    Account,
    /// Standalone: no site shell.
    Checkout,
    /// Standalone: no site shell.
    Admin,
}

impl LayoutKind {
    pub fn chrome(&self) -> &'static [Chrome] {
        match self {
            LayoutKind::Root => &[Chrome::Header, Chrome::Footer],
            LayoutKind::Marketing => &[Chrome::HeroBanner],
            LayoutKind::Catalog => &[Chrome::Breadcrumbs, Chrome::FilterSidebar],
            LayoutKind::Auth => &[Chrome::AuthCard],
            LayoutKind::Account => &[Chrome::AccountSidebar],
            LayoutKind::Checkout => &[Chrome::CheckoutHeader, Chrome::Stepper],
            LayoutKind::Admin => &[Chrome::AdminHeader, Chrome::AdminSidebar],
        }
    }

    pub fn access(&self) -> Access {
        match self {
            LayoutKind::Auth => Access::GuestOnly,
            LayoutKind::Account | LayoutKind::Checkout => Access::Authenticated,
            LayoutKind::Admin => Access::Role(Role::Admin),
            LayoutKind::Root | LayoutKind::Marketing | LayoutKind::Catalog => Access::Public,
        }
    }

    /// Whether the layout renders without the Root shell.
    pub fn is_standalone(&self) -> bool {
        matches!(self, LayoutKind::Checkout | LayoutKind::Admin)
    }
}
