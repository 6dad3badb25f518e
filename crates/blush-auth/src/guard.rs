//! Route guards.
//!
//! Both guards are pure decisions over an injected [`Session`] snapshot and
//! the current [`Location`]. They never call the session provider and never
//! mutate the session; the caller renders or navigates according to the
//! returned [`GuardOutcome`].

use crate::location::{Location, NavState};
use crate::session::Session;
use crate::user::Role;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default login path.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// A navigation a guard asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub to: String,
    pub state: Option<NavState>,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

impl Redirect {
    fn replace(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            state: None,
            replace: true,
        }
    }

    fn with_state(mut self, state: NavState) -> Self {
        self.state = Some(state);
        self
    }

    /// The location this redirect lands on.
    pub fn location(&self) -> Location {
        let location = Location::parse(&self.to);
        match self.state {
            Some(ref state) => location.with_state(state.clone()),
            None => location,
        }
    }
}

/// What a guard decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardOutcome {
    /// Session still resolving; show only a loading indicator.
    Loading,
    /// Session could not be loaded; show an inline error with retry.
    Unavailable { message: String },
    /// Navigate elsewhere.
    Redirect(Redirect),
    /// Render the guarded children.
    Render,
}

impl GuardOutcome {
    pub fn is_render(&self) -> bool {
        matches!(self, GuardOutcome::Render)
    }

    pub fn redirect(&self) -> Option<&Redirect> {
        match self {
            GuardOutcome::Redirect(r) => Some(r),
            _ => None,
        }
    }
}

/// Guard for pages that need a signed-in user, optionally with a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGuard {
    login_path: String,
    required_role: Option<Role>,
}

impl Default for AuthGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_PATH)
    }
}

impl AuthGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            required_role: None,
        }
    }

    pub fn with_required_role(mut self, role: Option<Role>) -> Self {
        self.required_role = role;
        self
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn required_role(&self) -> Option<Role> {
        self.required_role
    }

    pub fn check(&self, session: &Session, location: &Location) -> GuardOutcome {
        if session.is_loading {
            return GuardOutcome::Loading;
        }

        if !session.is_authenticated {
            if let Some(ref message) = session.error {
                debug!(path = %location.pathname, %message, "auth guard: session unavailable");
                return GuardOutcome::Unavailable {
                    message: message.clone(),
                };
            }
            debug!(path = %location.pathname, login = %self.login_path, "auth guard: redirect to login");
            return GuardOutcome::Redirect(
                Redirect::replace(self.login_path.clone())
                    .with_state(NavState::from_path(location.pathname.clone())),
            );
        }

        if let Some(required) = self.required_role {
            match session.user {
                Some(ref user) if user.role == required => {}
                Some(ref user) => {
                    debug!(path = %location.pathname, role = user.role.as_str(), required = required.as_str(), "auth guard: role mismatch");
                    return GuardOutcome::Redirect(Redirect::replace(user.role.home_path()));
                }
                None => {
                    debug!(path = %location.pathname, "auth guard: authenticated without user");
                    return GuardOutcome::Redirect(Redirect::replace(Role::Customer.home_path()));
                }
            }
        }

        GuardOutcome::Render
    }
}

/// Guard for login, register and forgot-password pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuestGuard;

impl GuestGuard {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, session: &Session, location: &Location) -> GuardOutcome {
        if session.is_loading {
            return GuardOutcome::Loading;
        }

        if !session.is_authenticated {
            return GuardOutcome::Render;
        }

        let to = match location.return_to() {
            Some(path) => path.to_string(),
            None => session
                .role()
                .unwrap_or_default()
                .home_path()
                .to_string(),
        };
        debug!(path = %location.pathname, %to, "guest guard: already signed in");
        GuardOutcome::Redirect(Redirect::replace(to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    fn customer() -> User {
        User::new("u-1", "asha@example.com", Role::Customer)
    }

    fn admin() -> User {
        User::new("u-2", "meera@example.com", Role::Admin)
    }

    fn loading_variants() -> Vec<Session> {
        let mut with_user = Session::authenticated(customer());
        with_user.is_loading = true;
        let mut with_admin = Session::authenticated(admin());
        with_admin.is_loading = true;
        let mut with_error = Session::failed("boom");
        with_error.is_loading = true;
        vec![Session::loading(), with_user, with_admin, with_error]
    }

    #[test]
    fn test_loading_wins_for_both_guards() {
        let location = Location::new("/account/orders");
        let admin_guard = AuthGuard::default().with_required_role(Some(Role::Admin));
        for session in loading_variants() {
            assert_eq!(AuthGuard::default().check(&session, &location), GuardOutcome::Loading);
            assert_eq!(admin_guard.check(&session, &location), GuardOutcome::Loading);
            assert_eq!(GuestGuard.check(&session, &location), GuardOutcome::Loading);
        }
    }

    #[test]
    fn test_unauthenticated_redirects_to_login_with_from() {
        let guard = AuthGuard::new("/signin");
        for path in ["/account", "/account/orders/o-9", "/checkout", "/admin/products"] {
            let outcome = guard.check(&Session::anonymous(), &Location::new(path));
            let redirect = outcome.redirect().expect("redirect");
            assert_eq!(redirect.to, "/signin");
            assert_eq!(redirect.location().return_to(), Some(path));
            assert!(redirect.replace);
        }
    }

    #[test]
    fn test_role_mismatch_uses_role_home() {
        let admin_only = AuthGuard::default().with_required_role(Some(Role::Admin));
        let outcome = admin_only.check(&Session::authenticated(customer()), &Location::new("/admin"));
        assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/"));

        let customer_only = AuthGuard::default().with_required_role(Some(Role::Customer));
        let outcome = customer_only.check(&Session::authenticated(admin()), &Location::new("/account"));
        assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/admin/dashboard"));
    }

    #[test]
    fn test_authenticated_without_user() {
        let mut session = Session::authenticated(customer());
        session.user = None;
        let location = Location::new("/admin");

        // role check only applies when a role is required
        assert!(AuthGuard::default().check(&session, &location).is_render());

        let outcome = AuthGuard::default()
            .with_required_role(Some(Role::Admin))
            .check(&session, &location);
        assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/"));
    }

    #[test]
    fn test_matching_role_renders() {
        let guard = AuthGuard::default().with_required_role(Some(Role::Admin));
        assert!(guard
            .check(&Session::authenticated(admin()), &Location::new("/admin/orders"))
            .is_render());
    }

    #[test]
    fn test_session_failure() {
        let location = Location::new("/account");
        assert_eq!(
            AuthGuard::default().check(&Session::failed("network down"), &location),
            GuardOutcome::Unavailable {
                message: "network down".to_string()
            }
        );
        assert!(GuestGuard.check(&Session::failed("network down"), &Location::new("/login")).is_render());
    }

    #[test]
    fn test_guest_guard_role_defaults() {
        let login = Location::new("/login");
        let outcome = GuestGuard.check(&Session::authenticated(admin()), &login);
        assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/admin/dashboard"));

        let outcome = GuestGuard.check(&Session::authenticated(customer()), &login);
        assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/"));

        assert!(GuestGuard.check(&Session::anonymous(), &login).is_render());
    }

    #[test]
    fn test_guest_guard_prefers_return_to() {
        let login = Location::new("/login").with_state(NavState::from_path("/admin/orders"));
        let outcome = GuestGuard.check(&Session::authenticated(admin()), &login);
        assert_eq!(outcome.redirect().map(|r| r.to.as_str()), Some("/admin/orders"));
    }

    #[test]
    fn test_redirect_round_trip() {
        let protected = Location::new("/account/orders");
        let bounced = AuthGuard::default().check(&Session::anonymous(), &protected);
        let login = bounced.redirect().expect("redirect to login").location();
        assert_eq!(login.pathname, "/login");

        let signed_in = Session::authenticated(customer());
        let resumed = GuestGuard.check(&signed_in, &login);
        assert_eq!(resumed.redirect().map(|r| r.to.as_str()), Some("/account/orders"));
        assert!(AuthGuard::default().check(&signed_in, &resumed.redirect().unwrap().location()).is_render());
    }
}
