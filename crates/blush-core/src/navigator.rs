//! Headless navigation.
//!
//! [`Navigator`] composes the route table with the guards: resolve the path,
//! apply the access requirement of the matched layout chain, and follow any
//! redirect until a page can be shown. The Leptos components do the same
//! thing reactively; this is the synchronous form used in tests and by
//! anything that needs to know where a visit ends up.

use blush_auth::{AuthGuard, GuardOutcome, GuestGuard, Location, Redirect, Session};
use blush_router::{Access, RouteError, RouteMatch, RouteTable, Target, MAX_REDIRECTS};
use tracing::{debug, info};

use crate::error::StoreError;

/// How a visit ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    /// The session is still resolving; only a loading indicator is shown.
    Loading,
    /// The session could not be loaded.
    Unavailable { message: String },
    /// A page is rendered.
    Page(RouteMatch),
}

/// Result of [`Navigator::visit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    /// Where the visit settled.
    pub location: Location,
    /// Every redirect followed, in order.
    pub redirects: Vec<Redirect>,
    pub outcome: VisitOutcome,
}

impl Visit {
    pub fn page(&self) -> Option<&RouteMatch> {
        match self.outcome {
            VisitOutcome::Page(ref m) => Some(m),
            _ => None,
        }
    }

    pub fn was_redirected(&self) -> bool {
        !self.redirects.is_empty()
    }
}

/// Route table plus guard configuration.
#[derive(Debug, Clone)]
pub struct Navigator {
    routes: RouteTable,
    login_path: String,
}

impl Navigator {
    pub fn new(routes: RouteTable, login_path: impl Into<String>) -> Self {
        Self {
            routes,
            login_path: login_path.into(),
        }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The guard decision for one access requirement.
    pub fn check(&self, access: Access, session: &Session, location: &Location) -> GuardOutcome {
        match access {
            Access::Public => GuardOutcome::Render,
            Access::GuestOnly => GuestGuard::new().check(session, location),
            Access::Authenticated => AuthGuard::new(&self.login_path).check(session, location),
            Access::Role(role) => AuthGuard::new(&self.login_path)
                .with_required_role(Some(role))
                .check(session, location),
        }
    }

    /// Visit `location` with the given session snapshot.
    pub fn visit(&self, location: Location, session: &Session) -> Result<Visit, StoreError> {
        let start = location.href();
        let mut location = location;
        let mut redirects = Vec::new();

        for _ in 0..=MAX_REDIRECTS {
            let matched = self.routes.resolve(&location.pathname)?;

            // Guard first: an index redirect only moves a visit that may render.
            let redirect = match self.check(matched.access(), session, &location) {
                GuardOutcome::Render => match matched.target {
                    Target::Redirect(ref to) => Redirect {
                        to: to.clone(),
                        state: location.state.clone(),
                        replace: true,
                    },
                    Target::Screen(_) => {
                        info!(path = %location.pathname, pattern = %matched.pattern, "page rendered");
                        return Ok(Visit {
                            location,
                            redirects,
                            outcome: VisitOutcome::Page(matched),
                        });
                    }
                },
                GuardOutcome::Loading => {
                    return Ok(Visit {
                        location,
                        redirects,
                        outcome: VisitOutcome::Loading,
                    });
                }
                GuardOutcome::Unavailable { message } => {
                    return Ok(Visit {
                        location,
                        redirects,
                        outcome: VisitOutcome::Unavailable { message },
                    });
                }
                GuardOutcome::Redirect(redirect) => redirect,
            };

            debug!(from = %location.pathname, to = %redirect.to, "redirecting");
            location = redirect.location();
            redirects.push(redirect);
        }

        Err(RouteError::RedirectLoop(start).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blush_auth::{NavState, Role, User};
    use blush_router::{storefront_routes, LayoutKind, Screen};

    fn navigator() -> Navigator {
        Navigator::new(storefront_routes(), "/login")
    }

    fn customer() -> Session {
        Session::authenticated(User::new("u-1", "asha@example.com", Role::Customer))
    }

    fn admin() -> Session {
        Session::authenticated(User::new("u-2", "ops@example.com", Role::Admin))
    }

    #[test]
    fn test_public_page_renders_for_anyone() {
        let visit = navigator()
            .visit(Location::new("/products/skincare"), &Session::anonymous())
            .unwrap();
        assert!(!visit.was_redirected());
        assert_eq!(visit.page().unwrap().params.get("category"), Some("skincare"));
    }

    #[test]
    fn test_account_index_bounces_to_login_with_section_path() {
        let visit = navigator()
            .visit(Location::new("/account"), &Session::anonymous())
            .unwrap();

        let hops: Vec<&str> = visit.redirects.iter().map(|r| r.to.as_str()).collect();
        assert_eq!(hops, vec!["/login"]);
        assert_eq!(visit.location.pathname, "/login");
        assert_eq!(visit.location.return_to(), Some("/account"));
        assert_eq!(visit.page().unwrap().screen(), Some(Screen::Login));
    }

    #[test]
    fn test_section_index_guarded_before_redirect() {
        let nav = navigator();

        let visit = nav.visit(Location::new("/admin"), &Session::anonymous()).unwrap();
        assert_eq!(visit.redirects.len(), 1);
        assert_eq!(visit.location.return_to(), Some("/admin"));

        let visit = nav.visit(Location::new("/account"), &Session::loading()).unwrap();
        assert_eq!(visit.outcome, VisitOutcome::Loading);
        assert_eq!(visit.location.pathname, "/account");
        assert!(!visit.was_redirected());

        let visit = nav.visit(Location::new("/account"), &customer()).unwrap();
        assert_eq!(visit.location.pathname, "/account/profile");
        assert_eq!(visit.page().unwrap().screen(), Some(Screen::Profile));
    }

    #[test]
    fn test_loading_session_shows_only_loading() {
        for path in ["/checkout", "/login", "/admin/orders"] {
            let visit = navigator().visit(Location::new(path), &Session::loading()).unwrap();
            assert_eq!(visit.outcome, VisitOutcome::Loading, "{path}");
            assert_eq!(visit.location.pathname, path);
        }
    }

    #[test]
    fn test_customer_bounced_from_admin() {
        let visit = navigator()
            .visit(Location::new("/admin/products"), &customer())
            .unwrap();
        assert_eq!(visit.location.pathname, "/");
        assert_eq!(visit.page().unwrap().layouts, vec![LayoutKind::Root, LayoutKind::Marketing]);
    }

    #[test]
    fn test_signed_in_admin_leaves_login() {
        let visit = navigator().visit(Location::new("/login"), &admin()).unwrap();
        assert_eq!(visit.location.pathname, "/admin/dashboard");
        assert_eq!(visit.page().unwrap().screen(), Some(Screen::AdminDashboard));
    }

    #[test]
    fn test_return_to_is_honoured() {
        let location = Location::new("/login").with_state(NavState::from_path("/checkout"));
        let visit = navigator().visit(location, &customer()).unwrap();
        assert_eq!(visit.location.pathname, "/checkout");
        assert_eq!(visit.page().unwrap().screen(), Some(Screen::Checkout));
    }

    #[test]
    fn test_session_error_is_unavailable_on_guarded_pages() {
        let session = Session::failed("auth service down");
        let visit = navigator().visit(Location::new("/account/orders"), &session).unwrap();
        assert_eq!(
            visit.outcome,
            VisitOutcome::Unavailable {
                message: "auth service down".to_string()
            }
        );

        let visit = navigator().visit(Location::new("/login"), &session).unwrap();
        assert_eq!(visit.page().unwrap().screen(), Some(Screen::Login));
    }

    #[test]
    fn test_custom_login_path() {
        let nav = Navigator::new(storefront_routes(), "/register");
        let visit = nav.visit(Location::new("/checkout"), &Session::anonymous()).unwrap();
        assert_eq!(visit.location.pathname, "/register");
        assert_eq!(visit.location.return_to(), Some("/checkout"));
    }

    #[test]
    fn test_guard_bounce_loop_is_an_error() {
        // A login path that itself requires sign-in never settles.
        let nav = Navigator::new(storefront_routes(), "/account/profile");
        let result = nav.visit(Location::new("/checkout"), &Session::anonymous());
        assert!(matches!(
            result,
            Err(StoreError::Route(RouteError::RedirectLoop(_)))
        ));
    }
}
