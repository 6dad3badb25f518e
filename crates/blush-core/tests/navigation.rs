//! End-to-end navigation: route table, guards and redirects together.

use blush_auth::{InMemorySessionProvider, SessionProvider};
use blush_core::prelude::*;

const PROTECTED: &[&str] = &[
    "/account",
    "/account/profile",
    "/account/addresses",
    "/account/orders",
    "/account/orders/o-1001",
    "/account/wishlist",
    "/checkout",
    "/admin",
    "/admin/dashboard",
    "/admin/products",
    "/admin/orders",
];

const STORE_TOML: &str = include_str!("../../../storefront/store.toml");

fn navigator() -> Navigator {
    let app = StoreApp::from_config(StoreConfig::from_toml_str(STORE_TOML).unwrap());
    app.init_tracing();
    app.navigator().unwrap()
}

fn sessions() -> Vec<Session> {
    vec![
        Session::anonymous(),
        Session::authenticated(User::new("u-1", "asha@example.com", Role::Customer)),
        Session::authenticated(User::new("u-2", "ops@example.com", Role::Admin)),
        Session::failed("timeout"),
    ]
}

#[test]
fn test_loading_session_never_renders_a_guarded_page() {
    let nav = navigator();
    for session in sessions() {
        let mut session = session;
        session.is_loading = true;
        for path in PROTECTED.iter().chain(["/login", "/register"].iter()) {
            let visit = nav.visit(Location::new(*path), &session).unwrap();
            assert_eq!(visit.outcome, VisitOutcome::Loading, "{path}");
            assert!(!visit.was_redirected());
        }
    }
}

#[test]
fn test_signed_out_visitor_goes_to_login_with_return_path() {
    let nav = navigator();
    for path in PROTECTED {
        let visit = nav.visit(Location::new(*path), &Session::anonymous()).unwrap();
        let bounce = visit.redirects.last().unwrap();

        assert_eq!(bounce.to, "/login", "{path}");
        assert!(bounce.replace);
        assert_eq!(visit.location.return_to(), Some(*path));
        assert_eq!(visit.page().unwrap().screen(), Some(Screen::Login));
    }
}

#[test]
fn test_shipped_settings_drive_navigation() {
    let config = StoreConfig::from_toml_str(STORE_TOML).unwrap();
    assert_eq!(config.log, TelemetryConfig::default());

    let app = StoreApp::from_config(config);
    app.init_tracing();
    assert!(!app.init_tracing());

    let visit = app
        .navigator()
        .unwrap()
        .visit(Location::new("/checkout"), &Session::anonymous())
        .unwrap();
    assert_eq!(visit.location.pathname, "/login");
}

#[test]
fn test_configured_login_path_is_used() {
    let nav = StoreApp::new("blush")
        .with_login_path("/register")
        .navigator()
        .unwrap();
    let visit = nav.visit(Location::new("/account/orders"), &Session::anonymous()).unwrap();
    assert_eq!(visit.location.pathname, "/register");
    assert_eq!(visit.location.return_to(), Some("/account/orders"));
}

#[tokio::test]
async fn test_login_resumes_the_guarded_page() {
    let nav = navigator();
    let provider = InMemorySessionProvider::new().with_account(
        "s3cret",
        User::new("u-1", "asha@example.com", Role::Customer),
    );

    let bounced = nav
        .visit(Location::new("/account/orders"), &Session::anonymous())
        .unwrap();
    assert_eq!(bounced.location.pathname, "/login");

    let user = provider.login("asha@example.com", "s3cret").await.unwrap();
    let resumed = nav
        .visit(bounced.location.clone(), &Session::authenticated(user))
        .unwrap();

    assert_eq!(resumed.location.pathname, "/account/orders");
    assert_eq!(resumed.page().unwrap().screen(), Some(Screen::Orders));
}

#[test]
fn test_guest_pages_send_signed_in_users_home() {
    let nav = navigator();
    let customer = Session::authenticated(User::new("u-1", "asha@example.com", Role::Customer));
    let admin = Session::authenticated(User::new("u-2", "ops@example.com", Role::Admin));

    for path in ["/login", "/register", "/forgot-password"] {
        assert_eq!(nav.visit(Location::new(path), &customer).unwrap().location.pathname, "/");
        assert_eq!(
            nav.visit(Location::new(path), &admin).unwrap().location.pathname,
            "/admin/dashboard"
        );
    }
}

#[test]
fn test_unknown_path_renders_not_found_in_shell() {
    let visit = navigator()
        .visit(Location::new("/this-path-does-not-exist"), &Session::anonymous())
        .unwrap();
    let page = visit.page().unwrap();

    assert!(page.is_not_found());
    assert!(page.has_chrome(Chrome::Header));
    assert!(page.has_chrome(Chrome::Footer));
    assert_eq!(visit.location.pathname, "/this-path-does-not-exist");
}

#[test]
fn test_unknown_path_below_guarded_section_is_not_guarded() {
    let visit = navigator()
        .visit(Location::new("/account/nope"), &Session::anonymous())
        .unwrap();
    assert!(!visit.was_redirected());
    assert!(visit.page().unwrap().is_not_found());
}

#[test]
fn test_search_round_trip_through_navigation() {
    let href = search_href("rose & glow").unwrap();
    assert!(href.contains("rose%20%26%20glow"));

    let visit = navigator()
        .visit(Location::parse(&href), &Session::anonymous())
        .unwrap();
    assert_eq!(visit.page().unwrap().screen(), Some(Screen::Search));
    assert_eq!(decode_query(&visit.location.search).as_deref(), Some("rose & glow"));
}
