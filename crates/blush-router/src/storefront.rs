//! The storefront's route table.

use crate::layout::LayoutKind;
use crate::route::{RouteNode, Screen};
use crate::table::RouteTable;
use crate::RouteError;
use tracing::error;

/// Build the storefront route table.
///
/// Standalone sections come first so the root catch-all never shadows them.
pub fn storefront_routes() -> RouteTable {
    match build() {
        Ok(table) => table,
        Err(e) => {
            error!(error = %e, "storefront route table failed to build");
            RouteTable::default()
        }
    }
}

fn build() -> Result<RouteTable, RouteError> {
    let checkout = RouteNode::layout("/checkout", LayoutKind::Checkout)?
        .child(RouteNode::index(Screen::Checkout));

    let admin = RouteNode::layout("/admin", LayoutKind::Admin)?.children([
        RouteNode::index_redirect("dashboard"),
        RouteNode::screen("/dashboard", Screen::AdminDashboard)?,
        RouteNode::screen("/products", Screen::AdminProducts)?,
        RouteNode::screen("/orders", Screen::AdminOrders)?,
    ]);

    let marketing = RouteNode::layout("", LayoutKind::Marketing)?.child(RouteNode::index(Screen::Home));

    let catalog = RouteNode::layout("", LayoutKind::Catalog)?.children([
        RouteNode::screen("/products", Screen::ProductListing)?,
        RouteNode::screen("/products/:category", Screen::ProductListing)?,
        RouteNode::screen("/product/:slug", Screen::ProductDetail)?,
    ]);

    let auth = RouteNode::layout("", LayoutKind::Auth)?.children([
        RouteNode::screen("/login", Screen::Login)?,
        RouteNode::screen("/register", Screen::Register)?,
        RouteNode::screen("/forgot-password", Screen::ForgotPassword)?,
    ]);

    let account = RouteNode::layout("/account", LayoutKind::Account)?.children([
        RouteNode::index_redirect("profile"),
        RouteNode::screen("/profile", Screen::Profile)?,
        RouteNode::screen("/addresses", Screen::Addresses)?,
        RouteNode::screen("/orders", Screen::Orders)?,
        RouteNode::screen("/orders/:id", Screen::OrderDetail)?,
        RouteNode::screen("/wishlist", Screen::Wishlist)?,
    ]);

    let root = RouteNode::layout("", LayoutKind::Root)?.children([
        marketing,
        catalog,
        auth,
        account,
        RouteNode::screen("/cart", Screen::Cart)?,
        RouteNode::screen("/search", Screen::Search)?,
        RouteNode::screen("/order/:id", Screen::OrderConfirmation)?,
        RouteNode::screen("/order/confirmation/:id", Screen::OrderConfirmation)?,
        RouteNode::catch_all(Screen::NotFound)?,
    ]);

    Ok(RouteTable::new(vec![checkout, admin, root]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Access, Chrome};
    use crate::table::Target;
    use blush_auth::Role;

    fn resolve(path: &str) -> crate::RouteMatch {
        storefront_routes().resolve(path).unwrap()
    }

    #[test]
    fn test_route_contract() {
        use LayoutKind::*;
        let cases: &[(&str, &[LayoutKind], Screen)] = &[
            ("/", &[Root, Marketing], Screen::Home),
            ("/products", &[Root, Catalog], Screen::ProductListing),
            ("/products/skincare", &[Root, Catalog], Screen::ProductListing),
            ("/product/rose-glow-serum", &[Root, Catalog], Screen::ProductDetail),
            ("/login", &[Root, Auth], Screen::Login),
            ("/register", &[Root, Auth], Screen::Register),
            ("/forgot-password", &[Root, Auth], Screen::ForgotPassword),
            ("/account/profile", &[Root, Account], Screen::Profile),
            ("/account/addresses", &[Root, Account], Screen::Addresses),
            ("/account/orders", &[Root, Account], Screen::Orders),
            ("/account/orders/o-42", &[Root, Account], Screen::OrderDetail),
            ("/account/wishlist", &[Root, Account], Screen::Wishlist),
            ("/cart", &[Root], Screen::Cart),
            ("/search", &[Root], Screen::Search),
            ("/order/o-42", &[Root], Screen::OrderConfirmation),
            ("/order/confirmation/o-42", &[Root], Screen::OrderConfirmation),
            ("/checkout", &[Checkout], Screen::Checkout),
            ("/admin/dashboard", &[Admin], Screen::AdminDashboard),
            ("/admin/products", &[Admin], Screen::AdminProducts),
            ("/admin/orders", &[Admin], Screen::AdminOrders),
            ("/this-path-does-not-exist", &[Root], Screen::NotFound),
        ];

        for (path, layouts, screen) in cases {
            let m = resolve(path);
            assert_eq!(m.layouts, *layouts, "layouts for {path}");
            assert_eq!(m.screen(), Some(*screen), "screen for {path}");
        }
    }

    #[test]
    fn test_index_redirects() {
        assert_eq!(
            resolve("/account").target,
            Target::Redirect("/account/profile".to_string())
        );
        assert_eq!(
            resolve("/admin").target,
            Target::Redirect("/admin/dashboard".to_string())
        );
        let settled = storefront_routes().resolve_final("/admin").unwrap();
        assert_eq!(settled.screen(), Some(Screen::AdminDashboard));
    }

    #[test]
    fn test_unmatched_paths_use_root_shell() {
        for path in [
            "/this-path-does-not-exist",
            "/account/unknown",
            "/admin/settings/deep",
            "/checkout/extra",
            "/product",
            "/products/skincare/serums",
        ] {
            let m = resolve(path);
            assert!(m.is_not_found(), "{path} should be not found");
            assert_eq!(m.layouts, vec![LayoutKind::Root], "{path}");
            assert!(m.has_chrome(Chrome::Header));
            assert!(m.has_chrome(Chrome::Footer));
        }
    }

    #[test]
    fn test_order_path_prefers_declaration_order() {
        // `/order/:id` is declared first, so a bare `/order/confirmation`
        // is an order id.
        let m = resolve("/order/confirmation");
        assert_eq!(m.screen(), Some(Screen::OrderConfirmation));
        assert_eq!(m.params.get("id"), Some("confirmation"));
    }

    #[test]
    fn test_params_and_patterns() {
        let m = resolve("/order/confirmation/o-77");
        assert_eq!(m.params.get("id"), Some("o-77"));
        assert_eq!(m.pattern, "/order/confirmation/:id");

        let m = resolve("/products/lip%20care?sort=new");
        assert_eq!(m.params.get("category"), Some("lip care"));
        assert_eq!(m.path, "/products/lip%20care");

        assert_eq!(resolve("/").pattern, "/");
    }

    #[test]
    fn test_access_requirements() {
        assert_eq!(resolve("/").access(), Access::Public);
        assert_eq!(resolve("/cart").access(), Access::Public);
        assert_eq!(resolve("/login").access(), Access::GuestOnly);
        assert_eq!(resolve("/account/orders").access(), Access::Authenticated);
        assert_eq!(resolve("/checkout").access(), Access::Authenticated);
        assert_eq!(resolve("/admin/orders").access(), Access::Role(Role::Admin));
    }

    #[test]
    fn test_standalone_sections_have_no_root_chrome() {
        let m = resolve("/checkout");
        assert!(!m.has_chrome(Chrome::Header));
        assert!(m.has_chrome(Chrome::Stepper));
        assert!(m.layouts.iter().all(|l| l.is_standalone()));
    }

    #[test]
    fn test_leaves_cover_the_contract() {
        let patterns: Vec<String> = storefront_routes()
            .leaves()
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        for expected in [
            "/checkout",
            "/admin",
            "/admin/dashboard",
            "/",
            "/products/:category",
            "/account/orders/:id",
            "/order/confirmation/:id",
            "/*any",
        ] {
            assert!(patterns.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
