//! Header, footer and breadcrumbs.

use blush_auth::Role;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::catalog::category_label;
use super::SearchForm;
use crate::context::{AuthContext, CartContext, WishlistContext};

#[component]
pub fn Header() -> impl IntoView {
    let session = AuthContext::expect().session();
    let cart = CartContext::expect();
    let wishlist = WishlistContext::expect();

    let account = move || {
        let session = session.get();
        match session.user {
            Some(user) if session.is_authenticated => {
                let href = if user.role == Role::Admin {
                    Role::Admin.home_path()
                } else {
                    "/account/profile"
                };
                view! { <A href=href>{user.display_name().to_string()}</A> }.into_any()
            }
            _ => view! { <A href="/login">"Sign in"</A> }.into_any(),
        }
    };

    view! {
        <header class="site-header">
            <A href="/">
                <span class="logo">"Blush"</span>
            </A>
            <nav class="main-nav">
                <A href="/products">"Shop all"</A>
                <A href="/products/skincare">"Skincare"</A>
                <A href="/products/makeup">"Makeup"</A>
            </nav>
            <SearchForm/>
            <div class="header-actions">
                {account}
                <A href="/account/wishlist">"Wishlist (" {move || wishlist.len()} ")"</A>
                <A href="/cart">"Bag (" {move || cart.item_count()} ")"</A>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <nav>
                <A href="/products">"Shop"</A>
                <A href="/account/orders">"Orders"</A>
                <A href="/cart">"Bag"</A>
            </nav>
            <p>"Blush | Beauty & Skincare"</p>
        </footer>
    }
}

/// `(label, href)` trail for a catalog path. The last entry is the current
/// page.
pub(crate) fn crumbs(pathname: &str) -> Vec<(String, String)> {
    let mut trail = vec![("Home".to_string(), "/".to_string())];
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["products"] => trail.push(("Shop".to_string(), "/products".to_string())),
        ["products", category] => {
            trail.push(("Shop".to_string(), "/products".to_string()));
            trail.push((category_label(category), format!("/products/{}", category)));
        }
        ["product", slug] => {
            trail.push(("Shop".to_string(), "/products".to_string()));
            trail.push((slug.replace('-', " "), format!("/product/{}", slug)));
        }
        _ => {}
    }
    trail
}

#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            {move || {
                let trail = crumbs(&location.pathname.get());
                let last = trail.len().saturating_sub(1);
                trail
                    .into_iter()
                    .enumerate()
                    .map(|(i, (label, href))| {
                        if i == last {
                            view! { <span aria-current="page">{label}</span> }.into_any()
                        } else {
                            view! { <A href=href>{label}</A> " / " }.into_any()
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crumbs() {
        assert_eq!(crumbs("/products").len(), 2);

        let trail = crumbs("/products/bath-body");
        assert_eq!(trail[2], ("Bath & Body".to_string(), "/products/bath-body".to_string()));

        let trail = crumbs("/product/rose-glow-serum");
        assert_eq!(trail[2].0, "rose glow serum");
        assert_eq!(trail[0].1, "/");
    }
}
