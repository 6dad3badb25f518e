//! Layouts: shared chrome around an outlet.

use blush_router::{Chrome, LayoutKind};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Outlet, A};
use leptos_router::hooks::use_navigate;
use tracing::warn;

use crate::boundary::PageBoundary;
use crate::components::{Breadcrumbs, FilterSidebar, Footer, Header, Stepper};
use crate::context::{AuthContext, CheckoutContext, ReturnToContext};
use crate::guards::Guarded;

#[component]
pub fn RootLayout() -> impl IntoView {
    view! {
        <div class="layout-root">
            <Header/>
            <main>
                <PageBoundary>
                    <Outlet/>
                </PageBoundary>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn MarketingLayout() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>"Glow, naturally"</h1>
            <p>"Skincare, makeup and fragrance picked for every skin."</p>
            <A href="/products">"Shop now"</A>
        </section>
        <Outlet/>
    }
}

#[component]
pub fn CatalogLayout() -> impl IntoView {
    view! {
        <Breadcrumbs/>
        <div class="layout-catalog">
            <FilterSidebar/>
            <section class="catalog-content">
                <Outlet/>
            </section>
        </div>
    }
}

#[component]
pub fn AuthLayout() -> impl IntoView {
    view! {
        <Guarded kind=LayoutKind::Auth>
            <div class="auth-card">
                <Outlet/>
            </div>
        </Guarded>
    }
}

#[component]
pub fn AccountLayout() -> impl IntoView {
    view! {
        <Guarded kind=LayoutKind::Account>
            <div class="layout-account">
                <AccountSidebar/>
                <section class="account-content">
                    <Outlet/>
                </section>
            </div>
        </Guarded>
    }
}

#[component]
fn AccountSidebar() -> impl IntoView {
    let auth = AuthContext::expect();
    let return_to = ReturnToContext::expect();
    let navigate = use_navigate();

    let sign_out = move |_| {
        let auth = auth.clone();
        let navigate = navigate.clone();
        return_to.clear();
        spawn_local(async move {
            match auth.logout().await {
                Ok(()) => navigate("/", Default::default()),
                Err(e) => warn!(error = %e, "sign out failed"),
            }
        });
    };

    view! {
        <aside class="account-sidebar">
            <A href="/account/profile">"Profile"</A>
            <A href="/account/addresses">"Addresses"</A>
            <A href="/account/orders">"Orders"</A>
            <A href="/account/wishlist">"Wishlist"</A>
            <button class="btn btn-link" on:click=sign_out>"Sign out"</button>
        </aside>
    }
}

/// Standalone: no site header or footer.
#[component]
pub fn CheckoutLayout() -> impl IntoView {
    CheckoutContext::provide();
    let show_stepper = LayoutKind::Checkout.chrome().contains(&Chrome::Stepper);

    view! {
        <Guarded kind=LayoutKind::Checkout>
            <div class="layout-checkout">
                <header class="checkout-header">
                    <A href="/">
                        <span class="logo">"Blush"</span>
                    </A>
                    <span class="secure">"Secure checkout"</span>
                    <A href="/cart">"Back to bag"</A>
                </header>
                {show_stepper.then(|| view! { <Stepper/> })}
                <main>
                    <PageBoundary>
                        <Outlet/>
                    </PageBoundary>
                </main>
            </div>
        </Guarded>
    }
}

/// Standalone: admin chrome only.
#[component]
pub fn AdminLayout() -> impl IntoView {
    let session = AuthContext::expect().session();
    let who = move || {
        session
            .get()
            .user
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };

    view! {
        <Guarded kind=LayoutKind::Admin>
            <div class="layout-admin">
                <header class="admin-header">
                    <span class="logo">"Blush Admin"</span>
                    <span class="who">{who}</span>
                    <A href="/">"View store"</A>
                </header>
                <div class="admin-body">
                    <aside class="admin-sidebar">
                        <A href="/admin/dashboard">"Dashboard"</A>
                        <A href="/admin/products">"Products"</A>
                        <A href="/admin/orders">"Orders"</A>
                    </aside>
                    <main>
                        <PageBoundary>
                            <Outlet/>
                        </PageBoundary>
                    </main>
                </div>
            </div>
        </Guarded>
    }
}
