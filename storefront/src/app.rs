//! Application root: providers and the route tree.

use std::sync::Arc;

use blush_auth::{InMemorySessionProvider, Role, User};
use blush_commerce::data::Delay;
use blush_core::StoreConfig;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use tracing::warn;

use crate::context::{
    AddressBookContext, AuthContext, CartContext, ReturnToContext, Services, WishlistContext,
};
use crate::delay::TimeoutDelay;
use crate::layouts::{
    AccountLayout, AdminLayout, AuthLayout, CatalogLayout, CheckoutLayout, MarketingLayout,
    RootLayout,
};
use crate::pages::*;

const STORE_TOML: &str = include_str!("../store.toml");

/// Embedded settings, or defaults if they don't parse.
fn load_config() -> StoreConfig {
    StoreConfig::from_toml_str(STORE_TOML).unwrap_or_else(|e| {
        warn!(error = %e, "store.toml rejected, using defaults");
        StoreConfig::default()
    })
}

/// Accounts for trying the storefront without a backend.
fn demo_accounts() -> InMemorySessionProvider {
    InMemorySessionProvider::new()
        .with_account(
            "blush123",
            User::new("u-demo", "asha@blush.test", Role::Customer).with_name("Asha"),
        )
        .with_account(
            "admin123",
            User::new("u-admin", "ops@blush.test", Role::Admin).with_name("Store Ops"),
        )
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();
    let delay: Arc<dyn Delay> = Arc::new(TimeoutDelay);
    Services::stub(delay, config.data_latency()).provide();
    provide_context(config.clone());

    let auth = AuthContext::provide(Arc::new(demo_accounts()));
    auth.refresh();
    CartContext::provide();
    WishlistContext::provide();
    AddressBookContext::provide();
    ReturnToContext::provide();

    let css = config.css_path.clone().unwrap_or_default();
    let title = config.default_title.clone();

    view! {
        <Stylesheet id="leptos" href=css/>
        <Meta name="description" content="Blush: skincare, makeup and fragrance"/>
        <Title formatter=move |text: String| {
            if text.is_empty() { title.clone() } else { format!("{} | Blush", text) }
        }/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                // Standalone sections first so the root catch-all can't shadow them.
                <ParentRoute path=path!("/checkout") view=CheckoutLayout>
                    <Route path=path!("") view=CheckoutPage/>
                </ParentRoute>
                <ParentRoute path=path!("/admin") view=AdminLayout>
                    <Route path=path!("") view=AdminIndex/>
                    <Route path=path!("/dashboard") view=AdminDashboardPage/>
                    <Route path=path!("/products") view=AdminProductsPage/>
                    <Route path=path!("/orders") view=AdminOrdersPage/>
                </ParentRoute>

                <ParentRoute path=path!("") view=RootLayout>
                    <ParentRoute path=path!("") view=MarketingLayout>
                        <Route path=path!("") view=HomePage/>
                    </ParentRoute>
                    <ParentRoute path=path!("") view=CatalogLayout>
                        <Route path=path!("/products") view=ProductListingPage/>
                        <Route path=path!("/products/:category") view=ProductListingPage/>
                        <Route path=path!("/product/:slug") view=ProductDetailPage/>
                    </ParentRoute>
                    <ParentRoute path=path!("") view=AuthLayout>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                    </ParentRoute>
                    <ParentRoute path=path!("/account") view=AccountLayout>
                        <Route path=path!("") view=AccountIndex/>
                        <Route path=path!("/profile") view=ProfilePage/>
                        <Route path=path!("/addresses") view=AddressesPage/>
                        <Route path=path!("/orders") view=OrdersPage/>
                        <Route path=path!("/orders/:id") view=OrderDetailPage/>
                        <Route path=path!("/wishlist") view=WishlistPage/>
                    </ParentRoute>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/search") view=SearchPage/>
                    <Route path=path!("/order/:id") view=OrderConfirmationPage/>
                    <Route path=path!("/order/confirmation/:id") view=OrderConfirmationPage/>
                    <Route path=path!("/*any") view=NotFoundPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
