//! Admin screens.

use blush_commerce::data::FetchState;
use blush_commerce::prelude::*;
use blush_router::Screen;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Redirect;

use crate::components::{EmptyState, ErrorPanel, LoadingScreen};
use crate::hooks::{use_orders, use_products, Fetch};

/// `/admin` index.
#[component]
pub fn AdminIndex() -> impl IntoView {
    view! { <Redirect path="/admin/dashboard"/> }
}

fn count<T: Clone + Send + Sync + 'static>(fetch: Fetch<Page<T>>) -> impl Fn() -> String + Copy {
    move || match fetch.state.get() {
        FetchState::Ready(page) if page.has_more => format!("{}+", page.items.len()),
        FetchState::Ready(page) => page.items.len().to_string(),
        FetchState::Failed(_) => "n/a".to_string(),
        FetchState::Idle | FetchState::Pending => "…".to_string(),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let all = Signal::derive(ListOptions::default);
    let products = count(use_products(all));
    let orders = count(use_orders(all));

    view! {
        <Title text=Screen::AdminDashboard.title()/>
        <h2>"Dashboard"</h2>
        <div class="stats">
            <div class="stat"><span>"Products"</span><strong>{products}</strong></div>
            <div class="stat"><span>"Orders"</span><strong>{orders}</strong></div>
        </div>
    }
}

#[component]
pub fn AdminProductsPage() -> impl IntoView {
    let products = use_products(Signal::derive(ListOptions::default));

    let body = move || match products.state.get() {
        FetchState::Idle | FetchState::Pending => view! { <LoadingScreen/> }.into_any(),
        FetchState::Failed(e) => view! {
            <ErrorPanel message=e.to_string() on_retry=products.refetch/>
        }
        .into_any(),
        FetchState::Ready(page) if page.is_empty() => view! {
            <EmptyState title="No products" hint="The catalog is empty."/>
        }
        .into_any(),
        FetchState::Ready(page) => view! {
            <table class="admin-table">
                <thead>
                    <tr><th>"Name"</th><th>"Category"</th><th>"Price"</th><th>"Stock"</th></tr>
                </thead>
                <tbody>
                    {page
                        .items
                        .into_iter()
                        .map(|p| view! {
                            <tr>
                                <td>{p.name}</td>
                                <td>{p.category}</td>
                                <td>{p.price.display()}</td>
                                <td>{if p.in_stock { "In stock" } else { "Out of stock" }}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <Title text=Screen::AdminProducts.title()/>
        <h2>"Products"</h2>
        {body}
    }
}

#[component]
pub fn AdminOrdersPage() -> impl IntoView {
    let orders = use_orders(Signal::derive(ListOptions::default));

    let body = move || match orders.state.get() {
        FetchState::Idle | FetchState::Pending => view! { <LoadingScreen/> }.into_any(),
        FetchState::Failed(e) => view! {
            <ErrorPanel message=e.to_string() on_retry=orders.refetch/>
        }
        .into_any(),
        FetchState::Ready(page) if page.is_empty() => view! {
            <EmptyState title="No orders" hint="Orders appear here once customers check out."/>
        }
        .into_any(),
        FetchState::Ready(page) => view! {
            <table class="admin-table">
                <thead>
                    <tr><th>"Order"</th><th>"Status"</th><th>"Total"</th></tr>
                </thead>
                <tbody>
                    {page
                        .items
                        .into_iter()
                        .map(|o| view! {
                            <tr>
                                <td>{o.id.to_string()}</td>
                                <td>{o.status.display_name()}</td>
                                <td>{o.total().display()}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any(),
    };

    view! {
        <Title text=Screen::AdminOrders.title()/>
        <h2>"Orders"</h2>
        {body}
    }
}
