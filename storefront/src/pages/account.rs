//! Signed-in customer screens.

use blush_commerce::data::FetchState;
use blush_commerce::prelude::*;
use blush_core::StoreConfig;
use blush_router::Screen;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::{Redirect, A};
use leptos_router::hooks::use_params_map;

use crate::components::{EmptyState, ErrorPanel, LoadingScreen};
use crate::context::{AddressBookContext, AuthContext, WishlistContext};
use crate::hooks::{use_order, use_orders};

/// `/account` index.
#[component]
pub fn AccountIndex() -> impl IntoView {
    view! { <Redirect path="/account/profile"/> }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = AuthContext::expect().session();

    let details = move || {
        session.get().user.map(|user| {
            view! {
                <dl class="profile">
                    <dt>"Name"</dt>
                    <dd>{user.display_name().to_string()}</dd>
                    <dt>"Email"</dt>
                    <dd>{user.email.clone()}</dd>
                    <dt>"Member ID"</dt>
                    <dd>{user.id.to_string()}</dd>
                </dl>
            }
        })
    };

    view! {
        <Title text=Screen::Profile.title()/>
        <h2>"My profile"</h2>
        {details}
    }
}

#[component]
pub fn AddressesPage() -> impl IntoView {
    let book = AddressBookContext::expect();
    let error = RwSignal::new(None::<String>);

    let on_saved = Callback::new(move |address: Address| match book.add(address) {
        Ok(()) => error.set(None),
        Err(e) => error.set(Some(e.to_string())),
    });

    let list = move || {
        let addresses = book.addresses();
        if addresses.is_empty() {
            return view! {
                <EmptyState title="No saved addresses" hint="Add one below to speed up checkout."/>
            }
            .into_any();
        }
        addresses
            .into_iter()
            .map(|address| {
                let id = address.id.clone();
                view! {
                    <li class="address">
                        <strong>{address.full_name.clone()}</strong>
                        {address.is_default.then_some(" (default)")}
                        <p>{address.one_line()}</p>
                        <p>{address.phone.clone()}</p>
                        <button class="btn btn-link" on:click=move |_| {
                            if let Some(ref id) = id {
                                book.remove(id);
                            }
                        }>"Remove"</button>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Title text=Screen::Addresses.title()/>
        <h2>"My addresses"</h2>
        <ul class="addresses">{list}</ul>
        <h3>"Add an address"</h3>
        <AddressForm on_saved=on_saved/>
        {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
    }
}

/// Address entry form; hands the address to `on_saved` unvalidated.
#[component]
pub fn AddressForm(on_saved: Callback<Address>) -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let line1 = RwSignal::new(String::new());
    let line2 = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let state = RwSignal::new(String::new());
    let pincode = RwSignal::new(String::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut address = Address::new(
            full_name.get_untracked().trim(),
            phone.get_untracked().trim(),
            line1.get_untracked().trim(),
            city.get_untracked().trim(),
            state.get_untracked().trim(),
            pincode.get_untracked().trim(),
        );
        let extra = line2.get_untracked().trim().to_string();
        if !extra.is_empty() {
            address.address_line2 = Some(extra);
        }
        on_saved.run(address);
    };

    let field = move |label: &'static str, signal: RwSignal<String>| {
        view! {
            <label>
                {label}
                <input
                    type="text"
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <form class="address-form" on:submit=on_submit>
            {field("Full name", full_name)}
            {field("Phone", phone)}
            {field("Address line 1", line1)}
            {field("Address line 2 (optional)", line2)}
            {field("City", city)}
            {field("State", state)}
            {field("Pincode", pincode)}
            <button type="submit" class="btn">"Save address"</button>
        </form>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let per_page = expect_context::<StoreConfig>().per_page;
    let options = Signal::derive(move || ListOptions::default().with_page(1, per_page));
    let orders = use_orders(options);

    let body = move || match orders.state.get() {
        FetchState::Idle | FetchState::Pending => view! { <LoadingScreen label="Loading orders…"/> }.into_any(),
        FetchState::Failed(e) => view! {
            <ErrorPanel message=format!("Couldn't load your orders: {}", e) on_retry=orders.refetch/>
        }
        .into_any(),
        FetchState::Ready(page) if page.is_empty() => view! {
            <EmptyState
                title="No orders yet"
                hint="Your orders will show up here."
                action=("/products".to_string(), "Start shopping".to_string())
            />
        }
        .into_any(),
        FetchState::Ready(page) => view! {
            <ul class="orders">
                {page
                    .items
                    .into_iter()
                    .map(|order| {
                        let label = format!("Order {}", order.id);
                        view! {
                            <li>
                                <A href=order.href()>{label}</A>
                                <span class="status">{order.status.display_name()}</span>
                                <span class="total">{order.total().display()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    };

    view! {
        <Title text=Screen::Orders.title()/>
        <h2>"My orders"</h2>
        {body}
    }
}

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = Signal::derive(move || params.with(|p| p.get("id").unwrap_or_default()));
    let order = use_order(id);

    let body = move || match order.state.get() {
        FetchState::Idle | FetchState::Pending => view! { <LoadingScreen/> }.into_any(),
        FetchState::Failed(e) => view! {
            <ErrorPanel message=format!("Couldn't load this order: {}", e) on_retry=order.refetch/>
        }
        .into_any(),
        FetchState::Ready(None) => view! {
            <EmptyState
                title="Order not found"
                hint=format!("We couldn't find order {}.", id.get())
                action=("/account/orders".to_string(), "Back to orders".to_string())
            />
        }
        .into_any(),
        FetchState::Ready(Some(order)) => view! {
            <article class="order-detail">
                <h3>{format!("Order {}", order.id)}</h3>
                <p>{format!("Placed {}", order.placed_at.format("%d %b %Y"))}</p>
                <ul>
                    {order
                        .lines
                        .iter()
                        .map(|line| view! {
                            <li>{format!("{} × {}", line.name, line.quantity)}</li>
                        })
                        .collect_view()}
                </ul>
                <p>"Ship to: " {order.shipping_address.one_line()}</p>
                <p>"Paid by: " {order.payment.kind.display_name()}</p>
                <p class="total">{order.total().display()}</p>
            </article>
        }
        .into_any(),
    };

    view! {
        <Title text=Screen::OrderDetail.title()/>
        {body}
    }
}

#[component]
pub fn WishlistPage() -> impl IntoView {
    let wishlist = WishlistContext::expect();

    let body = move || {
        let items = wishlist.items();
        if items.is_empty() {
            return view! {
                <EmptyState
                    title="Your wishlist is empty"
                    hint="Tap the heart on any product to save it here."
                    action=("/products".to_string(), "Discover products".to_string())
                />
            }
            .into_any();
        }
        view! {
            <ul class="wishlist">
                {items
                    .into_iter()
                    .map(|id| {
                        let remove = id.clone();
                        view! {
                            <li>
                                <span>{id.to_string()}</span>
                                <button class="btn btn-link" on:click=move |_| wishlist.remove(&remove)>
                                    "Remove"
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <Title text=Screen::Wishlist.title()/>
        <h2>"My wishlist"</h2>
        {body}
    }
}
