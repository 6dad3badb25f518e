//! Bag, order confirmation and not found.

use blush_commerce::prelude::*;
use blush_core::StoreError;
use blush_router::Screen;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::EmptyState;
use crate::context::CartContext;

#[component]
pub fn CartPage() -> impl IntoView {
    let cart = CartContext::expect();
    let error = RwSignal::new(None::<String>);

    let report = move |result: Result<(), CommerceError>| match result {
        Ok(()) => error.set(None),
        Err(e) => error.set(Some(e.to_string())),
    };

    let lines = move || {
        cart.lines()
            .into_iter()
            .map(|line| {
                let dec = line.product_id.clone();
                let inc = line.product_id.clone();
                let remove = line.product_id.clone();
                let quantity = line.quantity;
                view! {
                    <li class="cart-line">
                        <span class="name">{line.name.clone()}</span>
                        <span class="unit">{line.unit_price.display()}</span>
                        <div class="quantity">
                            <button on:click=move |_| report(cart.set_quantity(&dec, quantity - 1))>"−"</button>
                            <span>{quantity}</span>
                            <button on:click=move |_| report(cart.set_quantity(&inc, quantity + 1))>"+"</button>
                        </div>
                        <span class="subtotal">{line.subtotal().display()}</span>
                        <button class="btn btn-link" on:click=move |_| report(cart.remove(&remove))>
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <Title text=Screen::Cart.title()/>
        <h2>"Your bag"</h2>
        <Show
            when=move || !cart.is_empty()
            fallback=|| view! {
                <EmptyState
                    title="Your bag is empty"
                    hint="Add something you love."
                    action=("/products".to_string(), "Continue shopping".to_string())
                />
            }
        >
            <ul class="cart-lines">{lines}</ul>
            {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
            <div class="cart-summary">
                <p>"Subtotal (" {move || cart.item_count()} " items): " {move || cart.subtotal().display()}</p>
                <A href="/checkout">"Proceed to checkout"</A>
            </div>
        </Show>
    }
}

/// `/order/:id` and `/order/confirmation/:id`.
#[component]
pub fn OrderConfirmationPage() -> impl IntoView {
    let params = use_params_map();

    let body = move || -> Result<AnyView, StoreError> {
        let id = params
            .with(|p| p.get("id"))
            .filter(|id| !id.is_empty())
            .ok_or_else(|| StoreError::Render("order confirmation without an order id".to_string()))?;
        let href = format!("/account/orders/{}", id);
        Ok(view! {
            <div class="confirmation">
                <h2>"Thank you! Your order is placed."</h2>
                <p>"Order number: " <strong>{id}</strong></p>
                <A href=href>"View order"</A>
                " "
                <A href="/products">"Continue shopping"</A>
            </div>
        }
        .into_any())
    };

    view! {
        <Title text=Screen::OrderConfirmation.title()/>
        {body}
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text=Screen::NotFound.title()/>
        <div class="not-found">
            <h1>"404"</h1>
            <p>"We couldn't find that page."</p>
            <A href="/">"Back to home"</A>
        </div>
    }
}
