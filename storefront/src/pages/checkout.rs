//! Checkout: shipping, payment, confirmation.

use blush_commerce::prelude::*;
use blush_router::Screen;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use tracing::info;

use super::account::AddressForm;
use crate::context::{AddressBookContext, CartContext, CheckoutContext};

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let checkout = CheckoutContext::expect();
    let cart = CartContext::expect();

    let step = move || match checkout.step() {
        Some(CheckoutStep::Shipping) => view! { <ShippingStep/> }.into_any(),
        Some(CheckoutStep::Payment) => view! { <PaymentStep/> }.into_any(),
        Some(CheckoutStep::Confirmation) => view! { <ConfirmationStep/> }.into_any(),
        None => view! {
            <div class="error-panel">
                <p>"This checkout step doesn't exist."</p>
                <button class="btn" on:click=move |_| checkout.reset_checkout()>"Start over"</button>
            </div>
        }
        .into_any(),
    };

    view! {
        <Title text=Screen::Checkout.title()/>
        <Show
            when=move || !cart.is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    <h3>"Your bag is empty"</h3>
                    <A href="/products">"Continue shopping"</A>
                </div>
            }
        >
            <p class="progress">{move || format!("{}% complete", checkout.progress().progress_percent())}</p>
            {step}
            <StepControls/>
        </Show>
    }
}

#[component]
fn StepControls() -> impl IntoView {
    let checkout = CheckoutContext::expect();
    let missing = move || checkout.progress().missing_for_next();
    let is_last = move || checkout.step() == Some(CheckoutStep::Confirmation);
    let is_first = move || checkout.step() == Some(CheckoutStep::Shipping);

    view! {
        <div class="step-controls">
            <button class="btn btn-secondary" disabled=is_first on:click=move |_| checkout.previous_step()>
                "Back"
            </button>
            <Show when=move || !is_last()>
                <button
                    class="btn"
                    disabled=move || !missing().is_empty()
                    on:click=move |_| checkout.next_step()
                >
                    "Continue"
                </button>
            </Show>
            {move || {
                let missing = missing();
                (!missing.is_empty()).then(|| view! {
                    <p class="hint">{format!("Choose a {} to continue.", missing.join(" and "))}</p>
                })
            }}
        </div>
    }
}

#[component]
fn ShippingStep() -> impl IntoView {
    let checkout = CheckoutContext::expect();
    let book = AddressBookContext::expect();
    let error = RwSignal::new(None::<String>);

    let selected = move || {
        checkout
            .progress()
            .selected_address()
            .and_then(|a| a.id.clone())
    };

    let on_saved = Callback::new(move |address: Address| match book.add(address) {
        Ok(()) => {
            error.set(None);
            if let Some(saved) = book.addresses().pop() {
                checkout.set_selected_address(saved);
            }
        }
        Err(e) => error.set(Some(e.to_string())),
    });

    let options = move || {
        book.addresses()
            .into_iter()
            .map(|address| {
                let id = address.id.clone();
                let summary = address.one_line();
                let name = address.full_name.clone();
                view! {
                    <label class="address-option">
                        <input
                            type="radio"
                            name="address"
                            prop:checked=move || selected() == id
                            on:change=move |_| checkout.set_selected_address(address.clone())
                        />
                        <strong>{name}</strong>
                        <span>{summary}</span>
                    </label>
                }
            })
            .collect_view()
    };

    view! {
        <section class="checkout-step">
            <h2>"Shipping address"</h2>
            <div class="address-options">{options}</div>
            <details>
                <summary>"Add a new address"</summary>
                <AddressForm on_saved=on_saved/>
            </details>
            {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
        </section>
    }
}

#[component]
fn PaymentStep() -> impl IntoView {
    let checkout = CheckoutContext::expect();
    let selected = move || checkout.progress().selected_payment().map(|p| p.kind);

    view! {
        <section class="checkout-step">
            <h2>"Payment method"</h2>
            {PaymentKind::ALL
                .iter()
                .map(|&kind| view! {
                    <label class="payment-option">
                        <input
                            type="radio"
                            name="payment"
                            prop:checked=move || selected() == Some(kind)
                            on:change=move |_| checkout.set_selected_payment(PaymentMethod::new(kind))
                        />
                        {kind.display_name()}
                    </label>
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn ConfirmationStep() -> impl IntoView {
    let checkout = CheckoutContext::expect();
    let cart = CartContext::expect();
    let navigate = use_navigate();

    let place_order = move |_| {
        let order_id = OrderId::generate();
        info!(order = %order_id, total = %cart.subtotal(), "order placed");
        cart.clear();
        checkout.reset_checkout();
        navigate(&format!("/order/confirmation/{}", order_id), Default::default());
    };

    let summary = move || {
        let progress = checkout.progress();
        let address = progress
            .selected_address()
            .map(Address::one_line)
            .unwrap_or_default();
        let payment = progress
            .selected_payment()
            .map(|p| p.kind.display_name())
            .unwrap_or_default();
        view! {
            <dl>
                <dt>"Ship to"</dt>
                <dd>{address}</dd>
                <dt>"Pay with"</dt>
                <dd>{payment}</dd>
                <dt>"Total"</dt>
                <dd>{cart.subtotal().display()}</dd>
            </dl>
        }
    };

    view! {
        <section class="checkout-step">
            <h2>"Review your order"</h2>
            {summary}
            <button class="btn" on:click=place_order>"Place order"</button>
        </section>
    }
}
