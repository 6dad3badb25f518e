//! Blush storefront.
//!
//! A client-rendered Leptos application over the Blush domain crates:
//! - Route tree mirroring `blush_router::storefront_routes`
//! - Auth and guest guards backed by `blush_auth`
//! - Cart, wishlist and checkout state containers
//! - Stub data hooks with loading, empty and error states

mod app;
mod boundary;
mod components;
mod context;
mod delay;
mod guards;
mod hooks;
mod layouts;
mod pages;

pub use app::App;
pub use context::{
    AddressBookContext, AuthContext, CartContext, CheckoutContext, ReturnToContext, Services,
    WishlistContext,
};
pub use delay::TimeoutDelay;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
