//! Data hooks.
//!
//! Each hook owns a [`FetchTracker`]: a new fetch starts whenever its inputs
//! change or `refetch` runs, and only the newest result is applied. Results
//! arriving after the owning screen unmounts are dropped.

use std::sync::Arc;

use blush_commerce::data::{FetchState, FetchTracker};
use blush_commerce::prelude::*;
use futures::future::BoxFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::Services;

/// State of one hook plus a way to re-run it.
pub struct Fetch<T: Send + Sync + 'static> {
    pub state: ReadSignal<FetchState<T>>,
    pub refetch: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for Fetch<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Fetch<T> {}

fn use_fetch<T, F>(fetch: F) -> Fetch<T>
where
    T: Send + Sync + 'static,
    F: Fn() -> BoxFuture<'static, Result<T, FetchError>> + Send + Sync + 'static,
{
    let state = RwSignal::new(FetchState::Idle);
    let tracker = FetchTracker::new();

    let run = Arc::new({
        let tracker = tracker.clone();
        move || {
            let ticket = tracker.begin();
            state.try_set(FetchState::Pending);
            // Inputs are read here, so the effect below re-runs when they change.
            let request = fetch();
            let tracker = tracker.clone();
            spawn_local(async move {
                let result = request.await;
                if tracker.accepts(ticket) {
                    state.try_set(FetchState::from(result));
                }
            });
        }
    });

    let on_change = Arc::clone(&run);
    Effect::new(move |_| on_change());

    on_cleanup(move || tracker.unmount());

    Fetch {
        state: state.read_only(),
        refetch: Callback::new(move |_: ()| run()),
    }
}

/// Products for a listing, search or the home page.
pub fn use_products(options: Signal<ListOptions>) -> Fetch<Page<Product>> {
    let catalog = Services::expect().catalog;
    use_fetch(move || {
        let catalog = Arc::clone(&catalog);
        let options = options.get();
        Box::pin(async move { catalog.fetch_products(&options).await })
    })
}

/// One product by slug.
pub fn use_product(slug: Signal<String>) -> Fetch<Option<Product>> {
    let catalog = Services::expect().catalog;
    use_fetch(move || {
        let catalog = Arc::clone(&catalog);
        let slug = slug.get();
        Box::pin(async move { catalog.fetch_product(&slug).await })
    })
}

/// The signed-in customer's orders.
pub fn use_orders(options: Signal<ListOptions>) -> Fetch<Page<Order>> {
    let orders = Services::expect().orders;
    use_fetch(move || {
        let orders = Arc::clone(&orders);
        let options = options.get();
        Box::pin(async move { orders.fetch_orders(&options).await })
    })
}

/// One order by id.
pub fn use_order(id: Signal<String>) -> Fetch<Option<Order>> {
    let orders = Services::expect().orders;
    use_fetch(move || {
        let orders = Arc::clone(&orders);
        let id = id.get();
        Box::pin(async move { orders.fetch_order(&id).await })
    })
}
