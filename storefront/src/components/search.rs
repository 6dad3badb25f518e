//! Header search box.

use blush_router::{decode_query, search_href, SEARCH_PATH};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

#[component]
pub fn SearchForm() -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let text = RwSignal::new(String::new());

    // Keep the box in sync with the results page being shown.
    Effect::new(move |_| {
        if location.pathname.get() == SEARCH_PATH {
            if let Some(query) = decode_query(&location.search.get()) {
                text.set(query);
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(&text.get_untracked()) {
            navigate(&href, Default::default());
        }
    };

    view! {
        <form class="search-form" role="search" on:submit=on_submit>
            <input
                type="search"
                name="q"
                placeholder="Search for products and brands"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
        </form>
    }
}
