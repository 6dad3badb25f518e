//! Loading, empty and error states.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading…".to_string());
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="spinner"></div>
            <p>{label}</p>
        </div>
    }
}

/// Inline, recoverable error.
#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    #[prop(optional)] on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <p class="error-message">{message}</p>
            {on_retry.map(|retry| view! {
                <button class="btn btn-secondary" on:click=move |_| retry.run(())>
                    "Try again"
                </button>
            })}
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(into)] hint: String,
    #[prop(optional, into)] action: Option<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            <p>{hint}</p>
            {action.map(|(href, label)| view! { <a href=href class="btn">{label}</a> })}
        </div>
    }
}

#[component]
pub fn SkeletonGrid(#[prop(default = 8)] count: usize) -> impl IntoView {
    view! {
        <div class="products skeleton">
            {(0..count)
                .map(|_| view! {
                    <div class="product-card">
                        <div class="skeleton-image"></div>
                        <div class="skeleton-line"></div>
                        <div class="skeleton-line short"></div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}
