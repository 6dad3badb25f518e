//! Catches render failures below a layout.

use blush_core::{BoundaryState, RecoveryAction, RenderFailure};
use leptos::error::Errors;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Wraps page content; a failure inside swaps in a recovery panel while the
/// surrounding layout keeps rendering.
#[component]
pub fn PageBoundary(children: Children) -> impl IntoView {
    let location = use_location();

    view! {
        <ErrorBoundary fallback=move |errors| {
            let message = errors
                .get()
                .into_iter()
                .map(|(_, e)| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            let mut state = BoundaryState::new();
            state.capture(RenderFailure::new(message).at(location.pathname.get_untracked()));
            view! { <BoundaryFallback state=state errors=errors/> }
        }>
            {children()}
        </ErrorBoundary>
    }
}

#[component]
fn BoundaryFallback(state: BoundaryState, errors: ArcRwSignal<Errors>) -> impl IntoView {
    let navigate = use_navigate();
    let message = state
        .failure()
        .map(|f| f.message.clone())
        .unwrap_or_default();

    let buttons = state
        .actions()
        .iter()
        .map(|&action| {
            let errors = errors.clone();
            let navigate = navigate.clone();
            let on_click = move |_| match action {
                // Clearing the captured errors re-renders the children.
                RecoveryAction::Retry => errors.set(Errors::default()),
                RecoveryAction::Back => {
                    if let Ok(history) = window().history() {
                        let _ = history.back();
                    }
                }
                RecoveryAction::Home => {
                    navigate(action.href().unwrap_or("/"), Default::default());
                    errors.set(Errors::default());
                }
            };
            view! { <button class="btn" on:click=on_click>{action.label()}</button> }
        })
        .collect_view();

    view! {
        <div class="error-panel boundary" role="alert">
            <h2>"Something went wrong"</h2>
            <p class="error-message">{message}</p>
            <div class="actions">{buttons}</div>
        </div>
    }
}
