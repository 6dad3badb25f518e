//! Guard components.
//!
//! Thin reactive wrappers over the `blush_auth` guards: the decision is
//! recomputed whenever the session or path changes, redirects go through the
//! router with history replacement, and the return-to path is kept in
//! [`ReturnToContext`].

use blush_auth::{AuthGuard, GuardOutcome, GuestGuard, Location, NavState, Redirect, Role};
use blush_core::StoreConfig;
use blush_router::{Access, LayoutKind};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;
use tracing::debug;

use crate::components::{ErrorPanel, LoadingScreen};
use crate::context::{AuthContext, ReturnToContext};

fn follow(outcome: Memo<GuardOutcome>, on_redirect: impl Fn(&Redirect) + 'static) {
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let GuardOutcome::Redirect(redirect) = outcome.get() {
            on_redirect(&redirect);
            debug!(to = %redirect.to, "guard redirect");
            navigate(
                &redirect.to,
                NavigateOptions {
                    replace: redirect.replace,
                    ..Default::default()
                },
            );
        }
    });
}

fn render(outcome: Memo<GuardOutcome>, children: ChildrenFn) -> impl IntoView {
    let auth = AuthContext::expect();
    move || match outcome.get() {
        GuardOutcome::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardOutcome::Unavailable { message } => {
            let auth = auth.clone();
            view! {
                <ErrorPanel
                    message=format!("We couldn't check your sign-in: {}", message)
                    on_retry=Callback::new(move |_: ()| auth.refresh())
                />
            }
            .into_any()
        }
        GuardOutcome::Redirect(_) => ().into_any(),
        GuardOutcome::Render => children().into_any(),
    }
}

/// Renders children only for a signed-in visitor, optionally with `role`.
#[component]
pub fn RequireAuth(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = AuthContext::expect().session();
    let login_path = expect_context::<StoreConfig>().login_path;
    let return_to = ReturnToContext::expect();
    let location = use_location();

    let guard = AuthGuard::new(login_path).with_required_role(role);
    let outcome = Memo::new(move |_| {
        let here = Location::new(location.pathname.get());
        session.with(|s| guard.check(s, &here))
    });

    follow(outcome, move |redirect| {
        return_to.remember(redirect.state.as_ref().and_then(|s| s.from.clone()));
    });
    render(outcome, children)
}

/// Renders children only for a signed-out visitor.
#[component]
pub fn GuestOnly(children: ChildrenFn) -> impl IntoView {
    let session = AuthContext::expect().session();
    let return_to = ReturnToContext::expect();
    let location = use_location();

    // Only the bounce that led here may be resumed.
    let held = return_to.ticket();
    on_cleanup(move || {
        if let Some(ticket) = held {
            return_to.release(ticket);
        }
    });

    let outcome = Memo::new(move |_| {
        let mut here = Location::new(location.pathname.get());
        if let Some(from) = held.and(return_to.peek()) {
            here = here.with_state(NavState { from: Some(from) });
        }
        session.with(|s| GuestGuard::new().check(s, &here))
    });

    follow(outcome, move |_| return_to.clear());
    render(outcome, children)
}

/// Applies the access requirement a layout declares.
#[component]
pub fn Guarded(kind: LayoutKind, children: ChildrenFn) -> impl IntoView {
    match kind.access() {
        Access::Public => children().into_any(),
        Access::GuestOnly => view! { <GuestOnly children=children/> }.into_any(),
        Access::Authenticated => view! { <RequireAuth children=children/> }.into_any(),
        Access::Role(role) => view! { <RequireAuth role=role children=children/> }.into_any(),
    }
}
