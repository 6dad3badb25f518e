//! Sign in, registration and password reset.

use blush_router::Screen;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::context::AuthContext;

/// Valid enough to send: something before and after a single `@`.
fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = AuthContext::expect();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    // A successful sign-in updates the session; the guest guard around this
    // page then sends the visitor on.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if !looks_like_email(&email.get_untracked()) {
            error.set(Some("Enter a valid email address".to_string()));
            return;
        }
        let auth = auth.clone();
        pending.set(true);
        error.set(None);
        spawn_local(async move {
            let result = auth
                .login(email.get_untracked().trim().to_string(), password.get_untracked())
                .await;
            pending.try_set(false);
            if let Err(e) = result {
                error.try_set(Some(e.to_string()));
            }
        });
    };

    view! {
        <Title text=Screen::Login.title()/>
        <h2>"Sign in"</h2>
        <form class="auth-form" on:submit=on_submit>
            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
            <button type="submit" class="btn" disabled=move || pending.get()>
                {move || if pending.get() { "Signing in…" } else { "Sign in" }}
            </button>
        </form>
        <p class="auth-links">
            <A href="/forgot-password">"Forgot password?"</A>
            " · "
            <A href="/register">"Create an account"</A>
        </p>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let status = RwSignal::new(None::<Result<String, String>>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let outcome = if name.get_untracked().trim().is_empty() {
            Err("Tell us your name".to_string())
        } else if !looks_like_email(&email.get_untracked()) {
            Err("Enter a valid email address".to_string())
        } else {
            Ok(format!(
                "Thanks, {}! We'll email {} when sign-ups open.",
                name.get_untracked().trim(),
                email.get_untracked().trim()
            ))
        };
        status.set(Some(outcome));
    };

    view! {
        <Title text=Screen::Register.title()/>
        <h2>"Create an account"</h2>
        <form class="auth-form" on:submit=on_submit>
            <label>
                "Full name"
                <input
                    type="text"
                    autocomplete="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            {move || status.get().map(|s| match s {
                Ok(msg) => view! { <p class="notice">{msg}</p> }.into_any(),
                Err(msg) => view! { <p class="form-error" role="alert">{msg}</p> }.into_any(),
            })}
            <button type="submit" class="btn">"Create account"</button>
        </form>
        <p class="auth-links">
            "Already have an account? " <A href="/login">"Sign in"</A>
        </p>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if looks_like_email(&email.get_untracked()) {
            error.set(None);
            sent.set(true);
        } else {
            error.set(Some("Enter a valid email address".to_string()));
        }
    };

    view! {
        <Title text=Screen::ForgotPassword.title()/>
        <h2>"Reset your password"</h2>
        <Show
            when=move || sent.get()
            fallback=move || view! {
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
                    <button type="submit" class="btn">"Send reset link"</button>
                </form>
            }
        >
            <p class="notice">"If an account exists for that address, a reset link is on its way."</p>
        </Show>
        <p class="auth-links"><A href="/login">"Back to sign in"</A></p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("asha@blush.test"));
        assert!(looks_like_email("  asha@blush.test "));
        assert!(!looks_like_email("asha"));
        assert!(!looks_like_email("@blush.test"));
        assert!(!looks_like_email("asha@localhost"));
        assert!(!looks_like_email("a@b@c.com"));
    }
}
