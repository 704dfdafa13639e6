//! Sign-in / sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place backend failures are shown to the user. On success the
//! shared auth context is updated and the browser moves to the dashboard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::util::auth::DASHBOARD_PATH;

/// Minimum password length accepted by the server on sign-up.
const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::SignIn => "Need an account? Sign up",
            Self::SignUp => "Already have an account? Sign in",
        }
    }
}

/// Client-side checks run before any request is sent.
///
/// # Errors
///
/// Returns the message to display when the input cannot be submitted.
pub fn validate_credentials(mode: AuthMode, email: &str, password: &str) -> Result<(), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if mode == AuthMode::SignUp && password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::SignIn);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let mode_value = mode.get();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(msg) = validate_credentials(mode_value, &email_value, &password_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let full_name_value = crate::util::form::optional_trimmed(&full_name.get());
            leptos::task::spawn_local(async move {
                let result = match mode_value {
                    AuthMode::SignIn => crate::net::api::sign_in(&email_value, &password_value).await,
                    AuthMode::SignUp => crate::net::api::sign_up(&email_value, &password_value, full_name_value).await,
                };
                match result {
                    Ok(user) => {
                        auth.set(AuthState::signed_in(user));
                        navigate(DASHBOARD_PATH, NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("{}: {e}", mode_value.title());
                        error.set(Some(e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, full_name);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{move || mode.get().title()}</h1>
                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || mode.get() == AuthMode::SignUp>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full name (optional)"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Please wait..." } else { mode.get().title() }}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button
                    class="auth-toggle"
                    type="button"
                    on:click=move |_| {
                        mode.update(|m| *m = m.toggled());
                        error.set(None);
                    }
                >
                    {move || mode.get().toggle_label()}
                </button>
            </div>
        </div>
    }
}
