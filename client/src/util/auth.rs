//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Route that unauthenticated visitors of protected pages are sent to.
pub const SIGN_IN_PATH: &str = "/auth";

/// Route shown after a successful sign-in or sign-up.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Whether a protected page should bounce to [`SIGN_IN_PATH`].
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/auth` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });
}
