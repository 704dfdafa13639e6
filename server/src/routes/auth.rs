//! Auth routes: email + password sign-up/sign-in, logout, session lookup.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::config::SessionSettings;
use crate::services::{auth as auth_svc, session};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: session::SessionUser,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "session validation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            })?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

// =============================================================================
// COOKIES
// =============================================================================

pub(crate) fn session_cookie(token: String, settings: SessionSettings) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.cookie_secure)
        .max_age(Duration::days(i64::from(settings.ttl_days)))
        .build()
}

pub(crate) fn cleared_session_cookie(settings: SessionSettings) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(settings.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}

pub(crate) fn auth_error_to_status(err: &auth_svc::AuthError) -> StatusCode {
    match err {
        auth_svc::AuthError::InvalidEmail
        | auth_svc::AuthError::WeakPassword
        | auth_svc::AuthError::PasswordTooLong => StatusCode::BAD_REQUEST,
        auth_svc::AuthError::EmailTaken => StatusCode::CONFLICT,
        auth_svc::AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        auth_svc::AuthError::Hash(_) | auth_svc::AuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn auth_error_response(err: auth_svc::AuthError) -> Response {
    let status = auth_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "auth request failed");
        return (status, Json(serde_json::json!({ "error": "internal error" }))).into_response();
    }
    (status, Json(serde_json::json!({ "error": err.to_string() }))).into_response()
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct SignUpBody {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

#[derive(Deserialize)]
pub struct SignInBody {
    pub email: String,
    pub password: String,
}

async fn start_session(state: &AppState, jar: CookieJar, user: session::SessionUser, status: StatusCode) -> Response {
    let token = match session::create_session(&state.pool, user.id, state.session.ttl_days).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, user_id = %user.id, "session creation failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create session").into_response();
        }
    };

    let jar = jar.add(session_cookie(token, state.session));
    (status, jar, Json(user)).into_response()
}

/// `POST /api/auth/sign-up` — register, set session cookie, return the user.
pub async fn sign_up(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignUpBody>) -> Response {
    match auth_svc::sign_up(&state.pool, &body.email, &body.password, body.full_name.as_deref()).await {
        Ok(user) => start_session(&state, jar, user, StatusCode::CREATED).await,
        Err(e) => auth_error_response(e),
    }
}

/// `POST /api/auth/sign-in` — verify credentials, set session cookie, return the user.
pub async fn sign_in(State(state): State<AppState>, jar: CookieJar, Json(body): Json<SignInBody>) -> Response {
    match auth_svc::sign_in(&state.pool, &body.email, &body.password).await {
        Ok(user) => start_session(&state, jar, user, StatusCode::OK).await,
        Err(e) => auth_error_response(e),
    }
}

/// `GET /api/auth/me` — return current user.
pub async fn me(auth: AuthUser) -> Json<session::SessionUser> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    if let Err(e) = session::delete_session(&state.pool, &auth.token).await {
        tracing::warn!(error = %e, user_id = %auth.user.id, "session delete failed");
    }

    let jar = CookieJar::new().add(cleared_session_cookie(state.session));
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
