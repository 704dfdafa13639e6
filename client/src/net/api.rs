//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Table operations
//! report a short message string that the dashboard logs; auth calls surface
//! the server's `{"error": ...}` text so the form can show it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Document, NewDocument, NewProject, Organization, Project, User};
#[cfg(feature = "hydrate")]
use super::types::{ApiErrorBody, SignInRequest, SignUpRequest};

#[cfg(any(test, feature = "hydrate"))]
const ORGANIZATIONS_ENDPOINT: &str = "/api/organizations";

#[cfg(any(test, feature = "hydrate"))]
fn projects_endpoint(org_id: &str) -> String {
    format!("/api/organizations/{org_id}/projects")
}

#[cfg(any(test, feature = "hydrate"))]
fn documents_endpoint(project_id: &str) -> String {
    format!("/api/projects/{project_id}/documents")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

/// Pick the message to show for a failed sign-in/sign-up.
#[cfg(any(test, feature = "hydrate"))]
fn auth_failure_message(status: u16, server_error: Option<String>) -> String {
    match server_error {
        Some(msg) if !msg.trim().is_empty() && status < 500 => msg,
        _ if status == 401 => "Invalid email or password.".to_owned(),
        _ => format!("Authentication failed ({status})."),
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, action: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B, action: &str) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(action, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn post_auth<B: serde::Serialize>(url: &str, body: &B) -> Result<User, String> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        let status = resp.status();
        let server_error = resp.json::<ApiErrorBody>().await.ok().map(|b| b.error);
        return Err(auth_failure_message(status, server_error));
    }
    resp.json::<User>().await.map_err(|e| e.to_string())
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on any error, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email and password via `POST /api/auth/sign-in`.
///
/// # Errors
///
/// Returns a user-facing message if the credentials are rejected or the
/// request fails.
pub async fn sign_in(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        post_auth("/api/auth/sign-in", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Register a new account via `POST /api/auth/sign-up`.
///
/// # Errors
///
/// Returns a user-facing message if registration is rejected or the request
/// fails.
pub async fn sign_up(email: &str, password: &str, full_name: Option<String>) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SignUpRequest { email: email.to_owned(), password: password.to_owned(), full_name };
        post_auth("/api/auth/sign-up", &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, full_name);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

// =============================================================================
// TABLES
// =============================================================================

/// List organizations visible to the current user, ordered by name.
///
/// # Errors
///
/// Returns an error string if the request fails or returns a non-OK status.
pub async fn list_organizations() -> Result<Vec<Organization>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(ORGANIZATIONS_ENDPOINT, "list organizations").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Insert an organization with the given name.
///
/// # Errors
///
/// Returns an error string if the request fails or returns a non-OK status.
pub async fn create_organization(name: &str) -> Result<Organization, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "name": name });
        post_json(ORGANIZATIONS_ENDPOINT, &body, "create organization").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err("not available on server".to_owned())
    }
}

/// List projects of one organization, ordered by name.
///
/// # Errors
///
/// Returns an error string if the request fails or returns a non-OK status.
pub async fn list_projects(org_id: &str) -> Result<Vec<Project>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&projects_endpoint(org_id), "list projects").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = org_id;
        Err("not available on server".to_owned())
    }
}

/// Insert a project scoped to an organization.
///
/// # Errors
///
/// Returns an error string if the request fails or returns a non-OK status.
pub async fn create_project(org_id: &str, project: &NewProject) -> Result<Project, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&projects_endpoint(org_id), project, "create project").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (org_id, project);
        Err("not available on server".to_owned())
    }
}

/// Insert a document into a project. The server records the caller as creator.
///
/// # Errors
///
/// Returns an error string if the request fails or returns a non-OK status.
pub async fn create_document(project_id: &str, document: &NewDocument) -> Result<Document, String> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&documents_endpoint(project_id), document, "create document").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, document);
        Err("not available on server".to_owned())
    }
}
