use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers;

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request should build")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let app = api_routes(test_helpers::test_app_state());
    let resp = app.oneshot(empty_request("GET", "/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn me_without_cookie_is_unauthorized() {
    let app = api_routes(test_helpers::test_app_state());
    let resp = app.oneshot(empty_request("GET", "/api/auth/me")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn table_routes_require_session() {
    let org = uuid::Uuid::new_v4();
    let cases = [
        empty_request("GET", "/api/organizations"),
        json_request("POST", "/api/organizations", &serde_json::json!({ "name": "Acme" })),
        empty_request("GET", &format!("/api/organizations/{org}/projects")),
        json_request(
            "POST",
            &format!("/api/organizations/{org}/projects"),
            &serde_json::json!({ "name": "Site", "description": "v1" }),
        ),
        empty_request("GET", &format!("/api/organizations/{org}/members")),
        empty_request("GET", &format!("/api/projects/{org}/documents")),
        json_request("POST", &format!("/api/projects/{org}/documents"), &serde_json::json!({ "name": "Doc" })),
        empty_request("POST", "/api/auth/logout"),
    ];

    for req in cases {
        let label = format!("{} {}", req.method(), req.uri());
        let app = api_routes(test_helpers::test_app_state());
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{label}");
    }
}

#[tokio::test]
async fn sign_up_with_invalid_email_is_bad_request() {
    let app = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({ "email": "not-an-email", "password": "secret123" });
    let resp = app.oneshot(json_request("POST", "/api/auth/sign-up", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["error"], "invalid email");
}

#[tokio::test]
async fn sign_up_with_short_password_is_bad_request() {
    let app = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({ "email": "ada@example.com", "password": "123" });
    let resp = app.oneshot(json_request("POST", "/api/auth/sign-up", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sign_in_with_malformed_email_is_unauthorized() {
    let app = api_routes(test_helpers::test_app_state());
    let body = serde_json::json!({ "email": "nobody", "password": "secret123" });
    let resp = app.oneshot(json_request("POST", "/api/auth/sign-in", &body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = api_routes(test_helpers::test_app_state());
    let resp = app.oneshot(empty_request("GET", "/api/nope")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
