//! Integration tests for the admin interface.

use http::StatusCode;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_admin_requires_basic_auth() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/_queue", &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let challenge = response
        .headers
        .get(http::header::WWW_AUTHENTICATE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(challenge.starts_with("Basic"));
}

#[tokio::test]
async fn test_admin_rejects_wrong_credentials() {
    let app = TestApp::new().await;

    // admin:wrong
    let response = app
        .request(
            "GET",
            "/_queue",
            &[("authorization", "Basic YWRtaW46d3Jvbmc=")],
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_status_shows_backlog() {
    let app = TestApp::new().await;
    app.counters.join(7).await.unwrap();
    app.counters.advance_cursor(3).await.unwrap();

    let response = app
        .request("GET", "/_queue", &[("authorization", helpers::ADMIN_AUTH)])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains(">4<"));
    assert!(response.body.contains("visitors waiting"));
}

#[tokio::test]
async fn test_permit_advances_cursor_and_redirects() {
    let app = TestApp::new().await;
    app.counters.advance_cursor(10).await.unwrap();

    let response = app
        .request(
            "POST",
            "/_queue/permit?amt=3",
            &[("authorization", helpers::ADMIN_AUTH)],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(
        response
            .headers
            .get(http::header::LOCATION)
            .and_then(|v| v.to_str().ok()),
        Some("/_queue")
    );
    assert_eq!(app.counters.cursor().await.unwrap(), 13);

    // A visitor released by the manual advancement now passes.
    let token = helpers::token_for_position(12);
    let visitor = app
        .request("GET", "/", &[("cookie", &format!("queue={token}"))])
        .await;
    assert_eq!(visitor.status, StatusCode::OK);
}

#[tokio::test]
async fn test_permit_defaults_to_one_on_invalid_amount() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/_queue/permit?amt=bogus",
            &[("authorization", helpers::ADMIN_AUTH)],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(app.counters.cursor().await.unwrap(), 1);
}

#[tokio::test]
async fn test_permit_without_amount_lets_in_one() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/_queue/permit",
            &[("authorization", helpers::ADMIN_AUTH)],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    assert_eq!(app.counters.cursor().await.unwrap(), 1);
}

#[tokio::test]
async fn test_clear_self_expires_cookie_without_touching_counters() {
    let app = TestApp::new().await;
    app.counters.join(5).await.unwrap();
    app.counters.advance_cursor(2).await.unwrap();

    let response = app
        .request(
            "POST",
            "/_queue/clear_self",
            &[("authorization", helpers::ADMIN_AUTH)],
        )
        .await;

    assert_eq!(response.status, StatusCode::FOUND);
    let set_cookie = response
        .headers
        .get(http::header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(set_cookie.starts_with("queue=;"));
    assert!(set_cookie.contains("Max-Age=0"));

    // Only the caller's credential is affected.
    assert_eq!(app.counters.length().await.unwrap(), 5);
    assert_eq!(app.counters.cursor().await.unwrap(), 2);
}
