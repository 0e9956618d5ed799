//! Integration tests for the visitor-facing gate.

use anteroom_api::middleware::logging::AdmissionOutcome;
use axum::body::Body;
use http::{Request, StatusCode};
use tower::ServiceExt;

use crate::helpers::{self, TestApp};

#[tokio::test]
async fn test_fresh_visitor_gets_queue_page_and_cookie() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/", &[]).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.contains("visitors ahead of you"));
    // First visitor on an empty queue: nobody ahead.
    assert!(response.body.contains(">0<"));

    let cookie = response.queue_cookie().expect("queue cookie must be set");
    assert!(!cookie.is_empty());
    let raw_header = response
        .headers
        .get(http::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(raw_header.contains("HttpOnly"));
    assert!(raw_header.contains("SameSite=None"));
}

#[tokio::test]
async fn test_returning_visitor_keeps_position_and_gets_no_new_cookie() {
    let app = TestApp::new().await;

    let first = app.request("GET", "/", &[]).await;
    let cookie = first.queue_cookie().unwrap();

    let second = app
        .request("GET", "/", &[("cookie", &format!("queue={cookie}"))])
        .await;

    assert_eq!(second.status, StatusCode::UNAUTHORIZED);
    assert_eq!(second.queue_cookie(), None);
    // Re-presenting the token never grows the queue.
    assert_eq!(app.counters.length().await.unwrap(), 1);
}

#[tokio::test]
async fn test_admitted_visitor_is_proxied_to_origin() {
    let app = TestApp::new().await;
    app.counters.advance_cursor(10).await.unwrap();

    let token = helpers::token_for_position(5);
    let response = app
        .request("GET", "/shop", &[("cookie", &format!("queue={token}"))])
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "origin content");
    assert_eq!(response.queue_cookie(), None);
}

#[tokio::test]
async fn test_queue_page_shows_visitors_ahead() {
    let app = TestApp::new().await;
    app.counters.advance_cursor(10).await.unwrap();

    let token = helpers::token_for_position(12);
    let response = app
        .request("GET", "/", &[("cookie", &format!("queue={token}"))])
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.contains(">1<"));
    assert!(response.body.contains("content=\"5\""));
}

#[tokio::test]
async fn test_tampered_cookie_requeues_visitor() {
    let app = TestApp::new().await;
    app.counters.advance_cursor(10).await.unwrap();

    let mut token = helpers::token_for_position(5);
    token.pop();
    let response = app
        .request("GET", "/", &[("cookie", &format!("queue={token}"))])
        .await;

    // The forged credential is discarded; the visitor joins at the
    // tail (position 11, behind cursor 10) and is denied.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.queue_cookie().is_some());
    assert_eq!(app.counters.length().await.unwrap(), 11);
}

#[tokio::test]
async fn test_allow_listed_path_bypasses_queue() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/robots.txt", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "origin content");
    // No queue state involved: no cookie, default asset caching applied.
    assert_eq!(response.queue_cookie(), None);
    assert_eq!(
        response
            .headers
            .get(http::header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok()),
        Some("public, max-age=21600")
    );
    assert_eq!(app.counters.length().await.unwrap(), 0);
}

#[tokio::test]
async fn test_store_outage_fails_the_request_without_a_decision() {
    let app = TestApp::with_failing_store().await;

    let response = app.request("GET", "/", &[]).await;

    // The outage is fatal for the request: no admit, no deny, no
    // credential issued.
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.queue_cookie(), None);
    assert!(!response.body.contains("origin content"));
    assert!(!response.body.contains("visitors ahead of you"));
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["error"], "STORE_UNAVAILABLE");
}

#[tokio::test]
async fn test_store_outage_fails_returning_visitor_too() {
    let app = TestApp::with_failing_store().await;

    let token = helpers::token_for_position(5);
    let response = app
        .request("GET", "/", &[("cookie", &format!("queue={token}"))])
        .await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.queue_cookie(), None);
}

#[tokio::test]
async fn test_gate_response_records_admission_outcome() {
    let app = TestApp::new().await;

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let outcome = response
        .extensions()
        .get::<AdmissionOutcome>()
        .copied()
        .expect("gate responses carry the admission outcome");
    assert!(!outcome.admitted);

    app.counters.advance_cursor(1).await.unwrap();
    let token = helpers::token_for_position(1);
    let request = Request::builder()
        .uri("/")
        .header("cookie", format!("queue={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    let outcome = response
        .extensions()
        .get::<AdmissionOutcome>()
        .copied()
        .expect("gate responses carry the admission outcome");
    assert!(outcome.admitted);
}

#[tokio::test]
async fn test_healthz_reports_store_status() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/healthz", &[]).await;

    assert_eq!(response.status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "connected");
}
