//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use http::{HeaderMap, Request, StatusCode};
use tower::ServiceExt;

use anteroom_core::config::AppConfig;
use anteroom_core::config::admin::AdminConfig;
use anteroom_core::config::auth::AuthConfig;
use anteroom_core::config::logging::LoggingConfig;
use anteroom_core::config::queue::QueueConfig;
use anteroom_core::config::server::ServerConfig;
use anteroom_core::config::store::StoreConfig;
use anteroom_core::config::upstream::UpstreamConfig;
use anteroom_core::error::AppError;
use anteroom_core::result::AppResult;
use anteroom_core::traits::counters::CounterBackend;
use anteroom_store::memory::MemoryCounterBackend;
use anteroom_store::{QueueCounters, StoreManager};

/// Shared token secret for all test apps.
pub const SECRET: &str = "integration-secret";

/// `admin:sesame` for the Basic Auth header.
pub const ADMIN_AUTH: &str = "Basic YWRtaW46c2VzYW1l";

/// A counter backend whose every operation fails, for exercising store
/// outage handling.
#[derive(Debug)]
pub struct UnreachableCounterBackend;

#[async_trait]
impl CounterBackend for UnreachableCounterBackend {
    async fn get(&self, _key: &str) -> AppResult<Option<i64>> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn incr_by(&self, _key: &str, _amount: i64) -> AppResult<i64> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn expire(&self, _key: &str, _ttl: Duration) -> AppResult<bool> {
        Err(AppError::store_unavailable("connection refused"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(false)
    }
}

/// Test application context: the router under test, direct access to
/// the counters, and a throwaway origin server behind the gate.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Queue counters, for arranging state directly.
    pub counters: QueueCounters,
    /// Application config.
    pub config: AppConfig,
}

/// A buffered response for assertions.
pub struct TestResponse {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Response body as text.
    pub body: String,
}

impl TestResponse {
    /// The value of the `queue` cookie set on this response, if any.
    pub fn queue_cookie(&self) -> Option<String> {
        self.headers
            .get_all(http::header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .find(|v| v.starts_with("queue="))
            .map(|v| {
                v.trim_start_matches("queue=")
                    .split(';')
                    .next()
                    .unwrap_or_default()
                    .to_string()
            })
    }
}

impl TestApp {
    /// Create a test application with automatic advancement disabled.
    pub async fn new() -> Self {
        Self::with_queue_config(QueueConfig {
            automatic_interval_seconds: 0,
            ..QueueConfig::default()
        })
        .await
    }

    /// Create a test application with the given queue tuning.
    pub async fn with_queue_config(queue: QueueConfig) -> Self {
        Self::build(queue, Arc::new(MemoryCounterBackend::new())).await
    }

    /// Create a test application whose counter store rejects every call.
    pub async fn with_failing_store() -> Self {
        Self::build(
            QueueConfig {
                automatic_interval_seconds: 0,
                ..QueueConfig::default()
            },
            Arc::new(UnreachableCounterBackend),
        )
        .await
    }

    async fn build(queue: QueueConfig, backend: Arc<dyn CounterBackend>) -> Self {
        // Throwaway origin: answers every path so the gate has
        // something to proxy to.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind origin listener");
        let origin_addr = listener.local_addr().expect("Failed to read origin addr");
        let origin: Router = Router::new().fallback(|| async { "origin content" });
        tokio::spawn(async move {
            axum::serve(listener, origin)
                .await
                .expect("Origin server failed");
        });

        let config = AppConfig {
            server: ServerConfig::default(),
            upstream: UpstreamConfig {
                base_url: format!("http://{origin_addr}"),
                timeout_seconds: 5,
                allowed_paths: vec!["/robots.txt".to_string()],
                asset_cache_max_age_seconds: 21600,
            },
            store: StoreConfig::default(),
            queue,
            admin: AdminConfig {
                path: Some("/_queue".to_string()),
                password: Some("sesame".to_string()),
            },
            auth: AuthConfig {
                token_secret: SECRET.to_string(),
            },
            logging: LoggingConfig::default(),
        };
        config.validate().expect("Test config must be valid");

        let store = StoreManager::from_backend(backend);
        let state = anteroom_api::build_state(config.clone(), store).expect("Failed to build state");
        let counters = state.counters.clone();
        let router = anteroom_api::build_app(state);

        Self {
            router,
            counters,
            config,
        }
    }

    /// Send a request through the router.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).to_string(),
        }
    }
}

/// Issue a valid queue token for the given position.
pub fn token_for_position(position: i64) -> String {
    anteroom_token::TokenIssuer::new(SECRET)
        .issue(position, chrono::Utc::now() + chrono::Duration::hours(24))
        .expect("Failed to issue test token")
}
