//! Client for the protected origin.

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, Method, Response, Uri};
use bytes::Bytes;
use std::time::Duration;

use anteroom_core::config::upstream::UpstreamConfig;
use anteroom_core::error::{AppError, ErrorKind};
use anteroom_core::result::AppResult;

/// Forwards admitted requests to the origin serving the protected
/// content.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    /// Shared HTTP client.
    http: reqwest::Client,
    /// Origin base URL, without trailing slash.
    base_url: String,
}

/// Headers that are connection-scoped and must not be forwarded in
/// either direction.
static HOP_BY_HOP: [HeaderName; 8] = [
    HeaderName::from_static("connection"),
    HeaderName::from_static("keep-alive"),
    HeaderName::from_static("proxy-authenticate"),
    HeaderName::from_static("proxy-authorization"),
    HeaderName::from_static("te"),
    HeaderName::from_static("trailer"),
    HeaderName::from_static("transfer-encoding"),
    HeaderName::from_static("upgrade"),
];

impl UpstreamClient {
    /// Create a new client from configuration.
    pub fn new(config: &UpstreamConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Upstream, "Failed to build origin client", e)
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Forward a request to the origin and return its response.
    pub async fn forward(
        &self,
        method: Method,
        uri: &Uri,
        headers: HeaderMap,
        body: Bytes,
    ) -> AppResult<Response<Body>> {
        let path_and_query = uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let url = format!("{}{path_and_query}", self.base_url);

        let mut forward_headers = HeaderMap::new();
        for (name, value) in headers.iter() {
            if name == axum::http::header::HOST || HOP_BY_HOP.contains(name) {
                continue;
            }
            forward_headers.append(name.clone(), value.clone());
        }

        let upstream_response = self
            .http
            .request(method, &url)
            .headers(forward_headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Upstream,
                    format!("Origin request to {url} failed"),
                    e,
                )
            })?;

        let status = upstream_response.status();
        let response_headers = upstream_response.headers().clone();
        let bytes = upstream_response.bytes().await.map_err(|e| {
            AppError::with_source(ErrorKind::Upstream, "Failed to read origin response", e)
        })?;

        let mut response = Response::builder()
            .status(status)
            .body(Body::from(bytes))
            .map_err(|e| AppError::internal(format!("Failed to build proxied response: {e}")))?;
        for (name, value) in response_headers.iter() {
            if HOP_BY_HOP.contains(name) {
                continue;
            }
            response.headers_mut().append(name.clone(), value.clone());
        }

        Ok(response)
    }
}
