//! The queue gate: every request not claimed by another route lands
//! here and is either proxied to the origin or shown the queue page.

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use anteroom_core::error::AppError;
use anteroom_core::result::AppResult;

use crate::cookie;
use crate::error::ApiError;
use crate::middleware::logging::AdmissionOutcome;
use crate::state::AppState;
use crate::views;

/// Largest request body the gate will buffer for forwarding.
const MAX_FORWARD_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Fallback handler running the admission flow.
pub async fn gate(
    State(state): State<AppState>,
    jar: CookieJar,
    request: Request,
) -> Result<Response<Body>, ApiError> {
    let path = request.uri().path().to_string();

    // Allow-listed assets bypass the queue entirely.
    if state
        .config
        .upstream
        .allowed_paths
        .iter()
        .any(|allowed| allowed == &path)
    {
        let mut response = forward(&state, request).await?;
        if response.status() == StatusCode::OK
            && !response.headers().contains_key(header::CACHE_CONTROL)
        {
            let max_age = state.config.upstream.asset_cache_max_age_seconds;
            if let Ok(value) = format!("public, max-age={max_age}").parse() {
                response.headers_mut().insert(header::CACHE_CONTROL, value);
            }
        }
        return Ok(response);
    }

    let raw_token = cookie::queue_token(&jar);
    let decision = state.controller.decide(raw_token.as_deref()).await?;

    debug!(
        admitted = decision.admitted,
        position = decision.position,
        rank = ?decision.rank,
        "admission decision"
    );

    let mut response = if decision.admitted {
        forward(&state, request).await?
    } else {
        let rank = decision.rank.unwrap_or(0);
        let html = views::queue_page(rank, state.config.queue.refresh_interval_seconds);
        queue_page_response(html)?
    };

    if let Some(token) = decision.new_token {
        let value = cookie::set_cookie(&token, state.config.queue.cookie_expiry_seconds)
            .parse()
            .map_err(|e| AppError::internal(format!("Invalid Set-Cookie value: {e}")))?;
        response.headers_mut().append(header::SET_COOKIE, value);
    }

    response.extensions_mut().insert(AdmissionOutcome {
        admitted: decision.admitted,
    });

    Ok(response)
}

/// Buffer the request body and forward the request to the origin.
async fn forward(state: &AppState, request: Request) -> AppResult<Response<Body>> {
    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(|e| AppError::validation(format!("Failed to read request body: {e}")))?;

    state
        .upstream
        .forward(parts.method, &parts.uri, parts.headers, bytes)
        .await
}

/// The waiting page, served with 401 so automated clients can tell a
/// queue hold from protected content.
fn queue_page_response(html: String) -> AppResult<Response<Body>> {
    Ok((
        StatusCode::UNAUTHORIZED,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
        .into_response())
}
