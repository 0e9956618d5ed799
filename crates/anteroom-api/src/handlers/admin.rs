//! Admin interface handlers: backlog display, manual batch release,
//! and clearing the operator's own cookie.

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use anteroom_core::error::AppError;

use crate::cookie;
use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// Query parameters for the permit endpoint.
#[derive(Debug, Deserialize)]
pub struct PermitParams {
    /// How many visitors to let in. Absent or unparsable falls back to 1.
    pub amt: Option<String>,
}

/// GET <admin path>
pub async fn status(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let backlog = state.admin.backlog().await?;
    let admin_path = admin_path(&state);
    Ok(Html(views::admin_page(backlog, &admin_path)))
}

/// POST <admin path>/permit?amt=n
pub async fn permit(
    State(state): State<AppState>,
    Query(params): Query<PermitParams>,
) -> Result<Response, ApiError> {
    let quantity = params
        .amt
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1);

    state.admin.force_admit(quantity).await?;
    Ok(redirect(&admin_path(&state)))
}

/// GET|POST <admin path>/clear_self
///
/// Discards only the caller's own queue cookie; the shared counters are
/// untouched, so other visitors are unaffected.
pub async fn clear_self(State(state): State<AppState>) -> Result<Response, ApiError> {
    let mut response = redirect(&admin_path(&state));
    let value = cookie::clear_cookie()
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid Set-Cookie value: {e}")))?;
    response.headers_mut().insert(header::SET_COOKIE, value);
    Ok(response)
}

fn admin_path(state: &AppState) -> String {
    state
        .config
        .admin
        .path
        .clone()
        .unwrap_or_else(|| "/".to_string())
}

fn redirect(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
