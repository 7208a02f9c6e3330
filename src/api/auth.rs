use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::AppState;
use crate::error::SiteError;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects every request whose `X-API-Key` does not match the configured
/// secret. Runs before routing, so unknown paths are rejected too.
/// Preflight requests are answered directly with an empty 200.
pub async fn require_api_key(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    let presented = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    match presented {
        Some(key) if key == &*state.api_key => next.run(request).await,
        _ => {
            tracing::warn!(path = %request.uri().path(), "Rejected request without a valid API key");
            SiteError::Unauthorized.into_response()
        }
    }
}
