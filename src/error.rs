use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Revision conflict: {0}")]
    Conflict(String),
    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Already exists: {0}")]
    Duplicate(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SiteError>;

impl From<base64::DecodeError> for SiteError {
    fn from(err: base64::DecodeError) -> Self {
        SiteError::Decode(err.to_string())
    }
}

impl From<std::string::FromUtf8Error> for SiteError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        SiteError::Decode(err.to_string())
    }
}

impl From<JsonRejection> for SiteError {
    fn from(rejection: JsonRejection) -> Self {
        SiteError::MalformedInput(rejection.body_text())
    }
}

impl SiteError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SiteError::Unauthorized => StatusCode::UNAUTHORIZED,
            SiteError::NotFound(_) => StatusCode::NOT_FOUND,
            SiteError::Conflict(_) => StatusCode::CONFLICT,
            SiteError::MalformedInput(_) | SiteError::Duplicate(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Every failure leaves the API as `{ "error": message }`.
impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            SiteError::Unauthorized => "Unauthorized".to_string(),
            SiteError::NotFound(what) if what.is_empty() => "Not found".to_string(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_error_kinds_to_statuses() {
        assert_eq!(SiteError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            SiteError::NotFound("games/index.html".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            SiteError::Conflict("stale".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            SiteError::MalformedInput("bad url".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            SiteError::Upstream {
                status: 502,
                message: "bad gateway".into()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
