use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// JSON error body: `{"code", "error", "message"}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
    pub code: Option<u16>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message, code: None }
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = Some(code);
        self
    }

    pub fn db(e: sea_orm::DbErr) -> Self {
        error!(err = %e, "database error");
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "DB Error", Some(e.to_string()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let code = e.code();
        if e.is_client_error() {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(e.to_string())).with_code(code)
        } else {
            error!(err = %e, code, "service failure");
            JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(e.to_string())).with_code(code)
        }
    }
}

/// Code for request bodies that do not parse into the expected shape.
pub const MALFORMED_BODY: u16 = 1000;

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        JsonApiError::new(rejection.status(), "Invalid Request Body", Some(rejection.body_text())).with_code(MALFORMED_BODY)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "code": self.code,
            "error": self.error,
            "message": self.message,
        });
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("migration failed: {0}")]
    Migration(String),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::errors::ValidationError;

    #[test]
    fn validation_maps_to_bad_request() {
        let e: JsonApiError = ServiceError::from(ValidationError::MenuGroupNotFound(3)).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);
        assert_eq!(e.code, Some(1004));
        assert_eq!(e.message.as_deref(), Some("menu group 3 not found"));
    }

    #[test]
    fn repository_failure_maps_to_internal_error() {
        let e: JsonApiError = ServiceError::Repository("pool timed out".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
