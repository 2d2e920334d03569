use crate::error::CatalogError;
use crate::exception::ExceptionFilter;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::error::Error;
use strum_macros::Display;

/// Machine-readable error code carried in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    InternalServerError,
}

impl From<ErrorCode> for StatusCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Global exception filter translating [`CatalogError`] into HTTP responses.
///
/// Client errors keep their message. Server faults are logged and answered
/// with a generic message so internals never leak to callers.
#[derive(Default)]
pub struct HttpExceptionFilter;

impl HttpExceptionFilter {
    fn classify(error: &(dyn Error + Send + Sync + 'static)) -> (ErrorCode, String) {
        match error.downcast_ref::<CatalogError>() {
            Some(CatalogError::Validation(message)) => (ErrorCode::BadRequest, message.clone()),
            Some(CatalogError::NotFound(message)) => (ErrorCode::NotFound, message.clone()),
            _ => (
                ErrorCode::InternalServerError,
                "Internal Server Error".to_string(),
            ),
        }
    }
}

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        let (code, message) = Self::classify(&*error);
        let status = StatusCode::from(code);

        if status.is_server_error() {
            tracing::error!(error = %error, "request failed");
        } else {
            tracing::debug!(error = %error, %status, "request rejected");
        }

        (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "error": code.to_string(),
                "message": message,
                "timestamp": chrono::Utc::now().to_rfc3339(),
            })),
        )
            .into_response()
    }
}
