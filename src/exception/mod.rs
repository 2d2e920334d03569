use axum::response::Response;
use std::error::Error;

pub mod http;

/// The ExceptionFilter trait
///
/// Filters turn errors raised while serving a request into a response.
/// They must always return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch an error and return a response
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}
