use std::any::Any;
use std::time::Duration;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use idbridge_core::AppError;
use tracing::error;

use crate::error::ApiError;

/// Aborts the handler once the write deadline elapses. Dropping the handler
/// future cancels any in-flight identity provider call.
pub async fn enforce_deadline(
    State(deadline): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    match tokio::time::timeout(deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError(AppError::Canceled(format!(
            "{method} {path} did not complete within {}ms",
            deadline.as_millis()
        )))
        .into_response(),
    }
}

pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = detail, "handler panicked");

    ApiError(AppError::Internal(detail.to_owned())).into_response()
}

pub async fn route_not_found() -> ApiError {
    ApiError(AppError::NotFound("route not found".to_owned()))
}

pub async fn method_not_allowed() -> Response {
    let mut response =
        ApiError(AppError::Validation("method not allowed".to_owned())).into_response();
    *response.status_mut() = axum::http::StatusCode::METHOD_NOT_ALLOWED;
    response
}
