use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use idbridge_core::AppError;
use tracing::{error, warn};

mod types;

pub use types::{ErrorDetails, ErrorResponse};

/// HTTP API error wrapper around core application errors.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(value: AppError) -> Self {
        Self(value)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(format!(
            "invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self(AppError::Validation(format!(
            "invalid path parameter: {}",
            rejection.body_text()
        )))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);

        if status.is_server_error() {
            if matches!(self.0, AppError::Internal(_)) {
                error!(error = %self.0, "request failed");
            } else {
                warn!(error = %self.0, %status, "request failed");
            }
        }

        let payload = match self.0 {
            AppError::PartialFailure { step, entity_state } => ErrorResponse::new(
                format!("operation stopped at step '{step}', entity left {entity_state}"),
                Some(ErrorDetails { step, entity_state }),
            ),
            AppError::Adapter(_) => ErrorResponse::new(
                "identity provider returned an unexpected response".to_owned(),
                None,
            ),
            AppError::Internal(_) => {
                ErrorResponse::new("internal server error".to_owned(), None)
            }
            AppError::Validation(message)
            | AppError::ImmutableEntity(message)
            | AppError::RemoteValidation(message)
            | AppError::RemoteUnavailable(message)
            | AppError::NotFound(message)
            | AppError::Canceled(message) => ErrorResponse::new(message, None),
        };

        (status, Json(payload)).into_response()
    }
}

fn status_for(error: &AppError) -> StatusCode {
    match error {
        AppError::Validation(_) | AppError::RemoteValidation(_) => StatusCode::BAD_REQUEST,
        AppError::ImmutableEntity(_) => StatusCode::CONFLICT,
        AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::RemoteUnavailable(_) | AppError::PartialFailure { .. } | AppError::Adapter(_) => {
            StatusCode::BAD_GATEWAY
        }
        AppError::Canceled(_) => StatusCode::GATEWAY_TIMEOUT,
        AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Standard API result type.
pub type ApiResult<T> = Result<T, ApiError>;
