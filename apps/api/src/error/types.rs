use serde::Serialize;

/// Failure envelope.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    status: &'static str,
    code: &'static str,
    message: String,
    details: Option<ErrorDetails>,
}

impl ErrorResponse {
    pub(super) fn new(message: String, details: Option<ErrorDetails>) -> Self {
        Self {
            status: "error",
            code: "API_ERROR",
            message,
            details,
        }
    }
}

/// Extra context attached to partial failures.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
    pub step: String,
    pub entity_state: String,
}
