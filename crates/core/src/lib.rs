//! Shared primitives for all Rust crates in idbridge.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across idbridge crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for NonEmptyString {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

impl std::fmt::Display for NonEmptyString {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Common application error categories.
///
/// Every failure produced below the HTTP layer is reduced to one of these
/// kinds before it leaves the application services.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed or missing input, detected before any remote call.
    #[error("validation error: {0}")]
    Validation(String),

    /// Mutation attempted on a system role or a group not managed by the identity provider.
    #[error("immutable entity: {0}")]
    ImmutableEntity(String),

    /// The identity provider rejected the submitted payload.
    #[error("rejected by identity provider: {0}")]
    RemoteValidation(String),

    /// The identity provider could not be reached or failed server-side.
    #[error("identity provider unavailable: {0}")]
    RemoteUnavailable(String),

    /// The identity provider reports the entity as absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// A multi-step operation completed its first step but failed a later one.
    #[error("partial failure at step '{step}', entity left {entity_state}")]
    PartialFailure {
        /// Name of the step that failed.
        step: String,
        /// Entity state left behind by the completed steps.
        entity_state: String,
    },

    /// The identity provider returned a representation without an identity field.
    #[error("unexpected identity provider response: {0}")]
    Adapter(String),

    /// The caller canceled the request or its deadline elapsed.
    #[error("canceled: {0}")]
    Canceled(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns true when the error is attributable to the API caller.
    #[must_use]
    pub fn is_client_fault(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::ImmutableEntity(_)
                | Self::RemoteValidation(_)
                | Self::NotFound(_)
        )
    }
}
