use thiserror::Error;

/// Result type returned by identity provider clients.
pub type IdpResult<T> = Result<T, IdpError>;

/// Failure reported by an identity provider client.
///
/// Clients only describe what happened on the wire. Mapping to application
/// error kinds happens in the services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdpError {
    /// The provider answered with a non-success status.
    #[error("identity provider returned status {status}: {summary}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Provider error summary, if any.
        summary: String,
    },

    /// The request never produced a response.
    #[error("identity provider transport failure: {0}")]
    Transport(String),

    /// The request exceeded its deadline.
    #[error("identity provider request timed out")]
    TimedOut,

    /// Both ends exist but the relation to remove does not.
    #[error("identity provider has no such relation: {0}")]
    MissingRelation(String),

    /// The response body could not be decoded.
    #[error("identity provider response could not be decoded: {0}")]
    Decode(String),
}

impl IdpError {
    /// Builds a status error.
    #[must_use]
    pub fn status(status: u16, summary: impl Into<String>) -> Self {
        Self::Status {
            status,
            summary: summary.into(),
        }
    }

    /// Returns the HTTP status when the provider answered at all.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::TimedOut | Self::MissingRelation(_) | Self::Decode(_) => {
                None
            }
        }
    }
}
