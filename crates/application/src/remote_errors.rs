use idbridge_core::AppError;

use crate::idp_ports::IdpError;

/// Describes a remote call so failures can be reported in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RemoteCall {
    action: &'static str,
    target: String,
    missing: Option<String>,
}

impl RemoteCall {
    pub(crate) fn new(action: &'static str, target: impl Into<String>) -> Self {
        Self {
            action,
            target: target.into(),
            missing: None,
        }
    }

    /// Names what is absent when the provider answers 404, if that differs
    /// from the call target.
    pub(crate) fn missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = Some(missing.into());
        self
    }

    /// Translates a client failure into an application error.
    ///
    /// Provider error bodies are not forwarded; they stay in the client logs.
    pub(crate) fn failed(&self, error: IdpError) -> AppError {
        let Self {
            action,
            target,
            missing,
        } = self;
        match error {
            IdpError::Status { status, .. } => match status {
                400 | 409 | 422 => AppError::RemoteValidation(format!(
                    "identity provider rejected the request to {action} {target}"
                )),
                404 => AppError::NotFound(format!(
                    "{} not found",
                    missing.as_deref().unwrap_or(target)
                )),
                _ => AppError::RemoteUnavailable(format!(
                    "identity provider failed to {action} {target} (status {status})"
                )),
            },
            IdpError::Transport(_) => AppError::RemoteUnavailable(format!(
                "identity provider unreachable while trying to {action} {target}"
            )),
            IdpError::TimedOut => AppError::Canceled(format!(
                "request to {action} {target} did not finish before the deadline"
            )),
            IdpError::MissingRelation(_) => AppError::NotFound(format!("{target} not found")),
            IdpError::Decode(_) => AppError::Adapter(format!(
                "identity provider returned an unreadable response when asked to {action} {target}"
            )),
        }
    }
}
