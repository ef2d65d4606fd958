use idbridge_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Atomic capability granted through a role. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    /// Resource the capability applies to, e.g. `okta.users`.
    pub resource: String,
    /// Action allowed on the resource, e.g. `read`.
    pub action: String,
    /// Optional narrowing of the resource.
    pub scope: Option<String>,
}

impl Permission {
    /// Parses a dotted provider label such as `okta.users.read`.
    ///
    /// The segment after the last dot is the action, everything before it the
    /// resource.
    pub fn from_label(label: &str) -> AppResult<Self> {
        let label = label.trim();
        let Some((resource, action)) = label.rsplit_once('.') else {
            return Err(AppError::Validation(format!(
                "permission '{label}' must have the form '<resource>.<action>'"
            )));
        };

        if resource.is_empty() || action.is_empty() {
            return Err(AppError::Validation(format!(
                "permission '{label}' must have the form '<resource>.<action>'"
            )));
        }

        Ok(Self {
            resource: resource.to_owned(),
            action: action.to_owned(),
            scope: None,
        })
    }

    /// Returns the dotted provider label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}.{}", self.resource, self.action)
    }
}
