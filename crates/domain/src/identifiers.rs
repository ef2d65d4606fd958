use idbridge_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Validates an identity provider identifier before it is placed into a remote request path.
fn validate_identifier(kind: &str, value: String) -> AppResult<NonEmptyString> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{kind} id is required")));
    }

    if trimmed
        .chars()
        .any(|character| character.is_whitespace() || character.is_control())
        || trimmed.contains(['/', '?', '#'])
    {
        return Err(AppError::Validation(format!(
            "{kind} id '{trimmed}' contains characters that are not allowed"
        )));
    }

    NonEmptyString::new(trimmed)
}

macro_rules! remote_identifier {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(NonEmptyString);

        impl $name {
            /// Parses and validates an identifier supplied by a caller or the identity provider.
            pub fn new(value: impl Into<String>) -> AppResult<Self> {
                validate_identifier($kind, value.into()).map(Self)
            }

            /// Returns the identifier as sent to the identity provider.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = AppError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0.into()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(self.as_str())
            }
        }
    };
}

remote_identifier!(
    /// Opaque user identifier assigned by the identity provider.
    UserId,
    "user"
);

remote_identifier!(
    /// Opaque group identifier assigned by the identity provider.
    GroupId,
    "group"
);

remote_identifier!(
    /// Role identifier: either a custom role id or a standard role type.
    RoleId,
    "role"
);
