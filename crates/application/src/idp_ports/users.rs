use idbridge_domain::{ProfileMap, Timestamp};
use serde::{Deserialize, Serialize};

/// User object as returned by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUser {
    /// Provider identifier.
    pub id: Option<String>,
    /// Provider status string.
    pub status: Option<String>,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Activation timestamp.
    pub activated: Option<Timestamp>,
    /// Most recent sign in.
    pub last_login: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
    /// Profile section; absent on some list endpoints.
    pub profile: Option<ExternalUserProfile>,
}

/// User profile section.
///
/// Keys other than the four well-known ones are carried through `additional`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserProfile {
    /// Primary email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Sign-in name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,
    /// Given name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Family name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Provider-defined attributes.
    #[serde(flatten)]
    pub additional: ProfileMap,
}

impl ExternalUserProfile {
    /// Wire names of the well-known profile keys.
    pub const WELL_KNOWN_KEYS: [&'static str; 4] = ["email", "login", "firstName", "lastName"];
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserCreate {
    /// Initial profile.
    pub profile: ExternalUserProfile,
    /// Initial credentials, omitted when no password was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<ExternalCredentials>,
}

/// Credentials section of a create payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalCredentials {
    /// Password credential.
    pub password: ExternalPassword,
}

/// Password credential. The value never appears in debug output.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ExternalPassword {
    /// Plain password handed to the provider.
    pub value: String,
}

impl std::fmt::Debug for ExternalPassword {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ExternalPassword")
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Partial profile update. Only populated keys are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalUserUpdate {
    /// Changed profile keys.
    pub profile: ExternalUserProfile,
}
