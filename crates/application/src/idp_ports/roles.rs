use idbridge_domain::Timestamp;
use serde::{Deserialize, Serialize};

/// Role object as returned by the identity provider.
///
/// Role assignment listings return the same shape, with the assignment id in
/// `id` and the custom role id in `role`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalRole {
    /// Provider identifier.
    pub id: Option<String>,
    /// Custom role id, present on assignment listings.
    pub role: Option<String>,
    /// Display label.
    pub label: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Provider role type string.
    #[serde(rename = "type")]
    pub role_type: Option<String>,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
}

/// Payload for creating or updating a custom role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExternalRoleWrite {
    /// Display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Permission labels granted by the role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

/// Permission object as returned by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalPermission {
    /// Dotted permission label.
    pub label: Option<String>,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
}
