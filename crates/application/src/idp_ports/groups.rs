use idbridge_domain::{ProfileMap, Timestamp};
use serde::{Deserialize, Serialize};

/// Group object as returned by the identity provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalGroup {
    /// Provider identifier.
    pub id: Option<String>,
    /// Provider group type string.
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
    /// Profile section.
    pub profile: Option<ExternalGroupProfile>,
}

/// Group profile section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalGroupProfile {
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Provider-defined attributes.
    #[serde(flatten)]
    pub additional: ProfileMap,
}

impl ExternalGroupProfile {
    /// Wire names of the well-known profile keys.
    pub const WELL_KNOWN_KEYS: [&'static str; 2] = ["name", "description"];
}

/// Payload for creating or replacing a group profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExternalGroupWrite {
    /// Profile to store.
    pub profile: ExternalGroupProfile,
}
