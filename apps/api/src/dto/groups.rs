use idbridge_domain::{ProfileMap, Timestamp};
use serde::{Deserialize, Serialize};

mod conversions;

/// Incoming payload for group creation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateGroupRequest {
    pub name: String,
    pub description: String,
    pub profile: ProfileMap,
}

/// Incoming payload for a partial group update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateGroupRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub profile: Option<ProfileMap>,
}

/// API representation of a group.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: &'static str,
    pub created: Option<Timestamp>,
    pub last_updated: Option<Timestamp>,
    #[serde(skip_serializing_if = "ProfileMap::is_empty")]
    pub profile: ProfileMap,
}
