use idbridge_domain::Timestamp;
use serde::{Deserialize, Serialize};

mod conversions;

/// Incoming payload for custom role creation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateRoleRequest {
    pub name: String,
    pub description: String,
    pub permissions: Vec<String>,
}

/// Incoming payload for a partial role update.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateRoleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub permissions: Option<Vec<String>>,
}

/// API representation of a role.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub role_type: &'static str,
    pub created: Option<Timestamp>,
    pub last_updated: Option<Timestamp>,
}

/// API representation of a permission granted by a role.
#[derive(Debug, Serialize)]
pub struct PermissionResponse {
    pub resource: String,
    pub action: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
