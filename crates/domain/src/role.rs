use serde::{Deserialize, Serialize};

use crate::{RoleId, Timestamp};

/// Role types the identity provider ships with. These are addressed by a fixed
/// id and can never be changed or removed.
pub const STANDARD_ROLE_IDS: &[&str] = &[
    "SUPER_ADMIN",
    "ORG_ADMIN",
    "APP_ADMIN",
    "USER_ADMIN",
    "HELP_DESK_ADMIN",
    "READ_ONLY_ADMIN",
    "MOBILE_ADMIN",
    "API_ACCESS_MANAGEMENT_ADMIN",
    "REPORT_ADMIN",
    "GROUP_MEMBERSHIP_ADMIN",
];

impl RoleId {
    /// Returns whether this id names a standard (system) role.
    #[must_use]
    pub fn is_standard(&self) -> bool {
        STANDARD_ROLE_IDS.contains(&self.as_str())
    }
}

/// Role ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    /// Shipped by the identity provider; read-only.
    System,
    /// Defined by an administrator.
    Custom,
}

impl RoleType {
    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "SYSTEM",
            Self::Custom => "CUSTOM",
        }
    }
}

/// Named bundle of permissions assignable to users and groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Provider-assigned identifier.
    pub id: RoleId,
    /// Display label.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Role ownership.
    pub role_type: RoleType,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
}
