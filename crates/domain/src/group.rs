use std::str::FromStr;

use idbridge_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{GroupId, ProfileMap, Timestamp};

/// Origin of a group, which decides whether it can be changed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupType {
    /// Provider built-in group such as `Everyone`.
    BuiltIn,
    /// Group imported from an application integration.
    AppManaged,
    /// Group owned by the identity provider directory.
    IdpManaged,
}

impl GroupType {
    /// Returns the wire value used by the identity provider.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BuiltIn => "BUILT_IN",
            Self::AppManaged => "APP_GROUP",
            Self::IdpManaged => "OKTA_GROUP",
        }
    }
}

impl FromStr for GroupType {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "BUILT_IN" => Ok(Self::BuiltIn),
            "APP_GROUP" => Ok(Self::AppManaged),
            "OKTA_GROUP" => Ok(Self::IdpManaged),
            _ => Err(AppError::Validation(format!(
                "unknown group type '{value}'"
            ))),
        }
    }
}

/// Named collection of users. Membership is never cached here.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    /// Provider-assigned identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Group origin, `None` when missing or not recognized.
    pub group_type: Option<GroupType>,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
    /// Provider-defined attributes beyond name and description.
    pub profile: ProfileMap,
}

impl Group {
    /// Only directory-owned groups accept updates, deletes through this system.
    #[must_use]
    pub fn is_mutable(&self) -> bool {
        self.group_type == Some(GroupType::IdpManaged)
    }
}
