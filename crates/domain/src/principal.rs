use serde::{Deserialize, Serialize};

use crate::{GroupId, UserId};

/// Kind of principal a role can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    /// A single user.
    User,
    /// Every member of a group.
    Group,
}

impl PrincipalKind {
    /// Returns a stable lowercase name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Group => "group",
        }
    }
}

/// A user or a group, anything a role can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Principal {
    /// User principal.
    User(UserId),
    /// Group principal.
    Group(GroupId),
}

impl Principal {
    /// Returns the principal kind.
    #[must_use]
    pub fn kind(&self) -> PrincipalKind {
        match self {
            Self::User(_) => PrincipalKind::User,
            Self::Group(_) => PrincipalKind::Group,
        }
    }

    /// Returns the principal identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::User(user_id) => user_id.as_str(),
            Self::Group(group_id) => group_id.as_str(),
        }
    }
}

impl std::fmt::Display for Principal {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} '{}'", self.kind().as_str(), self.id())
    }
}
