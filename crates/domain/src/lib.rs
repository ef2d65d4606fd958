//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod group;
mod identifiers;
mod permission;
mod principal;
mod profile;
mod role;
mod user;

pub use group::{Group, GroupType};
pub use identifiers::{GroupId, RoleId, UserId};
pub use permission::Permission;
pub use principal::{Principal, PrincipalKind};
pub use profile::{ProfileMap, ProfileValue};
pub use role::{Role, RoleType, STANDARD_ROLE_IDS};
pub use user::{User, UserLifecycleTransition, UserStatus};

/// Timestamp as reported by the identity provider, offset preserved.
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
