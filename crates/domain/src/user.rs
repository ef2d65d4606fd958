//! User entity and lifecycle rules.
//!
//! Status is owned by the identity provider. The transition table below
//! describes which transitions the provider accepts; this system only ever
//! requests a transition, it never sets a status itself.

use std::str::FromStr;

use idbridge_core::AppError;
use serde::{Deserialize, Serialize};

use crate::{ProfileMap, Timestamp, UserId};

/// Lifecycle status reported by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Created but not yet activated.
    Provisioned,
    /// Able to sign in.
    Active,
    /// Password reset in progress.
    Recovery,
    /// Password must be changed at next sign in.
    PasswordExpired,
    /// Locked after too many failed attempts.
    LockedOut,
    /// Temporarily blocked by an administrator.
    Suspended,
    /// Deactivated; the only state from which a user can be deleted.
    Deprovisioned,
}

impl UserStatus {
    /// Returns the wire value used by the identity provider.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Provisioned => "PROVISIONED",
            Self::Active => "ACTIVE",
            Self::Recovery => "RECOVERY",
            Self::PasswordExpired => "PASSWORD_EXPIRED",
            Self::LockedOut => "LOCKED_OUT",
            Self::Suspended => "SUSPENDED",
            Self::Deprovisioned => "DEPROVISIONED",
        }
    }
}

impl FromStr for UserStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PROVISIONED" => Ok(Self::Provisioned),
            "ACTIVE" => Ok(Self::Active),
            "RECOVERY" => Ok(Self::Recovery),
            "PASSWORD_EXPIRED" => Ok(Self::PasswordExpired),
            "LOCKED_OUT" => Ok(Self::LockedOut),
            "SUSPENDED" => Ok(Self::Suspended),
            "DEPROVISIONED" => Ok(Self::Deprovisioned),
            _ => Err(AppError::Validation(format!(
                "unknown user status '{value}'"
            ))),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Provisioned => "Provisioned",
            Self::Active => "Active",
            Self::Recovery => "Recovery",
            Self::PasswordExpired => "PasswordExpired",
            Self::LockedOut => "LockedOut",
            Self::Suspended => "Suspended",
            Self::Deprovisioned => "Deprovisioned",
        };
        formatter.write_str(label)
    }
}

/// Lifecycle transition a caller may request for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserLifecycleTransition {
    /// Provisioned or Recovery to Active.
    Activate,
    /// Any non-deprovisioned status to Deprovisioned.
    Deactivate,
    /// Active to Suspended.
    Suspend,
    /// Suspended to Active.
    Unsuspend,
}

impl UserLifecycleTransition {
    /// Returns the lifecycle operation name used in remote paths and messages.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
            Self::Suspend => "suspend",
            Self::Unsuspend => "unsuspend",
        }
    }

    /// Statuses from which the identity provider accepts this transition.
    #[must_use]
    pub fn allowed_from(&self) -> &'static [UserStatus] {
        match self {
            Self::Activate => &[UserStatus::Provisioned, UserStatus::Recovery],
            Self::Deactivate => &[
                UserStatus::Provisioned,
                UserStatus::Active,
                UserStatus::Recovery,
                UserStatus::PasswordExpired,
                UserStatus::LockedOut,
                UserStatus::Suspended,
            ],
            Self::Suspend => &[UserStatus::Active],
            Self::Unsuspend => &[UserStatus::Suspended],
        }
    }

    /// Status the user reaches once the transition is applied.
    #[must_use]
    pub fn target(&self) -> UserStatus {
        match self {
            Self::Activate | Self::Unsuspend => UserStatus::Active,
            Self::Deactivate => UserStatus::Deprovisioned,
            Self::Suspend => UserStatus::Suspended,
        }
    }

    /// Returns whether the transition may start from `status`.
    #[must_use]
    pub fn permits(&self, status: UserStatus) -> bool {
        self.allowed_from().contains(&status)
    }
}

/// Identity principal as reported by the identity provider.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Provider-assigned identifier, immutable once created.
    pub id: UserId,
    /// Primary email address.
    pub email: String,
    /// Sign-in name.
    pub login: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Lifecycle status, `None` when missing or not recognized.
    pub status: Option<UserStatus>,
    /// Creation timestamp.
    pub created: Option<Timestamp>,
    /// Activation timestamp.
    pub activated: Option<Timestamp>,
    /// Most recent sign in.
    pub last_login: Option<Timestamp>,
    /// Most recent modification.
    pub last_updated: Option<Timestamp>,
    /// Provider-defined attributes beyond the well-known profile fields.
    pub profile: ProfileMap,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{UserLifecycleTransition, UserStatus};

    #[test]
    fn status_roundtrip_wire_value() {
        let status = UserStatus::PasswordExpired;
        let restored = UserStatus::from_str(status.as_str());
        assert_eq!(restored.unwrap_or(UserStatus::Active), status);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(UserStatus::from_str("STAGED").is_err());
    }

    #[test]
    fn suspend_only_from_active() {
        assert!(UserLifecycleTransition::Suspend.permits(UserStatus::Active));
        assert!(!UserLifecycleTransition::Suspend.permits(UserStatus::Provisioned));
        assert_eq!(
            UserLifecycleTransition::Suspend.target(),
            UserStatus::Suspended
        );
    }

    #[test]
    fn deprovisioned_is_terminal_for_transitions_except_delete() {
        for transition in [
            UserLifecycleTransition::Activate,
            UserLifecycleTransition::Deactivate,
            UserLifecycleTransition::Suspend,
            UserLifecycleTransition::Unsuspend,
        ] {
            assert!(!transition.permits(UserStatus::Deprovisioned));
        }
    }

    #[test]
    fn unsuspend_returns_to_active() {
        assert!(UserLifecycleTransition::Unsuspend.permits(UserStatus::Suspended));
        assert_eq!(
            UserLifecycleTransition::Unsuspend.target(),
            UserStatus::Active
        );
    }
}
