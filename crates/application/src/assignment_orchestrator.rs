//! Role assignment and group membership relations.
//!
//! Relations live only in the identity provider. Assigning an existing pair
//! succeeds with [`AssignmentOutcome::AlreadyAssigned`]; removing a missing
//! pair fails with `NotFound`.

use std::sync::Arc;

use idbridge_core::{AppError, AppResult};
use idbridge_domain::{GroupId, Principal, PrincipalKind, Role, RoleId, User, UserId};

use crate::idp_ports::{IdentityProviderClient, IdpError};
use crate::remote_errors::RemoteCall;
use crate::representation_adapter::{normalize_role, normalize_user};

const CONFLICT: u16 = 409;
const NOT_FOUND: u16 = 404;

/// Result of creating a relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// The relation was created by this call.
    Assigned,
    /// The relation already existed.
    AlreadyAssigned,
}

/// Manages role assignments and group memberships.
#[derive(Clone)]
pub struct AssignmentOrchestrator {
    identity_provider: Arc<dyn IdentityProviderClient>,
}

impl AssignmentOrchestrator {
    /// Creates an orchestrator over an identity provider client.
    #[must_use]
    pub fn new(identity_provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self { identity_provider }
    }

    /// Assigns a role to a user or group.
    pub async fn assign_role(
        &self,
        kind: PrincipalKind,
        principal_id: &str,
        role_id: &str,
    ) -> AppResult<AssignmentOutcome> {
        let principal = parse_principal(kind, principal_id)?;
        let role_id = RoleId::new(role_id)?;

        match self
            .identity_provider
            .assign_role(&principal, &role_id)
            .await
        {
            Ok(()) => Ok(AssignmentOutcome::Assigned),
            Err(error) if error.status_code() == Some(CONFLICT) => {
                Ok(AssignmentOutcome::AlreadyAssigned)
            }
            Err(error) => Err(RemoteCall::new(
                "assign",
                format!("role '{role_id}' to {principal}"),
            )
            .missing(format!("role '{role_id}' or {principal}"))
            .failed(error)),
        }
    }

    /// Removes a role from a user or group.
    pub async fn unassign_role(
        &self,
        kind: PrincipalKind,
        principal_id: &str,
        role_id: &str,
    ) -> AppResult<()> {
        let principal = parse_principal(kind, principal_id)?;
        let role_id = RoleId::new(role_id)?;

        self.identity_provider
            .unassign_role(&principal, &role_id)
            .await
            .map_err(|error| match error {
                IdpError::MissingRelation(_) => AppError::NotFound(format!(
                    "role '{role_id}' is not assigned to {principal}"
                )),
                other => RemoteCall::new("unassign", format!("role '{role_id}' from {principal}"))
                    .missing(principal.to_string())
                    .failed(other),
            })
    }

    /// Lists roles assigned to a user or group.
    pub async fn list_assigned_roles(
        &self,
        kind: PrincipalKind,
        principal_id: &str,
    ) -> AppResult<Vec<Role>> {
        let principal = parse_principal(kind, principal_id)?;

        self.identity_provider
            .list_assigned_roles(&principal)
            .await
            .map_err(|error| RemoteCall::new("list roles of", principal.to_string()).failed(error))?
            .into_iter()
            .map(normalize_role)
            .collect()
    }

    /// Adds a user to a group.
    pub async fn add_member(&self, group_id: &str, user_id: &str) -> AppResult<AssignmentOutcome> {
        let group_id = GroupId::new(group_id)?;
        let user_id = UserId::new(user_id)?;

        match self
            .identity_provider
            .add_group_member(&group_id, &user_id)
            .await
        {
            Ok(()) => Ok(AssignmentOutcome::Assigned),
            Err(error) if error.status_code() == Some(CONFLICT) => {
                Ok(AssignmentOutcome::AlreadyAssigned)
            }
            Err(error) => Err(RemoteCall::new(
                "add",
                format!("user '{user_id}' to group '{group_id}'"),
            )
            .missing(format!("group '{group_id}' or user '{user_id}'"))
            .failed(error)),
        }
    }

    /// Removes a user from a group.
    pub async fn remove_member(&self, group_id: &str, user_id: &str) -> AppResult<()> {
        let group_id = GroupId::new(group_id)?;
        let user_id = UserId::new(user_id)?;

        self.identity_provider
            .remove_group_member(&group_id, &user_id)
            .await
            .map_err(|error| {
                if error.status_code() == Some(NOT_FOUND) {
                    return AppError::NotFound(format!(
                        "user '{user_id}' is not a member of group '{group_id}'"
                    ));
                }
                RemoteCall::new("remove", format!("user '{user_id}' from group '{group_id}'"))
                    .failed(error)
            })
    }

    /// Lists members of a group.
    pub async fn list_members(&self, group_id: &str) -> AppResult<Vec<User>> {
        let group_id = GroupId::new(group_id)?;

        self.identity_provider
            .list_group_members(&group_id)
            .await
            .map_err(|error| {
                RemoteCall::new("list members of", format!("group '{group_id}'")).failed(error)
            })?
            .into_iter()
            .map(normalize_user)
            .collect()
    }
}

fn parse_principal(kind: PrincipalKind, principal_id: &str) -> AppResult<Principal> {
    Ok(match kind {
        PrincipalKind::User => Principal::User(UserId::new(principal_id)?),
        PrincipalKind::Group => Principal::Group(GroupId::new(principal_id)?),
    })
}

#[cfg(test)]
mod tests;
