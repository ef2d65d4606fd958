//! Facade over the identity provider used by the transport layer.

mod assignments;
mod groups;
mod roles;
mod users;


use std::sync::Arc;

use idbridge_core::{AppError, AppResult};
use idbridge_domain::{Group, GroupId, Role, RoleId, User, UserId};

use crate::assignment_orchestrator::AssignmentOrchestrator;
use crate::idp_ports::IdentityProviderClient;
use crate::remote_errors::RemoteCall;
use crate::representation_adapter::{normalize_group, normalize_role, normalize_user};

/// Application service for users, groups, roles and their relations.
///
/// Holds no state of its own; every call goes to the identity provider.
#[derive(Clone)]
pub struct IdentityDirectoryService {
    identity_provider: Arc<dyn IdentityProviderClient>,
    assignments: AssignmentOrchestrator,
}

impl IdentityDirectoryService {
    /// Creates a service over an identity provider client.
    #[must_use]
    pub fn new(identity_provider: Arc<dyn IdentityProviderClient>) -> Self {
        Self {
            assignments: AssignmentOrchestrator::new(identity_provider.clone()),
            identity_provider,
        }
    }

    /// Verifies that the identity provider is reachable with the configured credentials.
    pub async fn check_connection(&self) -> AppResult<()> {
        self.identity_provider
            .check_connection()
            .await
            .map_err(|error| RemoteCall::new("reach", "organization").failed(error))
    }

    async fn read_user(&self, user_id: &UserId) -> AppResult<User> {
        let external = self
            .identity_provider
            .get_user(user_id)
            .await
            .map_err(|error| RemoteCall::new("get", format!("user '{user_id}'")).failed(error))?;
        normalize_user(external)
    }

    async fn read_group(&self, group_id: &GroupId) -> AppResult<Group> {
        let external = self
            .identity_provider
            .get_group(group_id)
            .await
            .map_err(|error| RemoteCall::new("get", format!("group '{group_id}'")).failed(error))?;
        normalize_group(external)
    }

    async fn read_role(&self, role_id: &RoleId) -> AppResult<Role> {
        let external = self
            .identity_provider
            .get_role(role_id)
            .await
            .map_err(|error| RemoteCall::new("get", format!("role '{role_id}'")).failed(error))?;
        normalize_role(external)
    }
}

fn ensure_group_mutable(group: &Group) -> AppResult<()> {
    if group.is_mutable() {
        return Ok(());
    }

    let origin = group
        .group_type
        .map(|group_type| group_type.as_str())
        .unwrap_or("UNKNOWN");
    Err(AppError::ImmutableEntity(format!(
        "group '{}' is of type {origin} and is not managed by the identity provider",
        group.id
    )))
}

/// Guards role writes by id alone. The standard catalog is the only check, as
/// the reported role type is unknown until the role has been read.
fn ensure_role_mutable(role_id: &RoleId) -> AppResult<()> {
    if role_id.is_standard() {
        return Err(AppError::ImmutableEntity(format!(
            "role '{role_id}' is a system role and cannot be changed"
        )));
    }

    Ok(())
}
