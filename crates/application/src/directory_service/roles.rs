use idbridge_domain::Permission;

use crate::directory_inputs::{CreateRoleInput, UpdateRoleInput};
use crate::partial_update::{UpdatePlan, plan_role_update};
use crate::representation_adapter::{denormalize_role_create, normalize_permission};

use super::*;

impl IdentityDirectoryService {
    /// Creates a custom role.
    pub async fn create_role(&self, input: CreateRoleInput) -> AppResult<Role> {
        let payload = denormalize_role_create(&input);
        let external = self
            .identity_provider
            .create_role(payload)
            .await
            .map_err(|error| {
                RemoteCall::new("create", format!("role '{}'", input.name)).failed(error)
            })?;
        normalize_role(external)
    }

    /// Returns one role.
    pub async fn get_role(&self, role_id: &str) -> AppResult<Role> {
        let role_id = RoleId::new(role_id)?;
        self.read_role(&role_id).await
    }

    /// Lists all roles.
    pub async fn list_roles(&self) -> AppResult<Vec<Role>> {
        self.identity_provider
            .list_roles()
            .await
            .map_err(|error| RemoteCall::new("list", "roles").failed(error))?
            .into_iter()
            .map(normalize_role)
            .collect()
    }

    /// Applies a partial update to a custom role.
    pub async fn update_role(&self, role_id: &str, input: UpdateRoleInput) -> AppResult<Role> {
        let role_id = RoleId::new(role_id)?;
        ensure_role_mutable(&role_id)?;

        let payload = match plan_role_update(&input) {
            UpdatePlan::NoChanges => return self.read_role(&role_id).await,
            UpdatePlan::Apply(payload) => payload,
        };

        let external = self
            .identity_provider
            .replace_role(&role_id, payload)
            .await
            .map_err(|error| RemoteCall::new("update", format!("role '{role_id}'")).failed(error))?;
        normalize_role(external)
    }

    /// Deletes a custom role.
    pub async fn delete_role(&self, role_id: &str) -> AppResult<()> {
        let role_id = RoleId::new(role_id)?;
        ensure_role_mutable(&role_id)?;

        self.identity_provider
            .delete_role(&role_id)
            .await
            .map_err(|error| RemoteCall::new("delete", format!("role '{role_id}'")).failed(error))
    }

    /// Lists permissions granted by a role.
    pub async fn list_role_permissions(&self, role_id: &str) -> AppResult<Vec<Permission>> {
        let role_id = RoleId::new(role_id)?;

        self.identity_provider
            .list_role_permissions(&role_id)
            .await
            .map_err(|error| {
                RemoteCall::new("list permissions of", format!("role '{role_id}'")).failed(error)
            })?
            .into_iter()
            .map(normalize_permission)
            .collect()
    }
}
