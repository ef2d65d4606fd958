use async_trait::async_trait;

use idbridge_domain::{GroupId, Principal, RoleId, UserId, UserLifecycleTransition};

use super::errors::IdpResult;
use super::groups::{ExternalGroup, ExternalGroupWrite};
use super::roles::{ExternalPermission, ExternalRole, ExternalRoleWrite};
use super::users::{ExternalUser, ExternalUserCreate, ExternalUserUpdate};

/// Port to the remote identity provider that owns every identity record.
///
/// Implementations return provider-shaped objects and report failures as
/// [`super::IdpError`]; they never interpret business rules.
#[async_trait]
pub trait IdentityProviderClient: Send + Sync {
    /// Verifies that the provider is reachable and the credentials are accepted.
    async fn check_connection(&self) -> IdpResult<()>;

    /// Creates a user, optionally activating it in the same call.
    async fn create_user(
        &self,
        payload: ExternalUserCreate,
        activate: bool,
    ) -> IdpResult<ExternalUser>;

    /// Reads one user.
    async fn get_user(&self, user_id: &UserId) -> IdpResult<ExternalUser>;

    /// Lists all users.
    async fn list_users(&self) -> IdpResult<Vec<ExternalUser>>;

    /// Applies a partial profile update.
    async fn update_user(
        &self,
        user_id: &UserId,
        payload: ExternalUserUpdate,
    ) -> IdpResult<ExternalUser>;

    /// Requests a lifecycle transition.
    async fn transition_user(
        &self,
        user_id: &UserId,
        transition: UserLifecycleTransition,
    ) -> IdpResult<()>;

    /// Deletes a deprovisioned user.
    async fn delete_user(&self, user_id: &UserId) -> IdpResult<()>;

    /// Creates a group.
    async fn create_group(&self, payload: ExternalGroupWrite) -> IdpResult<ExternalGroup>;

    /// Reads one group.
    async fn get_group(&self, group_id: &GroupId) -> IdpResult<ExternalGroup>;

    /// Lists all groups.
    async fn list_groups(&self) -> IdpResult<Vec<ExternalGroup>>;

    /// Replaces a group profile.
    async fn replace_group(
        &self,
        group_id: &GroupId,
        payload: ExternalGroupWrite,
    ) -> IdpResult<ExternalGroup>;

    /// Deletes a group.
    async fn delete_group(&self, group_id: &GroupId) -> IdpResult<()>;

    /// Lists users that belong to a group.
    async fn list_group_members(&self, group_id: &GroupId) -> IdpResult<Vec<ExternalUser>>;

    /// Adds a user to a group.
    async fn add_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()>;

    /// Removes a user from a group.
    async fn remove_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()>;

    /// Creates a custom role.
    async fn create_role(&self, payload: ExternalRoleWrite) -> IdpResult<ExternalRole>;

    /// Reads one role.
    async fn get_role(&self, role_id: &RoleId) -> IdpResult<ExternalRole>;

    /// Lists all roles.
    async fn list_roles(&self) -> IdpResult<Vec<ExternalRole>>;

    /// Updates a custom role.
    async fn replace_role(
        &self,
        role_id: &RoleId,
        payload: ExternalRoleWrite,
    ) -> IdpResult<ExternalRole>;

    /// Deletes a custom role.
    async fn delete_role(&self, role_id: &RoleId) -> IdpResult<()>;

    /// Lists permissions granted by a role.
    async fn list_role_permissions(&self, role_id: &RoleId) -> IdpResult<Vec<ExternalPermission>>;

    /// Assigns a role to a principal.
    async fn assign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()>;

    /// Removes a role from a principal.
    async fn unassign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()>;

    /// Lists roles assigned to a principal.
    async fn list_assigned_roles(&self, principal: &Principal) -> IdpResult<Vec<ExternalRole>>;
}
