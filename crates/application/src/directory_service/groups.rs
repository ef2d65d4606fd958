use crate::assignment_orchestrator::AssignmentOutcome;
use crate::directory_inputs::{CreateGroupInput, UpdateGroupInput};
use crate::partial_update::{UpdatePlan, plan_group_update};
use crate::representation_adapter::denormalize_group_create;

use super::*;

impl IdentityDirectoryService {
    /// Creates a group owned by the identity provider.
    pub async fn create_group(&self, input: CreateGroupInput) -> AppResult<Group> {
        let payload = denormalize_group_create(&input);
        let external = self
            .identity_provider
            .create_group(payload)
            .await
            .map_err(|error| {
                RemoteCall::new("create", format!("group '{}'", input.name)).failed(error)
            })?;
        normalize_group(external)
    }

    /// Returns one group.
    pub async fn get_group(&self, group_id: &str) -> AppResult<Group> {
        let group_id = GroupId::new(group_id)?;
        self.read_group(&group_id).await
    }

    /// Lists all groups.
    pub async fn list_groups(&self) -> AppResult<Vec<Group>> {
        self.identity_provider
            .list_groups()
            .await
            .map_err(|error| RemoteCall::new("list", "groups").failed(error))?
            .into_iter()
            .map(normalize_group)
            .collect()
    }

    /// Applies a partial update to a provider-managed group.
    pub async fn update_group(&self, group_id: &str, input: UpdateGroupInput) -> AppResult<Group> {
        let group_id = GroupId::new(group_id)?;
        let current = self.read_group(&group_id).await?;
        let mut payload = match plan_group_update(&input) {
            UpdatePlan::NoChanges => return Ok(current),
            UpdatePlan::Apply(payload) => payload,
        };
        ensure_group_mutable(&current)?;

        // The provider replaces the whole profile, so unchanged fields are
        // carried over from the current snapshot.
        payload.profile.name.get_or_insert(current.name);
        payload.profile.description.get_or_insert(current.description);
        for (key, value) in current.profile {
            payload.profile.additional.entry(key).or_insert(value);
        }

        let external = self
            .identity_provider
            .replace_group(&group_id, payload)
            .await
            .map_err(|error| {
                RemoteCall::new("update", format!("group '{group_id}'")).failed(error)
            })?;
        normalize_group(external)
    }

    /// Deletes a provider-managed group.
    pub async fn delete_group(&self, group_id: &str) -> AppResult<()> {
        let group_id = GroupId::new(group_id)?;
        let current = self.read_group(&group_id).await?;
        ensure_group_mutable(&current)?;

        self.identity_provider
            .delete_group(&group_id)
            .await
            .map_err(|error| RemoteCall::new("delete", format!("group '{group_id}'")).failed(error))
    }

    /// Lists members of a group.
    pub async fn list_group_members(&self, group_id: &str) -> AppResult<Vec<User>> {
        self.assignments.list_members(group_id).await
    }

    /// Adds a user to a group.
    pub async fn add_group_member(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> AppResult<AssignmentOutcome> {
        self.assignments.add_member(group_id, user_id).await
    }

    /// Removes a user from a group.
    pub async fn remove_group_member(&self, group_id: &str, user_id: &str) -> AppResult<()> {
        self.assignments.remove_member(group_id, user_id).await
    }
}
