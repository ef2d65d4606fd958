//! Scripted identity provider used by the service tests.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use idbridge_domain::{GroupId, Principal, RoleId, UserId, UserLifecycleTransition, UserStatus};

use crate::idp_ports::{
    ExternalGroup, ExternalGroupProfile, ExternalGroupWrite, ExternalPermission, ExternalRole,
    ExternalRoleWrite, ExternalUser, ExternalUserCreate, ExternalUserProfile, ExternalUserUpdate,
    IdentityProviderClient, IdpError, IdpResult,
};

#[derive(Default)]
pub(crate) struct FakeIdentityProvider {
    calls: Mutex<Vec<&'static str>>,
    failures: Mutex<HashMap<&'static str, IdpError>>,
    created_status: Option<&'static str>,
    users: Mutex<Vec<ExternalUser>>,
    groups: Mutex<Vec<ExternalGroup>>,
    roles: Mutex<Vec<ExternalRole>>,
    permissions: Mutex<Vec<ExternalPermission>>,
    memberships: Mutex<Vec<(String, String)>>,
    assignments: Mutex<Vec<(String, String)>>,
    created_users: Mutex<Vec<(ExternalUserCreate, bool)>>,
}

impl FakeIdentityProvider {
    pub(crate) fn with_user(mut self, id: &str, status: &str) -> Self {
        self.users.get_mut().push(external_user(id, status));
        self
    }

    pub(crate) fn with_group(mut self, id: &str, group_type: &str) -> Self {
        self.groups.get_mut().push(ExternalGroup {
            id: Some(id.to_owned()),
            group_type: Some(group_type.to_owned()),
            profile: Some(ExternalGroupProfile {
                name: Some(format!("group {id}")),
                ..ExternalGroupProfile::default()
            }),
            ..ExternalGroup::default()
        });
        self
    }

    pub(crate) fn with_role(mut self, id: &str, role_type: &str) -> Self {
        self.roles.get_mut().push(ExternalRole {
            id: Some(id.to_owned()),
            label: Some(format!("role {id}")),
            role_type: Some(role_type.to_owned()),
            ..ExternalRole::default()
        });
        self
    }

    pub(crate) fn with_permission(mut self, label: &str) -> Self {
        self.permissions.get_mut().push(ExternalPermission {
            label: Some(label.to_owned()),
            ..ExternalPermission::default()
        });
        self
    }

    pub(crate) fn with_member(mut self, group_id: &str, user_id: &str) -> Self {
        self.memberships
            .get_mut()
            .push((group_id.to_owned(), user_id.to_owned()));
        self
    }

    pub(crate) fn with_created_status(mut self, status: &'static str) -> Self {
        self.created_status = Some(status);
        self
    }

    pub(crate) fn failing(mut self, operation: &'static str, error: IdpError) -> Self {
        self.failures.get_mut().insert(operation, error);
        self
    }

    pub(crate) async fn recover(&self, operation: &'static str) {
        self.failures.lock().await.remove(operation);
    }

    pub(crate) async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }

    pub(crate) async fn created_users(&self) -> Vec<(ExternalUserCreate, bool)> {
        self.created_users.lock().await.clone()
    }

    pub(crate) async fn user_status(&self, id: &str) -> Option<String> {
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.id.as_deref() == Some(id))
            .and_then(|user| user.status.clone())
    }

    async fn enter(&self, operation: &'static str) -> IdpResult<()> {
        self.calls.lock().await.push(operation);
        match self.failures.lock().await.get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub(crate) fn external_user(id: &str, status: &str) -> ExternalUser {
    ExternalUser {
        id: Some(id.to_owned()),
        status: Some(status.to_owned()),
        profile: Some(ExternalUserProfile {
            email: Some(format!("{id}@example.com")),
            login: Some(format!("{id}@example.com")),
            first_name: Some("Test".to_owned()),
            last_name: Some("User".to_owned()),
            ..ExternalUserProfile::default()
        }),
        ..ExternalUser::default()
    }
}

fn not_found() -> IdpError {
    IdpError::status(404, "Not found")
}

#[async_trait]
impl IdentityProviderClient for FakeIdentityProvider {
    async fn check_connection(&self) -> IdpResult<()> {
        self.enter("check_connection").await
    }

    async fn create_user(
        &self,
        payload: ExternalUserCreate,
        activate: bool,
    ) -> IdpResult<ExternalUser> {
        self.enter("create_user").await?;
        let status = self
            .created_status
            .unwrap_or(if activate { "ACTIVE" } else { "PROVISIONED" });
        let user = ExternalUser {
            id: Some("00unew".to_owned()),
            status: Some(status.to_owned()),
            profile: Some(payload.profile.clone()),
            ..ExternalUser::default()
        };
        self.created_users.lock().await.push((payload, activate));
        self.users.lock().await.push(user.clone());
        Ok(user)
    }

    async fn get_user(&self, user_id: &UserId) -> IdpResult<ExternalUser> {
        self.enter("get_user").await?;
        self.users
            .lock()
            .await
            .iter()
            .find(|user| user.id.as_deref() == Some(user_id.as_str()))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn list_users(&self) -> IdpResult<Vec<ExternalUser>> {
        self.enter("list_users").await?;
        Ok(self.users.lock().await.clone())
    }

    async fn update_user(
        &self,
        user_id: &UserId,
        payload: ExternalUserUpdate,
    ) -> IdpResult<ExternalUser> {
        self.enter("update_user").await?;
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id.as_deref() == Some(user_id.as_str()))
            .ok_or_else(not_found)?;
        let profile = user.profile.get_or_insert_with(ExternalUserProfile::default);
        if payload.profile.first_name.is_some() {
            profile.first_name = payload.profile.first_name;
        }
        if payload.profile.last_name.is_some() {
            profile.last_name = payload.profile.last_name;
        }
        profile.additional.extend(payload.profile.additional);
        Ok(user.clone())
    }

    async fn transition_user(
        &self,
        user_id: &UserId,
        transition: UserLifecycleTransition,
    ) -> IdpResult<()> {
        self.enter("transition_user").await?;
        let mut users = self.users.lock().await;
        let user = users
            .iter_mut()
            .find(|user| user.id.as_deref() == Some(user_id.as_str()))
            .ok_or_else(not_found)?;
        let current = user
            .status
            .as_deref()
            .and_then(|status| status.parse::<UserStatus>().ok());
        match current {
            Some(status) if transition.permits(status) => {
                user.status = Some(transition.target().as_str().to_owned());
                Ok(())
            }
            _ => Err(IdpError::status(
                400,
                "This operation is not allowed in the user's current status.",
            )),
        }
    }

    async fn delete_user(&self, user_id: &UserId) -> IdpResult<()> {
        self.enter("delete_user").await?;
        let mut users = self.users.lock().await;
        let before = users.len();
        users.retain(|user| user.id.as_deref() != Some(user_id.as_str()));
        if users.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn create_group(&self, payload: ExternalGroupWrite) -> IdpResult<ExternalGroup> {
        self.enter("create_group").await?;
        let group = ExternalGroup {
            id: Some("00gnew".to_owned()),
            group_type: Some("OKTA_GROUP".to_owned()),
            profile: Some(payload.profile),
            ..ExternalGroup::default()
        };
        self.groups.lock().await.push(group.clone());
        Ok(group)
    }

    async fn get_group(&self, group_id: &GroupId) -> IdpResult<ExternalGroup> {
        self.enter("get_group").await?;
        self.groups
            .lock()
            .await
            .iter()
            .find(|group| group.id.as_deref() == Some(group_id.as_str()))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn list_groups(&self) -> IdpResult<Vec<ExternalGroup>> {
        self.enter("list_groups").await?;
        Ok(self.groups.lock().await.clone())
    }

    async fn replace_group(
        &self,
        group_id: &GroupId,
        payload: ExternalGroupWrite,
    ) -> IdpResult<ExternalGroup> {
        self.enter("replace_group").await?;
        let mut groups = self.groups.lock().await;
        let group = groups
            .iter_mut()
            .find(|group| group.id.as_deref() == Some(group_id.as_str()))
            .ok_or_else(not_found)?;
        group.profile = Some(payload.profile);
        Ok(group.clone())
    }

    async fn delete_group(&self, group_id: &GroupId) -> IdpResult<()> {
        self.enter("delete_group").await?;
        let mut groups = self.groups.lock().await;
        let before = groups.len();
        groups.retain(|group| group.id.as_deref() != Some(group_id.as_str()));
        if groups.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_group_members(&self, group_id: &GroupId) -> IdpResult<Vec<ExternalUser>> {
        self.enter("list_group_members").await?;
        let memberships = self.memberships.lock().await;
        Ok(self
            .users
            .lock()
            .await
            .iter()
            .filter(|user| {
                memberships.iter().any(|(group, member)| {
                    group == group_id.as_str() && Some(member.as_str()) == user.id.as_deref()
                })
            })
            .cloned()
            .collect())
    }

    async fn add_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()> {
        self.enter("add_group_member").await?;
        let pair = (group_id.to_string(), user_id.to_string());
        let mut memberships = self.memberships.lock().await;
        if memberships.contains(&pair) {
            return Err(IdpError::status(409, "already a member"));
        }
        memberships.push(pair);
        Ok(())
    }

    async fn remove_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()> {
        self.enter("remove_group_member").await?;
        let pair = (group_id.to_string(), user_id.to_string());
        let mut memberships = self.memberships.lock().await;
        let before = memberships.len();
        memberships.retain(|existing| existing != &pair);
        if memberships.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn create_role(&self, payload: ExternalRoleWrite) -> IdpResult<ExternalRole> {
        self.enter("create_role").await?;
        let role = ExternalRole {
            id: Some("cr0new".to_owned()),
            label: payload.label,
            description: payload.description,
            role_type: Some("CUSTOM".to_owned()),
            ..ExternalRole::default()
        };
        self.roles.lock().await.push(role.clone());
        Ok(role)
    }

    async fn get_role(&self, role_id: &RoleId) -> IdpResult<ExternalRole> {
        self.enter("get_role").await?;
        self.roles
            .lock()
            .await
            .iter()
            .find(|role| role.id.as_deref() == Some(role_id.as_str()))
            .cloned()
            .ok_or_else(not_found)
    }

    async fn list_roles(&self) -> IdpResult<Vec<ExternalRole>> {
        self.enter("list_roles").await?;
        Ok(self.roles.lock().await.clone())
    }

    async fn replace_role(
        &self,
        role_id: &RoleId,
        payload: ExternalRoleWrite,
    ) -> IdpResult<ExternalRole> {
        self.enter("replace_role").await?;
        let mut roles = self.roles.lock().await;
        let role = roles
            .iter_mut()
            .find(|role| role.id.as_deref() == Some(role_id.as_str()))
            .ok_or_else(not_found)?;
        if payload.label.is_some() {
            role.label = payload.label;
        }
        if payload.description.is_some() {
            role.description = payload.description;
        }
        Ok(role.clone())
    }

    async fn delete_role(&self, role_id: &RoleId) -> IdpResult<()> {
        self.enter("delete_role").await?;
        let mut roles = self.roles.lock().await;
        let before = roles.len();
        roles.retain(|role| role.id.as_deref() != Some(role_id.as_str()));
        if roles.len() == before {
            return Err(not_found());
        }
        Ok(())
    }

    async fn list_role_permissions(&self, role_id: &RoleId) -> IdpResult<Vec<ExternalPermission>> {
        self.enter("list_role_permissions").await?;
        if !self
            .roles
            .lock()
            .await
            .iter()
            .any(|role| role.id.as_deref() == Some(role_id.as_str()))
        {
            return Err(not_found());
        }
        Ok(self.permissions.lock().await.clone())
    }

    async fn assign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()> {
        self.enter("assign_role").await?;
        let pair = (principal.to_string(), role_id.to_string());
        let mut assignments = self.assignments.lock().await;
        if assignments.contains(&pair) {
            return Err(IdpError::status(409, "already assigned"));
        }
        assignments.push(pair);
        Ok(())
    }

    async fn unassign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()> {
        self.enter("unassign_role").await?;
        let pair = (principal.to_string(), role_id.to_string());
        let mut assignments = self.assignments.lock().await;
        let before = assignments.len();
        assignments.retain(|existing| existing != &pair);
        if assignments.len() == before {
            return Err(IdpError::MissingRelation(format!("{role_id} on {principal}")));
        }
        Ok(())
    }

    async fn list_assigned_roles(&self, principal: &Principal) -> IdpResult<Vec<ExternalRole>> {
        self.enter("list_assigned_roles").await?;
        let key = principal.to_string();
        let assignments = self.assignments.lock().await;
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .filter(|role| {
                assignments.iter().any(|(assigned_to, role_id)| {
                    assigned_to == &key && role.id.as_deref() == Some(role_id.as_str())
                })
            })
            .cloned()
            .collect())
    }
}
