//! Self-contained identity provider used for local runs and router tests.
//!
//! Follows the remote provider's observable rules: statuses move only through
//! permitted lifecycle transitions, deleting an active user deprovisions it
//! first, duplicate role assignments conflict and unknown ids are 404.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use idbridge_application::{
    ExternalGroup, ExternalGroupProfile, ExternalGroupWrite, ExternalPermission, ExternalRole,
    ExternalRoleWrite, ExternalUser, ExternalUserCreate, ExternalUserUpdate,
    IdentityProviderClient, IdpError, IdpResult,
};
use idbridge_domain::{
    GroupId, GroupType, Principal, RoleId, Timestamp, UserId, UserLifecycleTransition, UserStatus,
};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Id of the built-in group every organization starts with.
pub const EVERYONE_GROUP_ID: &str = "00g-everyone";

#[derive(Debug, Clone)]
struct StoredRole {
    role: ExternalRole,
    permissions: Vec<String>,
}

type AssignmentKey = (&'static str, String, String);

/// In-memory identity provider implementation.
#[derive(Debug)]
pub struct InMemoryIdentityProvider {
    users: RwLock<HashMap<String, ExternalUser>>,
    groups: RwLock<HashMap<String, ExternalGroup>>,
    roles: RwLock<HashMap<String, StoredRole>>,
    memberships: RwLock<BTreeSet<(String, String)>>,
    assignments: RwLock<BTreeSet<AssignmentKey>>,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    /// Creates an organization holding only the built-in `Everyone` group.
    #[must_use]
    pub fn new() -> Self {
        let everyone = ExternalGroup {
            id: Some(EVERYONE_GROUP_ID.to_owned()),
            group_type: Some(GroupType::BuiltIn.as_str().to_owned()),
            created: Some(now()),
            last_updated: Some(now()),
            profile: Some(ExternalGroupProfile {
                name: Some("Everyone".to_owned()),
                description: Some("All users in your organization".to_owned()),
                ..ExternalGroupProfile::default()
            }),
        };

        Self {
            users: RwLock::new(HashMap::new()),
            groups: RwLock::new(HashMap::from([(EVERYONE_GROUP_ID.to_owned(), everyone)])),
            roles: RwLock::new(HashMap::new()),
            memberships: RwLock::new(BTreeSet::new()),
            assignments: RwLock::new(BTreeSet::new()),
        }
    }

    async fn principal_exists(&self, principal: &Principal) -> bool {
        match principal {
            Principal::User(user_id) => self.users.read().await.contains_key(user_id.as_str()),
            Principal::Group(group_id) => self.groups.read().await.contains_key(group_id.as_str()),
        }
    }
}

fn now() -> Timestamp {
    chrono::Utc::now().fixed_offset()
}

fn generated_id(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}

fn not_found(entity: &str) -> IdpError {
    IdpError::status(404, format!("E0000007: Not found: Resource not found: {entity}"))
}

fn rejected(summary: &str) -> IdpError {
    IdpError::status(400, format!("E0000001: Api validation failed: {summary}"))
}

fn is_blank(value: Option<&String>) -> bool {
    value.is_none_or(|value| value.trim().is_empty())
}

fn assignment_key(principal: &Principal, role_id: &RoleId) -> AssignmentKey {
    (
        principal.kind().as_str(),
        principal.id().to_owned(),
        role_id.as_str().to_owned(),
    )
}

fn sorted_by_id<T, F>(mut values: Vec<T>, id: F) -> Vec<T>
where
    F: Fn(&T) -> Option<String>,
{
    values.sort_by_key(|value| id(value));
    values
}

#[async_trait]
impl IdentityProviderClient for InMemoryIdentityProvider {
    async fn check_connection(&self) -> IdpResult<()> {
        Ok(())
    }

    async fn create_user(
        &self,
        payload: ExternalUserCreate,
        activate: bool,
    ) -> IdpResult<ExternalUser> {
        let profile = payload.profile;
        if is_blank(profile.login.as_ref()) {
            return Err(rejected("login: The field cannot be left blank"));
        }
        if is_blank(profile.email.as_ref()) {
            return Err(rejected("email: The field cannot be left blank"));
        }

        let mut users = self.users.write().await;
        let login_taken = users.values().any(|user| {
            user.profile.as_ref().and_then(|stored| stored.login.as_ref()) == profile.login.as_ref()
        });
        if login_taken {
            return Err(rejected("login: An object with this field already exists"));
        }

        // Activation without a password leaves the user waiting for the
        // activation email.
        let status = match (activate, payload.credentials.is_some()) {
            (true, true) => UserStatus::Active,
            _ => UserStatus::Provisioned,
        };
        let created = now();
        let user = ExternalUser {
            id: Some(generated_id("00u")),
            status: Some(status.as_str().to_owned()),
            created: Some(created),
            activated: (status == UserStatus::Active).then_some(created),
            last_login: None,
            last_updated: Some(created),
            profile: Some(profile),
        };

        if let Some(id) = user.id.clone() {
            users.insert(id, user.clone());
        }
        Ok(user)
    }

    async fn get_user(&self, user_id: &UserId) -> IdpResult<ExternalUser> {
        self.users
            .read()
            .await
            .get(user_id.as_str())
            .cloned()
            .ok_or_else(|| not_found("user"))
    }

    async fn list_users(&self) -> IdpResult<Vec<ExternalUser>> {
        let users = self.users.read().await.values().cloned().collect();
        Ok(sorted_by_id(users, |user: &ExternalUser| user.id.clone()))
    }

    async fn update_user(
        &self,
        user_id: &UserId,
        payload: ExternalUserUpdate,
    ) -> IdpResult<ExternalUser> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id.as_str())
            .ok_or_else(|| not_found("user"))?;

        let changes = payload.profile;
        let profile = user.profile.get_or_insert_with(Default::default);
        if changes.first_name.is_some() {
            profile.first_name = changes.first_name;
        }
        if changes.last_name.is_some() {
            profile.last_name = changes.last_name;
        }
        profile.additional.extend(changes.additional);
        user.last_updated = Some(now());

        Ok(user.clone())
    }

    async fn transition_user(
        &self,
        user_id: &UserId,
        transition: UserLifecycleTransition,
    ) -> IdpResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id.as_str())
            .ok_or_else(|| not_found("user"))?;

        let current = user
            .status
            .as_deref()
            .and_then(|status| status.parse::<UserStatus>().ok());
        if !current.is_some_and(|status| transition.permits(status)) {
            return Err(IdpError::status(
                403,
                "E0000038: This operation is not allowed in the user's current status.",
            ));
        }

        let target = transition.target();
        user.status = Some(target.as_str().to_owned());
        user.last_updated = Some(now());
        if transition == UserLifecycleTransition::Activate {
            user.activated = user.last_updated;
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: &UserId) -> IdpResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_id.as_str())
            .ok_or_else(|| not_found("user"))?;

        // The first delete of a live user only deprovisions it.
        if user.status.as_deref() != Some(UserStatus::Deprovisioned.as_str()) {
            user.status = Some(UserStatus::Deprovisioned.as_str().to_owned());
            user.last_updated = Some(now());
            return Ok(());
        }

        users.remove(user_id.as_str());
        drop(users);
        self.memberships
            .write()
            .await
            .retain(|(_, member)| member != user_id.as_str());
        self.assignments
            .write()
            .await
            .retain(|(kind, id, _)| !(*kind == "user" && id == user_id.as_str()));
        Ok(())
    }

    async fn create_group(&self, payload: ExternalGroupWrite) -> IdpResult<ExternalGroup> {
        if is_blank(payload.profile.name.as_ref()) {
            return Err(rejected("name: The field cannot be left blank"));
        }

        let created = now();
        let group = ExternalGroup {
            id: Some(generated_id("00g")),
            group_type: Some(GroupType::IdpManaged.as_str().to_owned()),
            created: Some(created),
            last_updated: Some(created),
            profile: Some(payload.profile),
        };

        if let Some(id) = group.id.clone() {
            self.groups.write().await.insert(id, group.clone());
        }
        Ok(group)
    }

    async fn get_group(&self, group_id: &GroupId) -> IdpResult<ExternalGroup> {
        self.groups
            .read()
            .await
            .get(group_id.as_str())
            .cloned()
            .ok_or_else(|| not_found("group"))
    }

    async fn list_groups(&self) -> IdpResult<Vec<ExternalGroup>> {
        let groups = self.groups.read().await.values().cloned().collect();
        Ok(sorted_by_id(groups, |group: &ExternalGroup| group.id.clone()))
    }

    async fn replace_group(
        &self,
        group_id: &GroupId,
        payload: ExternalGroupWrite,
    ) -> IdpResult<ExternalGroup> {
        if is_blank(payload.profile.name.as_ref()) {
            return Err(rejected("name: The field cannot be left blank"));
        }

        let mut groups = self.groups.write().await;
        let group = groups
            .get_mut(group_id.as_str())
            .ok_or_else(|| not_found("group"))?;
        if group.group_type.as_deref() != Some(GroupType::IdpManaged.as_str()) {
            return Err(rejected("group is not managed by the directory"));
        }

        group.profile = Some(payload.profile);
        group.last_updated = Some(now());
        Ok(group.clone())
    }

    async fn delete_group(&self, group_id: &GroupId) -> IdpResult<()> {
        let mut groups = self.groups.write().await;
        let group = groups
            .get(group_id.as_str())
            .ok_or_else(|| not_found("group"))?;
        if group.group_type.as_deref() != Some(GroupType::IdpManaged.as_str()) {
            return Err(rejected("group is not managed by the directory"));
        }

        groups.remove(group_id.as_str());
        drop(groups);
        self.memberships
            .write()
            .await
            .retain(|(group, _)| group != group_id.as_str());
        self.assignments
            .write()
            .await
            .retain(|(kind, id, _)| !(*kind == "group" && id == group_id.as_str()));
        Ok(())
    }

    async fn list_group_members(&self, group_id: &GroupId) -> IdpResult<Vec<ExternalUser>> {
        if !self.groups.read().await.contains_key(group_id.as_str()) {
            return Err(not_found("group"));
        }

        let memberships = self.memberships.read().await;
        let users = self.users.read().await;
        Ok(memberships
            .iter()
            .filter(|(group, _)| group == group_id.as_str())
            .filter_map(|(_, member)| users.get(member).cloned())
            .collect())
    }

    async fn add_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()> {
        if !self.groups.read().await.contains_key(group_id.as_str()) {
            return Err(not_found("group"));
        }
        if !self.users.read().await.contains_key(user_id.as_str()) {
            return Err(not_found("user"));
        }

        // Adding an existing member is accepted silently.
        self.memberships
            .write()
            .await
            .insert((group_id.as_str().to_owned(), user_id.as_str().to_owned()));
        Ok(())
    }

    async fn remove_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()> {
        let removed = self
            .memberships
            .write()
            .await
            .remove(&(group_id.as_str().to_owned(), user_id.as_str().to_owned()));
        if !removed {
            return Err(not_found("group membership"));
        }
        Ok(())
    }

    async fn create_role(&self, payload: ExternalRoleWrite) -> IdpResult<ExternalRole> {
        if is_blank(payload.label.as_ref()) {
            return Err(rejected("label: The field cannot be left blank"));
        }

        let created = now();
        let id = generated_id("cr0");
        let role = ExternalRole {
            id: Some(id.clone()),
            role: None,
            label: payload.label,
            description: payload.description,
            role_type: None,
            created: Some(created),
            last_updated: Some(created),
        };

        self.roles.write().await.insert(
            id,
            StoredRole {
                role: role.clone(),
                permissions: payload.permissions.unwrap_or_default(),
            },
        );
        Ok(role)
    }

    async fn get_role(&self, role_id: &RoleId) -> IdpResult<ExternalRole> {
        self.roles
            .read()
            .await
            .get(role_id.as_str())
            .map(|stored| stored.role.clone())
            .ok_or_else(|| not_found("role"))
    }

    async fn list_roles(&self) -> IdpResult<Vec<ExternalRole>> {
        let roles = self
            .roles
            .read()
            .await
            .values()
            .map(|stored| stored.role.clone())
            .collect();
        Ok(sorted_by_id(roles, |role: &ExternalRole| role.id.clone()))
    }

    async fn replace_role(
        &self,
        role_id: &RoleId,
        payload: ExternalRoleWrite,
    ) -> IdpResult<ExternalRole> {
        let mut roles = self.roles.write().await;
        let stored = roles
            .get_mut(role_id.as_str())
            .ok_or_else(|| not_found("role"))?;

        if payload.label.is_some() {
            stored.role.label = payload.label;
        }
        if payload.description.is_some() {
            stored.role.description = payload.description;
        }
        if let Some(permissions) = payload.permissions {
            stored.permissions = permissions;
        }
        stored.role.last_updated = Some(now());
        Ok(stored.role.clone())
    }

    async fn delete_role(&self, role_id: &RoleId) -> IdpResult<()> {
        if self.roles.write().await.remove(role_id.as_str()).is_none() {
            return Err(not_found("role"));
        }

        self.assignments
            .write()
            .await
            .retain(|(_, _, assigned)| assigned != role_id.as_str());
        Ok(())
    }

    async fn list_role_permissions(&self, role_id: &RoleId) -> IdpResult<Vec<ExternalPermission>> {
        let roles = self.roles.read().await;
        let stored = roles.get(role_id.as_str()).ok_or_else(|| not_found("role"))?;

        Ok(stored
            .permissions
            .iter()
            .map(|label| ExternalPermission {
                label: Some(label.clone()),
                created: stored.role.created,
                last_updated: stored.role.last_updated,
            })
            .collect())
    }

    async fn assign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()> {
        if !self.principal_exists(principal).await {
            return Err(not_found(principal.kind().as_str()));
        }
        if !role_id.is_standard() && !self.roles.read().await.contains_key(role_id.as_str()) {
            return Err(not_found("role"));
        }

        let inserted = self
            .assignments
            .write()
            .await
            .insert(assignment_key(principal, role_id));
        if !inserted {
            return Err(IdpError::status(
                409,
                "E0000090: Duplicate role assignment exception.",
            ));
        }
        Ok(())
    }

    async fn unassign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()> {
        if !self.principal_exists(principal).await {
            return Err(not_found(principal.kind().as_str()));
        }

        let removed = self
            .assignments
            .write()
            .await
            .remove(&assignment_key(principal, role_id));
        if !removed {
            return Err(IdpError::MissingRelation(format!("{role_id} on {principal}")));
        }
        Ok(())
    }

    async fn list_assigned_roles(&self, principal: &Principal) -> IdpResult<Vec<ExternalRole>> {
        if !self.principal_exists(principal).await {
            return Err(not_found(principal.kind().as_str()));
        }

        let assignments = self.assignments.read().await;
        let roles = self.roles.read().await;
        Ok(assignments
            .iter()
            .filter(|(kind, id, _)| *kind == principal.kind().as_str() && id == principal.id())
            .map(|(_, _, role_id)| match roles.get(role_id) {
                Some(stored) => ExternalRole {
                    id: Some(generated_id("irb")),
                    role: Some(role_id.clone()),
                    role_type: Some("CUSTOM".to_owned()),
                    ..stored.role.clone()
                },
                None => ExternalRole {
                    id: Some(generated_id("ra1")),
                    label: Some(role_id.clone()),
                    role_type: Some(role_id.clone()),
                    ..ExternalRole::default()
                },
            })
            .collect())
    }
}
