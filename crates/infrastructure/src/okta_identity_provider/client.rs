use async_trait::async_trait;
use idbridge_application::{
    ExternalGroup, ExternalGroupWrite, ExternalPermission, ExternalRole, ExternalRoleWrite,
    ExternalUser, ExternalUserCreate, ExternalUserUpdate, IdentityProviderClient, IdpError,
    IdpResult,
};
use idbridge_domain::{GroupId, Principal, RoleId, UserId, UserLifecycleTransition};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::OktaIdentityProvider;

#[derive(Debug, Deserialize)]
struct RoleList {
    #[serde(default)]
    roles: Vec<ExternalRole>,
}

#[derive(Debug, Deserialize)]
struct PermissionList {
    #[serde(default)]
    permissions: Vec<ExternalPermission>,
}

/// Body of a role assignment request. Standard roles are addressed by type,
/// custom roles by id.
#[derive(Debug, Serialize)]
struct RoleAssignmentBody<'a> {
    #[serde(rename = "type")]
    role_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
}

impl<'a> RoleAssignmentBody<'a> {
    fn for_role(role_id: &'a RoleId) -> Self {
        if role_id.is_standard() {
            Self {
                role_type: role_id.as_str(),
                role: None,
            }
        } else {
            Self {
                role_type: "CUSTOM",
                role: Some(role_id.as_str()),
            }
        }
    }
}

fn principal_segments(principal: &Principal) -> [&str; 2] {
    match principal {
        Principal::User(user_id) => ["users", user_id.as_str()],
        Principal::Group(group_id) => ["groups", group_id.as_str()],
    }
}

fn assignment_matches(assignment: &ExternalRole, role_id: &RoleId) -> bool {
    let role_id = role_id.as_str();
    assignment.role.as_deref() == Some(role_id)
        || assignment.role_type.as_deref() == Some(role_id)
        || assignment.id.as_deref() == Some(role_id)
}

#[async_trait]
impl IdentityProviderClient for OktaIdentityProvider {
    async fn check_connection(&self) -> IdpResult<()> {
        let url = self.endpoint(&["org"])?;
        self.send_empty("check_connection", self.request(Method::GET, url))
            .await
    }

    async fn create_user(
        &self,
        payload: ExternalUserCreate,
        activate: bool,
    ) -> IdpResult<ExternalUser> {
        let mut url = self.endpoint(&["users"])?;
        url.query_pairs_mut()
            .append_pair("activate", if activate { "true" } else { "false" });
        self.send_json(
            "create_user",
            self.request(Method::POST, url).json(&payload),
        )
        .await
    }

    async fn get_user(&self, user_id: &UserId) -> IdpResult<ExternalUser> {
        let url = self.endpoint(&["users", user_id.as_str()])?;
        self.send_json("get_user", self.request(Method::GET, url))
            .await
    }

    async fn list_users(&self) -> IdpResult<Vec<ExternalUser>> {
        let url = self.endpoint(&["users"])?;
        self.send_json("list_users", self.request(Method::GET, url))
            .await
    }

    async fn update_user(
        &self,
        user_id: &UserId,
        payload: ExternalUserUpdate,
    ) -> IdpResult<ExternalUser> {
        let url = self.endpoint(&["users", user_id.as_str()])?;
        self.send_json(
            "update_user",
            self.request(Method::POST, url).json(&payload),
        )
        .await
    }

    async fn transition_user(
        &self,
        user_id: &UserId,
        transition: UserLifecycleTransition,
    ) -> IdpResult<()> {
        let url = self.endpoint(&["users", user_id.as_str(), "lifecycle", transition.as_str()])?;
        self.send_empty("transition_user", self.request(Method::POST, url))
            .await
    }

    async fn delete_user(&self, user_id: &UserId) -> IdpResult<()> {
        let url = self.endpoint(&["users", user_id.as_str()])?;
        self.send_empty("delete_user", self.request(Method::DELETE, url))
            .await
    }

    async fn create_group(&self, payload: ExternalGroupWrite) -> IdpResult<ExternalGroup> {
        let url = self.endpoint(&["groups"])?;
        self.send_json(
            "create_group",
            self.request(Method::POST, url).json(&payload),
        )
        .await
    }

    async fn get_group(&self, group_id: &GroupId) -> IdpResult<ExternalGroup> {
        let url = self.endpoint(&["groups", group_id.as_str()])?;
        self.send_json("get_group", self.request(Method::GET, url))
            .await
    }

    async fn list_groups(&self) -> IdpResult<Vec<ExternalGroup>> {
        let url = self.endpoint(&["groups"])?;
        self.send_json("list_groups", self.request(Method::GET, url))
            .await
    }

    async fn replace_group(
        &self,
        group_id: &GroupId,
        payload: ExternalGroupWrite,
    ) -> IdpResult<ExternalGroup> {
        let url = self.endpoint(&["groups", group_id.as_str()])?;
        self.send_json(
            "replace_group",
            self.request(Method::PUT, url).json(&payload),
        )
        .await
    }

    async fn delete_group(&self, group_id: &GroupId) -> IdpResult<()> {
        let url = self.endpoint(&["groups", group_id.as_str()])?;
        self.send_empty("delete_group", self.request(Method::DELETE, url))
            .await
    }

    async fn list_group_members(&self, group_id: &GroupId) -> IdpResult<Vec<ExternalUser>> {
        let url = self.endpoint(&["groups", group_id.as_str(), "users"])?;
        self.send_json("list_group_members", self.request(Method::GET, url))
            .await
    }

    async fn add_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()> {
        let url = self.endpoint(&["groups", group_id.as_str(), "users", user_id.as_str()])?;
        self.send_empty("add_group_member", self.request(Method::PUT, url))
            .await
    }

    async fn remove_group_member(&self, group_id: &GroupId, user_id: &UserId) -> IdpResult<()> {
        let url = self.endpoint(&["groups", group_id.as_str(), "users", user_id.as_str()])?;
        self.send_empty("remove_group_member", self.request(Method::DELETE, url))
            .await
    }

    async fn create_role(&self, payload: ExternalRoleWrite) -> IdpResult<ExternalRole> {
        let url = self.endpoint(&["iam", "roles"])?;
        self.send_json(
            "create_role",
            self.request(Method::POST, url).json(&payload),
        )
        .await
    }

    async fn get_role(&self, role_id: &RoleId) -> IdpResult<ExternalRole> {
        let url = self.endpoint(&["iam", "roles", role_id.as_str()])?;
        self.send_json("get_role", self.request(Method::GET, url))
            .await
    }

    async fn list_roles(&self) -> IdpResult<Vec<ExternalRole>> {
        let url = self.endpoint(&["iam", "roles"])?;
        let list: RoleList = self
            .send_json("list_roles", self.request(Method::GET, url))
            .await?;
        Ok(list.roles)
    }

    async fn replace_role(
        &self,
        role_id: &RoleId,
        payload: ExternalRoleWrite,
    ) -> IdpResult<ExternalRole> {
        let url = self.endpoint(&["iam", "roles", role_id.as_str()])?;
        self.send_json(
            "replace_role",
            self.request(Method::PUT, url).json(&payload),
        )
        .await
    }

    async fn delete_role(&self, role_id: &RoleId) -> IdpResult<()> {
        let url = self.endpoint(&["iam", "roles", role_id.as_str()])?;
        self.send_empty("delete_role", self.request(Method::DELETE, url))
            .await
    }

    async fn list_role_permissions(&self, role_id: &RoleId) -> IdpResult<Vec<ExternalPermission>> {
        let url = self.endpoint(&["iam", "roles", role_id.as_str(), "permissions"])?;
        let list: PermissionList = self
            .send_json("list_role_permissions", self.request(Method::GET, url))
            .await?;
        Ok(list.permissions)
    }

    async fn assign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()> {
        let [collection, id] = principal_segments(principal);
        let url = self.endpoint(&[collection, id, "roles"])?;
        self.send_empty(
            "assign_role",
            self.request(Method::POST, url)
                .json(&RoleAssignmentBody::for_role(role_id)),
        )
        .await
    }

    async fn unassign_role(&self, principal: &Principal, role_id: &RoleId) -> IdpResult<()> {
        // Assignments are removed by assignment id, which differs from the
        // role id for custom roles.
        let assignment_id = self
            .list_assigned_roles(principal)
            .await?
            .into_iter()
            .find(|assignment| assignment_matches(assignment, role_id))
            .and_then(|assignment| assignment.id)
            .ok_or_else(|| IdpError::MissingRelation(format!("{role_id} on {principal}")))?;

        let [collection, id] = principal_segments(principal);
        let url = self.endpoint(&[collection, id, "roles", assignment_id.as_str()])?;
        self.send_empty("unassign_role", self.request(Method::DELETE, url))
            .await
            .map_err(|error| match error.status_code() {
                Some(404) => IdpError::MissingRelation(format!("{role_id} on {principal}")),
                _ => error,
            })
    }

    async fn list_assigned_roles(&self, principal: &Principal) -> IdpResult<Vec<ExternalRole>> {
        let [collection, id] = principal_segments(principal);
        let url = self.endpoint(&[collection, id, "roles"])?;
        self.send_json("list_assigned_roles", self.request(Method::GET, url))
            .await
    }
}
