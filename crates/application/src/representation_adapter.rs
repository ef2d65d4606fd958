//! Conversion between provider wire objects and domain entities.
//!
//! Normalization never fails on missing optional data: absent strings become
//! empty, absent timestamps stay `None` and unknown enum strings map to
//! `None`. A missing identity field is the only hard failure.

use idbridge_core::{AppError, AppResult};
use idbridge_domain::{
    Group, GroupId, Permission, ProfileMap, Role, RoleId, RoleType, STANDARD_ROLE_IDS, User,
    UserId,
};

use crate::directory_inputs::{CreateGroupInput, CreateRoleInput, CreateUserInput};
use crate::idp_ports::{
    ExternalCredentials, ExternalGroup, ExternalGroupProfile, ExternalGroupWrite,
    ExternalPassword, ExternalPermission, ExternalRole, ExternalRoleWrite, ExternalUser,
    ExternalUserCreate, ExternalUserProfile,
};

/// Converts a provider user into the domain entity.
pub fn normalize_user(external: ExternalUser) -> AppResult<User> {
    let id = required_identity("user", external.id)?;
    let id = UserId::new(id).map_err(|_| malformed_identity("user"))?;
    let profile = external.profile.unwrap_or_default();

    Ok(User {
        id,
        email: profile.email.unwrap_or_default(),
        login: profile.login.unwrap_or_default(),
        first_name: profile.first_name.unwrap_or_default(),
        last_name: profile.last_name.unwrap_or_default(),
        status: external
            .status
            .as_deref()
            .and_then(|status| status.parse().ok()),
        created: external.created,
        activated: external.activated,
        last_login: external.last_login,
        last_updated: external.last_updated,
        profile: profile.additional,
    })
}

/// Converts a provider group into the domain entity.
pub fn normalize_group(external: ExternalGroup) -> AppResult<Group> {
    let id = required_identity("group", external.id)?;
    let id = GroupId::new(id).map_err(|_| malformed_identity("group"))?;
    let profile = external.profile.unwrap_or_default();

    Ok(Group {
        id,
        name: profile.name.unwrap_or_default(),
        description: profile.description.unwrap_or_default(),
        group_type: external
            .group_type
            .as_deref()
            .and_then(|group_type| group_type.parse().ok()),
        created: external.created,
        last_updated: external.last_updated,
        profile: profile.additional,
    })
}

/// Converts a provider role into the domain entity.
///
/// Assignment listings carry the assignment id in `id`. The role is then
/// identified by `role` for custom roles or by `type` for standard roles.
pub fn normalize_role(external: ExternalRole) -> AppResult<Role> {
    let standard_type = external
        .role_type
        .clone()
        .filter(|role_type| STANDARD_ROLE_IDS.contains(&role_type.as_str()));
    let id = required_identity(
        "role",
        external
            .role
            .filter(|role| !role.trim().is_empty())
            .or(standard_type)
            .or(external.id),
    )?;
    let id = RoleId::new(id).map_err(|_| malformed_identity("role"))?;
    let role_type = role_type(external.role_type.as_deref(), &id);

    Ok(Role {
        id,
        name: external.label.unwrap_or_default(),
        description: external.description.unwrap_or_default(),
        role_type,
        created: external.created,
        last_updated: external.last_updated,
    })
}

/// Converts a provider permission into the domain value.
pub fn normalize_permission(external: ExternalPermission) -> AppResult<Permission> {
    let label = required_identity("permission", external.label)?;
    Permission::from_label(&label).map_err(|_| malformed_identity("permission"))
}

/// Builds the provider payload for a new user.
#[must_use]
pub fn denormalize_user_create(input: &CreateUserInput) -> ExternalUserCreate {
    ExternalUserCreate {
        profile: ExternalUserProfile {
            email: Some(input.email.clone()),
            login: Some(input.login.clone()),
            first_name: Some(input.first_name.clone()),
            last_name: Some(input.last_name.clone()),
            additional: without_keys(&input.profile, &ExternalUserProfile::WELL_KNOWN_KEYS),
        },
        credentials: input
            .password
            .as_ref()
            .filter(|password| !password.is_empty())
            .map(|password| ExternalCredentials {
                password: ExternalPassword {
                    value: password.clone(),
                },
            }),
    }
}

/// Builds the provider payload for a new group.
#[must_use]
pub fn denormalize_group_create(input: &CreateGroupInput) -> ExternalGroupWrite {
    ExternalGroupWrite {
        profile: ExternalGroupProfile {
            name: Some(input.name.clone()),
            description: Some(input.description.clone()),
            additional: without_keys(&input.profile, &ExternalGroupProfile::WELL_KNOWN_KEYS),
        },
    }
}

/// Builds the provider payload for a new custom role.
#[must_use]
pub fn denormalize_role_create(input: &CreateRoleInput) -> ExternalRoleWrite {
    ExternalRoleWrite {
        label: Some(input.name.clone()),
        description: Some(input.description.clone()),
        permissions: (!input.permissions.is_empty()).then(|| input.permissions.clone()),
    }
}

/// Copies an attribute bag, dropping keys that the payload carries as
/// dedicated fields so the serialized profile never repeats a key.
pub(crate) fn without_keys(profile: &ProfileMap, reserved: &[&str]) -> ProfileMap {
    profile
        .iter()
        .filter(|(key, _)| !reserved.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn role_type(wire_value: Option<&str>, role_id: &RoleId) -> RoleType {
    match wire_value {
        Some("CUSTOM") => RoleType::Custom,
        Some(_) => RoleType::System,
        None if role_id.is_standard() => RoleType::System,
        None => RoleType::Custom,
    }
}

fn required_identity(entity: &str, id: Option<String>) -> AppResult<String> {
    id.filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::Adapter(format!("identity provider returned a {entity} without an id")))
}

fn malformed_identity(entity: &str) -> AppError {
    AppError::Adapter(format!(
        "identity provider returned a {entity} with a malformed id"
    ))
}

#[cfg(test)]
mod tests;
