use idbridge_application::{CreateRoleInput, UpdateRoleInput};
use idbridge_domain::{Permission, Role};

use super::{CreateRoleRequest, PermissionResponse, RoleResponse, UpdateRoleRequest};

impl From<Role> for RoleResponse {
    fn from(role: Role) -> Self {
        Self {
            id: role.id.as_str().to_owned(),
            name: role.name,
            description: role.description,
            role_type: role.role_type.as_str(),
            created: role.created,
            last_updated: role.last_updated,
        }
    }
}

impl From<Permission> for PermissionResponse {
    fn from(permission: Permission) -> Self {
        Self {
            resource: permission.resource,
            action: permission.action,
            scope: permission.scope,
        }
    }
}

impl From<CreateRoleRequest> for CreateRoleInput {
    fn from(request: CreateRoleRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            permissions: request.permissions,
        }
    }
}

impl From<UpdateRoleRequest> for UpdateRoleInput {
    fn from(request: UpdateRoleRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            permissions: request.permissions,
        }
    }
}
