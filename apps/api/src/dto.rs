mod common;
mod groups;
mod roles;
mod users;

pub use common::{AssignmentResponse, HealthResponse, SuccessResponse};
pub use groups::{CreateGroupRequest, GroupResponse, UpdateGroupRequest};
pub use roles::{CreateRoleRequest, PermissionResponse, RoleResponse, UpdateRoleRequest};
pub use users::{CreateUserRequest, UpdateUserRequest, UserResponse};
