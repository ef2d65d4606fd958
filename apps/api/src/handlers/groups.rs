use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use idbridge_domain::PrincipalKind;
use tracing::info;

use crate::dto::{
    AssignmentResponse, CreateGroupRequest, GroupResponse, RoleResponse, SuccessResponse,
    UpdateGroupRequest, UserResponse,
};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

mod crud;
mod members;
mod roles;

pub use crud::{
    create_group_handler, delete_group_handler, get_group_handler, list_groups_handler,
    update_group_handler,
};
pub use members::{
    add_group_member_handler, list_group_members_handler, remove_group_member_handler,
};
pub use roles::{assign_group_role_handler, list_group_roles_handler, unassign_group_role_handler};
