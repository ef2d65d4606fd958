use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use idbridge_domain::{PrincipalKind, UserLifecycleTransition};
use tracing::info;

use crate::dto::{
    AssignmentResponse, CreateUserRequest, RoleResponse, SuccessResponse, UpdateUserRequest,
    UserResponse,
};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

mod crud;
mod lifecycle;
mod roles;

pub use crud::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
pub use lifecycle::{
    activate_user_handler, deactivate_user_handler, suspend_user_handler, unsuspend_user_handler,
};
pub use roles::{assign_user_role_handler, list_user_roles_handler, unassign_user_role_handler};
