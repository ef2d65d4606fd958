use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use crate::dto::{
    CreateRoleRequest, PermissionResponse, RoleResponse, SuccessResponse, UpdateRoleRequest,
};
use crate::error::ApiResult;
use crate::extract::{ApiJson, ApiPath};
use crate::state::AppState;

pub async fn create_role_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<RoleResponse>>)> {
    info!(name = %payload.name, "create role request received");

    let role = state.directory_service.create_role(payload.into()).await?;

    info!(role_id = %role.id, "role created");
    let message = format!("Role '{}' created successfully", role.name);
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(message, RoleResponse::from(role))),
    ))
}

pub async fn list_roles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<Vec<RoleResponse>>>> {
    let roles: Vec<RoleResponse> = state
        .directory_service
        .list_roles()
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    info!(count = roles.len(), "roles listed");
    Ok(Json(SuccessResponse::new("Success", roles)))
}

pub async fn get_role_handler(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<RoleResponse>>> {
    let role = state.directory_service.get_role(&role_id).await?;

    Ok(Json(SuccessResponse::new("Success", RoleResponse::from(role))))
}

pub async fn update_role_handler(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateRoleRequest>,
) -> ApiResult<Json<SuccessResponse<RoleResponse>>> {
    info!(%role_id, "update role request received");

    let role = state
        .directory_service
        .update_role(&role_id, payload.into())
        .await?;

    Ok(Json(SuccessResponse::new(
        "Role updated successfully",
        RoleResponse::from(role),
    )))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%role_id, "delete role request received");

    state.directory_service.delete_role(&role_id).await?;

    info!(%role_id, "role deleted");
    Ok(Json(SuccessResponse::message("Role deleted successfully")))
}

pub async fn list_role_permissions_handler(
    State(state): State<AppState>,
    ApiPath(role_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<Vec<PermissionResponse>>>> {
    let permissions = state
        .directory_service
        .list_role_permissions(&role_id)
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(SuccessResponse::new("Success", permissions)))
}
