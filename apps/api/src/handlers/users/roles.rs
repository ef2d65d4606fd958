use super::*;

pub async fn list_user_roles_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<Vec<RoleResponse>>>> {
    let roles = state
        .directory_service
        .list_assigned_roles(PrincipalKind::User, &user_id)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(SuccessResponse::new("Success", roles)))
}

pub async fn assign_user_role_handler(
    State(state): State<AppState>,
    ApiPath((user_id, role_id)): ApiPath<(String, String)>,
) -> ApiResult<Json<SuccessResponse<AssignmentResponse>>> {
    info!(%user_id, %role_id, "assign role to user request received");

    let outcome = state
        .directory_service
        .assign_role(PrincipalKind::User, &user_id, &role_id)
        .await?;

    Ok(Json(SuccessResponse::new(
        "Role assigned to user successfully",
        AssignmentResponse::from(outcome),
    )))
}

pub async fn unassign_user_role_handler(
    State(state): State<AppState>,
    ApiPath((user_id, role_id)): ApiPath<(String, String)>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%user_id, %role_id, "unassign role from user request received");

    state
        .directory_service
        .unassign_role(PrincipalKind::User, &user_id, &role_id)
        .await?;

    Ok(Json(SuccessResponse::message(
        "Role unassigned from user successfully",
    )))
}
