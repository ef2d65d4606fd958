use super::*;

pub async fn list_group_roles_handler(
    State(state): State<AppState>,
    ApiPath(group_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<Vec<RoleResponse>>>> {
    let roles = state
        .directory_service
        .list_assigned_roles(PrincipalKind::Group, &group_id)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(SuccessResponse::new("Success", roles)))
}

pub async fn assign_group_role_handler(
    State(state): State<AppState>,
    ApiPath((group_id, role_id)): ApiPath<(String, String)>,
) -> ApiResult<Json<SuccessResponse<AssignmentResponse>>> {
    info!(%group_id, %role_id, "assign role to group request received");

    let outcome = state
        .directory_service
        .assign_role(PrincipalKind::Group, &group_id, &role_id)
        .await?;

    Ok(Json(SuccessResponse::new(
        "Role assigned to group successfully",
        AssignmentResponse::from(outcome),
    )))
}

pub async fn unassign_group_role_handler(
    State(state): State<AppState>,
    ApiPath((group_id, role_id)): ApiPath<(String, String)>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%group_id, %role_id, "unassign role from group request received");

    state
        .directory_service
        .unassign_role(PrincipalKind::Group, &group_id, &role_id)
        .await?;

    Ok(Json(SuccessResponse::message(
        "Role unassigned from group successfully",
    )))
}
