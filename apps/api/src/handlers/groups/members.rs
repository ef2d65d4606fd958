use super::*;

pub async fn list_group_members_handler(
    State(state): State<AppState>,
    ApiPath(group_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<Vec<UserResponse>>>> {
    let members = state
        .directory_service
        .list_group_members(&group_id)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(Json(SuccessResponse::new("Success", members)))
}

pub async fn add_group_member_handler(
    State(state): State<AppState>,
    ApiPath((group_id, user_id)): ApiPath<(String, String)>,
) -> ApiResult<Json<SuccessResponse<AssignmentResponse>>> {
    info!(%group_id, %user_id, "add group member request received");

    let outcome = state
        .directory_service
        .add_group_member(&group_id, &user_id)
        .await?;

    Ok(Json(SuccessResponse::new(
        "User added to group successfully",
        AssignmentResponse::from(outcome),
    )))
}

pub async fn remove_group_member_handler(
    State(state): State<AppState>,
    ApiPath((group_id, user_id)): ApiPath<(String, String)>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%group_id, %user_id, "remove group member request received");

    state
        .directory_service
        .remove_group_member(&group_id, &user_id)
        .await?;

    Ok(Json(SuccessResponse::message(
        "User removed from group successfully",
    )))
}
