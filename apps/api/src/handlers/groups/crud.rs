use super::*;

pub async fn create_group_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateGroupRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<GroupResponse>>)> {
    info!(name = %payload.name, "create group request received");

    let group = state.directory_service.create_group(payload.into()).await?;

    info!(group_id = %group.id, "group created");
    let message = format!("Group '{}' created successfully", group.name);
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(message, GroupResponse::from(group))),
    ))
}

pub async fn list_groups_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<Vec<GroupResponse>>>> {
    let groups: Vec<GroupResponse> = state
        .directory_service
        .list_groups()
        .await?
        .into_iter()
        .map(GroupResponse::from)
        .collect();

    info!(count = groups.len(), "groups listed");
    Ok(Json(SuccessResponse::new("Success", groups)))
}

pub async fn get_group_handler(
    State(state): State<AppState>,
    ApiPath(group_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<GroupResponse>>> {
    let group = state.directory_service.get_group(&group_id).await?;

    Ok(Json(SuccessResponse::new("Success", GroupResponse::from(group))))
}

pub async fn update_group_handler(
    State(state): State<AppState>,
    ApiPath(group_id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateGroupRequest>,
) -> ApiResult<Json<SuccessResponse<GroupResponse>>> {
    info!(%group_id, "update group request received");

    let group = state
        .directory_service
        .update_group(&group_id, payload.into())
        .await?;

    Ok(Json(SuccessResponse::new(
        "Group updated successfully",
        GroupResponse::from(group),
    )))
}

pub async fn delete_group_handler(
    State(state): State<AppState>,
    ApiPath(group_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%group_id, "delete group request received");

    state.directory_service.delete_group(&group_id).await?;

    info!(%group_id, "group deleted");
    Ok(Json(SuccessResponse::message("Group deleted successfully")))
}
