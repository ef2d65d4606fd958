use super::*;

pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<SuccessResponse<UserResponse>>)> {
    info!(login = %payload.login, activate = payload.activate, "create user request received");

    let user = state.directory_service.create_user(payload.into()).await?;

    info!(user_id = %user.id, "user created");
    let message = format!("User {} created successfully", user.email);
    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse::new(message, UserResponse::from(user))),
    ))
}

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<SuccessResponse<Vec<UserResponse>>>> {
    let users: Vec<UserResponse> = state
        .directory_service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    info!(count = users.len(), "users listed");
    Ok(Json(SuccessResponse::new("Success", users)))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<UserResponse>>> {
    let user = state.directory_service.get_user(&user_id).await?;

    Ok(Json(SuccessResponse::new("Success", UserResponse::from(user))))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> ApiResult<Json<SuccessResponse<UserResponse>>> {
    info!(%user_id, "update user request received");

    let user = state
        .directory_service
        .update_user(&user_id, payload.into())
        .await?;

    Ok(Json(SuccessResponse::new(
        "User updated successfully",
        UserResponse::from(user),
    )))
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%user_id, "delete user request received");

    state.directory_service.delete_user(&user_id).await?;

    info!(%user_id, "user deleted");
    Ok(Json(SuccessResponse::message("User deleted successfully")))
}
