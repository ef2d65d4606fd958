use super::*;

async fn request_transition(
    state: &AppState,
    user_id: &str,
    transition: UserLifecycleTransition,
    done: &str,
) -> ApiResult<Json<SuccessResponse<()>>> {
    info!(%user_id, transition = transition.as_str(), "user lifecycle request received");

    state
        .directory_service
        .transition_user(user_id, transition)
        .await?;

    Ok(Json(SuccessResponse::message(format!(
        "User {done} successfully"
    ))))
}

pub async fn activate_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    request_transition(&state, &user_id, UserLifecycleTransition::Activate, "activated").await
}

pub async fn deactivate_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    request_transition(&state, &user_id, UserLifecycleTransition::Deactivate, "deactivated").await
}

pub async fn suspend_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    request_transition(&state, &user_id, UserLifecycleTransition::Suspend, "suspended").await
}

pub async fn unsuspend_user_handler(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<String>,
) -> ApiResult<Json<SuccessResponse<()>>> {
    request_transition(&state, &user_id, UserLifecycleTransition::Unsuspend, "unsuspended").await
}
