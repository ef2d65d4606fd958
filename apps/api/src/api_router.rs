use std::time::Duration;

use axum::Router;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::RequestBodyTimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

/// Inbound timeouts applied to every request.
#[derive(Debug, Clone, Copy)]
pub struct RouterTimeouts {
    /// Maximum time to receive the request body.
    pub read: Duration,
    /// Maximum time for the handler to produce a response.
    pub write: Duration,
}

pub fn build_router(app_state: AppState, timeouts: RouterTimeouts) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(user_routes())
        .merge(group_routes())
        .merge(role_routes())
        .fallback(middleware::route_not_found)
        .method_not_allowed_fallback(middleware::method_not_allowed)
        .with_state(app_state)
        .layer(from_fn_with_state(timeouts.write, middleware::enforce_deadline))
        .layer(RequestBodyTimeoutLayer::new(timeouts.read))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/users",
            get(handlers::users::list_users_handler).post(handlers::users::create_user_handler),
        )
        .route(
            "/api/v1/users/{user_id}",
            get(handlers::users::get_user_handler)
                .put(handlers::users::update_user_handler)
                .delete(handlers::users::delete_user_handler),
        )
        .route(
            "/api/v1/users/{user_id}/activate",
            post(handlers::users::activate_user_handler),
        )
        .route(
            "/api/v1/users/{user_id}/deactivate",
            post(handlers::users::deactivate_user_handler),
        )
        .route(
            "/api/v1/users/{user_id}/suspend",
            post(handlers::users::suspend_user_handler),
        )
        .route(
            "/api/v1/users/{user_id}/unsuspend",
            post(handlers::users::unsuspend_user_handler),
        )
        .route(
            "/api/v1/users/{user_id}/roles",
            get(handlers::users::list_user_roles_handler),
        )
        .route(
            "/api/v1/users/{user_id}/roles/{role_id}",
            put(handlers::users::assign_user_role_handler)
                .delete(handlers::users::unassign_user_role_handler),
        )
}

fn group_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/groups",
            get(handlers::groups::list_groups_handler).post(handlers::groups::create_group_handler),
        )
        .route(
            "/api/v1/groups/{group_id}",
            get(handlers::groups::get_group_handler)
                .put(handlers::groups::update_group_handler)
                .delete(handlers::groups::delete_group_handler),
        )
        .route(
            "/api/v1/groups/{group_id}/members",
            get(handlers::groups::list_group_members_handler),
        )
        .route(
            "/api/v1/groups/{group_id}/members/{user_id}",
            put(handlers::groups::add_group_member_handler)
                .delete(handlers::groups::remove_group_member_handler),
        )
        .route(
            "/api/v1/groups/{group_id}/users/{user_id}",
            put(handlers::groups::add_group_member_handler)
                .delete(handlers::groups::remove_group_member_handler),
        )
        .route(
            "/api/v1/groups/{group_id}/roles",
            get(handlers::groups::list_group_roles_handler),
        )
        .route(
            "/api/v1/groups/{group_id}/roles/{role_id}",
            put(handlers::groups::assign_group_role_handler)
                .delete(handlers::groups::unassign_group_role_handler),
        )
}

fn role_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/roles",
            get(handlers::roles::list_roles_handler).post(handlers::roles::create_role_handler),
        )
        .route(
            "/api/v1/roles/{role_id}",
            get(handlers::roles::get_role_handler)
                .put(handlers::roles::update_role_handler)
                .delete(handlers::roles::delete_role_handler),
        )
        .route(
            "/api/v1/roles/{role_id}/permissions",
            get(handlers::roles::list_role_permissions_handler),
        )
}
