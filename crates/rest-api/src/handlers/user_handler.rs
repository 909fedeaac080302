//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::{AppResult, ProblemDetails};

use crate::extractors::{Ctx, PageQuery, UserIdPath};
use crate::resources::{UserPageResource, UserResource};
use crate::state::AppState;

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(get_users))
        .route("/users/:userId", get(get_user))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}",
    tag = "Users",
    params(
        ("userId" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = UserResource),
        (status = 400, description = "Malformed user id", body = ProblemDetails, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemDetails, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = ProblemDetails, content_type = "application/problem+json")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    UserIdPath(id): UserIdPath,
) -> AppResult<Json<UserResource>> {
    let user = state.users.get_by_id(&ctx, id).await?;
    Ok(Json(UserResource::from(user)))
}

/// List users, one page at a time
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    params(
        ("page" = Option<i32>, Query, description = "Page index, 0-based", minimum = 0),
        ("size" = Option<i32>, Query, description = "Page size", minimum = 0)
    ),
    responses(
        (status = 200, description = "One page of users", body = UserPageResource),
        (status = 400, description = "Invalid page or size", body = ProblemDetails, content_type = "application/problem+json"),
        (status = 500, description = "Unexpected error", body = ProblemDetails, content_type = "application/problem+json")
    )
)]
pub async fn get_users(
    State(state): State<AppState>,
    Ctx(ctx): Ctx,
    PageQuery(page_request): PageQuery,
) -> AppResult<Json<UserPageResource>> {
    let page = state.users.get_all(&ctx, page_request).await?;
    Ok(Json(UserPageResource::from(page)))
}
