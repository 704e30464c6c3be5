//! User handlers

use axum::extract::{Path, State};
use blog_service::dto::{
    CurrentUserResponse, PaginatedResponse, UpdateUserRequest, UserResponse,
};
use blog_service::UserService;

use crate::extractors::{AuthUser, Pagination, UserIdPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// List users, oldest first
///
/// GET /users?offset=&limit=
pub async fn list_users(
    State(state): State<AppState>,
    Pagination(page): Pagination,
) -> ApiResult<ApiResponse<PaginatedResponse<UserResponse>>> {
    let service = UserService::new(state.services());
    let users = service.list_users(page).await?;
    Ok(ApiResponse::ok("users fetch successfully", users))
}

/// Get user by ID (public profile)
///
/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiResponse<UserResponse>> {
    let user_id = path.user_id()?;
    let service = UserService::new(state.services());
    let user = service.get_user(user_id).await?;
    Ok(ApiResponse::ok("user fetch successfully", user))
}

/// Get current user
///
/// GET /users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<CurrentUserResponse>> {
    let service = UserService::new(state.services());
    let user = service.get_current_user(auth.user_id).await?;
    Ok(ApiResponse::ok("user fetch successfully", user))
}

/// Replace the current user's profile
///
/// PUT /users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<ApiResponse<CurrentUserResponse>> {
    let service = UserService::new(state.services());
    let user = service.update_current_user(auth.user_id, request).await?;
    Ok(ApiResponse::ok("user updated successfully", user))
}

/// Delete the current user's account
///
/// DELETE /users/@me
pub async fn delete_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiResponse<()>> {
    let service = UserService::new(state.services());
    service.delete_current_user(auth.user_id).await?;
    Ok(ApiResponse::ok("user deleted successfully", ()))
}
