//! Blog post handlers

use axum::extract::{Path, State};
use blog_core::{PostId, PostQuery};
use blog_service::dto::{PostRequest, PostResponse};
use blog_service::PostService;

use crate::extractors::{
    AuthUser, CategoryFilter, IdFilter, Pagination, PostIdPath, UserIdPath, ValidatedJson,
};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Create a post owned by the caller
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let service = PostService::new(state.services());
    let post = service.create(auth.user_id, request).await?;
    Ok(ApiResponse::created("blog created successfully", post))
}

/// List posts newest first, optionally within one category
///
/// GET /posts?category=&offset=&limit=
pub async fn list_posts(
    State(state): State<AppState>,
    CategoryFilter(category): CategoryFilter,
    Pagination(page): Pagination,
) -> ApiResult<ApiResponse<Vec<PostResponse>>> {
    let service = PostService::new(state.services());
    let posts = service.list(PostQuery { category, page }).await?;
    Ok(ApiResponse::ok("blogs fetched successfully", posts))
}

/// Get one post with its comments and reactions
///
/// GET /posts/{post_id}
pub async fn get_post(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post_id = path.post_id()?;
    let service = PostService::new(state.services());
    let post = service.get(post_id).await?;
    Ok(ApiResponse::ok("blog fetched successfully", post))
}

/// Posts of one user, optionally narrowed with `?ids=`
///
/// GET /users/{user_id}/posts
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
    IdFilter(ids): IdFilter<PostId>,
) -> ApiResult<ApiResponse<Vec<PostResponse>>> {
    let user_id = path.user_id()?;
    let service = PostService::new(state.services());
    let posts = service.list_by_user(user_id, &ids).await?;
    Ok(ApiResponse::ok("blogs fetched successfully of user", posts))
}

/// Replace a post the caller owns
///
/// PUT /posts/{post_id}
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<PostRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post_id = path.post_id()?;
    let service = PostService::new(state.services());
    let post = service.update(auth.user_id, post_id, request).await?;
    Ok(ApiResponse::ok("blog updated successfully", post))
}

/// Delete a post the caller owns
///
/// DELETE /posts/{post_id}
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
) -> ApiResult<ApiResponse<()>> {
    let post_id = path.post_id()?;
    let service = PostService::new(state.services());
    service.delete(auth.user_id, post_id).await?;
    Ok(ApiResponse::ok("blog deleted successfully", ()))
}
