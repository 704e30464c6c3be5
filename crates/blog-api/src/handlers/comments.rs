//! Comment handlers

use axum::extract::{Path, State};
use blog_core::CommentId;
use blog_service::dto::{CommentRequest, CommentResponse, PostResponse};
use blog_service::CommentService;

use crate::extractors::{AuthUser, CommentPath, IdFilter, PostIdPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Comment on a post; responds with the post and all its comments
///
/// POST /posts/{post_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post_id = path.post_id()?;
    let service = CommentService::new(state.services());
    let post = service
        .add_comment(auth.user_id, post_id, request.content)
        .await?;
    Ok(ApiResponse::created("comment added successfully", post))
}

/// Comments of a post, optionally narrowed with `?ids=`
///
/// GET /posts/{post_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    IdFilter(ids): IdFilter<CommentId>,
) -> ApiResult<ApiResponse<Vec<CommentResponse>>> {
    let post_id = path.post_id()?;
    let service = CommentService::new(state.services());
    let comments = service.list_comments(auth.user_id, post_id, &ids).await?;
    Ok(ApiResponse::ok("comments fetched successfully", comments))
}

/// Rewrite a comment (author only)
///
/// PUT /posts/{post_id}/comments/{comment_id}
pub async fn update_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> ApiResult<ApiResponse<CommentResponse>> {
    let post_id = path.post_id()?;
    let comment_id = path.comment_id()?;
    let service = CommentService::new(state.services());
    let comment = service
        .update_comment(auth.user_id, post_id, comment_id, request.content)
        .await?;
    Ok(ApiResponse::ok("comment updated successfully", comment))
}

/// Remove a comment (post owner or comment author)
///
/// DELETE /posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<CommentPath>,
) -> ApiResult<ApiResponse<()>> {
    let post_id = path.post_id()?;
    let comment_id = path.comment_id()?;
    let service = CommentService::new(state.services());
    service
        .delete_comment(auth.user_id, post_id, comment_id)
        .await?;
    Ok(ApiResponse::ok("comment deleted successfully", ()))
}
