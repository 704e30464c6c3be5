//! Reaction handlers

use axum::extract::{Path, State};
use blog_service::dto::{PostResponse, ReactionRequest, ReactionResponse};
use blog_service::ReactionService;

use crate::extractors::{AuthUser, PostIdPath, ValidatedJson};
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Toggle the caller's reaction on a post
///
/// PUT /posts/{post_id}/reactions
pub async fn set_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(path): Path<PostIdPath>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<ApiResponse<PostResponse>> {
    let post_id = path.post_id()?;
    let service = ReactionService::new(state.services());
    let post = service
        .set_reaction(auth.user_id, post_id, request.reaction_type)
        .await?;
    Ok(ApiResponse::ok("reaction added successfully", post))
}

/// Every reaction on a post
///
/// GET /posts/{post_id}/reactions
pub async fn list_reactions(
    State(state): State<AppState>,
    Path(path): Path<PostIdPath>,
) -> ApiResult<ApiResponse<Vec<ReactionResponse>>> {
    let post_id = path.post_id()?;
    let service = ReactionService::new(state.services());
    let reactions = service.list_reactions(post_id).await?;
    Ok(ApiResponse::ok("reactions fetched successfully", reactions))
}
