//! Blog post service
//!
//! Owns the post lifecycle and the existence/ownership checks the comment
//! and reaction services run before they mutate anything.

use blog_core::{BlogPost, DomainError, PostDraft, PostId, PostQuery, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{PostRequest, PostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::user::UserService;

/// Blog post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a live post or fail with `PostNotFound`
    pub(crate) async fn require_post(&self, post_id: PostId) -> ServiceResult<BlogPost> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::PostNotFound(post_id).into())
    }

    /// Load a live post and check that `user_id` is a live account that owns it
    pub(crate) async fn require_owned_post(
        &self,
        user_id: UserId,
        post_id: PostId,
    ) -> ServiceResult<BlogPost> {
        UserService::new(self.ctx).require_user(user_id).await?;
        let post = self.require_post(post_id).await?;
        if !post.is_owned_by(user_id) {
            warn!(post_id = %post_id, user_id = %user_id, "Rejected: caller does not own post");
            return Err(DomainError::NotPostOwner.into());
        }
        Ok(post)
    }

    /// Create a post owned by `user_id`
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create(&self, user_id: UserId, request: PostRequest) -> ServiceResult<PostResponse> {
        let owner = UserService::new(self.ctx).require_user(user_id).await?;

        let draft = PostDraft::from(request);
        draft.validate()?;

        let post = BlogPost::new(owner.id, draft);
        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, user_id = %owner.id, "Blog post created");

        Ok(PostResponse::from(&post))
    }

    /// Get a post with its comments and reactions
    #[instrument(skip(self))]
    pub async fn get(&self, post_id: PostId) -> ServiceResult<PostResponse> {
        let post = self.require_post(post_id).await?;
        let comments = self.ctx.comment_repo().find_by_post(post_id, &[]).await?;
        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;

        Ok(PostResponse::from(&post)
            .with_comments(&comments)
            .with_reactions(&reactions))
    }

    /// List posts newest first, optionally within one category
    #[instrument(skip(self))]
    pub async fn list(&self, query: PostQuery) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list(&query).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Posts of one user; an empty `ids` slice means all of them
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        user_id: UserId,
        ids: &[PostId],
    ) -> ServiceResult<Vec<PostResponse>> {
        UserService::new(self.ctx).require_user(user_id).await?;
        let posts = self.ctx.post_repo().find_by_user(user_id, ids).await?;
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    /// Replace every author-controlled field of a post
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        user_id: UserId,
        post_id: PostId,
        request: PostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.require_owned_post(user_id, post_id).await?;

        let draft = PostDraft::from(request);
        draft.validate()?;

        post.apply(draft);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, "Blog post updated");

        Ok(PostResponse::from(&post))
    }

    /// Soft delete a post
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId, post_id: PostId) -> ServiceResult<()> {
        self.require_owned_post(user_id, post_id).await?;
        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Blog post deleted");

        Ok(())
    }
}
