//! Comment service
//!
//! Adds, edits, lists and removes comments. Adding and removing move the post's
//! `comments_count` in the same store write as the comment row.

use blog_core::{Comment, CommentId, DomainError, PostId, UserId};
use tracing::{info, instrument, warn};

use crate::dto::{CommentResponse, PostResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::PostService;
use super::user::UserService;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add a comment; returns the post with its comments embedded
    #[instrument(skip(self, content))]
    pub async fn add_comment(
        &self,
        user_id: UserId,
        post_id: PostId,
        content: String,
    ) -> ServiceResult<PostResponse> {
        Comment::validate_content(&content)?;
        UserService::new(self.ctx).require_user(user_id).await?;

        let comment = Comment::new(user_id, post_id, content);
        let post = self.ctx.comment_repo().create(&comment).await?;

        info!(post_id = %post_id, comment_id = %comment.id, "Comment added");

        let comments = self.ctx.comment_repo().find_by_post(post_id, &[]).await?;
        Ok(PostResponse::from(&post).with_comments(&comments))
    }

    /// Comments of a post in creation order, optionally limited to `ids`.
    ///
    /// Comments of an unpublished post are visible to its owner only.
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        requester: UserId,
        post_id: PostId,
        ids: &[CommentId],
    ) -> ServiceResult<Vec<CommentResponse>> {
        UserService::new(self.ctx).require_user(requester).await?;
        let post = PostService::new(self.ctx).require_post(post_id).await?;
        if !post.is_published && !post.is_owned_by(requester) {
            warn!(post_id = %post_id, user_id = %requester, "Comment listing refused");
            return Err(DomainError::CommentsRestricted.into());
        }

        let comments = self.ctx.comment_repo().find_by_post(post_id, ids).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Replace the text of a comment. Only its author may edit it.
    #[instrument(skip(self, content))]
    pub async fn update_comment(
        &self,
        user_id: UserId,
        post_id: PostId,
        comment_id: CommentId,
        content: String,
    ) -> ServiceResult<CommentResponse> {
        UserService::new(self.ctx).require_user(user_id).await?;
        PostService::new(self.ctx).require_post(post_id).await?;
        let mut comment = self
            .ctx
            .comment_repo()
            .find_by_id(post_id, comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !comment.is_authored_by(user_id) {
            warn!(comment_id = %comment_id, user_id = %user_id, "Comment edit refused");
            return Err(DomainError::NotCommentOwner.into());
        }

        comment.edit(content)?;
        self.ctx.comment_repo().update(&comment).await?;

        info!(post_id = %post_id, comment_id = %comment_id, "Comment updated");

        Ok(CommentResponse::from(&comment))
    }

    /// Remove a comment. Allowed for the post owner and the comment author.
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        user_id: UserId,
        post_id: PostId,
        comment_id: CommentId,
    ) -> ServiceResult<()> {
        UserService::new(self.ctx).require_user(user_id).await?;
        let post = PostService::new(self.ctx).require_post(post_id).await?;
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(post_id, comment_id)
            .await?
            .ok_or(DomainError::CommentNotFound(comment_id))?;

        if !post.is_owned_by(user_id) && !comment.is_authored_by(user_id) {
            warn!(comment_id = %comment_id, user_id = %user_id, "Comment deletion refused");
            return Err(DomainError::NotCommentOwner.into());
        }

        self.ctx.comment_repo().delete(post_id, comment_id).await?;

        info!(post_id = %post_id, comment_id = %comment_id, "Comment deleted");

        Ok(())
    }
}
