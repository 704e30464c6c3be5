//! Reaction service
//!
//! One reaction per (user, post). Submitting a type toggles between absent
//! and present; the store applies the transition and the counter change
//! together.

use blog_core::{PostId, ReactionTransition, ReactionType, UserId};
use tracing::{info, instrument};

use crate::dto::{PostResponse, ReactionResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::post::PostService;
use super::user::UserService;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply the reaction toggle for the caller and return the updated post
    #[instrument(skip(self))]
    pub async fn set_reaction(
        &self,
        user_id: UserId,
        post_id: PostId,
        code: i64,
    ) -> ServiceResult<PostResponse> {
        let reaction_type = ReactionType::from_code(code)?;
        UserService::new(self.ctx).require_user(user_id).await?;

        let toggle = self
            .ctx
            .reaction_repo()
            .toggle(post_id, user_id, reaction_type)
            .await?;

        match toggle.transition {
            ReactionTransition::Added(t) => {
                info!(post_id = %post_id, user_id = %user_id, reaction = %t, "Reaction added");
            }
            ReactionTransition::Removed(t) => {
                info!(post_id = %post_id, user_id = %user_id, reaction = %t, "Reaction removed");
            }
            ReactionTransition::Changed { from, to } => {
                info!(post_id = %post_id, user_id = %user_id, %from, %to, "Reaction changed");
            }
        }

        Ok(PostResponse::from(&toggle.post))
    }

    /// Every reaction on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, post_id: PostId) -> ServiceResult<Vec<ReactionResponse>> {
        PostService::new(self.ctx).require_post(post_id).await?;
        let reactions = self.ctx.reaction_repo().find_by_post(post_id).await?;
        Ok(reactions.iter().map(ReactionResponse::from).collect())
    }
}
