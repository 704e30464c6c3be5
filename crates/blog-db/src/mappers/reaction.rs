//! Reaction entity <-> model mapper

use blog_core::{DomainError, PostId, Reaction, ReactionId, ReactionType, UserId};

use crate::models::ReactionModel;

pub const REACTION_COLUMNS: &str =
    "id, user_id, blog_post_id, reaction_type, created_at, updated_at";

impl TryFrom<ReactionModel> for Reaction {
    type Error = DomainError;

    fn try_from(model: ReactionModel) -> Result<Self, Self::Error> {
        Ok(Reaction {
            id: ReactionId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            blog_post_id: PostId::from_uuid(model.blog_post_id),
            reaction_type: ReactionType::try_from(model.reaction_type)?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
