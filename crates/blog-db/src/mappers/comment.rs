//! Comment entity <-> model mapper

use blog_core::{Comment, CommentId, PostId, UserId};

use crate::models::CommentModel;

pub const COMMENT_COLUMNS: &str = "id, user_id, blog_post_id, content, created_at, updated_at";

impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            blog_post_id: PostId::from_uuid(model.blog_post_id),
            content: model.content,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
