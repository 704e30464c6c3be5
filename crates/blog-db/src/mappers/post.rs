//! Blog post entity <-> model mapper

use blog_core::{BlogPost, PostId, UserId};

use crate::models::BlogPostModel;

pub const POST_COLUMNS: &str = "id, user_id, title, content_text, photo_url, description, \
     category, comments_count, reactions_count, is_published, published_at, created_at, updated_at";

impl From<BlogPostModel> for BlogPost {
    fn from(model: BlogPostModel) -> Self {
        BlogPost {
            id: PostId::from_uuid(model.id),
            user_id: UserId::from_uuid(model.user_id),
            title: model.title,
            content_text: model.content_text,
            photo_url: model.photo_url,
            description: model.description,
            category: model.category,
            comments_count: model.comments_count,
            reactions_count: model.reactions_count,
            is_published: model.is_published,
            published_at: model.published_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
