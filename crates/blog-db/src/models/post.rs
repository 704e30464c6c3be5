//! Blog post database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for blog_posts table
#[derive(Debug, Clone, FromRow)]
pub struct BlogPostModel {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content_text: String,
    pub photo_url: String,
    pub description: String,
    pub category: String,
    pub comments_count: i32,
    pub reactions_count: i32,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
