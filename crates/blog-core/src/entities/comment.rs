//! Comment entity - a user's remark on a blog post

use chrono::{DateTime, Utc};

use super::post::check_length;
use crate::error::DomainError;
use crate::value_objects::{CommentId, PostId, UserId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub user_id: UserId,
    pub blog_post_id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    pub const CONTENT_MIN: usize = 2;
    pub const CONTENT_MAX: usize = 500;

    /// Create a new Comment
    pub fn new(user_id: UserId, blog_post_id: PostId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: CommentId::generate(),
            user_id,
            blog_post_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check the content length bounds (characters, not bytes)
    ///
    /// # Errors
    /// Returns `DomainError::InvalidLength` outside `[2, 500]`
    pub fn validate_content(content: &str) -> Result<(), DomainError> {
        check_length("content", content, Self::CONTENT_MIN, Self::CONTENT_MAX)
    }

    /// Replace the text, keeping the length bounds
    pub fn edit(&mut self, content: String) -> Result<(), DomainError> {
        Self::validate_content(&content)?;
        self.content = content;
        self.updated_at = Utc::now();
        Ok(())
    }

    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
