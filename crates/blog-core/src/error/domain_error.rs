//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CommentId, PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Blog post not found: {0}")]
    PostNotFound(PostId),

    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("Invalid reaction type: {0}")]
    InvalidReactionType(i64),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Only the owner of this blog post can modify it")]
    NotPostOwner,

    #[error("You are not authorized to delete this comment")]
    NotCommentOwner,

    #[error("Comments of an unpublished blog post are visible to its owner only")]
    CommentsRestricted,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("A blog post with this title already exists")]
    PostTitleExists,

    #[error("Reaction was changed concurrently, try again")]
    ReactionConflict,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_BLOG_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidLength { .. } => "INVALID_LENGTH",
            Self::InvalidReactionType(_) => "INVALID_REACTION_TYPE",

            // Authorization
            Self::NotPostOwner => "NOT_POST_OWNER",
            Self::NotCommentOwner => "NOT_COMMENT_OWNER",
            Self::CommentsRestricted => "COMMENTS_RESTRICTED",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::PostTitleExists => "POST_TITLE_EXISTS",
            Self::ReactionConflict => "REACTION_CONFLICT",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::PostNotFound(_) | Self::CommentNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidLength { .. } | Self::InvalidReactionType(_)
        )
    }

    /// Check if this is an authorization (ownership) error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotPostOwner | Self::NotCommentOwner | Self::CommentsRestricted
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::PostTitleExists | Self::ReactionConflict
        )
    }
}
