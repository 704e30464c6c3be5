//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. One stable trait per capability.
//!
//! Methods that touch more than one row (`CommentRepository::create`,
//! `CommentRepository::delete`, `ReactionRepository::toggle`) are atomic:
//! implementations apply the child-row change and the post counter change
//! together or not at all.

use async_trait::async_trait;

use crate::entities::{BlogPost, Comment, Reaction, ReactionToggle, User};
use crate::error::DomainError;
use crate::value_objects::{CommentId, PostId, ReactionType, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Offset/limit window for list queries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub offset: i64,
    pub limit: i64,
}

impl PageQuery {
    pub const DEFAULT_LIMIT: i64 = 10;
    pub const MAX_LIMIT: i64 = 100;

    /// Build a window, clamping the limit to `1..=100` and the offset to `>= 0`
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: limit.clamp(1, Self::MAX_LIMIT),
        }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(0, Self::DEFAULT_LIMIT)
    }
}

/// Filter for listing blog posts
#[derive(Debug, Clone, Default)]
pub struct PostQuery {
    pub category: Option<String>,
    pub page: PageQuery,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List users, oldest first
    async fn list(&self, page: PageQuery) -> RepoResult<Vec<User>>;

    /// Count non-deleted users
    async fn count(&self) -> RepoResult<i64>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Replace the profile of an existing user and, when given, its
    /// password hash, as one write
    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: UserId) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Blog Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a non-deleted post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<BlogPost>>;

    /// List posts, newest first
    async fn list(&self, query: &PostQuery) -> RepoResult<Vec<BlogPost>>;

    /// Posts of one user, newest first; an empty `ids` slice means all of them
    async fn find_by_user(&self, user_id: UserId, ids: &[PostId]) -> RepoResult<Vec<BlogPost>>;

    /// Create a new post
    async fn create(&self, post: &BlogPost) -> RepoResult<()>;

    /// Persist the author-controlled fields of a post (counters are not written)
    async fn update(&self, post: &BlogPost) -> RepoResult<()>;

    /// Soft delete a post
    async fn delete(&self, id: PostId) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment that belongs to the given post
    async fn find_by_id(&self, post_id: PostId, id: CommentId) -> RepoResult<Option<Comment>>;

    /// Comments of a post in creation order; an empty `ids` slice means all of them
    async fn find_by_post(&self, post_id: PostId, ids: &[CommentId]) -> RepoResult<Vec<Comment>>;

    /// Insert the comment and increment the post's `comments_count`, atomically.
    /// Returns the updated post.
    async fn create(&self, comment: &Comment) -> RepoResult<BlogPost>;

    /// Store new content for a live comment of its post
    async fn update(&self, comment: &Comment) -> RepoResult<()>;

    /// Soft delete the comment and decrement the post's `comments_count`, atomically.
    /// Fails with `CommentNotFound` if the comment does not belong to the post.
    async fn delete(&self, post_id: PostId, id: CommentId) -> RepoResult<BlogPost>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Find the reaction a user left on a post
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>>;

    /// All reactions on a post in creation order
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>>;

    /// Apply the reaction toggle for (user, post) and adjust `reactions_count`,
    /// atomically. Fails with `PostNotFound` if the post does not exist.
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        reaction_type: ReactionType,
    ) -> RepoResult<ReactionToggle>;
}
