//! # blog-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BlogPost, Comment, PostDraft, Reaction, ReactionToggle, ReactionTransition, User,
    UserProfile, UserRole,
};
pub use error::DomainError;
pub use traits::{
    CommentRepository, PageQuery, PostQuery, PostRepository, ReactionRepository, RepoResult,
    UserRepository,
};
pub use value_objects::{CommentId, IdParseError, PostId, ReactionId, ReactionType, UserId};
