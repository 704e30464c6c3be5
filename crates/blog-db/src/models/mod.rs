//! Database models - SQLx-compatible structs for PostgreSQL tables

mod comment;
mod post;
mod reaction;
mod user;

pub use comment::CommentModel;
pub use post::BlogPostModel;
pub use reaction::ReactionModel;
pub use user::UserModel;
