//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in blog-core.
//! Comment and reaction writes run inside a `TxScope` with the parent post
//! row locked, so the child row and the post counter move together.

mod comment;
mod error;
mod post;
mod reaction;
mod user;

pub use comment::PgCommentRepository;
pub(crate) use error::DbResultExt;
pub use post::PgPostRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
