//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, pagination and ids.

mod auth;
mod path;
mod query;
mod validated;

pub use auth::AuthUser;
pub use path::{CommentPath, PostIdPath, UserIdPath};
pub use query::{CategoryFilter, IdFilter, Pagination, PaginationParams};
pub use validated::ValidatedJson;
