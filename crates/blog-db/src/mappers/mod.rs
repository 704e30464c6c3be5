//! Entity to model mappers
//!
//! `From<Model> for Entity` converts rows into domain objects. Reactions use
//! `TryFrom` since a stored type code outside the enum is a data error.
//! The `*_COLUMNS` constants keep SELECT lists in step with the models.

mod comment;
mod post;
mod reaction;
mod user;

pub use comment::COMMENT_COLUMNS;
pub use post::POST_COLUMNS;
pub use reaction::REACTION_COLUMNS;
pub use user::USER_COLUMNS;
