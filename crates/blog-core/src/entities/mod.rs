//! Domain entities - core business objects

mod comment;
mod post;
mod reaction;
mod user;

pub use comment::Comment;
pub use post::{BlogPost, PostDraft};
pub use reaction::{Reaction, ReactionToggle, ReactionTransition};
pub use user::{User, UserProfile, UserRole};
