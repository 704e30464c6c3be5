//! Value objects - immutable types identified by their value

mod ids;
mod reaction_type;

pub use ids::{CommentId, IdParseError, PostId, ReactionId, UserId};
pub use reaction_type::ReactionType;
