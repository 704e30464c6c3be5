//! Reaction entity and the per-(user, post) toggle state machine
//!
//! A user holds at most one reaction on a post. Submitting a type moves the
//! pair between two states, `Absent` and `Present(T)`:
//!
//! - `Absent` + T        -> `Present(T)`, counter +1
//! - `Present(T)` + T    -> `Absent`, counter -1
//! - `Present(T)` + T'   -> `Present(T')`, counter unchanged

use chrono::{DateTime, Utc};

use super::post::BlogPost;
use crate::value_objects::{PostId, ReactionId, ReactionType, UserId};

/// Reaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub id: ReactionId,
    pub user_id: UserId,
    pub blog_post_id: PostId,
    pub reaction_type: ReactionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(user_id: UserId, blog_post_id: PostId, reaction_type: ReactionType) -> Self {
        let now = Utc::now();
        Self {
            id: ReactionId::generate(),
            user_id,
            blog_post_id,
            reaction_type,
            created_at: now,
            updated_at: now,
        }
    }
}

/// What submitting a reaction type did to a (user, post) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionTransition {
    Added(ReactionType),
    Removed(ReactionType),
    Changed {
        from: ReactionType,
        to: ReactionType,
    },
}

impl ReactionTransition {
    /// Decide the transition from the currently stored type
    pub fn decide(current: Option<ReactionType>, submitted: ReactionType) -> Self {
        match current {
            None => Self::Added(submitted),
            Some(existing) if existing == submitted => Self::Removed(existing),
            Some(existing) => Self::Changed {
                from: existing,
                to: submitted,
            },
        }
    }

    /// Change to apply to the post's `reactions_count`
    pub const fn counter_delta(self) -> i32 {
        match self {
            Self::Added(_) => 1,
            Self::Removed(_) => -1,
            Self::Changed { .. } => 0,
        }
    }

    /// Type stored for the pair after the transition
    pub const fn resulting_type(self) -> Option<ReactionType> {
        match self {
            Self::Added(t) | Self::Changed { to: t, .. } => Some(t),
            Self::Removed(_) => None,
        }
    }
}

/// Result of an atomic reaction toggle: the post with its updated counter,
/// the transition taken and the row left behind (if any)
#[derive(Debug, Clone)]
pub struct ReactionToggle {
    pub post: BlogPost,
    pub transition: ReactionTransition,
    pub reaction: Option<Reaction>,
}
