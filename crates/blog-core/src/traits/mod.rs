//! Repository traits (ports)

mod repositories;

pub use repositories::{
    CommentRepository, PageQuery, PostQuery, PostRepository, ReactionRepository, RepoResult,
    UserRepository,
};
