//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services borrow a [`ServiceContext`] for the duration of one call:
//!
//! ```rust,ignore
//! let post = PostService::new(&ctx).create(user_id, request).await?;
//! ```

pub mod dto;
pub mod services;

pub use services::{
    AuthService, CommentService, PostService, ReactionService, ServiceContext, ServiceError,
    ServiceResult, UserService,
};
