//! # blog-db
//!
//! Database layer implementing the `blog-core` repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool management and schema bootstrap
//! - Transaction scope for multi-statement writes
//! - Database models with SQLx `FromRow` derives and entity mappers
//! - Repository implementations
//! - With the `memory` feature, an in-process store implementing the same traits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blog_db::{create_pool, PgPostRepository};
//! use blog_core::PostRepository;
//!
//! async fn example(config: &blog_common::DatabaseConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(config).await?;
//!     let posts = PgPostRepository::new(pool);
//!     let page = posts.list(&Default::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

#[cfg(feature = "memory")]
pub mod memory;

// Re-export commonly used types
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
pub use pool::{apply_schema, create_pool, ping, PgPool, TxScope};
pub use repositories::{
    PgCommentRepository, PgPostRepository, PgReactionRepository, PgUserRepository,
};
