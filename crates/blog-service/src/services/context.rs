//! Service context - dependency container for services
//!
//! Holds the repositories, the JWT service and, when running on PostgreSQL,
//! the pool used for readiness checks. Built once at startup and shared
//! behind an `Arc`.

use std::sync::Arc;

use blog_common::JwtService;
use blog_core::{CommentRepository, PostRepository, ReactionRepository, UserRepository};
use blog_db::{
    PgCommentRepository, PgPool, PgPostRepository, PgReactionRepository, PgUserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool; `None` when backed by the in-memory store
    pool: Option<PgPool>,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Wire every repository to the PostgreSQL pool
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self {
            user_repo: Arc::new(PgUserRepository::new(pool.clone())),
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            reaction_repo: Arc::new(PgReactionRepository::new(pool.clone())),
            pool: Some(pool),
            jwt_service,
        }
    }

    /// Wire every repository to one fresh in-memory store
    #[cfg(any(test, feature = "memory"))]
    pub fn in_memory(jwt_service: Arc<JwtService>) -> Self {
        let store = Arc::new(blog_db::MemoryStore::new());
        Self {
            pool: None,
            user_repo: store.clone(),
            post_repo: store.clone(),
            comment_repo: store.clone(),
            reaction_repo: store,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    /// Check that the backing store answers
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if the database cannot be reached
    pub async fn check_store(&self) -> ServiceResult<()> {
        match &self.pool {
            Some(pool) => blog_db::ping(pool)
                .await
                .map_err(|e| ServiceError::internal(e.to_string())),
            None => Ok(()),
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the blog post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("jwt_service", &self.jwt_service)
            .finish()
    }
}
