//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use blog_core::{BlogPost, Comment, CommentId, CommentRepository, DomainError, PostId, RepoResult};

use crate::mappers::COMMENT_COLUMNS;
use crate::models::CommentModel;
use crate::pool::TxScope;

use super::error::DbResultExt;
use super::post::{adjust_counter, lock_post, Counter};

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, post_id: PostId, id: CommentId) -> RepoResult<Option<Comment>> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE id = $1 AND blog_post_id = $2 AND deleted_at IS NULL"
        );
        let result = sqlx::query_as::<_, CommentModel>(&sql)
            .bind(id.into_inner())
            .bind(post_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .db()?;

        Ok(result.map(Comment::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId, ids: &[CommentId]) -> RepoResult<Vec<Comment>> {
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE blog_post_id = $1 AND deleted_at IS NULL \
               AND (CARDINALITY($2::UUID[]) = 0 OR id = ANY($2)) \
             ORDER BY created_at ASC, id ASC"
        );
        let rows = sqlx::query_as::<_, CommentModel>(&sql)
            .bind(post_id.into_inner())
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .db()?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.blog_post_id, comment_id = %comment.id))]
    async fn create(&self, comment: &Comment) -> RepoResult<BlogPost> {
        let mut scope = TxScope::begin(&self.pool, "comment.create").await?;
        lock_post(scope.conn(), comment.blog_post_id).await?;

        sqlx::query(
            r"
            INSERT INTO comments (id, user_id, blog_post_id, content, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.user_id.into_inner())
        .bind(comment.blog_post_id.into_inner())
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(scope.conn())
        .await
        .db()?;

        let post = adjust_counter(scope.conn(), comment.blog_post_id, Counter::Comments, 1).await?;
        scope.commit().await?;
        Ok(post)
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.blog_post_id, comment_id = %comment.id))]
    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE comments
            SET content = $3, updated_at = $4
            WHERE id = $1 AND blog_post_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(comment.id.into_inner())
        .bind(comment.blog_post_id.into_inner())
        .bind(&comment.content)
        .bind(comment.updated_at)
        .execute(&self.pool)
        .await
        .db()?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(comment.id));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: PostId, id: CommentId) -> RepoResult<BlogPost> {
        let mut scope = TxScope::begin(&self.pool, "comment.delete").await?;
        lock_post(scope.conn(), post_id).await?;

        let result = sqlx::query(
            r"
            UPDATE comments
            SET deleted_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND blog_post_id = $2 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .bind(post_id.into_inner())
        .execute(scope.conn())
        .await
        .db()?;

        if result.rows_affected() == 0 {
            return Err(DomainError::CommentNotFound(id));
        }

        let post = adjust_counter(scope.conn(), post_id, Counter::Comments, -1).await?;
        scope.commit().await?;
        Ok(post)
    }
}
