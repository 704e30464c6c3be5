//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;
use uuid::Uuid;

use blog_core::{BlogPost, DomainError, PostId, PostQuery, PostRepository, RepoResult, UserId};

use crate::mappers::POST_COLUMNS;
use crate::models::BlogPostModel;

use super::error::DbResultExt;

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Lock a live post row for the rest of the transaction.
///
/// # Errors
/// `PostNotFound` if the post does not exist or is deleted
pub(super) async fn lock_post(conn: &mut PgConnection, id: PostId) -> RepoResult<()> {
    sqlx::query_scalar::<_, Uuid>(
        r"
        SELECT id FROM blog_posts
        WHERE id = $1 AND deleted_at IS NULL
        FOR UPDATE
        ",
    )
    .bind(id.into_inner())
    .fetch_optional(conn)
    .await
    .db()?
    .map(|_| ())
    .ok_or(DomainError::PostNotFound(id))
}

/// Which denormalized counter to move
#[derive(Debug, Clone, Copy)]
pub(super) enum Counter {
    Comments,
    Reactions,
}

/// Add `delta` to a post counter and return the updated post.
/// Must run on a connection that already holds the post lock.
pub(super) async fn adjust_counter(
    conn: &mut PgConnection,
    id: PostId,
    counter: Counter,
    delta: i32,
) -> RepoResult<BlogPost> {
    let column = match counter {
        Counter::Comments => "comments_count",
        Counter::Reactions => "reactions_count",
    };
    let sql = format!(
        "UPDATE blog_posts SET {column} = {column} + $2, updated_at = NOW() \
         WHERE id = $1 AND deleted_at IS NULL RETURNING {POST_COLUMNS}"
    );
    sqlx::query_as::<_, BlogPostModel>(&sql)
        .bind(id.into_inner())
        .bind(delta)
        .fetch_optional(conn)
        .await
        .db()?
        .map(BlogPost::from)
        .ok_or(DomainError::PostNotFound(id))
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<BlogPost>> {
        let sql =
            format!("SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1 AND deleted_at IS NULL");
        let result = sqlx::query_as::<_, BlogPostModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .db()?;

        Ok(result.map(BlogPost::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &PostQuery) -> RepoResult<Vec<BlogPost>> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM blog_posts \
             WHERE deleted_at IS NULL AND ($1::TEXT IS NULL OR category = $1) \
             ORDER BY created_at DESC, id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, BlogPostModel>(&sql)
            .bind(query.category.as_deref())
            .bind(query.page.limit)
            .bind(query.page.offset)
            .fetch_all(&self.pool)
            .await
            .db()?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId, ids: &[PostId]) -> RepoResult<Vec<BlogPost>> {
        let ids: Vec<Uuid> = ids.iter().map(|id| id.into_inner()).collect();
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM blog_posts \
             WHERE user_id = $1 AND deleted_at IS NULL \
               AND (CARDINALITY($2::UUID[]) = 0 OR id = ANY($2)) \
             ORDER BY created_at DESC, id DESC"
        );
        let rows = sqlx::query_as::<_, BlogPostModel>(&sql)
            .bind(user_id.into_inner())
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .db()?;

        Ok(rows.into_iter().map(BlogPost::from).collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &BlogPost) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO blog_posts (id, user_id, title, content_text, photo_url, description,
                                    category, comments_count, reactions_count, is_published,
                                    published_at, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(post.id.into_inner())
        .bind(post.user_id.into_inner())
        .bind(&post.title)
        .bind(&post.content_text)
        .bind(&post.photo_url)
        .bind(&post.description)
        .bind(&post.category)
        .bind(post.comments_count)
        .bind(post.reactions_count)
        .bind(post.is_published)
        .bind(post.published_at)
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .unique_or(DomainError::PostTitleExists)?;

        Ok(())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn update(&self, post: &BlogPost) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE blog_posts
            SET title = $2, content_text = $3, photo_url = $4, description = $5,
                category = $6, is_published = $7, published_at = $8, updated_at = $9
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(post.id.into_inner())
        .bind(&post.title)
        .bind(&post.content_text)
        .bind(&post.photo_url)
        .bind(&post.description)
        .bind(&post.category)
        .bind(post.is_published)
        .bind(post.published_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await
        .unique_or(DomainError::PostTitleExists)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(post.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE blog_posts
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .db()?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PostNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }
}
