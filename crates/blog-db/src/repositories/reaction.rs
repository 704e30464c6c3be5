//! PostgreSQL implementation of ReactionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use blog_core::{
    DomainError, PostId, Reaction, ReactionRepository, ReactionToggle, ReactionTransition,
    ReactionType, RepoResult, UserId,
};

use crate::mappers::REACTION_COLUMNS;
use crate::models::ReactionModel;
use crate::pool::TxScope;

use super::error::DbResultExt;
use super::post::{adjust_counter, lock_post, Counter};

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions WHERE blog_post_id = $1 AND user_id = $2"
        );
        sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(post_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .db()?
            .map(Reaction::try_from)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions WHERE blog_post_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(post_id.into_inner())
            .fetch_all(&self.pool)
            .await
            .db()?
            .into_iter()
            .map(Reaction::try_from)
            .collect()
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        reaction_type: ReactionType,
    ) -> RepoResult<ReactionToggle> {
        let mut scope = TxScope::begin(&self.pool, "reaction.toggle").await?;
        lock_post(scope.conn(), post_id).await?;

        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions WHERE blog_post_id = $1 AND user_id = $2"
        );
        let existing = sqlx::query_as::<_, ReactionModel>(&sql)
            .bind(post_id.into_inner())
            .bind(user_id.into_inner())
            .fetch_optional(scope.conn())
            .await
            .db()?
            .map(Reaction::try_from)
            .transpose()?;

        let transition =
            ReactionTransition::decide(existing.as_ref().map(|r| r.reaction_type), reaction_type);
        debug!(?transition, "reaction transition decided");

        let reaction = match (transition, existing) {
            (ReactionTransition::Added(t), _) => {
                let reaction = Reaction::new(user_id, post_id, t);
                sqlx::query(
                    r"
                    INSERT INTO reactions (id, user_id, blog_post_id, reaction_type, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    ",
                )
                .bind(reaction.id.into_inner())
                .bind(user_id.into_inner())
                .bind(post_id.into_inner())
                .bind(t.code())
                .bind(reaction.created_at)
                .bind(reaction.updated_at)
                .execute(scope.conn())
                .await
                .unique_or(DomainError::ReactionConflict)?;
                Some(reaction)
            }
            (ReactionTransition::Removed(_), Some(current)) => {
                sqlx::query("DELETE FROM reactions WHERE id = $1")
                    .bind(current.id.into_inner())
                    .execute(scope.conn())
                    .await
                    .db()?;
                None
            }
            (ReactionTransition::Changed { to, .. }, Some(current)) => {
                let sql = format!(
                    "UPDATE reactions SET reaction_type = $2, updated_at = NOW() \
                     WHERE id = $1 RETURNING {REACTION_COLUMNS}"
                );
                let updated = sqlx::query_as::<_, ReactionModel>(&sql)
                    .bind(current.id.into_inner())
                    .bind(to.code())
                    .fetch_one(scope.conn())
                    .await
                    .db()?;
                Some(Reaction::try_from(updated)?)
            }
            (_, None) => {
                return Err(DomainError::InternalError(
                    "reaction transition without a stored reaction".to_string(),
                ))
            }
        };

        let post = adjust_counter(
            scope.conn(),
            post_id,
            Counter::Reactions,
            transition.counter_delta(),
        )
        .await?;
        scope.commit().await?;

        Ok(ReactionToggle {
            post,
            transition,
            reaction,
        })
    }
}
