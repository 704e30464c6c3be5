//! Transaction scope for multi-statement writes
//!
//! A `TxScope` owns an open transaction. Statements run against `conn()`;
//! `commit` ends the scope. A scope dropped without commit (early return on
//! `?`, panic, cancelled future) is rolled back by SQLx.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};
use tracing::debug;

use blog_core::DomainError;

use crate::repositories::DbResultExt;

pub struct TxScope {
    tx: Transaction<'static, Postgres>,
    operation: &'static str,
}

impl TxScope {
    /// Open a transaction on a pooled connection
    pub async fn begin(pool: &PgPool, operation: &'static str) -> Result<Self, DomainError> {
        let tx = pool.begin().await.db()?;
        debug!(operation, "transaction started");
        Ok(Self { tx, operation })
    }

    /// Connection to run statements on
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    /// Commit every statement run in this scope
    pub async fn commit(self) -> Result<(), DomainError> {
        let operation = self.operation;
        self.tx.commit().await.db()?;
        debug!(operation, "transaction committed");
        Ok(())
    }
}

impl std::fmt::Debug for TxScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxScope")
            .field("operation", &self.operation)
            .finish_non_exhaustive()
    }
}
