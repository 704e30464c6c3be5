//! Database connection pool management

mod postgres;
mod tx;

pub use postgres::{apply_schema, create_pool, ping};
pub use tx::TxScope;

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
