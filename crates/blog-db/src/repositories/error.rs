//! sqlx error translation

use blog_core::{DomainError, RepoResult};

/// Turns `sqlx` failures into [`DomainError`]s at the repository boundary.
pub(crate) trait DbResultExt<T> {
    /// Any failure becomes `DatabaseError`
    fn db(self) -> RepoResult<T>;

    /// A unique-constraint violation becomes `conflict`; anything else
    /// becomes `DatabaseError`
    fn unique_or(self, conflict: DomainError) -> RepoResult<T>;
}

impl<T> DbResultExt<T> for Result<T, sqlx::Error> {
    fn db(self) -> RepoResult<T> {
        self.map_err(|e| DomainError::DatabaseError(e.to_string()))
    }

    fn unique_or(self, conflict: DomainError) -> RepoResult<T> {
        self.map_err(|e| match e.as_database_error() {
            Some(db) if db.is_unique_violation() => conflict,
            _ => DomainError::DatabaseError(e.to_string()),
        })
    }
}
