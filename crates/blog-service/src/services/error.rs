//! Service layer error type
//!
//! Services return `ServiceResult`; repository (`DomainError`) and
//! auth/infrastructure (`AppError`) failures both convert with `?`.

use blog_common::{domain_status, AppError};
use blog_core::DomainError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Not found, ownership, validation, conflict or store failure
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Credentials, tokens, hashing
    #[error(transparent)]
    App(#[from] AppError),

    /// Request shape rejected before it reached the domain
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status(e),
            Self::App(e) => e.status_code(),
            Self::Validation(_) => 400,
            Self::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Domain(e) => e.code(),
            Self::App(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::PostId;

    #[test]
    fn test_domain_error_mapping() {
        let err = ServiceError::from(DomainError::PostNotFound(PostId::generate()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_BLOG_POST");

        let err = ServiceError::from(DomainError::NotPostOwner);
        assert_eq!(err.status_code(), 403);

        let err = ServiceError::from(DomainError::ReactionConflict);
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_app_error_mapping() {
        let err = ServiceError::from(AppError::InvalidCredentials);
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "INVALID_CREDENTIALS");
        assert_eq!(err.to_string(), "Invalid email or password");
    }

    #[test]
    fn test_validation_error() {
        let err = ServiceError::validation("bad id");
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
