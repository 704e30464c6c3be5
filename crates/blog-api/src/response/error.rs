use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use blog_common::AppError;
use blog_service::ServiceError;
use serde::Serialize;
use validator::ValidationErrors;

/// Anything a handler or extractor can fail with
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Token and credential failures raised before a service runs
    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Body parsed but broke a field rule
    #[error("request validation failed")]
    Validation(#[from] ValidationErrors),

    /// Path, query or body could not be parsed at all
    #[error("{message}")]
    Malformed {
        code: &'static str,
        message: String,
    },

    #[error("Authorization header is missing or not a bearer token")]
    MissingAuth,
}

impl ApiError {
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::Malformed {
            code: "INVALID_PATH_PARAMETER",
            message: message.into(),
        }
    }

    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::Malformed {
            code: "INVALID_QUERY_PARAMETER",
            message: message.into(),
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self::Malformed {
            code: "INVALID_BODY",
            message: message.into(),
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let raw = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Validation(_) | Self::Malformed { .. } => 400,
            Self::MissingAuth => 401,
        };
        StatusCode::from_u16(raw).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Malformed { code, .. } => *code,
            Self::MissingAuth => "MISSING_AUTHORIZATION",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    /// Per-field messages for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 5xx causes go to the log, never to the client
        let message = if status.is_server_error() {
            tracing::error!(error = ?self, code = self.error_code(), "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let details = match &self {
            Self::Validation(errors) => serde_json::to_value(errors.field_errors()).ok(),
            _ => None,
        };

        let body = ErrorBody {
            status: status.as_u16(),
            message,
            error: ErrorDetail {
                code: self.error_code(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::{DomainError, PostId};

    fn service(e: DomainError) -> ApiError {
        ServiceError::from(e).into()
    }

    #[test]
    fn test_status_and_code() {
        let cases = [
            (ApiError::MissingAuth, 401, "MISSING_AUTHORIZATION"),
            (ApiError::invalid_path("x"), 400, "INVALID_PATH_PARAMETER"),
            (ApiError::invalid_query("x"), 400, "INVALID_QUERY_PARAMETER"),
            (ApiError::invalid_body("x"), 400, "INVALID_BODY"),
            (service(DomainError::PostNotFound(PostId::generate())), 404, "UNKNOWN_BLOG_POST"),
            (service(DomainError::NotPostOwner), 403, "NOT_POST_OWNER"),
            (service(DomainError::InvalidReactionType(9)), 400, "INVALID_REACTION_TYPE"),
            (AppError::TokenExpired.into(), 401, "TOKEN_EXPIRED"),
        ];
        for (err, status, code) in cases {
            assert_eq!(err.status_code().as_u16(), status, "{err}");
            assert_eq!(err.error_code(), code);
        }
    }

    #[test]
    fn test_server_errors_are_masked() {
        let err = service(DomainError::DatabaseError("connection refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
