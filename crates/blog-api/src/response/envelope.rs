use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success body
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: &'static str,
    pub details: T,
}

/// Handler return value that renders as an [`Envelope`]
#[derive(Debug)]
pub struct ApiResponse<T>(StatusCode, Envelope<T>);

impl<T> ApiResponse<T> {
    fn with_status(status: StatusCode, message: &'static str, details: T) -> Self {
        Self(
            status,
            Envelope {
                status: status.as_u16(),
                message,
                details,
            },
        )
    }

    pub fn ok(message: &'static str, details: T) -> Self {
        Self::with_status(StatusCode::OK, message, details)
    }

    pub fn created(message: &'static str, details: T) -> Self {
        Self::with_status(StatusCode::CREATED, message, details)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.0, Json(self.1)).into_response()
    }
}
