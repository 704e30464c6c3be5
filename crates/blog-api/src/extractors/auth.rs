//! Bearer authentication

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use blog_core::UserId;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller identified by a valid access token.
///
/// Handlers that take this argument reject anonymous requests with 401
/// before their body runs.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        else {
            return Err(ApiError::MissingAuth);
        };

        match AppState::from_ref(state).authenticate(bearer.token()) {
            Ok(user_id) => Ok(Self { user_id }),
            Err(e) => {
                tracing::debug!(error = %e, path = %parts.uri.path(), "token rejected");
                Err(e.into())
            }
        }
    }
}
