//! Authentication handlers
//!
//! Endpoints for user registration, login and token refresh.

use axum::extract::State;
use blog_service::dto::{AuthResponse, LoginRequest, RefreshTokenRequest, RegisterRequest};
use blog_service::AuthService;

use crate::extractors::ValidatedJson;
use crate::response::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Register a new user
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<ApiResponse<AuthResponse>> {
    let service = AuthService::new(state.services());
    let response = service.register(request).await?;
    Ok(ApiResponse::created("user created successfully", response))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<ApiResponse<AuthResponse>> {
    let service = AuthService::new(state.services());
    let response = service.login(request).await?;
    Ok(ApiResponse::ok("login successful", response))
}

/// Exchange a refresh token for a new token pair
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> ApiResult<ApiResponse<AuthResponse>> {
    let service = AuthService::new(state.services());
    let response = service.refresh_tokens(request).await?;
    Ok(ApiResponse::ok("token refreshed successfully", response))
}
