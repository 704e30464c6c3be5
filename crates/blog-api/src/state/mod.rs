//! Shared handler state

use std::sync::Arc;

use blog_common::{AppConfig, AppError, TokenType};
use blog_core::UserId;
use blog_service::ServiceContext;

/// Cloned into every handler; both halves are reference counted
#[derive(Clone)]
pub struct AppState {
    services: Arc<ServiceContext>,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(services: ServiceContext, config: AppConfig) -> Self {
        Self {
            services: Arc::new(services),
            config: Arc::new(config),
        }
    }

    pub fn services(&self) -> &ServiceContext {
        &self.services
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve a bearer access token to the user it was issued to
    pub fn authenticate(&self, token: &str) -> Result<UserId, AppError> {
        self.services
            .jwt_service()
            .verify(token, TokenType::Access)?
            .user_id()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("env", &self.config.app.env)
            .field("address", &self.config.api.address())
            .finish_non_exhaustive()
    }
}
