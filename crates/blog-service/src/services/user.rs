//! User service
//!
//! Profile reads, listing and self-service account changes.

use blog_common::{hash_password, validate_password_strength};
use blog_core::{DomainError, PageQuery, User, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CurrentUserResponse, PaginatedResponse, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load a live user or fail with `UserNotFound`
    pub(crate) async fn require_user(&self, user_id: UserId) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Get a user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: UserId) -> ServiceResult<UserResponse> {
        let user = self.require_user(user_id).await?;
        Ok(UserResponse::from(&user))
    }

    /// List users, oldest account first
    #[instrument(skip(self))]
    pub async fn list_users(&self, page: PageQuery) -> ServiceResult<PaginatedResponse<UserResponse>> {
        let users = self.ctx.user_repo().list(page).await?;
        let total = self.ctx.user_repo().count().await?;

        Ok(PaginatedResponse::new(
            users.iter().map(UserResponse::from).collect(),
            page.offset,
            page.limit,
            total,
        ))
    }

    /// Get the authenticated user's own account
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: UserId) -> ServiceResult<CurrentUserResponse> {
        let user = self.require_user(user_id).await?;
        Ok(CurrentUserResponse::from(&user))
    }

    /// Replace the authenticated user's profile and optionally change the password
    #[instrument(skip(self, request))]
    pub async fn update_current_user(
        &self,
        user_id: UserId,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let mut user = self.require_user(user_id).await?;

        let password_hash = match &request.password {
            Some(password) => {
                validate_password_strength(password)?;
                Some(hash_password(password)?)
            }
            None => None,
        };

        user.set_profile(request.profile.into());
        self.ctx
            .user_repo()
            .update(&user, password_hash.as_deref())
            .await?;

        info!(
            user_id = %user_id,
            password_changed = password_hash.is_some(),
            "Profile updated"
        );

        Ok(CurrentUserResponse::from(&user))
    }

    /// Soft delete the authenticated user's account
    #[instrument(skip(self))]
    pub async fn delete_current_user(&self, user_id: UserId) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;
        info!(user_id = %user_id, "Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::{LoginRequest, ProfileFields};
    use crate::services::test_support::{context, user};
    use crate::services::AuthService;

    #[tokio::test]
    async fn test_get_unknown_user() {
        let ctx = context();
        let err = UserService::new(&ctx)
            .get_user(UserId::generate())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_USER");
    }

    #[tokio::test]
    async fn test_list_users_paginates() {
        let ctx = context();
        for i in 0..3 {
            user(&ctx, &format!("user{i}@example.com")).await;
        }

        let page = UserService::new(&ctx)
            .list_users(PageQuery::new(1, 1))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.offset, 1);
    }

    #[tokio::test]
    async fn test_update_replaces_profile_and_password() {
        let ctx = context();
        let id = user(&ctx, "ada@example.com").await;
        let service = UserService::new(&ctx);

        let updated = service
            .update_current_user(
                id,
                UpdateUserRequest {
                    profile: ProfileFields {
                        last_name: "Lovelace".to_string(),
                        city: Some("London".to_string()),
                        ..ProfileFields::default()
                    },
                    password: Some("NewPassword9".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.public.last_name, "Lovelace");
        // Full replace: the first name given at registration is gone.
        assert!(updated.public.first_name.is_empty());

        let login = AuthService::new(&ctx)
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "NewPassword9".to_string(),
            })
            .await;
        assert!(login.is_ok());
    }

    #[tokio::test]
    async fn test_rejected_password_leaves_profile_untouched() {
        let ctx = context();
        let id = user(&ctx, "ada@example.com").await;
        let service = UserService::new(&ctx);

        let err = service
            .update_current_user(
                id,
                UpdateUserRequest {
                    profile: ProfileFields {
                        first_name: "Changed".to_string(),
                        ..ProfileFields::default()
                    },
                    password: Some("alllowercase".to_string()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);

        let current = service.get_current_user(id).await.unwrap();
        assert_eq!(current.public.first_name, "Test");
        let login = AuthService::new(&ctx)
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "Password123".to_string(),
            })
            .await;
        assert!(login.is_ok());
    }

    #[tokio::test]
    async fn test_delete_hides_user() {
        let ctx = context();
        let id = user(&ctx, "ada@example.com").await;
        let service = UserService::new(&ctx);

        service.delete_current_user(id).await.unwrap();
        assert!(service.get_current_user(id).await.is_err());
        assert!(service.delete_current_user(id).await.is_err());
    }
}
