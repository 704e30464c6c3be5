//! Shared fixtures for service tests

use std::sync::Arc;

use blog_common::JwtService;
use blog_core::{PostId, UserId};

use crate::dto::{AuthResponse, PostRequest, ProfileFields, RegisterRequest};

use super::{AuthService, PostService, ServiceContext};

pub fn context() -> ServiceContext {
    ServiceContext::in_memory(Arc::new(JwtService::new("service-test-secret", 900, 3600)))
}

pub async fn register(ctx: &ServiceContext, email: &str) -> AuthResponse {
    AuthService::new(ctx)
        .register(RegisterRequest {
            email: email.to_string(),
            password: "Password123".to_string(),
            profile: ProfileFields {
                first_name: "Test".to_string(),
                ..ProfileFields::default()
            },
        })
        .await
        .unwrap()
}

pub async fn user(ctx: &ServiceContext, email: &str) -> UserId {
    register(ctx, email).await.user.public.id.parse().unwrap()
}

pub fn post_request(title: &str, published: bool) -> PostRequest {
    PostRequest {
        title: title.to_string(),
        content_text: "Some body text".to_string(),
        photo_url: String::new(),
        description: String::new(),
        category: "general".to_string(),
        is_published: published,
    }
}

pub async fn post(ctx: &ServiceContext, owner: UserId, title: &str) -> PostId {
    PostService::new(ctx)
        .create(owner, post_request(title, true))
        .await
        .unwrap()
        .id
        .parse()
        .unwrap()
}
