//! Test fixtures and data generators
//!
//! Request bodies the client sends and the envelope payloads it reads back.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Success envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    pub details: T,
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub city: String,
    pub zipcode: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("writer{suffix}@example.com"),
            password: "TestPass123".to_string(),
            first_name: "Test".to_string(),
            last_name: format!("Writer{suffix}"),
            city: "Lisbon".to_string(),
            zipcode: "1000-001".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// User response (current-user view; public fields are flattened in)
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

/// Users page
#[derive(Debug, Deserialize)]
pub struct UserPage {
    pub items: Vec<UserResponse>,
    pub pagination: PageMeta,
}

#[derive(Debug, Deserialize)]
pub struct PageMeta {
    pub offset: i64,
    pub limit: i64,
    pub total: i64,
}

/// Create or replace a post
#[derive(Debug, Clone, Serialize)]
pub struct PostRequest {
    pub title: String,
    pub content_text: String,
    pub photo_url: String,
    pub description: String,
    pub category: String,
    pub is_published: bool,
}

impl PostRequest {
    pub fn titled(title: &str) -> Self {
        Self {
            title: title.to_string(),
            content_text: "Body of the post".to_string(),
            photo_url: "https://img.example/cover.png".to_string(),
            description: "A short description".to_string(),
            category: "travel".to_string(),
            is_published: true,
        }
    }

    pub fn unique() -> Self {
        Self::titled(&format!("Blog post number {}", unique_suffix()))
    }
}

/// Post response
#[derive(Debug, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub category: String,
    pub comments_count: i32,
    pub reactions_count: i32,
    pub is_published: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<CommentResponse>>,
    #[serde(default)]
    pub reactions: Option<Vec<ReactionResponse>>,
}

/// Comment response
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub content: String,
}

/// Reaction response
#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub user_id: String,
    #[serde(rename = "type")]
    pub reaction_type: i16,
    pub name: String,
}
