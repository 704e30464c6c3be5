//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use blog_core::{PostDraft, UserProfile};

// ============================================================================
// Auth Requests
// ============================================================================

/// Profile fields shared by registration and profile updates
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProfileFields {
    #[serde(default)]
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: String,

    #[serde(default)]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: String,

    #[validate(length(max = 50))]
    pub gender: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 100))]
    pub job: Option<String>,

    #[validate(length(max = 50))]
    pub phone: Option<String>,

    #[validate(length(max = 255))]
    pub street: Option<String>,

    #[validate(length(max = 100))]
    pub city: Option<String>,

    #[validate(length(max = 100))]
    pub state: Option<String>,

    #[serde(rename = "zipcode")]
    #[validate(length(max = 20))]
    pub zip_code: Option<String>,

    #[validate(length(max = 100))]
    pub country: Option<String>,

    #[validate(url(message = "Profile picture must be a URL"))]
    pub profile_picture: Option<String>,
}

impl From<ProfileFields> for UserProfile {
    fn from(fields: ProfileFields) -> Self {
        Self {
            first_name: fields.first_name,
            last_name: fields.last_name,
            gender: fields.gender,
            date_of_birth: fields.date_of_birth,
            job: fields.job,
            phone: fields.phone,
            street: fields.street,
            city: fields.city,
            state: fields.state,
            zip_code: fields.zip_code,
            country: fields.country,
            profile_picture: fields.profile_picture,
        }
    }
}

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub profile: ProfileFields,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Replace the current user's profile; optionally change the password
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[serde(flatten)]
    #[validate(nested)]
    pub profile: ProfileFields,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: Option<String>,
}

// ============================================================================
// Blog Post Requests
// ============================================================================

/// Create or fully replace a blog post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostRequest {
    #[validate(length(min = 10, max = 255, message = "Title must be 10-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub content_text: String,

    #[serde(default)]
    #[validate(length(max = 2048, message = "Photo URL must be at most 2048 characters"))]
    pub photo_url: String,

    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,

    #[validate(length(min = 3, max = 100, message = "Category must be 3-100 characters"))]
    pub category: String,

    #[serde(default)]
    pub is_published: bool,
}

impl From<PostRequest> for PostDraft {
    fn from(req: PostRequest) -> Self {
        Self {
            title: req.title,
            content_text: req.content_text,
            photo_url: req.photo_url,
            description: req.description,
            category: req.category,
            is_published: req.is_published,
        }
    }
}

// ============================================================================
// Comment / Reaction Requests
// ============================================================================

/// Add a comment to a post, or replace the text of one
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 2, max = 500, message = "Comment must be 2-500 characters"))]
    pub content: String,
}

/// Submit a reaction; the type code is checked against the reaction enum
/// by the service so out-of-range codes get their own error code.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionRequest {
    #[serde(rename = "type")]
    pub reaction_type: i64,
}
