//! Path parameter extractors
//!
//! Ids arrive as strings and are parsed here so a malformed id is a 400
//! rather than a routing miss.

use blog_core::{CommentId, PostId, UserId};
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters with post_id
#[derive(Debug, Deserialize)]
pub struct PostIdPath {
    pub post_id: String,
}

impl PostIdPath {
    /// Parse post_id
    pub fn post_id(&self) -> Result<PostId, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }
}

/// Path parameters with user_id
#[derive(Debug, Deserialize)]
pub struct UserIdPath {
    pub user_id: String,
}

impl UserIdPath {
    /// Parse user_id
    pub fn user_id(&self) -> Result<UserId, ApiError> {
        self.user_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid user_id format"))
    }
}

/// Path parameters with post_id and comment_id
#[derive(Debug, Deserialize)]
pub struct CommentPath {
    pub post_id: String,
    pub comment_id: String,
}

impl CommentPath {
    /// Parse post_id
    pub fn post_id(&self) -> Result<PostId, ApiError> {
        self.post_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid post_id format"))
    }

    /// Parse comment_id
    pub fn comment_id(&self) -> Result<CommentId, ApiError> {
        self.comment_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid comment_id format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_ids() {
        let path = CommentPath {
            post_id: PostId::generate().to_string(),
            comment_id: "42".to_string(),
        };
        assert!(path.post_id().is_ok());
        assert_eq!(
            path.comment_id().unwrap_err().error_code(),
            "INVALID_PATH_PARAMETER"
        );
    }
}
