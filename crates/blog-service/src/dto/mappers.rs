//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use blog_core::{BlogPost, Comment, Reaction, User};

use super::responses::{
    CommentResponse, CurrentUserResponse, PostResponse, ReactionResponse, UserResponse,
};

/// Blank optional text reads as absent
fn present(value: Option<&str>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty()).map(String::from)
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        let p = &user.profile;
        Self {
            id: user.id.to_string(),
            first_name: p.first_name.clone(),
            last_name: p.last_name.clone(),
            gender: present(p.gender.as_deref()),
            date_of_birth: p.date_of_birth,
            job: present(p.job.as_deref()),
            city: present(p.city.as_deref()),
            state: present(p.state.as_deref()),
            country: present(p.country.as_deref()),
            profile_picture: present(p.profile_picture.as_deref()),
            created_at: user.created_at,
        }
    }
}

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        let p = &user.profile;
        Self {
            public: UserResponse::from(user),
            email: user.email.clone(),
            phone: present(p.phone.as_deref()),
            street: present(p.street.as_deref()),
            zip_code: present(p.zip_code.as_deref()),
            role: user.role.as_str(),
            updated_at: user.updated_at,
        }
    }
}

// ============================================================================
// Blog Post Mappers
// ============================================================================

impl From<&BlogPost> for PostResponse {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            user_id: post.user_id.to_string(),
            title: post.title.clone(),
            content_text: post.content_text.clone(),
            photo_url: post.photo_url.clone(),
            description: post.description.clone(),
            category: post.category.clone(),
            comments_count: post.comments_count,
            reactions_count: post.reactions_count,
            is_published: post.is_published,
            published_at: post.published_at,
            created_at: post.created_at,
            updated_at: post.updated_at,
            comments: None,
            reactions: None,
        }
    }
}

impl PostResponse {
    /// Embed the post's comments
    pub fn with_comments(mut self, comments: &[Comment]) -> Self {
        self.comments = Some(comments.iter().map(CommentResponse::from).collect());
        self
    }

    /// Embed the post's reactions
    pub fn with_reactions(mut self, reactions: &[Reaction]) -> Self {
        self.reactions = Some(reactions.iter().map(ReactionResponse::from).collect());
        self
    }
}

// ============================================================================
// Comment / Reaction Mappers
// ============================================================================

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            user_id: comment.user_id.to_string(),
            blog_post_id: comment.blog_post_id.to_string(),
            content: comment.content.clone(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.to_string(),
            user_id: reaction.user_id.to_string(),
            blog_post_id: reaction.blog_post_id.to_string(),
            reaction_type: reaction.reaction_type.code(),
            name: reaction.reaction_type.name(),
            created_at: reaction.created_at,
            updated_at: reaction.updated_at,
        }
    }
}
