//! Blog post entity - the aggregate that owns comment and reaction counters

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{PostId, UserId};

/// The whitelist of fields an author controls.
///
/// Creating a post and updating it both take a full draft; an update never
/// merges with the stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content_text: String,
    pub photo_url: String,
    pub description: String,
    pub category: String,
    pub is_published: bool,
}

impl PostDraft {
    pub const TITLE_MIN: usize = 10;
    pub const TITLE_MAX: usize = 255;
    pub const CATEGORY_MIN: usize = 3;
    pub const CATEGORY_MAX: usize = 100;
    pub const DESCRIPTION_MAX: usize = 1000;

    /// Check field lengths (counted in characters)
    ///
    /// # Errors
    /// Returns `DomainError::InvalidLength` naming the first offending field
    pub fn validate(&self) -> Result<(), DomainError> {
        check_length("title", &self.title, Self::TITLE_MIN, Self::TITLE_MAX)?;
        check_length(
            "category",
            &self.category,
            Self::CATEGORY_MIN,
            Self::CATEGORY_MAX,
        )?;
        check_length("description", &self.description, 0, Self::DESCRIPTION_MAX)?;
        Ok(())
    }
}

pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), DomainError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(DomainError::InvalidLength { field, min, max });
    }
    Ok(())
}

/// Blog post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub content_text: String,
    pub photo_url: String,
    pub description: String,
    pub category: String,
    pub comments_count: i32,
    pub reactions_count: i32,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post owned by `user_id` with zeroed counters
    pub fn new(user_id: UserId, draft: PostDraft) -> Self {
        let now = Utc::now();
        Self {
            id: PostId::generate(),
            user_id,
            published_at: draft.is_published.then_some(now),
            title: draft.title,
            content_text: draft.content_text,
            photo_url: draft.photo_url,
            description: draft.description,
            category: draft.category,
            comments_count: 0,
            reactions_count: 0,
            is_published: draft.is_published,
            created_at: now,
            updated_at: now,
        }
    }

    /// Ownership check
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    /// Replace every author-controlled field with the draft.
    ///
    /// `published_at` is stamped when the post becomes published, kept while
    /// it stays published and cleared when it is unpublished. Counters are
    /// untouched.
    pub fn apply(&mut self, draft: PostDraft) {
        let now = Utc::now();
        self.published_at = match (self.is_published, draft.is_published) {
            (false, true) => Some(now),
            (true, true) => self.published_at.or(Some(now)),
            (_, false) => None,
        };
        self.title = draft.title;
        self.content_text = draft.content_text;
        self.photo_url = draft.photo_url;
        self.description = draft.description;
        self.category = draft.category;
        self.is_published = draft.is_published;
        self.updated_at = now;
    }

    /// Adjust the reaction counter by a transition delta
    pub fn apply_reaction_delta(&mut self, delta: i32) {
        self.reactions_count += delta;
        self.updated_at = Utc::now();
    }

    /// Adjust the comment counter
    pub fn apply_comment_delta(&mut self, delta: i32) {
        self.comments_count += delta;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(published: bool) -> PostDraft {
        PostDraft {
            title: "My First Blog Post".to_string(),
            content_text: "Hello".to_string(),
            photo_url: String::new(),
            description: String::new(),
            category: "general".to_string(),
            is_published: published,
        }
    }

    #[test]
    fn test_new_post_has_zero_counters() {
        let owner = UserId::generate();
        let post = BlogPost::new(owner, draft(false));
        assert_eq!(post.comments_count, 0);
        assert_eq!(post.reactions_count, 0);
        assert!(post.is_owned_by(owner));
        assert!(!post.is_owned_by(UserId::generate()));
        assert!(post.published_at.is_none());
    }

    #[test]
    fn test_new_published_post_is_stamped() {
        let post = BlogPost::new(UserId::generate(), draft(true));
        assert!(post.published_at.is_some());
    }

    #[test]
    fn test_apply_is_full_replace() {
        let mut post = BlogPost::new(UserId::generate(), draft(false));
        post.description = "old description".to_string();
        post.reactions_count = 3;

        let mut next = draft(false);
        next.title = "A Completely New Title".to_string();
        post.apply(next);

        assert_eq!(post.title, "A Completely New Title");
        assert!(post.description.is_empty());
        assert_eq!(post.reactions_count, 3);
    }

    #[test]
    fn test_apply_publication_transitions() {
        let mut post = BlogPost::new(UserId::generate(), draft(false));

        post.apply(draft(true));
        let stamped = post.published_at;
        assert!(stamped.is_some());

        post.apply(draft(true));
        assert_eq!(post.published_at, stamped);

        post.apply(draft(false));
        assert!(post.published_at.is_none());
    }

    #[test]
    fn test_validate_title_bounds() {
        let mut d = draft(false);
        d.title = "short".to_string();
        assert!(matches!(
            d.validate(),
            Err(DomainError::InvalidLength { field: "title", .. })
        ));

        d.title = "x".repeat(255);
        assert!(d.validate().is_ok());

        d.title = "x".repeat(256);
        assert!(d.validate().is_err());
    }

    #[test]
    fn test_validate_counts_characters() {
        let mut d = draft(false);
        // 10 multi-byte characters
        d.title = "éééééééééé".to_string();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_category() {
        let mut d = draft(false);
        d.category = "ab".to_string();
        assert!(matches!(
            d.validate(),
            Err(DomainError::InvalidLength { field: "category", .. })
        ));
    }

    #[test]
    fn test_counter_deltas() {
        let mut post = BlogPost::new(UserId::generate(), draft(true));
        post.apply_reaction_delta(1);
        post.apply_comment_delta(1);
        post.apply_comment_delta(1);
        post.apply_comment_delta(-1);
        assert_eq!(post.reactions_count, 1);
        assert_eq!(post.comments_count, 1);
    }
}
