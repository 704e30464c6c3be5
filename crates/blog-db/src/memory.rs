//! In-process store implementing every repository trait
//!
//! All tables live behind one `parking_lot::Mutex`, so each trait method,
//! including the multi-row comment and reaction writes, observes and mutates
//! a consistent snapshot. Soft-deleted rows stay in the maps with a marker,
//! matching the PostgreSQL read filters.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::instrument;

use blog_core::{
    BlogPost, Comment, CommentId, CommentRepository, DomainError, PageQuery, PostId, PostQuery,
    PostRepository, Reaction, ReactionRepository, ReactionToggle, ReactionTransition,
    ReactionType, RepoResult, User, UserId, UserRepository,
};

struct Row<T> {
    value: T,
    seq: u64,
    deleted: bool,
}

#[derive(Default)]
struct Tables {
    next_seq: u64,
    users: HashMap<UserId, Row<(User, String)>>,
    posts: HashMap<PostId, Row<BlogPost>>,
    comments: HashMap<CommentId, Row<Comment>>,
    reactions: HashMap<(UserId, PostId), Row<Reaction>>,
}

impl Tables {
    fn row<T>(&mut self, value: T) -> Row<T> {
        self.next_seq += 1;
        Row {
            value,
            seq: self.next_seq,
            deleted: false,
        }
    }

    fn live_post_mut(&mut self, id: PostId) -> RepoResult<&mut BlogPost> {
        self.posts
            .get_mut(&id)
            .filter(|row| !row.deleted)
            .map(|row| &mut row.value)
            .ok_or(DomainError::PostNotFound(id))
    }
}

/// Sort live rows by insertion order and keep their values
fn live_sorted<'a, T: 'a>(rows: impl Iterator<Item = &'a Row<T>>) -> Vec<&'a T> {
    let mut live: Vec<&Row<T>> = rows.filter(|row| !row.deleted).collect();
    live.sort_by_key(|row| row.seq);
    live.into_iter().map(|row| &row.value).collect()
}

fn window<T>(items: Vec<T>, page: PageQuery) -> Vec<T> {
    items
        .into_iter()
        .skip(usize::try_from(page.offset).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit).unwrap_or(0))
        .collect()
}

/// Shared in-memory store. Cloning yields another handle to the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tables = self.tables.lock();
        f.debug_struct("MemoryStore")
            .field("users", &tables.users.len())
            .field("posts", &tables.posts.len())
            .field("comments", &tables.comments.len())
            .field("reactions", &tables.reactions.len())
            .finish()
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.value.0.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .values()
            .find(|row| !row.deleted && row.value.0.email == email)
            .map(|row| row.value.0.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(UserRepository::find_by_email(self, email).await?.is_some())
    }

    async fn list(&self, page: PageQuery) -> RepoResult<Vec<User>> {
        let tables = self.tables.lock();
        let users = live_sorted(tables.users.values())
            .into_iter()
            .map(|(user, _)| user.clone())
            .collect();
        Ok(window(users, page))
    }

    async fn count(&self) -> RepoResult<i64> {
        let tables = self.tables.lock();
        Ok(tables.users.values().filter(|row| !row.deleted).count() as i64)
    }

    #[instrument(skip(self, user, password_hash), fields(user_id = %user.id))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .users
            .values()
            .any(|row| !row.deleted && row.value.0.email == user.email)
        {
            return Err(DomainError::EmailAlreadyExists);
        }
        let row = tables.row((user.clone(), password_hash.to_string()));
        tables.users.insert(user.id, row);
        Ok(())
    }

    async fn update(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let row = tables
            .users
            .get_mut(&user.id)
            .filter(|row| !row.deleted)
            .ok_or(DomainError::UserNotFound(user.id))?;
        row.value.0.profile = user.profile.clone();
        row.value.0.updated_at = user.updated_at;
        if let Some(hash) = password_hash {
            row.value.1 = hash.to_string();
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let row = tables
            .users
            .get_mut(&id)
            .filter(|row| !row.deleted)
            .ok_or(DomainError::UserNotFound(id))?;
        row.deleted = true;
        Ok(())
    }

    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>> {
        let tables = self.tables.lock();
        Ok(tables
            .users
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.value.1.clone()))
    }
}

#[async_trait]
impl PostRepository for MemoryStore {
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<BlogPost>> {
        let tables = self.tables.lock();
        Ok(tables
            .posts
            .get(&id)
            .filter(|row| !row.deleted)
            .map(|row| row.value.clone()))
    }

    async fn list(&self, query: &PostQuery) -> RepoResult<Vec<BlogPost>> {
        let tables = self.tables.lock();
        let posts = live_sorted(tables.posts.values())
            .into_iter()
            .rev()
            .filter(|post| {
                query
                    .category
                    .as_deref()
                    .map_or(true, |category| post.category == category)
            })
            .cloned()
            .collect();
        Ok(window(posts, query.page))
    }

    async fn find_by_user(&self, user_id: UserId, ids: &[PostId]) -> RepoResult<Vec<BlogPost>> {
        let tables = self.tables.lock();
        Ok(live_sorted(tables.posts.values())
            .into_iter()
            .rev()
            .filter(|post| post.user_id == user_id && (ids.is_empty() || ids.contains(&post.id)))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, post), fields(post_id = %post.id))]
    async fn create(&self, post: &BlogPost) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .posts
            .values()
            .any(|row| !row.deleted && row.value.title == post.title)
        {
            return Err(DomainError::PostTitleExists);
        }
        let row = tables.row(post.clone());
        tables.posts.insert(post.id, row);
        Ok(())
    }

    async fn update(&self, post: &BlogPost) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        if tables
            .posts
            .values()
            .any(|row| !row.deleted && row.value.id != post.id && row.value.title == post.title)
        {
            return Err(DomainError::PostTitleExists);
        }
        let stored = tables.live_post_mut(post.id)?;
        // Counters belong to the comment and reaction writes.
        let (comments_count, reactions_count) = (stored.comments_count, stored.reactions_count);
        *stored = BlogPost {
            comments_count,
            reactions_count,
            ..post.clone()
        };
        Ok(())
    }

    async fn delete(&self, id: PostId) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let row = tables
            .posts
            .get_mut(&id)
            .filter(|row| !row.deleted)
            .ok_or(DomainError::PostNotFound(id))?;
        row.deleted = true;
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for MemoryStore {
    async fn find_by_id(&self, post_id: PostId, id: CommentId) -> RepoResult<Option<Comment>> {
        let tables = self.tables.lock();
        Ok(tables
            .comments
            .get(&id)
            .filter(|row| !row.deleted && row.value.blog_post_id == post_id)
            .map(|row| row.value.clone()))
    }

    async fn find_by_post(&self, post_id: PostId, ids: &[CommentId]) -> RepoResult<Vec<Comment>> {
        let tables = self.tables.lock();
        Ok(live_sorted(tables.comments.values())
            .into_iter()
            .filter(|c| c.blog_post_id == post_id && (ids.is_empty() || ids.contains(&c.id)))
            .cloned()
            .collect())
    }

    #[instrument(skip(self, comment), fields(post_id = %comment.blog_post_id))]
    async fn create(&self, comment: &Comment) -> RepoResult<BlogPost> {
        let mut tables = self.tables.lock();
        tables.live_post_mut(comment.blog_post_id)?;

        let row = tables.row(comment.clone());
        tables.comments.insert(comment.id, row);

        let post = tables.live_post_mut(comment.blog_post_id)?;
        post.apply_comment_delta(1);
        Ok(post.clone())
    }

    async fn update(&self, comment: &Comment) -> RepoResult<()> {
        let mut tables = self.tables.lock();
        let row = tables
            .comments
            .get_mut(&comment.id)
            .filter(|row| !row.deleted && row.value.blog_post_id == comment.blog_post_id)
            .ok_or(DomainError::CommentNotFound(comment.id))?;
        row.value = comment.clone();
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: PostId, id: CommentId) -> RepoResult<BlogPost> {
        let mut tables = self.tables.lock();
        tables.live_post_mut(post_id)?;

        let row = tables
            .comments
            .get_mut(&id)
            .filter(|row| !row.deleted && row.value.blog_post_id == post_id)
            .ok_or(DomainError::CommentNotFound(id))?;
        row.deleted = true;

        let post = tables.live_post_mut(post_id)?;
        post.apply_comment_delta(-1);
        Ok(post.clone())
    }
}

#[async_trait]
impl ReactionRepository for MemoryStore {
    async fn find(&self, post_id: PostId, user_id: UserId) -> RepoResult<Option<Reaction>> {
        let tables = self.tables.lock();
        Ok(tables
            .reactions
            .get(&(user_id, post_id))
            .map(|row| row.value.clone()))
    }

    async fn find_by_post(&self, post_id: PostId) -> RepoResult<Vec<Reaction>> {
        let tables = self.tables.lock();
        Ok(live_sorted(tables.reactions.values())
            .into_iter()
            .filter(|r| r.blog_post_id == post_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn toggle(
        &self,
        post_id: PostId,
        user_id: UserId,
        reaction_type: ReactionType,
    ) -> RepoResult<ReactionToggle> {
        let mut tables = self.tables.lock();
        tables.live_post_mut(post_id)?;

        let key = (user_id, post_id);
        let current = tables.reactions.get(&key).map(|row| row.value.reaction_type);
        let transition = ReactionTransition::decide(current, reaction_type);

        let reaction = match transition {
            ReactionTransition::Added(t) => {
                let reaction = Reaction::new(user_id, post_id, t);
                let row = tables.row(reaction.clone());
                tables.reactions.insert(key, row);
                Some(reaction)
            }
            ReactionTransition::Removed(_) => {
                tables.reactions.remove(&key);
                None
            }
            ReactionTransition::Changed { to, .. } => {
                let row = tables.reactions.get_mut(&key).ok_or_else(|| {
                    DomainError::InternalError("reaction vanished during toggle".to_string())
                })?;
                row.value.reaction_type = to;
                row.value.updated_at = chrono::Utc::now();
                Some(row.value.clone())
            }
        };

        let post = tables.live_post_mut(post_id)?;
        post.apply_reaction_delta(transition.counter_delta());

        Ok(ReactionToggle {
            post: post.clone(),
            transition,
            reaction,
        })
    }
}
