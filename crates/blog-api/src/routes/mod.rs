//! Route definitions
//!
//! API routes are mounted under /api/v1; health checks live at the root.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{auth, comments, health, posts, reactions, users};
use crate::state::AppState;

/// Create the API router (health routes are separate so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(post_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route(
            "/users/@me",
            get(users::get_current_user)
                .put(users::update_current_user)
                .delete(users::delete_current_user),
        )
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id/posts", get(posts::list_user_posts))
}

/// Blog post routes, with their comments and reactions
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route(
            "/posts/:post_id",
            get(posts::get_post)
                .put(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/posts/:post_id/reactions",
            put(reactions::set_reaction).get(reactions::list_reactions),
        )
        .route(
            "/posts/:post_id/comments",
            post(comments::add_comment).get(comments::list_comments),
        )
        .route(
            "/posts/:post_id/comments/:comment_id",
            put(comments::update_comment).delete(comments::delete_comment),
        )
}
