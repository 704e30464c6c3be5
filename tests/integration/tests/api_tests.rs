//! API Integration Tests
//!
//! Each test spawns its own server over a fresh in-memory store, so no
//! external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use futures::future::join_all;
use integration_tests::{
    assert_error, assert_json, assert_status, fixtures::*, test_config, TestServer,
};
use reqwest::StatusCode;
use serde_json::json;

async fn register(server: &TestServer) -> (RegisterRequest, AuthResponse) {
    let request = RegisterRequest::unique();
    let response = server.post("/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, auth)
}

async fn create_post(server: &TestServer, token: &str, request: &PostRequest) -> PostResponse {
    let response = server.post_auth("/posts", token, request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, auth) = register(&server).await;

    assert_eq!(auth.user.email.as_deref(), Some(request.email.as_str()));
    assert_eq!(auth.user.zipcode.as_deref(), Some("1000-001"));
    assert_eq!(auth.token_type, "Bearer");
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server.post("/auth/register", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "EMAIL_ALREADY_EXISTS");
}

#[tokio::test]
async fn test_register_weak_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_and_refresh() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server
        .post("/auth/login", &LoginRequest::from_register(&request))
        .await
        .unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let response = server
        .post("/auth/refresh", &json!({ "refresh_token": auth.refresh_token }))
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);

    // An access token is not a refresh token
    let response = server
        .post("/auth/refresh", &json!({ "refresh_token": auth.access_token }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (request, _) = register(&server).await;

    let response = server
        .post(
            "/auth/login",
            &LoginRequest {
                email: request.email,
                password: "WrongPass123".to_string(),
            },
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "INVALID_CREDENTIALS");
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_current_user_lifecycle() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let token = &auth.access_token;

    let response = server.get_auth("/users/@me", token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, auth.user.id);

    let response = server
        .put_auth(
            "/users/@me",
            token,
            &json!({ "first_name": "Renamed", "city": "Porto" }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.first_name, "Renamed");
    assert_eq!(updated.city.as_deref(), Some("Porto"));
    // Full replace: fields left out are cleared
    assert!(updated.zipcode.is_none());

    let response = server.delete_auth("/users/@me", token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/users/{}", auth.user.id)).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_public_profile_hides_contact_fields() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server.get(&format!("/users/{}", auth.user.id)).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(user.email.is_none());
    assert!(user.zipcode.is_none());
    assert_eq!(user.city.as_deref(), Some("Lisbon"));
}

#[tokio::test]
async fn test_list_users_paginated() {
    let server = TestServer::start().await.expect("Failed to start server");
    for _ in 0..3 {
        register(&server).await;
    }

    let response = server.get("/users?offset=1&limit=1").await.unwrap();
    let page: UserPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.pagination.offset, 1);
    assert_eq!(page.pagination.limit, 1);
    assert_eq!(page.pagination.total, 3);

    let response = server.get("/users?limit=abc").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Blog Post Tests
// ============================================================================

#[tokio::test]
async fn test_post_crud() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let token = &auth.access_token;

    let created = create_post(&server, token, &PostRequest::titled("My First Blog Post")).await;
    assert_eq!(created.user_id, auth.user.id);
    assert_eq!((created.comments_count, created.reactions_count), (0, 0));
    assert!(created.published_at.is_some());

    let response = server.get(&format!("/posts/{}", created.id)).await.unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.title, "My First Blog Post");
    assert_eq!(fetched.comments.map(|c| c.len()), Some(0));
    assert_eq!(fetched.reactions.map(|r| r.len()), Some(0));

    let mut replacement = PostRequest::titled("My First Blog Post, revised");
    replacement.is_published = false;
    let response = server
        .put_auth(&format!("/posts/{}", created.id), token, &replacement)
        .await
        .unwrap();
    let updated: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.title, "My First Blog Post, revised");
    assert!(!updated.is_published);
    assert!(updated.published_at.is_none());

    let response = server
        .delete_auth(&format!("/posts/{}", created.id), token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/posts/{}", created.id)).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_BLOG_POST");
}

#[tokio::test]
async fn test_post_validation() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;

    let response = server
        .post_auth("/posts", &auth.access_token, &PostRequest::titled("Short"))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(code, "VALIDATION_ERROR");

    let response = server
        .post_auth("/posts", &auth.access_token, &json!({ "title": 12 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_duplicate_title_conflicts() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let request = PostRequest::unique();
    create_post(&server, &auth.access_token, &request).await;

    let response = server
        .post_auth("/posts", &auth.access_token, &request)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "POST_TITLE_EXISTS");
}

#[tokio::test]
async fn test_non_owner_cannot_modify_post() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register(&server).await;
    let (_, other) = register(&server).await;
    let post = create_post(&server, &owner.access_token, &PostRequest::unique()).await;

    let response = server
        .put_auth(
            &format!("/posts/{}", post.id),
            &other.access_token,
            &PostRequest::titled("Hijacked the blog post"),
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_POST_OWNER");

    let response = server
        .delete_auth(&format!("/posts/{}", post.id), &other.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let unchanged: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(unchanged.title, post.title);
}

#[tokio::test]
async fn test_list_posts_by_category_and_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let token = &auth.access_token;

    let first = create_post(&server, token, &PostRequest::unique()).await;
    let mut food = PostRequest::unique();
    food.category = "food".to_string();
    let second = create_post(&server, token, &food).await;

    let response = server.get("/posts").await.unwrap();
    let all: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 2);
    // Newest first
    assert_eq!(all[0].id, second.id);

    let response = server.get("/posts?category=food").await.unwrap();
    let filtered: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].category, "food");

    let response = server
        .get(&format!("/users/{}/posts?ids={}", auth.user.id, first.id))
        .await
        .unwrap();
    let by_user: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(by_user.len(), 1);
    assert_eq!(by_user[0].id, first.id);

    let response = server
        .get(&format!("/users/{}/posts?ids=nope", auth.user.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_toggle_scenario() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, a) = register(&server).await;
    let (_, b) = register(&server).await;
    let post = create_post(&server, &a.access_token, &PostRequest::titled("My First Blog Post")).await;
    let path = format!("/posts/{}/reactions", post.id);

    let mut counts = Vec::new();
    for code in [1, 1, 2] {
        let response = server
            .put_auth(&path, &b.access_token, &json!({ "type": code }))
            .await
            .unwrap();
        let view: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
        counts.push(view.reactions_count);
    }
    assert_eq!(counts, vec![1, 0, 1]);

    let response = server.get(&path).await.unwrap();
    let reactions: Vec<ReactionResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reactions.len(), 1);
    assert_eq!(reactions[0].user_id, b.user.id);
    assert_eq!(reactions[0].reaction_type, 2);
    assert_eq!(reactions[0].name, "love");
}

#[tokio::test]
async fn test_invalid_reaction_type() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, auth) = register(&server).await;
    let post = create_post(&server, &auth.access_token, &PostRequest::unique()).await;

    for code in [0, 8] {
        let response = server
            .put_auth(
                &format!("/posts/{}/reactions", post.id),
                &auth.access_token,
                &json!({ "type": code }),
            )
            .await
            .unwrap();
        let error = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(error, "INVALID_REACTION_TYPE");
    }
}

#[tokio::test]
async fn test_concurrent_reactions() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register(&server).await;
    let post = create_post(&server, &owner.access_token, &PostRequest::unique()).await;

    let mut fans = Vec::new();
    for _ in 0..8 {
        fans.push(register(&server).await.1);
    }

    let path = format!("/posts/{}/reactions", post.id);
    let body = json!({ "type": 4 });
    let responses = join_all(
        fans.iter()
            .map(|fan| server.put_auth(&path, &fan.access_token, &body)),
    )
    .await;
    for response in responses {
        assert_status(response.unwrap(), StatusCode::OK).await.unwrap();
    }

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let view: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.reactions_count, 8);
    assert_eq!(view.reactions.map(|r| r.len()), Some(8));
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_comment_flow() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register(&server).await;
    let (_, reader) = register(&server).await;
    let post = create_post(&server, &owner.access_token, &PostRequest::unique()).await;
    let path = format!("/posts/{}/comments", post.id);

    let response = server
        .post_auth(&path, &reader.access_token, &json!({ "content": "Great read" }))
        .await
        .unwrap();
    let view: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(view.comments_count, 1);

    let response = server.get_auth(&path, &owner.access_token).await.unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].user_id, reader.user.id);
    assert_eq!(comments[0].content, "Great read");

    // Only the author may rewrite a comment
    let comment_path = format!("{path}/{}", comments[0].id);
    let edit = json!({ "content": "Great read, twice" });
    let response = server
        .put_auth(&comment_path, &owner.access_token, &edit)
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::FORBIDDEN).await.unwrap();
    assert_eq!(code, "NOT_COMMENT_OWNER");

    let response = server
        .put_auth(&comment_path, &reader.access_token, &edit)
        .await
        .unwrap();
    let edited: CommentResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(edited.id, comments[0].id);
    assert_eq!(edited.content, "Great read, twice");

    // Unknown comment id: 404 and the counter stays put
    let response = server
        .delete_auth(
            &format!("{path}/00000000-0000-4000-8000-000000000000"),
            &owner.access_token,
        )
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "UNKNOWN_COMMENT");

    let response = server
        .delete_auth(&comment_path, &reader.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get(&format!("/posts/{}", post.id)).await.unwrap();
    let view: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(view.comments_count, 0);
}

#[tokio::test]
async fn test_comments_require_auth() {
    let server = TestServer::start().await.expect("Failed to start server");
    let (_, owner) = register(&server).await;
    let post = create_post(&server, &owner.access_token, &PostRequest::unique()).await;

    let response = server
        .get(&format!("/posts/{}/comments", post.id))
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(code, "MISSING_AUTHORIZATION");
}

// ============================================================================
// Middleware Tests
// ============================================================================

#[tokio::test]
async fn test_rate_limit_spares_health_routes() {
    let config = test_config(&[
        ("RATE_LIMIT_REQUESTS_PER_SECOND", "1"),
        ("RATE_LIMIT_BURST", "1"),
    ])
    .unwrap();
    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");

    let first = server.get("/posts").await.unwrap();
    assert_status(first, StatusCode::OK).await.unwrap();
    let second = server.get("/posts").await.unwrap();
    assert_status(second, StatusCode::TOO_MANY_REQUESTS).await.unwrap();

    for _ in 0..3 {
        let response = server.get("/health").await.unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }
}
