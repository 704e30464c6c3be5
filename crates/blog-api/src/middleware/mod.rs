//! HTTP middleware
//!
//! Every route gets request ids, a tracing span, a 30 second deadline, CORS
//! and gzip. The rate limiter wraps `/api/v1` only, so health checks are
//! never throttled.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use blog_common::{AppError, CorsConfig, Environment, RateLimitConfig};
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

use crate::state::AppState;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests still running after this get 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

fn request_span(request: &Request<Body>) -> Span {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        id = %id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Wrap `router` in the stack shared by all routes.
///
/// The request id is assigned before the trace span opens so the span can
/// carry it, and is echoed back on the response.
pub fn apply_middleware(
    router: Router<AppState>,
    cors: &CorsConfig,
    env: Environment,
) -> Router<AppState> {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id()))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(request_span)
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            ))
            .layer(cors_layer(cors, env))
            .layer(CompressionLayer::new()),
    )
}

/// Throttle `router` with a single bucket shared by all callers.
///
/// `requests_per_second` sets the refill rate and `burst` the bucket size;
/// zero values are raised to one.
pub fn apply_rate_limit(
    router: Router<AppState>,
    config: &RateLimitConfig,
) -> Result<Router<AppState>, AppError> {
    let refill_every_ms = (1000 / u64::from(config.requests_per_second.max(1))).max(1);

    let governor = GovernorConfigBuilder::default()
        .key_extractor(GlobalKeyExtractor)
        .per_millisecond(refill_every_ms)
        .burst_size(config.burst.max(1))
        .finish()
        .ok_or_else(|| AppError::Config("rate limit settings rejected".to_string()))?;

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor),
    }))
}

fn cors_layer(config: &CorsConfig, env: Environment) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, request_id()])
        .expose_headers([request_id()]);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "skipping unparsable CORS origin");
                    None
                }
            })
            .collect();
        return layer.allow_origin(AllowOrigin::list(origins));
    }

    if env.is_production() {
        tracing::warn!("CORS_ALLOWED_ORIGINS is empty; cross-origin browser requests will fail");
        layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        layer.allow_origin(Any)
    }
}
