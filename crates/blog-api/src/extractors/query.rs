//! Query-string extractors
//!
//! Offset/limit pagination, the category filter and the comma-separated
//! `ids` filter. Malformed values are rejected as 400.

use std::str::FromStr;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use blog_core::PageQuery;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw pagination query parameters
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated offset/limit window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(pub PageQuery);

impl Default for Pagination {
    fn default() -> Self {
        Self(PageQuery::default())
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        let offset = params.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ApiError::invalid_query("'offset' must not be negative"));
        }
        let limit = params.limit.unwrap_or(PageQuery::DEFAULT_LIMIT);
        if limit < 1 {
            return Err(ApiError::invalid_query("'limit' must be at least 1"));
        }

        Ok(Self(PageQuery::new(offset, limit)))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Pagination::try_from(params)
    }
}

#[derive(Debug, Deserialize)]
struct CategoryParams {
    #[serde(default)]
    category: Option<String>,
}

/// `?category=`; blank means no filter
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter(pub Option<String>);

#[async_trait]
impl<S> FromRequestParts<S> for CategoryFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<CategoryParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        let category = params
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self(category))
    }
}

#[derive(Debug, Deserialize)]
struct IdsParams {
    #[serde(default)]
    ids: Option<String>,
}

/// `?ids=a,b,c` parsed into typed ids; absent or empty means no filter
#[derive(Debug, Clone)]
pub struct IdFilter<T>(pub Vec<T>);

impl<T: FromStr> IdFilter<T> {
    fn parse(raw: Option<&str>) -> Result<Self, ApiError> {
        let Some(raw) = raw else {
            return Ok(Self(Vec::new()));
        };

        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse()
                    .map_err(|_| ApiError::invalid_query(format!("Invalid id in 'ids': {s}")))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[async_trait]
impl<S, T> FromRequestParts<S> for IdFilter<T>
where
    S: Send + Sync,
    T: FromStr + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<IdsParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        Self::parse(params.ids.as_deref())
    }
}
