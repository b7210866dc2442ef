//! Pagination query parameter extractor.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::Query;
use serde::{Deserialize, Serialize};

use stbarnabe_core::config::PaginationConfig;
use stbarnabe_core::error::AppError;
use stbarnabe_core::types::{PageRequest, SortField};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for paginated endpoints: `?page=&size=&sort=`.
///
/// `sort` may repeat; each value is `property[,asc|desc]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (0-based).
    #[serde(default)]
    pub page: Option<u64>,
    /// Items per page.
    #[serde(default)]
    pub size: Option<u64>,
    /// Sort specifications.
    #[serde(default)]
    pub sort: Vec<String>,
}

impl PaginationParams {
    /// Converts to a `PageRequest`, applying the configured defaults and cap.
    pub fn into_page_request(self, config: &PaginationConfig) -> PageRequest {
        let size = self
            .size
            .unwrap_or(config.default_size)
            .clamp(1, config.max_size.max(1));
        let sort = self
            .sort
            .iter()
            .flat_map(|value| SortField::parse_param(value))
            .collect();

        // Keeps `page * size` representable as a SQL OFFSET.
        let max_page = i64::MAX as u64 / size;
        let page = self.page.unwrap_or(0).min(max_page);

        PageRequest::new(page, size).with_sort(sort)
    }
}

/// The resolved page request of a list call.
#[derive(Debug, Clone)]
pub struct Pageable(pub PageRequest);

impl FromRequestParts<AppState> for Pageable {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(format!("Invalid pagination parameters: {e}")))?;

        Ok(Self(
            params.into_page_request(&state.config.application.pagination),
        ))
    }
}
