//! Showcase handlers
//!
//! The aggregated embed feed across a category's text channels.

use axum::extract::{Query, State};
use serde::Deserialize;

use vitrine_service::{ApiResponse, EmbedView, ShowcaseService};

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ShowcaseParams {
    /// Category override; falls back to the configured default
    pub category: Option<String>,
}

/// Aggregated embed feed, newest first
///
/// GET /api/v1/showcase?category={id}
pub async fn get_showcase(
    State(state): State<AppState>,
    Query(params): Query<ShowcaseParams>,
) -> ApiResult<ApiJson<ApiResponse<Vec<EmbedView>>>> {
    let service = ShowcaseService::new(state.service_context());
    let embeds = service.latest_embeds(params.category.as_deref()).await?;
    Ok(ApiJson(ApiResponse::new(embeds)))
}
