//! Reputation feed handlers

use axum::extract::{Query, State};
use serde::Deserialize;

use vitrine_service::{ApiResponse, MessageView, ReputationService};

use crate::response::{ApiError, ApiJson, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReputationParams {
    pub channel: Option<String>,
}

/// Rendered message feed of one channel
///
/// GET /api/v1/reputation?channel={id}
pub async fn get_reputation(
    State(state): State<AppState>,
    Query(params): Query<ReputationParams>,
) -> ApiResult<ApiJson<ApiResponse<Vec<MessageView>>>> {
    let channel = params
        .channel
        .as_deref()
        .ok_or_else(|| ApiError::invalid_query("channel is required"))?;

    let service = ReputationService::new(state.service_context());
    let messages = service.channel_feed(channel).await?;
    Ok(ApiJson(ApiResponse::new(messages)))
}
