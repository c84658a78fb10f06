//! Staff handlers
//!
//! The bucketed staff roster and single-member staff lookup.

use axum::extract::{Path, State};

use vitrine_service::{ApiResponse, RosterResponse, RosterService, StaffService, StaffStatus};

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Staff roster bucketed by tier
///
/// GET /api/v1/staff
pub async fn get_roster(
    State(state): State<AppState>,
) -> ApiResult<ApiJson<ApiResponse<RosterResponse>>> {
    let service = RosterService::new(state.service_context());
    let roster = service.staff_roster().await?;
    Ok(ApiJson(ApiResponse::new(roster)))
}

/// Staff status of one user
///
/// GET /api/v1/staff/:user_id
pub async fn get_member_status(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<ApiJson<ApiResponse<StaffStatus>>> {
    let service = StaffService::new(state.service_context());
    let status = service.member_status(&user_id).await?;
    Ok(ApiJson(ApiResponse::new(status)))
}
