//! Occupancy API Handlers

use axum::{Json, extract::State};
use shared::models::OccupancyResult;
use shared::request::OccupancyRequest;

use crate::core::ServerState;
use crate::pricing::recommend_occupancy;
use crate::utils::validation::validate_range;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/occupancy/recommendation - 入住率与定价建议
///
/// 未指定 threshold 时使用服务器配置的默认阈值
pub async fn recommend(
    State(state): State<ServerState>,
    Json(payload): Json<OccupancyRequest>,
) -> AppResult<ApiResponse<OccupancyResult>> {
    let threshold = payload
        .threshold
        .unwrap_or_else(|| state.default_threshold());
    validate_range(threshold, "threshold", 0.0, 100.0)?;

    let result = recommend_occupancy(payload.total_rooms, payload.booked_rooms, threshold);
    Ok(ApiResponse::success(result))
}
