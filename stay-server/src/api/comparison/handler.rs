//! Channel Comparison API Handlers

use axum::{Json, extract::State};
use shared::models::ComparisonResult;
use shared::request::ComparisonRequest;

use crate::core::ServerState;
use crate::pricing::compare_channels;
use crate::utils::validation::{validate_finite, validate_range};
use crate::utils::{ApiResponse, AppError, AppResult};

/// POST /api/comparison - 对比两个渠道的利润
pub async fn compare(
    State(state): State<ServerState>,
    Json(payload): Json<ComparisonRequest>,
) -> AppResult<ApiResponse<ComparisonResult>> {
    validate_finite(payload.selling_price, "sellingPrice")?;
    validate_finite(payload.operational_cost, "operationalCost")?;
    validate_range(payload.occupancy, "occupancy", 0.0, 100.0)?;

    let templates = state.templates.read().await;
    let first = templates
        .get(&payload.channel1)
        .ok_or_else(|| AppError::template_not_found(&payload.channel1))?;
    let second = templates
        .get(&payload.channel2)
        .ok_or_else(|| AppError::template_not_found(&payload.channel2))?;

    let result = compare_channels(
        payload.selling_price,
        payload.operational_cost,
        first,
        second,
        payload.total_rooms,
        payload.occupancy,
    );

    Ok(ApiResponse::success(result))
}
