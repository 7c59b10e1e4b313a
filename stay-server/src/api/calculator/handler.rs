//! Calculator API Handlers

use axum::{Json, extract::State};
use shared::models::BreakdownResult;
use shared::request::BreakdownRequest;

use crate::api::resolve_rules;
use crate::core::ServerState;
use crate::pricing::calculate_breakdown;
use crate::utils::validation::validate_finite;
use crate::utils::{ApiResponse, AppResult};

/// POST /api/calculator/breakdown - 计算扣费明细与净利润
pub async fn breakdown(
    State(state): State<ServerState>,
    Json(payload): Json<BreakdownRequest>,
) -> AppResult<ApiResponse<BreakdownResult>> {
    validate_finite(payload.selling_price, "sellingPrice")?;
    validate_finite(payload.operational_cost, "operationalCost")?;

    let rules = resolve_rules(&state, payload.rules, payload.channel.as_deref()).await?;
    let result = calculate_breakdown(payload.selling_price, &rules, payload.operational_cost);

    tracing::debug!(
        selling_price = payload.selling_price,
        net_profit = result.net_profit,
        status = ?result.profit_status,
        "Breakdown calculated"
    );

    Ok(ApiResponse::success(result))
}
