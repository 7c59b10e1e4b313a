//! Promo API Handlers

use axum::{Json, extract::State};
use shared::models::PromoImpactResult;
use shared::request::PromoRequest;

use crate::api::resolve_rules;
use crate::core::ServerState;
use crate::pricing::simulate_promo;
use crate::utils::validation::{validate_finite, validate_range};
use crate::utils::{ApiResponse, AppResult};

/// POST /api/promo/impact - 模拟折扣对利润的影响
pub async fn impact(
    State(state): State<ServerState>,
    Json(payload): Json<PromoRequest>,
) -> AppResult<ApiResponse<PromoImpactResult>> {
    validate_finite(payload.normal_price, "normalPrice")?;
    validate_finite(payload.operational_cost, "operationalCost")?;
    validate_range(payload.discount_percentage, "discountPercentage", 0.0, 100.0)?;

    let rules = resolve_rules(&state, payload.rules, payload.channel.as_deref()).await?;
    let result = simulate_promo(
        payload.normal_price,
        payload.operational_cost,
        payload.discount_percentage,
        &rules,
    );

    Ok(ApiResponse::success(result))
}
