//! Request types for the calculation API
//!
//! Rule sets can be given inline (`rules`) or by channel template name
//! (`channel`). Inline rules win when both are present.

use serde::{Deserialize, Serialize};

use crate::models::DeductionRule;

/// POST /api/calculator/breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownRequest {
    pub selling_price: f64,
    #[serde(default)]
    pub operational_cost: f64,
    #[serde(default)]
    pub rules: Option<Vec<DeductionRule>>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// POST /api/occupancy/recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyRequest {
    pub total_rooms: u32,
    pub booked_rooms: u32,
    /// Falls back to the server's configured default
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// POST /api/promo/impact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromoRequest {
    pub normal_price: f64,
    #[serde(default)]
    pub operational_cost: f64,
    pub discount_percentage: f64,
    #[serde(default)]
    pub rules: Option<Vec<DeductionRule>>,
    #[serde(default)]
    pub channel: Option<String>,
}

/// POST /api/comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    pub selling_price: f64,
    #[serde(default)]
    pub operational_cost: f64,
    pub channel1: String,
    pub channel2: String,
    pub total_rooms: u32,
    /// Occupancy percentage used for the monthly projection
    pub occupancy: f64,
}
