//! Channel Comparison Model

use serde::{Deserialize, Serialize};

/// Nights counted in one month for the monthly projection
pub const DAYS_PER_MONTH: u32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub name: String,
    pub selling_price: f64,
    pub total_deductions: f64,
    pub net_profit: f64,
    pub margin: f64,
}

/// first - second
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonDifference {
    pub net_profit: f64,
    pub margin: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyImpact {
    /// Occupancy percentage used for the projection
    pub occupancy: f64,
    pub total_rooms: u32,
    pub monthly_difference: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub channel1: ChannelSummary,
    pub channel2: ChannelSummary,
    pub difference: ComparisonDifference,
    pub monthly_impact: MonthlyImpact,
}
