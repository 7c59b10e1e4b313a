//! Occupancy Recommendation Model

use serde::{Deserialize, Serialize};

/// Threshold used when the caller does not supply one
pub const DEFAULT_OCCUPANCY_THRESHOLD: f64 = 70.0;

pub const HIGH_DEMAND_ADVICE: &str = "Demand is strong. Consider increasing price 5–10%.";
pub const LOW_DEMAND_ADVICE: &str = "Maintain or consider promotional pricing.";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyStatus {
    High,
    Low,
}

impl OccupancyStatus {
    /// Fixed advisory text for this status
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::High => HIGH_DEMAND_ADVICE,
            Self::Low => LOW_DEMAND_ADVICE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyResult {
    pub total_rooms: u32,
    pub booked_rooms: u32,
    /// Booked rooms as a percentage of total rooms
    pub occupancy_rate: f64,
    pub threshold: f64,
    pub status: OccupancyStatus,
    pub recommendation: String,
}
