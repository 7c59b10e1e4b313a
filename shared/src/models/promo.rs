//! Promo Impact Model

use serde::{Deserialize, Serialize};

/// Cost of a percentage discount and the extra volume needed to offset it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PromoImpactResult {
    pub normal_price: f64,
    pub discount_percentage: f64,
    pub discounted_price: f64,
    pub normal_profit: f64,
    pub discounted_profit: f64,
    /// normal_profit - discounted_profit
    pub profit_drop: f64,
    /// 0 when the normal profit is not positive
    pub profit_drop_percentage: f64,
    pub margin_difference: f64,
    /// Extra room-sales at the discounted profit needed to recover the drop
    pub additional_rooms_needed: u64,
}
