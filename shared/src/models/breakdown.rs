//! Profit Breakdown Model

use serde::{Deserialize, Serialize};

use super::deduction::DeductionRule;

/// Minimum margin (inclusive) for [`ProfitStatus::Healthy`]
pub const HEALTHY_MARGIN: f64 = 30.0;

/// Minimum margin (inclusive) for [`ProfitStatus::Moderate`]
pub const MODERATE_MARGIN: f64 = 15.0;

/// Profit tier derived from the profit margin
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProfitStatus {
    Healthy,
    Moderate,
    Low,
}

impl ProfitStatus {
    /// Classify a margin (percent of selling price)
    ///
    /// Lower bounds are inclusive: 30 is healthy, 15 is moderate.
    pub fn from_margin(margin: f64) -> Self {
        if margin >= HEALTHY_MARGIN {
            Self::Healthy
        } else if margin >= MODERATE_MARGIN {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// One applied deduction with its computed amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BreakdownLine {
    pub rule: DeductionRule,
    pub amount: f64,
}

/// Full financial breakdown for one selling price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResult {
    /// Selling price minus total deductions
    pub net_revenue: f64,
    /// Sum of enabled rules' amounts
    pub total_deductions: f64,
    /// Net revenue minus operational cost
    pub net_profit: f64,
    /// Net profit as a percentage of the original selling price
    pub profit_margin: f64,
    pub profit_status: ProfitStatus,
    /// Enabled rules only, input order
    pub breakdown: Vec<BreakdownLine>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_boundaries() {
        assert_eq!(ProfitStatus::from_margin(30.0), ProfitStatus::Healthy);
        assert_eq!(ProfitStatus::from_margin(29.999_999), ProfitStatus::Moderate);
        assert_eq!(ProfitStatus::from_margin(15.0), ProfitStatus::Moderate);
        assert_eq!(ProfitStatus::from_margin(14.999_999), ProfitStatus::Low);
        assert_eq!(ProfitStatus::from_margin(-40.0), ProfitStatus::Low);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let result = BreakdownResult {
            net_revenue: 915_000.0,
            total_deductions: 585_000.0,
            net_profit: 540_000.0,
            profit_margin: 36.0,
            profit_status: ProfitStatus::Healthy,
            breakdown: vec![],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["netRevenue"], 915_000.0);
        assert_eq!(json["profitStatus"], "healthy");
    }
}
