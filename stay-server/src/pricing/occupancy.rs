//! Occupancy Advisor
//!
//! Occupancy rate plus a fixed pricing recommendation.

use rust_decimal::Decimal;
use shared::models::{DEFAULT_OCCUPANCY_THRESHOLD, OccupancyResult, OccupancyStatus};

use super::money::{ratio_percent, to_f64};

/// Compute the occupancy rate and pick a recommendation
///
/// - Zero total rooms gives a 0% rate (and therefore `Low`).
/// - `High` requires the rate to be strictly above `threshold`.
/// - A non-finite threshold falls back to [`DEFAULT_OCCUPANCY_THRESHOLD`].
pub fn recommend_occupancy(total_rooms: u32, booked_rooms: u32, threshold: f64) -> OccupancyResult {
    let threshold = if threshold.is_finite() {
        threshold
    } else {
        DEFAULT_OCCUPANCY_THRESHOLD
    };

    let occupancy_rate = to_f64(ratio_percent(
        Decimal::from(booked_rooms),
        Decimal::from(total_rooms),
    ));

    let status = if occupancy_rate > threshold {
        OccupancyStatus::High
    } else {
        OccupancyStatus::Low
    };

    OccupancyResult {
        total_rooms,
        booked_rooms,
        occupancy_rate,
        threshold,
        status,
        recommendation: status.recommendation().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{HIGH_DEMAND_ADVICE, LOW_DEMAND_ADVICE};

    #[test]
    fn test_high_demand_scenario() {
        let result = recommend_occupancy(20, 15, 70.0);

        assert_eq!(result.occupancy_rate, 75.0);
        assert_eq!(result.status, OccupancyStatus::High);
        assert_eq!(result.recommendation, HIGH_DEMAND_ADVICE);
        assert_eq!(result.total_rooms, 20);
        assert_eq!(result.booked_rooms, 15);
        assert_eq!(result.threshold, 70.0);
    }

    #[test]
    fn test_rate_equal_to_threshold_is_low() {
        let result = recommend_occupancy(20, 14, 70.0);

        assert_eq!(result.occupancy_rate, 70.0);
        assert_eq!(result.status, OccupancyStatus::Low);
        assert_eq!(result.recommendation, LOW_DEMAND_ADVICE);
    }

    #[test]
    fn test_zero_rooms_is_zero_rate() {
        let result = recommend_occupancy(0, 0, 70.0);
        assert_eq!(result.occupancy_rate, 0.0);
        assert_eq!(result.status, OccupancyStatus::Low);

        let result = recommend_occupancy(0, 5, 70.0);
        assert!(result.occupancy_rate.is_finite());
        assert_eq!(result.status, OccupancyStatus::Low);
    }

    #[test]
    fn test_overbooking_is_reported_as_is() {
        let result = recommend_occupancy(10, 12, 70.0);
        assert_eq!(result.occupancy_rate, 120.0);
        assert_eq!(result.status, OccupancyStatus::High);
    }

    #[test]
    fn test_custom_threshold() {
        assert_eq!(recommend_occupancy(20, 15, 80.0).status, OccupancyStatus::Low);
        assert_eq!(recommend_occupancy(20, 15, 74.99).status, OccupancyStatus::High);
    }

    #[test]
    fn test_recommendation_ignores_actual_values() {
        let a = recommend_occupancy(100, 99, 50.0);
        let b = recommend_occupancy(10, 6, 50.0);
        assert_eq!(a.recommendation, b.recommendation);
    }

    #[test]
    fn test_non_finite_threshold_uses_default() {
        let result = recommend_occupancy(20, 15, f64::NAN);
        assert_eq!(result.threshold, DEFAULT_OCCUPANCY_THRESHOLD);
        assert_eq!(result.status, OccupancyStatus::High);
    }
}
