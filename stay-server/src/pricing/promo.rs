//! Promo Impact Simulator
//!
//! Compares the breakdown at the normal price with the breakdown at the
//! discounted price. The same rule set is applied to both prices, so
//! percentage deductions shrink with the discount.

use rust_decimal::prelude::*;
use shared::models::{DeductionRule, PromoImpactResult};

use super::calculator::breakdown_decimal;
use super::money::{ratio_percent, to_decimal, to_f64};

/// Extra rooms needed to recover `profit_drop` at `discounted_profit` per room
///
/// Rounded up. Zero when the discounted room earns nothing, or when the
/// "discount" actually raised profit.
fn rooms_to_recover(profit_drop: Decimal, discounted_profit: Decimal) -> u64 {
    if discounted_profit <= Decimal::ZERO {
        return 0;
    }
    let rooms = profit_drop
        .checked_div(discounted_profit)
        .unwrap_or_default()
        .ceil();
    if rooms <= Decimal::ZERO {
        return 0;
    }
    rooms.to_u64().unwrap_or(u64::MAX)
}

/// Simulate a percentage discount on `normal_price`
pub fn simulate_promo(
    normal_price: f64,
    operational_cost: f64,
    discount_percentage: f64,
    rules: &[DeductionRule],
) -> PromoImpactResult {
    let price = to_decimal(normal_price);
    let cost = to_decimal(operational_cost);
    let discount = to_decimal(discount_percentage);

    let normal = breakdown_decimal(price, rules, cost);

    let keep_ratio = Decimal::ONE - discount / Decimal::ONE_HUNDRED;
    let discounted_price = price.saturating_mul(keep_ratio);
    let discounted = breakdown_decimal(discounted_price, rules, cost);

    let profit_drop = normal.net_profit.saturating_sub(discounted.net_profit);

    // A baseline without profit makes the ratio meaningless
    let profit_drop_percentage = if normal.net_profit > Decimal::ZERO {
        ratio_percent(profit_drop, normal.net_profit)
    } else {
        Decimal::ZERO
    };

    let margin_difference = normal
        .profit_margin
        .saturating_sub(discounted.profit_margin);

    PromoImpactResult {
        normal_price: to_f64(price),
        discount_percentage: to_f64(discount),
        discounted_price: to_f64(discounted_price),
        normal_profit: to_f64(normal.net_profit),
        discounted_profit: to_f64(discounted.net_profit),
        profit_drop: to_f64(profit_drop),
        profit_drop_percentage: to_f64(profit_drop_percentage),
        margin_difference: to_f64(margin_difference),
        additional_rooms_needed: rooms_to_recover(profit_drop, discounted.net_profit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculate_breakdown;

    fn promo_rules() -> Vec<DeductionRule> {
        vec![
            DeductionRule::percentage("1", "OTA Commission", 18.0),
            DeductionRule::percentage("2", "Payment Fee", 2.5),
            DeductionRule::percentage("3", "Tax", 10.0),
        ]
    }

    #[test]
    fn test_fifteen_percent_promo() {
        let result = simulate_promo(1_000_000.0, 300_000.0, 15.0, &promo_rules());

        assert_eq!(result.normal_price, 1_000_000.0);
        assert_eq!(result.discount_percentage, 15.0);
        assert_eq!(result.discounted_price, 850_000.0);
        // 1,000,000 - 305,000 - 300,000
        assert_eq!(result.normal_profit, 395_000.0);
        // 850,000 - 259,250 - 300,000
        assert_eq!(result.discounted_profit, 290_750.0);
        assert_eq!(result.profit_drop, 104_250.0);
        // ceil(104,250 / 290,750)
        assert_eq!(result.additional_rooms_needed, 1);
    }

    #[test]
    fn test_drop_percentage_and_margin_difference() {
        let result = simulate_promo(1_000_000.0, 300_000.0, 15.0, &promo_rules());

        assert!((result.profit_drop_percentage - 26.392_405_063_291_14).abs() < 1e-9);
        // 39.5% - 34.2058...%
        assert!((result.margin_difference - 5.294_117_647_058_82).abs() < 1e-9);
    }

    #[test]
    fn test_matches_two_breakdowns() {
        let rules = promo_rules();
        let result = simulate_promo(1_200_000.0, 250_000.0, 20.0, &rules);

        let normal = calculate_breakdown(1_200_000.0, &rules, 250_000.0);
        let discounted = calculate_breakdown(960_000.0, &rules, 250_000.0);

        assert_eq!(result.normal_profit, normal.net_profit);
        assert_eq!(result.discounted_profit, discounted.net_profit);
        assert!(
            (result.margin_difference - (normal.profit_margin - discounted.profit_margin)).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_rooms_needed_rounds_up() {
        // Deep discount: drop exceeds discounted profit several times over
        let result = simulate_promo(1_000_000.0, 300_000.0, 40.0, &promo_rules());

        // normal 395,000; discounted 600,000 - 183,000 - 300,000 = 117,000
        assert_eq!(result.discounted_profit, 117_000.0);
        assert_eq!(result.profit_drop, 278_000.0);
        // 278,000 / 117,000 = 2.376...
        assert_eq!(result.additional_rooms_needed, 3);
    }

    #[test]
    fn test_exact_multiple_does_not_round_up() {
        // no deductions, no cost: profit == price
        let result = simulate_promo(1_000.0, 0.0, 50.0, &[]);
        assert_eq!(result.profit_drop, 500.0);
        assert_eq!(result.discounted_profit, 500.0);
        assert_eq!(result.additional_rooms_needed, 1);
    }

    #[test]
    fn test_unprofitable_discount_needs_no_rooms() {
        // discounted price no longer covers cost
        let result = simulate_promo(1_000_000.0, 600_000.0, 30.0, &promo_rules());

        assert!(result.discounted_profit <= 0.0);
        assert_eq!(result.additional_rooms_needed, 0);
    }

    #[test]
    fn test_unprofitable_baseline_has_zero_drop_percentage() {
        let result = simulate_promo(1_000_000.0, 900_000.0, 10.0, &promo_rules());

        assert!(result.normal_profit <= 0.0);
        assert_eq!(result.profit_drop_percentage, 0.0);
        assert!(result.profit_drop > 0.0);
    }

    #[test]
    fn test_zero_discount_changes_nothing() {
        let result = simulate_promo(1_000_000.0, 300_000.0, 0.0, &promo_rules());

        assert_eq!(result.discounted_price, 1_000_000.0);
        assert_eq!(result.profit_drop, 0.0);
        assert_eq!(result.profit_drop_percentage, 0.0);
        assert_eq!(result.margin_difference, 0.0);
        assert_eq!(result.additional_rooms_needed, 0);
    }

    #[test]
    fn test_negative_discount_is_clamped_to_zero_rooms() {
        // a -10% "discount" is a price increase: profit goes up
        let result = simulate_promo(1_000_000.0, 300_000.0, -10.0, &promo_rules());

        assert_eq!(result.discounted_price, 1_100_000.0);
        assert!(result.profit_drop < 0.0);
        assert_eq!(result.additional_rooms_needed, 0);
    }

    #[test]
    fn test_zero_price_stays_finite() {
        let result = simulate_promo(0.0, 100_000.0, 15.0, &promo_rules());

        assert_eq!(result.discounted_price, 0.0);
        assert!(result.margin_difference.is_finite());
        assert!(result.profit_drop_percentage.is_finite());
        assert_eq!(result.additional_rooms_needed, 0);
    }

    #[test]
    fn test_discounted_price_keeps_sub_cent_precision() {
        let result = simulate_promo(99.99, 0.0, 15.0, &[]);

        assert!((result.discounted_price - 84.9915).abs() < 1e-9);
        assert!((result.discounted_profit - 84.9915).abs() < 1e-9);
        assert!((result.profit_drop - 14.9985).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_price_rooms_needed_uses_exact_discount() {
        // 0.01 at 60% off is 0.004: drop 0.006 needs ceil(1.5) = 2 rooms
        let result = simulate_promo(0.01, 0.0, 60.0, &[]);

        assert!((result.discounted_price - 0.004).abs() < 1e-12);
        assert!(result.discounted_profit > 0.0);
        assert_eq!(result.additional_rooms_needed, 2);
    }

    #[test]
    fn test_fixed_deductions_do_not_scale_with_discount() {
        let rules = vec![DeductionRule::fixed("1", "Cleaning", 50_000.0)];
        let result = simulate_promo(500_000.0, 100_000.0, 10.0, &rules);

        assert_eq!(result.normal_profit, 350_000.0);
        assert_eq!(result.discounted_profit, 300_000.0);
        assert_eq!(result.profit_drop, 50_000.0);
    }
}
