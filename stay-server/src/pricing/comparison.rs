//! Channel Comparator
//!
//! Runs the same price and cost through two channel templates and projects
//! the per-room profit difference over a month.

use rust_decimal::Decimal;
use shared::models::{
    ChannelSummary, ChannelTemplate, ComparisonDifference, ComparisonResult, DAYS_PER_MONTH,
    MonthlyImpact,
};

use super::calculator::{DecimalBreakdown, breakdown_decimal};
use super::money::{percent_of, to_decimal, to_f64};

fn summarize(name: &str, selling_price: Decimal, breakdown: &DecimalBreakdown) -> ChannelSummary {
    ChannelSummary {
        name: name.to_string(),
        selling_price: to_f64(selling_price),
        total_deductions: to_f64(breakdown.total_deductions),
        net_profit: to_f64(breakdown.net_profit),
        margin: to_f64(breakdown.profit_margin),
    }
}

/// Compare `first` against `second` at one selling price
///
/// Differences are `first - second`. The monthly projection assumes
/// `occupancy_percentage` of `total_rooms` sold every night for
/// [`DAYS_PER_MONTH`] nights.
pub fn compare_channels(
    selling_price: f64,
    operational_cost: f64,
    first: &ChannelTemplate,
    second: &ChannelTemplate,
    total_rooms: u32,
    occupancy_percentage: f64,
) -> ComparisonResult {
    let price = to_decimal(selling_price);
    let cost = to_decimal(operational_cost);
    let occupancy = to_decimal(occupancy_percentage);

    let a = breakdown_decimal(price, &first.rules, cost);
    let b = breakdown_decimal(price, &second.rules, cost);

    let profit_difference = a.net_profit.saturating_sub(b.net_profit);
    let margin_difference = a.profit_margin.saturating_sub(b.profit_margin);

    let room_nights = Decimal::from(total_rooms).saturating_mul(Decimal::from(DAYS_PER_MONTH));
    let monthly_difference =
        percent_of(profit_difference.saturating_mul(room_nights), occupancy);

    ComparisonResult {
        channel1: summarize(&first.name, price, &a),
        channel2: summarize(&second.name, price, &b),
        difference: ComparisonDifference {
            net_profit: to_f64(profit_difference),
            margin: to_f64(margin_difference),
        },
        monthly_impact: MonthlyImpact {
            occupancy: to_f64(occupancy),
            total_rooms,
            monthly_difference: to_f64(monthly_difference),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::DeductionRule;

    fn template(name: &str, rules: Vec<DeductionRule>) -> ChannelTemplate {
        ChannelTemplate {
            name: name.to_string(),
            rules,
            builtin: true,
        }
    }

    fn direct() -> ChannelTemplate {
        template(
            "direct",
            vec![
                DeductionRule::percentage("1", "Payment Fee", 2.5),
                DeductionRule::percentage("2", "Tax", 10.0),
            ],
        )
    }

    fn agoda() -> ChannelTemplate {
        template(
            "agoda",
            vec![
                DeductionRule::percentage("1", "OTA Commission", 18.0),
                DeductionRule::percentage("2", "Payment Fee", 2.5),
                DeductionRule::percentage("3", "Tax", 10.0),
            ],
        )
    }

    #[test]
    fn test_direct_vs_agoda() {
        let result = compare_channels(1_000_000.0, 300_000.0, &direct(), &agoda(), 20, 70.0);

        assert_eq!(result.channel1.name, "direct");
        assert_eq!(result.channel1.total_deductions, 125_000.0);
        assert_eq!(result.channel1.net_profit, 575_000.0);
        assert_eq!(result.channel1.margin, 57.5);

        assert_eq!(result.channel2.name, "agoda");
        assert_eq!(result.channel2.total_deductions, 305_000.0);
        assert_eq!(result.channel2.net_profit, 395_000.0);
        assert_eq!(result.channel2.margin, 39.5);

        assert_eq!(result.difference.net_profit, 180_000.0);
        assert_eq!(result.difference.margin, 18.0);
    }

    #[test]
    fn test_monthly_projection() {
        let result = compare_channels(1_000_000.0, 300_000.0, &direct(), &agoda(), 20, 70.0);

        // 180,000 * 20 rooms * 70% * 30 nights
        assert_eq!(result.monthly_impact.monthly_difference, 75_600_000.0);
        assert_eq!(result.monthly_impact.total_rooms, 20);
        assert_eq!(result.monthly_impact.occupancy, 70.0);
    }

    #[test]
    fn test_swapping_channels_negates_difference() {
        let forward = compare_channels(1_000_000.0, 300_000.0, &direct(), &agoda(), 20, 70.0);
        let backward = compare_channels(1_000_000.0, 300_000.0, &agoda(), &direct(), 20, 70.0);

        assert_eq!(forward.difference.net_profit, -backward.difference.net_profit);
        assert_eq!(forward.difference.margin, -backward.difference.margin);
        assert_eq!(
            forward.monthly_impact.monthly_difference,
            -backward.monthly_impact.monthly_difference
        );
    }

    #[test]
    fn test_same_channel_has_no_difference() {
        let result = compare_channels(1_000_000.0, 300_000.0, &agoda(), &agoda(), 20, 70.0);

        assert_eq!(result.difference.net_profit, 0.0);
        assert_eq!(result.difference.margin, 0.0);
        assert_eq!(result.monthly_impact.monthly_difference, 0.0);
    }

    #[test]
    fn test_zero_rooms_or_occupancy_projects_nothing() {
        let no_rooms = compare_channels(1_000_000.0, 300_000.0, &direct(), &agoda(), 0, 70.0);
        assert_eq!(no_rooms.monthly_impact.monthly_difference, 0.0);

        let empty = compare_channels(1_000_000.0, 300_000.0, &direct(), &agoda(), 20, 0.0);
        assert_eq!(empty.monthly_impact.monthly_difference, 0.0);
    }

    #[test]
    fn test_zero_price_margins_are_finite() {
        let result = compare_channels(0.0, 300_000.0, &direct(), &agoda(), 20, 70.0);

        assert_eq!(result.channel1.margin, 0.0);
        assert_eq!(result.channel2.margin, 0.0);
        assert_eq!(result.difference.net_profit, 0.0);
    }

    #[test]
    fn test_disabled_rules_ignored_in_comparison() {
        let mut with_disabled = agoda();
        with_disabled
            .rules
            .push(DeductionRule::fixed("4", "Marketing Fee", 50_000.0).disabled());

        let result = compare_channels(1_000_000.0, 300_000.0, &with_disabled, &agoda(), 10, 50.0);
        assert_eq!(result.difference.net_profit, 0.0);
    }
}
