//! Deduction Breakdown Calculator
//!
//! Turns a selling price, a deduction rule set and an operational cost into
//! net revenue, net profit, profit margin and an itemized breakdown.
//!
//! Percentage rules are flat: every one is taken from the original selling
//! price, never from a running remainder. Rule order only affects the order
//! of the breakdown lines.

use rust_decimal::Decimal;
use shared::models::{BreakdownLine, BreakdownResult, DeductionKind, DeductionRule, ProfitStatus};

use super::money::{percent_of, ratio_percent, to_decimal, to_f64};

/// Breakdown kept in Decimal so derived calculators can reuse it without
/// round-tripping through f64
#[derive(Debug, Clone)]
pub(crate) struct DecimalBreakdown {
    pub net_revenue: Decimal,
    pub total_deductions: Decimal,
    pub net_profit: Decimal,
    pub profit_margin: Decimal,
    pub lines: Vec<(DeductionRule, Decimal)>,
}

impl DecimalBreakdown {
    pub(crate) fn into_result(self) -> BreakdownResult {
        let profit_margin = to_f64(self.profit_margin);

        BreakdownResult {
            net_revenue: to_f64(self.net_revenue),
            total_deductions: to_f64(self.total_deductions),
            net_profit: to_f64(self.net_profit),
            profit_margin,
            profit_status: ProfitStatus::from_margin(profit_margin),
            breakdown: self
                .lines
                .into_iter()
                .map(|(rule, amount)| BreakdownLine {
                    rule,
                    amount: to_f64(amount),
                })
                .collect(),
        }
    }
}

/// Amount one rule takes out of `selling_price`
fn deduction_amount(rule: &DeductionRule, selling_price: Decimal) -> Decimal {
    let value = to_decimal(rule.value);
    match rule.kind {
        DeductionKind::Percentage => percent_of(selling_price, value),
        DeductionKind::Fixed => value,
    }
}

pub(crate) fn breakdown_decimal(
    selling_price: Decimal,
    rules: &[DeductionRule],
    operational_cost: Decimal,
) -> DecimalBreakdown {
    let mut total_deductions = Decimal::ZERO;
    let mut lines = Vec::with_capacity(rules.len());

    for rule in rules.iter().filter(|r| r.enabled) {
        let amount = deduction_amount(rule, selling_price);
        total_deductions = total_deductions.saturating_add(amount);
        lines.push((rule.clone(), amount));
    }

    let net_revenue = selling_price.saturating_sub(total_deductions);
    let net_profit = net_revenue.saturating_sub(operational_cost);
    // Zero price has no meaningful margin; report 0 instead of dividing
    let profit_margin = ratio_percent(net_profit, selling_price);

    DecimalBreakdown {
        net_revenue,
        total_deductions,
        net_profit,
        profit_margin,
        lines,
    }
}

/// Compute the full profit breakdown for one selling price
///
/// Pure and deterministic. Inputs are not range-checked; NaN or infinite
/// values are treated as zero so every output field is finite.
///
/// # Example
///
/// ```
/// use shared::models::{DeductionRule, ProfitStatus};
/// use stay_server::pricing::calculate_breakdown;
///
/// let rules = vec![
///     DeductionRule::percentage("1", "Agoda Commission", 18.0),
///     DeductionRule::percentage("2", "Tax & Service", 21.0),
/// ];
/// let result = calculate_breakdown(1_500_000.0, &rules, 375_000.0);
/// assert_eq!(result.net_profit, 540_000.0);
/// assert_eq!(result.profit_status, ProfitStatus::Healthy);
/// ```
pub fn calculate_breakdown(
    selling_price: f64,
    rules: &[DeductionRule],
    operational_cost: f64,
) -> BreakdownResult {
    breakdown_decimal(to_decimal(selling_price), rules, to_decimal(operational_cost)).into_result()
}
