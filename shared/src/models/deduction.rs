//! Deduction Rule Model

use serde::{Deserialize, Serialize};

/// How a deduction's `value` is interpreted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DeductionKind {
    /// `value` is a percentage of the original selling price (30 = 30%)
    Percentage,
    /// `value` is a currency amount
    Fixed,
}

/// One commission / tax / fee line item subtracted from the selling price
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeductionRule {
    /// Stable identifier, unique within a rule set
    pub id: String,
    /// Display label, carried into the breakdown
    pub name: String,
    #[serde(rename = "type", alias = "kind")]
    pub kind: DeductionKind,
    /// Percentage (not clamped) or currency amount, depending on `kind`
    pub value: f64,
    /// Disabled rules stay in the set but never contribute
    #[serde(alias = "isEnabled", default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl DeductionRule {
    /// Enabled percentage rule
    pub fn percentage(id: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DeductionKind::Percentage,
            value,
            enabled: true,
        }
    }

    /// Enabled fixed-amount rule
    pub fn fixed(id: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: DeductionKind::Fixed,
            value,
            enabled: true,
        }
    }

    /// Same rule, switched off
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}
