//! Channel Template Model

use serde::{Deserialize, Serialize};

use super::deduction::DeductionRule;

/// Named deduction rule set for one booking channel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChannelTemplate {
    pub name: String,
    pub rules: Vec<DeductionRule>,
    /// Built-in templates are read-only
    #[serde(default)]
    pub builtin: bool,
}

/// Save custom template payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelTemplateSave {
    pub rules: Vec<DeductionRule>,
}
