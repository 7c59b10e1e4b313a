//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`calculator`] - 扣费明细计算
//! - [`occupancy`] - 入住率建议
//! - [`promo`] - 促销影响模拟
//! - [`comparison`] - 渠道对比
//! - [`channels`] - 渠道模板管理

pub mod calculator;
pub mod channels;
pub mod comparison;
pub mod health;
pub mod occupancy;
pub mod promo;

use shared::models::DeductionRule;

use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_rules};
use crate::utils::{AppError, AppResult, ErrorCode};

/// Pick the rule set for a calculation request
///
/// Inline `rules` win over `channel`. Inline rules are validated; template
/// rules were validated when they were saved.
pub(crate) async fn resolve_rules(
    state: &ServerState,
    rules: Option<Vec<DeductionRule>>,
    channel: Option<&str>,
) -> AppResult<Vec<DeductionRule>> {
    if let Some(rules) = rules {
        validate_rules(&rules)?;
        return Ok(rules);
    }

    let Some(channel) = channel else {
        return Err(AppError::new(ErrorCode::RulesMissing));
    };
    validate_required_text(channel, "channel", MAX_NAME_LEN)?;

    let templates = state.templates.read().await;
    templates
        .rules(channel)
        .map(<[DeductionRule]>::to_vec)
        .ok_or_else(|| AppError::template_not_found(channel))
}
