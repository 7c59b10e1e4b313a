//! Input validation helpers
//!
//! The pricing engine accepts any input and normalizes it; the HTTP layer is
//! stricter and rejects requests that could only be client mistakes.

use std::collections::HashSet;

use shared::error::ErrorCode;
use shared::models::DeductionRule;

use crate::utils::AppError;

// ── Limits ──────────────────────────────────────────────────────────

/// Channel template names and rule names
pub const MAX_NAME_LEN: usize = 100;

/// Rule ids
pub const MAX_ID_LEN: usize = 64;

/// Rules in one request or template
pub const MAX_RULES: usize = 50;

// ── Helpers ─────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        )
        .with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Reject NaN and infinities
pub fn validate_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::non_finite(field));
    }
    Ok(())
}

/// Validate a finite value inside `[min, max]`
pub fn validate_range(value: f64, field: &str, min: f64, max: f64) -> Result<(), AppError> {
    validate_finite(value, field)?;
    if !(min..=max).contains(&value) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be between {min} and {max} (got {value})"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a rule set sent by a client
///
/// Checks count, id uniqueness, text lengths and finite values. Rule
/// semantics (negative amounts, percentages above 100) are left alone.
pub fn validate_rules(rules: &[DeductionRule]) -> Result<(), AppError> {
    if rules.len() > MAX_RULES {
        return Err(AppError::with_message(
            ErrorCode::TooManyRules,
            format!("At most {MAX_RULES} rules allowed (got {})", rules.len()),
        ));
    }

    let mut seen = HashSet::with_capacity(rules.len());
    for rule in rules {
        validate_required_text(&rule.id, "rule.id", MAX_ID_LEN)?;
        validate_required_text(&rule.name, "rule.name", MAX_NAME_LEN)?;
        validate_finite(rule.value, "rule.value")?;

        if !seen.insert(rule.id.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::DuplicateRuleId,
                format!("Duplicate rule id '{}'", rule.id),
            )
            .with_detail("id", rule.id.clone()));
        }
    }
    Ok(())
}
