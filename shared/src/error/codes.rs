//! Unified error codes for ProfitStay
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Channel template errors
//! - 2xxx: Calculation input errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the dashboard frontend
/// can switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Channel templates ====================
    /// Channel template not found
    TemplateNotFound = 1001,
    /// Built-in channel templates cannot be changed
    TemplateReadOnly = 1002,
    /// Channel template name is empty or too long
    TemplateNameInvalid = 1003,
    /// Two deduction rules share the same id
    DuplicateRuleId = 1004,
    /// Too many deduction rules in one set
    TooManyRules = 1005,

    // ==================== 2xxx: Calculation input ====================
    /// Numeric input is NaN or infinite
    NonFiniteValue = 2001,
    /// Neither inline rules nor a channel name were given
    RulesMissing = 2002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Channel templates
            ErrorCode::TemplateNotFound => "Channel template not found",
            ErrorCode::TemplateReadOnly => "Built-in channel templates are read-only",
            ErrorCode::TemplateNameInvalid => "Channel template name is invalid",
            ErrorCode::DuplicateRuleId => "Deduction rule ids must be unique",
            ErrorCode::TooManyRules => "Too many deduction rules",

            // Calculation input
            ErrorCode::NonFiniteValue => "Numeric value must be finite",
            ErrorCode::RulesMissing => "Deduction rules or a channel name are required",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not name an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Channel templates
            1001 => Ok(ErrorCode::TemplateNotFound),
            1002 => Ok(ErrorCode::TemplateReadOnly),
            1003 => Ok(ErrorCode::TemplateNameInvalid),
            1004 => Ok(ErrorCode::DuplicateRuleId),
            1005 => Ok(ErrorCode::TooManyRules),

            // Calculation input
            2001 => Ok(ErrorCode::NonFiniteValue),
            2002 => Ok(ErrorCode::RulesMissing),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
