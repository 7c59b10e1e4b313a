//! Decimal helpers shared by every calculator
//!
//! Inputs arrive as f64, are converted to `Decimal` on entry and converted
//! back on exit. Nothing is rounded in between; display formatting belongs
//! to the caller.

use rust_decimal::prelude::*;

/// Convert f64 to Decimal for calculation
///
/// NaN, infinities and values outside Decimal's range become zero.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `base * rate / 100`, saturating at Decimal's bounds
#[inline]
pub fn percent_of(base: Decimal, rate: Decimal) -> Decimal {
    base.saturating_mul(rate) / Decimal::ONE_HUNDRED
}

/// `part / whole * 100`, or zero when `whole` is zero
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .map(|ratio| ratio.saturating_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_default()
}
