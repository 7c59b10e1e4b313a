//! Data models
//!
//! Shared between stay-server and the dashboard frontend (via API).
//! JSON field names follow the dashboard's camelCase shape.

pub mod breakdown;
pub mod channel;
pub mod comparison;
pub mod deduction;
pub mod occupancy;
pub mod promo;

// Re-exports
pub use breakdown::*;
pub use channel::*;
pub use comparison::*;
pub use deduction::*;
pub use occupancy::*;
pub use promo::*;
