//! Shared types for ProfitStay
//!
//! Models, request payloads and the unified error / response envelope used
//! by the stay-server API and its clients.

pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use axum::Json;
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
