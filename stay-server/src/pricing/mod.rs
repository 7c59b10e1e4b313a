//! Pricing Engine Module
//!
//! Pure, synchronous calculators for channel pricing decisions.
//! Nothing here allocates shared state or performs I/O, so every function
//! is safe to call from any number of request handlers at once.

mod calculator;
mod comparison;
pub mod money;
mod occupancy;
mod promo;

pub use calculator::*;
pub use comparison::*;
pub use occupancy::*;
pub use promo::*;
