//! Channel templates
//!
//! Named deduction rule sets that requests can refer to instead of sending
//! rules inline.

mod defaults;
mod registry;

pub use defaults::{calculator_presets, comparison_presets};
pub use registry::{TemplateError, TemplateRegistry, TemplateResult};
