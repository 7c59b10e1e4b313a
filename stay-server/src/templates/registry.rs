//! Channel template registry
//!
//! Owned by whoever needs it (the server keeps one in [`ServerState`]);
//! there is no process-wide template table.
//!
//! [`ServerState`]: crate::core::ServerState

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use shared::error::{AppError, ErrorCode};
use shared::models::{ChannelTemplate, DeductionRule};
use thiserror::Error;

use super::defaults::{calculator_presets, comparison_presets};

/// Template registry errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Channel template not found: {0}")]
    NotFound(String),

    #[error("Channel template is built-in and read-only: {0}")]
    ReadOnly(String),

    #[error("Channel template name must not be empty")]
    InvalidName,
}

pub type TemplateResult<T> = Result<T, TemplateError>;

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(name) => AppError::template_not_found(name),
            TemplateError::ReadOnly(name) => AppError::template_read_only(name),
            TemplateError::InvalidName => AppError::new(ErrorCode::TemplateNameInvalid),
        }
    }
}

/// Named deduction rule sets: read-only built-ins plus user-saved customs
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    builtins: Vec<ChannelTemplate>,
    custom: BTreeMap<String, ChannelTemplate>,
}

impl TemplateRegistry {
    /// Empty registry, no built-ins
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the calculator and comparison presets
    pub fn with_defaults() -> Self {
        let builtins = calculator_presets()
            .into_iter()
            .chain(comparison_presets())
            .collect();
        Self {
            builtins,
            custom: BTreeMap::new(),
        }
    }

    fn builtin(&self, name: &str) -> Option<&ChannelTemplate> {
        self.builtins.iter().find(|t| t.name == name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtin(name).is_some()
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&ChannelTemplate> {
        self.builtin(name).or_else(|| self.custom.get(name))
    }

    pub fn rules(&self, name: &str) -> Option<&[DeductionRule]> {
        self.get(name).map(|t| t.rules.as_slice())
    }

    /// Built-ins in seed order, then custom templates by name
    pub fn list(&self) -> Vec<&ChannelTemplate> {
        self.builtins.iter().chain(self.custom.values()).collect()
    }

    pub fn len(&self) -> usize {
        self.builtins.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert or replace a custom template
    ///
    /// The name is trimmed first. Built-in names cannot be overwritten.
    pub fn save_custom(
        &mut self,
        name: &str,
        rules: Vec<DeductionRule>,
    ) -> TemplateResult<&ChannelTemplate> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TemplateError::InvalidName);
        }
        if self.is_builtin(name) {
            return Err(TemplateError::ReadOnly(name.to_string()));
        }

        let template = ChannelTemplate {
            name: name.to_string(),
            rules,
            builtin: false,
        };
        let saved = match self.custom.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(template);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(template),
        };
        Ok(saved)
    }

    /// Remove a custom template, returning it
    pub fn remove_custom(&mut self, name: &str) -> TemplateResult<ChannelTemplate> {
        if self.is_builtin(name) {
            return Err(TemplateError::ReadOnly(name.to_string()));
        }
        self.custom
            .remove(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_rules() -> Vec<DeductionRule> {
        vec![
            DeductionRule::percentage("1", "Expedia Commission", 16.0),
            DeductionRule::fixed("2", "Cleaning", 25_000.0),
        ]
    }

    #[test]
    fn test_defaults_lookup() {
        let registry = TemplateRegistry::with_defaults();

        let agoda = registry.get("Agoda").unwrap();
        assert!(agoda.builtin);
        assert_eq!(agoda.rules.len(), 3);

        let direct = registry.rules("direct").unwrap();
        assert_eq!(direct.len(), 2);
        assert_eq!(direct[0].value, 2.5);

        assert_eq!(registry.rules("tiket").unwrap()[0].value, 17.0);
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let registry = TemplateRegistry::with_defaults();

        // "Agoda" and "agoda" are different presets
        assert_ne!(
            registry.rules("Agoda").unwrap()[0].name,
            registry.rules("agoda").unwrap()[0].name
        );
        assert!(registry.get("AGODA").is_none());
        assert!(registry.get("Direct").is_none());
    }

    #[test]
    fn test_unknown_name() {
        let registry = TemplateRegistry::with_defaults();
        assert!(registry.get("Expedia").is_none());
        assert!(registry.rules("Expedia").is_none());
    }

    #[test]
    fn test_save_and_get_custom() {
        let mut registry = TemplateRegistry::with_defaults();

        let saved = registry.save_custom("  Expedia ", custom_rules()).unwrap();
        assert_eq!(saved.name, "Expedia");
        assert!(!saved.builtin);

        assert_eq!(registry.rules("Expedia").unwrap(), custom_rules().as_slice());
        assert_eq!(registry.len(), 9);
    }

    #[test]
    fn test_save_replaces_existing_custom() {
        let mut registry = TemplateRegistry::new();
        registry.save_custom("Expedia", custom_rules()).unwrap();
        registry
            .save_custom("Expedia", vec![DeductionRule::percentage("1", "Commission", 12.0)])
            .unwrap();

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.rules("Expedia").unwrap()[0].value, 12.0);
    }

    #[test]
    fn test_save_empty_name_rejected() {
        let mut registry = TemplateRegistry::new();
        assert_eq!(
            registry.save_custom("   ", custom_rules()).unwrap_err(),
            TemplateError::InvalidName
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_builtins_are_read_only() {
        let mut registry = TemplateRegistry::with_defaults();

        assert_eq!(
            registry.save_custom("Agoda", custom_rules()).unwrap_err(),
            TemplateError::ReadOnly("Agoda".into())
        );
        assert_eq!(
            registry.remove_custom("direct").unwrap_err(),
            TemplateError::ReadOnly("direct".into())
        );
        assert_eq!(registry.rules("Agoda").unwrap()[0].value, 18.0);
    }

    #[test]
    fn test_remove_custom() {
        let mut registry = TemplateRegistry::with_defaults();
        registry.save_custom("Expedia", custom_rules()).unwrap();

        let removed = registry.remove_custom("Expedia").unwrap();
        assert_eq!(removed.name, "Expedia");
        assert!(registry.get("Expedia").is_none());

        assert_eq!(
            registry.remove_custom("Expedia").unwrap_err(),
            TemplateError::NotFound("Expedia".into())
        );
    }

    #[test]
    fn test_list_order() {
        let mut registry = TemplateRegistry::with_defaults();
        registry.save_custom("Zeta", custom_rules()).unwrap();
        registry.save_custom("Alpha", custom_rules()).unwrap();

        let names: Vec<&str> = registry.list().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Agoda",
                "Booking.com",
                "Traveloka",
                "direct",
                "agoda",
                "booking",
                "traveloka",
                "tiket",
                "Alpha",
                "Zeta",
            ]
        );
    }

    #[test]
    fn test_into_app_error() {
        let err: AppError = TemplateError::NotFound("Expedia".into()).into();
        assert_eq!(err.code, ErrorCode::TemplateNotFound);
        assert_eq!(err.http_status(), http::StatusCode::NOT_FOUND);

        let err: AppError = TemplateError::ReadOnly("Agoda".into()).into();
        assert_eq!(err.code, ErrorCode::TemplateReadOnly);

        let err: AppError = TemplateError::InvalidName.into();
        assert_eq!(err.code, ErrorCode::TemplateNameInvalid);
    }

    #[test]
    fn test_returned_rules_are_snapshots() {
        let mut registry = TemplateRegistry::new();
        let mut rules = custom_rules();
        registry.save_custom("Expedia", rules.clone()).unwrap();

        rules[0].value = 99.0;
        assert_eq!(registry.rules("Expedia").unwrap()[0].value, 16.0);
    }
}
