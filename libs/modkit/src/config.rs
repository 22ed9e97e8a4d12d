//! Raw module configuration access.

use std::collections::HashMap;

/// Source of raw per-module configuration.
///
/// The value returned for a module is its whole section, i.e.
/// `modules.<name>`; the module's own settings live under its `config` key.
pub trait ConfigProvider: Send + Sync {
    /// Returns the raw section for `module_name`, if present.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

impl ConfigProvider for HashMap<String, serde_json::Value> {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.get(module_name)
    }
}

/// Extracts the `config` subtree of a module section.
///
/// Returns `Null` when the module has no section or the section has no
/// `config` key.
#[must_use]
pub fn module_settings(provider: &dyn ConfigProvider, module_name: &str) -> serde_json::Value {
    provider
        .get_module_config(module_name)
        .and_then(|section| section.get("config"))
        .cloned()
        .unwrap_or(serde_json::Value::Null)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn settings_are_taken_from_config_key() {
        let mut modules = HashMap::new();
        modules.insert("security".to_owned(), json!({ "config": { "a": 1 } }));

        assert_eq!(module_settings(&modules, "security"), json!({ "a": 1 }));
    }

    #[test]
    fn missing_section_yields_null() {
        let modules: HashMap<String, serde_json::Value> = HashMap::new();
        assert!(module_settings(&modules, "security").is_null());
    }

    #[test]
    fn section_without_config_key_yields_null() {
        let mut modules = HashMap::new();
        modules.insert("security".to_owned(), json!({ "database": {} }));

        assert!(module_settings(&modules, "security").is_null());
    }
}
