//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{PwgateError, Result};
use crate::rules::RuleSpec;
use crate::validator::ValidatorConfig;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the config file
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PwgateError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PwgateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PwgateError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PwgateError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `messages` keys must be non-empty
    /// - `min_special_char_count` rules with a positive count need `allowed_chars`
    ///
    /// Custom pattern syntax is deliberately not checked here: a broken pattern
    /// only fails its own rule when evaluated.
    pub fn validate(&self) -> Result<()> {
        if self.messages.keys().any(|key| key.is_empty()) {
            return Err(PwgateError::UserError(
                "config validation failed: messages keys must be non-empty".to_string(),
            ));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if let RuleSpec::MinSpecialCharCount {
                count,
                allowed_chars,
                hint,
            } = rule
                && *count > 0
                && allowed_chars.is_empty()
            {
                return Err(PwgateError::UserError(format!(
                    "config validation failed: rule {} ('{}') requires {} special character(s) but allowed_chars is empty",
                    index + 1,
                    hint,
                    count
                )));
            }
        }

        Ok(())
    }

    /// Build the validator configuration for this field.
    pub fn validator_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            rules: self.rules.clone(),
            error_message: self.error_message.clone(),
            show_hints: self.show_hints,
            required_satisfied_count: self.required_satisfied_count,
        }
    }

    /// Resolve a message key to display text, falling back to the key itself.
    pub fn localize<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages.get(key).map(String::as_str).unwrap_or(key)
    }
}
