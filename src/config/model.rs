//! Config struct definition and default implementation.

use super::types::*;
use crate::rules::RuleSpec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Configuration of one password field.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Validator settings
    // =========================================================================
    /// Password rules in display order.
    #[serde(default = "default_rules")]
    pub rules: Vec<RuleSpec>,

    /// Error banner (or message key) shown when a committed evaluation fails.
    #[serde(default = "default_error_message")]
    pub error_message: Option<String>,

    /// Whether to render the per-rule hints.
    #[serde(default = "default_true")]
    pub show_hints: bool,

    /// Number of rules that must pass (0 = all rules).
    #[serde(default)]
    pub required_satisfied_count: usize,

    // =========================================================================
    // Display settings
    // =========================================================================
    /// Display text per message key; unmapped keys are shown as-is.
    #[serde(default = "default_messages")]
    pub messages: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: default_rules(),
            error_message: default_error_message(),
            show_hints: default_true(),
            required_satisfied_count: 0,
            messages: default_messages(),
        }
    }
}
