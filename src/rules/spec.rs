//! Declarative rule specifications.

use serde::{Deserialize, Serialize};

/// One password constraint, as declared in the validator config.
///
/// In YAML each rule is a map tagged by `kind`:
///
/// ```yaml
/// - kind: min_special_char_count
///   count: 1
///   allowed_chars: ["?", "=", "#"]
///   hint: ruleDescriptionMin1SpecialChar
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleSpec {
    /// At least `length` characters.
    MinLength { length: usize, hint: String },

    /// At least `count` Unicode uppercase letters.
    MinUppercaseCount { count: usize, hint: String },

    /// At least `count` decimal digits.
    MinDigitCount { count: usize, hint: String },

    /// At least `count` characters drawn from `allowed_chars`.
    MinSpecialCharCount {
        count: usize,
        #[serde(default)]
        allowed_chars: Vec<char>,
        hint: String,
    },

    /// Caller-supplied pattern, matched against the whole candidate.
    CustomPattern { pattern: String, hint: String },
}

impl RuleSpec {
    pub fn min_length(length: usize, hint: impl Into<String>) -> Self {
        Self::MinLength {
            length,
            hint: hint.into(),
        }
    }

    pub fn min_uppercase(count: usize, hint: impl Into<String>) -> Self {
        Self::MinUppercaseCount {
            count,
            hint: hint.into(),
        }
    }

    pub fn min_digits(count: usize, hint: impl Into<String>) -> Self {
        Self::MinDigitCount {
            count,
            hint: hint.into(),
        }
    }

    pub fn min_special(
        count: usize,
        allowed_chars: impl IntoIterator<Item = char>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MinSpecialCharCount {
            count,
            allowed_chars: allowed_chars.into_iter().collect(),
            hint: hint.into(),
        }
    }

    pub fn custom(pattern: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::CustomPattern {
            pattern: pattern.into(),
            hint: hint.into(),
        }
    }

    /// The human-readable hint (or localization key) for this rule.
    pub fn hint(&self) -> &str {
        match self {
            Self::MinLength { hint, .. }
            | Self::MinUppercaseCount { hint, .. }
            | Self::MinDigitCount { hint, .. }
            | Self::MinSpecialCharCount { hint, .. }
            | Self::CustomPattern { hint, .. } => hint,
        }
    }

    /// The config `kind` tag of this rule.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::MinLength { .. } => "min_length",
            Self::MinUppercaseCount { .. } => "min_uppercase_count",
            Self::MinDigitCount { .. } => "min_digit_count",
            Self::MinSpecialCharCount { .. } => "min_special_char_count",
            Self::CustomPattern { .. } => "custom_pattern",
        }
    }
}
