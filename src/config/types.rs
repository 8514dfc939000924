//! Default values for the config model.

use crate::rules::RuleSpec;
use std::collections::BTreeMap;

/// Message key of the minimum-length hint.
pub const HINT_MIN_LENGTH: &str = "ruleDescriptionMinLength";
/// Message key of the uppercase hint.
pub const HINT_MIN_CAPITAL: &str = "ruleDescriptionMin1Capital";
/// Message key of the digit hint.
pub const HINT_MIN_DIGIT: &str = "ruleDescriptionMin1Digit";
/// Message key of the special character hint.
pub const HINT_MIN_SPECIAL: &str = "ruleDescriptionMin1SpecialChar";
/// Message key of the error banner.
pub const ERROR_PASSWORD_VALIDATION: &str = "errorPasswordValidation";

/// Special characters accepted by the default rule set.
pub const DEFAULT_SPECIAL_CHARS: [char; 5] = ['?', '=', '#', '/', '%'];

/// Default rules: 8+ characters, 1 uppercase letter, 1 digit, 1 special character.
pub fn default_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::min_length(8, HINT_MIN_LENGTH),
        RuleSpec::min_uppercase(1, HINT_MIN_CAPITAL),
        RuleSpec::min_digits(1, HINT_MIN_DIGIT),
        RuleSpec::min_special(1, DEFAULT_SPECIAL_CHARS, HINT_MIN_SPECIAL),
    ]
}

/// English display text for the default keys.
pub fn default_messages() -> BTreeMap<String, String> {
    [
        (HINT_MIN_LENGTH, "At least 8 characters"),
        (HINT_MIN_CAPITAL, "At least 1 capital letter"),
        (HINT_MIN_DIGIT, "At least 1 digit"),
        (HINT_MIN_SPECIAL, "At least 1 special character (? = # / %)"),
        (
            ERROR_PASSWORD_VALIDATION,
            "The password does not meet the requirements",
        ),
    ]
    .into_iter()
    .map(|(key, text)| (key.to_string(), text.to_string()))
    .collect()
}

// Default value functions for serde
pub(crate) fn default_error_message() -> Option<String> {
    Some(ERROR_PASSWORD_VALIDATION.to_string())
}
pub(crate) fn default_true() -> bool {
    true
}
