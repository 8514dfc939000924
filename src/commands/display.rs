//! Text rendering shared by the evaluation commands.

use pwgate::config::Config;
use pwgate::validator::{RuleView, ValidationOutcome};

/// Render one hint row per rule.
///
/// Satisfied rules get `[x]`. Unsatisfied rules get `[ ]`, or `[!]` while the
/// error banner is shown.
pub fn hint_rows(config: &Config, views: &[RuleView], is_error: bool) -> Vec<String> {
    views
        .iter()
        .map(|view| {
            let mark = match (view.is_satisfied, is_error) {
                (true, _) => "[x]",
                (false, true) => "[!]",
                (false, false) => "[ ]",
            };
            format!("  {} {}", mark, config.localize(&view.hint))
        })
        .collect()
}

/// The localized error banner, if the outcome displays one.
pub fn banner(config: &Config, outcome: &ValidationOutcome) -> Option<String> {
    outcome
        .displayed_error
        .as_deref()
        .map(|key| config.localize(key).to_string())
}

/// One-line verdict, e.g. `rejected (2 of 4 rules satisfied, 4 required)`.
pub fn summary(outcome: &ValidationOutcome, rule_count: usize, threshold: usize) -> String {
    format!(
        "{} ({} of {} rules satisfied, {} required)",
        if outcome.overall_valid {
            "accepted"
        } else {
            "rejected"
        },
        outcome.satisfied_count,
        rule_count,
        threshold
    )
}

/// Compact per-rule state, e.g. `[x][ ][x][ ]`.
pub fn state_marks(views: &[RuleView]) -> String {
    views
        .iter()
        .map(|view| if view.is_satisfied { "[x]" } else { "[ ]" })
        .collect()
}
