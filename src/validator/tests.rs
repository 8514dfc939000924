//! Tests for the validator engine.

use std::cell::RefCell;
use std::rc::Rc;

use super::engine::{PasswordValidator, normalize_threshold};
use super::types::{Cause, RuleView, ValidationOutcome, ValidatorConfig};
use crate::error::PwgateError;
use crate::rules::RuleSpec;

const ALL_CAUSES: [Cause; 3] = [Cause::TextChanged, Cause::FocusLost, Cause::SubmitAttempted];

// =========================================================================
// Helper functions
// =========================================================================

/// The sign-in screen rules: 8+ chars, 1 uppercase, 1 digit, 1 special.
fn signin_rules() -> Vec<RuleSpec> {
    vec![
        RuleSpec::min_length(8, "8+ chars"),
        RuleSpec::min_uppercase(1, "1 upper"),
        RuleSpec::min_digits(1, "1 digit"),
        RuleSpec::min_special(1, ['?', '=', '#', '/', '%'], "1 special"),
    ]
}

fn make_validator(rules: Vec<RuleSpec>, required: usize) -> PasswordValidator {
    PasswordValidator::new(ValidatorConfig {
        rules,
        error_message: Some("weak password".to_string()),
        show_hints: true,
        required_satisfied_count: required,
    })
}

fn states(validator: &PasswordValidator) -> Vec<bool> {
    validator
        .evaluations()
        .iter()
        .map(|e| e.is_satisfied)
        .collect()
}

// =========================================================================
// Sign-in scenario
// =========================================================================

#[test]
fn test_signin_weak_password_on_submit() {
    let mut validator = make_validator(signin_rules(), 0);

    let outcome = validator.evaluate("abc12345", Cause::SubmitAttempted);

    assert!(!outcome.overall_valid);
    assert_eq!(outcome.satisfied_count, 2);
    assert_eq!(outcome.displayed_error.as_deref(), Some("weak password"));
    assert_eq!(states(&validator), vec![true, false, true, false]);
}

#[test]
fn test_signin_strong_password_on_submit() {
    let mut validator = make_validator(signin_rules(), 0);

    let outcome = validator.evaluate("Abc123?5", Cause::SubmitAttempted);

    assert!(outcome.overall_valid);
    assert_eq!(outcome.satisfied_count, 4);
    assert_eq!(outcome.displayed_error, None);
    assert_eq!(states(&validator), vec![true, true, true, true]);
}

#[test]
fn test_outcome_is_stored_and_returned() {
    let mut validator = make_validator(signin_rules(), 0);
    assert_eq!(validator.outcome(), &ValidationOutcome::default());

    let returned = validator.evaluate("Abc123?5", Cause::FocusLost);
    assert_eq!(validator.outcome(), &returned);
}

// =========================================================================
// Empty candidates
// =========================================================================

#[test]
fn test_empty_candidate_fails_everything() {
    for cause in ALL_CAUSES {
        let mut validator = make_validator(signin_rules(), 0);
        validator.evaluate("Abc123?5", Cause::TextChanged);
        assert_eq!(states(&validator), vec![true; 4]);

        let outcome = validator.evaluate("", cause);

        assert!(!outcome.overall_valid, "cause {:?}", cause);
        assert_eq!(outcome.satisfied_count, 0);
        assert_eq!(states(&validator), vec![false; 4]);
    }
}

#[test]
fn test_empty_candidate_fails_rules_that_would_match_empty() {
    let mut validator = make_validator(vec![RuleSpec::min_length(0, "anything")], 0);

    let outcome = validator.evaluate("", Cause::SubmitAttempted);

    assert!(!outcome.overall_valid);
    assert_eq!(states(&validator), vec![false]);
    assert_eq!(outcome.displayed_error.as_deref(), Some("weak password"));
}

// =========================================================================
// Display policy
// =========================================================================

#[test]
fn test_text_changed_never_shows_error() {
    let mut validator = make_validator(signin_rules(), 0);

    for candidate in ["", "a", "abc12345", "Abc123?5"] {
        let outcome = validator.evaluate(candidate, Cause::TextChanged);
        assert_eq!(outcome.displayed_error, None, "candidate '{}'", candidate);
        assert!(!validator.is_error());
    }
}

#[test]
fn test_committed_causes_show_error_only_when_invalid() {
    for cause in [Cause::FocusLost, Cause::SubmitAttempted] {
        let mut validator = make_validator(signin_rules(), 0);

        let outcome = validator.evaluate("abc", cause);
        assert_eq!(outcome.displayed_error.as_deref(), Some("weak password"));
        assert!(validator.is_error());

        let outcome = validator.evaluate("Abc123?5", cause);
        assert_eq!(outcome.displayed_error, None);
        assert!(!validator.is_error());
    }
}

#[test]
fn test_banner_clears_when_typing_resumes() {
    let mut validator = make_validator(signin_rules(), 0);

    validator.evaluate("abc", Cause::FocusLost);
    assert!(validator.is_error());

    validator.evaluate("abcd", Cause::TextChanged);
    assert!(!validator.is_error());
}

#[test]
fn test_missing_error_message_is_never_displayed() {
    let mut validator = PasswordValidator::new(ValidatorConfig {
        rules: signin_rules(),
        ..Default::default()
    });

    let outcome = validator.evaluate("abc", Cause::SubmitAttempted);

    assert!(!outcome.overall_valid);
    assert_eq!(outcome.displayed_error, None);
}

#[test]
fn test_hints_stay_current_while_typing() {
    let mut validator = make_validator(signin_rules(), 0);

    validator.evaluate("A", Cause::TextChanged);
    assert_eq!(states(&validator), vec![false, true, false, false]);

    validator.evaluate("A1", Cause::TextChanged);
    assert_eq!(states(&validator), vec![false, true, true, false]);

    validator.evaluate("A1#", Cause::TextChanged);
    assert_eq!(states(&validator), vec![false, true, true, true]);
}

#[test]
fn test_each_evaluation_ignores_previous_causes() {
    let mut validator = make_validator(signin_rules(), 0);
    validator.evaluate("abc", Cause::SubmitAttempted);

    let mut fresh = make_validator(signin_rules(), 0);
    assert_eq!(
        validator.evaluate("abc1", Cause::FocusLost),
        fresh.evaluate("abc1", Cause::FocusLost)
    );
}

// =========================================================================
// Hint views
// =========================================================================

#[test]
fn test_rule_views_in_declared_order() {
    let mut validator = make_validator(signin_rules(), 0);
    validator.evaluate("abc12345", Cause::TextChanged);

    let views = validator.rule_views();
    assert_eq!(
        views,
        vec![
            RuleView {
                hint: "8+ chars".to_string(),
                is_satisfied: true
            },
            RuleView {
                hint: "1 upper".to_string(),
                is_satisfied: false
            },
            RuleView {
                hint: "1 digit".to_string(),
                is_satisfied: true
            },
            RuleView {
                hint: "1 special".to_string(),
                is_satisfied: false
            },
        ]
    );
    assert_eq!(validator.visible_hints(), views);
}

#[test]
fn test_visible_hints_gated_by_show_hints() {
    let mut validator = PasswordValidator::new(ValidatorConfig {
        rules: signin_rules(),
        show_hints: false,
        ..Default::default()
    });
    validator.evaluate("abc12345", Cause::TextChanged);

    assert!(validator.visible_hints().is_empty());
    assert_eq!(validator.rule_views().len(), 4);
}

// =========================================================================
// Threshold
// =========================================================================

#[test]
fn test_normalize_threshold() {
    assert_eq!(normalize_threshold(0, 4), 4);
    assert_eq!(normalize_threshold(5, 4), 4);
    assert_eq!(normalize_threshold(1, 4), 1);
    assert_eq!(normalize_threshold(4, 4), 4);
    assert_eq!(normalize_threshold(0, 0), 0);
    assert_eq!(normalize_threshold(3, 0), 0);
}

#[test]
fn test_zero_threshold_behaves_like_all_rules() {
    let candidates = ["", "a", "abc12345", "ABC12345", "Abc123?5", "Abcdefg?"];

    for candidate in candidates {
        for cause in ALL_CAUSES {
            let mut defaulted = make_validator(signin_rules(), 0);
            let mut explicit = make_validator(signin_rules(), 4);
            assert_eq!(
                defaulted.evaluate(candidate, cause),
                explicit.evaluate(candidate, cause),
                "candidate '{}'",
                candidate
            );
        }
    }
}

#[test]
fn test_oversized_threshold_normalized() {
    let validator = make_validator(signin_rules(), 10);
    assert_eq!(validator.threshold(), 4);
}

#[test]
fn test_n_of_m_counts_any_rules() {
    let mut validator = make_validator(signin_rules(), 3);
    assert_eq!(validator.threshold(), 3);

    // length, digit, special
    assert!(validator.evaluate("abc12345?", Cause::SubmitAttempted).overall_valid);
    // upper, digit, special
    assert!(validator.evaluate("A1?", Cause::SubmitAttempted).overall_valid);
    // length, digit
    let outcome = validator.evaluate("abc12345", Cause::SubmitAttempted);
    assert!(!outcome.overall_valid);
    assert_eq!(outcome.satisfied_count, 2);
}

#[test]
fn test_no_rules_valid_iff_non_empty() {
    let mut validator = make_validator(Vec::new(), 0);
    assert_eq!(validator.threshold(), 0);

    let outcome = validator.evaluate("x", Cause::SubmitAttempted);
    assert!(outcome.overall_valid);
    assert_eq!(outcome.satisfied_count, 0);
    assert_eq!(outcome.displayed_error, None);

    let outcome = validator.evaluate("", Cause::SubmitAttempted);
    assert!(!outcome.overall_valid);
    assert_eq!(outcome.displayed_error.as_deref(), Some("weak password"));
}

// =========================================================================
// Escaping and custom patterns
// =========================================================================

#[test]
fn test_special_metacharacters_in_engine() {
    let rules = vec![RuleSpec::min_special(1, ['-', ']', '\\'], "special")];
    let mut validator = make_validator(rules, 0);

    let outcome = validator.evaluate("a-b", Cause::SubmitAttempted);

    assert!(outcome.overall_valid);
    assert_eq!(states(&validator), vec![true]);
    assert!(validator.evaluations()[0].pattern_error().is_none());
}

#[test]
fn test_large_counts_are_evaluated_not_reported_invalid() {
    let mut validator = make_validator(
        vec![
            RuleSpec::min_length(300, "300+ chars"),
            RuleSpec::min_uppercase(200, "200 upper"),
        ],
        0,
    );

    let outcome = validator.evaluate(&"Ab".repeat(200), Cause::SubmitAttempted);

    assert!(outcome.overall_valid);
    assert_eq!(states(&validator), vec![true, true]);
    for evaluation in validator.evaluations() {
        assert!(evaluation.pattern_error().is_none());
    }

    let outcome = validator.evaluate(&"A".repeat(199), Cause::SubmitAttempted);
    assert!(!outcome.overall_valid);
    assert_eq!(states(&validator), vec![false, false]);
}

#[test]
fn test_verbose_custom_pattern_in_engine() {
    let rules = vec![RuleSpec::custom("(?x) [a-z]+ # lowercase", "lowercase")];
    let mut validator = make_validator(rules, 0);

    assert!(validator.evaluate("abc", Cause::SubmitAttempted).overall_valid);
    assert!(validator.evaluations()[0].pattern_error().is_none());
    assert!(!validator.evaluate("abc1", Cause::SubmitAttempted).overall_valid);
}

#[test]
fn test_invalid_custom_pattern_fails_only_that_rule() {
    let mut validator = make_validator(
        vec![
            RuleSpec::min_length(3, "3+ chars"),
            RuleSpec::custom("([a-z]", "broken"),
            RuleSpec::min_digits(1, "1 digit"),
        ],
        2,
    );

    let outcome = validator.evaluate("abc1", Cause::SubmitAttempted);

    assert!(outcome.overall_valid);
    assert_eq!(outcome.satisfied_count, 2);
    assert_eq!(states(&validator), vec![true, false, true]);

    let evaluations = validator.evaluations();
    assert!(evaluations[0].pattern_error().is_none());
    assert!(matches!(
        evaluations[1].pattern_error(),
        Some(PwgateError::InvalidPattern { pattern, .. }) if pattern == "([a-z]"
    ));
    assert!(evaluations[2].pattern_error().is_none());
}

#[test]
fn test_invalid_pattern_is_not_reported_before_evaluation() {
    let mut validator = make_validator(vec![RuleSpec::custom("(", "broken")], 0);
    assert!(validator.evaluations()[0].pattern_error().is_none());

    // Empty candidates short-circuit before any matcher is built.
    validator.evaluate("", Cause::TextChanged);
    assert!(validator.evaluations()[0].pattern_error().is_none());

    validator.evaluate("x", Cause::TextChanged);
    assert!(validator.evaluations()[0].pattern_error().is_some());
}

#[test]
fn test_pattern_error_stays_out_of_banner() {
    let mut validator = make_validator(vec![RuleSpec::custom("(", "broken")], 0);

    let outcome = validator.evaluate("x", Cause::SubmitAttempted);

    assert_eq!(outcome.displayed_error.as_deref(), Some("weak password"));
}

// =========================================================================
// Listeners
// =========================================================================

#[test]
fn test_listeners_receive_every_outcome() {
    let seen: Rc<RefCell<Vec<ValidationOutcome>>> = Rc::new(RefCell::new(Vec::new()));
    let mut validator = make_validator(signin_rules(), 0);

    let sink = Rc::clone(&seen);
    validator.subscribe(move |outcome| sink.borrow_mut().push(outcome.clone()));

    let first = validator.evaluate("abc", Cause::TextChanged);
    let second = validator.evaluate("Abc123?5", Cause::SubmitAttempted);

    assert_eq!(*seen.borrow(), vec![first, second]);
}

#[test]
fn test_multiple_listeners_notified_in_order() {
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let mut validator = make_validator(signin_rules(), 0);

    let a = Rc::clone(&order);
    validator.subscribe(move |_| a.borrow_mut().push("first"));
    let b = Rc::clone(&order);
    validator.subscribe(move |_| b.borrow_mut().push("second"));

    validator.evaluate("x", Cause::FocusLost);

    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn test_debug_output_omits_listener_internals() {
    let mut validator = make_validator(signin_rules(), 0);
    validator.subscribe(|_| {});

    let rendered = format!("{:?}", validator);
    assert!(rendered.contains("PasswordValidator"));
    assert!(rendered.contains("listeners: 1"));
}

#[test]
fn test_cause_commit_classification() {
    assert!(!Cause::TextChanged.is_commit());
    assert!(Cause::FocusLost.is_commit());
    assert!(Cause::SubmitAttempted.is_commit());
}
