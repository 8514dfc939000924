//! The password validator engine.

use super::types::{Cause, Matcher, RuleEvaluation, RuleView, ValidationOutcome, ValidatorConfig};
use crate::rules::compile;
use tracing::{debug, warn};

type Listener = Box<dyn FnMut(&ValidationOutcome)>;

/// Evaluates candidates against a fixed rule set and tracks what to display.
///
/// One instance belongs to one input field. `evaluate` takes `&mut self`, so
/// evaluations on the same instance can never overlap.
///
/// # Example
///
/// ```
/// use pwgate::rules::RuleSpec;
/// use pwgate::validator::{Cause, PasswordValidator, ValidatorConfig};
///
/// let mut validator = PasswordValidator::new(ValidatorConfig {
///     rules: vec![
///         RuleSpec::min_length(8, "8+ chars"),
///         RuleSpec::min_digits(1, "1 digit"),
///     ],
///     error_message: Some("weak password".to_string()),
///     ..Default::default()
/// });
///
/// let typing = validator.evaluate("abc", Cause::TextChanged);
/// assert!(!typing.overall_valid);
/// assert_eq!(typing.displayed_error, None);
///
/// let submitted = validator.evaluate("abc", Cause::SubmitAttempted);
/// assert_eq!(submitted.displayed_error.as_deref(), Some("weak password"));
/// ```
pub struct PasswordValidator {
    config: ValidatorConfig,
    evaluations: Vec<RuleEvaluation>,
    threshold: usize,
    outcome: ValidationOutcome,
    listeners: Vec<Listener>,
}

impl std::fmt::Debug for PasswordValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordValidator")
            .field("evaluations", &self.evaluations)
            .field("threshold", &self.threshold)
            .field("outcome", &self.outcome)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PasswordValidator {
    /// Compile the configured rules and normalize the satisfaction threshold.
    pub fn new(config: ValidatorConfig) -> Self {
        let evaluations = config
            .rules
            .iter()
            .map(|spec| RuleEvaluation::new(compile(spec)))
            .collect::<Vec<_>>();
        let threshold = normalize_threshold(config.required_satisfied_count, evaluations.len());

        Self {
            config,
            evaluations,
            threshold,
            outcome: ValidationOutcome::default(),
            listeners: Vec::new(),
        }
    }

    /// Re-evaluate every rule against `candidate` and recompute the outcome.
    ///
    /// Rule states are always refreshed. The error banner is only set for
    /// committed causes (`FocusLost`, `SubmitAttempted`) on an invalid
    /// candidate. Registered listeners are notified before returning.
    pub fn evaluate(&mut self, candidate: &str, cause: Cause) -> ValidationOutcome {
        let satisfied_count = if candidate.is_empty() {
            for evaluation in &mut self.evaluations {
                evaluation.is_satisfied = false;
            }
            0
        } else {
            self.evaluations
                .iter_mut()
                .enumerate()
                .map(|(index, evaluation)| evaluate_rule(index, evaluation, candidate))
                .filter(|&satisfied| satisfied)
                .count()
        };

        let overall_valid = !candidate.is_empty() && satisfied_count >= self.threshold;
        let displayed_error = if cause.is_commit() && !overall_valid {
            self.config.error_message.clone()
        } else {
            None
        };

        debug!(
            ?cause,
            satisfied_count,
            threshold = self.threshold,
            overall_valid,
            "password evaluated"
        );

        self.outcome = ValidationOutcome {
            overall_valid,
            satisfied_count,
            displayed_error,
        };

        for listener in &mut self.listeners {
            listener(&self.outcome);
        }

        self.outcome.clone()
    }

    /// Register a listener called with the fresh outcome after every evaluation.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ValidationOutcome) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// The outcome of the last evaluation (all-false before the first one).
    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn evaluations(&self) -> &[RuleEvaluation] {
        &self.evaluations
    }

    /// Per-rule hint and state in declared order, regardless of `show_hints`.
    pub fn rule_views(&self) -> Vec<RuleView> {
        self.evaluations.iter().map(RuleEvaluation::view).collect()
    }

    /// Per-rule view state for rendering, empty when hints are disabled.
    pub fn visible_hints(&self) -> Vec<RuleView> {
        if self.config.show_hints {
            self.rule_views()
        } else {
            Vec::new()
        }
    }

    /// Whether the error banner is currently shown.
    ///
    /// Hosts use this to render unsatisfied hints in an error style.
    pub fn is_error(&self) -> bool {
        self.outcome.displayed_error.is_some()
    }

    /// Number of rules that must pass, after normalization.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }
}

/// Clamp the configured threshold: 0 or more than `rule_count` means all rules.
pub fn normalize_threshold(configured: usize, rule_count: usize) -> usize {
    if configured == 0 || configured > rule_count {
        rule_count
    } else {
        configured
    }
}

/// Full-match one rule, building its matcher on first use.
fn evaluate_rule(index: usize, evaluation: &mut RuleEvaluation, candidate: &str) -> bool {
    if matches!(evaluation.matcher, Matcher::Pending) {
        evaluation.matcher = match evaluation.compiled_rule.matcher() {
            Ok(regex) => Matcher::Ready(regex),
            Err(err) => {
                warn!(
                    rule = index,
                    hint = %evaluation.compiled_rule.hint,
                    error = %err,
                    "rule pattern failed to compile, treating rule as unsatisfied"
                );
                Matcher::Invalid(err)
            }
        };
    }

    evaluation.is_satisfied = match &evaluation.matcher {
        Matcher::Ready(regex) => regex.is_match(candidate),
        Matcher::Pending | Matcher::Invalid(_) => false,
    };
    evaluation.is_satisfied
}
