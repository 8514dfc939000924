//! Value types shared between the engine and its hosts.

use crate::error::PwgateError;
use crate::rules::{CompiledRule, RuleSpec};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The UI event that triggered an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cause {
    /// The user is still typing.
    TextChanged,
    /// The field lost focus.
    FocusLost,
    /// The user tried to submit the form.
    SubmitAttempted,
}

impl Cause {
    /// Whether this cause commits the input, allowing the error banner to show.
    pub fn is_commit(self) -> bool {
        matches!(self, Cause::FocusLost | Cause::SubmitAttempted)
    }
}

/// Construction-time configuration of a validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Rules in display order.
    pub rules: Vec<RuleSpec>,
    /// Banner shown when a committed evaluation fails.
    pub error_message: Option<String>,
    /// Whether per-rule hints are exposed for rendering.
    pub show_hints: bool,
    /// Rules that must pass; 0 or more than the rule count means all of them.
    pub required_satisfied_count: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            error_message: None,
            show_hints: true,
            required_satisfied_count: 0,
        }
    }
}

/// Aggregate result of one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub overall_valid: bool,
    pub satisfied_count: usize,
    /// Present only for committed causes on an invalid candidate.
    pub displayed_error: Option<String>,
}

/// Per-rule view state for hint rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleView {
    pub hint: String,
    pub is_satisfied: bool,
}

/// Lazily built matcher of one rule.
#[derive(Debug, Clone)]
pub(crate) enum Matcher {
    Pending,
    Ready(Regex),
    Invalid(PwgateError),
}

/// Evaluation state of one configured rule.
///
/// Identity is the position in the validator's rule list.
#[derive(Debug, Clone)]
pub struct RuleEvaluation {
    pub compiled_rule: CompiledRule,
    pub is_satisfied: bool,
    pub(crate) matcher: Matcher,
}

impl RuleEvaluation {
    pub(crate) fn new(compiled_rule: CompiledRule) -> Self {
        Self {
            compiled_rule,
            is_satisfied: false,
            matcher: Matcher::Pending,
        }
    }

    /// The compile error of this rule's pattern, once it has been evaluated.
    ///
    /// A rule with a pattern error is always unsatisfied; this tells that case
    /// apart from a candidate that simply fails the rule.
    pub fn pattern_error(&self) -> Option<&PwgateError> {
        match &self.matcher {
            Matcher::Invalid(err) => Some(err),
            _ => None,
        }
    }

    pub fn view(&self) -> RuleView {
        RuleView {
            hint: self.compiled_rule.hint.clone(),
            is_satisfied: self.is_satisfied,
        }
    }
}
