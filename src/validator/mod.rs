//! Validator engine for pwgate.
//!
//! Owns the ordered rule evaluations of one input field and produces a
//! `ValidationOutcome` for each (candidate, cause) pair:
//! - Empty candidates fail every rule
//! - Non-empty candidates are full-matched against every rule independently
//! - Overall validity is "at least N of M rules satisfied"
//! - The error banner only shows for committed causes (focus lost, submit);
//!   per-rule hint states are always kept current
//!
//! Error handling:
//! - A custom pattern that fails to compile makes its rule unsatisfied and is
//!   reported through a `tracing` warning and `RuleEvaluation::pattern_error`,
//!   never through the user-facing banner

mod engine;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use engine::{PasswordValidator, normalize_threshold};
pub use types::{Cause, RuleEvaluation, RuleView, ValidationOutcome, ValidatorConfig};
