//! Implementation of the `pwgate check` command.

use super::{display, load_config, resolve_candidate};
use crate::cli::CheckArgs;
use pwgate::config::Config;
use pwgate::error::{PwgateError, Result};
use pwgate::validator::{Cause, PasswordValidator, RuleView, ValidationOutcome};
use serde::Serialize;

/// Result of a single evaluation, as printed by `check --json`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub cause: Cause,
    pub outcome: ValidationOutcome,
    pub threshold: usize,
    /// Hint rows to render; empty when `show_hints` is off.
    pub rules: Vec<RuleView>,
    pub is_error: bool,
}

/// Execute the `pwgate check` command.
pub fn cmd_check(args: CheckArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let candidate = resolve_candidate(args.candidate)?;
    let report = check(&config, &candidate, args.cause.into());

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            PwgateError::UserError(format!("failed to serialize report to JSON: {}", e))
        })?;
        println!("{}", json);
    } else {
        for row in display::hint_rows(&config, &report.rules, report.is_error) {
            println!("{}", row);
        }
        println!(
            "{}",
            display::summary(&report.outcome, config.rules.len(), report.threshold)
        );
    }

    verdict(&config, &report)
}

/// Evaluate `candidate` once with a fresh validator.
pub fn check(config: &Config, candidate: &str, cause: Cause) -> CheckReport {
    let mut validator = PasswordValidator::new(config.validator_config());
    let outcome = validator.evaluate(candidate, cause);

    CheckReport {
        cause,
        outcome,
        threshold: validator.threshold(),
        rules: validator.visible_hints(),
        is_error: validator.is_error(),
    }
}

/// Map a report to the command result: rejected candidates fail with exit code 2.
///
/// The error text is the localized banner when the cause displays one, or the
/// plain verdict while typing.
pub fn verdict(config: &Config, report: &CheckReport) -> Result<()> {
    if report.outcome.overall_valid {
        return Ok(());
    }

    let message = display::banner(config, &report.outcome).unwrap_or_else(|| {
        display::summary(&report.outcome, config.rules.len(), report.threshold)
    });
    Err(PwgateError::ValidationError(message))
}
