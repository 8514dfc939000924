//! Implementation of the `pwgate simulate` command.
//!
//! Replays a password field session: one live evaluation per typed character,
//! then focus loss, then submit. The trace shows the hint states moving while
//! the error banner stays hidden until the input is committed.

use super::{display, load_config, resolve_candidate};
use crate::cli::SimulateArgs;
use pwgate::config::Config;
use pwgate::error::{PwgateError, Result};
use pwgate::validator::{Cause, PasswordValidator, RuleView, ValidationOutcome};

/// One evaluation in a simulated session.
#[derive(Debug, Clone)]
pub struct SimulationStep {
    pub cause: Cause,
    /// Characters of the candidate entered so far.
    pub typed: usize,
    pub outcome: ValidationOutcome,
    pub rules: Vec<RuleView>,
}

/// A replayed session and the threshold its validator applied.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub threshold: usize,
    pub steps: Vec<SimulationStep>,
}

/// Execute the `pwgate simulate` command.
pub fn cmd_simulate(args: SimulateArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let candidate = resolve_candidate(args.candidate)?;
    let simulation = simulate(&config, &candidate);

    for step in &simulation.steps {
        let label = match step.cause {
            Cause::TextChanged => format!("typed {:>3}", step.typed),
            Cause::FocusLost => "focus lost".to_string(),
            Cause::SubmitAttempted => "submit".to_string(),
        };
        let mut line = format!("{:<10}  {}", label, display::state_marks(&step.rules));
        if let Some(banner) = display::banner(&config, &step.outcome) {
            line.push_str(&format!("  Error: {}", banner));
        }
        println!("{}", line.trim_end());
    }

    match simulation.steps.last() {
        Some(last) if !last.outcome.overall_valid => Err(PwgateError::ValidationError(
            display::summary(&last.outcome, config.rules.len(), simulation.threshold),
        )),
        _ => Ok(()),
    }
}

/// Run the session against a single validator instance.
pub fn simulate(config: &Config, candidate: &str) -> Simulation {
    let mut validator = PasswordValidator::new(config.validator_config());
    let mut steps = Vec::new();

    let prefix_ends = candidate
        .char_indices()
        .map(|(index, c)| index + c.len_utf8());
    for (typed, end) in prefix_ends.enumerate() {
        let outcome = validator.evaluate(&candidate[..end], Cause::TextChanged);
        steps.push(SimulationStep {
            cause: Cause::TextChanged,
            typed: typed + 1,
            outcome,
            rules: validator.visible_hints(),
        });
    }

    let typed = candidate.chars().count();
    for cause in [Cause::FocusLost, Cause::SubmitAttempted] {
        let outcome = validator.evaluate(candidate, cause);
        steps.push(SimulationStep {
            cause,
            typed,
            outcome,
            rules: validator.visible_hints(),
        });
    }

    Simulation {
        threshold: validator.threshold(),
        steps,
    }
}
