//! CLI argument parsing for pwgate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use pwgate::validator::Cause;
use std::path::PathBuf;

/// Pwgate: rule-based password strength validator.
///
/// Rules are declared in a YAML file (or the built-in sign-in defaults) and
/// evaluated the way a password field would: live while typing, committed on
/// focus loss or submit.
#[derive(Parser, Debug)]
#[command(name = "pwgate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for pwgate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a candidate password once.
    ///
    /// Prints the per-rule hints and the error banner (if any).
    /// Exits with code 2 when the candidate is rejected.
    Check(CheckArgs),

    /// Replay typing a candidate character by character.
    ///
    /// Evaluates every prefix as live typing, then commits with focus loss
    /// and submit, printing each step.
    Simulate(SimulateArgs),

    /// List the configured rules and their compiled patterns.
    Rules(RulesArgs),

    /// Write the default configuration as YAML.
    InitConfig(InitConfigArgs),
}

/// Evaluation trigger, as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseArg {
    /// Live typing: the error banner is never shown.
    TextChanged,
    /// The field lost focus.
    FocusLost,
    /// The form was submitted.
    Submit,
}

impl From<CauseArg> for Cause {
    fn from(arg: CauseArg) -> Self {
        match arg {
            CauseArg::TextChanged => Cause::TextChanged,
            CauseArg::FocusLost => Cause::FocusLost,
            CauseArg::Submit => Cause::SubmitAttempted,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Candidate password. Read from the first line of stdin when omitted.
    pub candidate: Option<String>,

    /// What triggered the evaluation.
    #[arg(long, value_enum, default_value = "submit")]
    pub cause: CauseArg,

    /// Path to a YAML config file (defaults to the built-in rules).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the outcome and rule states as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `simulate` command.
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Candidate password. Read from the first line of stdin when omitted.
    pub candidate: Option<String>,

    /// Path to a YAML config file (defaults to the built-in rules).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to a YAML config file (defaults to the built-in rules).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `init-config` command.
#[derive(Parser, Debug)]
pub struct InitConfigArgs {
    /// Where to write the config file.
    #[arg(short, long, default_value = "pwgate.yaml")]
    pub output: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
