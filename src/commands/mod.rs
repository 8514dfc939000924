//! Command implementations for pwgate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config and candidate loading they share.

mod check;
mod display;
mod init_config;
mod rules;
mod simulate;


use crate::cli::Command;
use pwgate::config::Config;
use pwgate::error::{PwgateError, Result};
use std::io::BufRead;
use std::path::Path;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Check(args) => check::cmd_check(args),
        Command::Simulate(args) => simulate::cmd_simulate(args),
        Command::Rules(args) => rules::cmd_rules(args),
        Command::InitConfig(args) => init_config::cmd_init_config(args),
    }
}

/// Load the config file if one was given, otherwise the built-in defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Ok(Config::default()),
    }
}

/// Use the candidate argument, or read one line from stdin.
fn resolve_candidate(candidate: Option<String>) -> Result<String> {
    match candidate {
        Some(candidate) => Ok(candidate),
        None => read_candidate(std::io::stdin().lock()),
    }
}

/// Read the first line of `reader`, without its line terminator.
fn read_candidate<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(|e| {
        PwgateError::UserError(format!("failed to read candidate from stdin: {}", e))
    })?;

    let trimmed = line.strip_suffix('\n').unwrap_or(&line);
    let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
    Ok(trimmed.to_string())
}
