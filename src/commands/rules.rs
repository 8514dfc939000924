//! Implementation of the `pwgate rules` command.

use super::load_config;
use crate::cli::RulesArgs;
use pwgate::config::Config;
use pwgate::error::Result;
use pwgate::rules::compile;

/// Execute the `pwgate rules` command.
pub fn cmd_rules(args: RulesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    if config.rules.is_empty() {
        println!("No rules configured. Any non-empty password is accepted.");
        return Ok(());
    }

    for line in describe_rules(&config) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per rule: position, kind, compiled pattern and localized hint.
///
/// Rules whose pattern the regex engine rejects are flagged here, since the
/// validator itself only reports them as unsatisfied.
pub fn describe_rules(config: &Config) -> Vec<String> {
    config
        .rules
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let rule = compile(spec);
            let mut line = format!(
                "{}. {:<22} {}  {}",
                index + 1,
                spec.kind_name(),
                rule.pattern,
                config.localize(&rule.hint)
            );
            if let Err(err) = rule.matcher() {
                line.push_str(&format!("\n   ({})", err));
            }
            line
        })
        .collect()
}
