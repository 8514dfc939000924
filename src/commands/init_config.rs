//! Implementation of the `pwgate init-config` command.

use crate::cli::InitConfigArgs;
use pwgate::config::Config;
use pwgate::error::{PwgateError, Result};
use std::path::Path;

/// Execute the `pwgate init-config` command.
pub fn cmd_init_config(args: InitConfigArgs) -> Result<()> {
    write_default_config(&args.output, args.force)?;
    println!("Wrote default config to {}", args.output.display());
    Ok(())
}

/// Write the default config as YAML, refusing to clobber an existing file
/// unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(PwgateError::UserError(format!(
            "'{}' already exists\n\
             Fix: pass --force to overwrite it, or choose another --output path.",
            path.display()
        )));
    }

    let yaml = Config::default().to_yaml()?;
    std::fs::write(path, yaml).map_err(|e| {
        PwgateError::UserError(format!(
            "failed to write config file '{}': {}",
            path.display(),
            e
        ))
    })
}
