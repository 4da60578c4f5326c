//! `easyeuler init`: create a default configuration file.

use crate::{
    cli::InitArgs,
    config::{AppConfig, DEFAULT_CONFIG},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Write [`DEFAULT_CONFIG`] to the user config path, plus an empty
/// `templates/` directory next to it.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = AppConfig::config_path();

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let templates_dir = AppConfig::config_dir().join("templates");
    std::fs::create_dir_all(&templates_dir).with_cli_context(|| {
        format!("Failed to create config directory '{}'", templates_dir.display())
    })?;

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
