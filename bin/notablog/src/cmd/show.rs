//! Show command - print the normalized site configuration

use std::path::Path;

use clap::ValueEnum;
use color_eyre::eyre::{Result, WrapErr};
use notablog_core::SiteConfig;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

/// Run the show command.
pub fn run(config_path: &Path, env: bool, format: OutputFormat) -> Result<()> {
    let config = super::load_config(config_path, env)?;
    print!("{}", render(&config, format)?);
    Ok(())
}

/// Serialize the configuration in its literal shape.
pub fn render(config: &SiteConfig, format: OutputFormat) -> Result<String> {
    let raw = config.to_raw();
    match format {
        OutputFormat::Toml => toml::to_string_pretty(&raw).wrap_err("Failed to serialize TOML"),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&raw).wrap_err("Failed to serialize JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
