//! Command implementations.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use notablog_core::SiteConfig;

pub mod check;
pub mod init;
pub mod render;
pub mod show;

/// Load the site file, optionally layering `NOTABLOG_*` environment
/// overrides on top.
pub fn load_config(config_path: &Path, env: bool) -> Result<SiteConfig> {
    let loaded = if env {
        SiteConfig::load_with_env(config_path)
    } else {
        SiteConfig::load(config_path)
    };
    loaded.wrap_err_with(|| format!("Failed to load {}", config_path.display()))
}
