//! Check command - validate the site configuration

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use notablog_core::SiteConfig;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Loads and validates the site file, then reports legal but suspicious
/// settings as warnings.
pub fn run(config_path: &Path, env: bool, strict: bool) -> Result<()> {
    tracing::info!(?config_path, env, strict, "Checking site configuration");

    println!("Checking {}...", config_path.display());
    let result = validate(config_path, env);
    if result.has_errors() {
        println!("  ✗ Configuration invalid");
    } else {
        println!("  ✓ Configuration valid");
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

/// Validate a site file without printing.
pub fn validate(config_path: &Path, env: bool) -> ValidationResult {
    let mut result = ValidationResult::default();

    let loaded = if env {
        SiteConfig::load_with_env(config_path)
    } else {
        SiteConfig::load(config_path)
    };

    match loaded {
        Ok(config) => check_config_values(&config, &mut result),
        Err(e) => result.add_error(e.to_string()),
    }

    result
}

/// Collect warnings for settings that load but likely are not intended.
fn check_config_values(config: &SiteConfig, result: &mut ValidationResult) {
    for warning in config.warnings() {
        result.add_warning(warning);
    }

    if config.giscus().is_none() {
        result.add_warning("No [giscus] table: `render comments` is unavailable");
    }

    if config.social().is_empty() {
        result.add_warning("No social accounts configured");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const VALID: &str = r#"
rootNotionPageId = "036948842f494993a50d4166bff5346d"
name = "髒桶子"
domain = "note.messfar.com"
author = "York Lin"
description = "York Lin's blog"
github = "superj80820"

[giscus]
repo = "superj80820/note-comments"
repoId = "R1"
category = "General"
categoryId = "C1"
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_valid_config_passes_strict() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "site.toml", VALID);

        let result = validate(&path, false);
        assert!(!result.has_errors(), "{:?}", result.errors);
        assert!(!result.has_warnings(), "{:?}", result.warnings);
        run(&path, false, true).unwrap();
    }

    #[test]
    fn test_invalid_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "site.toml", &VALID.replace("note.messfar.com", "https://x.com"));

        let result = validate(&path, false);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("domain"));
        assert!(run(&path, false, false).is_err());
    }

    #[test]
    fn test_warnings_fail_only_in_strict_mode() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "site.toml", &format!("navigationStyle = \"custom\"\n{VALID}"));

        let result = validate(&path, false);
        assert!(!result.has_errors());
        assert!(result.has_warnings());

        run(&path, false, false).unwrap();
        assert!(run(&path, false, true).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = validate(&dir.path().join("nope.toml"), false);
        assert!(result.has_errors());
    }
}
