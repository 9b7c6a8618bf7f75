//! notablog CLI
//!
//! Validate and inspect the site configuration of a Notion-backed blog.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;
use notablog::cmd::{
    render::{Fragment, RenderOptions},
    show::OutputFormat,
};

/// Command-line interface for notablog.
#[derive(Parser)]
#[command(
    name = "notablog",
    version,
    about = "Site configuration tooling for a Notion-backed blog"
)]
struct Cli {
    /// Path to the site file (.toml or .json)
    #[arg(short, long, default_value = "site.toml", global = true)]
    config: std::path::PathBuf,

    /// Apply NOTABLOG_* environment overrides on top of the site file
    #[arg(long, global = true)]
    env: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Validate the site configuration
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Print the normalized site configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },
    /// Write a starter site file
    Init {
        /// Where to write the file
        #[arg(short, long, default_value = "site.toml")]
        path: std::path::PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print a markup fragment
    Render {
        /// Fragment to render
        #[arg(value_enum)]
        fragment: Fragment,
        /// Render the comment widget in dark mode
        #[arg(long)]
        dark: bool,
        /// Use the client.js script embed for comments
        #[arg(long)]
        script: bool,
        /// Path of the page being rendered
        #[arg(short, long, default_value = "/")]
        path: String,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    notablog::init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { strict } => {
            notablog::cmd::check::run(&cli.config, cli.env, strict)?;
        }
        Commands::Show { format } => {
            notablog::cmd::show::run(&cli.config, cli.env, format)?;
        }
        Commands::Init { path, force } => {
            notablog::cmd::init::run(&path, force)?;
        }
        Commands::Render {
            fragment,
            dark,
            script,
            path,
        } => {
            let options = RenderOptions { dark, script, path };
            notablog::cmd::render::run(&cli.config, cli.env, fragment, &options)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_cli_check_command_parsing() {
        let args = ["notablog", "check", "--strict"];
        let cli = Cli::parse_from(args);

        assert_eq!(cli.config, std::path::PathBuf::from("site.toml"));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.env);

        match cli.command {
            Commands::Check { strict } => {
                assert!(strict);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_cli_show_command_parsing() {
        let cli = Cli::parse_from(["notablog", "show"]);
        match cli.command {
            Commands::Show { format } => assert_eq!(format, OutputFormat::Toml),
            _ => panic!("Expected Show command"),
        }

        let cli = Cli::parse_from(["notablog", "show", "--format", "json"]);
        match cli.command {
            Commands::Show { format } => assert_eq!(format, OutputFormat::Json),
            _ => panic!("Expected Show command"),
        }
    }

    #[test]
    fn test_cli_init_command_parsing() {
        let args = ["notablog", "init", "--path", "blog/site.toml", "--force"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Init { path, force } => {
                assert_eq!(path, std::path::PathBuf::from("blog/site.toml"));
                assert!(force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_cli_render_command_parsing() {
        let args = ["notablog", "render", "comments", "--dark", "--script"];
        let cli = Cli::parse_from(args);

        match cli.command {
            Commands::Render {
                fragment,
                dark,
                script,
                path,
            } => {
                assert_eq!(fragment, Fragment::Comments);
                assert!(dark);
                assert!(script);
                assert_eq!(path, "/");
            }
            _ => panic!("Expected Render command"),
        }
    }

    #[test]
    fn test_cli_render_rejects_unknown_fragment() {
        assert!(Cli::try_parse_from(["notablog", "render", "footer"]).is_err());
    }

    #[test]
    fn test_cli_verbosity_flags() {
        let args = ["notablog", "-vvv", "check"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_cli_custom_config_path() {
        let args = ["notablog", "--config", "site.json", "--env", "show"];
        let cli = Cli::parse_from(args);
        assert_eq!(cli.config, std::path::PathBuf::from("site.json"));
        assert!(cli.env);
    }
}
