//! notablog CLI Library
//!
//! Command implementations for the notablog binary, exposed as a library
//! for documentation and integration purposes.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (check, show, init, render)
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use notablog::cmd;
//!
//! // Validate a site file, failing on warnings
//! cmd::check::run(Path::new("site.toml"), false, true).unwrap();
//! ```

pub mod cmd;

// Re-export core types for convenience
pub use notablog_core::SiteConfig;
pub use notablog_generator::{GiscusComments, GiscusProps};

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
///
/// # Example
///
/// ```no_run
/// notablog::init_tracing(2); // Enable DEBUG level logging
/// ```
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
