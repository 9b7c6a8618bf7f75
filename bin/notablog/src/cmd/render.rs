//! Render command - print a markup fragment for inspection

use std::path::Path;

use clap::ValueEnum;
use color_eyre::eyre::{Result, eyre};
use notablog_core::SiteConfig;
use notablog_generator::{
    EmbedMode, GiscusComments, GiscusProps, HeadMeta, NavigationMenu, social_links_html,
};

/// Fragment to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Fragment {
    /// giscus comment section
    Comments,
    /// Header navigation menu
    Nav,
    /// `<head>` metadata
    Head,
    /// Footer social links
    Social,
}

/// Per-page rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render the comment widget in dark mode.
    pub dark: bool,
    /// Use the `client.js` script embed instead of the custom element.
    pub script: bool,
    /// Path of the page being rendered.
    pub path: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dark: false,
            script: false,
            path: "/".to_string(),
        }
    }
}

/// Run the render command.
pub fn run(config_path: &Path, env: bool, fragment: Fragment, options: &RenderOptions) -> Result<()> {
    let config = super::load_config(config_path, env)?;
    println!("{}", render(&config, fragment, options)?);
    Ok(())
}

/// Render `fragment` for the page at `options.path`.
pub fn render(config: &SiteConfig, fragment: Fragment, options: &RenderOptions) -> Result<String> {
    tracing::debug!(?fragment, ?options, "Rendering fragment");

    let html = match fragment {
        Fragment::Comments => {
            let settings = config
                .giscus()
                .ok_or_else(|| eyre!("No [giscus] table in the site file"))?;
            let props = GiscusProps::from_settings(settings, options.dark);
            let mode = if options.script {
                EmbedMode::Script
            } else {
                EmbedMode::Element
            };
            GiscusComments::new(&props).render_with(mode)
        }
        Fragment::Nav => NavigationMenu::from_config(config).render(&options.path),
        Fragment::Head => {
            let meta = HeadMeta::from_config(config);
            if options.path == "/" {
                meta.render()
            } else {
                let title = options.path.trim_matches('/');
                meta.with_page(title, &options.path, config).render()
            }
        }
        Fragment::Social => social_links_html(config.social()).unwrap_or_default(),
    };

    Ok(html)
}
