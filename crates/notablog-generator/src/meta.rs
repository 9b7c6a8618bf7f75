//! `<head>` metadata for site pages.

use notablog_core::SiteConfig;

use crate::html::{escape, escape_attr};

/// Head tags for a page of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadMeta {
    site_name: String,
    title: String,
    description: Option<String>,
    author: String,
    canonical_url: String,
    icon: Option<String>,
    image: Option<String>,
    twitter_creator: Option<String>,
}

impl HeadMeta {
    /// Metadata for the site's home page.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            site_name: config.name().to_string(),
            title: config.name().to_string(),
            description: config.description().map(str::to_string),
            author: config.author().to_string(),
            canonical_url: config.url_for("/"),
            icon: config.default_page_icon().map(|icon| absolute(config, icon)),
            image: config.default_page_cover().map(|cover| absolute(config, cover)),
            twitter_creator: config
                .social()
                .twitter
                .as_deref()
                .map(|handle| format!("@{}", handle.trim_start_matches('@'))),
        }
    }

    /// Retarget to a single page; the title becomes `"<title> | <site name>"`.
    #[must_use]
    pub fn with_page(mut self, title: &str, path: &str, config: &SiteConfig) -> Self {
        self.title = format!("{title} | {}", self.site_name);
        self.canonical_url = config.url_for(path);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }

    /// Render the tags, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        let mut tags = vec![
            format!("<title>{}</title>", escape(&self.title)),
            meta_name("author", &self.author),
        ];
        if let Some(description) = &self.description {
            tags.push(meta_name("description", description));
        }
        tags.push(format!(
            r#"<link rel="canonical" href="{}">"#,
            escape_attr(&self.canonical_url)
        ));
        if let Some(icon) = &self.icon {
            tags.push(format!(r#"<link rel="icon" href="{}">"#, escape_attr(icon)));
        }

        tags.push(meta_property("og:site_name", &self.site_name));
        tags.push(meta_property("og:type", "website"));
        tags.push(meta_property("og:title", &self.title));
        tags.push(meta_property("og:url", &self.canonical_url));
        if let Some(description) = &self.description {
            tags.push(meta_property("og:description", description));
        }
        if let Some(image) = &self.image {
            tags.push(meta_property("og:image", image));
        }

        let card = if self.image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        };
        tags.push(meta_name("twitter:card", card));
        tags.push(meta_name("twitter:title", &self.title));
        if let Some(description) = &self.description {
            tags.push(meta_name("twitter:description", description));
        }
        if let Some(image) = &self.image {
            tags.push(meta_name("twitter:image", image));
        }
        if let Some(creator) = &self.twitter_creator {
            tags.push(meta_name("twitter:creator", creator));
        }

        tags.join("\n")
    }
}

fn meta_name(name: &str, content: &str) -> String {
    format!(
        r#"<meta name="{name}" content="{}">"#,
        escape_attr(content)
    )
}

fn meta_property(property: &str, content: &str) -> String {
    format!(
        r#"<meta property="{property}" content="{}">"#,
        escape_attr(content)
    )
}

/// Root-relative asset paths are resolved against the site origin.
fn absolute(config: &SiteConfig, asset: &str) -> String {
    if asset.starts_with('/') {
        config.url_for(asset)
    } else {
        asset.to_string()
    }
}
