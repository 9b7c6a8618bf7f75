//! Header navigation menu.

use notablog_core::{NavigationStyle, PageId, SiteConfig};
use tracing::debug;

use crate::html::{escape, escape_attr};

/// A resolved navigation entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Display label.
    pub label: String,

    /// Link target, a root-relative path.
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Whether `current_path` is this item's page or below it.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        if self.href == "/" {
            return current_path == "/";
        }
        current_path == self.href || current_path.starts_with(&format!("{}/", self.href))
    }
}

/// Header menu built from the site's navigation settings.
///
/// The default style shows a single home link labelled with the site name.
/// The custom style shows the configured links in order; with no links it
/// falls back to the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationMenu {
    style: NavigationStyle,
    items: Vec<NavItem>,
}

impl NavigationMenu {
    pub fn from_config(config: &SiteConfig) -> Self {
        let navigation = config.navigation();

        let (style, items) = if navigation.is_custom() {
            let items = navigation
                .effective_links()
                .iter()
                .map(|link| NavItem::new(&link.title, page_href(config, &link.page_id)))
                .collect();
            (NavigationStyle::Custom, items)
        } else {
            (
                NavigationStyle::Default,
                vec![NavItem::new(config.name(), "/")],
            )
        };

        debug!(style = style.as_str(), items = items.len(), "built navigation menu");

        Self { style, items }
    }

    /// Style actually rendered.
    #[must_use]
    pub fn style(&self) -> NavigationStyle {
        self.style
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        self.style == NavigationStyle::Custom
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Render the menu, marking the entry that matches `current_path`.
    #[must_use]
    pub fn render(&self, current_path: &str) -> String {
        let mut html = format!(
            r#"<nav class="notablog-nav notablog-nav-{}" aria-label="Main navigation"><ul class="notablog-nav-list">"#,
            self.style.as_str()
        );

        for item in &self.items {
            let active = item.is_active(current_path);
            let (class, current) = if active {
                ("notablog-nav-item active", r#" aria-current="page""#)
            } else {
                ("notablog-nav-item", "")
            };
            html.push_str(&format!(
                r#"<li class="{class}"><a href="{}" class="notablog-nav-link"{current}>{}</a></li>"#,
                escape_attr(&item.href),
                escape(&item.label),
            ));
        }

        html.push_str("</ul></nav>");
        html
    }
}

/// Path for a Notion page: its override, `/` for the root page, otherwise
/// the compact id.
#[must_use]
pub fn page_href(config: &SiteConfig, page_id: &PageId) -> String {
    if let Some(path) = config.page_url_overrides().path_for_page(page_id) {
        return path;
    }
    if page_id == config.root_notion_page_id() {
        return "/".to_string();
    }
    format!("/{}", page_id.compact())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = r#"
rootNotionPageId = "7875426197cf461698809def95960ebf"
name = "Notes"
domain = "notes.example.com"
author = "York Lin"
"#;

    fn config(extra: &str) -> SiteConfig {
        SiteConfig::from_toml_str(&format!("{BASE}{extra}")).unwrap()
    }

    #[test]
    fn test_default_style_has_home_link() {
        let menu = NavigationMenu::from_config(&config(""));
        assert!(!menu.is_custom());
        assert_eq!(menu.items(), [NavItem::new("Notes", "/")]);
    }

    #[test]
    fn test_custom_style_resolves_hrefs_in_order() {
        let menu = NavigationMenu::from_config(&config(
            r#"
navigationStyle = "custom"

[pageUrlOverrides]
"/about" = "3ddc5a575630411f9bd333def07f1bd7"

[[navigationLinks]]
title = "關於我"
pageId = "3ddc5a57-5630-411f-9bd3-33def07f1bd7"

[[navigationLinks]]
title = "首頁"
pageId = "7875426197cf461698809def95960ebf"

[[navigationLinks]]
title = "筆記"
pageId = "067DD719A912471EA9A3AC10710E7FDF"
"#,
        ));

        assert!(menu.is_custom());
        assert_eq!(
            menu.items(),
            [
                NavItem::new("關於我", "/about"),
                NavItem::new("首頁", "/"),
                NavItem::new("筆記", "/067dd719a912471ea9a3ac10710e7fdf"),
            ]
        );
    }

    #[test]
    fn test_custom_without_links_falls_back() {
        let menu = NavigationMenu::from_config(&config("navigationStyle = \"custom\"\n"));
        assert_eq!(menu.style(), NavigationStyle::Default);
        assert_eq!(menu.items().len(), 1);
    }

    #[test]
    fn test_default_style_ignores_links() {
        let menu = NavigationMenu::from_config(&config(
            r#"
[[navigationLinks]]
title = "About"
pageId = "3ddc5a575630411f9bd333def07f1bd7"
"#,
        ));
        assert_eq!(menu.items(), [NavItem::new("Notes", "/")]);
    }

    #[test]
    fn test_active_item() {
        let about = NavItem::new("About", "/about");
        assert!(about.is_active("/about"));
        assert!(about.is_active("/about/team"));
        assert!(!about.is_active("/aboutness"));

        let home = NavItem::new("Home", "/");
        assert!(home.is_active("/"));
        assert!(!home.is_active("/about"));
    }

    #[test]
    fn test_render() {
        let menu = NavigationMenu {
            style: NavigationStyle::Custom,
            items: vec![NavItem::new("A & B", "/a"), NavItem::new("C", "/c")],
        };
        let html = menu.render("/c");

        assert!(html.starts_with(r#"<nav class="notablog-nav notablog-nav-custom""#));
        assert!(html.contains(r#"<a href="/a" class="notablog-nav-link">A &amp; B</a>"#));
        assert!(html.contains(
            r#"<li class="notablog-nav-item active"><a href="/c" class="notablog-nav-link" aria-current="page">C</a></li>"#
        ));
        assert_eq!(html.matches("aria-current").count(), 1);
    }
}
