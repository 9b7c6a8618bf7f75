//! Giscus comment embed.
//!
//! [`GiscusWidget::from_props`] is the only place that knows the widget's
//! property contract; everything else deals in [`GiscusProps`].

use notablog_core::{GiscusSettings, Repo};
use tracing::debug;

use crate::html::{attributes, escape_attr, kebab_case};

/// Class of the container wrapping the widget.
pub const GISCUS_COMMENTS_CLASS: &str = "giscusComments";

/// Element id given to the widget.
pub const WIDGET_ID: &str = "comments";

/// Interface language of the widget.
pub const WIDGET_LANG: &str = "zh-TW";

/// Custom element registered by the giscus web component.
pub const WIDGET_ELEMENT: &str = "giscus-widget";

/// Loader for the classic `<script>` embed.
pub const CLIENT_SCRIPT_URL: &str = "https://giscus.app/client.js";

/// Per-page properties handed to the comment embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiscusProps {
    /// Current theme of the page.
    pub dark_mode: bool,
    pub repo: Repo,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
}

impl GiscusProps {
    /// Props for a page, taking the backend from the site settings.
    #[must_use]
    pub fn from_settings(settings: &GiscusSettings, dark_mode: bool) -> Self {
        Self {
            dark_mode,
            repo: settings.repo.clone(),
            repo_id: settings.repo_id.clone(),
            category: settings.category.clone(),
            category_id: settings.category_id.clone(),
        }
    }
}

/// Widget color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// How a page is matched to its discussion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapping {
    Pathname,
    Url,
    Title,
    OgTitle,
}

impl Mapping {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pathname => "pathname",
            Self::Url => "url",
            Self::Title => "title",
            Self::OgTitle => "og:title",
        }
    }
}

/// Where the comment box sits relative to the thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPosition {
    Top,
    Bottom,
}

impl InputPosition {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Loading strategy of the embedded iframe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loading {
    Lazy,
    Eager,
}

impl Loading {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lazy => "lazy",
            Self::Eager => "eager",
        }
    }
}

/// Giscus encodes booleans as `"0"` / `"1"`.
fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// The giscus widget property contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiscusWidget {
    pub id: &'static str,
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: Mapping,
    pub strict: bool,
    pub reactions_enabled: bool,
    pub emit_metadata: bool,
    pub input_position: InputPosition,
    pub theme: Theme,
    pub lang: &'static str,
    pub loading: Loading,
}

impl GiscusWidget {
    /// Map page props onto the widget contract.
    ///
    /// Only the theme and the four backend identifiers vary; every other
    /// option is fixed.
    #[must_use]
    pub fn from_props(props: &GiscusProps) -> Self {
        Self {
            id: WIDGET_ID,
            repo: props.repo.to_string(),
            repo_id: props.repo_id.clone(),
            category: props.category.clone(),
            category_id: props.category_id.clone(),
            mapping: Mapping::Pathname,
            strict: false,
            reactions_enabled: true,
            emit_metadata: false,
            input_position: InputPosition::Top,
            theme: Theme::from_dark_mode(props.dark_mode),
            lang: WIDGET_LANG,
            loading: Loading::Lazy,
        }
    }

    /// Contract properties in their canonical order, excluding `id`.
    #[must_use]
    pub fn properties(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("repo", self.repo.as_str()),
            ("repoId", self.repo_id.as_str()),
            ("category", self.category.as_str()),
            ("categoryId", self.category_id.as_str()),
            ("mapping", self.mapping.as_str()),
            ("strict", flag(self.strict)),
            ("reactionsEnabled", flag(self.reactions_enabled)),
            ("emitMetadata", flag(self.emit_metadata)),
            ("inputPosition", self.input_position.as_str()),
            ("theme", self.theme.as_str()),
            ("lang", self.lang),
            ("loading", self.loading.as_str()),
        ]
    }

    /// Render the `<giscus-widget>` custom element.
    ///
    /// HTML attribute names are case-insensitive, so `repoId` reaches the
    /// element as `repoid`, which is what it observes.
    #[must_use]
    pub fn render_element(&self) -> String {
        let attrs = attributes(std::iter::once(("id", self.id)).chain(self.properties()));
        format!("<{WIDGET_ELEMENT} {attrs}></{WIDGET_ELEMENT}>")
    }

    /// Render the classic `client.js` embed with `data-*` attributes.
    #[must_use]
    pub fn render_script(&self) -> String {
        let data_attrs = self
            .properties()
            .into_iter()
            .map(|(name, value)| format!(r#"data-{}="{}""#, kebab_case(name), escape_attr(value)))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            r#"<script src="{CLIENT_SCRIPT_URL}" {data_attrs} crossorigin="anonymous" async></script>"#
        )
    }
}

/// Which markup carries the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmbedMode {
    /// The `<giscus-widget>` custom element.
    #[default]
    Element,
    /// The `client.js` script tag.
    Script,
}

/// Comment section of a page: the widget inside a styled container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiscusComments {
    widget: GiscusWidget,
}

impl GiscusComments {
    #[must_use]
    pub fn new(props: &GiscusProps) -> Self {
        Self {
            widget: GiscusWidget::from_props(props),
        }
    }

    /// The mapped widget contract.
    #[must_use]
    pub fn widget(&self) -> &GiscusWidget {
        &self.widget
    }

    /// Render with the custom element.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(EmbedMode::Element)
    }

    /// Render the container around the chosen embed.
    #[must_use]
    pub fn render_with(&self, mode: EmbedMode) -> String {
        debug!(
            repo = %self.widget.repo,
            theme = self.widget.theme.as_str(),
            ?mode,
            "rendering giscus comments"
        );

        let inner = match mode {
            EmbedMode::Element => self.widget.render_element(),
            EmbedMode::Script => self.widget.render_script(),
        };
        format!(r#"<div class="{GISCUS_COMMENTS_CLASS}">{inner}</div>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(dark_mode: bool) -> GiscusProps {
        GiscusProps {
            dark_mode,
            repo: "a/b".parse().unwrap(),
            repo_id: "R1".to_string(),
            category: "General".to_string(),
            category_id: "C1".to_string(),
        }
    }

    const FIXED: [&str; 7] = [
        r#"mapping="pathname""#,
        r#"strict="0""#,
        r#"reactionsEnabled="1""#,
        r#"emitMetadata="0""#,
        r#"inputPosition="top""#,
        r#"lang="zh-TW""#,
        r#"loading="lazy""#,
    ];

    #[test]
    fn test_light_theme_scenario() {
        let html = GiscusComments::new(&props(false)).render();

        assert!(html.contains(r#"theme="light""#));
        assert!(html.contains(r#"repo="a/b""#));
        assert!(html.contains(r#"repoId="R1""#));
        assert!(html.contains(r#"category="General""#));
        assert!(html.contains(r#"categoryId="C1""#));
    }

    #[test]
    fn test_theme_follows_dark_mode() {
        let dark = GiscusWidget::from_props(&props(true));
        let light = GiscusWidget::from_props(&props(false));

        assert_eq!(dark.theme, Theme::Dark);
        assert_eq!(light.theme, Theme::Light);
        assert!(dark.render_element().contains(r#"theme="dark""#));
        assert!(!dark.render_element().contains(r#"theme="light""#));

        // identifiers do not depend on the theme
        assert_eq!(dark.repo, light.repo);
        assert_eq!(dark.repo_id, light.repo_id);
        assert_eq!(dark.category, light.category);
        assert_eq!(dark.category_id, light.category_id);
    }

    #[test]
    fn test_exactly_one_widget_with_fixed_options() {
        for dark_mode in [false, true] {
            let html = GiscusComments::new(&props(dark_mode)).render();

            assert_eq!(html.matches("<giscus-widget ").count(), 1);
            assert_eq!(html.matches("</giscus-widget>").count(), 1);
            assert!(html.contains(r#"id="comments""#));
            for fixed in FIXED {
                assert!(html.contains(fixed), "missing {fixed} in {html}");
            }
        }
    }

    #[test]
    fn test_container_wraps_widget() {
        let html = GiscusComments::new(&props(false)).render();
        assert!(html.starts_with(r#"<div class="giscusComments"><giscus-widget "#));
        assert!(html.ends_with("</giscus-widget></div>"));
    }

    #[test]
    fn test_property_order() {
        let widget = GiscusWidget::from_props(&props(false));
        let names: Vec<_> = widget.properties().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            [
                "repo",
                "repoId",
                "category",
                "categoryId",
                "mapping",
                "strict",
                "reactionsEnabled",
                "emitMetadata",
                "inputPosition",
                "theme",
                "lang",
                "loading",
            ]
        );
    }

    #[test]
    fn test_values_are_escaped() {
        let mut p = props(false);
        p.category = r#"Q&A "daily""#.to_string();
        let html = GiscusComments::new(&p).render();
        assert!(html.contains(r#"category="Q&amp;A &quot;daily&quot;""#));
    }

    #[test]
    fn test_script_embed() {
        let html = GiscusComments::new(&props(true)).render_with(EmbedMode::Script);

        assert!(html.starts_with(r#"<div class="giscusComments"><script src="https://giscus.app/client.js""#));
        for expected in [
            r#"data-repo="a/b""#,
            r#"data-repo-id="R1""#,
            r#"data-category="General""#,
            r#"data-category-id="C1""#,
            r#"data-mapping="pathname""#,
            r#"data-strict="0""#,
            r#"data-reactions-enabled="1""#,
            r#"data-emit-metadata="0""#,
            r#"data-input-position="top""#,
            r#"data-theme="dark""#,
            r#"data-lang="zh-TW""#,
            r#"data-loading="lazy""#,
            r#"crossorigin="anonymous" async"#,
        ] {
            assert!(html.contains(expected), "missing {expected} in {html}");
        }
        assert!(!html.contains("giscus-widget"));
    }

    #[test]
    fn test_props_from_settings() {
        let settings = GiscusSettings {
            repo: "superj80820/note-comments".parse().unwrap(),
            repo_id: "R_kgDO".to_string(),
            category: "Announcements".to_string(),
            category_id: "DIC_kwDO".to_string(),
        };
        let props = GiscusProps::from_settings(&settings, true);
        assert!(props.dark_mode);
        assert_eq!(props.repo.to_string(), "superj80820/note-comments");
        assert_eq!(props.category_id, "DIC_kwDO");
    }
}
