//! Header navigation settings.

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    id::PageId,
};

/// How the site header navigation is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationStyle {
    /// Notion-style breadcrumbs only.
    #[default]
    Default,
    /// Explicit links from `navigationLinks`.
    Custom,
}

impl NavigationStyle {
    /// Lowercase name as written in the site file.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Custom => "custom",
        }
    }
}

/// A navigation link as written in the site file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawNavigationLink {
    pub title: String,
    pub page_id: String,
}

/// A validated navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLink {
    /// Link label.
    pub title: String,
    /// Target page.
    pub page_id: PageId,
}

impl NavigationLink {
    fn to_raw(&self) -> RawNavigationLink {
        RawNavigationLink {
            title: self.title.clone(),
            page_id: self.page_id.as_str().to_string(),
        }
    }
}

/// Navigation style plus its ordered links.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    style: NavigationStyle,
    links: Vec<NavigationLink>,
    style_supplied: bool,
    links_supplied: bool,
}

impl Navigation {
    /// Validate the raw style and links.
    ///
    /// Every link must carry a non-empty title and a valid page id, whatever
    /// the style. An empty link list is legal; consumers fall back to the
    /// default style in that case.
    pub fn from_raw(
        style: Option<NavigationStyle>,
        links: Option<Vec<RawNavigationLink>>,
    ) -> Result<Self> {
        let style_supplied = style.is_some();
        let links_supplied = links.is_some();
        let links = links
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, link)| {
                let title = link.title.trim();
                if title.is_empty() {
                    return Err(CoreError::invalid_field(
                        format!("navigationLinks[{i}].title"),
                        "title cannot be empty",
                    ));
                }
                let page_id =
                    PageId::parse_field(&format!("navigationLinks[{i}].pageId"), &link.page_id)?;
                Ok(NavigationLink {
                    title: link.title,
                    page_id,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            style: style.unwrap_or_default(),
            links,
            style_supplied,
            links_supplied,
        })
    }

    /// The configured style.
    #[must_use]
    pub fn style(&self) -> NavigationStyle {
        self.style
    }

    /// All configured links, in order.
    #[must_use]
    pub fn links(&self) -> &[NavigationLink] {
        &self.links
    }

    /// Links a header should show: the custom links, or nothing when the
    /// style is default or the custom list is empty.
    #[must_use]
    pub fn effective_links(&self) -> &[NavigationLink] {
        match self.style {
            NavigationStyle::Custom => self.links.as_slice(),
            NavigationStyle::Default => &[],
        }
    }

    /// Whether custom links will actually be rendered.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        !self.effective_links().is_empty()
    }

    /// Style and links as written; fields left out of the literal stay `None`.
    pub(crate) fn to_raw(&self) -> (Option<NavigationStyle>, Option<Vec<RawNavigationLink>>) {
        let style = self.style_supplied.then_some(self.style);
        let links = self
            .links_supplied
            .then(|| self.links.iter().map(NavigationLink::to_raw).collect());
        (style, links)
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        match (self.style, self.links.is_empty()) {
            (NavigationStyle::Custom, true) => vec![
                "navigationStyle is \"custom\" but navigationLinks is empty; the default navigation will be shown".to_string(),
            ],
            (NavigationStyle::Default, false) => vec![format!(
                "navigationLinks has {} link(s) but navigationStyle is \"default\"; they will not be shown",
                self.links.len()
            )],
            _ => Vec::new(),
        }
    }
}
