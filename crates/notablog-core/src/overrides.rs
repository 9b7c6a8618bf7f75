//! URL path overrides for individual pages.

use std::collections::{BTreeMap, HashMap};

use crate::{
    error::{CoreError, Result},
    id::PageId,
};

/// Explicit `path -> page id` mappings that replace the derived page path.
///
/// Paths are written with a leading slash (`"/about"`); lookups accept the
/// path with or without it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageUrlOverrides {
    by_path: BTreeMap<String, PageId>,
    by_page: HashMap<String, String>,
}

impl PageUrlOverrides {
    /// Validate a raw override table.
    pub fn from_raw(raw: BTreeMap<String, String>) -> Result<Self> {
        let mut overrides = Self::default();

        for (path, page_id) in raw {
            let field = format!("pageUrlOverrides[{path:?}]");
            let page_id = PageId::parse_field(&field, &page_id)?;

            let slug = path.strip_prefix('/').ok_or_else(|| {
                CoreError::invalid_field(
                    &field,
                    format!("{path:?} should be a relative URL path starting with \"/\""),
                )
            })?;
            if slug.is_empty() {
                return Err(CoreError::invalid_field(
                    &field,
                    "the root path cannot be overridden",
                ));
            }
            if slug.chars().any(char::is_whitespace) || slug.contains(['?', '#']) {
                return Err(CoreError::invalid_field(
                    &field,
                    "path cannot contain whitespace, query or fragment",
                ));
            }

            if let Some(existing) = overrides
                .by_page
                .insert(page_id.compact().to_string(), slug.to_string())
            {
                return Err(CoreError::invalid_field(
                    &field,
                    format!("page {page_id} is already mapped to \"/{existing}\""),
                ));
            }
            overrides.by_path.insert(path, page_id);
        }

        Ok(overrides)
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Whether no override is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    /// Page mapped to `path`.
    #[must_use]
    pub fn page_for_path(&self, path: &str) -> Option<&PageId> {
        let slug = path.trim_start_matches('/');
        self.by_path.get(&format!("/{slug}"))
    }

    /// Overridden path for `page_id`, with its leading slash.
    #[must_use]
    pub fn path_for_page(&self, page_id: &PageId) -> Option<String> {
        self.by_page
            .get(page_id.compact())
            .map(|slug| format!("/{slug}"))
    }

    /// Iterate over `(path, page id)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageId)> {
        self.by_path.iter().map(|(path, id)| (path.as_str(), id))
    }

    pub(crate) fn to_raw(&self) -> BTreeMap<String, String> {
        self.by_path
            .iter()
            .map(|(path, id)| (path.clone(), id.as_str().to_string()))
            .collect()
    }
}
