//! Giscus discussion backend identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A GitHub repository in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Repo {
    owner: String,
    name: String,
}

impl Repo {
    /// Repository owner (user or organization).
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for Repo {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty()
                    && !name.is_empty()
                    && !name.contains('/')
                    && !s.chars().any(char::is_whitespace) =>
            {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(CoreError::invalid_field(
                "giscus.repo",
                format!("expected \"owner/name\", got {s:?}"),
            )),
        }
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// The `giscus` table as written in the site file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawGiscusSettings {
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
}

/// Site-wide giscus backend settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiscusSettings {
    pub repo: Repo,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
}

impl GiscusSettings {
    /// Validate the raw table.
    pub fn from_raw(raw: RawGiscusSettings) -> Result<Self> {
        let repo = raw.repo.parse()?;
        for (field, value) in [
            ("giscus.repoId", &raw.repo_id),
            ("giscus.category", &raw.category),
            ("giscus.categoryId", &raw.category_id),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::invalid_field(field, "cannot be empty"));
            }
        }

        Ok(Self {
            repo,
            repo_id: raw.repo_id,
            category: raw.category,
            category_id: raw.category_id,
        })
    }

    pub(crate) fn to_raw(&self) -> RawGiscusSettings {
        RawGiscusSettings {
            repo: self.repo.to_string(),
            repo_id: self.repo_id.clone(),
            category: self.category.clone(),
            category_id: self.category_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repo() {
        let repo: Repo = "superj80820/note-comments".parse().unwrap();
        assert_eq!(repo.owner(), "superj80820");
        assert_eq!(repo.name(), "note-comments");
        assert_eq!(repo.to_string(), "superj80820/note-comments");
    }

    #[test]
    fn test_reject_bad_repo() {
        for bad in ["", "noslash", "/name", "owner/", "a/b/c", "own er/name"] {
            let err = bad.parse::<Repo>().unwrap_err();
            assert_eq!(err.field(), Some("giscus.repo"), "{bad:?}");
        }
    }

    #[test]
    fn test_settings_from_raw() {
        let raw = RawGiscusSettings {
            repo: "a/b".to_string(),
            repo_id: "R1".to_string(),
            category: "General".to_string(),
            category_id: "C1".to_string(),
        };
        let settings = GiscusSettings::from_raw(raw.clone()).unwrap();
        assert_eq!(settings.repo.to_string(), "a/b");
        assert_eq!(settings.to_raw(), raw);
    }

    #[test]
    fn test_settings_require_ids() {
        let raw = RawGiscusSettings {
            repo: "a/b".to_string(),
            repo_id: "R1".to_string(),
            category: "General".to_string(),
            category_id: String::new(),
        };
        let err = GiscusSettings::from_raw(raw).unwrap_err();
        assert_eq!(err.field(), Some("giscus.categoryId"));
    }
}
