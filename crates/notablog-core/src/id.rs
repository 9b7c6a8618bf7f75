//! Notion page and space identifiers.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::error::{CoreError, Result};

/// Length of an id once dashes are stripped.
const COMPACT_LEN: usize = 32;

/// Dash positions of the 8-4-4-4-12 UUID layout.
const UUID_DASHES: [usize; 4] = [8, 13, 18, 23];

/// A Notion page (or space) id.
///
/// Accepts the compact 32-hex-digit form and the dashed UUID form in any case.
/// The text is kept as supplied so configuration round-trips, while equality
/// and hashing go through the compact lowercase form. Surrounding whitespace
/// is rejected.
#[derive(Debug, Clone)]
pub struct PageId {
    raw: String,
    compact: String,
}

impl PageId {
    /// Parse an id, reporting failures against `field`.
    pub fn parse_field(field: &str, value: &str) -> Result<Self> {
        normalize(value)
            .map(|compact| Self {
                raw: value.to_string(),
                compact,
            })
            .ok_or_else(|| CoreError::invalid_page_id(field, value))
    }

    /// Parse an id without a field context.
    pub fn parse(value: &str) -> Result<Self> {
        Self::parse_field("pageId", value)
    }

    /// The id as it was written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercase 32-digit form without dashes.
    #[must_use]
    pub fn compact(&self) -> &str {
        &self.compact
    }

    /// Dashed 8-4-4-4-12 form.
    #[must_use]
    pub fn to_uuid(&self) -> String {
        let c = &self.compact;
        format!(
            "{}-{}-{}-{}-{}",
            &c[..8],
            &c[8..12],
            &c[12..16],
            &c[16..20],
            &c[20..]
        )
    }
}

fn normalize(value: &str) -> Option<String> {
    let compact = match value.len() {
        COMPACT_LEN => value.to_string(),
        36 if UUID_DASHES.iter().all(|&i| value.as_bytes()[i] == b'-') => {
            value.chars().filter(|&c| c != '-').collect()
        }
        _ => return None,
    };

    if compact.len() == COMPACT_LEN && compact.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(compact.to_ascii_lowercase())
    } else {
        None
    }
}

impl PartialEq for PageId {
    fn eq(&self, other: &Self) -> bool {
        self.compact == other.compact
    }
}

impl Eq for PageId {}

impl Hash for PageId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.compact.hash(state);
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for PageId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
