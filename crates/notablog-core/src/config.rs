//! Site configuration management.
//!
//! The site file is a TOML (or JSON) literal whose keys match the
//! configuration object of the blog front-end exactly:
//!
//! ```toml
//! rootNotionPageId = "036948842f494993a50d4166bff5346d"
//! name = "My Notes"
//! domain = "notes.example.com"
//! author = "Jane Doe"
//! navigationStyle = "custom"
//!
//! [[navigationLinks]]
//! title = "About"
//! pageId = "3ddc5a575630411f9bd333def07f1bd7"
//! ```
//!
//! [`SiteConfig::from_raw`] turns the literal into a validated value that is
//! built once at startup and handed to every consumer by reference.

use std::{collections::BTreeMap, path::Path};

use serde::{Deserialize, Serialize};
use url::{Host, Url};

use crate::{
    comments::{GiscusSettings, RawGiscusSettings},
    error::{CoreError, Result},
    id::PageId,
    navigation::{Navigation, NavigationStyle, RawNavigationLink},
    overrides::PageUrlOverrides,
    social::SocialAccounts,
};

/// Prefix for environment overrides read by [`SiteConfig::load_with_env`].
pub const ENV_PREFIX: &str = "NOTABLOG";

/// The site literal exactly as authored.
///
/// Optional fields are `None` when omitted (or `null` in JSON).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawSiteConfig {
    /// The site's root Notion page.
    pub root_notion_page_id: String,

    /// Restrict pages to a single Notion workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_notion_space_id: Option<String>,

    pub name: String,
    pub domain: String,
    pub author: String,

    /// Open Graph description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastodon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_cover_position: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_preview_image_support_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_redis_enabled: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url_overrides: Option<BTreeMap<String, String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_style: Option<NavigationStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation_links: Option<Vec<RawNavigationLink>>,

    /// Comment backend used when rendering the giscus embed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub giscus: Option<RawGiscusSettings>,
}

/// Snapshot of the optional feature toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    /// LQIP preview images.
    pub preview_images: bool,
    /// Redis cache for generated preview images.
    pub redis: bool,
}

/// Source format of a site file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from a file extension; anything but `.json` is TOML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Defaulted fields that the literal spelled out anyway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Supplied {
    preview_images: bool,
    redis: bool,
    page_url_overrides: bool,
}

/// Validated, immutable site configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    root_notion_page_id: PageId,
    root_notion_space_id: Option<PageId>,
    name: String,
    domain: String,
    author: String,
    description: Option<String>,
    social: SocialAccounts,
    default_page_icon: Option<String>,
    default_page_cover: Option<String>,
    default_page_cover_position: Option<f64>,
    features: Features,
    supplied: Supplied,
    page_url_overrides: PageUrlOverrides,
    navigation: Navigation,
    giscus: Option<GiscusSettings>,
}

impl SiteConfig {
    /// Validate and normalize a site literal.
    ///
    /// Omitted optional fields take their defaults: no overrides, both
    /// feature toggles off, default navigation with no links.
    pub fn from_raw(raw: RawSiteConfig) -> Result<Self> {
        let root_notion_page_id =
            PageId::parse_field("rootNotionPageId", &raw.root_notion_page_id)?;
        let root_notion_space_id = raw
            .root_notion_space_id
            .as_deref()
            .map(|id| PageId::parse_field("rootNotionSpaceId", id))
            .transpose()?;

        require_non_empty("name", &raw.name)?;
        require_non_empty("author", &raw.author)?;
        validate_domain(&raw.domain)?;

        if let Some(description) = &raw.description {
            require_non_empty("description", description)?;
        }

        let social = SocialAccounts {
            twitter: raw.twitter,
            github: raw.github,
            linkedin: raw.linkedin,
            mastodon: raw.mastodon,
            newsletter: raw.newsletter,
            youtube: raw.youtube,
        };
        social.validate()?;

        if let Some(icon) = &raw.default_page_icon {
            validate_asset_url("defaultPageIcon", icon)?;
        }
        if let Some(cover) = &raw.default_page_cover {
            validate_asset_url("defaultPageCover", cover)?;
        }
        if let Some(position) = raw.default_page_cover_position {
            if !(0.0..=1.0).contains(&position) {
                return Err(CoreError::invalid_field(
                    "defaultPageCoverPosition",
                    format!("{position} is outside [0, 1]"),
                ));
            }
        }

        let supplied = Supplied {
            preview_images: raw.is_preview_image_support_enabled.is_some(),
            redis: raw.is_redis_enabled.is_some(),
            page_url_overrides: raw.page_url_overrides.is_some(),
        };
        let page_url_overrides =
            PageUrlOverrides::from_raw(raw.page_url_overrides.unwrap_or_default())?;
        let navigation = Navigation::from_raw(raw.navigation_style, raw.navigation_links)?;
        let giscus = raw.giscus.map(GiscusSettings::from_raw).transpose()?;

        let config = Self {
            root_notion_page_id,
            root_notion_space_id,
            name: raw.name,
            domain: raw.domain,
            author: raw.author,
            description: raw.description,
            social,
            default_page_icon: raw.default_page_icon,
            default_page_cover: raw.default_page_cover,
            default_page_cover_position: raw.default_page_cover_position,
            features: Features {
                preview_images: raw.is_preview_image_support_enabled.unwrap_or(false),
                redis: raw.is_redis_enabled.unwrap_or(false),
            },
            supplied,
            page_url_overrides,
            navigation,
            giscus,
        };

        for warning in config.warnings() {
            tracing::warn!("{warning}");
        }
        tracing::debug!(
            domain = %config.domain,
            root = %config.root_notion_page_id,
            navigation = config.navigation.style().as_str(),
            overrides = config.page_url_overrides.len(),
            "site configuration validated"
        );

        Ok(config)
    }

    /// Load a site file, choosing TOML or JSON by extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let raw = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::from_str::<RawSiteConfig>(&content).map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?,
            ConfigFormat::Json => serde_json::from_str::<RawSiteConfig>(&content).map_err(|e| {
                CoreError::config_with_source(
                    format!("Failed to parse config file: {}", path.display()),
                    e,
                )
            })?,
        };

        tracing::debug!(path = %path.display(), "loaded site file");
        Self::from_raw(raw)
    }

    /// Load a site file layered with `NOTABLOG_*` environment overrides.
    ///
    /// Variable names are snake case and map onto the camel-case keys, so
    /// `NOTABLOG_IS_REDIS_ENABLED=true` sets `isRedisEnabled`.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(config::Case::Camel)
                    .try_parsing(true),
            )
            .build()?;

        let raw: RawSiteConfig = settings.try_deserialize()?;
        Self::from_raw(raw)
    }

    /// Parse and validate a TOML literal.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_raw(toml::from_str(content)?)
    }

    /// Parse and validate a JSON literal.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_raw(serde_json::from_str(content)?)
    }

    /// Convert back into a literal. Fields the literal left out stay
    /// omitted and fields it spelled out are kept, even at their default
    /// value, so a validated literal round-trips unchanged.
    #[must_use]
    pub fn to_raw(&self) -> RawSiteConfig {
        let (navigation_style, navigation_links) = self.navigation.to_raw();
        RawSiteConfig {
            root_notion_page_id: self.root_notion_page_id.as_str().to_string(),
            root_notion_space_id: self
                .root_notion_space_id
                .as_ref()
                .map(|id| id.as_str().to_string()),
            name: self.name.clone(),
            domain: self.domain.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            twitter: self.social.twitter.clone(),
            github: self.social.github.clone(),
            linkedin: self.social.linkedin.clone(),
            mastodon: self.social.mastodon.clone(),
            newsletter: self.social.newsletter.clone(),
            youtube: self.social.youtube.clone(),
            default_page_icon: self.default_page_icon.clone(),
            default_page_cover: self.default_page_cover.clone(),
            default_page_cover_position: self.default_page_cover_position,
            is_preview_image_support_enabled: self
                .supplied
                .preview_images
                .then_some(self.features.preview_images),
            is_redis_enabled: self.supplied.redis.then_some(self.features.redis),
            page_url_overrides: self
                .supplied
                .page_url_overrides
                .then(|| self.page_url_overrides.to_raw()),
            navigation_style,
            navigation_links,
            giscus: self.giscus.as_ref().map(GiscusSettings::to_raw),
        }
    }

    /// Non-fatal observations about the configuration.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.navigation.warnings();

        if self.features.redis && !self.features.preview_images {
            warnings.push(
                "isRedisEnabled is true but isPreviewImageSupportEnabled is false; nothing will be cached"
                    .to_string(),
            );
        }

        if self.description.is_none() {
            warnings.push("description is not set; pages will have no Open Graph description".to_string());
        }

        warnings
    }

    /// The site's root Notion page.
    #[must_use]
    pub fn root_notion_page_id(&self) -> &PageId {
        &self.root_notion_page_id
    }

    /// Workspace restriction, if any.
    #[must_use]
    pub fn root_notion_space_id(&self) -> Option<&PageId> {
        self.root_notion_space_id.as_ref()
    }

    /// Site name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Bare hostname the site is served from.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Site author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Open Graph description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Social account handles.
    #[must_use]
    pub fn social(&self) -> &SocialAccounts {
        &self.social
    }

    /// Fallback page icon.
    #[must_use]
    pub fn default_page_icon(&self) -> Option<&str> {
        self.default_page_icon.as_deref()
    }

    /// Fallback page cover image.
    #[must_use]
    pub fn default_page_cover(&self) -> Option<&str> {
        self.default_page_cover.as_deref()
    }

    /// Vertical position of the fallback cover, in [0, 1].
    #[must_use]
    pub fn default_page_cover_position(&self) -> Option<f64> {
        self.default_page_cover_position
    }

    /// Feature toggles.
    #[must_use]
    pub fn features(&self) -> Features {
        self.features
    }

    #[must_use]
    pub fn is_preview_image_support_enabled(&self) -> bool {
        self.features.preview_images
    }

    #[must_use]
    pub fn is_redis_enabled(&self) -> bool {
        self.features.redis
    }

    /// Per-page path overrides.
    #[must_use]
    pub fn page_url_overrides(&self) -> &PageUrlOverrides {
        &self.page_url_overrides
    }

    /// Header navigation.
    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// Comment backend, if configured.
    #[must_use]
    pub fn giscus(&self) -> Option<&GiscusSettings> {
        self.giscus.as_ref()
    }

    /// Origin of the site, e.g. `https://notes.example.com`.
    #[must_use]
    pub fn host(&self) -> String {
        format!("https://{}", self.domain)
    }

    /// Get the full URL for a path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        format!("{}/{path}", self.host())
    }
}

fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::invalid_field(field, "cannot be empty"));
    }
    Ok(())
}

/// A domain is a bare hostname: no scheme, port, path or whitespace.
fn validate_domain(domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(CoreError::invalid_field("domain", "cannot be empty"));
    }
    if domain.contains("://") {
        return Err(CoreError::invalid_field(
            "domain",
            format!("{domain:?} should be a hostname without a scheme"),
        ));
    }

    match Host::parse(domain) {
        Ok(Host::Domain(_)) => Ok(()),
        Ok(_) => Err(CoreError::invalid_field(
            "domain",
            format!("{domain:?} is an IP address, expected a hostname"),
        )),
        Err(e) => Err(CoreError::invalid_field(
            "domain",
            format!("{domain:?} is not a valid hostname: {e}"),
        )),
    }
}

/// Icons and covers are absolute http(s) URLs or root-relative paths.
fn validate_asset_url(field: &str, value: &str) -> Result<()> {
    if value.starts_with('/') && !value.starts_with("//") {
        return Ok(());
    }

    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => Err(CoreError::invalid_field(
            field,
            format!("unsupported URL scheme {:?}", url.scheme()),
        )),
        Err(e) => Err(CoreError::invalid_field(
            field,
            format!("expected an absolute URL or a path starting with \"/\": {e}"),
        )),
    }
}
