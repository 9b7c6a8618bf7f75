//! Social account handles and the profile links derived from them.

use url::Url;

use crate::error::{CoreError, Result};

/// Social platforms a site can link to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Twitter,
    Mastodon,
    GitHub,
    YouTube,
    LinkedIn,
    Newsletter,
}

impl SocialPlatform {
    /// All platforms in display order.
    pub const ALL: [SocialPlatform; 6] = [
        Self::Twitter,
        Self::Mastodon,
        Self::GitHub,
        Self::YouTube,
        Self::LinkedIn,
        Self::Newsletter,
    ];

    /// Key used in the site file.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Mastodon => "mastodon",
            Self::GitHub => "github",
            Self::YouTube => "youtube",
            Self::LinkedIn => "linkedin",
            Self::Newsletter => "newsletter",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Mastodon => "Mastodon",
            Self::GitHub => "GitHub",
            Self::YouTube => "YouTube",
            Self::LinkedIn => "LinkedIn",
            Self::Newsletter => "Newsletter",
        }
    }

    /// Whether the site file holds a full URL instead of a username.
    fn takes_url(&self) -> bool {
        matches!(self, Self::Mastodon | Self::Newsletter)
    }
}

/// A resolved profile link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Optional social handles.
///
/// `twitter`, `github` and `linkedin` are usernames; `youtube` is a channel
/// name or `channel/<id>`; `mastodon` and `newsletter` are absolute URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialAccounts {
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub mastodon: Option<String>,
    pub newsletter: Option<String>,
    pub youtube: Option<String>,
}

impl SocialAccounts {
    /// Raw value configured for a platform.
    #[must_use]
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Twitter => self.twitter.as_deref(),
            SocialPlatform::Mastodon => self.mastodon.as_deref(),
            SocialPlatform::GitHub => self.github.as_deref(),
            SocialPlatform::YouTube => self.youtube.as_deref(),
            SocialPlatform::LinkedIn => self.linkedin.as_deref(),
            SocialPlatform::Newsletter => self.newsletter.as_deref(),
        }
    }

    /// Whether no account is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        SocialPlatform::ALL.iter().all(|p| self.get(*p).is_none())
    }

    /// Profile links for every configured account, in display order.
    #[must_use]
    pub fn links(&self) -> Vec<SocialLink> {
        SocialPlatform::ALL
            .iter()
            .filter_map(|&platform| {
                let value = self.get(platform)?;
                let url = match platform {
                    SocialPlatform::Twitter => {
                        format!("https://twitter.com/{}", value.trim_start_matches('@'))
                    }
                    SocialPlatform::GitHub => format!("https://github.com/{value}"),
                    SocialPlatform::YouTube => format!("https://www.youtube.com/{value}"),
                    SocialPlatform::LinkedIn => format!("https://www.linkedin.com/in/{value}"),
                    SocialPlatform::Mastodon | SocialPlatform::Newsletter => value.to_string(),
                };
                Some(SocialLink { platform, url })
            })
            .collect()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for platform in SocialPlatform::ALL {
            let Some(value) = self.get(platform) else {
                continue;
            };
            let field = platform.key();

            if value.trim().is_empty() {
                return Err(CoreError::invalid_field(field, "cannot be empty when set"));
            }

            if platform.takes_url() {
                let url = Url::parse(value).map_err(|e| {
                    CoreError::invalid_field(field, format!("expected an absolute URL: {e}"))
                })?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(CoreError::invalid_field(
                        field,
                        format!("unsupported URL scheme {:?}", url.scheme()),
                    ));
                }
            } else if value.chars().any(char::is_whitespace) {
                return Err(CoreError::invalid_field(field, "cannot contain whitespace"));
            } else if platform != SocialPlatform::YouTube && value.contains('/') {
                return Err(CoreError::invalid_field(
                    field,
                    "expected a username, not a URL or path",
                ));
            }
        }
        Ok(())
    }
}
