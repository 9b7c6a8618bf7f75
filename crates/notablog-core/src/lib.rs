//! notablog Core Library
//!
//! Site configuration, Notion page ids and error handling for a
//! Notion-backed blog front-end.

pub mod comments;
pub mod config;
pub mod error;
pub mod id;
pub mod navigation;
pub mod overrides;
pub mod social;

pub use comments::{GiscusSettings, Repo};
pub use config::{ConfigFormat, Features, RawSiteConfig, SiteConfig};
pub use error::{CoreError, Result};
pub use id::PageId;
pub use navigation::{Navigation, NavigationLink, NavigationStyle, RawNavigationLink};
pub use overrides::PageUrlOverrides;
pub use social::{SocialAccounts, SocialLink, SocialPlatform};
