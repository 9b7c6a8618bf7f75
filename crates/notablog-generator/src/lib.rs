//! notablog Generator Library
//!
//! Markup fragments for a Notion-backed blog.
//!
//! # Modules
//!
//! - [`comments`] - giscus comment embed
//! - [`navigation`] - header navigation menu
//! - [`meta`] - `<head>` metadata
//! - [`social`] - footer social links
//! - [`html`] - HTML escaping helpers

pub mod comments;
pub mod html;
pub mod meta;
pub mod navigation;
pub mod social;

pub use comments::{EmbedMode, GiscusComments, GiscusProps, GiscusWidget, Theme};
pub use meta::HeadMeta;
pub use navigation::{NavItem, NavigationMenu, page_href};
pub use social::social_links_html;
