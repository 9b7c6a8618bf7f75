//! Footer list of social profile links.

use notablog_core::SocialAccounts;

use crate::html::{escape, escape_attr};

/// Render the configured accounts as a link list, or `None` when there are
/// no accounts.
#[must_use]
pub fn social_links_html(accounts: &SocialAccounts) -> Option<String> {
    let links = accounts.links();
    if links.is_empty() {
        return None;
    }

    let items: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<li class="notablog-social-{key}"><a href="{url}" title="{label}" target="_blank" rel="noopener noreferrer">{text}</a></li>"#,
                key = link.platform.key(),
                url = escape_attr(&link.url),
                label = link.platform.label(),
                text = escape(link.platform.label()),
            )
        })
        .collect();

    Some(format!(r#"<ul class="notablog-social">{items}</ul>"#))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_accounts() {
        assert!(social_links_html(&SocialAccounts::default()).is_none());
    }

    #[test]
    fn test_links_in_order() {
        let accounts = SocialAccounts {
            github: Some("superj80820".to_string()),
            twitter: Some("superj80820".to_string()),
            newsletter: Some("https://news.example.com/?a=1&b=2".to_string()),
            ..Default::default()
        };
        let html = social_links_html(&accounts).unwrap();

        let twitter = html.find("notablog-social-twitter").unwrap();
        let github = html.find("notablog-social-github").unwrap();
        let newsletter = html.find("notablog-social-newsletter").unwrap();
        assert!(twitter < github && github < newsletter);

        assert!(html.contains(r#"href="https://github.com/superj80820""#));
        assert!(html.contains(r#"href="https://news.example.com/?a=1&amp;b=2""#));
        assert_eq!(html.matches("<li ").count(), 3);
    }
}
