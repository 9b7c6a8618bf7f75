//! Init command - write a starter site file

use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, bail};

/// Starter site file. Every optional field is present but commented out.
const STARTER_SITE: &str = r#"# the site's root Notion page (required)
rootNotionPageId = "{root_page_id}"

# if you want to restrict pages to a single Notion workspace
# rootNotionSpaceId = ""

# basic site info (required)
name = "{name}"
domain = "{domain}"
author = "{author}"

# open graph metadata
# description = ""

# social usernames
# twitter = ""
# github = ""
# linkedin = ""
# mastodon = "https://mastodon.social/@you"
# newsletter = "https://newsletter.example.com"
# youtube = "channel/UCGbXXXXXXXXXXXXXXXXXXXXXX"

# site-wide fallbacks for pages without their own icon or cover
# defaultPageIcon = "/page-icon.png"
# defaultPageCover = "/page-cover.jpg"
# defaultPageCoverPosition = 0.5

isPreviewImageSupportEnabled = false
isRedisEnabled = false

# "default" or "custom"; custom shows navigationLinks in the header
navigationStyle = "default"

# [[navigationLinks]]
# title = "About"
# pageId = "067dd719a912471ea9a3ac10710e7fdf"

# map of URL paths to Notion page ids
# [pageUrlOverrides]
# "/about" = "067dd719a912471ea9a3ac10710e7fdf"

# giscus comments
# [giscus]
# repo = "owner/name"
# repoId = ""
# category = "Announcements"
# categoryId = ""
"#;

/// Placeholder root page used by the starter file.
pub const PLACEHOLDER_PAGE_ID: &str = "00000000000000000000000000000000";

/// Run the init command.
pub fn run(path: &Path, force: bool) -> Result<()> {
    tracing::info!(?path, force, "Writing starter site file");

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).wrap_err("Failed to create directories")?;
    }

    fs::write(path, starter_site()).wrap_err("Failed to write file")?;

    tracing::info!(?path, "Created site file");
    println!("Created: {}", path.display());
    println!("Set rootNotionPageId, name, domain and author before deploying.");

    Ok(())
}

fn starter_site() -> String {
    STARTER_SITE
        .replace("{root_page_id}", PLACEHOLDER_PAGE_ID)
        .replace("{name}", "My Notes")
        .replace("{domain}", "notes.example.com")
        .replace("{author}", "Your Name")
}
