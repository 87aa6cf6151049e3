// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Site configuration
//!
//! Site-wide metadata, the author card and the navigation menu read by the
//! static site generator. Field names are serialized in camelCase so the
//! generator sees exactly the keys it expects.
//!
//! Empty strings switch features off: an empty `disqusShortname` disables
//! comments and an empty `googleAnalyticsId` disables analytics.
//!
//! ```
//! let site = blogmeta::site_config();
//!
//! assert_eq!(site.title, "Blog by Ahmed");
//! assert_eq!(site.menu[0].path, "/");
//! assert!(!site.comments_enabled());
//! ```

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationIssue;
use crate::core::traits::{
    require_absolute_url, require_non_empty, require_site_path, Record,
    Validate,
};

/// Site-wide metadata, author info and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute URL of the site, without a trailing slash.
    pub url: String,
    /// Path the site is served under.
    pub path_prefix: String,
    /// Site title.
    pub title: String,
    /// Tagline shown under the title.
    pub subtitle: String,
    /// Footer copyright line.
    pub copyright: String,
    /// Disqus shortname; empty disables comments.
    pub disqus_shortname: String,
    /// Number of posts on each listing page.
    pub posts_per_page: u32,
    /// Google Analytics tracking id; empty disables analytics.
    pub google_analytics_id: String,
    /// Whether math is rendered with KaTeX.
    pub use_katex: bool,
    /// Navigation entries in display order.
    pub menu: Vec<MenuItem>,
    /// The author card.
    pub author: Author,
}

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    /// Link text.
    pub label: String,
    /// Site path the entry links to.
    pub path: String,
}

impl MenuItem {
    /// Creates a menu entry.
    pub fn new<L: Into<String>, P: Into<String>>(label: L, path: P) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// The author shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Author {
    /// Display name.
    pub name: String,
    /// Site path of the avatar.
    pub photo: String,
    /// Short biography.
    pub bio: String,
    /// Contact handles per platform.
    pub contacts: Contacts,
}

/// Contact handles or URLs keyed by platform.
///
/// The key set is fixed. An empty value means the author has no presence
/// on that platform and the renderer leaves it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contacts {
    /// Email address.
    pub email: String,
    /// Facebook handle.
    pub facebook: String,
    /// Telegram handle.
    pub telegram: String,
    /// GitHub handle.
    pub github: String,
    /// Medium handle.
    pub medium: String,
    /// Twitter handle, without `@`.
    pub twitter: String,
    /// LinkedIn handle.
    pub linkedin: String,
    /// Feed URL.
    pub rss: String,
    /// VKontakte handle.
    pub vkontakte: String,
    /// Instagram handle.
    pub instagram: String,
    /// LINE id.
    pub line: String,
    /// GitLab handle.
    pub gitlab: String,
    /// Weibo handle.
    pub weibo: String,
    /// CodePen handle.
    pub codepen: String,
    /// YouTube channel.
    pub youtube: String,
}

impl Contacts {
    /// Every platform key, in serialization order.
    pub const KEYS: [&'static str; 15] = [
        "email",
        "facebook",
        "telegram",
        "github",
        "medium",
        "twitter",
        "linkedin",
        "rss",
        "vkontakte",
        "instagram",
        "line",
        "gitlab",
        "weibo",
        "codepen",
        "youtube",
    ];

    /// Returns the value for `platform`, or `None` if it is not a known key.
    pub fn get(&self, platform: &str) -> Option<&str> {
        let value = match platform {
            "email" => &self.email,
            "facebook" => &self.facebook,
            "telegram" => &self.telegram,
            "github" => &self.github,
            "medium" => &self.medium,
            "twitter" => &self.twitter,
            "linkedin" => &self.linkedin,
            "rss" => &self.rss,
            "vkontakte" => &self.vkontakte,
            "instagram" => &self.instagram,
            "line" => &self.line,
            "gitlab" => &self.gitlab,
            "weibo" => &self.weibo,
            "codepen" => &self.codepen,
            "youtube" => &self.youtube,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Iterates over every `(platform, value)` pair, empty values included.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        Self::KEYS
            .iter()
            .filter_map(move |key| self.get(key).map(|value| (*key, value)))
    }

    /// Iterates over the platforms the author is actually on.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.iter().filter(|(_, value)| !value.is_empty())
    }
}

impl SiteConfig {
    /// Whether Disqus comments are switched on.
    pub fn comments_enabled(&self) -> bool {
        !self.disqus_shortname.is_empty()
    }

    /// Whether Google Analytics is switched on.
    pub fn analytics_enabled(&self) -> bool {
        !self.google_analytics_id.is_empty()
    }
}

fn builtin_site() -> SiteConfig {
    SiteConfig {
        url: "https://www.ahmedrizwan.com".to_string(),
        path_prefix: "/".to_string(),
        title: "Blog by Ahmed".to_string(),
        subtitle: "Senior Software Engineer @Snappymob".to_string(),
        copyright: "© All rights reserved.".to_string(),
        disqus_shortname: String::new(),
        posts_per_page: 4,
        google_analytics_id: "UA-73379983-2".to_string(),
        use_katex: false,
        menu: vec![MenuItem::new("Articles", "/")],
        author: Author {
            name: "Ahmed Rizwan".to_string(),
            photo: "/photo.png".to_string(),
            bio: "Senior Software Engineer @Snappymob".to_string(),
            contacts: Contacts {
                github: "ahmedrizwan".to_string(),
                twitter: "sudo_rizwan".to_string(),
                linkedin: "ahmedrz".to_string(),
                ..Contacts::default()
            },
        },
    }
}

/// Returns the blog's site configuration.
///
/// The value is built on first use and shared for the life of the process.
pub fn site_config() -> &'static SiteConfig {
    static SITE: OnceLock<SiteConfig> = OnceLock::new();
    SITE.get_or_init(builtin_site)
}

impl Record for SiteConfig {
    fn builtin() -> &'static Self {
        site_config()
    }
}

impl Validate for SiteConfig {
    const RECORD: &'static str = "site";

    fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require_absolute_url(&mut issues, "url", &self.url);
        require_site_path(&mut issues, "pathPrefix", &self.path_prefix);
        require_non_empty(&mut issues, "title", &self.title);
        if self.posts_per_page == 0 {
            issues.push(ValidationIssue::new(
                "postsPerPage",
                "must be greater than zero",
            ));
        }
        if self.menu.is_empty() {
            issues.push(ValidationIssue::new(
                "menu",
                "must contain at least one entry",
            ));
        }
        for (i, item) in self.menu.iter().enumerate() {
            require_non_empty(&mut issues, &format!("menu[{}].label", i), &item.label);
            require_site_path(&mut issues, &format!("menu[{}].path", i), &item.path);
        }
        require_non_empty(&mut issues, "author.name", &self.author.name);
        issues
    }
}
