// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # SEO configuration
//!
//! Default search and social preview metadata for every page. The Open
//! Graph block repeats the top-level title, description and canonical URL
//! by convention; nothing keeps them in sync.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationIssue;
use crate::core::traits::{
    require_absolute_url, require_non_empty, Record, Validate,
};

/// Search and social preview metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeoConfig {
    /// Default page title.
    pub title: String,
    /// Default meta description.
    pub description: String,
    /// Canonical URL of the site.
    pub canonical: String,
    /// Open Graph tags.
    pub open_graph: OpenGraph,
    /// Twitter card tags.
    pub twitter: Twitter,
}

/// Open Graph properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OpenGraph {
    /// `og:type`, e.g. `website`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `og:locale`, e.g. `en_IE`.
    pub locale: String,
    /// `og:url`.
    pub url: String,
    /// `og:title`.
    pub title: String,
    /// `og:description`.
    pub description: String,
}

/// Twitter card properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Twitter {
    /// Author handle, with `@`.
    pub handle: String,
    /// Site handle, with `@`.
    pub site: String,
    /// Card type understood by the renderer, e.g. `summary_large_image`.
    pub card_type: String,
}

fn builtin_seo() -> SeoConfig {
    let title = "Ahmed Rizwan";
    let description = "Software Engineer, Writer and Speaker.";

    SeoConfig {
        title: title.to_string(),
        description: description.to_string(),
        canonical: "https://ahmedrizwan.com".to_string(),
        open_graph: OpenGraph {
            kind: "website".to_string(),
            locale: "en_IE".to_string(),
            url: "https://ahmedrizwan.com".to_string(),
            title: title.to_string(),
            description: description.to_string(),
        },
        twitter: Twitter {
            handle: "@sudo_rizwan".to_string(),
            site: "@sudo_rizwan".to_string(),
            card_type: "summary_large_image".to_string(),
        },
    }
}

/// Returns the blog's SEO configuration.
///
/// ```
/// let seo = blogmeta::seo_config();
/// assert_eq!(seo.twitter.card_type, "summary_large_image");
/// ```
pub fn seo_config() -> &'static SeoConfig {
    static SEO: OnceLock<SeoConfig> = OnceLock::new();
    SEO.get_or_init(builtin_seo)
}

impl Record for SeoConfig {
    fn builtin() -> &'static Self {
        seo_config()
    }
}

impl Validate for SeoConfig {
    const RECORD: &'static str = "seo";

    fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require_non_empty(&mut issues, "title", &self.title);
        require_non_empty(&mut issues, "description", &self.description);
        require_absolute_url(&mut issues, "canonical", &self.canonical);
        require_absolute_url(&mut issues, "openGraph.url", &self.open_graph.url);
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::Format;
    use url::Url;

    #[test]
    fn test_builtin_values() {
        let seo = seo_config();
        assert_eq!(seo.title, "Ahmed Rizwan");
        assert_eq!(seo.description, "Software Engineer, Writer and Speaker.");
        assert_eq!(seo.open_graph.kind, "website");
        assert_eq!(seo.open_graph.locale, "en_IE");
        assert_eq!(seo.twitter.handle, "@sudo_rizwan");
        assert_eq!(seo.twitter.card_type, "summary_large_image");
    }

    #[test]
    fn test_open_graph_mirrors_parent() {
        let seo = seo_config();
        assert_eq!(seo.open_graph.title, seo.title);
        assert_eq!(seo.open_graph.description, seo.description);
        assert_eq!(seo.open_graph.url, seo.canonical);
    }

    #[test]
    fn test_urls_are_absolute() {
        let seo = seo_config();
        for raw in [&seo.canonical, &seo.open_graph.url] {
            let url = Url::parse(raw).unwrap();
            assert_eq!(url.scheme(), "https");
            assert_eq!(url.host_str(), Some("ahmedrizwan.com"));
        }
        assert!(seo.validate().is_ok());
    }

    #[test]
    fn test_wire_field_names() {
        let value = serde_json::to_value(seo_config()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "title": "Ahmed Rizwan",
                "description": "Software Engineer, Writer and Speaker.",
                "canonical": "https://ahmedrizwan.com",
                "openGraph": {
                    "type": "website",
                    "locale": "en_IE",
                    "url": "https://ahmedrizwan.com",
                    "title": "Ahmed Rizwan",
                    "description": "Software Engineer, Writer and Speaker."
                },
                "twitter": {
                    "handle": "@sudo_rizwan",
                    "site": "@sudo_rizwan",
                    "cardType": "summary_large_image"
                }
            })
        );
    }

    #[test]
    fn test_round_trip_every_format() {
        let seo = seo_config();
        for format in [Format::Json, Format::Toml, Format::Yaml] {
            let text = format.render(seo).unwrap();
            let back: SeoConfig = format.parse(&text).unwrap();
            assert_eq!(&back, seo, "{format} round trip");
        }
    }

    #[test]
    fn test_card_type_is_not_checked() {
        let mut seo = seo_config().clone();
        seo.twitter.card_type = "player".to_string();
        assert!(seo.validate().is_ok());
    }

    #[test]
    fn test_validation_issues() {
        let mut seo = seo_config().clone();
        seo.description = String::new();
        seo.open_graph.url = "ahmedrizwan.com".to_string();

        let err = seo.validate().unwrap_err();
        let fields: Vec<&str> =
            err.issues().iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["description", "openGraph.url"]);
    }
}
