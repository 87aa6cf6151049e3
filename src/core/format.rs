// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialization formats for the configuration records.
//!
//! Records can be read from and written to JSON, TOML and YAML. The field
//! names on the wire are the same in every format.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::core::error::{BlogMetaError, Result};

/// A supported serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JavaScript Object Notation, the shape the renderer reads.
    Json,
    /// Tom's Obvious Minimal Language.
    Toml,
    /// YAML Ain't Markup Language.
    Yaml,
}

impl Format {
    /// Picks a format from the extension of `path`.
    ///
    /// Matching is case-insensitive; `yml` is accepted for YAML.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
            .ok_or_else(|| BlogMetaError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
    }

    /// Serializes `value` into a human-readable document.
    pub fn render<T: Serialize>(self, value: &T) -> Result<String> {
        let rendered = match self {
            Format::Json => serde_json::to_string_pretty(value)
                .map_err(|e| BlogMetaError::serialization_error(self, e, None))?,
            Format::Toml => toml::to_string_pretty(value)
                .map_err(|e| BlogMetaError::serialization_error(self, e, None))?,
            Format::Yaml => serde_yml::to_string(value)
                .map_err(|e| BlogMetaError::serialization_error(self, e, None))?,
        };
        Ok(rendered)
    }

    /// Deserializes a value from `input`.
    pub fn parse<T: DeserializeOwned>(self, input: &str) -> Result<T> {
        match self {
            Format::Json => serde_json::from_str(input)
                .map_err(|e| BlogMetaError::serialization_error(self, e, None)),
            Format::Toml => toml::from_str(input)
                .map_err(|e| BlogMetaError::serialization_error(self, e, None)),
            Format::Yaml => serde_yml::from_str(input)
                .map_err(|e| BlogMetaError::serialization_error(self, e, None)),
        }
    }
}

impl FromStr for Format {
    type Err = BlogMetaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "toml" => Ok(Format::Toml),
            "yaml" | "yml" => Ok(Format::Yaml),
            other => Err(BlogMetaError::config_error(
                format!("Unknown format '{}'", other),
                None,
            )),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Format::Json => "JSON",
            Format::Toml => "TOML",
            Format::Yaml => "YAML",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_from_path() {
        assert_eq!(Format::from_path("site.json").unwrap(), Format::Json);
        assert_eq!(Format::from_path("seo.TOML").unwrap(), Format::Toml);
        assert_eq!(Format::from_path("conf/site.yml").unwrap(), Format::Yaml);
        assert_eq!(Format::from_path("site.yaml").unwrap(), Format::Yaml);
    }

    #[test]
    fn test_from_path_rejects_unknown_extension() {
        let err = Format::from_path("site.js").unwrap_err();
        assert!(matches!(err, BlogMetaError::UnsupportedFormat { .. }));
        assert!(Format::from_path("site").is_err());
    }

    #[test]
    fn test_parse_error_is_reported_with_format() {
        let err = Format::Json
            .parse::<BTreeMap<String, String>>("{ not json")
            .unwrap_err();
        assert!(err.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn test_toml_output_is_readable() {
        let mut map = BTreeMap::new();
        _ = map.insert("title".to_string(), "Blog".to_string());
        let out = Format::Toml.render(&map).unwrap();
        assert_eq!(out.trim(), "title = \"Blog\"");
    }
}
