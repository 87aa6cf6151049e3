// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Core Traits Module
//!
//! The traits shared by both configuration records.
//!
//! - [`Validate`]: opt-in checking of the conventions a record is expected
//!   to follow. Nothing in the crate validates the built-in records implicitly.
//! - [`Record`]: what [`crate::core::config::ConfigBuilder`] needs to load,
//!   merge and override a record.

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::core::error::{BlogMetaError, Result, ValidationIssue};

/// Trait for records whose conventions can be checked.
pub trait Validate {
    /// Name used in error messages, e.g. `site`.
    const RECORD: &'static str;

    /// Collects every broken convention, in field order.
    fn issues(&self) -> Vec<ValidationIssue>;

    /// Returns `Ok(())` when no issues are found.
    ///
    /// # Errors
    ///
    /// Returns [`BlogMetaError::ValidationError`] listing every issue.
    fn validate(&self) -> Result<()> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(BlogMetaError::ValidationError {
                record: Self::RECORD,
                issues,
            })
        }
    }
}

/// A configuration record with a built-in value.
pub trait Record:
    Serialize + DeserializeOwned + Validate + Clone + std::fmt::Debug + 'static
{
    /// The built-in, process-wide value of this record.
    fn builtin() -> &'static Self;
}

/// Pushes an issue when `value` is empty or whitespace.
pub(crate) fn require_non_empty(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: &str,
) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::new(field, "must not be empty"));
    }
}

/// Pushes an issue unless `value` is an absolute http(s) URL with a host.
pub(crate) fn require_absolute_url(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: &str,
) {
    match Url::parse(value) {
        Ok(url) if !matches!(url.scheme(), "http" | "https") => {
            issues.push(ValidationIssue::new(
                field,
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        Ok(url) if url.host_str().map_or(true, str::is_empty) => {
            issues.push(ValidationIssue::new(field, "missing host"));
        }
        Ok(_) => {}
        Err(e) => {
            issues.push(ValidationIssue::new(
                field,
                format!("not an absolute URL ({})", e),
            ));
        }
    }
}

/// Pushes an issue unless `value` is a site path starting with `/`.
pub(crate) fn require_site_path(
    issues: &mut Vec<ValidationIssue>,
    field: &str,
    value: &str,
) {
    if !value.starts_with('/') {
        issues.push(ValidationIssue::new(field, "must start with '/'"));
    } else if value.chars().any(char::is_whitespace) {
        issues.push(ValidationIssue::new(field, "must not contain whitespace"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Titled(&'static str);

    impl Validate for Titled {
        const RECORD: &'static str = "titled";

        fn issues(&self) -> Vec<ValidationIssue> {
            let mut issues = Vec::new();
            require_non_empty(&mut issues, "title", self.0);
            issues
        }
    }

    #[test]
    fn test_validate_collects_issues() {
        assert!(Titled("Blog").validate().is_ok());

        let err = Titled("  ").validate().unwrap_err();
        assert_eq!(err.to_string(), "titled failed validation: title: must not be empty");
    }

    #[test]
    fn test_absolute_url() {
        let mut issues = Vec::new();
        require_absolute_url(&mut issues, "url", "https://ahmedrizwan.com");
        require_absolute_url(&mut issues, "url", "http://localhost:8000/blog");
        assert!(issues.is_empty());

        require_absolute_url(&mut issues, "a", "/relative/path");
        require_absolute_url(&mut issues, "b", "ftp://ahmedrizwan.com");
        require_absolute_url(&mut issues, "c", "mailto:me@ahmedrizwan.com");
        let fields: Vec<_> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, ["a", "b", "c"]);
    }

    #[test]
    fn test_site_path() {
        let mut issues = Vec::new();
        require_site_path(&mut issues, "ok", "/");
        require_site_path(&mut issues, "ok", "/pages/about");
        require_site_path(&mut issues, "relative", "pages/about");
        require_site_path(&mut issues, "spaced", "/about me");
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].field, "relative");
        assert_eq!(issues[1].field, "spaced");
    }
}
