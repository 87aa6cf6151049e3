// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Error Handling for blogmeta
//!
//! This module defines the error types returned when loading, overriding,
//! serializing, or validating the blog's configuration records. The
//! `thiserror` crate is used to derive `Display` and `Error` for them.
//!
//! The built-in records returned by [`crate::site_config`] and
//! [`crate::seo_config`] never produce these errors.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::format::Format;

/// A unified result type for the blogmeta library.
pub type Result<T> = std::result::Result<T, BlogMetaError>;

/// A single broken convention found while validating a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Wire name of the offending field, e.g. `menu[0].path`.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
}

impl ValidationIssue {
    /// Creates a new issue for `field`.
    pub fn new<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The main error type for blogmeta.
#[derive(Error, Debug)]
pub enum BlogMetaError {
    /// Error related to assembling a configuration.
    #[error("Configuration error: {message}.")]
    ConfigError {
        /// Detailed description of the configuration error.
        message: String,
        /// Optional path of the configuration file that caused the error.
        path: Option<PathBuf>,
    },

    /// IO error encountered while reading a configuration file.
    #[error("File IO error at `{path:?}`: {source}")]
    IOError {
        /// Path associated with the IO error.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be converted to or from one of the supported formats.
    #[error("{format} error: {message}")]
    SerializationError {
        /// The format being read or written.
        format: Format,
        /// Message reported by the underlying serializer.
        message: String,
        /// File being read, if any.
        path: Option<PathBuf>,
    },

    /// A configuration file's extension does not name a supported format.
    #[error("Unsupported configuration format for `{path:?}` (expected json, toml, yaml or yml)")]
    UnsupportedFormat {
        /// The offending file.
        path: PathBuf,
    },

    /// An override named an unknown key or carried an unusable value.
    #[error("Invalid override `{key}`: {message}")]
    InvalidOverride {
        /// The key path as given by the caller.
        key: String,
        /// Why the override was rejected.
        message: String,
    },

    /// A record broke one or more of its conventions.
    #[error("{record} failed validation: {}", join_issues(.issues))]
    ValidationError {
        /// Name of the record, `site` or `seo`.
        record: &'static str,
        /// Every issue found, in field order.
        issues: Vec<ValidationIssue>,
    },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl BlogMetaError {
    /// Creates a `ConfigError` with a specific message.
    ///
    /// # Parameters
    /// - `message`: A description of the configuration error.
    /// - `path`: Optional path of the configuration file causing the error.
    pub fn config_error<S: Into<String>>(
        message: S,
        path: Option<PathBuf>,
    ) -> Self {
        BlogMetaError::ConfigError {
            message: message.into(),
            path,
        }
    }

    /// Wraps an IO error as an `IOError` variant with the specified path.
    pub fn io_error(path: PathBuf, source: std::io::Error) -> Self {
        BlogMetaError::IOError { path, source }
    }

    /// Creates a `SerializationError` from any displayable serializer error.
    pub fn serialization_error<E: fmt::Display>(
        format: Format,
        error: E,
        path: Option<PathBuf>,
    ) -> Self {
        BlogMetaError::SerializationError {
            format,
            message: error.to_string(),
            path,
        }
    }

    /// Creates an `InvalidOverride` for `key`.
    pub fn invalid_override<K: Into<String>, M: Into<String>>(
        key: K,
        message: M,
    ) -> Self {
        BlogMetaError::InvalidOverride {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the validation issues carried by this error, if any.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            BlogMetaError::ValidationError { issues, .. } => issues,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_issue() {
        let err = BlogMetaError::ValidationError {
            record: "site",
            issues: vec![
                ValidationIssue::new("title", "must not be empty"),
                ValidationIssue::new("postsPerPage", "must be greater than zero"),
            ],
        };

        assert_eq!(
            err.to_string(),
            "site failed validation: title: must not be empty; postsPerPage: must be greater than zero"
        );
        assert_eq!(err.issues().len(), 2);
    }

    #[test]
    fn test_serialization_error_names_format() {
        let err = BlogMetaError::serialization_error(
            Format::Toml,
            "expected `=`",
            None,
        );
        assert_eq!(err.to_string(), "TOML error: expected `=`");
        assert!(err.issues().is_empty());
    }

    #[test]
    fn test_config_error_message() {
        let err = BlogMetaError::config_error("bad record", None);
        assert_eq!(err.to_string(), "Configuration error: bad record.");
    }
}
