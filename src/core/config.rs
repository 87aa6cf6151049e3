// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Configuration Module
//!
//! Loads a configuration record from layered sources. Each layer is applied
//! on top of the record's built-in value:
//!
//! 1. a JSON, TOML or YAML file, deep-merged (objects merge key by key,
//!    arrays and scalars replace),
//! 2. environment variables under a prefix,
//! 3. explicit overrides set in code.
//!
//! The result is deserialized and validated before it is returned.
//!
//! ## Example
//!
//! ```rust,no_run
//! use blogmeta::core::config::ConfigBuilder;
//! use blogmeta::SiteConfig;
//!
//! let site = ConfigBuilder::<SiteConfig>::new()
//!     .with_file("site.toml")
//!     .with_env_prefix("BLOG_SITE_")
//!     .with_override("postsPerPage", 10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(site.posts_per_page, 10);
//! ```
//!
//! ## Key paths
//!
//! Overrides address a field by its path, segments separated by `.`
//! (`author.contacts.github`, `menu.0.label`). Environment variables use
//! `__` instead, so `BLOG_SITE_AUTHOR__CONTACTS__GITHUB` sets the same
//! field as `author.contacts.github`. Segments match field names ignoring
//! case and underscores.

use std::env;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::debug;
use serde_json::{Map, Value};

use crate::core::error::{BlogMetaError, Result};
use crate::core::format::Format;
use crate::core::traits::Record;

/// Builds a record by layering a file, environment variables and overrides
/// over its built-in value.
#[derive(Debug)]
pub struct ConfigBuilder<T: Record> {
    config_file: Option<PathBuf>,
    env_prefix: Option<String>,
    overrides: Vec<(String, Value)>,
    record: PhantomData<T>,
}

impl<T: Record> Default for ConfigBuilder<T> {
    fn default() -> Self {
        Self {
            config_file: None,
            env_prefix: None,
            overrides: Vec::new(),
            record: PhantomData,
        }
    }
}

impl<T: Record> ConfigBuilder<T> {
    /// Initialises a builder that starts from the built-in record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a configuration file, parsed according to its extension.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Reads overrides from environment variables starting with `prefix`.
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = Some(prefix.into());
        self
    }

    /// Sets the field at the dotted `key` path to `value`.
    ///
    /// Overrides are applied in the order they were added.
    pub fn with_override<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Applies every layer, then deserializes and validates the record.
    pub fn build(self) -> Result<T> {
        let mut value = serde_json::to_value(T::builtin()).map_err(|e| {
            BlogMetaError::serialization_error(Format::Json, e, None)
        })?;

        if let Some(path) = &self.config_file {
            debug!("Merging {} record from {:?}", T::RECORD, path);
            merge(&mut value, load_from_file(path)?);
        }

        if let Some(prefix) = &self.env_prefix {
            apply_env_overrides(&mut value, prefix)?;
        }

        for (key, override_value) in self.overrides {
            let segments: Vec<&str> = key.split('.').collect();
            set_path(&mut value, &key, &segments, override_value, false)?;
        }

        let record: T = serde_json::from_value(value).map_err(|e| {
            BlogMetaError::config_error(
                format!("Invalid {} record: {}", T::RECORD, e),
                self.config_file.clone(),
            )
        })?;
        record.validate()?;
        Ok(record)
    }
}

/// Reads `path` into a JSON tree, whatever its on-disk format.
pub fn load_from_file(path: &Path) -> Result<Value> {
    let format = Format::from_path(path)?;
    let content = fs::read_to_string(path)
        .map_err(|e| BlogMetaError::io_error(path.to_path_buf(), e))?;

    format.parse(&content).map_err(|e| match e {
        BlogMetaError::SerializationError {
            format, message, ..
        } => BlogMetaError::SerializationError {
            format,
            message,
            path: Some(path.to_path_buf()),
        },
        other => other,
    })
}

/// Deep-merges `layer` into `base`.
///
/// Objects are merged key by key; any other value replaces what was there.
pub fn merge(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(base), Value::Object(layer)) => {
            for (key, value) in layer {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        _ = base.insert(key, value);
                    }
                }
            }
        }
        (base, layer) => *base = layer,
    }
}

fn apply_env_overrides(value: &mut Value, prefix: &str) -> Result<()> {
    let mut vars: Vec<(String, String)> = Vec::new();
    for (key, raw) in env::vars_os() {
        // Keys that are not UTF-8 cannot carry the prefix.
        let Some(key) = key.to_str() else { continue };
        if !key.starts_with(prefix) || key.len() == prefix.len() {
            continue;
        }
        let raw = raw.into_string().map_err(|_| {
            BlogMetaError::invalid_override(key, "value is not valid UTF-8")
        })?;
        vars.push((key.to_string(), raw));
    }
    vars.sort();

    for (key, raw) in vars {
        let stripped = key[prefix.len()..].trim_start_matches('_');
        let segments: Vec<&str> = stripped.split("__").collect();
        debug!("Applying environment override {}", key);
        set_path(value, &key, &segments, Value::String(raw), true)?;
    }
    Ok(())
}

/// Lowercases and drops underscores so `POSTS_PER_PAGE` meets `postsPerPage`.
fn normalize(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn find_key(map: &Map<String, Value>, segment: &str) -> Option<String> {
    if map.contains_key(segment) {
        return Some(segment.to_string());
    }
    let wanted = normalize(segment);
    map.keys().find(|k| normalize(k) == wanted).cloned()
}

fn set_path(
    root: &mut Value,
    key: &str,
    segments: &[&str],
    new_value: Value,
    coerce: bool,
) -> Result<()> {
    if segments.iter().any(|s| s.is_empty()) {
        return Err(BlogMetaError::invalid_override(key, "empty key segment"));
    }

    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => {
                let found = find_key(map, segment).ok_or_else(|| {
                    BlogMetaError::invalid_override(
                        key,
                        format!("unknown field '{}'", segment),
                    )
                })?;
                map.get_mut(&found).ok_or_else(|| {
                    BlogMetaError::invalid_override(key, "field vanished")
                })?
            }
            Value::Array(items) => {
                let len = items.len();
                let index: usize = segment.parse().map_err(|_| {
                    BlogMetaError::invalid_override(
                        key,
                        format!("'{}' is not an index", segment),
                    )
                })?;
                items.get_mut(index).ok_or_else(|| {
                    BlogMetaError::invalid_override(
                        key,
                        format!("index {} out of range (len {})", index, len),
                    )
                })?
            }
            _ => {
                return Err(BlogMetaError::invalid_override(
                    key,
                    format!("'{}' does not have fields", segment),
                ));
            }
        };
    }

    *current = if coerce {
        coerce_like(current, new_value, key)?
    } else {
        new_value
    };
    Ok(())
}

/// Converts a string taken from the environment to the type of `existing`.
fn coerce_like(existing: &Value, new_value: Value, key: &str) -> Result<Value> {
    let raw = match new_value {
        Value::String(raw) => raw,
        other => return Ok(other),
    };
    let invalid = |what: &str| {
        BlogMetaError::invalid_override(
            key,
            format!("expected {}, got '{}'", what, raw),
        )
    };

    match existing {
        Value::Bool(_) => raw
            .trim()
            .parse::<bool>()
            .map(Value::Bool)
            .map_err(|_| invalid("a boolean")),
        Value::Number(n) if n.is_u64() || n.is_i64() => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| invalid("an integer")),
        Value::Number(_) => raw
            .trim()
            .parse::<f64>()
            .map(Value::from)
            .map_err(|_| invalid("a number")),
        Value::Array(_) | Value::Object(_) => {
            serde_json::from_str(&raw).map_err(|_| invalid("JSON"))
        }
        Value::String(_) | Value::Null => Ok(Value::String(raw.clone())),
    }
}
