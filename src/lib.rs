// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # blogmeta
//!
//! The configuration records of a personal blog: site metadata, the author
//! card, the navigation menu and the SEO/social-sharing tags. A static site
//! generator reads them; this crate only supplies the data.
//!
//! The two records are available as process-wide values through
//! [`site_config`] and [`seo_config`]. They can also be rebuilt from files,
//! environment variables and overrides with
//! [`ConfigBuilder`](crate::core::config::ConfigBuilder), and checked
//! against their conventions with [`Validate`].

#![doc = include_str!("../README.md")]
#![doc(html_root_url = "https://docs.rs/blogmeta")]

/// Module containing configuration loading, formats, traits and errors.
pub mod core;

/// Provides command-line interface utilities.
pub mod cli;

/// The SEO and social preview record.
pub mod seo;

/// The site metadata record.
pub mod site;

pub use crate::core::config::ConfigBuilder;
pub use crate::core::error::{BlogMetaError, Result, ValidationIssue};
pub use crate::core::format::Format;
pub use crate::core::traits::{Record, Validate};
pub use crate::seo::{seo_config, OpenGraph, SeoConfig, Twitter};
pub use crate::site::{site_config, Author, Contacts, MenuItem, SiteConfig};
