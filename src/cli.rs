// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Command-line interface for blogmeta
//!
//! Prints the blog's configuration records in the format the static site
//! generator reads, validates them, and lists the author's contacts.
//!
//! # Examples
//!
//! ```
//! use blogmeta::cli;
//!
//! let matches = cli::build().get_matches_from(vec![
//!     "blogmeta",
//!     "show",
//!     "seo",
//!     "--format",
//!     "toml",
//! ]);
//!
//! let output = cli::run(&matches).unwrap();
//! assert!(output.contains("cardType = \"summary_large_image\""));
//! ```

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};

use crate::core::config::ConfigBuilder;
use crate::core::error::{BlogMetaError, Result};
use crate::core::format::Format;
use crate::core::traits::Record;
use crate::seo::SeoConfig;
use crate::site::SiteConfig;

/// The current version of blogmeta, as defined in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output format of `show`.
pub const DEFAULT_FORMAT: &str = "json";

fn record_arg() -> Arg {
    Arg::new("record")
        .help("Record to use")
        .required(true)
        .value_parser(["site", "seo"])
}

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("JSON, TOML or YAML file merged over the built-in record")
        .value_parser(value_parser!(PathBuf))
}

fn env_prefix_arg() -> Arg {
    Arg::new("env-prefix")
        .short('e')
        .long("env-prefix")
        .help("Read overrides from environment variables with this prefix")
        .value_parser(value_parser!(String))
}

/// Builds and configures the blogmeta command-line interface.
pub fn build() -> Command {
    debug!("Building CLI command structure");

    Command::new("blogmeta")
        .author("Ahmed Rizwan")
        .about("Site metadata and SEO records for the blog.")
        .version(VERSION)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v, -vv)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("show")
                .about("Print a record")
                .arg(record_arg())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .help("Output format")
                        .value_parser(["json", "toml", "yaml"])
                        .default_value(DEFAULT_FORMAT),
                )
                .arg(config_arg())
                .arg(env_prefix_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check a record against its conventions")
                .arg(record_arg())
                .arg(config_arg())
                .arg(env_prefix_arg()),
        )
        .subcommand(
            Command::new("contacts")
                .about("List the author's contacts that are set")
                .arg(config_arg())
                .arg(env_prefix_arg()),
        )
}

/// Runs the subcommand in `matches` and returns what it would print.
pub fn run(matches: &ArgMatches) -> Result<String> {
    match matches.subcommand() {
        Some(("show", sub_matches)) => {
            let format: Format = required::<String>(sub_matches, "format")?.parse()?;
            match required::<String>(sub_matches, "record")?.as_str() {
                "site" => show(&load::<SiteConfig>(sub_matches)?, format),
                _ => show(&load::<SeoConfig>(sub_matches)?, format),
            }
        }
        Some(("validate", sub_matches)) => {
            match required::<String>(sub_matches, "record")?.as_str() {
                "site" => validate::<SiteConfig>(sub_matches),
                _ => validate::<SeoConfig>(sub_matches),
            }
        }
        Some(("contacts", sub_matches)) => {
            let site = load::<SiteConfig>(sub_matches)?;
            Ok(site
                .author
                .contacts
                .present()
                .map(|(platform, handle)| format!("{}: {}\n", platform, handle))
                .collect())
        }
        _ => Err(BlogMetaError::config_error("Unknown command", None)),
    }
}

fn required<'a, T>(matches: &'a ArgMatches, id: &str) -> Result<&'a T>
where
    T: Clone + Send + Sync + 'static,
{
    matches.get_one::<T>(id).ok_or_else(|| {
        BlogMetaError::config_error(format!("Missing argument '{}'", id), None)
    })
}

/// Loads a record, layering the optional file and environment prefix.
fn load<T: Record>(matches: &ArgMatches) -> Result<T> {
    let mut builder = ConfigBuilder::<T>::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        info!("Loading {} record from {:?}", T::RECORD, path);
        builder = builder.with_file(path);
    }
    if let Some(prefix) = matches.get_one::<String>("env-prefix") {
        builder = builder.with_env_prefix(prefix.as_str());
    }
    builder.build()
}

fn show<T: Record>(record: &T, format: Format) -> Result<String> {
    info!("Rendering {} record as {}", T::RECORD, format);
    format.render(record)
}

fn validate<T: Record>(matches: &ArgMatches) -> Result<String> {
    let _record = load::<T>(matches)?;
    info!("{} record is valid", T::RECORD);
    Ok(format!("{}: ok\n", T::RECORD))
}
