// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # blogmeta CLI
//!
//! Entry point of the `blogmeta` binary. It initialises the logger, runs
//! the requested subcommand and prints its output.

use anyhow::Context;
use blogmeta::cli;
use log::{info, LevelFilter};

/// Initialises `env_logger`; `RUST_LOG` wins over `-v` when set.
fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run() -> Result<(), anyhow::Error> {
    let matches = cli::build().get_matches();
    init_logger(matches.get_count("verbose"));

    let command = matches.subcommand_name().unwrap_or_default().to_string();
    info!("Running blogmeta {}", command);

    let output = cli::run(&matches)
        .with_context(|| format!("Failed to run `{}`", command))?;
    println!("{}", output.trim_end());
    Ok(())
}

/// The main entry point for the blogmeta CLI.
fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
