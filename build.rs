// Copyright © 2026 Ahmed Rizwan. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build script that refuses to compile on a toolchain older than the
//! crate's minimum supported Rust version.

use std::process;

/// Minimum supported Rust version, kept in step with `rust-version`.
const MIN_VERSION: &str = "1.74.0";

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    if version_check::is_min_version(MIN_VERSION) != Some(true) {
        eprintln!(
            "'blogmeta' requires Rust {} or newer; please update your toolchain",
            MIN_VERSION
        );
        process::exit(1);
    }
}
