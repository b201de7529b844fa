#!/usr/bin/env cargo
//! WordPress version detection utility for WPGate
//!
//! Resolves the WordPress core version for a single host directly from the
//! vhost tree, bypassing the server and its cache. Useful for checking what
//! the service would report for a host, or for fleet audits from cron.
//!
//! Usage:
//!   cargo run --bin detect-wp-version -- <host>
//!   cargo run --bin detect-wp-version -- <host> /custom/vhosts
//!
//! The base path defaults to WPGATE_VERSION_BASE_PATH when no second
//! argument is given. Exits non-zero when no version can be determined.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use wpgate_shared::{extract_version, version_file_path};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let Some(host) = args.next() else {
        eprintln!("Usage: detect-wp-version <host> [base-path]");
        return ExitCode::FAILURE;
    };

    let base_path = args
        .next()
        .map(PathBuf::from)
        .or_else(|| env::var("WPGATE_VERSION_BASE_PATH").ok().map(PathBuf::from));
    let Some(base_path) = base_path else {
        eprintln!("Error: no base path given and WPGATE_VERSION_BASE_PATH is not set");
        return ExitCode::FAILURE;
    };

    let path = version_file_path(&base_path, &host);
    let content = match fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            eprintln!("Error: cannot read {}: {}", path.display(), err);
            return ExitCode::FAILURE;
        }
    };

    match extract_version(&content).filter(|version| !version.is_empty()) {
        Some(version) => {
            println!("{}", version);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Error: no WordPress version found in {}", path.display());
            ExitCode::FAILURE
        }
    }
}
