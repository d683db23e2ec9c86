// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup. Logs go to stderr so stdout carries command output.

use tracing_subscriber::EnvFilter;

/// Default directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `VR_LOG` / `RUST_LOG` override `-v`.
pub fn init_logging(verbose: u8) {
    let directive = crate::env::log_filter().unwrap_or_else(|| default_directive(verbose).to_string());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .try_init();
    if installed.is_ok() {
        tracing::debug!(verbose, %directive, "logging initialized");
    }
}
