// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Version string shown by `vr --version`
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_GIT_HASH"));

/// Settings file: VR_CONFIG > <config_dir>/vaultrun/settings.toml > ./vaultrun.toml
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var("VR_CONFIG").ok().filter(|s| !s.is_empty()) {
        return PathBuf::from(path);
    }
    match dirs::config_dir() {
        Some(dir) => dir.join("vaultrun").join("settings.toml"),
        None => PathBuf::from("vaultrun.toml"),
    }
}

/// Log filter directive: VR_LOG > RUST_LOG
pub fn log_filter() -> Option<String> {
    std::env::var("VR_LOG")
        .ok()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
