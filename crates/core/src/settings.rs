// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted global settings and the registered script list

use crate::CommandScript;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Shell selection value that delegates to platform detection
pub const AUTO_SHELL: &str = "auto";

/// Default bound on captured stdout/stderr, in bytes
pub const DEFAULT_MAX_OUTPUT_LENGTH: usize = 1024 * 1024;

fn default_shell() -> String {
    AUTO_SHELL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_output() -> usize {
    DEFAULT_MAX_OUTPUT_LENGTH
}

/// Global settings plus the ordered list of user scripts.
///
/// Readers receive this as an immutable snapshot; only
/// [`ScriptStore`](crate::ScriptStore) mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Base directory for commands; falls back to the vault root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_working_directory: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub show_notifications: bool,
    #[serde(default = "default_max_output")]
    pub max_output_length: usize,
    /// Symbolic shell name, or `"auto"`
    #[serde(default = "default_shell")]
    pub shell: String,
    #[serde(default)]
    pub use_login_shell: bool,
    #[serde(default)]
    pub scripts: Vec<CommandScript>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_working_directory: None,
            show_notifications: true,
            max_output_length: DEFAULT_MAX_OUTPUT_LENGTH,
            shell: default_shell(),
            use_login_shell: false,
            scripts: Vec::new(),
        }
    }
}

impl Settings {
    /// Find a script by exact id or case-insensitive name.
    pub fn find(&self, key: &str) -> Option<&CommandScript> {
        self.scripts
            .iter()
            .find(|s| s.id == key)
            .or_else(|| self.scripts.iter().find(|s| s.name.eq_ignore_ascii_case(key)))
    }

    pub(crate) fn position(&self, key: &str) -> Option<usize> {
        self.scripts
            .iter()
            .position(|s| s.id == key)
            .or_else(|| self.scripts.iter().position(|s| s.name.eq_ignore_ascii_case(key)))
    }

    pub fn is_auto_shell(&self) -> bool {
        self.shell.trim().is_empty() || self.shell.eq_ignore_ascii_case(AUTO_SHELL)
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
