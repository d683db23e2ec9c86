// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of one foreground execution

use crate::ParameterContext;
use serde::{Deserialize, Serialize};

/// Exit code recorded when the process never started or was killed
/// without reporting one.
pub const NO_EXIT_CODE: i32 = -1;

/// Captured outcome of a foreground run.
///
/// `command` is always the substitution of `original_command` against
/// `parameters`, so the literal command that ran can be reproduced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandExecutionResult {
    pub success: bool,
    /// Captured standard output
    pub output: String,
    /// Captured standard error, or the launch failure message
    pub error: String,
    pub exit_code: i32,
    /// Literal command after substitution
    pub command: String,
    /// Template before substitution
    pub original_command: String,
    pub parameters: ParameterContext,
}

impl CommandExecutionResult {
    pub fn succeeded(
        command: impl Into<String>,
        original_command: impl Into<String>,
        parameters: ParameterContext,
        output: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: error.into(),
            exit_code: 0,
            command: command.into(),
            original_command: original_command.into(),
            parameters,
        }
    }

    pub fn failed(
        command: impl Into<String>,
        original_command: impl Into<String>,
        parameters: ParameterContext,
        exit_code: i32,
        output: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            output: output.into(),
            error: error.into(),
            exit_code,
            command: command.into(),
            original_command: original_command.into(),
            parameters,
        }
    }

    /// Short single-line excerpt for transient notices.
    ///
    /// Uses stdout on success and the error text on failure, truncated to
    /// `max_chars` characters with a trailing ellipsis.
    pub fn preview(&self, max_chars: usize) -> String {
        let source = if self.success { &self.output } else { &self.error };
        truncate_chars(source.trim(), max_chars)
    }
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
