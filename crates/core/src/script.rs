// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User-authored command definitions

use crate::ScriptId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// What happens to captured output after a foreground run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultAction {
    /// Hand the result to the presenter for manual review
    #[default]
    None,
    /// Write stdout to the clipboard
    Copy,
    /// Replace the editor selection with stdout
    Replace,
    /// Insert stdout at the cursor
    Insert,
    /// Append a newline and stdout to the active document
    Append,
}

crate::simple_display! {
    DefaultAction {
        None => "none",
        Copy => "copy",
        Replace => "replace",
        Insert => "insert",
        Append => "append",
    }
}

impl FromStr for DefaultAction {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "copy" => Ok(Self::Copy),
            "replace" => Ok(Self::Replace),
            "insert" => Ok(Self::Insert),
            "append" => Ok(Self::Append),
            other => Err(ScriptError::UnknownAction(other.to_string())),
        }
    }
}

/// A named value the user is asked for before the command runs.
///
/// The keyword is matched case-insensitively by `{prompt:<keyword>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptSpec {
    pub keyword: String,
    pub label: String,
}

impl PromptSpec {
    pub fn new(keyword: impl Into<String>, label: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), label: label.into() }
    }

    /// Keyword as used for context lookup and placeholder matching
    pub fn normalized_keyword(&self) -> String {
        self.keyword.to_lowercase()
    }
}

/// Errors from validating or parsing script definitions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script name must not be empty")]
    EmptyName,
    #[error("script `{0}` has an empty command template")]
    EmptyTemplate(String),
    #[error("prompt keyword `{0}` is invalid (must be non-empty and contain no braces)")]
    InvalidKeyword(String),
    #[error("prompt keyword `{0}` is declared more than once")]
    DuplicateKeyword(String),
    #[error("unknown default action `{0}` (expected none, copy, replace, insert or append)")]
    UnknownAction(String),
}

fn default_true() -> bool {
    true
}

/// A user-authored command definition.
///
/// Immutable for the duration of an execution; the settings store owns the
/// canonical copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandScript {
    #[serde(default)]
    pub id: ScriptId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Command text containing `{placeholder}` tokens
    pub template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_directory: Option<String>,
    /// Treat `working_directory` as absolute instead of relative to the base
    #[serde(default)]
    pub use_absolute_path: bool,
    #[serde(default)]
    pub background: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<PromptSpec>,
    #[serde(default)]
    pub default_action: DefaultAction,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl CommandScript {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            id: ScriptId::new(),
            name: name.into(),
            description: None,
            template: template.into(),
            working_directory: None,
            use_absolute_path: false,
            background: false,
            prompts: Vec::new(),
            default_action: DefaultAction::None,
            enabled: true,
        }
    }

    crate::setters! {
        set {
            use_absolute_path: bool,
            background: bool,
            prompts: Vec<PromptSpec>,
            default_action: DefaultAction,
            enabled: bool,
        }
        option {
            description: String,
            working_directory: String,
        }
    }

    pub fn requires_prompts(&self) -> bool {
        !self.prompts.is_empty()
    }

    /// Check the invariants the store relies on before persisting.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if self.name.trim().is_empty() {
            return Err(ScriptError::EmptyName);
        }
        if self.template.trim().is_empty() {
            return Err(ScriptError::EmptyTemplate(self.name.clone()));
        }
        let mut seen = std::collections::HashSet::new();
        for prompt in &self.prompts {
            let keyword = prompt.normalized_keyword();
            if keyword.is_empty() || keyword.contains(['{', '}']) {
                return Err(ScriptError::InvalidKeyword(prompt.keyword.clone()));
            }
            if !seen.insert(keyword) {
                return Err(ScriptError::DuplicateKeyword(prompt.keyword.clone()));
            }
        }
        Ok(())
    }
}

crate::builder! {
    pub struct CommandScriptBuilder => CommandScript {
        into {
            id: ScriptId = "scr-test",
            name: String = "test-script",
            template: String = "echo hello",
        }
        set {
            use_absolute_path: bool = false,
            background: bool = false,
            prompts: Vec<PromptSpec> = Vec::new(),
            default_action: DefaultAction = DefaultAction::None,
            enabled: bool = true,
        }
        option {
            description: String = None,
            working_directory: String = None,
        }
    }
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
