// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time snapshot of host editor state

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Zero-based editor cursor position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Editor state captured for one invocation.
///
/// Absent fields mean the host had nothing to offer (no open document, no
/// focused editor). Built fresh per invocation and never mutated once the
/// prompt values are merged in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterContext {
    pub vault_path: Option<String>,
    pub active_note_name: Option<String>,
    pub active_note_path: Option<String>,
    /// Parent directory of the active note
    pub active_note_dir: Option<String>,
    pub active_note_content: Option<String>,
    pub selected_text: Option<String>,
    pub cursor: Option<Cursor>,
    pub current_line: Option<String>,
    /// One-based line number of the cursor line
    pub current_line_number: Option<usize>,
    /// Prompt keyword (lower-cased) to user-supplied value
    #[serde(default)]
    pub prompts: IndexMap<String, String>,
}

impl ParameterContext {
    /// Merge user-supplied prompt values, lower-casing keywords.
    ///
    /// Consumes the context so the merged value is the final snapshot.
    pub fn with_prompts<I, K, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (keyword, value) in values {
            self.prompts.insert(keyword.as_ref().to_lowercase(), value.into());
        }
        self
    }

    pub fn prompt(&self, keyword: &str) -> Option<&str> {
        self.prompts.get(&keyword.to_lowercase()).map(String::as_str)
    }

    pub fn has_active_note(&self) -> bool {
        self.active_note_path.is_some()
    }
}

crate::builder! {
    pub struct ParameterContextBuilder => ParameterContext {
        set {
            prompts: IndexMap<String, String> = IndexMap::new(),
        }
        option {
            vault_path: String = None,
            active_note_name: String = None,
            active_note_path: String = None,
            active_note_dir: String = None,
            active_note_content: String = None,
            selected_text: String = None,
            cursor: Cursor = None,
            current_line: String = None,
            current_line_number: usize = None,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
