// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Placeholder substitution for command templates

use crate::escape::{fallback_escape, Escaper};
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;
use vr_core::ParameterContext;

/// Context placeholders, always registered.
pub const CONTEXT_PLACEHOLDERS: [&str; 10] = [
    "{activenote}",
    "{activenotepath}",
    "{activenotecontent}",
    "{selectedtext}",
    "{currentdir}",
    "{vaultpath}",
    "{currentline}",
    "{currentlinenumber}",
    "{cursorline}",
    "{cursorcolumn}",
];

/// Any `{...}` token without nested braces
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]+\}").expect("constant regex pattern is valid"));

/// Placeholder token for a prompt keyword, e.g. `{prompt:query}`
pub fn prompt_placeholder(keyword: &str) -> String {
    format!("{{prompt:{}}}", keyword.to_lowercase())
}

/// Lower-cased placeholder token to raw (unescaped) value.
///
/// Absent context fields map to the empty string. Order is fixed: context
/// placeholders first, then prompts in the order they were supplied.
pub fn placeholder_values(ctx: &ParameterContext) -> IndexMap<String, String> {
    let text = |v: &Option<String>| v.clone().unwrap_or_default();
    let number = |v: Option<usize>| v.map(|n| n.to_string()).unwrap_or_default();

    let values = [
        text(&ctx.active_note_name),
        text(&ctx.active_note_path),
        text(&ctx.active_note_content),
        text(&ctx.selected_text),
        text(&ctx.active_note_dir),
        text(&ctx.vault_path),
        text(&ctx.current_line),
        number(ctx.current_line_number),
        number(ctx.cursor.map(|c| c.line)),
        number(ctx.cursor.map(|c| c.column)),
    ];

    let mut map: IndexMap<String, String> = CONTEXT_PLACEHOLDERS
        .iter()
        .map(|token| token.to_string())
        .zip(values)
        .collect();
    for (keyword, value) in &ctx.prompts {
        map.insert(prompt_placeholder(keyword), value.clone());
    }
    map
}

/// Rewrites templates into literal commands for one escaping dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitutor {
    escaper: Escaper,
}

impl Substitutor {
    pub fn new(escaper: Escaper) -> Self {
        Self { escaper }
    }

    pub fn escaper(&self) -> &Escaper {
        &self.escaper
    }

    /// Escape one value, falling back to double quoting when the dialect
    /// cannot represent it.
    pub fn escape_value(&self, value: &str) -> String {
        match self.escaper.escape(value) {
            Ok(escaped) => escaped,
            Err(e) => {
                tracing::warn!(error = %e, "escaper rejected value, using fallback quoting");
                fallback_escape(value)
            }
        }
    }

    /// Replace every recognized placeholder in `template`, case-insensitively.
    ///
    /// Each occurrence is escaped independently. Replacement text is never
    /// rescanned, so values containing `{...}` stay literal. Unrecognized
    /// tokens are left as-is.
    pub fn substitute(&self, template: &str, ctx: &ParameterContext) -> String {
        let values = placeholder_values(ctx);
        TOKEN_PATTERN
            .replace_all(template, |caps: &regex::Captures| {
                let token = &caps[0];
                match values.get(&token.to_lowercase()) {
                    Some(value) => self.escape_value(value),
                    None => token.to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
#[path = "substitute_tests.rs"]
mod tests;
