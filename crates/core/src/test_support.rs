// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Cursor, ParameterContext};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for context values and hostile strings.
pub mod strategies {
    use proptest::prelude::*;

    /// Text biased towards shell metacharacters and quotes.
    pub fn arb_hostile_text() -> impl Strategy<Value = String> {
        prop::collection::vec(
            prop_oneof![
                Just("'".to_string()),
                Just("\"".to_string()),
                Just("`".to_string()),
                Just("$(".to_string()),
                Just("; rm -rf / ;".to_string()),
                Just("\\".to_string()),
                Just("{selectedtext}".to_string()),
                Just(" ".to_string()),
                Just("\n".to_string()),
                "[a-zA-Z0-9 ._/-]{0,8}",
            ],
            0..8,
        )
        .prop_map(|parts| parts.concat())
    }

    /// Lower-case prompt keyword without braces.
    pub fn arb_keyword() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_-]{0,10}"
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────────

/// A context describing `notes/daily.md` open in `/vault` with the cursor on
/// line 2.
pub fn note_context() -> ParameterContext {
    ParameterContext::builder()
        .vault_path("/vault")
        .active_note_name("daily")
        .active_note_path("notes/daily.md")
        .active_note_dir("notes")
        .active_note_content("# Daily\nfirst item\nsecond item\n")
        .selected_text("first")
        .cursor(Cursor::new(1, 5))
        .current_line("first item")
        .current_line_number(2usize)
        .build()
}
