// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use vr_adapters::{EditorState, FakeHost};
use vr_core::Cursor;

#[cfg(unix)]
#[yare::parameterized(
    plain           = { "file:///Users/me/Vault",         Some("/Users/me/Vault") },
    trailing_slash  = { "file:///Users/me/Vault/",        Some("/Users/me/Vault") },
    percent_encoded = { "file:///Users/me/My%20Vault",    Some("/Users/me/My Vault") },
    unicode         = { "file:///srv/notes/caf%C3%A9",    Some("/srv/notes/café") },
    http            = { "https://example.com/vault",      None },
    garbage         = { "not a url",                      None },
)]
fn decode_urls(raw: &str, expected: Option<&str>) {
    assert_eq!(decode_file_url(raw).as_deref(), expected);
}

#[cfg(unix)]
#[test]
fn vault_path_prefers_resource_url() {
    let host = FakeHost::new().with_vault_url("file:///a/b%20c/").with_base_path("/fallback");
    assert_eq!(ContextCollector::new(host).vault_path().as_deref(), Some("/a/b c"));
}

#[test]
fn vault_path_falls_back_to_base_path() {
    let host = FakeHost::new().with_base_path("/fallback");
    assert_eq!(ContextCollector::new(host).vault_path().as_deref(), Some("/fallback"));

    let host = FakeHost::new().with_vault_url("app://local/vault").with_base_path("/fallback");
    assert_eq!(ContextCollector::new(host).vault_path().as_deref(), Some("/fallback"));
}

#[tokio::test]
async fn empty_host_yields_empty_context() {
    let ctx = ContextCollector::new(FakeHost::new()).collect().await;
    assert_eq!(ctx, ParameterContext::default());
}

#[tokio::test]
async fn collects_document_and_editor() {
    let host = FakeHost::new()
        .with_base_path("/vault")
        .with_document("journal/today.md", "line one\nline two\n")
        .with_editor(EditorState {
            selection: Some("two".to_string()),
            cursor: Cursor::new(1, 8),
            current_line: "line two".to_string(),
        });

    let ctx = ContextCollector::new(host).collect().await;

    assert_eq!(ctx.vault_path.as_deref(), Some("/vault"));
    assert_eq!(ctx.active_note_name.as_deref(), Some("today"));
    assert_eq!(ctx.active_note_path.as_deref(), Some("journal/today.md"));
    assert_eq!(ctx.active_note_dir.as_deref(), Some("journal"));
    assert_eq!(ctx.active_note_content.as_deref(), Some("line one\nline two\n"));
    assert_eq!(ctx.selected_text.as_deref(), Some("two"));
    assert_eq!(ctx.cursor, Some(Cursor::new(1, 8)));
    assert_eq!(ctx.current_line.as_deref(), Some("line two"));
    assert_eq!(ctx.current_line_number, Some(2));
    assert!(ctx.prompts.is_empty());
}

#[tokio::test]
async fn unreadable_document_has_empty_content() {
    let host = FakeHost::new().with_document("a.md", "secret").failing_reads();
    let ctx = ContextCollector::new(host).collect().await;
    assert_eq!(ctx.active_note_path.as_deref(), Some("a.md"));
    assert_eq!(ctx.active_note_content.as_deref(), Some(""));
}

#[tokio::test]
async fn empty_selection_is_absent() {
    let host = FakeHost::new().with_editor(EditorState {
        selection: Some(String::new()),
        ..EditorState::default()
    });
    let ctx = ContextCollector::new(host).collect().await;
    assert_eq!(ctx.selected_text, None);
    assert_eq!(ctx.cursor, Some(Cursor::new(0, 0)));
    assert_eq!(ctx.current_line_number, Some(1));
}
