// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Snapshot host editor state into a [`ParameterContext`]

use std::path::PathBuf;
use url::Url;
use vr_adapters::HostAdapter;
use vr_core::ParameterContext;

/// Local path for a `file://` URL, percent-decoded, without a trailing
/// separator. `None` for other schemes or unparseable input.
pub fn decode_file_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    if url.scheme() != "file" {
        return None;
    }
    let path: PathBuf = url.to_file_path().ok()?.components().collect();
    Some(path.to_string_lossy().into_owned())
}

/// Reads host state; never fails, missing sources leave fields absent.
#[derive(Clone)]
pub struct ContextCollector<H> {
    host: H,
}

impl<H: HostAdapter> ContextCollector<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Vault root: the decoded resource URL, else the raw base path.
    pub fn vault_path(&self) -> Option<String> {
        match self.host.vault_resource_url() {
            Ok(url) => match decode_file_url(&url) {
                Some(path) => return Some(path),
                None => tracing::debug!(%url, "vault url is not a local file url"),
            },
            Err(e) => tracing::debug!(error = %e, "vault url unavailable, using base path"),
        }
        self.host.vault_base_path()
    }

    /// Build a fresh context. Has no side effects on host state.
    pub async fn collect(&self) -> ParameterContext {
        let mut ctx = ParameterContext { vault_path: self.vault_path(), ..Default::default() };

        if let Some(doc) = self.host.active_document() {
            let content = match self.host.read_document(&doc).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(path = %doc.path, error = %e, "could not read active note");
                    String::new()
                }
            };
            ctx.active_note_name = Some(doc.name);
            ctx.active_note_path = Some(doc.path);
            ctx.active_note_dir = Some(doc.parent);
            ctx.active_note_content = Some(content);
        }

        if let Some(editor) = self.host.editor_state() {
            ctx.selected_text = editor.selection.filter(|s| !s.is_empty());
            ctx.current_line_number = Some(editor.cursor.line + 1);
            ctx.cursor = Some(editor.cursor);
            ctx.current_line = Some(editor.current_line);
        }

        tracing::debug!(
            vault = ?ctx.vault_path,
            note = ?ctx.active_note_path,
            selection = ctx.selected_text.is_some(),
            cursor = ?ctx.cursor,
            "collected context"
        );
        ctx
    }
}

#[cfg(test)]
#[path = "collector_tests.rs"]
mod tests;
