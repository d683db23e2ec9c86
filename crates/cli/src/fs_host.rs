// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File-backed host: a vault directory, one open note and an in-memory
//! editor over it. Editor changes are written straight back to the note.

use crate::args::Selection;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use url::Url;
use vr_adapters::{DocumentRef, EditorState, HostAdapter, HostError};
use vr_core::Cursor;

/// Byte offset of `pos`, clamped to the text.
pub fn offset_of(text: &str, pos: Cursor) -> usize {
    let mut start = 0;
    for (index, line) in text.split_inclusive('\n').enumerate() {
        let content = line.trim_end_matches(['\n', '\r']);
        if index == pos.line {
            return start
                + content.char_indices().nth(pos.column).map_or(content.len(), |(i, _)| i);
        }
        start += line.len();
    }
    text.len()
}

/// Position of a byte offset
pub fn position_of(text: &str, offset: usize) -> Cursor {
    let before = &text[..offset.min(text.len())];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    Cursor::new(line, before[line_start..].chars().count())
}

/// Text of line `line` without its terminator
pub fn line_at(text: &str, line: usize) -> String {
    text.split('\n').nth(line).unwrap_or_default().trim_end_matches('\r').to_string()
}

/// Editable copy of the open note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    pub text: String,
    pub selection: Option<Selection>,
    pub cursor: Cursor,
}

impl EditorBuffer {
    pub fn selected_text(&self) -> Option<String> {
        let sel = self.selection?;
        let start = offset_of(&self.text, sel.start);
        let end = offset_of(&self.text, sel.end).max(start);
        Some(self.text[start..end].to_string())
    }

    pub fn state(&self) -> EditorState {
        EditorState {
            selection: self.selected_text(),
            cursor: self.cursor,
            current_line: line_at(&self.text, self.cursor.line),
        }
    }

    fn splice(&mut self, start: usize, end: usize, replacement: &str) {
        self.text.replace_range(start..end, replacement);
        self.selection = None;
        self.cursor = position_of(&self.text, start + replacement.len());
    }

    /// Returns false when nothing is selected
    pub fn replace_selection(&mut self, replacement: &str) -> bool {
        let Some(sel) = self.selection else {
            return false;
        };
        let start = offset_of(&self.text, sel.start);
        let end = offset_of(&self.text, sel.end).max(start);
        self.splice(start, end, replacement);
        true
    }

    pub fn insert_at_cursor(&mut self, text: &str) {
        let at = offset_of(&self.text, self.cursor);
        self.splice(at, at, text);
    }
}

struct OpenNote {
    doc: DocumentRef,
    file: PathBuf,
    editor: Mutex<EditorBuffer>,
}

struct Inner {
    vault: PathBuf,
    note: Option<OpenNote>,
}

/// Host over a vault directory on disk.
#[derive(Clone)]
pub struct FsHost {
    inner: Arc<Inner>,
}

/// Vault-relative `/`-separated path
fn relative_path(vault: &Path, file: &Path) -> String {
    let rel = file.strip_prefix(vault).unwrap_or(file);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

impl FsHost {
    /// Open `vault`, and `note` (relative to the vault or absolute) in an
    /// editor. The cursor defaults to the end of the selection.
    pub fn open(
        vault: &Path,
        note: Option<&Path>,
        selection: Option<Selection>,
        cursor: Option<Cursor>,
    ) -> Result<Self, HostError> {
        let vault = vault
            .canonicalize()
            .map_err(|e| HostError::VaultUnavailable(format!("{}: {e}", vault.display())))?;

        let note = match note {
            Some(note) => {
                let joined = if note.is_absolute() { note.to_path_buf() } else { vault.join(note) };
                let file = joined.canonicalize().map_err(|source| HostError::Read {
                    path: joined.display().to_string(),
                    source,
                })?;
                let text = std::fs::read_to_string(&file)
                    .map_err(|source| HostError::Read { path: file.display().to_string(), source })?;
                let doc = DocumentRef::from_path(relative_path(&vault, &file));
                let cursor = cursor.or(selection.map(|s| s.end)).unwrap_or_default();
                tracing::debug!(note = %doc.path, ?selection, ?cursor, "opened note");
                Some(OpenNote { doc, file, editor: Mutex::new(EditorBuffer { text, selection, cursor }) })
            }
            None => None,
        };

        Ok(Self { inner: Arc::new(Inner { vault, note }) })
    }

    pub fn vault(&self) -> &Path {
        &self.inner.vault
    }

    /// Snapshot of the editor buffer
    pub fn buffer(&self) -> Option<EditorBuffer> {
        self.inner.note.as_ref().map(|n| n.editor.lock().clone())
    }

    fn note_for(&self, doc: &DocumentRef) -> Result<&OpenNote, HostError> {
        self.inner
            .note
            .as_ref()
            .filter(|n| n.doc.path == doc.path)
            .ok_or(HostError::NoActiveDocument)
    }

    async fn save(&self, note: &OpenNote, text: &str) -> Result<(), HostError> {
        tokio::fs::write(&note.file, text)
            .await
            .map_err(|source| HostError::Write { path: note.file.display().to_string(), source })
    }
}

#[async_trait]
impl HostAdapter for FsHost {
    fn vault_resource_url(&self) -> Result<String, HostError> {
        Url::from_directory_path(&self.inner.vault)
            .map(|url| url.to_string())
            .map_err(|()| HostError::VaultUnavailable(self.inner.vault.display().to_string()))
    }

    fn vault_base_path(&self) -> Option<String> {
        Some(self.inner.vault.display().to_string())
    }

    fn active_document(&self) -> Option<DocumentRef> {
        self.inner.note.as_ref().map(|n| n.doc.clone())
    }

    fn editor_state(&self) -> Option<EditorState> {
        self.inner.note.as_ref().map(|n| n.editor.lock().state())
    }

    async fn read_document(&self, doc: &DocumentRef) -> Result<String, HostError> {
        let note = self.note_for(doc)?;
        tokio::fs::read_to_string(&note.file)
            .await
            .map_err(|source| HostError::Read { path: note.file.display().to_string(), source })
    }

    async fn write_document(&self, doc: &DocumentRef, content: &str) -> Result<(), HostError> {
        let note = self.note_for(doc)?;
        self.save(note, content).await?;
        note.editor.lock().text = content.to_string();
        Ok(())
    }

    async fn replace_selection(&self, text: &str) -> Result<(), HostError> {
        let note = self.inner.note.as_ref().ok_or(HostError::NoActiveEditor)?;
        let updated = {
            let mut editor = note.editor.lock();
            if !editor.replace_selection(text) {
                return Ok(());
            }
            editor.text.clone()
        };
        self.save(note, &updated).await
    }

    async fn insert_at_cursor(&self, text: &str) -> Result<(), HostError> {
        let note = self.inner.note.as_ref().ok_or(HostError::NoActiveEditor)?;
        let updated = {
            let mut editor = note.editor.lock();
            editor.insert_at_cursor(text);
            editor.text.clone()
        };
        self.save(note, &updated).await
    }
}

#[cfg(test)]
#[path = "fs_host_tests.rs"]
mod tests;
