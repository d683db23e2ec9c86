// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host application seam: vault location, active document, focused editor

use async_trait::async_trait;
use thiserror::Error;
use vr_core::Cursor;

/// Errors from host reads and writes
#[derive(Debug, Error)]
pub enum HostError {
    #[error("vault location unavailable: {0}")]
    VaultUnavailable(String),
    #[error("no active document")]
    NoActiveDocument,
    #[error("no active editor")]
    NoActiveEditor,
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: String, source: std::io::Error },
}

/// Identity of the document open in the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// File name without extension
    pub name: String,
    /// Vault-relative path
    pub path: String,
    /// Vault-relative parent directory
    pub parent: String,
}

impl DocumentRef {
    /// Derive name and parent from a vault-relative `/`-separated path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        let (parent, file) = match path.rsplit_once('/') {
            Some((parent, file)) => (parent.to_string(), file),
            None => (String::new(), path.as_str()),
        };
        let name = match file.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem.to_string(),
            _ => file.to_string(),
        };
        Self { name, path, parent }
    }
}

/// What the focused editor shows right now.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    pub selection: Option<String>,
    pub cursor: Cursor,
    /// Full text of the cursor line
    pub current_line: String,
}

/// Narrow typed view of the host application.
///
/// Vault location has a documented fallback order: the resource URL is
/// tried first and [`HostAdapter::vault_base_path`] is used when it fails.
#[async_trait]
pub trait HostAdapter: Clone + Send + Sync + 'static {
    /// `file://` URL of the vault root
    fn vault_resource_url(&self) -> Result<String, HostError>;

    /// Raw vault base path, used when the resource URL is unavailable
    fn vault_base_path(&self) -> Option<String>;

    fn active_document(&self) -> Option<DocumentRef>;

    /// Focused editor state, `None` when no editor has focus
    fn editor_state(&self) -> Option<EditorState>;

    async fn read_document(&self, doc: &DocumentRef) -> Result<String, HostError>;

    /// Replace the full text of `doc`
    async fn write_document(&self, doc: &DocumentRef, content: &str) -> Result<(), HostError>;

    /// Replace the current selection with `text`
    async fn replace_selection(&self, text: &str) -> Result<(), HostError>;

    /// Insert `text` at the cursor
    async fn insert_at_cursor(&self, text: &str) -> Result<(), HostError>;
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{DocumentRef, EditorState, HostAdapter, HostError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Recorded editor mutation
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum HostEdit {
        ReplaceSelection(String),
        InsertAtCursor(String),
        WriteDocument { path: String, content: String },
    }

    #[derive(Default)]
    struct FakeHostState {
        vault_url: Option<String>,
        base_path: Option<String>,
        active: Option<DocumentRef>,
        editor: Option<EditorState>,
        documents: HashMap<String, String>,
        fail_reads: bool,
        edits: Vec<HostEdit>,
    }

    /// In-memory host for testing
    #[derive(Clone, Default)]
    pub struct FakeHost {
        inner: Arc<Mutex<FakeHostState>>,
    }

    impl FakeHost {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_vault_url(self, url: &str) -> Self {
            self.inner.lock().vault_url = Some(url.to_string());
            self
        }

        pub fn with_base_path(self, path: &str) -> Self {
            self.inner.lock().base_path = Some(path.to_string());
            self
        }

        /// Open `path` as the active document with `content`
        pub fn with_document(self, path: &str, content: &str) -> Self {
            {
                let mut state = self.inner.lock();
                state.active = Some(DocumentRef::from_path(path));
                state.documents.insert(path.to_string(), content.to_string());
            }
            self
        }

        pub fn with_editor(self, editor: EditorState) -> Self {
            self.inner.lock().editor = Some(editor);
            self
        }

        /// Make every document read fail
        pub fn failing_reads(self) -> Self {
            self.inner.lock().fail_reads = true;
            self
        }

        pub fn document(&self, path: &str) -> Option<String> {
            self.inner.lock().documents.get(path).cloned()
        }

        pub fn edits(&self) -> Vec<HostEdit> {
            self.inner.lock().edits.clone()
        }
    }

    #[async_trait]
    impl HostAdapter for FakeHost {
        fn vault_resource_url(&self) -> Result<String, HostError> {
            self.inner
                .lock()
                .vault_url
                .clone()
                .ok_or_else(|| HostError::VaultUnavailable("no resource url".to_string()))
        }

        fn vault_base_path(&self) -> Option<String> {
            self.inner.lock().base_path.clone()
        }

        fn active_document(&self) -> Option<DocumentRef> {
            self.inner.lock().active.clone()
        }

        fn editor_state(&self) -> Option<EditorState> {
            self.inner.lock().editor.clone()
        }

        async fn read_document(&self, doc: &DocumentRef) -> Result<String, HostError> {
            let state = self.inner.lock();
            if state.fail_reads {
                return Err(HostError::Read {
                    path: doc.path.clone(),
                    source: std::io::Error::other("read failure injected"),
                });
            }
            state.documents.get(&doc.path).cloned().ok_or_else(|| HostError::Read {
                path: doc.path.clone(),
                source: std::io::ErrorKind::NotFound.into(),
            })
        }

        async fn write_document(&self, doc: &DocumentRef, content: &str) -> Result<(), HostError> {
            let mut state = self.inner.lock();
            state.documents.insert(doc.path.clone(), content.to_string());
            state
                .edits
                .push(HostEdit::WriteDocument { path: doc.path.clone(), content: content.to_string() });
            Ok(())
        }

        async fn replace_selection(&self, text: &str) -> Result<(), HostError> {
            let mut state = self.inner.lock();
            if state.editor.is_none() {
                return Err(HostError::NoActiveEditor);
            }
            state.edits.push(HostEdit::ReplaceSelection(text.to_string()));
            Ok(())
        }

        async fn insert_at_cursor(&self, text: &str) -> Result<(), HostError> {
            let mut state = self.inner.lock();
            if state.editor.is_none() {
                return Err(HostError::NoActiveEditor);
            }
            state.edits.push(HostEdit::InsertAtCursor(text.to_string()));
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeHost, HostEdit};

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
