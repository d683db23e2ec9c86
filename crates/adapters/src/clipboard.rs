// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use thiserror::Error;

/// Errors from clipboard operations
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Adapter for the system clipboard
#[async_trait]
pub trait ClipboardAdapter: Clone + Send + Sync + 'static {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard via arboard.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClipboardAdapter for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let text = text.to_string();
        // arboard talks to the display server synchronously
        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            clipboard.set_text(text).map_err(|e| ClipboardError::WriteFailed(e.to_string()))
        })
        .await
        .map_err(|e| ClipboardError::WriteFailed(e.to_string()))?
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{ClipboardAdapter, ClipboardError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Default)]
    struct FakeClipboardState {
        contents: Option<String>,
        unavailable: bool,
    }

    /// Fake clipboard for testing
    #[derive(Clone, Default)]
    pub struct FakeClipboard {
        inner: Arc<Mutex<FakeClipboardState>>,
    }

    impl FakeClipboard {
        pub fn new() -> Self {
            Self::default()
        }

        /// A clipboard whose writes always fail
        pub fn unavailable() -> Self {
            let fake = Self::default();
            fake.inner.lock().unavailable = true;
            fake
        }

        pub fn contents(&self) -> Option<String> {
            self.inner.lock().contents.clone()
        }
    }

    #[async_trait]
    impl ClipboardAdapter for FakeClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            let mut state = self.inner.lock();
            if state.unavailable {
                return Err(ClipboardError::Unavailable("no display".to_string()));
            }
            state.contents = Some(text.to_string());
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClipboard;
