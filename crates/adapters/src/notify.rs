// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use async_trait::async_trait;
use std::io::Write;
use thiserror::Error;

/// Errors from notify operations
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("send failed: {0}")]
    SendFailed(String),
}

/// Adapter for transient user-facing notices
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    /// Show a notice with a title and message body
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError>;
}

/// Desktop notification adapter using notify-rust.
#[derive(Clone, Copy, Debug, Default)]
pub struct DesktopNotifyAdapter;

impl DesktopNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for DesktopNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let title = title.to_string();
        let message = message.to_string();
        // Notification::show() blocks on some platforms; fire-and-forget on
        // the blocking pool so a slow notification daemon never stalls a run.
        tokio::task::spawn_blocking(move || {
            tracing::debug!(%title, %message, "sending desktop notification");
            match notify_rust::Notification::new()
                .appname("vaultrun")
                .summary(&title)
                .body(&message)
                .show()
            {
                Ok(_) => tracing::debug!(%title, "desktop notification sent"),
                Err(e) => tracing::warn!(%title, error = %e, "desktop notification failed"),
            }
        });
        Ok(())
    }
}

/// Writes notices as single lines on stderr, leaving stdout for command output.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifyAdapter;

impl TerminalNotifyAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// One notice as a single terminal line; embedded newlines are flattened.
pub fn format_notice(title: &str, message: &str) -> String {
    let message = message.replace(['\r', '\n'], " ");
    if message.is_empty() {
        format!("vr: {title}")
    } else {
        format!("vr: {title}: {message}")
    }
}

#[async_trait]
impl NotifyAdapter for TerminalNotifyAdapter {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        let line = format_notice(title, message);
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{line}").map_err(|e| NotifyError::SendFailed(e.to_string()))
    }
}

/// Runtime choice between the terminal and desktop notifiers.
#[derive(Clone, Copy, Debug)]
pub enum SystemNotifier {
    Terminal(TerminalNotifyAdapter),
    Desktop(DesktopNotifyAdapter),
}

impl SystemNotifier {
    pub fn new(desktop: bool) -> Self {
        if desktop {
            Self::Desktop(DesktopNotifyAdapter::new())
        } else {
            Self::Terminal(TerminalNotifyAdapter::new())
        }
    }
}

#[async_trait]
impl NotifyAdapter for SystemNotifier {
    async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
        match self {
            Self::Terminal(n) => n.notify(title, message).await,
            Self::Desktop(n) => n.notify(title, message).await,
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{NotifyAdapter, NotifyError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Recorded notification
    #[derive(Debug, Clone)]
    pub struct NotifyCall {
        pub title: String,
        pub message: String,
    }

    struct FakeNotifyState {
        calls: Vec<NotifyCall>,
    }

    /// Fake notification adapter for testing
    #[derive(Clone)]
    pub struct FakeNotifyAdapter {
        inner: Arc<Mutex<FakeNotifyState>>,
    }

    impl Default for FakeNotifyAdapter {
        fn default() -> Self {
            Self { inner: Arc::new(Mutex::new(FakeNotifyState { calls: Vec::new() })) }
        }
    }

    impl FakeNotifyAdapter {
        pub fn new() -> Self {
            Self::default()
        }

        /// Get all recorded notifications
        pub fn calls(&self) -> Vec<NotifyCall> {
            self.inner.lock().calls.clone()
        }

        /// Titles only, in the order they were sent
        pub fn titles(&self) -> Vec<String> {
            self.inner.lock().calls.iter().map(|c| c.title.clone()).collect()
        }
    }

    #[async_trait]
    impl NotifyAdapter for FakeNotifyAdapter {
        async fn notify(&self, title: &str, message: &str) -> Result<(), NotifyError> {
            self.inner
                .lock()
                .calls
                .push(NotifyCall { title: title.to_string(), message: message.to_string() });
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeNotifyAdapter, NotifyCall};

#[cfg(test)]
#[path = "notify_tests.rs"]
mod tests;
