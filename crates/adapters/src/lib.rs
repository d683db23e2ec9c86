// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-adapters: seams to the outside world
//!
//! Each concern is a trait with one real implementation and a recording
//! fake behind the `test-support` feature.

pub mod clipboard;
pub mod host;
pub mod notify;
pub mod presenter;
pub mod prompt;
pub mod subprocess;

pub use clipboard::{ClipboardAdapter, ClipboardError, SystemClipboard};
pub use host::{DocumentRef, EditorState, HostAdapter, HostError};
pub use notify::{
    format_notice, DesktopNotifyAdapter, NotifyAdapter, NotifyError, SystemNotifier,
    TerminalNotifyAdapter,
};
pub use presenter::ResultPresenter;
pub use prompt::{PromptAdapter, PromptError, PromptOutcome};
pub use subprocess::{
    run_bounded, spawn_detached, CapturedOutput, PartialOutput, SubprocessError,
    FOREGROUND_TIMEOUT,
};

#[cfg(any(test, feature = "test-support"))]
pub use clipboard::FakeClipboard;
#[cfg(any(test, feature = "test-support"))]
pub use host::{FakeHost, HostEdit};
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use presenter::FakePresenter;
#[cfg(any(test, feature = "test-support"))]
pub use prompt::FakePrompt;
