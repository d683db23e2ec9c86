// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-engine: context collection, execution and result dispatch

pub mod collector;
pub mod controller;
pub mod dispatch;
pub mod executor;
pub mod workdir;

pub use collector::{decode_file_url, ContextCollector};
pub use controller::{Controller, EngineError, HostDeps, InvokeOutcome};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use executor::{Executor, Invocation, NOTICE_PREVIEW_CHARS};
pub use workdir::{base_working_dir, resolve_working_dir};
