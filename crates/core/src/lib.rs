// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-core: data model and settings store for vaultrun

pub mod macros;

pub mod context;
pub mod id;
pub mod platform;
pub mod result;
pub mod script;
pub mod settings;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use context::{Cursor, ParameterContext};
#[cfg(any(test, feature = "test-support"))]
pub use context::ParameterContextBuilder;
pub use id::ScriptId;
pub use platform::Platform;
pub use result::{truncate_chars, CommandExecutionResult, NO_EXIT_CODE};
#[cfg(any(test, feature = "test-support"))]
pub use script::CommandScriptBuilder;
pub use script::{CommandScript, DefaultAction, PromptSpec, ScriptError};
pub use settings::{Settings, AUTO_SHELL, DEFAULT_MAX_OUTPUT_LENGTH};
pub use store::{ScriptStore, StoreError};
