// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-shell: shell selection, argument escaping and template substitution
//!
//! Everything in this crate is pure: it reads a [`ShellEnv`] snapshot or a
//! [`vr_core::ParameterContext`] and never touches the process table.

pub mod escape;
pub mod resolver;
pub mod substitute;

pub use escape::{fallback_escape, Dialect, EscapeError, Escaper};
pub use resolver::{
    detect_default_shell, login_invocation, resolve_shell, shell_basename, shell_dialect_name,
    shell_family, ResolvedShell, ShellEnv, ShellFamily, UNIX_FALLBACK_SHELL,
    WINDOWS_FALLBACK_SHELL,
};
pub use substitute::{placeholder_values, prompt_placeholder, Substitutor, CONTEXT_PLACEHOLDERS};
