// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;
use vr_core::{CommandScript, ParameterContext, Settings};

/// Base directory: configured default, else the vault root, else the
/// process working directory.
pub fn base_working_dir(settings: &Settings, ctx: &ParameterContext) -> PathBuf {
    if let Some(dir) = settings.default_working_directory.as_ref().filter(|d| !d.as_os_str().is_empty())
    {
        return dir.clone();
    }
    if let Some(vault) = ctx.vault_path.as_deref().filter(|v| !v.is_empty()) {
        return PathBuf::from(vault);
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Directory a script runs in.
///
/// A script override is taken verbatim when `use_absolute_path` is set and
/// joined onto the base otherwise.
pub fn resolve_working_dir(
    script: &CommandScript,
    settings: &Settings,
    ctx: &ParameterContext,
) -> PathBuf {
    let base = base_working_dir(settings, ctx);
    match script.working_directory.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(dir) if script.use_absolute_path => PathBuf::from(dir),
        Some(dir) => base.join(dir),
        None => base,
    }
}

#[cfg(test)]
#[path = "workdir_tests.rs"]
mod tests;
