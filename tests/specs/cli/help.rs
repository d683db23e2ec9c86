// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn no_args_shows_usage() {
    cli().fails().stderr_has("Usage:");
}

#[test]
fn help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("Usage:")
        .stdout_has("run")
        .stdout_has("preview")
        .stdout_has("config");
}

#[test]
fn run_help_shows_host_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--vault")
        .stdout_has("--select")
        .stdout_has("--prompt");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn bad_selection_is_a_usage_error() {
    cli()
        .args(&["run", "x", "--note", "a.md", "--select", "2:1-1:1"])
        .fails()
        .code(2)
        .stderr_has("before its start");
}
