// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr config` and `vr shell`

use crate::prelude::*;

#[test]
fn defaults_when_no_settings_file() {
    let temp = Project::empty();
    temp.vr()
        .args(&["config"])
        .passes()
        .stdout_has("auto")
        .stdout_has("(vault root)");
    assert!(!temp.config_path().exists());
}

#[test]
fn changes_are_persisted() {
    let temp = Project::empty();
    temp.vr()
        .args(&["config", "--shell", "sh", "--login", "true", "--max-output", "4096"])
        .passes();

    let value = temp.vr().args(&["config", "-o", "json"]).passes().json();
    assert_eq!(value["shell"], "sh");
    assert_eq!(value["use_login_shell"], true);
    assert_eq!(value["max_output_length"], 4096);

    let toml = std::fs::read_to_string(temp.config_path()).unwrap();
    assert!(toml.contains("use_login_shell = true"), "{toml}");
}

#[test]
fn cwd_and_clear_cwd_conflict() {
    let temp = Project::empty();
    temp.vr().args(&["config", "--cwd", "/tmp", "--clear-cwd"]).fails().code(2);
}

#[test]
fn shell_reports_program_and_dialect() {
    let temp = Project::with_scripts("");
    temp.vr()
        .args(&["shell"])
        .passes()
        .stdout_has("/bin/sh")
        .stdout_has("sh");

    temp.vr().args(&["config", "--login", "true"]).passes();
    let value = temp.vr().args(&["shell", "-o", "json"]).passes().json();
    assert_eq!(value["program"], "/bin/sh");
    assert_eq!(value["login_args"][0], "-l");
}

#[test]
fn output_bound_fails_oversized_runs() {
    let temp = Project::with_scripts(
        r#"
[[scripts]]
name = "big"
template = "yes"
"#,
    );
    temp.vr().args(&["config", "--max-output", "64"]).passes();
    temp.vr().args(&["run", "big"]).fails().code(1).stderr_has("output exceeded 64 bytes");
}
