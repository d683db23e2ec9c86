// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script management: add, list, enable/disable, remove

use crate::prelude::*;

#[test]
fn empty_settings_list_nothing() {
    let temp = Project::empty();
    temp.vr().args(&["list"]).passes().stdout_has("No scripts configured");
}

#[test]
fn added_script_is_persisted_and_listed() {
    let temp = Project::empty();
    temp.vr()
        .args(&[
            "add",
            "count",
            "wc -l {activenotepath}",
            "--description",
            "lines in the note",
            "--action",
            "copy",
            "--prompt",
            "term=Search term",
        ])
        .passes()
        .stdout_has("Added 'count'");

    let toml = std::fs::read_to_string(temp.config_path()).unwrap();
    assert!(toml.contains("wc -l {activenotepath}"), "{toml}");

    temp.vr()
        .args(&["list"])
        .passes()
        .stdout_has("count")
        .stdout_has("copy")
        .stdout_has("prompts")
        .stdout_has("lines in the note");

    let listed = temp.vr().args(&["list", "-o", "json"]).passes().json();
    assert_eq!(listed[0]["name"], "count");
    assert_eq!(listed[0]["default_action"], "copy");
    assert_eq!(listed[0]["prompts"][0]["keyword"], "term");
}

#[test]
fn duplicate_names_are_rejected() {
    let temp = Project::empty();
    temp.vr().args(&["add", "greet", "echo hi"]).passes();
    temp.vr().args(&["add", "GREET", "echo hey"]).fails().stderr_has("already exists");
}

#[test]
fn disable_enable_remove() {
    let temp = Project::with_scripts(
        r#"
[[scripts]]
name = "greet"
template = "echo hi"
"#,
    );
    temp.vr().args(&["disable", "greet"]).passes().stdout_has("disabled");
    temp.vr().args(&["list"]).passes().stdout_has("disabled");
    temp.vr().args(&["run", "greet"]).fails().code(1).stderr_has("is disabled");

    temp.vr().args(&["enable", "Greet"]).passes();
    temp.vr().args(&["run", "greet"]).passes().stdout_eq("hi\n");

    temp.vr().args(&["remove", "greet"]).passes().stdout_has("Removed 'greet'");
    temp.vr().args(&["run", "greet"]).fails().stderr_has("no script matches");
}
