// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Default actions write back into the open note

use crate::prelude::*;

const NOTE: &str = "# Daily\nfirst item\nsecond item\n";

fn project(action: &str, template: &str) -> Project {
    let temp = Project::with_scripts(&format!(
        r#"
[[scripts]]
name = "act"
template = "{template}"
default_action = "{action}"
"#
    ));
    temp.file("daily.md", NOTE);
    temp
}

#[test]
fn append_adds_a_line_to_the_note() {
    let temp = project("append", "echo appended");
    temp.vr()
        .args(&["run", "act", "--note", "daily.md"])
        .passes()
        .stdout_eq("")
        .stderr_has("vr: Appended");
    assert_eq!(temp.read("daily.md"), format!("{NOTE}\nappended\n"));
}

#[test]
fn replace_swaps_the_selection() {
    let temp = project("replace", "printf '%s' {selectedtext} | tr a-z A-Z");
    temp.vr()
        .args(&["run", "act", "--note", "daily.md", "--select", "2:1-2:6"])
        .passes()
        .stderr_has("vr: Replaced");
    assert_eq!(temp.read("daily.md"), "# Daily\nFIRST item\nsecond item\n");
}

#[test]
fn replace_without_selection_leaves_note_alone() {
    let temp = project("replace", "echo new");
    temp.vr()
        .args(&["run", "act", "--note", "daily.md"])
        .passes()
        .stderr_has("no text selected");
    assert_eq!(temp.read("daily.md"), NOTE);
}

#[test]
fn insert_goes_at_the_cursor() {
    let temp = project("insert", "printf ' (mon)'");
    temp.vr()
        .args(&["run", "act", "--note", "daily.md", "--cursor", "1:8"])
        .passes()
        .stderr_has("vr: Inserted");
    assert_eq!(temp.read("daily.md"), "# Daily (mon)\nfirst item\nsecond item\n");
}

#[test]
fn failed_run_skips_the_action() {
    let temp = project("append", "echo nope; exit 2");
    temp.vr()
        .args(&["run", "act", "--note", "daily.md"])
        .fails()
        .code(2)
        .stdout_eq("nope\n");
    assert_eq!(temp.read("daily.md"), NOTE);
}

#[test]
fn json_reports_the_applied_action() {
    let temp = project("append", "echo logged");
    let value = temp
        .vr()
        .args(&["run", "act", "--note", "daily.md", "-o", "json"])
        .passes()
        .json();
    assert_eq!(value["action"], "append");
    assert_eq!(value["output"], "logged\n");
}
