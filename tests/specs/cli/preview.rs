// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr preview`: the literal command, without running it

use crate::prelude::*;

#[test]
fn preview_escapes_without_running() {
    let temp = Project::with_scripts(
        r#"
[[scripts]]
name = "copy-line"
template = "cp {activenotepath} backup/{prompt:stamp} && touch ran"
"#,
    );
    temp.file("my notes/a b.md", "text\n");
    temp.vr()
        .args(&["preview", "copy-line", "--note", "my notes/a b.md", "--prompt", "stamp=it's"])
        .passes()
        .stdout_eq("cp 'my notes/a b.md' backup/'it'\\''s' && touch ran\n");
    assert!(!temp.vault().join("ran").exists());
}

#[test]
fn unanswered_prompts_stay_literal() {
    let temp = Project::with_scripts(
        r#"
[[scripts]]
name = "ask"
template = "echo {prompt:q} {unknown}"
prompts = [{ keyword = "q", label = "Q" }]
"#,
    );
    temp.vr().args(&["preview", "ask"]).passes().stdout_eq("echo {prompt:q} {unknown}\n");
}

#[test]
fn preview_json_names_the_shell() {
    let temp = Project::with_scripts(
        r#"
[[scripts]]
name = "hi"
template = "echo hi"
"#,
    );
    let value = temp.vr().args(&["preview", "hi", "-o", "json"]).passes().json();
    assert_eq!(value["command"], "echo hi");
    assert_eq!(value["shell"], "/bin/sh");
    assert_eq!(value["dialect"], "sh");
}
