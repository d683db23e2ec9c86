// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr run`: context placeholders, prompts, exit codes

use crate::prelude::*;

const DAILY: &str = "# Daily\nIt's \"quoted\"\nsecond line\n";

fn daily(scripts: &str) -> Project {
    let temp = Project::with_scripts(scripts);
    temp.file("notes/daily.md", DAILY);
    temp
}

#[test]
fn note_placeholders_expand() {
    let temp = daily(
        r#"
[[scripts]]
name = "where"
template = "echo {activenote} {activenotepath} {currentdir} {currentlinenumber}"
"#,
    );
    temp.vr()
        .args(&["run", "where", "--note", "notes/daily.md", "--cursor", "3:1"])
        .passes()
        .stdout_eq("daily notes/daily.md notes 3\n");
}

#[test]
fn vault_path_is_the_canonical_vault() {
    let temp = daily(
        r#"
[[scripts]]
name = "vault"
template = "printf '%s' {vaultpath}"
"#,
    );
    let expected = temp.vault_canonical().display().to_string();
    temp.vr().args(&["run", "vault"]).passes().stdout_eq(&expected);
}

#[test]
fn quoted_selection_reaches_the_command_intact() {
    let temp = daily(
        r#"
[[scripts]]
name = "echo-selection"
template = "printf '%s\n' {selectedtext}"
"#,
    );
    temp.vr()
        .args(&["run", "echo-selection", "--note", "notes/daily.md", "--select", "2:1-2:14"])
        .passes()
        .stdout_eq("It's \"quoted\"\n");
}

#[test]
fn substituted_values_cannot_inject_commands() {
    let temp = daily(
        r#"
[[scripts]]
name = "say"
template = "echo {prompt:msg}"
prompts = [{ keyword = "msg", label = "Message" }]
"#,
    );
    temp.vr()
        .args(&["run", "say", "--prompt", "msg=x; touch pwned; $(touch pwned2)"])
        .passes()
        .stdout_eq("x; touch pwned; $(touch pwned2)\n");
    assert!(!temp.vault().join("pwned").exists());
    assert!(!temp.vault().join("pwned2").exists());
}

#[test]
fn missing_prompts_are_read_from_stdin() {
    let temp = daily(
        r#"
[[scripts]]
name = "greet"
template = "echo {prompt:greeting} {prompt:NAME}"
prompts = [
    { keyword = "greeting", label = "Greeting" },
    { keyword = "Name", label = "Your name" },
]
"#,
    );
    temp.vr()
        .args(&["run", "greet", "--prompt", "greeting=hello"])
        .stdin("world\n")
        .passes()
        .stdout_eq("hello world\n")
        .stderr_has("Your name: ");
}

#[test]
fn closed_stdin_cancels() {
    let temp = daily(
        r#"
[[scripts]]
name = "greet"
template = "touch ran"
prompts = [{ keyword = "name", label = "Name" }]
"#,
    );
    temp.vr().args(&["run", "greet"]).stdin("").fails().code(1).stderr_has("cancelled");
    assert!(!temp.vault().join("ran").exists());
}

#[test]
fn failed_command_exits_with_its_code() {
    let temp = daily(
        r#"
[[scripts]]
name = "broken"
template = "echo partial; echo oops >&2; exit 3"
"#,
    );
    temp.vr()
        .args(&["run", "broken"])
        .fails()
        .code(3)
        .stdout_eq("partial\n")
        .stderr_has("command exited with code 3: oops");
}

#[test]
fn timeout_kills_and_fails() {
    let temp = daily(
        r#"
[[scripts]]
name = "slow"
template = "sleep 10"
"#,
    );
    let started = std::time::Instant::now();
    temp.vr().args(&["run", "slow", "--timeout", "1"]).fails().code(1).stderr_has("did not complete");
    assert!(started.elapsed() < std::time::Duration::from_secs(8));
}

#[test]
fn relative_working_directory_is_under_the_vault() {
    let temp = daily(
        r#"
[[scripts]]
name = "here"
template = "pwd -P"
working_directory = "notes"
"#,
    );
    let expected = format!("{}\n", temp.vault_canonical().join("notes").display());
    temp.vr().args(&["run", "here"]).passes().stdout_eq(&expected);
}

#[test]
fn json_result_on_failure() {
    let temp = daily(
        r#"
[[scripts]]
name = "broken"
template = "exit 5"
"#,
    );
    let run = temp.vr().args(&["-o", "json", "run", "broken"]).fails().code(5);
    let value = run.json();
    assert_eq!(value["success"], false);
    assert_eq!(value["exit_code"], 5);
    assert_eq!(value["command"], "exit 5");
}

#[test]
fn background_returns_immediately() {
    let temp = daily(
        r#"
[[scripts]]
name = "later"
template = "sleep 3; touch done"
background = true
"#,
    );
    let started = std::time::Instant::now();
    temp.vr().args(&["run", "later"]).passes().stdout_eq("");
    assert!(started.elapsed() < std::time::Duration::from_secs(2));
}
