// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::Path;

fn settings(default_dir: Option<&str>) -> Settings {
    Settings { default_working_directory: default_dir.map(PathBuf::from), ..Settings::default() }
}

fn vault_ctx() -> ParameterContext {
    ParameterContext::builder().vault_path("/vault").build()
}

#[yare::parameterized(
    relative_on_vault   = { None,          Some("sub"),  false, "/vault/sub" },
    absolute_verbatim   = { None,          Some("sub"),  true,  "sub" },
    absolute_full       = { Some("/base"), Some("/opt"), true,  "/opt" },
    relative_on_default = { Some("/base"), Some("sub"),  false, "/base/sub" },
    no_override         = { Some("/base"), None,         false, "/base" },
    blank_override      = { None,          Some("  "),   false, "/vault" },
)]
fn working_dir_cases(
    default_dir: Option<&str>,
    override_dir: Option<&str>,
    absolute: bool,
    expected: &str,
) {
    let mut script = CommandScript::builder().use_absolute_path(absolute).build();
    script.working_directory = override_dir.map(str::to_string);
    assert_eq!(resolve_working_dir(&script, &settings(default_dir), &vault_ctx()), Path::new(expected));
}

#[test]
fn base_falls_back_to_process_dir() {
    let base = base_working_dir(&settings(None), &ParameterContext::default());
    assert_eq!(base, std::env::current_dir().unwrap());
}

#[test]
fn empty_default_dir_is_ignored() {
    assert_eq!(base_working_dir(&settings(Some("")), &vault_ctx()), Path::new("/vault"));
}
