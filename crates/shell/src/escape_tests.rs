// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use vr_core::test_support::strategies::arb_hostile_text;

/// Minimal POSIX word splitter: single quotes, backslash escapes, blanks.
fn posix_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                for q in chars.by_ref() {
                    if q == '\'' {
                        break;
                    }
                    current.push(q);
                }
            }
            '\\' => {
                in_word = true;
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            ' ' | '\t' | '\n' => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            _ => {
                in_word = true;
                current.push(c);
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

#[yare::parameterized(
    bash       = { "bash",       Dialect::Posix },
    zsh_upper  = { "ZSH",        Dialect::Posix },
    busybox    = { "busybox",    Dialect::Posix },
    tcsh       = { "tcsh",       Dialect::Csh },
    fish       = { "fish",       Dialect::Fish },
    pwsh       = { "pwsh",       Dialect::PowerShell },
    powershell = { "powershell", Dialect::PowerShell },
    cmd        = { "cmd",        Dialect::Cmd },
)]
fn dialect_names(name: &str, expected: Dialect) {
    assert_eq!(Escaper::new(name).unwrap().dialect(), expected);
}

#[test]
fn unknown_dialect_fails_construction() {
    assert_eq!(
        Escaper::new("nushell"),
        Err(EscapeError::UnsupportedDialect("nushell".to_string()))
    );
}

#[test]
fn unknown_dialect_falls_back_to_posix() {
    assert_eq!(Escaper::for_dialect_or_default("nushell").dialect(), Dialect::Posix);
}

#[yare::parameterized(
    plain_path   = { "/Users/me/Vault",       "/Users/me/Vault" },
    empty        = { "",                      "''" },
    spaces       = { "my notes",              "'my notes'" },
    single_quote = { "It's \"quoted\"",       "'It'\\''s \"quoted\"'" },
    injection    = { "; rm -rf / ;",          "'; rm -rf / ;'" },
    dollar       = { "$HOME `pwd`",           "'$HOME `pwd`'" },
    tilde        = { "~/notes",               "'~/notes'" },
    equals_lead  = { "=ls",                   "'=ls'" },
    equals_mid   = { "key=value",             "key=value" },
)]
fn posix_cases(input: &str, expected: &str) {
    assert_eq!(Escaper::for_dialect(Dialect::Posix).escape(input).unwrap(), expected);
}

#[yare::parameterized(
    plain        = { "abc",        "'abc'" },
    empty        = { "",           "''" },
    apostrophe   = { "it's",       "'it''s'" },
    typographic  = { "it\u{2019}s", "'it\u{2019}\u{2019}s'" },
    dollar       = { "$env:PATH",  "'$env:PATH'" },
)]
fn powershell_cases(input: &str, expected: &str) {
    assert_eq!(Escaper::for_dialect(Dialect::PowerShell).escape(input).unwrap(), expected);
}

#[yare::parameterized(
    plain      = { r"C:\notes",       r"C:\notes" },
    spaces     = { "a b",             "\"a b\"" },
    quotes     = { "say \"hi\"",      "\"say \"\"hi\"\"\"" },
    percent    = { "%PATH%",          "\"%PATH%\"" },
    empty      = { "",                "\"\"" },
)]
fn cmd_cases(input: &str, expected: &str) {
    assert_eq!(Escaper::for_dialect(Dialect::Cmd).escape(input).unwrap(), expected);
}

#[test]
fn cmd_rejects_line_breaks() {
    let err = Escaper::for_dialect(Dialect::Cmd).escape("a\nb").unwrap_err();
    assert!(matches!(err, EscapeError::Unrepresentable { dialect: Dialect::Cmd, .. }));
}

#[yare::parameterized(
    bang    = { "hi!",   "'hi\\!'" },
    newline = { "a\nb",  "'a\\\nb'" },
    quote   = { "it's",  "'it'\\''s'" },
    dirstack = { "=1",   "'=1'" },
)]
fn csh_cases(input: &str, expected: &str) {
    assert_eq!(Escaper::for_dialect(Dialect::Csh).escape(input).unwrap(), expected);
}

#[test]
fn fish_escapes_backslash_and_quote() {
    assert_eq!(Escaper::for_dialect(Dialect::Fish).escape(r"a\b'c").unwrap(), r"'a\\b\'c'");
}

#[test]
fn nul_is_unrepresentable_everywhere() {
    for dialect in
        [Dialect::Posix, Dialect::Csh, Dialect::Fish, Dialect::PowerShell, Dialect::Cmd]
    {
        assert!(Escaper::for_dialect(dialect).escape("a\0b").is_err(), "{dialect}");
    }
}

#[yare::parameterized(
    plain   = { "notes/a-b.md",   "notes/a-b.md" },
    empty   = { "",               "\"\"" },
    spaced  = { "a b",            "\"a b\"" },
    quoted  = { "say \"hi\"",     "\"say \\\"hi\\\"\"" },
)]
fn fallback_cases(input: &str, expected: &str) {
    assert_eq!(fallback_escape(input), expected);
}

proptest! {
    #[test]
    fn posix_escape_yields_one_literal_word(value in arb_hostile_text()) {
        let escaped = Escaper::for_dialect(Dialect::Posix).escape(&value).unwrap();
        prop_assert_eq!(posix_words(&escaped), vec![value]);
    }

    #[test]
    fn posix_escape_survives_surrounding_text(value in arb_hostile_text()) {
        let escaped = Escaper::for_dialect(Dialect::Posix).escape(&value).unwrap();
        let line = format!("echo {} done", escaped);
        prop_assert_eq!(posix_words(&line), vec!["echo".to_string(), value, "done".to_string()]);
    }
}
