// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-argument escaping per dialect.
//!
//! Every value substituted into a command line passes through an
//! [`Escaper`] so that it reaches the shell as exactly one literal word.

use thiserror::Error;

/// Errors from constructing an escaper or escaping a value
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EscapeError {
    #[error("unsupported escaping dialect `{0}`")]
    UnsupportedDialect(String),
    #[error("{dialect} cannot represent {what} in a quoted argument")]
    Unrepresentable { dialect: Dialect, what: &'static str },
}

/// Quoting rule sets, one per shell family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// bash, sh, dash, zsh, busybox, ksh
    Posix,
    /// csh, tcsh
    Csh,
    Fish,
    /// Windows PowerShell and pwsh
    PowerShell,
    /// Windows command interpreter
    Cmd,
}

vr_core::simple_display! {
    Dialect {
        Posix => "posix",
        Csh => "csh",
        Fish => "fish",
        PowerShell => "powershell",
        Cmd => "cmd",
    }
}

impl Dialect {
    /// Map a dialect or shell name to its rule set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bash" | "sh" | "dash" | "zsh" | "busybox" | "ksh" | "posix" => Some(Dialect::Posix),
            "csh" | "tcsh" => Some(Dialect::Csh),
            "fish" => Some(Dialect::Fish),
            "powershell" | "pwsh" => Some(Dialect::PowerShell),
            "cmd" => Some(Dialect::Cmd),
            _ => None,
        }
    }
}

/// Whether `value` can be passed through without quoting.
///
/// PowerShell always quotes: `,` builds arrays, `@` splats and a leading
/// `-` binds a parameter. cmd expands `%` and splits on `,` and `=`. A
/// leading `=` is a command path lookup in zsh and a directory stack
/// reference in tcsh.
fn is_plain(value: &str, dialect: Dialect) -> bool {
    if value.starts_with('=') {
        return false;
    }
    let extra: &[char] = match dialect {
        Dialect::PowerShell => return false,
        Dialect::Cmd => &['_', '-', '.', '/', ':', '@', '+', '\\'],
        _ => &['_', '-', '.', ',', '/', ':', '=', '@', '%', '+'],
    };
    value.chars().all(|c| c.is_ascii_alphanumeric() || extra.contains(&c))
}

/// Escapes values for a single dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaper {
    dialect: Dialect,
}

impl Escaper {
    /// Build an escaper for a dialect name such as `bash` or `powershell`.
    pub fn new(name: &str) -> Result<Self, EscapeError> {
        Dialect::from_name(name)
            .map(Self::for_dialect)
            .ok_or_else(|| EscapeError::UnsupportedDialect(name.to_string()))
    }

    pub fn for_dialect(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// Like [`Escaper::new`], but falls back to the POSIX rules.
    ///
    /// Construction failures must never abort startup, so they are only
    /// logged.
    pub fn for_dialect_or_default(name: &str) -> Self {
        match Self::new(name) {
            Ok(escaper) => escaper,
            Err(e) => {
                tracing::warn!(dialect = name, error = %e, "falling back to bash escaping");
                Self::for_dialect(Dialect::Posix)
            }
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Quote `value` so the shell reads it as one literal word.
    pub fn escape(&self, value: &str) -> Result<String, EscapeError> {
        if value.contains('\0') {
            return Err(EscapeError::Unrepresentable { dialect: self.dialect, what: "NUL bytes" });
        }
        if value.is_empty() {
            return Ok(match self.dialect {
                Dialect::Cmd => "\"\"".to_string(),
                _ => "''".to_string(),
            });
        }
        if is_plain(value, self.dialect) {
            return Ok(value.to_string());
        }
        match self.dialect {
            Dialect::Posix => Ok(format!("'{}'", value.replace('\'', "'\\''"))),
            Dialect::Csh => {
                let mut out = String::with_capacity(value.len() + 2);
                out.push('\'');
                for c in value.chars() {
                    match c {
                        '\'' => out.push_str("'\\''"),
                        '!' => out.push_str("\\!"),
                        '\n' => out.push_str("\\\n"),
                        _ => out.push(c),
                    }
                }
                out.push('\'');
                Ok(out)
            }
            Dialect::Fish => {
                Ok(format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'")))
            }
            Dialect::PowerShell => {
                let mut out = String::with_capacity(value.len() + 2);
                out.push('\'');
                for c in value.chars() {
                    // PowerShell treats typographic single quotes as quote delimiters too
                    if matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{201B}') {
                        out.push(c);
                    }
                    out.push(c);
                }
                out.push('\'');
                Ok(out)
            }
            Dialect::Cmd => {
                if value.contains(['\r', '\n']) {
                    return Err(EscapeError::Unrepresentable {
                        dialect: self.dialect,
                        what: "line breaks",
                    });
                }
                Ok(format!("\"{}\"", value.replace('"', "\"\"")))
            }
        }
    }
}

/// Weaker quoting used only when the dialect escaper rejects a value.
///
/// Leaves `[A-Za-z0-9-./]` strings untouched and otherwise wraps in double
/// quotes with inner double quotes backslash-escaped.
pub fn fallback_escape(value: &str) -> String {
    if value.is_empty() {
        return "\"\"".to_string();
    }
    if value.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '/')) {
        return value.to_string();
    }
    format!("\"{}\"", value.replace('"', "\\\""))
}

#[cfg(test)]
#[path = "escape_tests.rs"]
mod tests;
