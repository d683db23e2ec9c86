// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell selection: auto-detection, name lookup, login flags, dialect.
//!
//! Every function here is a pure function of a [`ShellEnv`] snapshot and
//! never fails; each branch ends in a concrete fallback.

use vr_core::{Platform, Settings, AUTO_SHELL};

/// Used when `$SHELL` is unset or not on the auto-detect allow-list
pub const UNIX_FALLBACK_SHELL: &str = "/bin/bash";

/// Used when `%COMSPEC%` is unset
pub const WINDOWS_FALLBACK_SHELL: &str = r"C:\Windows\System32\cmd.exe";

/// Login shells accepted by auto-detection on Unix
const AUTO_DETECT_ALLOWED: [&str; 5] = ["bash", "zsh", "busybox", "csh", "dash"];

const UNIX_SHELLS: &[(&str, &str)] = &[
    ("bash", "/bin/bash"),
    ("sh", "/bin/sh"),
    ("zsh", "/bin/zsh"),
    ("dash", "/bin/dash"),
    ("csh", "/bin/csh"),
    ("tcsh", "/bin/tcsh"),
    ("ksh", "/bin/ksh"),
    ("fish", "/usr/bin/fish"),
    ("busybox", "/bin/busybox"),
    ("pwsh", "/usr/bin/pwsh"),
];

const WINDOWS_SHELLS: &[(&str, &str)] = &[
    ("cmd", "cmd.exe"),
    ("powershell", "powershell.exe"),
    ("pwsh", "pwsh.exe"),
    ("bash", r"C:\Program Files\Git\bin\bash.exe"),
];

/// The parts of the process environment that shell selection reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellEnv {
    pub platform: Platform,
    /// `$SHELL`
    pub shell: Option<String>,
    /// `%COMSPEC%`
    pub comspec: Option<String>,
}

impl ShellEnv {
    pub fn from_process() -> Self {
        Self {
            platform: Platform::current(),
            shell: std::env::var("SHELL").ok().filter(|s| !s.is_empty()),
            comspec: std::env::var("COMSPEC").ok().filter(|s| !s.is_empty()),
        }
    }

    pub fn unix(shell: Option<&str>) -> Self {
        Self { platform: Platform::Unix, shell: shell.map(str::to_string), comspec: None }
    }

    pub fn windows(comspec: Option<&str>) -> Self {
        Self { platform: Platform::Windows, shell: None, comspec: comspec.map(str::to_string) }
    }
}

/// How a shell expects to be handed a command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFamily {
    /// `-c <command>`
    Posix,
    /// `/d /s /c <command>`
    Cmd,
    /// `-Command <command>`
    PowerShell,
}

/// Lower-cased file name of a shell path without any `.exe` suffix.
///
/// Accepts both `/` and `\` separators regardless of the host platform.
pub fn shell_basename(shell: &str) -> String {
    let name = shell.rsplit(['/', '\\']).next().unwrap_or(shell).to_ascii_lowercase();
    match name.strip_suffix(".exe") {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

pub fn shell_family(shell: &str) -> ShellFamily {
    match shell_basename(shell).as_str() {
        "cmd" => ShellFamily::Cmd,
        "powershell" | "pwsh" => ShellFamily::PowerShell,
        _ => ShellFamily::Posix,
    }
}

/// The shell to use when configuration says `"auto"`.
pub fn detect_default_shell(env: &ShellEnv) -> String {
    match env.platform {
        Platform::Windows => {
            env.comspec.clone().unwrap_or_else(|| WINDOWS_FALLBACK_SHELL.to_string())
        }
        Platform::Unix => match &env.shell {
            Some(shell) if AUTO_DETECT_ALLOWED.contains(&shell_basename(shell).as_str()) => {
                shell.clone()
            }
            Some(shell) => {
                tracing::debug!(%shell, "login shell not supported for auto-detection");
                UNIX_FALLBACK_SHELL.to_string()
            }
            None => UNIX_FALLBACK_SHELL.to_string(),
        },
    }
}

fn is_auto(config: &str) -> bool {
    let config = config.trim();
    config.is_empty() || config.eq_ignore_ascii_case(AUTO_SHELL)
}

/// Map the configured shell name to an executable path.
pub fn resolve_shell(config: &str, env: &ShellEnv) -> String {
    if is_auto(config) {
        return detect_default_shell(env);
    }
    let name = config.trim().to_ascii_lowercase();
    let (table, default) = match env.platform {
        Platform::Windows => (WINDOWS_SHELLS, "cmd.exe"),
        Platform::Unix => (UNIX_SHELLS, UNIX_FALLBACK_SHELL),
    };
    match table.iter().find(|(key, _)| *key == name) {
        Some((_, path)) => path.to_string(),
        None => {
            tracing::debug!(shell = %name, fallback = default, "unrecognized shell name");
            default.to_string()
        }
    }
}

/// Argv prefix for invoking `shell`, with the login flag when requested.
///
/// Windows shells have no login mode. Every Unix shell family accepts `-l`.
pub fn login_invocation(shell: &str, use_login: bool, platform: Platform) -> Vec<String> {
    let mut argv = vec![shell.to_string()];
    if use_login && !platform.is_windows() {
        argv.push("-l".to_string());
    }
    argv
}

/// Escaping dialect name for the configured shell.
///
/// Auto-detection maps the detected shell's name and only falls back to the
/// platform default when that name has no dialect. An unrecognized explicit
/// name resolves to the fallback program, so it gets that program's dialect.
pub fn shell_dialect_name(config: &str, env: &ShellEnv) -> String {
    let fallback = match env.platform {
        Platform::Windows => "powershell",
        Platform::Unix => "bash",
    };
    let name = if is_auto(config) {
        shell_basename(&detect_default_shell(env))
    } else {
        config.trim().to_ascii_lowercase()
    };
    if crate::Dialect::from_name(&name).is_some() {
        return name;
    }
    if is_auto(config) {
        tracing::debug!(shell = %name, dialect = fallback, "no dialect for detected shell");
        return fallback.to_string();
    }
    match env.platform {
        Platform::Windows => "cmd".to_string(),
        Platform::Unix => "bash".to_string(),
    }
}

/// Everything the execution engine needs to know about the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedShell {
    pub program: String,
    /// Login flags that follow the program (empty when not a login shell)
    pub login_args: Vec<String>,
    pub dialect: String,
    pub platform: Platform,
}

impl ResolvedShell {
    pub fn resolve(settings: &Settings, env: &ShellEnv) -> Self {
        let program = resolve_shell(&settings.shell, env);
        let mut argv = login_invocation(&program, settings.use_login_shell, env.platform);
        let login_args = argv.split_off(1);
        let dialect = shell_dialect_name(&settings.shell, env);
        tracing::debug!(
            shell = %program,
            login = ?login_args,
            %dialect,
            platform = %env.platform,
            "resolved shell"
        );
        Self { program, login_args, dialect, platform: env.platform }
    }

    /// Whether the login-flag argv (`shell -l -c cmd`) must be used
    pub fn is_login(&self) -> bool {
        !self.login_args.is_empty()
    }

    pub fn family(&self) -> ShellFamily {
        shell_family(&self.program)
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
