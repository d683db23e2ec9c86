// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution: foreground capture and detached background runs

use crate::workdir::resolve_working_dir;
use std::time::Duration;
use tokio::process::Command;
use vr_adapters::subprocess::{run_bounded, spawn_detached, SubprocessError, FOREGROUND_TIMEOUT};
use vr_adapters::NotifyAdapter;
use vr_core::{CommandExecutionResult, CommandScript, ParameterContext, Settings, NO_EXIT_CODE};
use vr_shell::{ResolvedShell, ShellFamily};

/// Characters of output shown in completion notices
pub const NOTICE_PREVIEW_CHARS: usize = 100;

/// Program and arguments for one shell invocation.
///
/// When `verbatim` is set the last argument is handed to the process
/// unquoted on Windows, where cmd.exe parses its own command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub verbatim: bool,
}

impl Invocation {
    /// Argv for a captured run.
    ///
    /// A login shell is invoked directly as `shell -l -c cmd` so the login
    /// flag takes effect. Otherwise the command goes through the shell the
    /// way the platform's shell-interpreting exec does.
    pub fn foreground(shell: &ResolvedShell, command: &str) -> Self {
        if shell.is_login() {
            let mut args = shell.login_args.clone();
            args.extend(["-c".to_string(), command.to_string()]);
            return Self { program: shell.program.clone(), args, verbatim: false };
        }
        let (args, verbatim) = match shell.family() {
            ShellFamily::Posix => (vec!["-c".to_string(), command.to_string()], false),
            ShellFamily::Cmd => (
                vec!["/d".to_string(), "/s".to_string(), "/c".to_string(), format!("\"{command}\"")],
                true,
            ),
            ShellFamily::PowerShell => (vec!["-Command".to_string(), command.to_string()], false),
        };
        Self { program: shell.program.clone(), args, verbatim }
    }

    /// Argv for a detached run.
    pub fn background(shell: &ResolvedShell, command: &str) -> Self {
        let (args, verbatim) = match shell.family() {
            ShellFamily::PowerShell => (vec!["-Command".to_string(), command.to_string()], false),
            ShellFamily::Cmd => (vec!["/c".to_string(), command.to_string()], true),
            ShellFamily::Posix => {
                let mut args = shell.login_args.clone();
                args.extend(["-c".to_string(), command.to_string()]);
                (args, false)
            }
        };
        Self { program: shell.program.clone(), args, verbatim }
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        match self.args.split_last() {
            Some((last, init)) if self.verbatim => {
                cmd.args(init);
                #[cfg(windows)]
                cmd.raw_arg(last);
                #[cfg(not(windows))]
                cmd.arg(last);
            }
            _ => {
                cmd.args(&self.args);
            }
        }
        cmd
    }
}

/// Runs literal commands and turns every outcome into a value.
#[derive(Clone)]
pub struct Executor<N> {
    notifier: N,
    timeout: Duration,
}

impl<N: NotifyAdapter> Executor<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier, timeout: FOREGROUND_TIMEOUT }
    }

    /// Override the foreground timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    async fn notice(&self, settings: &Settings, title: &str, message: &str) {
        if !settings.show_notifications {
            return;
        }
        if let Err(e) = self.notifier.notify(title, message).await {
            tracing::debug!(error = %e, "notice not delivered");
        }
    }

    /// Run `command` in the foreground and capture the outcome.
    ///
    /// Never fails: launch errors, non-zero exits, timeouts and output
    /// overflow all come back as a result with `success == false`.
    pub async fn run(
        &self,
        shell: &ResolvedShell,
        settings: &Settings,
        script: &CommandScript,
        command: &str,
        ctx: &ParameterContext,
    ) -> CommandExecutionResult {
        let cwd = resolve_working_dir(script, settings, ctx);
        let invocation = Invocation::foreground(shell, command);
        tracing::info!(
            script = %script.name,
            shell = %invocation.program,
            cwd = %cwd.display(),
            %command,
            "running command"
        );
        self.notice(settings, "Running", &script.name).await;

        let mut cmd = invocation.to_command();
        cmd.current_dir(&cwd);
        let captured = run_bounded(cmd, self.timeout, settings.max_output_length, &script.name).await;

        let result = match captured {
            Ok(out) if out.status.success() => CommandExecutionResult::succeeded(
                command,
                &script.template,
                ctx.clone(),
                out.stdout,
                out.stderr,
            ),
            Ok(out) => {
                let code = out.code().unwrap_or(NO_EXIT_CODE);
                let error = if out.stderr.trim().is_empty() {
                    format!("command exited with code {code}")
                } else {
                    out.stderr
                };
                CommandExecutionResult::failed(
                    command,
                    &script.template,
                    ctx.clone(),
                    code,
                    out.stdout,
                    error,
                )
            }
            Err(e) => failure_from_error(&e, command, &script.template, ctx),
        };

        if result.success {
            tracing::info!(script = %script.name, bytes = result.output.len(), "command succeeded");
            let title = format!("{} finished", script.name);
            self.notice(settings, &title, &result.preview(NOTICE_PREVIEW_CHARS)).await;
        } else {
            tracing::warn!(
                script = %script.name,
                exit_code = result.exit_code,
                error = %result.error,
                "command failed"
            );
            let title = format!("{} failed", script.name);
            self.notice(settings, &title, &result.preview(NOTICE_PREVIEW_CHARS)).await;
        }
        result
    }

    /// Start `command` detached and return as soon as it is spawned.
    ///
    /// Produces no result. A launch failure is reported only as a notice,
    /// which is shown even when notices are turned off.
    pub async fn run_detached(
        &self,
        shell: &ResolvedShell,
        settings: &Settings,
        script: &CommandScript,
        command: &str,
        ctx: &ParameterContext,
    ) {
        let cwd = resolve_working_dir(script, settings, ctx);
        let invocation = Invocation::background(shell, command);
        let mut cmd = invocation.to_command();
        cmd.current_dir(&cwd);

        match spawn_detached(cmd, &script.name) {
            Ok(pid) => {
                tracing::info!(
                    script = %script.name,
                    pid,
                    cwd = %cwd.display(),
                    %command,
                    "started background command"
                );
                self.notice(settings, "Started in background", &script.name).await;
            }
            Err(e) => {
                tracing::error!(script = %script.name, error = %e, "background launch failed");
                let title = format!("{} failed to start", script.name);
                if let Err(e) = self.notifier.notify(&title, &e.to_string()).await {
                    tracing::debug!(error = %e, "notice not delivered");
                }
            }
        }
    }
}

fn failure_from_error(
    e: &SubprocessError,
    command: &str,
    template: &str,
    ctx: &ParameterContext,
) -> CommandExecutionResult {
    let partial = e.partial().cloned().unwrap_or_default();
    let error = if partial.stderr.trim().is_empty() {
        e.to_string()
    } else {
        format!("{}\n{e}", partial.stderr.trim_end())
    };
    CommandExecutionResult::failed(command, template, ctx.clone(), NO_EXIT_CODE, partial.stdout, error)
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
