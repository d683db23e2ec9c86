// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Child process plumbing: bounded capture with a hard timeout, and
//! fire-and-forget detached spawns.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};

/// Hard limit on a foreground command
pub const FOREGROUND_TIMEOUT: Duration = Duration::from_secs(30);

const READ_CHUNK: usize = 8 * 1024;

/// Output buffered before a run was cut short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Errors from running a child process
#[derive(Debug, Error)]
pub enum SubprocessError {
    #[error("{label}: failed to start: {source}")]
    Spawn { label: String, source: std::io::Error },
    #[error("{label}: timed out after {}s", .after.as_secs())]
    Timeout { label: String, after: Duration, partial: PartialOutput },
    #[error("{label}: output exceeded {limit} bytes")]
    OutputLimit { label: String, limit: usize, partial: PartialOutput },
    #[error("{label}: failed while waiting: {source}")]
    Wait { label: String, source: std::io::Error, partial: PartialOutput },
}

impl SubprocessError {
    /// Whatever was captured before the failure
    pub fn partial(&self) -> Option<&PartialOutput> {
        match self {
            Self::Spawn { .. } => None,
            Self::Timeout { partial, .. }
            | Self::OutputLimit { partial, .. }
            | Self::Wait { partial, .. } => Some(partial),
        }
    }

    /// Whether the child never started
    pub fn is_launch_failure(&self) -> bool {
        matches!(self, Self::Spawn { .. })
    }
}

/// Output of a child that ran to completion.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    /// Exit code, `None` when the child was killed by a signal
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }
}

#[derive(Default)]
struct Buffers {
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl Buffers {
    fn into_partial(self) -> PartialOutput {
        PartialOutput { stdout: lossy_until_cut(&self.stdout), stderr: lossy_until_cut(&self.stderr) }
    }
}

/// Decode output that may have been cut off mid-character, dropping the
/// incomplete trailing sequence instead of replacing it.
fn lossy_until_cut(bytes: &[u8]) -> String {
    let tail_start = bytes.len().saturating_sub(3);
    let last_start = (tail_start..bytes.len()).rev().find(|&i| bytes[i] & 0xC0 != 0x80);
    let end = match last_start {
        Some(i) => match std::str::from_utf8(&bytes[i..]) {
            Err(e) if e.error_len().is_none() => i,
            _ => bytes.len(),
        },
        None => bytes.len(),
    };
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

enum Stop {
    Overflow,
    Wait(std::io::Error),
}

/// Read from a stream that may already be closed; a closed stream never
/// completes so `select!` keeps polling the other one.
async fn read_some<R: AsyncRead + Unpin>(
    stream: &mut Option<R>,
    buf: &mut [u8],
) -> std::io::Result<usize> {
    match stream {
        Some(s) => s.read(buf).await,
        None => std::future::pending().await,
    }
}

/// Append a chunk, keeping at most `limit` bytes. Returns false on overflow.
fn append_bounded(dst: &mut Vec<u8>, chunk: &[u8], limit: usize) -> bool {
    let room = limit.saturating_sub(dst.len());
    if chunk.len() > room {
        dst.extend_from_slice(&chunk[..room]);
        return false;
    }
    dst.extend_from_slice(chunk);
    true
}

/// Kill the child and everything in its process group.
fn kill_tree(child: &mut Child) {
    #[cfg(unix)]
    if let Some(pid) = child.id().and_then(|pid| i32::try_from(pid).ok()) {
        use nix::sys::signal::{killpg, Signal};
        use nix::unistd::Pid;
        if let Err(e) = killpg(Pid::from_raw(pid), Signal::SIGKILL) {
            tracing::debug!(pid, error = %e, "killpg failed");
        }
    }
    if let Err(e) = child.start_kill() {
        tracing::debug!(error = %e, "kill failed");
    }
}

/// Run `cmd` capturing stdout and stderr.
///
/// Each stream is bounded by `max_output` bytes. Exceeding the bound or
/// the `timeout` kills the child (and its process group on Unix) and
/// returns an error carrying whatever was buffered. A non-zero exit is not
/// an error; inspect [`CapturedOutput::status`].
pub async fn run_bounded(
    mut cmd: Command,
    timeout: Duration,
    max_output: usize,
    label: &str,
) -> Result<CapturedOutput, SubprocessError> {
    cmd.stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped()).kill_on_drop(true);
    #[cfg(unix)]
    cmd.process_group(0);

    let mut child = cmd
        .spawn()
        .map_err(|source| SubprocessError::Spawn { label: label.to_string(), source })?;
    tracing::debug!(label, pid = child.id(), "spawned");

    let mut stdout = child.stdout.take();
    let mut stderr = child.stderr.take();
    let mut buffers = Buffers::default();

    let outcome = tokio::time::timeout(timeout, async {
        let mut out_chunk = [0u8; READ_CHUNK];
        let mut err_chunk = [0u8; READ_CHUNK];
        while stdout.is_some() || stderr.is_some() {
            tokio::select! {
                read = read_some(&mut stdout, &mut out_chunk) => match read {
                    Ok(0) | Err(_) => stdout = None,
                    Ok(n) => {
                        if !append_bounded(&mut buffers.stdout, &out_chunk[..n], max_output) {
                            return Err(Stop::Overflow);
                        }
                    }
                },
                read = read_some(&mut stderr, &mut err_chunk) => match read {
                    Ok(0) | Err(_) => stderr = None,
                    Ok(n) => {
                        if !append_bounded(&mut buffers.stderr, &err_chunk[..n], max_output) {
                            return Err(Stop::Overflow);
                        }
                    }
                },
            }
        }
        child.wait().await.map_err(Stop::Wait)
    })
    .await;

    match outcome {
        Ok(Ok(status)) => {
            let partial = buffers.into_partial();
            tracing::debug!(label, ?status, "exited");
            Ok(CapturedOutput { status, stdout: partial.stdout, stderr: partial.stderr })
        }
        Ok(Err(Stop::Overflow)) => {
            tracing::warn!(label, limit = max_output, "output limit exceeded, killing");
            kill_tree(&mut child);
            let _ = child.wait().await;
            Err(SubprocessError::OutputLimit {
                label: label.to_string(),
                limit: max_output,
                partial: buffers.into_partial(),
            })
        }
        Ok(Err(Stop::Wait(source))) => Err(SubprocessError::Wait {
            label: label.to_string(),
            source,
            partial: buffers.into_partial(),
        }),
        Err(_elapsed) => {
            tracing::warn!(label, timeout_secs = timeout.as_secs(), "timed out, killing");
            kill_tree(&mut child);
            let _ = child.wait().await;
            Err(SubprocessError::Timeout {
                label: label.to_string(),
                after: timeout,
                partial: buffers.into_partial(),
            })
        }
    }
}

/// Spawn `cmd` detached from this process and return immediately.
///
/// Standard streams are discarded and the child is never awaited; it runs
/// in its own process group (Unix) or without a console (Windows).
pub fn spawn_detached(mut cmd: Command, label: &str) -> Result<Option<u32>, SubprocessError> {
    cmd.stdin(Stdio::null()).stdout(Stdio::null()).stderr(Stdio::null()).kill_on_drop(false);
    #[cfg(unix)]
    cmd.process_group(0);
    #[cfg(windows)]
    {
        const DETACHED_PROCESS: u32 = 0x0000_0008;
        const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }

    let child = cmd
        .spawn()
        .map_err(|source| SubprocessError::Spawn { label: label.to_string(), source })?;
    let pid = child.id();
    tracing::debug!(label, pid, "spawned detached");
    // Dropping the handle leaves the child running; tokio reaps it.
    drop(child);
    Ok(pid)
}

#[cfg(test)]
#[path = "subprocess_tests.rs"]
mod tests;
