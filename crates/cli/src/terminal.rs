// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal-side prompt form and result presenter

use crate::output::{failure_summary, OutputFormat, ResultReport};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use vr_adapters::{PromptAdapter, PromptError, PromptOutcome, ResultPresenter};
use vr_core::{CommandExecutionResult, PromptSpec};

/// Ask for each prompt on `out` and read one line per answer from `input`.
///
/// End of input before every prompt is answered cancels the form. Line
/// terminators are stripped; everything else is kept verbatim.
pub async fn read_answers<R, W>(
    input: &mut R,
    out: &mut W,
    script_name: &str,
    prompts: &[PromptSpec],
) -> Result<PromptOutcome, PromptError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "{script_name}")?;
    let mut answers = IndexMap::new();
    for prompt in prompts {
        write!(out, "  {}: ", prompt.label)?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line).await? == 0 {
            return Ok(PromptOutcome::Cancelled);
        }
        let answer = line.strip_suffix('\n').unwrap_or(&line);
        let answer = answer.strip_suffix('\r').unwrap_or(answer);
        answers.insert(prompt.keyword.clone(), answer.to_string());
    }
    Ok(PromptOutcome::Submitted(answers))
}

/// Prompts on stderr and reads answers from stdin.
#[derive(Clone, Default)]
pub struct StdinPrompt;

#[async_trait]
impl PromptAdapter for StdinPrompt {
    async fn collect(
        &self,
        script_name: &str,
        prompts: &[PromptSpec],
    ) -> Result<PromptOutcome, PromptError> {
        let mut stdin = BufReader::new(tokio::io::stdin());
        read_answers(&mut stdin, &mut std::io::stderr(), script_name, prompts).await
    }
}

/// Writes results nobody else consumed: output to stdout, problems to stderr.
#[derive(Clone, Copy)]
pub struct TerminalPresenter {
    format: OutputFormat,
}

impl TerminalPresenter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Text written to (stdout, stderr) for `result`
    pub fn render(&self, result: &CommandExecutionResult) -> (String, String) {
        match self.format {
            OutputFormat::Json => {
                let report = ResultReport::new(result, None);
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => (format!("{json}\n"), String::new()),
                    Err(e) => (String::new(), format!("vr: failed to encode result: {e}\n")),
                }
            }
            OutputFormat::Text if result.success => {
                (result.output.clone(), result.error.clone())
            }
            OutputFormat::Text => {
                (result.output.clone(), format!("vr: {}\n", failure_summary(result)))
            }
        }
    }
}

#[async_trait]
impl ResultPresenter for TerminalPresenter {
    async fn present(&self, result: &CommandExecutionResult) {
        let (stdout, stderr) = self.render(result);
        print!("{stdout}");
        eprint!("{stderr}");
        if let Err(e) = std::io::stdout().flush() {
            tracing::debug!(error = %e, "stdout flush failed");
        }
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
