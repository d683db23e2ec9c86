// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::color;
use clap::ValueEnum;
use serde::Serialize;
use vr_core::{CommandExecutionResult, CommandScript, DefaultAction};

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Short flag summary for a script row, e.g. `bg,prompts`
pub fn script_flags(script: &CommandScript) -> String {
    let mut flags = Vec::new();
    if !script.enabled {
        flags.push("disabled");
    }
    if script.background {
        flags.push("bg");
    }
    if script.requires_prompts() {
        flags.push("prompts");
    }
    if script.working_directory.is_some() {
        flags.push("cwd");
    }
    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(",")
    }
}

/// Name and flag column widths, never narrower than their headers
fn column_widths(scripts: &[CommandScript]) -> (usize, usize) {
    let name_w = scripts.iter().map(|s| s.name.chars().count()).max().unwrap_or(0).max(4);
    let flags_w = scripts.iter().map(|s| script_flags(s).len()).max().unwrap_or(0).max(5);
    (name_w, flags_w)
}

/// Render the script table as plain rows (no color), one line per script.
pub fn script_table(scripts: &[CommandScript]) -> Vec<String> {
    let (name_w, flags_w) = column_widths(scripts);
    scripts
        .iter()
        .map(|s| (s, script_flags(s)))
        .map(|(s, f)| {
            format!(
                "{:<name_w$}  {:<7}  {:<flags_w$}  {}",
                s.name,
                s.default_action.to_string(),
                f,
                s.template,
                name_w = name_w,
                flags_w = flags_w,
            )
        })
        .collect()
}

pub fn print_scripts(scripts: &[CommandScript], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(scripts)?);
        }
        OutputFormat::Text => {
            if scripts.is_empty() {
                println!("No scripts configured");
                return Ok(());
            }
            let (name_w, flags_w) = column_widths(scripts);
            println!(
                "{}  {}  {}  {}",
                color::header(&format!("{:<name_w$}", "NAME")),
                color::header(&format!("{:<7}", "ACTION")),
                color::header(&format!("{:<flags_w$}", "FLAGS")),
                color::header("TEMPLATE"),
            );
            for (script, row) in scripts.iter().zip(script_table(scripts)) {
                if script.enabled {
                    println!("{row}");
                } else {
                    println!("{}", color::muted(&row));
                }
                if let Some(description) = &script.description {
                    println!("  {}", color::context(description));
                }
            }
        }
    }
    Ok(())
}

/// Machine-readable form of a run result
#[derive(Debug, Serialize)]
pub struct ResultReport<'a> {
    pub success: bool,
    pub exit_code: i32,
    pub command: &'a str,
    pub output: &'a str,
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<DefaultAction>,
}

impl<'a> ResultReport<'a> {
    pub fn new(result: &'a CommandExecutionResult, action: Option<DefaultAction>) -> Self {
        Self {
            success: result.success,
            exit_code: result.exit_code,
            command: &result.command,
            output: &result.output,
            error: &result.error,
            action,
        }
    }
}

/// Text lines describing a failed run, for stderr
pub fn failure_summary(result: &CommandExecutionResult) -> String {
    let mut summary = if result.exit_code == vr_core::NO_EXIT_CODE {
        "command did not complete".to_string()
    } else {
        format!("command exited with code {}", result.exit_code)
    };
    let error = result.error.trim_end();
    if !error.is_empty() && !error.contains(&summary) {
        summary.push_str(": ");
        summary.push_str(error);
    }
    summary
}
