// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr run` and `vr preview`: invoke a script against a vault on disk

use anyhow::{anyhow, Result};
use clap::Args;
use indexmap::IndexMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use vr_adapters::{SystemClipboard, SystemNotifier};
use vr_core::{Cursor, ScriptStore};
use vr_engine::{Controller, HostDeps, InvokeOutcome};
use vr_shell::ShellEnv;

use crate::args::{parse_key_value, parse_position, parse_selection, Selection};
use crate::exit_error::ExitError;
use crate::fs_host::FsHost;
use crate::output::{OutputFormat, ResultReport};
use crate::terminal::{StdinPrompt, TerminalPresenter};

/// Where the script runs: vault, open note, editor state and prompt answers
#[derive(Args, Clone, Debug)]
pub struct HostArgs {
    /// Vault root directory
    #[arg(long, default_value = ".")]
    pub vault: PathBuf,
    /// Note open in the editor, relative to the vault
    #[arg(long)]
    pub note: Option<PathBuf>,
    /// Selected range in the note, one-based
    #[arg(long = "select", value_name = "L:C-L:C", value_parser = parse_selection, requires = "note")]
    pub selection: Option<Selection>,
    /// Cursor position in the note, one-based (defaults to the selection end)
    #[arg(long, value_name = "L:C", value_parser = parse_position, requires = "note")]
    pub cursor: Option<Cursor>,
    /// Prompt answer (can be repeated: --prompt key=value)
    #[arg(long = "prompt", value_parser = parse_key_value)]
    pub prompts: Vec<(String, String)>,
}

impl HostArgs {
    fn open(&self) -> Result<FsHost> {
        Ok(FsHost::open(&self.vault, self.note.as_deref(), self.selection, self.cursor)?)
    }

    fn supplied(&self) -> IndexMap<String, String> {
        self.prompts.iter().cloned().collect()
    }
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script name or id
    pub script: String,
    #[command(flatten)]
    pub host: HostArgs,
    /// Show notices on the desktop instead of stderr
    #[arg(long)]
    pub desktop: bool,
    /// Foreground timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Script name or id
    pub script: String,
    #[command(flatten)]
    pub host: HostArgs,
}

type CliController =
    Controller<FsHost, SystemNotifier, SystemClipboard, StdinPrompt, TerminalPresenter>;

fn controller(
    store: Arc<ScriptStore>,
    host: FsHost,
    format: OutputFormat,
    desktop: bool,
) -> CliController {
    Controller::new(
        store,
        ShellEnv::from_process(),
        HostDeps {
            host,
            notifier: SystemNotifier::new(desktop),
            clipboard: SystemClipboard::new(),
            prompt: StdinPrompt,
            presenter: TerminalPresenter::new(format),
        },
    )
}

pub async fn handle_run(store: Arc<ScriptStore>, args: RunArgs, format: OutputFormat) -> Result<()> {
    let host = args.host.open()?;
    let mut controller = controller(store, host, format, args.desktop);
    if let Some(secs) = args.timeout {
        controller = controller.with_timeout(Duration::from_secs(secs));
    }

    match controller.invoke(&args.script, args.host.supplied()).await? {
        InvokeOutcome::Disabled => {
            Err(ExitError::new(1, format!("script '{}' is disabled", args.script)).into())
        }
        InvokeOutcome::Cancelled => Err(ExitError::new(1, "cancelled").into()),
        InvokeOutcome::Background { command } => {
            tracing::info!(%command, "started in background");
            if format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "background": true, "command": command }));
            }
            Ok(())
        }
        InvokeOutcome::Completed { result, dispatch } => {
            // The presenter is skipped when an action consumed the output
            if dispatch.is_some() && format == OutputFormat::Json {
                let action = controller.store().find(&args.script).map(|s| s.default_action);
                println!("{}", serde_json::to_string_pretty(&ResultReport::new(&result, action))?);
            }
            if result.success {
                Ok(())
            } else {
                Err(ExitError::from_run(result.exit_code, "").into())
            }
        }
    }
}

pub async fn handle_preview(
    store: Arc<ScriptStore>,
    args: PreviewArgs,
    format: OutputFormat,
) -> Result<()> {
    let script = store
        .find(&args.script)
        .ok_or_else(|| anyhow!("no script matches `{}`", args.script))?;
    let host = args.host.open()?;
    let controller = controller(store, host, format, false);

    let ctx = controller.collect_context().await.with_prompts(args.host.supplied());
    let command = controller.preview(&script, &ctx);
    match format {
        OutputFormat::Text => println!("{command}"),
        OutputFormat::Json => {
            let shell = controller.shell();
            let obj = serde_json::json!({
                "script": script.name,
                "command": command,
                "shell": shell.program,
                "dialect": shell.dialect,
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}
