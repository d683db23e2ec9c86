// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr config` and `vr shell`: global settings

use anyhow::{bail, Result};
use clap::Args;
use std::path::PathBuf;
use vr_core::{ScriptStore, Settings};
use vr_shell::{ResolvedShell, ShellEnv};

use crate::color;
use crate::output::OutputFormat;

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Shell name or path, or `auto`
    #[arg(long)]
    pub shell: Option<String>,
    /// Run foreground commands through a login shell
    #[arg(long, value_name = "BOOL")]
    pub login: Option<bool>,
    /// Show progress notices
    #[arg(long, value_name = "BOOL")]
    pub notifications: Option<bool>,
    /// Per-stream output bound in bytes
    #[arg(long, value_name = "BYTES")]
    pub max_output: Option<usize>,
    /// Base working directory for scripts
    #[arg(long = "cwd", value_name = "DIR", conflicts_with = "clear_cwd")]
    pub working_directory: Option<PathBuf>,
    /// Use the vault root as the base working directory again
    #[arg(long)]
    pub clear_cwd: bool,
}

impl ConfigArgs {
    fn is_empty(&self) -> bool {
        self.shell.is_none()
            && self.login.is_none()
            && self.notifications.is_none()
            && self.max_output.is_none()
            && self.working_directory.is_none()
            && !self.clear_cwd
    }

    /// Apply the requested changes to `settings`
    pub fn apply(self, settings: &mut Settings) {
        if let Some(shell) = self.shell {
            settings.shell = shell;
        }
        if let Some(login) = self.login {
            settings.use_login_shell = login;
        }
        if let Some(notifications) = self.notifications {
            settings.show_notifications = notifications;
        }
        if let Some(max) = self.max_output {
            settings.max_output_length = max;
        }
        if self.clear_cwd {
            settings.default_working_directory = None;
        } else if let Some(dir) = self.working_directory {
            settings.default_working_directory = Some(dir);
        }
    }
}

/// `(label, value)` rows for the settings view
pub fn settings_rows(settings: &Settings) -> Vec<(&'static str, String)> {
    let cwd = settings
        .default_working_directory
        .as_ref()
        .map_or_else(|| "(vault root)".to_string(), |p| p.display().to_string());
    vec![
        ("shell", settings.shell.clone()),
        ("login shell", settings.use_login_shell.to_string()),
        ("notifications", settings.show_notifications.to_string()),
        ("max output", settings.max_output_length.to_string()),
        ("working dir", cwd),
        ("scripts", settings.scripts.len().to_string()),
    ]
}

pub fn handle_config(store: &ScriptStore, args: ConfigArgs, format: OutputFormat) -> Result<()> {
    if args.max_output == Some(0) {
        bail!("--max-output must be at least 1");
    }
    if !args.is_empty() {
        store.update(|settings| {
            args.apply(settings);
            Ok(())
        })?;
    }

    let settings = store.snapshot();
    match format {
        OutputFormat::Text => {
            for (label, value) in settings_rows(&settings) {
                println!("{}  {}", color::header(&format!("{label:<13}")), value);
            }
            if let Some(path) = store.path() {
                let path = path.display().to_string();
                println!("{}  {}", color::header(&format!("{:<13}", "file")), color::muted(&path));
            }
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "shell": settings.shell,
                "use_login_shell": settings.use_login_shell,
                "show_notifications": settings.show_notifications,
                "max_output_length": settings.max_output_length,
                "default_working_directory": settings.default_working_directory,
                "scripts": settings.scripts.len(),
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}

pub fn handle_shell(store: &ScriptStore, format: OutputFormat) -> Result<()> {
    let shell = ResolvedShell::resolve(&store.snapshot(), &ShellEnv::from_process());
    match format {
        OutputFormat::Text => {
            println!("{}  {}", color::header("program"), color::literal(&shell.program));
            if shell.is_login() {
                println!("{}    {}", color::header("login"), shell.login_args.join(" "));
            }
            println!("{}  {}", color::header("dialect"), shell.dialect);
            println!("{}   {:?}", color::header("family"), shell.family());
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "program": shell.program,
                "login_args": shell.login_args,
                "dialect": shell.dialect,
                "platform": shell.platform.to_string(),
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
