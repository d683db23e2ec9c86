// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr list|add|remove|enable|disable`: script management

use anyhow::Result;
use clap::Args;
use vr_core::{CommandScript, DefaultAction, PromptSpec, ScriptStore};

use crate::args::parse_key_value;
use crate::color;
use crate::output::{print_scripts, OutputFormat};

#[derive(Args)]
pub struct AddArgs {
    /// Script name (unique, case-insensitive)
    pub name: String,
    /// Command template with `{placeholder}` tokens
    pub template: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Working directory, relative to the base directory unless --absolute
    #[arg(long = "cwd", value_name = "DIR")]
    pub working_directory: Option<String>,
    /// Treat --cwd as an absolute path
    #[arg(long, requires = "working_directory")]
    pub absolute: bool,
    /// Spawn detached and do not capture output
    #[arg(long)]
    pub background: bool,
    /// Prompt to ask before running (can be repeated: --prompt key=Label)
    #[arg(long = "prompt", value_parser = parse_key_value)]
    pub prompts: Vec<(String, String)>,
    /// What to do with output after a successful run
    #[arg(long, default_value = "none", value_parser = parse_action)]
    pub action: DefaultAction,
}

fn parse_action(s: &str) -> Result<DefaultAction, String> {
    s.parse().map_err(|e: vr_core::ScriptError| e.to_string())
}

impl AddArgs {
    fn into_script(self) -> CommandScript {
        let mut script = CommandScript::new(self.name, self.template)
            .use_absolute_path(self.absolute)
            .background(self.background)
            .default_action(self.action)
            .prompts(self.prompts.into_iter().map(|(k, label)| PromptSpec::new(k, label)).collect());
        script.description = self.description;
        script.working_directory = self.working_directory;
        script
    }
}

pub fn handle_list(store: &ScriptStore, format: OutputFormat) -> Result<()> {
    print_scripts(&store.snapshot().scripts, format)
}

pub fn handle_add(store: &ScriptStore, args: AddArgs, format: OutputFormat) -> Result<()> {
    let script = args.into_script();
    let name = script.name.clone();
    let id = store.add_script(script)?;
    match format {
        OutputFormat::Text => println!("Added '{}' ({})", color::header(&name), color::muted(id.as_str())),
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "id": id.as_str(), "name": name }));
        }
    }
    Ok(())
}

pub fn handle_remove(store: &ScriptStore, key: &str) -> Result<()> {
    let removed = store.remove_script(key)?;
    println!("Removed '{}'", color::header(&removed.name));
    Ok(())
}

pub fn handle_set_enabled(store: &ScriptStore, key: &str, enabled: bool) -> Result<()> {
    let script = store.set_enabled(key, enabled)?;
    let state = if enabled { "enabled" } else { "disabled" };
    println!("'{}' {}", color::header(&script.name), state);
    Ok(())
}

#[cfg(test)]
#[path = "script_tests.rs"]
mod tests;
