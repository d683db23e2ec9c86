// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr: run templated shell commands against a notes vault

mod args;
mod color;
mod commands;
mod env;
mod exit_error;
mod fs_host;
mod logging;
mod output;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use vr_core::ScriptStore;

use crate::commands::{config, run, script};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "vr", version = env::VERSION, styles = color::styles())]
#[command(about = "Run templated shell commands against a notes vault")]
struct Cli {
    /// Settings file (defaults to VR_CONFIG, then the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", global = true, value_enum, default_value_t)]
    output: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List configured scripts
    List,
    /// Add a script
    Add(script::AddArgs),
    /// Remove a script
    Remove {
        /// Script name or id
        script: String,
    },
    /// Enable a disabled script
    Enable {
        /// Script name or id
        script: String,
    },
    /// Disable a script without removing it
    Disable {
        /// Script name or id
        script: String,
    },
    /// Run a script
    Run(run::RunArgs),
    /// Print the command a script would run, without running it
    Preview(run::PreviewArgs),
    /// Show the resolved shell
    Shell,
    /// View or change global settings
    Config(config::ConfigArgs),
}

async fn dispatch(cli: Cli) -> Result<()> {
    let path = cli.config.unwrap_or_else(env::config_path);
    let store = Arc::new(ScriptStore::load(path)?);
    let format = cli.output;

    match cli.command {
        Command::List => script::handle_list(&store, format),
        Command::Add(args) => script::handle_add(&store, args, format),
        Command::Remove { script: key } => script::handle_remove(&store, &key),
        Command::Enable { script: key } => script::handle_set_enabled(&store, &key, true),
        Command::Disable { script: key } => script::handle_set_enabled(&store, &key, false),
        Command::Run(args) => run::handle_run(store, args, format).await,
        Command::Preview(args) => run::handle_preview(store, args, format).await,
        Command::Shell => config::handle_shell(&store, format),
        Command::Config(args) => config::handle_config(&store, args, format),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = dispatch(cli).await {
        let code = match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                if !exit.message.is_empty() {
                    eprintln!("vr: {}", exit.message);
                }
                exit.code
            }
            None => {
                eprintln!("vr: {err:#}");
                1
            }
        };
        std::process::exit(code);
    }
}
