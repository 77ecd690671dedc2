// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv: Terminal viewer for UI-test flow logs

mod color;
mod commands;
mod env;
mod exit_error;
mod find;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fv",
    version,
    long_version = env::LONG_VERSION,
    about = "Inspect UI-test flow logs with their sub-flows rebuilt",
    styles = color::styles(),
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one flow log as a nested step tree
    Show(commands::show::ShowArgs),
    /// Summarize every flow log under a directory
    List(commands::list::ListArgs),
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        if let Some(exit) = e.downcast_ref::<ExitError>() {
            if !exit.message.is_empty() {
                eprintln!("fv: {}", exit.message);
            }
            std::process::exit(exit.code);
        }
        eprintln!("fv: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Show(args) => commands::show::handle(args, cli.output),
        Commands::List(args) => commands::list::handle(args, cli.output),
    }
}

/// Log to stderr so stdout stays parseable with `--output json`.
fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter())
        .unwrap_or_else(|_| EnvFilter::new(env::DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
