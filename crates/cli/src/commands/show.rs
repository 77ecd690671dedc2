// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv show`: one flow log as a nested step tree.

use anyhow::Result;
use clap::Args;
use fv_core::{FlowNode, Status, StatusCounts, TestPathInfo};
use fv_reconcile::{inject_screenshots, Diagnostic, FlowImage};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::color;
use crate::exit_error::ExitError;
use crate::find::collect_flow_images;
use crate::output::{format_or_json, render_tree, summary_line, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Path to a `commands-(<flow>).json` log
    pub file: PathBuf,

    /// Merge screenshots saved next to the log into the timeline
    #[arg(long)]
    pub screenshots: bool,

    /// Also list entries that were skipped or could not be placed, and stack traces of failures
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    flow: &'a str,
    directory: &'a str,
    status: Status,
    counts: StatusCounts,
    commands: &'a [FlowNode],
    #[serde(skip_serializing_if = "Option::is_none")]
    diagnostics: Option<&'a [Diagnostic]>,
}

pub fn handle(args: ShowArgs, format: OutputFormat) -> Result<()> {
    let log = fv_reconcile::load_path(&args.file).map_err(|e| ExitError::input(e.to_string()))?;
    let info = path_info(&args.file);

    let counts = StatusCounts::from_entries(&log.entries);
    let mut result = fv_reconcile::reconcile(&log.entries);
    let mut diagnostics = log.diagnostics;
    diagnostics.append(&mut result.diagnostics);

    let mut nodes = result.nodes;
    if args.screenshots {
        nodes = inject_screenshots(nodes, &screenshots_for(&args.file, &info.flow_name));
    }

    let report = ShowReport {
        flow: &info.flow_name,
        directory: &info.directory,
        status: counts.test_status(),
        counts,
        commands: &nodes,
        diagnostics: args.verbose.then_some(diagnostics.as_slice()),
    };

    format_or_json(format, &report, || {
        println!("{}", summary_line(&info.flow_name, &counts));
        if nodes.is_empty() {
            println!("{}", color::muted("(no commands)"));
        }
        for line in render_tree(&nodes, args.verbose) {
            println!("{line}");
        }
        if args.verbose && !diagnostics.is_empty() {
            println!();
            println!("{}", color::header(&format!("{} diagnostic(s)", diagnostics.len())));
            for diagnostic in &diagnostics {
                println!("  {}", color::context(&diagnostic.to_string()));
            }
        }
    })
}

/// Flow name and directory from the log path, falling back to the file stem
/// for logs that do not follow the `commands-(<flow>).json` naming.
fn path_info(file: &Path) -> TestPathInfo {
    let info = TestPathInfo::from_path(&file.to_string_lossy());
    if !info.flow_name.is_empty() {
        return info;
    }
    TestPathInfo {
        flow_name: file.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default(),
        directory: file.parent().map(|p| p.to_string_lossy().into_owned()).unwrap_or_default(),
    }
}

fn screenshots_for(file: &Path, flow_name: &str) -> Vec<FlowImage> {
    let dir = match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match collect_flow_images(dir, flow_name) {
        Ok(images) => images,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "skipping screenshots");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
