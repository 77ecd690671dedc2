// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv list`: every flow log under a directory with its outcome.

use anyhow::Result;
use clap::Args;
use fv_core::{FlowStatus, Status, StatusCounts, TestPathInfo};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::color;
use crate::exit_error::ExitError;
use crate::find::collect_flow_logs;
use crate::output::{format_or_json, status_glyph, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Directory to search, e.g. `~/.maestro/tests`
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowSummary {
    pub flow: String,
    pub directory: String,
    pub path: PathBuf,
    pub status: Status,
    pub counts: StatusCounts,
}

#[derive(Serialize)]
struct ListReport<'a> {
    status: FlowStatus,
    flows: &'a [FlowSummary],
}

pub fn handle(args: ListArgs, format: OutputFormat) -> Result<()> {
    let logs = collect_flow_logs(&args.dir).map_err(|e| ExitError::input(e.to_string()))?;
    let flows = summarize(&logs);

    if flows.is_empty() {
        eprintln!("No flow logs found in {}", args.dir.display());
        return Ok(());
    }

    let status = FlowStatus::from_tests(flows.iter().map(|f| f.status));
    format_or_json(format, &ListReport { status, flows: &flows }, || {
        let width = flows.iter().map(|f| f.flow.chars().count()).max().unwrap_or(0);
        for flow in &flows {
            let counts = &flow.counts;
            println!(
                "{} {:<width$}  {:>3}/{:<3} {}  {}",
                color::status(flow.status, status_glyph(flow.status)),
                flow.flow,
                counts.completed,
                counts.total,
                color::muted(&format!("{} failed, {} skipped", counts.failed, counts.skipped)),
                color::context(&flow.directory),
            );
        }
        println!();
        println!("{} flow log(s): {}", flows.len(), color::header(&status.to_string()));
    })
}

/// Load each log and count its commands. Logs that cannot be read are skipped.
pub fn summarize(logs: &[PathBuf]) -> Vec<FlowSummary> {
    logs.iter().filter_map(|path| summarize_one(path)).collect()
}

fn summarize_one(path: &Path) -> Option<FlowSummary> {
    let log = match fv_reconcile::load_path(path) {
        Ok(log) => log,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable flow log");
            return None;
        }
    };
    let info = TestPathInfo::from_path(&path.to_string_lossy());
    let counts = StatusCounts::from_entries(&log.entries);
    Some(FlowSummary {
        flow: info.flow_name,
        directory: info.directory,
        path: path.to_path_buf(),
        status: counts.test_status(),
        counts,
    })
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
