// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::ValueEnum;
use fv_core::{format_duration_ms, format_offset, walk_all, FlowNode, Status, StatusCounts};
use serde::Serialize;

use crate::color;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print `data` as pretty JSON, or run `text_fn` for the text format.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce(),
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => {
            text_fn();
        }
    }
    Ok(())
}

pub fn status_glyph(status: Status) -> &'static str {
    match status {
        Status::Completed => "✓",
        Status::Failed => "✗",
        Status::Skipped => "○",
        Status::Unknown => "?",
    }
}

/// `login.yaml  FAILED  3 passed, 1 failed, 0 skipped (4 total)`
pub fn summary_line(flow_name: &str, counts: &StatusCounts) -> String {
    let status = counts.test_status();
    format!(
        "{}  {}  {} passed, {} failed, {} skipped ({} total)",
        color::header(flow_name),
        color::status(status, &status.to_string()),
        counts.completed,
        counts.failed,
        counts.skipped,
        counts.total,
    )
}

/// First non-zero timestamp in display order; offsets are measured from it.
pub fn run_start(nodes: &[FlowNode]) -> Option<u64> {
    walk_all(nodes).map(|(_, node)| node.metadata.timestamp).find(|ts| *ts != 0)
}

/// One line per node, depth-first, indented by nesting. Failed nodes are
/// followed by their error message, and with `verbose` by the stack trace.
pub fn render_tree(nodes: &[FlowNode], verbose: bool) -> Vec<String> {
    let start = run_start(nodes);
    let mut lines = Vec::new();

    for (position, (depth, node)) in walk_all(nodes).enumerate() {
        let indent = "  ".repeat(depth);
        let metadata = &node.metadata;
        let offset = format_offset(metadata.timestamp, position, start);

        let mut line = format!(
            "{indent}{} {}  {}",
            color::status(metadata.status, status_glyph(metadata.status)),
            color::muted(&offset),
            describe(node),
        );
        if metadata.duration > 0 {
            line.push_str(&format!(" {}", color::muted(&format!("({})", format_duration_ms(metadata.duration)))));
        }
        lines.push(line);

        if let Some(error) = metadata.error.as_ref().filter(|e| !e.message.is_empty()) {
            for message_line in error.message.lines() {
                lines.push(format!("{indent}    {}", color::status(Status::Failed, message_line)));
            }
        }
        if verbose {
            let frames = metadata.error.as_ref().and_then(|e| e.stack_trace.as_deref()).unwrap_or_default();
            for frame in frames {
                lines.push(format!("{indent}      {}", color::muted(&format!("at {}", frame.render()))));
            }
        }
    }
    lines
}

/// `Tap  Tap on "Login"` / `Run Flow: login.yaml`
fn describe(node: &FlowNode) -> String {
    let name = node.command.display_name();
    let details = node.command.details();
    if details.starts_with(':') {
        format!("{name}{}", color::context(&details))
    } else {
        format!("{name}  {}", color::context(&details))
    }
}
