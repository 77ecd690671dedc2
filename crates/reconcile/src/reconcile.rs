// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuilding sub-flow nesting from a flat execution log.
//!
//! The test tool logs every executed command in one chronological list. A
//! `runFlowCommand` entry records the planned body of its sub-flow but not
//! where that body's executions ended up. Reconciliation walks the log, and
//! for each sub-flow pulls the matching executed entries out of the log and
//! under the sub-flow, recursing into nested sub-flows.
//!
//! Matching is by structural equality of the command, and the first
//! unconsumed match in log order wins. Every entry is consumed once placed,
//! so no executed step is attached twice. Plain remove-on-match would only
//! remove matched nested leaves; here top-level leaves and resolved nested
//! sub-flow entries are consumed as well.

use crate::diagnostics::Diagnostic;
use crate::error::ReconcileError;
use crate::load::parse_entries;
use crate::working_set::WorkingSet;
use fv_core::{Command, CommandEntry, FlowNode};
use serde::Serialize;
use serde_json::Value;

/// Reconstructed tree and what could not be placed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Reconciliation {
    pub nodes: Vec<FlowNode>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Re-nest a time-ordered flat log under its sub-flows.
///
/// Node indices refer to positions in `entries`. The input is not modified.
pub fn reconcile(entries: &[CommandEntry]) -> Reconciliation {
    let mut set = WorkingSet::new(entries);
    let mut out = Reconciliation::default();

    for index in 0..set.len() {
        if set.is_consumed(index) {
            continue;
        }
        let Some(entry) = set.get(index) else {
            continue;
        };

        let declared = match entry.command.declared_children() {
            Some(children) if !children.is_empty() => children,
            _ => {
                set.consume(index);
                out.nodes.push(FlowNode::leaf(index, entry.clone()));
                continue;
            }
        };

        let children = resolve_children(declared, &mut set, &mut out.diagnostics);
        if children.is_empty() {
            let flow = flow_name(&entry.command);
            tracing::debug!(index, flow = ?flow, "dropping sub-flow with no executed commands");
            out.diagnostics.push(Diagnostic::DroppedSubFlow { index, flow });
            continue;
        }

        set.consume(index);
        out.nodes.push(FlowNode::sub_flow(
            index,
            entry.command.clone(),
            entry.metadata.clone(),
            children,
        ));
    }

    tracing::debug!(
        entries = entries.len(),
        top_level = out.nodes.len(),
        unplaced = set.remaining(),
        diagnostics = out.diagnostics.len(),
        "reconciled flow log"
    );
    out
}

/// Validate a raw JSON log, then reconcile it as-is (no sorting).
///
/// Malformed elements are skipped and reported alongside the reconciliation
/// diagnostics.
pub fn reconcile_value(value: &Value) -> Result<Reconciliation, ReconcileError> {
    let loaded = parse_entries(value)?;
    let mut result = reconcile(&loaded.entries);
    let mut diagnostics = loaded.diagnostics;
    diagnostics.append(&mut result.diagnostics);
    result.diagnostics = diagnostics;
    Ok(result)
}

/// Resolve planned children, in declared order, against the working set.
fn resolve_children(
    declared: &[Command],
    set: &mut WorkingSet<'_>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Vec<FlowNode> {
    let mut resolved = Vec::new();

    for child in declared {
        let Some(found) = set.find(child) else {
            tracing::debug!(kind = %child.kind(), "declared command has no executed entry");
            diagnostics.push(Diagnostic::unresolved(child));
            continue;
        };
        let Some(entry) = set.get(found) else {
            continue;
        };

        let Some(run_flow) = child.as_run_flow() else {
            set.consume(found);
            resolved.push(FlowNode::leaf(found, entry.clone()));
            continue;
        };

        // Grandchildren come from the declaration, not the found entry.
        let grandchildren = run_flow.commands.as_deref().unwrap_or_default();
        let executed = resolve_children(grandchildren, set, diagnostics);
        if executed.is_empty() {
            // Left unconsumed: the entry can still match a later declaration.
            tracing::debug!(index = found, flow = ?run_flow.flow, "nested sub-flow resolved no commands");
            diagnostics.push(Diagnostic::EmptySubFlow { index: found, flow: run_flow.flow.clone() });
            continue;
        }
        set.consume(found);
        resolved.push(FlowNode::sub_flow(
            found,
            child.clone(),
            entry.metadata.clone(),
            executed,
        ));
    }

    resolved
}

fn flow_name(command: &Command) -> Option<String> {
    command.as_run_flow().and_then(|rf| rf.flow.clone())
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
