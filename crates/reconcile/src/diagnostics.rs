// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Non-fatal findings collected while loading and reconciling a log.

use fv_core::{Command, CommandKind};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Raw element `index` was not a usable `{command, metadata}` pair.
    MalformedEntry { index: usize, reason: String },

    /// A declared sub-flow had no executed `runFlowCommand` entry.
    UnresolvedSubFlow { flow: Option<String> },

    /// A declared leaf had no unconsumed executed entry.
    UnresolvedLeaf {
        #[serde(serialize_with = "serialize_kind")]
        command: CommandKind,
    },

    /// A declared sub-flow matched entry `index`, but none of its own children
    /// resolved. The entry stays available for later matches.
    EmptySubFlow { index: usize, flow: Option<String> },

    /// Top-level sub-flow entry `index` resolved no children and was left out.
    DroppedSubFlow { index: usize, flow: Option<String> },
}

impl Diagnostic {
    pub(crate) fn unresolved(declared: &Command) -> Self {
        match declared.as_run_flow() {
            Some(run_flow) => Diagnostic::UnresolvedSubFlow { flow: run_flow.flow.clone() },
            None => Diagnostic::UnresolvedLeaf { command: declared.kind() },
        }
    }

    /// Whether this finding came from loading rather than reconciliation.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Diagnostic::MalformedEntry { .. })
    }
}

fn serialize_kind<S: serde::Serializer>(kind: &CommandKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.key())
}

fn flow_label(flow: &Option<String>) -> &str {
    flow.as_deref().unwrap_or("<unnamed>")
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedEntry { index, reason } => {
                write!(f, "entry {index}: skipped malformed entry ({reason})")
            }
            Diagnostic::UnresolvedSubFlow { flow } => {
                write!(f, "sub-flow {} was never executed", flow_label(flow))
            }
            Diagnostic::UnresolvedLeaf { command } => {
                let key = match command.key() {
                    "" => "<unknown>",
                    key => key,
                };
                write!(f, "declared {key} has no executed entry")
            }
            Diagnostic::EmptySubFlow { index, flow } => {
                write!(f, "entry {index}: sub-flow {} resolved no commands", flow_label(flow))
            }
            Diagnostic::DroppedSubFlow { index, flow } => {
                write!(f, "entry {index}: dropped sub-flow {} with no executed commands", flow_label(flow))
            }
        }
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
