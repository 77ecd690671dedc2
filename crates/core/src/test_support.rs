// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Command, CommandEntry, ErrorDetail, KnownKind, Metadata, Status};
use serde_json::json;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for commands and flow logs.
pub mod strategies {
    use super::*;
    use proptest::prelude::*;

    pub fn arb_status() -> impl Strategy<Value = Status> {
        prop_oneof![Just(Status::Completed), Just(Status::Failed), Just(Status::Skipped)]
    }

    /// Leaf commands drawn from a small alphabet so duplicates are common.
    pub fn arb_leaf() -> impl Strategy<Value = Command> {
        prop_oneof![
            "[A-D]".prop_map(|t| tap(&t)),
            "[a-c]".prop_map(|t| input_text(&t)),
            "[A-B]".prop_map(|t| assert_visible(&t)),
        ]
    }

    /// Planned command trees up to three sub-flow levels deep.
    pub fn arb_plan() -> impl Strategy<Value = Command> {
        arb_leaf().prop_recursive(3, 24, 4, |inner| {
            ("[xy]", prop::collection::vec(inner, 0..4))
                .prop_map(|(name, children)| run_flow(&format!("{name}.yaml"), children))
        })
    }

    /// A flat log produced by "executing" a plan: each sub-flow entry is
    /// followed by its children's entries. Some leaves are randomly left
    /// unexecuted so that planned children go unresolved.
    pub fn arb_flat_log() -> impl Strategy<Value = Vec<CommandEntry>> {
        (prop::collection::vec(arb_plan(), 0..6), prop::collection::vec(any::<bool>(), 64))
            .prop_map(|(plan, keep)| {
                let mut log = Vec::new();
                let mut keep = keep.into_iter().cycle();
                for command in &plan {
                    execute(command, &mut log, &mut keep);
                }
                log
            })
    }

    fn execute(command: &Command, log: &mut Vec<CommandEntry>, keep: &mut impl Iterator<Item = bool>) {
        let timestamp = 1_000 + log.len() as u64 * 10;
        match command.declared_children() {
            Some(children) => {
                log.push(entry(command.clone(), timestamp));
                for child in children {
                    execute(child, log, keep);
                }
            }
            None => {
                if keep.next().unwrap_or(true) {
                    log.push(entry(command.clone(), timestamp));
                }
            }
        }
    }
}

// ── Command factory functions ───────────────────────────────────────────

pub fn tap(text: &str) -> Command {
    Command::action(
        KnownKind::TapOnElementCommand,
        json!({
            "selector": { "textRegex": text, "optional": false },
            "retryIfNoChange": false,
            "waitUntilVisible": false,
            "longPress": false,
            "optional": false
        }),
    )
}

pub fn input_text(text: &str) -> Command {
    Command::action(KnownKind::InputText, json!({ "text": text, "optional": false }))
}

pub fn assert_visible(text: &str) -> Command {
    Command::action(
        KnownKind::AssertCondition,
        json!({
            "condition": { "visible": { "textRegex": text, "optional": false } },
            "optional": false
        }),
    )
}

pub fn launch_app(app_id: &str) -> Command {
    Command::action(KnownKind::LaunchApp, json!({ "appId": app_id, "optional": false }))
}

pub fn run_flow(flow: &str, children: Vec<Command>) -> Command {
    Command::RunFlow(crate::RunFlowCommand {
        flow: Some(flow.to_string()),
        optional: Some(false),
        commands: Some(children),
        ..Default::default()
    })
}

// ── Entry factory functions ─────────────────────────────────────────────

pub fn entry(command: Command, timestamp: u64) -> CommandEntry {
    CommandEntry::new(command, Metadata::builder().timestamp(timestamp).build())
}

pub fn failed_entry(command: Command, timestamp: u64, message: &str) -> CommandEntry {
    CommandEntry::new(
        command,
        Metadata::builder().status(Status::Failed).timestamp(timestamp).error(ErrorDetail::new(message)).build(),
    )
}

pub fn skipped_entry(command: Command, timestamp: u64) -> CommandEntry {
    CommandEntry::new(command, Metadata::builder().status(Status::Skipped).timestamp(timestamp).build())
}
