// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reconstructed flow tree.
//!
//! A [`FlowNode`] is an executed entry placed in its sub-flow. For a resolved
//! sub-flow, `command` keeps the planned declaration and `children` holds the
//! executed steps that replaced it.
//!
//! Serialization restores the log's own shape: a resolved sub-flow is written
//! as its `runFlowCommand` with `commands` swapped for the executed children.

use crate::command::{Command, RunFlowCommand};
use crate::entry::CommandEntry;
use crate::metadata::Metadata;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub struct FlowNode {
    /// Position of the source entry in the flat log; `None` for synthesized
    /// entries such as injected screenshots.
    pub index: Option<usize>,
    pub command: Command,
    pub metadata: Metadata,
    pub children: Vec<FlowNode>,
}

impl FlowNode {
    /// A node with no executed children.
    pub fn leaf(index: usize, entry: CommandEntry) -> Self {
        Self {
            index: Some(index),
            command: entry.command,
            metadata: entry.metadata,
            children: Vec::new(),
        }
    }

    pub fn synthesized(entry: CommandEntry) -> Self {
        Self { index: None, command: entry.command, metadata: entry.metadata, children: Vec::new() }
    }

    /// A sub-flow whose planned children were resolved against the log.
    pub fn sub_flow(
        index: usize,
        command: Command,
        metadata: Metadata,
        children: Vec<FlowNode>,
    ) -> Self {
        Self { index: Some(index), command, metadata, children }
    }

    /// A sub-flow with executed children; serialized with those children in
    /// place of its planned `commands`.
    pub fn is_resolved_sub_flow(&self) -> bool {
        self.command.is_run_flow() && !self.children.is_empty()
    }

    /// Depth-first walk yielding each node with its nesting depth (0 = top level).
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![(0, self)] }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(FlowNode::node_count).sum::<usize>()
    }
}

/// Iterator returned by [`FlowNode::walk`].
pub struct Walk<'a> {
    stack: Vec<(usize, &'a FlowNode)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a FlowNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Walk a forest of top-level nodes in display order.
pub fn walk_all(nodes: &[FlowNode]) -> impl Iterator<Item = (usize, &FlowNode)> {
    nodes.iter().flat_map(FlowNode::walk)
}

impl Serialize for FlowNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CommandEntry", 2)?;
        match &self.command {
            Command::RunFlow(run_flow) if self.is_resolved_sub_flow() => {
                let declaration = RunFlowCommand { commands: None, ..run_flow.clone() };
                let executed = ExecutedRunFlow { declaration, commands: &self.children };
                state.serialize_field("command", &ExecutedCommand { run_flow_command: executed })?;
            }
            command => state.serialize_field("command", command)?,
        }
        state.serialize_field("metadata", &self.metadata)?;
        state.end()
    }
}

/// `{"runFlowCommand": {..., "commands": [<executed children>]}}`
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecutedCommand<'a> {
    run_flow_command: ExecutedRunFlow<'a>,
}

#[derive(Serialize)]
struct ExecutedRunFlow<'a> {
    #[serde(flatten)]
    declaration: RunFlowCommand,
    commands: &'a [FlowNode],
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
