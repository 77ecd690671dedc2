// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Merging captured screenshots into a reconstructed flow.
//!
//! The test tool saves screenshots next to the log, e.g.
//! `screenshot-❌-1733338587084-(login.yaml).png`. Each becomes a synthetic
//! `automaticScreenshotCommand` placed by time among the top-level nodes.

use fv_core::{Command, CommandEntry, FlowNode, KnownKind, Metadata, Status};
use regex::Regex;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static DASHED_MILLIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d{13})-").expect("constant regex pattern is valid"));

#[allow(clippy::expect_used)]
static PAREN_MILLIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-(\d{13})\(").expect("constant regex pattern is valid"));

/// An image file belonging to a flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowImage {
    pub path: PathBuf,
    /// File modification time, epoch ms. Used when the name has no timestamp.
    pub modified_ms: u64,
}

impl FlowImage {
    pub fn new(path: impl Into<PathBuf>, modified_ms: u64) -> Self {
        Self { path: path.into(), modified_ms }
    }

    /// Capture time from the file name, else the modification time.
    pub fn timestamp(&self) -> u64 {
        timestamp_from_filename(&self.path).unwrap_or(self.modified_ms)
    }
}

/// Epoch-ms capture time embedded in a screenshot name as `-<13 digits>-`
/// or `-<13 digits>(`.
pub fn timestamp_from_filename(path: &Path) -> Option<u64> {
    let name = path.file_name()?.to_str()?;
    [&DASHED_MILLIS, &PAREN_MILLIS]
        .into_iter()
        .find_map(|re| re.captures(name))
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A completed, zero-duration screenshot entry for `image`.
pub fn screenshot_entry(image: &FlowImage) -> CommandEntry {
    let command = Command::action(
        KnownKind::AutomaticScreenshot,
        json!({
            "imagePath": image.path.to_string_lossy(),
            "optional": false,
        }),
    );
    let metadata =
        Metadata { status: Status::Completed, timestamp: image.timestamp(), duration: 0, error: None };
    CommandEntry::new(command, metadata)
}

/// Add one top-level node per image and order the top level by timestamp.
///
/// The sort is stable and existing nodes come first, so a screenshot taken in
/// the same millisecond as a command follows it.
pub fn inject_screenshots(mut nodes: Vec<FlowNode>, images: &[FlowImage]) -> Vec<FlowNode> {
    if images.is_empty() {
        return nodes;
    }
    nodes.extend(images.iter().map(|image| FlowNode::synthesized(screenshot_entry(image))));
    nodes.sort_by_key(|node| node.metadata.timestamp);
    tracing::debug!(images = images.len(), nodes = nodes.len(), "injected screenshots");
    nodes
}

#[cfg(test)]
#[path = "screenshots_tests.rs"]
mod tests;
