// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow log and screenshot discovery

use fv_core::TestPathInfo;
use fv_reconcile::FlowImage;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::UNIX_EPOCH;
use thiserror::Error;

#[allow(clippy::expect_used)]
static PAREN_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)").expect("constant regex pattern is valid"));

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Errors from scanning a test output directory
#[derive(Debug, Error)]
pub enum FindError {
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Recursively collect every `commands-(<flow>).json` under `dir`, sorted by path.
pub fn collect_flow_logs(dir: &Path) -> Result<Vec<PathBuf>, FindError> {
    if !dir.is_dir() {
        return Err(FindError::NotADirectory(dir.to_path_buf()));
    }
    let mut logs = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        let entries = match std::fs::read_dir(&current) {
            Ok(entries) => entries,
            Err(e) if current.as_path() != dir => {
                tracing::warn!(path = %current.display(), error = %e, "skipping unreadable directory");
                continue;
            }
            Err(e) => return Err(e.into()),
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else if TestPathInfo::is_commands_log(&path) {
                logs.push(path);
            }
        }
    }
    logs.sort();
    Ok(logs)
}

/// Images directly in `dir` whose parenthesised name equals `flow_name`.
pub fn collect_flow_images(dir: &Path, flow_name: &str) -> Result<Vec<FlowImage>, FindError> {
    let mut images = Vec::new();
    for entry in std::fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if !is_image(&path) || image_flow_name(&path) != Some(flow_name) {
            continue;
        }
        let modified_ms = entry
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        images.push(FlowImage::new(path, modified_ms));
    }
    images.sort_by(|a, b| a.path.cmp(&b.path));
    tracing::debug!(dir = %dir.display(), flow = flow_name, count = images.len(), "collected flow images");
    Ok(images)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

fn image_flow_name(path: &Path) -> Option<&str> {
    let name = path.file_name()?.to_str()?;
    PAREN_NAME.captures(name)?.get(1).map(|m| m.as_str())
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
