// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flow identity from log file paths.
//!
//! The test tool writes one log per flow as `<run-dir>/commands-(<flow>).json`.

use regex::Regex;
use serde::Serialize;
use std::path::Path;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static COMMANDS_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"commands-\((.*?)\)\.json$").expect("constant regex pattern is valid"));

/// Flow name and run directory of a commands log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestPathInfo {
    pub flow_name: String,
    pub directory: String,
}

impl TestPathInfo {
    /// Parse `…/commands-(<flow>).json`. Any other shape yields empty fields.
    pub fn from_path(path: &str) -> Self {
        let Some(flow_name) = COMMANDS_FILE.captures(path).and_then(|c| c.get(1)) else {
            tracing::debug!(path, "not a commands log path");
            return Self::default();
        };
        let Some(slash) = path.rfind('/') else {
            tracing::debug!(path, "commands log path has no directory");
            return Self::default();
        };
        Self { flow_name: flow_name.as_str().to_string(), directory: path[..slash].to_string() }
    }

    pub fn is_commands_log(path: &Path) -> bool {
        path.file_name().and_then(|n| n.to_str()).is_some_and(|n| COMMANDS_FILE.is_match(n))
    }
}

#[cfg(test)]
#[path = "path_info_tests.rs"]
mod tests;
