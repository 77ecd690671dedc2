// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail roll-ups for a single test log and for a flow of tests.

use crate::entry::CommandEntry;
use crate::metadata::Status;
use serde::{Deserialize, Serialize};

/// Per-status command counts for one log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub completed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn tally(statuses: impl IntoIterator<Item = Status>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.total += 1;
            match status {
                Status::Completed => counts.completed += 1,
                Status::Failed => counts.failed += 1,
                Status::Skipped => counts.skipped += 1,
                Status::Unknown => {}
            }
        }
        counts
    }

    pub fn from_entries(entries: &[CommandEntry]) -> Self {
        Self::tally(entries.iter().map(CommandEntry::status))
    }

    /// `FAILED` if any command failed, otherwise `COMPLETED`.
    pub fn test_status(&self) -> Status {
        if self.failed > 0 {
            Status::Failed
        } else {
            Status::Completed
        }
    }
}

/// Overall verdict for a flow across its test runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowStatus {
    Passed,
    Failed,
}

impl FlowStatus {
    /// `FAILED` if any test failed. A flow with no tests has passed.
    pub fn from_tests(statuses: impl IntoIterator<Item = Status>) -> Self {
        if statuses.into_iter().any(|s| s.is_failed()) {
            FlowStatus::Failed
        } else {
            FlowStatus::Passed
        }
    }
}

crate::simple_display! {
    FlowStatus {
        Passed => "PASSED",
        Failed => "FAILED",
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
