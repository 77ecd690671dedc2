// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::command::Command;
use crate::metadata::{Metadata, Status};
use serde::{Deserialize, Serialize};

/// One executed step from a flow log: the command and what happened when it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub command: Command,
    pub metadata: Metadata,
}

impl CommandEntry {
    pub fn new(command: Command, metadata: Metadata) -> Self {
        Self { command, metadata }
    }

    pub fn status(&self) -> Status {
        self.metadata.status
    }

    pub fn timestamp(&self) -> u64 {
        self.metadata.timestamp
    }
}
