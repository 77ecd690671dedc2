// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fv_core::{Command, CommandEntry};

/// The flat log being reconciled, with a consumed flag per entry.
///
/// Entries are never removed, so indices stay valid for the whole pass and
/// identify the source entry in the output tree. Once consumed, an entry can
/// no longer be found.
pub struct WorkingSet<'a> {
    entries: &'a [CommandEntry],
    consumed: Vec<bool>,
}

impl<'a> WorkingSet<'a> {
    pub fn new(entries: &'a [CommandEntry]) -> Self {
        Self { entries, consumed: vec![false; entries.len()] }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a CommandEntry> {
        self.entries.get(index)
    }

    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed.get(index).copied().unwrap_or(true)
    }

    pub fn consume(&mut self, index: usize) {
        if let Some(flag) = self.consumed.get_mut(index) {
            *flag = true;
        }
    }

    /// First unconsumed entry, in log order, whose command structurally
    /// equals `command`.
    pub fn find(&self, command: &Command) -> Option<usize> {
        self.entries
            .iter()
            .zip(&self.consumed)
            .position(|(entry, consumed)| !consumed && entry.command.matches(command))
    }

    /// Number of entries not yet consumed.
    pub fn remaining(&self) -> usize {
        self.consumed.iter().filter(|c| !**c).count()
    }
}

#[cfg(test)]
#[path = "working_set_tests.rs"]
mod tests;
