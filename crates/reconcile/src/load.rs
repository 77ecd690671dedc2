// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Reading raw flow logs into typed entries.
//!
//! An element is malformed only when it is not an object, or its `command`
//! or `metadata` is missing or not an object. Such elements are skipped one
//! at a time; only a log that is not an array (or not JSON) fails as a whole.
//! Anything past that shape check is kept: odd metadata values fall back to
//! defaults and an undecodable command is carried as [`Command::Opaque`].

use crate::diagnostics::Diagnostic;
use crate::error::ReconcileError;
use fv_core::{json_type, Command, CommandEntry, Metadata};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

/// Entries that survived validation, plus what was skipped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedLog {
    pub entries: Vec<CommandEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Why one raw element could not become a [`CommandEntry`].
#[derive(Debug, Error)]
enum EntryError {
    #[error("entry must be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("{field} must be an object, found {found}")]
    FieldNotObject { field: &'static str, found: &'static str },

    #[error("invalid metadata: {0}")]
    Metadata(#[source] serde_json::Error),
}

/// Validate every element of a raw log.
pub fn parse_entries(value: &Value) -> Result<LoadedLog, ReconcileError> {
    let Value::Array(items) = value else {
        return Err(ReconcileError::InvalidInput { found: json_type(value) });
    };

    let mut log = LoadedLog::default();
    for (index, item) in items.iter().enumerate() {
        match entry_from_value(item) {
            Ok(entry) => log.entries.push(entry),
            Err(e) => {
                tracing::warn!(index, reason = %e, "skipping malformed command entry");
                log.diagnostics.push(Diagnostic::MalformedEntry { index, reason: e.to_string() });
            }
        }
    }
    Ok(log)
}

fn entry_from_value(item: &Value) -> Result<CommandEntry, EntryError> {
    let Value::Object(fields) = item else {
        return Err(EntryError::NotAnObject(json_type(item)));
    };
    let command = object_field(fields, "command")?;
    let metadata = object_field(fields, "metadata")?;

    let command = Command::decode(command.clone());
    let metadata: Metadata =
        serde_json::from_value(metadata.clone()).map_err(EntryError::Metadata)?;
    Ok(CommandEntry::new(command, metadata))
}

fn object_field<'a>(fields: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, EntryError> {
    match fields.get(field) {
        None | Some(Value::Null) => Err(EntryError::Missing(field)),
        Some(value @ Value::Object(_)) => Ok(value),
        Some(other) => Err(EntryError::FieldNotObject { field, found: json_type(other) }),
    }
}

/// Stable sort by start time; entries with equal timestamps keep log order.
pub fn sort_by_timestamp(entries: &mut [CommandEntry]) {
    entries.sort_by_key(CommandEntry::timestamp);
}

/// Parse, validate and time-order a log held in memory.
pub fn load_str(content: &str) -> Result<LoadedLog, ReconcileError> {
    let value: Value = serde_json::from_str(content)?;
    let mut log = parse_entries(&value)?;
    sort_by_timestamp(&mut log.entries);
    Ok(log)
}

/// Read a `commands-(<flow>).json` file.
pub fn load_path(path: &Path) -> Result<LoadedLog, ReconcileError> {
    let content = std::fs::read_to_string(path)
        .map_err(|source| ReconcileError::Io { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded flow log");
    load_str(&content)
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
