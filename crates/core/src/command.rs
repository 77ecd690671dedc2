// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command payloads as recorded in a flow log.
//!
//! Only `runFlowCommand` needs typed access (its `commands` list drives
//! reconciliation). Every other kind keeps its payload as raw JSON so nothing
//! the test tool writes is lost on a round trip. A command object that cannot
//! be decoded at all is kept verbatim as [`Command::Opaque`].

use crate::kind::{CommandKind, KnownKind};
use crate::structural::{json_type, maps_eq, structural_eq};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Reasons a JSON value cannot be read as a [`Command`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("command must be an object, found {0}")]
    NotAnObject(&'static str),

    #[error("command must have exactly one kind key, found {0}")]
    KeyCount(usize),

    #[error("invalid {key} payload: {message}")]
    Payload { key: String, message: String },
}

/// A single command, planned or executed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RunFlow(RunFlowCommand),
    Action(ActionCommand),
    /// Undecodable command object, kept as logged. Matches only an identical object.
    Opaque(Value),
}

/// Any non-flow command: its kind plus the untouched payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCommand {
    pub kind: CommandKind,
    pub payload: Value,
}

/// Payload of a `runFlowCommand`.
///
/// `commands` holds the planned children. Fields the viewer does not interpret
/// (`condition`, `config`, ...) are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunFlowCommand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commands: Option<Vec<Command>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RunFlowCommand {
    /// Field-wise comparison, recursing into planned children.
    pub fn matches(&self, other: &RunFlowCommand) -> bool {
        self.flow == other.flow
            && self.source_description == other.source_description
            && self.optional == other.optional
            && maps_eq(&self.extra, &other.extra)
            && match (&self.commands, &other.commands) {
                (None, None) => true,
                (Some(a), Some(b)) => {
                    a.len() == b.len() && a.iter().zip(b).all(|(l, r)| l.matches(r))
                }
                _ => false,
            }
    }
}

impl Command {
    /// Build a non-flow command from a kind key and payload.
    pub fn action(kind: impl Into<CommandKind>, payload: Value) -> Self {
        Command::Action(ActionCommand { kind: kind.into(), payload })
    }

    /// Decode a command, keeping anything unreadable as [`Command::Opaque`].
    pub fn decode(value: Value) -> Self {
        match Command::from_value(value.clone()) {
            Ok(command) => command,
            Err(e) => {
                tracing::debug!(error = %e, "keeping undecodable command as-is");
                Command::Opaque(value)
            }
        }
    }

    /// Decode a command object, e.g. `{"tapOnElementCommand": {...}}`.
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let map = match value {
            Value::Object(map) => map,
            other => return Err(ShapeError::NotAnObject(json_type(&other))),
        };
        if map.len() != 1 {
            return Err(ShapeError::KeyCount(map.len()));
        }
        let Some((key, payload)) = map.into_iter().next() else {
            return Err(ShapeError::KeyCount(0));
        };

        match CommandKind::from_key(&key) {
            CommandKind::Known(KnownKind::RunFlow) => {
                if !payload.is_object() {
                    return Err(ShapeError::Payload {
                        key,
                        message: format!("expected object, found {}", json_type(&payload)),
                    });
                }
                let run_flow = serde_json::from_value(payload)
                    .map_err(|e| ShapeError::Payload { key, message: e.to_string() })?;
                Ok(Command::RunFlow(run_flow))
            }
            kind => Ok(Command::Action(ActionCommand { kind, payload })),
        }
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::RunFlow(_) => CommandKind::Known(KnownKind::RunFlow),
            Command::Action(action) => action.kind.clone(),
            Command::Opaque(value) => CommandKind::Unknown(opaque_key(value).to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Command::RunFlow(_) => KnownKind::RunFlow.key(),
            Command::Action(action) => action.kind.key(),
            Command::Opaque(value) => opaque_key(value),
        }
    }

    pub fn as_run_flow(&self) -> Option<&RunFlowCommand> {
        match self {
            Command::RunFlow(run_flow) => Some(run_flow),
            Command::Action(_) | Command::Opaque(_) => None,
        }
    }

    pub fn is_run_flow(&self) -> bool {
        matches!(self, Command::RunFlow(_))
    }

    /// Planned children of a sub-flow, if this is one and it declares any list.
    pub fn declared_children(&self) -> Option<&[Command]> {
        self.as_run_flow().and_then(|rf| rf.commands.as_deref())
    }

    /// Deep structural equality of the whole payload.
    ///
    /// This is the matching rule used to pair planned commands with executed
    /// log entries: kind and every nested field must agree.
    pub fn matches(&self, other: &Command) -> bool {
        match (self, other) {
            (Command::RunFlow(a), Command::RunFlow(b)) => a.matches(b),
            (Command::Action(a), Command::Action(b)) => {
                a.kind == b.kind && structural_eq(&a.payload, &b.payload)
            }
            (Command::Opaque(a), Command::Opaque(b)) => structural_eq(a, b),
            _ => false,
        }
    }

    /// Payload field lookup for non-flow commands.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Command::Action(action) => action.payload.get(name),
            Command::RunFlow(_) | Command::Opaque(_) => None,
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Command::Opaque(value) => value.serialize(serializer),
            Command::RunFlow(run_flow) => single_entry(serializer, KnownKind::RunFlow.key(), run_flow),
            Command::Action(action) => single_entry(serializer, action.kind.key(), &action.payload),
        }
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Command::decode(value))
    }
}

fn single_entry<S: Serializer, T: Serialize>(serializer: S, key: &str, payload: &T) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(key, payload)?;
    map.end()
}

/// First key of an opaque command object, or `""` when there is none.
fn opaque_key(value: &Value) -> &str {
    value.as_object().and_then(|map| map.keys().next()).map_or("", String::as_str)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
