// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution outcome attached to every logged command.
//!
//! Decoding is lenient: a metadata object always yields [`Metadata`]. Odd
//! field values fall back to defaults instead of rejecting the entry.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Outcome of one executed command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Completed,
    Failed,
    Skipped,
    /// Missing or unrecognised in the log
    #[default]
    Unknown,
}

impl Status {
    pub fn is_failed(&self) -> bool {
        matches!(self, Status::Failed)
    }

    pub fn from_wire(value: &str) -> Self {
        match value {
            "COMPLETED" => Status::Completed,
            "FAILED" => Status::Failed,
            "SKIPPED" => Status::Skipped,
            _ => Status::Unknown,
        }
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(value.as_str().map(Status::from_wire).unwrap_or_default())
    }
}

crate::simple_display! {
    Status {
        Completed => "COMPLETED",
        Failed => "FAILED",
        Skipped => "SKIPPED",
        Unknown => "UNKNOWN",
    }
}

/// Status, timing and failure details for an executed command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub status: Status,
    /// Epoch milliseconds when the command started
    #[serde(default, deserialize_with = "lenient_millis")]
    pub timestamp: u64,
    /// Milliseconds the command ran for
    #[serde(default, deserialize_with = "lenient_millis")]
    pub duration: u64,
    #[serde(default, deserialize_with = "lenient_error", skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// Whole milliseconds from any JSON number; null, negative and non-numeric
/// values read as 0.
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let Value::Number(n) = value else {
        return Ok(0);
    };
    Ok(n.as_u64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f > 0.0).map(|f| f as u64))
        .unwrap_or(0))
}

/// An error object that does not decode keeps just its message. A bare
/// string is taken as the message.
fn lenient_error<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ErrorDetail>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match &value {
        Value::Object(_) => Some(ErrorDetail::deserialize(&value).unwrap_or_else(|_| {
            ErrorDetail::new(value.get("message").and_then(Value::as_str).unwrap_or_default())
        })),
        Value::String(message) => Some(ErrorDetail::new(message.as_str())),
        _ => None,
    })
}

crate::builder! {
    pub struct MetadataBuilder => Metadata {
        set {
            status: Status = Status::Completed,
            timestamp: u64 = 1_000,
            duration: u64 = 10,
        }
        option {
            error: ErrorDetail = None,
        }
    }
}

/// Failure recorded by the driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<Vec<StackFrame>>,
    /// UI hierarchy snapshot at the time of failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy_root: Option<Value>,
}

impl ErrorDetail {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), ..Self::default() }
    }
}

impl From<&str> for ErrorDetail {
    fn from(message: &str) -> Self {
        ErrorDetail::new(message)
    }
}

/// One JVM stack frame from the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_loader_name: Option<String>,
    #[serde(default)]
    pub method_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub line_number: i64,
    #[serde(default)]
    pub native_method: bool,
    #[serde(default)]
    pub class_name: String,
}

impl StackFrame {
    /// `Class.method(File.kt:42)`
    pub fn render(&self) -> String {
        let location = match (&self.file_name, self.native_method) {
            (_, true) => "Native Method".to_string(),
            (Some(file), false) => format!("{}:{}", file, self.line_number),
            (None, false) => "Unknown Source".to_string(),
        };
        format!("{}.{}({})", self.class_name, self.method_name, location)
    }
}

#[cfg(test)]
#[path = "metadata_tests.rs"]
mod tests;
