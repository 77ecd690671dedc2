// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable names and one-line details for commands.

use crate::command::{Command, RunFlowCommand};
use crate::kind::{CommandKind, KnownKind};
use serde_json::Value;

impl Command {
    /// Short name such as "Tap", "Long Press" or "Run Flow".
    pub fn display_name(&self) -> String {
        match self.kind() {
            CommandKind::Known(KnownKind::TapOnElementCommand | KnownKind::TapOnElement)
                if self.flag("longPress") =>
            {
                "Long Press".to_string()
            }
            CommandKind::Known(kind) => kind.label().to_string(),
            CommandKind::Unknown(key) => {
                tracing::debug!(key = %key, "unknown command kind");
                format!("Unknown: {key}")
            }
        }
    }

    /// One-line summary of the command's payload.
    pub fn details(&self) -> String {
        let kind = match self {
            Command::RunFlow(run_flow) => return run_flow_details(run_flow),
            Command::Action(action) => &action.kind,
            Command::Opaque(_) => return "Unknown command type".to_string(),
        };
        let Some(kind) = kind.known() else {
            return "Unknown command type".to_string();
        };

        match kind {
            KnownKind::AssertCondition => match self.field("condition") {
                Some(condition) => condition_details(condition, "is visible", "is not visible"),
                None => "Unknown condition".to_string(),
            },
            KnownKind::Swipe => format!(
                "Direction: {}, Duration: {}ms",
                self.text("direction").unwrap_or("?"),
                self.field("duration").map(render_scalar).unwrap_or_else(|| "?".to_string())
            ),
            KnownKind::TapOnElementCommand | KnownKind::TapOnElement => {
                let verb = if self.flag("longPress") { "Long press" } else { "Tap" };
                format!("{} on \"{}\"", verb, self.text_regex("selector").unwrap_or("Unknown"))
            }
            KnownKind::ApplyConfiguration => format!(
                "App ID: {}",
                self.field("config")
                    .and_then(|c| c.get("appId"))
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown")
            ),
            KnownKind::InputText => {
                let text = self.text("text").filter(|t| !t.is_empty()).unwrap_or("Empty");
                format!("Text: \"{}\"", text)
            }
            KnownKind::WaitForAnimation => "Waiting for animation to complete".to_string(),
            KnownKind::WaitForAnimationToEnd => "Waiting for animation to end".to_string(),
            KnownKind::ScrollUntilVisibleCommand => format!(
                "Scroll {} until \"{}\" is visible",
                self.text("direction").unwrap_or("?"),
                self.text_regex("element").unwrap_or("Unknown")
            ),
            KnownKind::ScrollUntilVisible => format!(
                "Scroll {} until \"{}\" is visible",
                self.text("direction").unwrap_or("?"),
                self.text_regex("selector").unwrap_or("Unknown")
            ),
            KnownKind::DefineVariables => {
                let names: Vec<&str> = self
                    .field("env")
                    .and_then(Value::as_object)
                    .map(|env| env.keys().map(String::as_str).collect())
                    .unwrap_or_default();
                if names.is_empty() {
                    "Variables: None".to_string()
                } else {
                    format!("Variables: {}", names.join(", "))
                }
            }
            KnownKind::LaunchApp | KnownKind::StopApp => {
                format!("App ID: {}", self.text("appId").unwrap_or("Unknown"))
            }
            KnownKind::OpenLink => format!("Link: {}", self.text("link").unwrap_or("Unknown")),
            KnownKind::SetAirplaneMode => {
                let enabled = match self.field("value") {
                    Some(Value::String(v)) => v.eq_ignore_ascii_case("enable"),
                    Some(Value::Bool(b)) => *b,
                    _ => false,
                };
                format!("Airplane Mode: {}", if enabled { "Enabled" } else { "Disabled" })
            }
            KnownKind::AutomaticScreenshot => {
                let path = self.text("imagePath").unwrap_or("");
                let name = path.rsplit('/').next().filter(|n| !n.is_empty()).unwrap_or("screenshot");
                format!("Captured: {}", name)
            }
            // Run flows return above
            KnownKind::RunFlow => "Unknown flow".to_string(),
        }
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    fn flag(&self, name: &str) -> bool {
        self.field(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// `<name>.textRegex` of a selector-like field.
    fn text_regex(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(|s| s.get("textRegex")).and_then(Value::as_str)
    }
}

fn run_flow_details(run_flow: &RunFlowCommand) -> String {
    let mut details = run_flow.flow.as_deref().map(|f| format!(": {f}")).unwrap_or_default();

    if let Some(source) = &run_flow.source_description {
        details = if details.is_empty() {
            format!("Source: {source}")
        } else {
            format!("{details} ({source})")
        };
    }

    if run_flow.flow.is_none() {
        if let Some(condition) = run_flow.extra.get("condition") {
            let when = match condition.get("scriptCondition").and_then(Value::as_str) {
                Some(script) => Some(script.to_string()),
                None => visibility(condition).map(|(visible, text)| {
                    if visible {
                        format!("Visible \"{text}\"")
                    } else {
                        format!("Not Visible \"{text}\"")
                    }
                }),
            };
            if let Some(when) = when {
                details = if details.is_empty() {
                    format!("when: {when}")
                } else {
                    format!("{details} when: {when}")
                };
            }
        }
    }

    if details.is_empty() {
        "Unknown flow".to_string()
    } else {
        details
    }
}

fn condition_details(condition: &Value, visible: &str, not_visible: &str) -> String {
    match visibility(condition) {
        Some((true, text)) => format!("\"{text}\" {visible}"),
        Some((false, text)) => format!("\"{text}\" {not_visible}"),
        None => "Unknown condition".to_string(),
    }
}

/// `(true, regex)` for `visible`, `(false, regex)` for `notVisible`.
fn visibility(condition: &Value) -> Option<(bool, &str)> {
    let regex = |key: &str| condition.get(key)?.get("textRegex")?.as_str();
    regex("visible").map(|t| (true, t)).or_else(|| regex("notVisible").map(|t| (false, t)))
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
