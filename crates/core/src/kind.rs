// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command kind discriminators.
//!
//! A command object on the wire carries exactly one key naming its kind
//! (`{"tapOnElementCommand": {...}}`). [`KnownKind::key`] is the single table
//! mapping kinds to those keys; everything else is derived from it.

use std::fmt;

/// Command kinds the viewer knows how to name and describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownKind {
    AssertCondition,
    Swipe,
    TapOnElementCommand,
    TapOnElement,
    ApplyConfiguration,
    RunFlow,
    InputText,
    WaitForAnimation,
    WaitForAnimationToEnd,
    ScrollUntilVisibleCommand,
    ScrollUntilVisible,
    DefineVariables,
    LaunchApp,
    StopApp,
    OpenLink,
    SetAirplaneMode,
    AutomaticScreenshot,
}

impl KnownKind {
    pub const ALL: [KnownKind; 17] = [
        KnownKind::AssertCondition,
        KnownKind::Swipe,
        KnownKind::TapOnElementCommand,
        KnownKind::TapOnElement,
        KnownKind::ApplyConfiguration,
        KnownKind::RunFlow,
        KnownKind::InputText,
        KnownKind::WaitForAnimation,
        KnownKind::WaitForAnimationToEnd,
        KnownKind::ScrollUntilVisibleCommand,
        KnownKind::ScrollUntilVisible,
        KnownKind::DefineVariables,
        KnownKind::LaunchApp,
        KnownKind::StopApp,
        KnownKind::OpenLink,
        KnownKind::SetAirplaneMode,
        KnownKind::AutomaticScreenshot,
    ];

    /// Wire key for this kind.
    pub fn key(self) -> &'static str {
        match self {
            KnownKind::AssertCondition => "assertConditionCommand",
            KnownKind::Swipe => "swipeCommand",
            KnownKind::TapOnElementCommand => "tapOnElementCommand",
            KnownKind::TapOnElement => "tapOnElement",
            KnownKind::ApplyConfiguration => "applyConfigurationCommand",
            KnownKind::RunFlow => "runFlowCommand",
            KnownKind::InputText => "inputTextCommand",
            KnownKind::WaitForAnimation => "waitForAnimationCommand",
            KnownKind::WaitForAnimationToEnd => "waitForAnimationToEndCommand",
            KnownKind::ScrollUntilVisibleCommand => "scrollUntilVisibleCommand",
            KnownKind::ScrollUntilVisible => "scrollUntilVisible",
            KnownKind::DefineVariables => "defineVariablesCommand",
            KnownKind::LaunchApp => "launchAppCommand",
            KnownKind::StopApp => "stopAppCommand",
            KnownKind::OpenLink => "openLinkCommand",
            KnownKind::SetAirplaneMode => "setAirplaneModeCommand",
            KnownKind::AutomaticScreenshot => "automaticScreenshotCommand",
        }
    }

    /// Human-readable label shown in listings.
    pub fn label(self) -> &'static str {
        match self {
            KnownKind::AssertCondition => "Assert",
            KnownKind::Swipe => "Swipe",
            KnownKind::TapOnElementCommand | KnownKind::TapOnElement => "Tap",
            KnownKind::ApplyConfiguration => "Apply Configuration",
            KnownKind::RunFlow => "Run Flow",
            KnownKind::InputText => "Input Text",
            KnownKind::WaitForAnimation => "Wait for Animation",
            KnownKind::WaitForAnimationToEnd => "Wait for Animation to End",
            KnownKind::ScrollUntilVisibleCommand | KnownKind::ScrollUntilVisible => {
                "Scroll Until Visible"
            }
            KnownKind::DefineVariables => "Define Variables",
            KnownKind::LaunchApp => "Launch App",
            KnownKind::StopApp => "Stop App",
            KnownKind::OpenLink => "Open Link",
            KnownKind::SetAirplaneMode => "Set Airplane Mode",
            KnownKind::AutomaticScreenshot => "Automatic Screenshot",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

/// Discriminator for any command, including kinds this build has never seen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Known(KnownKind),
    Unknown(String),
}

impl CommandKind {
    pub fn from_key(key: &str) -> Self {
        match KnownKind::from_key(key) {
            Some(kind) => CommandKind::Known(kind),
            None => CommandKind::Unknown(key.to_string()),
        }
    }

    /// Wire key, exactly as it appeared in the log.
    pub fn key(&self) -> &str {
        match self {
            CommandKind::Known(kind) => kind.key(),
            CommandKind::Unknown(key) => key,
        }
    }

    pub fn known(&self) -> Option<KnownKind> {
        match self {
            CommandKind::Known(kind) => Some(*kind),
            CommandKind::Unknown(_) => None,
        }
    }

    pub fn is_run_flow(&self) -> bool {
        matches!(self, CommandKind::Known(KnownKind::RunFlow))
    }
}

impl From<KnownKind> for CommandKind {
    fn from(kind: KnownKind) -> Self {
        CommandKind::Known(kind)
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
