// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv-reconcile: Rebuilds nested sub-flows from a flat flow log

mod diagnostics;
mod error;
mod load;
mod reconcile;
mod screenshots;
mod working_set;

pub use diagnostics::Diagnostic;
pub use error::ReconcileError;
pub use load::{load_path, load_str, parse_entries, sort_by_timestamp, LoadedLog};
pub use reconcile::{reconcile, reconcile_value, Reconciliation};
pub use screenshots::{inject_screenshots, screenshot_entry, timestamp_from_filename, FlowImage};
pub use working_set::WorkingSet;
