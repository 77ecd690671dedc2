// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time formatting for step listings.

use chrono::{Local, TimeZone};

/// Position label for a step.
///
/// - no timestamp (0): `Step N` (1-based)
/// - with a run start: `MM:SS` since the start
/// - otherwise: local wall-clock `HH:MM:SS`
pub fn format_offset(timestamp: u64, index: usize, start: Option<u64>) -> String {
    if timestamp == 0 {
        return format!("Step {}", index + 1);
    }

    match start.filter(|s| *s != 0) {
        Some(start) => {
            let seconds = timestamp.saturating_sub(start) / 1000;
            format!("{:02}:{:02}", seconds / 60, seconds % 60)
        }
        None => match Local.timestamp_millis_opt(timestamp as i64).single() {
            Some(time) => time.format("%H:%M:%S").to_string(),
            None => format!("Step {}", index + 1),
        },
    }
}

/// Compact duration: `850ms`, `4.2s`, `3m 07s`.
pub fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.1}s", ms as f64 / 1000.0)
    } else {
        let secs = ms / 1000;
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
