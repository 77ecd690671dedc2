// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    at_start        = { 10_000, 10_000, "00:00" },
    seconds         = { 17_900, 10_000, "00:07" },
    minute_boundary = { 70_000, 10_000, "01:00" },
    minutes         = { 10_000 + 125_000, 10_000, "02:05" },
    long_run        = { 10_000 + 75 * 60_000, 10_000, "75:00" },
    before_start    = { 5_000, 10_000, "00:00" },
)]
fn relative_offsets(timestamp: u64, start: u64, expected: &str) {
    assert_eq!(format_offset(timestamp, 0, Some(start)), expected);
}

#[test]
fn missing_timestamp_falls_back_to_step_number() {
    assert_eq!(format_offset(0, 0, Some(1_000)), "Step 1");
    assert_eq!(format_offset(0, 4, None), "Step 5");
}

#[test]
fn absolute_time_without_start() {
    let label = format_offset(1_733_338_587_084, 0, None);
    // Local time zone varies; check the shape only.
    assert_eq!(label.len(), 8);
    assert_eq!(label.matches(':').count(), 2);
}

#[yare::parameterized(
    millis  = { 850,     "850ms" },
    seconds = { 4_200,   "4.2s" },
    minutes = { 187_000, "3m 07s" },
    zero    = { 0,       "0ms" },
)]
fn durations(ms: u64, expected: &str) {
    assert_eq!(format_duration_ms(ms), expected);
}
