// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fv_core::test_support::{entry, input_text, tap};

#[test]
fn find_skips_consumed_entries() {
    let log = vec![entry(tap("A"), 1), entry(input_text("x"), 2), entry(tap("A"), 3)];
    let mut set = WorkingSet::new(&log);

    assert_eq!(set.find(&tap("A")), Some(0));
    set.consume(0);
    assert_eq!(set.find(&tap("A")), Some(2));
    set.consume(2);
    assert_eq!(set.find(&tap("A")), None);
    assert_eq!(set.remaining(), 1);
}

#[test]
fn find_requires_equal_payload() {
    let log = vec![entry(tap("A"), 1)];
    let set = WorkingSet::new(&log);
    assert_eq!(set.find(&tap("B")), None);
    assert_eq!(set.find(&input_text("A")), None);
}

#[test]
fn out_of_range_indices_read_as_consumed() {
    let log = vec![entry(tap("A"), 1)];
    let mut set = WorkingSet::new(&log);
    set.consume(7);
    assert!(set.is_consumed(7));
    assert!(!set.is_consumed(0));
    assert!(set.get(7).is_none());
}

#[test]
fn borrowed_entries_are_untouched() {
    let log = vec![entry(tap("A"), 1)];
    let mut set = WorkingSet::new(&log);
    set.consume(0);
    assert_eq!(set.len(), 1);
    assert_eq!(set.get(0), Some(&log[0]));
}
