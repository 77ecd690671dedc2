// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn extracts_flow_and_directory() {
    let info = TestPathInfo::from_path("/home/ci/.maestro/tests/2024-12-04_115429/commands-(login).json");
    assert_eq!(info.flow_name, "login");
    assert_eq!(info.directory, "/home/ci/.maestro/tests/2024-12-04_115429");
}

#[test]
fn flow_names_may_contain_spaces_and_dots() {
    let info = TestPathInfo::from_path("/runs/a/commands-(Checkout flow.v2).json");
    assert_eq!(info.flow_name, "Checkout flow.v2");
    assert_eq!(info.directory, "/runs/a");
}

#[yare::parameterized(
    empty        = { "" },
    other_json   = { "/runs/a/maestro.log.json" },
    no_directory = { "commands-(login).json" },
    wrong_suffix = { "/runs/a/commands-(login).json.bak" },
)]
fn unrecognised_paths_yield_empty_info(path: &str) {
    assert_eq!(TestPathInfo::from_path(path), TestPathInfo::default());
}

#[yare::parameterized(
    log      = { "commands-(login).json", true },
    nested   = { "a/b/commands-(x y).json", true },
    image    = { "screenshot-❌-1733338587084-(login).png", false },
    metadata = { "metadata.json", false },
)]
fn detects_commands_logs(path: &str, expected: bool) {
    assert_eq!(TestPathInfo::is_commands_log(Path::new(path)), expected);
}
