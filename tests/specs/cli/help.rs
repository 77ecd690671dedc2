//! CLI help output specs
//!
//! Verify help text and usage errors.

use crate::prelude::*;

#[test]
fn fv_help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("show").stdout_has("list");
}

#[test]
fn fv_no_args_is_a_usage_error() {
    cli().exits(2).stderr_has("Usage:");
}

#[test]
fn fv_show_help_lists_flags() {
    cli()
        .args(&["show", "--help"])
        .passes()
        .stdout_has("--screenshots")
        .stdout_has("--verbose")
        .stdout_has("--output");
}

#[test]
fn fv_unknown_output_format_is_a_usage_error() {
    cli().args(&["list", ".", "--output", "yaml"]).exits(2);
}

#[test]
fn fv_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
