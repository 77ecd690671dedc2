//! `fv show` specs
//!
//! Sub-flow reconstruction, rendering, screenshots and input errors.

use crate::prelude::*;
use serde_json::json;
use similar_asserts::assert_eq;

fn login_log(project: &Project) -> std::path::PathBuf {
    project.log(
        "2024-12-04_115429/commands-(login.yaml).json",
        &json!([
            done(json!({ "launchAppCommand": { "appId": "com.example", "optional": false } }), 1_733_338_580_000),
            done(run_flow("enter-credentials.yaml", vec![tap("Email"), input_text("alice")]), 1_733_338_581_000),
            done(tap("Email"), 1_733_338_582_000),
            done(input_text("alice"), 1_733_338_583_000),
            failed(tap("Sign in"), 1_733_338_590_000, "Element not found: Text matching regex: Sign in"),
        ]),
    )
}

#[test]
fn show_nests_sub_flow_steps() {
    let project = Project::empty();
    let log = login_log(&project);

    cli()
        .args(&["show"])
        .arg(&log)
        .passes()
        .stdout_has("login.yaml  FAILED  4 passed, 1 failed, 0 skipped (5 total)")
        .stdout_has("✓ 00:01  Run Flow: enter-credentials.yaml")
        .stdout_has("  ✓ 00:02  Tap  Tap on \"Email\"")
        .stdout_has("  ✓ 00:03  Input Text  Text: \"alice\"")
        .stdout_has("✗ 00:10  Tap  Tap on \"Sign in\"")
        .stdout_has("    Element not found: Text matching regex: Sign in");
}

#[test]
fn show_json_restores_log_shape() {
    let project = Project::empty();
    let log = login_log(&project);

    let run = cli().args(&["show", "--output", "json"]).arg(&log).passes();
    let report = run.stdout_json();

    assert_eq!(report["flow"], json!("login.yaml"));
    assert_eq!(report["status"], json!("FAILED"));
    assert_eq!(report["commands"].as_array().map(Vec::len), Some(3));
    let sub_flow = &report["commands"][1]["command"]["runFlowCommand"];
    assert_eq!(sub_flow["flow"], json!("enter-credentials.yaml"));
    assert_eq!(sub_flow["commands"][0]["command"], tap("Email"));
    assert_eq!(sub_flow["commands"][1]["metadata"]["timestamp"], json!(1_733_338_583_000u64));
    assert!(report.get("diagnostics").is_none());
}

#[test]
fn show_verbose_reports_skipped_entries() {
    let project = Project::empty();
    let log = project.log(
        "commands-(a.yaml).json",
        &json!([done(tap("A"), 100), { "command": null }, done(run_flow("b.yaml", vec![tap("Missing")]), 200)]),
    );

    cli()
        .args(&["show", "--verbose"])
        .arg(&log)
        .passes()
        .stdout_has("diagnostic(s)")
        .stdout_has("entry 1: skipped malformed entry (missing command)")
        .stdout_has("dropped sub-flow b.yaml")
        .stdout_lacks("Run Flow");
}

#[test]
fn show_verbose_prints_stack_traces() {
    let project = Project::empty();
    let log = project.log(
        "commands-(a.yaml).json",
        &json!([{
            "command": tap("Pay"),
            "metadata": {
                "status": "FAILED", "timestamp": 100, "duration": 5,
                "error": {
                    "message": "Element not found",
                    "stackTrace": [{ "className": "maestro.Orchestra", "methodName": "tap",
                                     "fileName": "Orchestra.kt", "lineNumber": 88, "nativeMethod": false }]
                }
            }
        }]),
    );

    cli().args(&["show"]).arg(&log).passes().stdout_has("Element not found").stdout_lacks("Orchestra.kt");
    cli()
        .args(&["show", "--verbose"])
        .arg(&log)
        .passes()
        .stdout_has("at maestro.Orchestra.tap(Orchestra.kt:88)");
}

#[test]
fn show_keeps_entries_with_odd_field_values() {
    let project = Project::empty();
    let log = project.log(
        "commands-(a.yaml).json",
        &json!([
            done(run_flow("f.yaml", vec![tap("A")]), 100),
            { "command": tap("A"), "metadata": { "status": "COMPLETED", "timestamp": 150, "duration": null } },
            { "command": tap("B"), "metadata": { "status": "COMPLETED", "timestamp": 200.0, "duration": 3 } },
        ]),
    );

    let run = cli().args(&["show", "--verbose", "-o", "json"]).arg(&log).passes();
    let report = run.stdout_json();
    assert_eq!(report["commands"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["commands"][0]["command"]["runFlowCommand"]["commands"][0]["metadata"]["timestamp"], json!(150));
    assert_eq!(report["diagnostics"], json!([]));
}

#[test]
fn show_merges_screenshots_by_time() {
    let project = Project::empty();
    let log = login_log(&project);
    project.file("2024-12-04_115429/screenshot-❌-1733338590500-(login.yaml).png", "");
    project.file("2024-12-04_115429/screenshot-❌-1733338590500-(other.yaml).png", "");

    let run = cli().args(&["show", "--screenshots", "-o", "json"]).arg(&log).passes();
    let commands = run.stdout_json()["commands"].clone();

    assert_eq!(commands.as_array().map(Vec::len), Some(4));
    assert_eq!(commands[3]["metadata"]["timestamp"], json!(1_733_338_590_500u64));
    assert_eq!(commands[3]["metadata"]["duration"], json!(0));
    assert!(commands[3]["command"]["automaticScreenshotCommand"]["imagePath"]
        .as_str()
        .is_some_and(|p| p.ends_with("(login.yaml).png")));
}

#[test]
fn show_missing_file_exits_one() {
    let project = Project::empty();
    cli()
        .args(&["show"])
        .arg(project.path().join("commands-(nope).json"))
        .exits(1)
        .stderr_has("failed to read");
}

#[test]
fn show_non_array_log_exits_one() {
    let project = Project::empty();
    let log = project.file("commands-(x).json", r#"{"command": {}}"#);
    cli()
        .args(&["show"])
        .arg(&log)
        .exits(1)
        .stderr_has("flow log must be a JSON array, found object");
}
