//! `fv list` specs

use crate::prelude::*;
use serde_json::json;

#[test]
fn list_summarizes_every_flow() {
    let project = Project::empty();
    project.log("run-1/commands-(login.yaml).json", &json!([done(tap("A"), 1), done(tap("B"), 2)]));
    project.log("run-2/commands-(checkout.yaml).json", &json!([failed(tap("Pay"), 1, "timeout")]));
    project.file("run-2/maestro.log", "noise");

    cli()
        .args(&["list"])
        .arg(project.path())
        .passes()
        .stdout_has("login.yaml")
        .stdout_has("checkout.yaml")
        .stdout_has("2/2")
        .stdout_has("1 failed, 0 skipped")
        .stdout_has("2 flow log(s): FAILED");
}

#[test]
fn list_json_reports_flow_status() {
    let project = Project::empty();
    project.log("commands-(ok.yaml).json", &json!([done(tap("A"), 1)]));

    let run = cli().args(&["list", "-o", "json"]).arg(project.path()).passes();
    let report = run.stdout_json();

    assert_eq!(report["status"], json!("PASSED"));
    assert_eq!(report["flows"][0]["flow"], json!("ok.yaml"));
    assert_eq!(report["flows"][0]["counts"]["total"], json!(1));
}

#[test]
fn list_empty_directory_says_so() {
    let project = Project::empty();
    cli().args(&["list"]).arg(project.path()).passes().stderr_has("No flow logs found");
}

#[test]
fn list_missing_directory_exits_one() {
    let project = Project::empty();
    cli().args(&["list"]).arg(project.path().join("nope")).exits(1).stderr_has("is not a directory");
}
