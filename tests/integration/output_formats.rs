// tests/integration/output_formats.rs
use predicates::prelude::*;
use serde_json::Value;

use crate::common::TempProject;

const PINNED: [&str; 4] = ["--revision", "abc1234", "--build-date", "2024-06-01"];

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    serde_json::from_slice(&assert.get_output().stdout).unwrap()
}

#[test]
fn json_output_describes_the_run() {
    let project = TempProject::with_manifest("1.2.3");
    project.write_file(".env", "APP_VERSION=old\n");

    let assert = project
        .command()
        .args(PINNED)
        .args(["--format", "json"])
        .assert()
        .success();
    let json = stdout_json(&assert);

    assert_eq!(json["ok"], true);
    assert_eq!(json["data"]["composite_version"], "1.2.3-abc1234");
    assert_eq!(json["data"]["declared_version"], "1.2.3");
    assert_eq!(json["data"]["revision"], "abc1234");
    assert_eq!(json["data"]["build_date"], "2024-06-01");
    assert_eq!(json["data"]["created"], false);
    assert_eq!(json["data"]["written"], true);
    assert_eq!(json["data"]["entries"]["version"]["action"], "replaced");
    assert_eq!(json["data"]["entries"]["build_date"]["action"], "appended");
    assert!(json.get("document").is_none());
}

#[test]
fn json_output_reports_revision_warning() {
    let project = TempProject::with_manifest("1.2.3");

    let assert = project
        .command()
        .args(["--format", "json", "--build-date", "2024-06-01"])
        .assert()
        .success();
    let json = stdout_json(&assert);

    assert_eq!(json["data"]["composite_version"], "1.2.3");
    assert!(json["data"]["revision"].is_null());
    assert!(json["data"]["revision_warning"].is_string());
}

#[test]
fn dry_run_prints_document_and_leaves_file() {
    let project = TempProject::with_manifest("1.2.3");
    project.write_file(".env", "FOO=bar\n");
    let expected = "FOO=bar\nAPP_VERSION=1.2.3-abc1234\nAPP_BUILD_DATE=2024-06-01\n";

    project
        .command()
        .args(PINNED)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(expected)
        .stderr(predicate::str::contains("dry run"));

    assert_eq!(project.read_file(".env"), "FOO=bar\n");
}

#[test]
fn dry_run_json_embeds_document() {
    let project = TempProject::with_manifest("1.2.3");

    let assert = project
        .command()
        .args(PINNED)
        .args(["--dry-run", "--format", "json"])
        .assert()
        .success();
    let json = stdout_json(&assert);

    assert_eq!(json["data"]["written"], false);
    assert_eq!(
        json["document"],
        "APP_VERSION=1.2.3-abc1234\nAPP_BUILD_DATE=2024-06-01"
    );
    assert!(!project.exists(".env"));
}

#[test]
fn crlf_files_keep_their_line_endings() {
    let project = TempProject::with_manifest("1.2.3");
    project.write_file(".env", "FOO=bar\r\nAPP_VERSION=0.1.0\r\n");

    project.command().args(PINNED).assert().success();

    assert_eq!(
        project.read_file(".env"),
        "FOO=bar\r\nAPP_VERSION=1.2.3-abc1234\r\nAPP_BUILD_DATE=2024-06-01"
    );
}

#[test]
fn mixed_line_endings_are_kept_per_line() {
    let project = TempProject::with_manifest("1.2.3");
    project.write_file(".env", "A=1\nB=2\r\nAPP_VERSION=0.1.0\r\nC=3\n");

    project.command().args(PINNED).assert().success();

    assert_eq!(
        project.read_file(".env"),
        "A=1\nB=2\r\nAPP_VERSION=1.2.3-abc1234\r\nC=3\nAPP_BUILD_DATE=2024-06-01"
    );
}
