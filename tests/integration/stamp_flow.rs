// tests/integration/stamp_flow.rs
use chrono::Utc;
use predicates::prelude::*;

use crate::common::TempProject;

fn today_utc() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[test]
fn creates_missing_env_with_exactly_two_lines() {
    let project = TempProject::with_manifest("1.2.3");

    project
        .command()
        .args(["--revision", "abc1234", "--build-date", "2024-06-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Version set to 1.2.3-abc1234, build date set to 2024-06-01",
        ));

    assert_eq!(
        project.read_file(".env"),
        "APP_VERSION=1.2.3-abc1234\nAPP_BUILD_DATE=2024-06-01"
    );
}

#[test]
fn replaces_version_in_place_and_appends_date() {
    let project = TempProject::with_manifest("2.0.0");
    project.write_file(".env", "FOO=bar\nAPP_VERSION=0.0.1\n");

    project
        .command()
        .args(["--no-revision", "--build-date", "2024-06-01"])
        .assert()
        .success();

    assert_eq!(
        project.read_file(".env"),
        "FOO=bar\nAPP_VERSION=2.0.0\nAPP_BUILD_DATE=2024-06-01"
    );
}

#[test]
fn unrelated_lines_survive_and_second_run_is_identical() {
    let project = TempProject::with_manifest("1.0.0");
    project.write_file(
        ".env",
        "# frontend settings\n\
         APP_BUILD_DATE=1999-01-01\n\
         \n\
         API_URL=http://localhost:8080\n\
         APP_VERSION=0.9.0\n\
         APP_VERSION=stale\n",
    );

    let run = || {
        project
            .command()
            .args(["--revision", "c0ffee1", "--build-date", "2024-06-01"])
            .assert()
            .success();
        project.read_file(".env")
    };

    let first = run();
    assert_eq!(
        first,
        "# frontend settings\n\
         APP_BUILD_DATE=2024-06-01\n\
         \n\
         API_URL=http://localhost:8080\n\
         APP_VERSION=1.0.0-c0ffee1\n\
         APP_VERSION=stale"
    );
    assert_eq!(run(), first);
}

#[test]
fn missing_git_repository_degrades_with_warning() {
    let project = TempProject::with_manifest("1.2.3");
    let before = today_utc();

    project
        .command()
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "warning: Unable to get git commit hash",
        ))
        .stdout(predicate::str::contains("Version set to 1.2.3,"));

    let after = today_utc();
    let contents = project.read_file(".env");
    let mut lines = contents.lines();
    assert_eq!(lines.next(), Some("APP_VERSION=1.2.3"));
    let date_line = lines.next().unwrap();
    assert!(
        date_line == format!("APP_BUILD_DATE={before}")
            || date_line == format!("APP_BUILD_DATE={after}"),
        "{date_line}"
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn revision_warning_survives_unrelated_log_filters() {
    let project = TempProject::with_manifest("1.2.3");

    let assert = project
        .command()
        .env("RUST_LOG", "hyper=info")
        .args(["--build-date", "2024-06-01"])
        .assert()
        .success()
        .stdout("Version set to 1.2.3, build date set to 2024-06-01\n");

    let output = assert.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let warnings = stderr.matches("Unable to get git commit hash").count();
    assert_eq!(warnings, 1, "{stderr}");
    assert!(stderr.starts_with("warning: "), "{stderr}");
}

#[test]
fn environment_overrides_pin_revision_and_date() {
    let project = TempProject::with_manifest("4.5.6");

    project
        .command()
        .env("ENVSTAMP_REVISION", "1a2b3c4")
        .env("ENVSTAMP_BUILD_DATE", "2030-12-24")
        .assert()
        .success();

    assert_eq!(
        project.read_file(".env"),
        "APP_VERSION=4.5.6-1a2b3c4\nAPP_BUILD_DATE=2030-12-24"
    );
}

#[test]
fn custom_keys_paths_and_yaml_manifest() {
    let project = TempProject::new();
    let chart = "apiVersion: v2\nname: web\nversion: 0.7.0\n";
    project.write_file("chart/Chart.yaml", chart);
    project.write_file("frontend/.env.production", "VITE_API=/api\n");

    project
        .command()
        .args([
            "--manifest",
            "chart/Chart.yaml",
            "--output",
            "frontend/.env.production",
            "--version-key",
            "VITE_APP_VERSION",
            "--date-key",
            "VITE_APP_BUILD_DATE",
            "--revision",
            "abcdef0",
            "--build-date",
            "2024-06-01",
        ])
        .assert()
        .success();

    assert_eq!(
        project.read_file("frontend/.env.production"),
        "VITE_API=/api\nVITE_APP_VERSION=0.7.0-abcdef0\nVITE_APP_BUILD_DATE=2024-06-01"
    );
}

#[test]
fn revision_comes_from_git_when_available() {
    let project = TempProject::with_manifest("1.0.0");
    let git = |args: &[&str]| {
        std::process::Command::new("git")
            .args(args)
            .current_dir(project.path())
            .env("GIT_CEILING_DIRECTORIES", project.path())
            .output()
    };

    // Skip quietly on machines without git.
    let Ok(version) = git(&["--version"]) else {
        return;
    };
    if !version.status.success() {
        return;
    }
    let identity = [
        "-c",
        "user.name=ci",
        "-c",
        "user.email=ci@example.com",
        "-c",
        "commit.gpgsign=false",
    ];
    let commit = [
        &identity[..],
        &["commit", "-q", "--allow-empty", "-m", "init"][..],
    ]
    .concat();
    for args in [&["init", "-q"][..], &commit[..]] {
        assert!(git(args).unwrap().status.success(), "git {args:?}");
    }
    let head = git(&["rev-parse", "--short", "HEAD"]).unwrap();
    let head = String::from_utf8(head.stdout).unwrap();
    let rev = head.trim();

    project
        .command()
        .args(["--build-date", "2024-06-01"])
        .assert()
        .success();

    assert_eq!(
        project.read_file(".env"),
        format!("APP_VERSION=1.0.0-{rev}\nAPP_BUILD_DATE=2024-06-01")
    );
}
