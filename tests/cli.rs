//! Command-line behavior of the `artifact-version` binary

mod helper;

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use helper::ArchiveBuilder;

const SERVICE: &str = "com/example/core/Service.class";

fn run(args: &[&str], data_home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_artifact-version"))
        .args(args)
        .env("XDG_DATA_HOME", data_home)
        .env_remove("ARTIFACT_VERSION_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn two_jars(temp_dir: &TempDir) -> (PathBuf, PathBuf) {
    let first = ArchiveBuilder::new()
        .with_resource(SERVICE)
        .write(&temp_dir.path().join("lib/example-core-1.2.3.jar"));
    let second = ArchiveBuilder::new()
        .with_resource(SERVICE)
        .write(&temp_dir.path().join("app/lib/example-core-1.3.0.jar"));
    (first, second)
}

#[test]
fn check_strict_fails_on_duplicate() {
    let temp_dir = TempDir::new().unwrap();
    let (first, second) = two_jars(&temp_dir);

    let output = run(
        &[
            "check",
            "com.example.core.Service",
            "--strict",
            "-p",
            first.to_str().unwrap(),
            "-p",
            second.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Duplicate resource com/example/core/Service.class in 2 locations"));
}

#[test]
fn check_strict_succeeds_with_single_location() {
    let temp_dir = TempDir::new().unwrap();
    let (first, _) = two_jars(&temp_dir);

    let output = run(
        &["check", "com.example.core.Service", "--strict", "-p", first.to_str().unwrap()],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        format!("{}!/{}", first.display(), SERVICE)
    );
}

#[test]
fn check_without_strict_reports_duplicate_and_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let (first, second) = two_jars(&temp_dir);

    let output = run(
        &[
            "check",
            "--resource",
            SERVICE,
            "-p",
            first.to_str().unwrap(),
            "-p",
            second.to_str().unwrap(),
        ],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 2);
}

#[test]
fn version_prints_record_with_source() {
    let temp_dir = TempDir::new().unwrap();
    let (first, _) = two_jars(&temp_dir);

    let output = run(
        &["version", "com.example.core.Service", "-p", first.to_str().unwrap()],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1.2.3 (inferred)");
}

#[test]
fn status_prints_normalized_semver() {
    let temp_dir = TempDir::new().unwrap();
    let core = ArchiveBuilder::new()
        .with_manifest("Manifest-Version: 1.0\nImplementation-Version: 2.1\n")
        .with_resource(SERVICE)
        .write(&temp_dir.path().join("lib/example-core.jar"));
    let config = temp_dir.path().join("artifact-version.json");
    std::fs::write(
        &config,
        serde_json::json!({
            "identity": "com.example.core.Service",
            "catalog": { "lookupPath": [core] }
        })
        .to_string(),
    )
    .unwrap();

    let output = run(
        &["status", "--config", config.to_str().unwrap()],
        temp_dir.path(),
    );

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("version: 2.1 (explicit)"));
    assert!(stdout.contains("semver: 2.1.0"));
}

#[test]
fn log_file_without_value_writes_to_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let (first, _) = two_jars(&temp_dir);

    let output = run(
        &[
            "version",
            "com.example.core.Service",
            "-p",
            first.to_str().unwrap(),
            "--log-file",
        ],
        temp_dir.path(),
    );

    assert!(output.status.success());
    assert!(
        temp_dir
            .path()
            .join("artifact-version/artifact-version.log")
            .is_file()
    );
}
