//! Integration tests for jampzip-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn jampzip_cmd() -> Command {
    cargo_bin_cmd!("jampzip")
}

/// Creates a workspace with a small tree under `project/`.
fn workspace() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    let project = temp.path().join("project");
    fs::create_dir_all(project.join("src")).unwrap();
    fs::create_dir_all(project.join("assets/empty")).unwrap();
    fs::write(project.join("README.md"), "# readme").unwrap();
    fs::write(project.join("src/main.txt"), "main").unwrap();
    temp
}

fn zip_project(dir: &Path, name: &str) {
    jampzip_cmd()
        .current_dir(dir)
        .args(["zip", "-C", "project", name])
        .assert()
        .success();
}

#[test]
fn test_version_flag() {
    jampzip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("jampzip"));
}

#[test]
fn test_help_lists_commands() {
    jampzip_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("zip"))
        .stdout(predicate::str::contains("unzip"));
}

#[test]
fn test_zip_current_directory() {
    let temp = workspace();
    let project = temp.path().join("project");

    jampzip_cmd()
        .current_dir(&project)
        .args(["zip", "bundle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zip file created: bundle.zip"));

    let file = fs::File::open(project.join("bundle.zip")).unwrap();
    let archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<_> = archive.file_names().map(str::to_string).collect();
    names.sort();
    assert_eq!(names, vec!["README.md", "assets/empty/", "src/main.txt"]);
}

#[test]
fn test_zip_keeps_existing_extension() {
    let temp = workspace();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "--source", "project", "named.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Zip file created: named.zip"));

    assert!(temp.path().join("named.zip").is_file());
    assert!(!temp.path().join("named.zip.zip").exists());
}

#[test]
fn test_zip_level_zero_stores_entries() {
    let temp = workspace();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "-l", "0", "-C", "project", "stored"])
        .assert()
        .success();

    let file = fs::File::open(temp.path().join("stored.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let entry = archive.by_name("README.md").unwrap();
    assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
}

#[test]
fn test_zip_refuses_existing_output() {
    let temp = workspace();
    fs::write(temp.path().join("taken.zip"), "keep").unwrap();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "-C", "project", "taken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(temp.path().join("taken.zip")).unwrap(), "keep");
}

#[test]
fn test_zip_missing_source() {
    let temp = TempDir::new().unwrap();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "-C", "nowhere", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nowhere"));

    assert!(!temp.path().join("out.zip").exists());
}

#[test]
fn test_zip_with_password_encrypts() {
    let temp = workspace();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "-p", "-C", "project", "locked"])
        .write_stdin("hunter2\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter a password: "));

    let file = fs::File::open(temp.path().join("locked.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let index = archive.index_for_name("README.md").unwrap();
    assert!(archive.by_index_raw(index).unwrap().encrypted());
}

#[test]
fn test_unzip_round_trip() {
    let temp = workspace();
    zip_project(temp.path(), "copy");

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "copy.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracting"))
        .stdout(predicate::str::contains("Extraction completed."));

    let copy = temp.path().join("copy");
    assert_eq!(fs::read_to_string(copy.join("README.md")).unwrap(), "# readme");
    assert_eq!(fs::read_to_string(copy.join("src/main.txt")).unwrap(), "main");
    assert!(copy.join("assets/empty").is_dir());
    assert!(temp.path().join("copy.zip").exists());
}

#[test]
fn test_unzip_delete_source() {
    let temp = workspace();
    zip_project(temp.path(), "gone");

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "--delete", "gone.zip"])
        .assert()
        .success();

    assert!(!temp.path().join("gone.zip").exists());
    assert!(temp.path().join("gone/README.md").is_file());
}

#[test]
fn test_unzip_password_round_trip() {
    let temp = workspace();
    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "-p", "-C", "project", "vault"])
        .write_stdin("s3cret\n")
        .assert()
        .success();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "-p", "vault.zip"])
        .write_stdin("s3cret\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter password: "));

    assert_eq!(
        fs::read_to_string(temp.path().join("vault/src/main.txt")).unwrap(),
        "main"
    );
}

#[test]
fn test_unzip_encrypted_without_password_fails() {
    let temp = workspace();
    jampzip_cmd()
        .current_dir(temp.path())
        .args(["zip", "-p", "-C", "project", "vault"])
        .write_stdin("s3cret\n")
        .assert()
        .success();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "-d", "vault.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));

    assert!(temp.path().join("vault.zip").exists());
}

#[test]
fn test_unzip_non_empty_destination() {
    let temp = workspace();
    zip_project(temp.path(), "project_copy");
    fs::create_dir(temp.path().join("project_copy")).unwrap();
    fs::write(temp.path().join("project_copy/keep.txt"), "mine").unwrap();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "project_copy.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not empty"));

    assert_eq!(
        fs::read_to_string(temp.path().join("project_copy/keep.txt")).unwrap(),
        "mine"
    );
    assert!(!temp.path().join("project_copy/README.md").exists());
}

#[test]
fn test_unzip_unsupported_format() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.rar"), "rar").unwrap();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "notes.rar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_unzip_missing_archive() {
    let temp = TempDir::new().unwrap();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["unzip", "absent.tar.gz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read file"));
}

#[test]
fn test_quiet_suppresses_output() {
    let temp = workspace();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["--quiet", "zip", "-C", "project", "silent"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_reports_totals() {
    let temp = workspace();

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["--verbose", "zip", "-C", "project", "detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries:    3"));

    jampzip_cmd()
        .current_dir(temp.path())
        .args(["--verbose", "unzip", "detailed.zip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items:"));
}

#[test]
fn test_zip_json_output() {
    let temp = workspace();

    let output = jampzip_cmd()
        .current_dir(temp.path())
        .args(["--json", "zip", "-C", "project", "data"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["operation"], "zip");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["files_added"], 2);
    assert_eq!(json["data"]["directories_added"], 1);
    assert_eq!(json["data"]["encrypted"], false);
}

#[test]
fn test_unzip_json_output() {
    let temp = workspace();
    zip_project(temp.path(), "data");

    let output = jampzip_cmd()
        .current_dir(temp.path())
        .args(["--json", "unzip", "-d", "data.zip"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["operation"], "unzip");
    assert_eq!(json["data"]["format"], "zip");
    assert_eq!(json["data"]["files_extracted"], 2);
    assert_eq!(json["data"]["zip_status"], "No error");
    assert_eq!(json["data"]["source_deleted"], true);
}

#[test]
fn test_json_error_output() {
    let temp = TempDir::new().unwrap();

    let output = jampzip_cmd()
        .current_dir(temp.path())
        .args(["--json", "unzip", "missing.zip"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).expect("invalid JSON output");
    assert_eq!(json["status"], "error");
    assert!(json["error"].as_str().unwrap().contains("missing.zip"));
}

#[test]
fn test_completion_bash() {
    jampzip_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("jampzip"));
}
