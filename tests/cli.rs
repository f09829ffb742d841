use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_help_runs() {
    let mut cmd = Command::cargo_bin("orf2jpg").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--directory"))
        .stdout(predicate::str::contains("--outputDirectory"));
}

#[test]
fn short_help_runs() {
    let mut cmd = Command::cargo_bin("orf2jpg").unwrap();
    cmd.arg("-h").assert().success();
}

#[test]
fn version_is_semver_like() {
    let ver = env!("CARGO_PKG_VERSION");
    assert!(ver.split('.').count() >= 2);

    let mut cmd = Command::cargo_bin("orf2jpg").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(ver));
}

#[test]
fn missing_directory_flag_prints_usage() {
    let mut cmd = Command::cargo_bin("orf2jpg").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--directory"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn nonexistent_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("orf2jpg").unwrap();
    cmd.arg("-d")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn file_as_directory_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("a.ORF");
    std::fs::write(&file, b"raw").unwrap();
    let mut cmd = Command::cargo_bin("orf2jpg").unwrap();
    cmd.arg("-d")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}
