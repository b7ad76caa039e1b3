use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const COMMIT_DATE: &str = "2023-01-01 12:00:00 +0000";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Initialized repository whose master tip tracks `1.txt` ("one") and
/// `a/2.txt` ("two")
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_bitlet_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));

    bitlet_add(repository_dir.path(), &["1.txt", "a/2.txt"]);
    bitlet_commit(repository_dir.path(), "Initial files")
        .assert()
        .success();

    repository_dir
}

pub fn run_bitlet_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("bitlet").expect("Failed to find bitlet binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("BITLET_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn bitlet_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_bitlet_command(dir, &["commit", "-m", message]);
    cmd.env("BITLET_COMMIT_DATE", COMMIT_DATE);
    cmd
}

pub fn bitlet_add(dir: &Path, files: &[&str]) {
    for file in files {
        run_bitlet_command(dir, &["add", file]).assert().success();
    }
}

pub fn bitlet_merge(dir: &Path, branch: &str) -> Command {
    let mut cmd = run_bitlet_command(dir, &["merge", branch]);
    cmd.env("BITLET_COMMIT_DATE", COMMIT_DATE);
    cmd
}

/// Full id the given branch points at
pub fn branch_tip(dir: &Path, branch: &str) -> String {
    std::fs::read_to_string(dir.join(".bitlet/refs/heads").join(branch))
        .expect("Failed to read branch ref")
        .trim()
        .to_string()
}

pub fn stdout_of(mut cmd: Command) -> String {
    let output = cmd.output().expect("Failed to run bitlet");
    assert!(output.status.success(), "bitlet failed: {:?}", output);
    String::from_utf8(output.stdout).expect("stdout is not valid UTF-8")
}
