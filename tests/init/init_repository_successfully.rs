use crate::common::command::{repository_dir, run_bitlet_command, stdout_of};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    run_bitlet_command(dir, &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty bitlet repository in .+\.bitlet\n$",
        )?);

    assert!(dir.join(".bitlet/objects").is_dir());
    assert!(dir.join(".bitlet/stages").is_dir());
    assert_eq!(
        std::fs::read_to_string(dir.join(".bitlet/HEAD"))?,
        "ref: refs/heads/master"
    );

    let log = stdout_of(run_bitlet_command(dir, &["log"]));
    assert!(log.starts_with("===\ncommit "));
    assert!(log.ends_with("Date: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n"));

    Ok(())
}

#[rstest]
fn root_commit_id_is_identical_across_repositories() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    run_bitlet_command(first.path(), &["init"]).assert().success();
    run_bitlet_command(second.path(), &["init"]).assert().success();

    assert_eq!(
        crate::common::command::branch_tip(first.path(), "master"),
        crate::common::command::branch_tip(second.path(), "master")
    );

    Ok(())
}
