use crate::common::command::{
    bitlet_commit, branch_tip, init_repository_dir, run_bitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn remove_branch_keeps_its_commits(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["branch", "topic"]).assert().success();
    run_bitlet_command(dir, &["checkout", "topic"]).assert().success();
    write_file(FileSpec::new(dir.join("topic.txt"), "topic".to_string()));
    run_bitlet_command(dir, &["add", "topic.txt"]).assert().success();
    bitlet_commit(dir, "Topic work").assert().success();
    let topic_tip = branch_tip(dir, "topic");
    run_bitlet_command(dir, &["checkout", "master"]).assert().success();

    run_bitlet_command(dir, &["rm-branch", "topic"])
        .assert()
        .success();

    assert!(!dir.join(".bitlet/refs/heads/topic").exists());
    let global_log = stdout_of(run_bitlet_command(dir, &["global-log"]));
    assert!(global_log.contains(&topic_tip));
}

#[rstest]
fn remove_current_branch_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["rm-branch", "master"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot remove the current branch."));

    assert!(dir.join(".bitlet/refs/heads/master").exists());
}

#[rstest]
fn remove_missing_branch_fails(init_repository_dir: TempDir) {
    run_bitlet_command(init_repository_dir.path(), &["rm-branch", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "A branch with that name does not exist.",
        ));
}
