use crate::common::command::{bitlet_commit, branch_tip, init_repository_dir};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn commit_without_changes_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let tip = branch_tip(dir, "master");

    bitlet_commit(dir, "Empty")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No changes added to the commit."));

    assert_eq!(branch_tip(dir, "master"), tip);
}
