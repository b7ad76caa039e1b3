use crate::common::command::{bitlet_commit, init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn add_unchanged_tracked_file_stages_nothing(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();

    assert!(!dir.join(".bitlet/stages/master").exists());
    bitlet_commit(dir, "Nothing new")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
}
