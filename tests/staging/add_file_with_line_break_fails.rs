use crate::common::command::{bitlet_commit, branch_tip, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[cfg(unix)]
#[rstest]
fn add_file_with_line_break_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let tip = branch_tip(dir, "master");
    write_file(FileSpec::new(dir.join("a\nb"), "split".to_string()));

    run_bitlet_command(dir, &["add", "a\nb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be recorded."));

    bitlet_commit(dir, "should not happen")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No changes added to the commit."));
    assert_eq!(branch_tip(dir, "master"), tip);

    run_bitlet_command(dir, &["log"]).assert().success();
}
