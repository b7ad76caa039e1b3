use crate::common::command::{bitlet_commit, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn checkout_branch_with_untracked_obstruction_fails(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["branch", "topic"]).assert().success();
    run_bitlet_command(dir, &["checkout", "topic"]).assert().success();
    write_file(FileSpec::new(dir.join("shared.txt"), "from topic".to_string()));
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_bitlet_command(dir, &["add", "shared.txt"]).assert().success();
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();
    bitlet_commit(dir, "Topic adds shared").assert().success();

    run_bitlet_command(dir, &["checkout", "master"]).assert().success();
    write_file(FileSpec::new(dir.join("shared.txt"), "local".to_string()));

    run_bitlet_command(dir, &["checkout", "topic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "There is an untracked file in the way; delete it, or add and commit it first.",
        ));

    // Nothing moved: HEAD, the untracked file and the tracked files are intact
    assert_eq!(
        std::fs::read_to_string(dir.join(".bitlet/HEAD")).unwrap(),
        "ref: refs/heads/master"
    );
    assert_eq!(read_file(&dir.join("shared.txt")), "local");
    assert_eq!(read_file(&dir.join("1.txt")), "one");
}

#[rstest]
fn checkout_branch_with_identical_untracked_file_succeeds(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["branch", "topic"]).assert().success();
    run_bitlet_command(dir, &["checkout", "topic"]).assert().success();
    write_file(FileSpec::new(dir.join("shared.txt"), "same".to_string()));
    run_bitlet_command(dir, &["add", "shared.txt"]).assert().success();
    bitlet_commit(dir, "Topic adds shared").assert().success();

    run_bitlet_command(dir, &["checkout", "master"]).assert().success();
    write_file(FileSpec::new(dir.join("shared.txt"), "same".to_string()));

    run_bitlet_command(dir, &["checkout", "topic"]).assert().success();
}
