use crate::common::command::{
    bitlet_commit, bitlet_merge, branch_tip, init_repository_dir, run_bitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn merge_fast_forward(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["branch", "topic"]).assert().success();
    run_bitlet_command(dir, &["checkout", "topic"]).assert().success();
    write_file(FileSpec::new(dir.join("4.txt"), "four".to_string()));
    run_bitlet_command(dir, &["add", "4.txt"]).assert().success();
    run_bitlet_command(dir, &["rm", "1.txt"]).assert().success();
    bitlet_commit(dir, "Topic work").assert().success();
    let topic_tip = branch_tip(dir, "topic");

    run_bitlet_command(dir, &["checkout", "master"]).assert().success();
    let commits_before = stdout_of(run_bitlet_command(dir, &["global-log"]))
        .matches("===\n")
        .count();

    bitlet_merge(dir, "topic")
        .assert()
        .success()
        .stdout("Current branch fast-forwarded.\n");

    assert_eq!(branch_tip(dir, "master"), topic_tip);
    assert_eq!(read_file(&dir.join("4.txt")), "four");
    assert!(!dir.join("1.txt").exists());

    let commits_after = stdout_of(run_bitlet_command(dir, &["global-log"]))
        .matches("===\n")
        .count();
    assert_eq!(commits_after, commits_before);
}
