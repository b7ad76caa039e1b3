use crate::common::command::{
    bitlet_commit, branch_tip, init_repository_dir, run_bitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn global_log_lists_every_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let master_tip = branch_tip(dir, "master");

    run_bitlet_command(dir, &["branch", "side"]).assert().success();
    run_bitlet_command(dir, &["checkout", "side"]).assert().success();
    write_file(FileSpec::new(dir.join("side.txt"), "side".to_string()));
    run_bitlet_command(dir, &["add", "side.txt"]).assert().success();
    bitlet_commit(dir, "Side work").assert().success();
    let side_tip = branch_tip(dir, "side");

    run_bitlet_command(dir, &["checkout", "master"]).assert().success();

    let log = stdout_of(run_bitlet_command(dir, &["log"]));
    assert!(!log.contains(&side_tip));

    let global_log = stdout_of(run_bitlet_command(dir, &["global-log"]));
    assert_eq!(global_log.matches("===\ncommit ").count(), 3);
    assert!(global_log.contains(&format!("commit {}\n", side_tip)));
    assert!(global_log.contains(&format!("commit {}\n", master_tip)));
    assert!(global_log.contains("initial commit\n"));
}
