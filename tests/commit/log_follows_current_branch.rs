use crate::common::command::{
    bitlet_commit, branch_tip, init_repository_dir, run_bitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn log_follows_current_branch(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = branch_tip(dir, "master");

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();
    bitlet_commit(dir, "Translate one").assert().success();
    let second = branch_tip(dir, "master");

    let log = stdout_of(run_bitlet_command(dir, &["log"]));
    let entries = log.split("===\n").skip(1).collect::<Vec<_>>();

    assert_eq!(entries.len(), 3);
    assert_eq!(
        entries[0],
        format!(
            "commit {}\nDate: Sun Jan 1 12:00:00 2023 +0000\nTranslate one\n\n",
            second
        )
    );
    assert_eq!(
        entries[1],
        format!(
            "commit {}\nDate: Sun Jan 1 12:00:00 2023 +0000\nInitial files\n\n",
            first
        )
    );
    assert!(entries[2].ends_with("initial commit\n\n"));
}
