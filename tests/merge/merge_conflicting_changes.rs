use crate::common::command::{
    bitlet_commit, bitlet_merge, repository_dir, run_bitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// History:
///       R (a = "1")
///      / \
///     M   X
///  a="3"  a="2"
#[rstest]
fn merge_conflicting_changes(repository_dir: TempDir) {
    let dir = repository_dir.path();
    run_bitlet_command(dir, &["init"]).assert().success();

    write_file(FileSpec::new(dir.join("a"), "1\n".to_string()));
    write_file(FileSpec::new(dir.join("gone"), "keep me\n".to_string()));
    run_bitlet_command(dir, &["add", "a"]).assert().success();
    run_bitlet_command(dir, &["add", "gone"]).assert().success();
    bitlet_commit(dir, "Base").assert().success();

    run_bitlet_command(dir, &["branch", "X"]).assert().success();
    run_bitlet_command(dir, &["checkout", "X"]).assert().success();
    write_file(FileSpec::new(dir.join("a"), "2\n".to_string()));
    write_file(FileSpec::new(dir.join("gone"), "changed on X\n".to_string()));
    run_bitlet_command(dir, &["add", "a"]).assert().success();
    run_bitlet_command(dir, &["add", "gone"]).assert().success();
    bitlet_commit(dir, "Two").assert().success();

    run_bitlet_command(dir, &["checkout", "master"]).assert().success();
    write_file(FileSpec::new(dir.join("a"), "3\n".to_string()));
    run_bitlet_command(dir, &["add", "a"]).assert().success();
    run_bitlet_command(dir, &["rm", "gone"]).assert().success();
    bitlet_commit(dir, "Three").assert().success();

    bitlet_merge(dir, "X")
        .assert()
        .success()
        .stdout("Encountered a merge conflict.\n");

    assert_eq!(
        read_file(&dir.join("a")),
        "<<<<<<< HEAD\n3\n=======\n2\n>>>>>>>\n"
    );
    assert_eq!(
        read_file(&dir.join("gone")),
        "<<<<<<< HEAD\n=======\nchanged on X\n>>>>>>>\n"
    );

    let log = stdout_of(run_bitlet_command(dir, &["log"]));
    assert!(log.starts_with("===\ncommit "));
    assert!(log.lines().nth(2).unwrap().starts_with("Merge: "));
    assert!(log.contains("Merged X into master.\n"));

    // The conflicted contents are what the merge commit tracks
    run_bitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "=== Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n",
        ));
}
