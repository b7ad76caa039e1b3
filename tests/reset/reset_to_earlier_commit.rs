use crate::common::command::{
    bitlet_commit, branch_tip, init_repository_dir, run_bitlet_command, stdout_of,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn reset_to_earlier_commit(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    let first = branch_tip(dir, "master");

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(dir.join("b").join("3.txt"), "three".to_string()));
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();
    run_bitlet_command(dir, &["add", "b/3.txt"]).assert().success();
    bitlet_commit(dir, "Second").assert().success();
    let second = branch_tip(dir, "master");

    write_file(FileSpec::new(dir.join("c.txt"), "pending".to_string()));
    run_bitlet_command(dir, &["add", "c.txt"]).assert().success();

    run_bitlet_command(dir, &["reset", &first[..10]])
        .assert()
        .success();

    assert_eq!(branch_tip(dir, "master"), first);
    assert_eq!(read_file(&dir.join("1.txt")), "one");
    assert!(!dir.join("b").exists());
    assert!(!dir.join(".bitlet/stages/master").exists());
    // The pending file was never tracked, so it is left in place
    assert_eq!(read_file(&dir.join("c.txt")), "pending");

    let log = stdout_of(run_bitlet_command(dir, &["log"]));
    assert!(!log.contains(&second));

    // The abandoned commit is still reachable by id
    run_bitlet_command(dir, &["reset", &second])
        .assert()
        .success();
    assert_eq!(read_file(&dir.join("b").join("3.txt")), "three");
}

#[rstest]
#[case::unknown("0123456789")]
#[case::too_short("ab")]
fn reset_to_unknown_commit_fails(init_repository_dir: TempDir, #[case] commit_id: &str) {
    run_bitlet_command(init_repository_dir.path(), &["reset", commit_id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No commit with that id exists."));
}
