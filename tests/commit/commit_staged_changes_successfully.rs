use crate::common::command::{bitlet_commit, branch_tip, init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn commit_staged_changes_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let previous_tip = branch_tip(dir, "master");

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    write_file(FileSpec::new(dir.join("b").join("3.txt"), "three".to_string()));
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();
    run_bitlet_command(dir, &["add", "b/3.txt"]).assert().success();
    run_bitlet_command(dir, &["rm", "a/2.txt"]).assert().success();

    bitlet_commit(dir, "Second commit\n\nWith a body")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\[master [0-9a-f]{7}\] Second commit\n$")?);

    let tip = branch_tip(dir, "master");
    assert_ne!(tip, previous_tip);
    assert!(!dir.join(".bitlet/stages/master").exists());

    // The working state is clean against the new tip
    run_bitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\n\n=== Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\n=== Untracked Files ===\n\n",
        ));

    // The previous tip still restores the removed file
    run_bitlet_command(dir, &["checkout", &previous_tip[..8], "--", "a/2.txt"])
        .assert()
        .success();
    assert_eq!(std::fs::read_to_string(dir.join("a").join("2.txt"))?, "two");

    Ok(())
}
