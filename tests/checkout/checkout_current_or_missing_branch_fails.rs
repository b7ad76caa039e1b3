use crate::common::command::{init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::current_branch(&["checkout", "master"], "No need to checkout the current branch.")]
#[case::missing_branch(&["checkout", "ghost"], "A branch with that name does not exist.")]
#[case::no_operands(&["checkout"], "Incorrect operands.")]
fn checkout_current_or_missing_branch_fails(
    init_repository_dir: TempDir,
    #[case] args: &[&str],
    #[case] message: &str,
) {
    run_bitlet_command(init_repository_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(message));
}
