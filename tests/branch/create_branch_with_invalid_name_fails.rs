use crate::common::command::{init_repository_dir, run_bitlet_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case::leading_dot(".hidden")]
#[case::double_dot("a..b")]
#[case::trailing_lock("topic.lock")]
#[case::trailing_slash("topic/")]
fn create_branch_with_invalid_name_fails(init_repository_dir: TempDir, #[case] name: &str) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["branch", name])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid branch name"));
}
