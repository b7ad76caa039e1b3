use crate::common::command::{init_repository_dir, run_bitlet_command, stdout_of};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn add_modified_file_stages_it_once(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));

    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();

    let status = stdout_of(run_bitlet_command(dir, &["status"]));
    assert_eq!(
        status,
        "=== Branches ===\n*master\n\n\
         === Staged Files ===\n1.txt\n\n\
         === Removed Files ===\n\n\
         === Modifications Not Staged For Commit ===\n\n\
         === Untracked Files ===\n\n"
    );

    // Reverting the working copy and adding again drops the stage entry
    write_file(FileSpec::new(dir.join("1.txt"), "one".to_string()));
    run_bitlet_command(dir, &["add", "1.txt"]).assert().success();

    assert!(!dir.join(".bitlet/stages/master").exists());
}
