use crate::common::command::{init_repository_dir, run_bitlet_command};
use crate::common::file::{FileSpec, delete_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn report_every_section(init_repository_dir: TempDir) {
    let dir = init_repository_dir.path();

    run_bitlet_command(dir, &["branch", "topic"]).assert().success();

    write_file(FileSpec::new(dir.join("new.txt"), "staged".to_string()));
    run_bitlet_command(dir, &["add", "new.txt"]).assert().success();
    write_file(FileSpec::new(dir.join("new.txt"), "edited after add".to_string()));

    write_file(FileSpec::new(dir.join("1.txt"), "uno".to_string()));
    delete_file(&dir.join("a").join("2.txt"));
    write_file(FileSpec::new(dir.join("z").join("u.txt"), "untracked".to_string()));

    run_bitlet_command(dir, &["status"])
        .assert()
        .success()
        .stdout(
            "=== Branches ===\n*master\ntopic\n\n\
             === Staged Files ===\nnew.txt\n\n\
             === Removed Files ===\n\n\
             === Modifications Not Staged For Commit ===\n\
             1.txt (modified)\n\
             a/2.txt (deleted)\n\
             new.txt (modified)\n\n\
             === Untracked Files ===\nz/u.txt\n\n",
        );
}
