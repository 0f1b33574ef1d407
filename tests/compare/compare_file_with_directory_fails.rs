use crate::common::command::{run_walli_diff, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_file_with_directory_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("project").join("a.txt"),
        "a".to_string(),
    ));
    write_file(FileSpec::new(dir.path().join("a.txt"), "a".to_string()));

    run_walli_diff(dir.path(), &["a.txt", "project"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot compare a file with a directory",
        ));

    Ok(())
}

#[rstest]
fn compare_with_unknown_algorithm_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(dir.path().join("a.txt"), "a".to_string()));

    run_walli_diff(dir.path(), &["--algorithm", "histogram", "a.txt", "a.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("histogram"));

    Ok(())
}
