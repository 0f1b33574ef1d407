use crate::common::command::{run_walli_diff, workspace_dir};
use crate::common::file::{delete_path, mirror_files, write_generated_files};
use assert_fs::TempDir;
use fake::Fake;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_identical_generated_projects_prints_nothing(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    let files_count = (1..=8).fake::<usize>();
    let older = write_generated_files(&dir.path().join("older"), files_count);
    mirror_files(&older, &dir.path().join("newer"));

    run_walli_diff(dir.path(), &["-a", "patience", "older", "newer"])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[rstest]
fn compare_generated_project_with_removed_file(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    let files_count = (2..=8).fake::<usize>();
    let older = write_generated_files(&dir.path().join("older"), files_count);
    let newer = mirror_files(&older, &dir.path().join("newer"));
    delete_path(&newer[0].path);

    let removed_lines = older[0].content.lines().count();

    let output = run_walli_diff(dir.path(), &["--stat", "older", "newer"])
        .assert()
        .success()
        .stdout(predicate::str::contains(" 1 file changed"));
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert!(actual_output.contains(&format!("{} deletion", removed_lines)));

    Ok(())
}
