use crate::common::command::{run_walli_diff, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use crate::common::transcript;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn compare_with_missing_newer_file_shows_deletion(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("Old.cls"),
        "public class Old {\n}\n".to_string(),
    ));

    run_walli_diff(dir.path(), &["Old.cls", "Gone.cls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted file"))
        .stdout(predicate::str::ends_with(transcript(&[
            "-   public class Old {",
            "-   }",
        ])));

    Ok(())
}

#[rstest]
fn compare_with_missing_older_file_shows_insertion(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(
        dir.path().join("New.cls"),
        "public class New {\r\n}\r\n".to_string(),
    ));

    run_walli_diff(dir.path(), &["Missing.cls", "New.cls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("new file"))
        .stdout(predicate::str::ends_with(transcript(&[
            "+   public class New {",
            "+   }",
        ])));

    Ok(())
}

#[rstest]
fn compare_two_missing_files_fails(
    workspace_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_walli_diff(workspace_dir.path(), &["nope.txt", "neither.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("neither nope.txt nor neither.txt exists"));

    Ok(())
}
