use crate::common::command::{project_dirs, run_walli_diff};
use crate::common::transcript;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::{Path, PathBuf};

#[rstest]
fn compare_directories_with_stat_flag(
    project_dirs: (TempDir, PathBuf, PathBuf),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, _, _) = project_dirs;

    let output = run_walli_diff(dir.path(), &["--stat", "older", "newer"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    let newer = Path::new("newer");
    let lines = [
        format!(
            " {} | 1 insertion(+), 1 deletion(-)",
            newer.join("classes").join("Contact.cls").display()
        ),
        format!(
            " {} | 0 insertions(+), 2 deletions(-)",
            newer.join("pages").join("Legacy.page").display()
        ),
        format!(
            " {} | 2 insertions(+), 0 deletions(-)",
            newer.join("triggers").join("Lead.trigger").display()
        ),
        " 3 files changed, 3 insertions(+), 3 deletions(-)".to_string(),
    ];
    let expected_output = transcript(&lines.iter().map(String::as_str).collect::<Vec<_>>());
    assert_eq!(actual_output, expected_output);

    Ok(())
}
