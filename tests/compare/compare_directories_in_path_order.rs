use crate::common::command::{project_dirs, run_walli_diff};
use crate::common::transcript;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::{Path, PathBuf};

fn header(file: &Path) -> String {
    let line = format!(
        "diff {} {}",
        Path::new("older").join(file).display(),
        Path::new("newer").join(file).display()
    );
    transcript(&[line.as_str()])
}

#[rstest]
fn compare_directories_in_path_order(
    project_dirs: (TempDir, PathBuf, PathBuf),
) -> Result<(), Box<dyn std::error::Error>> {
    let (dir, _, _) = project_dirs;

    let output = run_walli_diff(dir.path(), &["older", "newer"])
        .assert()
        .success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    let expected_output = [
        header(&Path::new("classes").join("Contact.cls")),
        transcript(&[
            "    public class Contact {",
            "-       String name;",
            "+       String email;",
            "    }",
        ]),
        header(&Path::new("pages").join("Legacy.page")),
        transcript(&["deleted file"]),
        transcript(&["-   <apex:page>", "-   </apex:page>"]),
        header(&Path::new("triggers").join("Lead.trigger")),
        transcript(&["new file"]),
        transcript(&["+   trigger Lead on Lead (before insert) {", "+   }"]),
    ]
    .concat();

    assert_eq!(actual_output, expected_output);
    assert!(!actual_output.contains("Account.cls"));

    Ok(())
}
