use crate::common::command::{run_walli_diff, workspace_dir};
use crate::common::file::{FileSpec, write_file};
use crate::common::transcript;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

const OLDER: &str = "fn a() {\n    x();\n}\n\nfn b() {\n    y();\n}\n";
const NEWER: &str = "fn b() {\n    y();\n}\n\nfn a() {\n    x();\n}\n";

// keeps `fn a` in place and moves `fn b` above it
const MYERS_TRANSCRIPT: &[&str] = &[
    "diff old.rs new.rs",
    "+   fn b() {",
    "+       y();",
    "+   }",
    "+   ",
    "    fn a() {",
    "        x();",
    "-   }",
    "-   ",
    "-   fn b() {",
    "-       y();",
    "    }",
];

// anchors on the unique lines of `fn b` and moves `fn a` below it
const PATIENCE_TRANSCRIPT: &[&str] = &[
    "diff old.rs new.rs",
    "-   fn a() {",
    "-       x();",
    "-   }",
    "-   ",
    "    fn b() {",
    "        y();",
    "+   }",
    "+   ",
    "+   fn a() {",
    "+       x();",
    "    }",
];

#[rstest]
#[case(&[], None, MYERS_TRANSCRIPT)]
#[case(&["--algorithm", "myers"], None, MYERS_TRANSCRIPT)]
#[case(&["-a", "patience"], None, PATIENCE_TRANSCRIPT)]
#[case(&["-a", "Patience"], None, PATIENCE_TRANSCRIPT)]
#[case(&[], Some("patience"), PATIENCE_TRANSCRIPT)]
#[case(&[], Some("PATIENCE"), PATIENCE_TRANSCRIPT)]
#[case(&[], Some("myers"), MYERS_TRANSCRIPT)]
#[case(&["-a", "myers"], Some("patience"), MYERS_TRANSCRIPT)]
fn compare_files_with_selected_algorithm(
    workspace_dir: TempDir,
    #[case] flags: &[&str],
    #[case] env_algorithm: Option<&str>,
    #[case] expected_lines: &[&str],
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = workspace_dir;
    write_file(FileSpec::new(dir.path().join("old.rs"), OLDER.to_string()));
    write_file(FileSpec::new(dir.path().join("new.rs"), NEWER.to_string()));

    let mut args = flags.to_vec();
    args.extend(["old.rs", "new.rs"]);
    let mut cmd = run_walli_diff(dir.path(), &args);
    if let Some(algorithm) = env_algorithm {
        cmd.env("WALLI_DIFF_ALGORITHM", algorithm);
    }

    let output = cmd.assert().success();
    let actual_output = String::from_utf8(output.get_output().stdout.clone())?;

    assert_eq!(actual_output, transcript(expected_lines));

    Ok(())
}
