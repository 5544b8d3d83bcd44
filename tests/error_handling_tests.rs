//! Error handling integration tests

mod common;

use common::{TestWorkspace, restructure_cmd};
use predicates::prelude::*;

#[test]
fn test_missing_input_file() {
    let workspace = TestWorkspace::new();

    restructure_cmd()
        .current_dir(&workspace.path)
        .args(["missing.yaml", "out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file missing.yaml"));

    assert!(!workspace.file_exists("out.yaml"));
}

#[test]
fn test_invalid_yaml_writes_nothing() {
    let workspace = TestWorkspace::new();
    workspace.write_file("in.yaml", "v1/Pod: [unclosed\n  kind: Pod\n");

    restructure_cmd()
        .current_dir(&workspace.path)
        .args(["in.yaml", "out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse YAML in in.yaml"));

    assert!(!workspace.file_exists("out.yaml"));
}

#[test]
fn test_top_level_sequence_is_rejected() {
    let workspace = TestWorkspace::new();
    workspace.write_file("in.yaml", "- kind: Pod\n  metadata:\n    name: a\n");

    restructure_cmd()
        .current_dir(&workspace.path)
        .args(["in.yaml", "out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected a mapping"));

    assert!(!workspace.file_exists("out.yaml"));
}

#[test]
fn test_unwritable_output_path() {
    let workspace = TestWorkspace::new();
    workspace.write_file("in.yaml", "v1/Pod: {kind: Pod}\n");

    restructure_cmd()
        .current_dir(&workspace.path)
        .args(["in.yaml", "no-such-dir/out.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write file"));
}

#[test]
fn test_malformed_entries_do_not_fail_the_run() {
    let workspace = TestWorkspace::new();
    workspace.write_file(
        "in.yaml",
        r#"v1/Pod:
  - 42
  - just text
  - metadata: {name: nameless}
  - kind: Pod
    metadata: {name: kept}
v1/Service: scalar-value
"#,
    );

    restructure_cmd()
        .current_dir(&workspace.path)
        .args(["in.yaml", "out.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restructured 1 resources"));

    assert_eq!(
        workspace.read_file("out.yaml"),
        "kind: Pod\nmetadata:\n  name: kept\n"
    );
}
