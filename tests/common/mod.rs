//! Common test utilities for restructure-resources integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Build a command for the real restructure-resources binary
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn restructure_cmd() -> Command {
    Command::cargo_bin("restructure-resources").expect("binary should be built")
}

/// Scratch directory holding input and output files for one test
pub struct TestWorkspace {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Absolute path of a file inside the workspace
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Write a file in workspace
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let file_path = self.file(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.file(name)).expect("Failed to read file")
    }

    pub fn file_exists(&self, name: &str) -> bool {
        self.file(name).exists()
    }

    /// Copy a fixture from tests/common/fixtures into the workspace
    pub fn copy_fixture(&self, fixture_name: &str) -> PathBuf {
        let fixture_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("common")
            .join("fixtures")
            .join(fixture_name);
        let target = self.file(fixture_name);
        std::fs::copy(&fixture_path, &target).expect("Failed to copy fixture");
        target
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
