//! Test environment builder for isolated jsonbrowser testing.
//!
//! Provides `TestEnv` - a temp directory for documents plus an isolated home
//! directory, and helpers to run the jsonbrowser binary.

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

use super::home::TestHomeExt;

/// Result of running the jsonbrowser binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Directory holding test documents
    pub work_dir: TempDir,
    /// Temporary directory for HOME
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().expect("Failed to create work dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_jsonbrowser")),
        }
    }

    /// Get path relative to the work directory
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    /// Write a file to the work directory and return its path
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let full_path = self.path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write the user config file under the isolated home
    pub fn write_user_config(&self, content: &str) {
        #[cfg(target_os = "macos")]
        let dir = self
            .home_dir
            .path()
            .join("Library/Application Support/jsonbrowser");
        #[cfg(not(target_os = "macos"))]
        let dir = self.home_dir.path().join(".config/jsonbrowser");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Run the binary from the work directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = Command::new(&self.bin)
            .current_dir(self.work_dir.path())
            .args(args)
            .with_test_home(self.home_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute jsonbrowser");

        output_to_result(output)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
