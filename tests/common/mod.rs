//! Common test utilities for zoo integration tests.
//!
//! Provides `TestEnv` for isolated working directories so tests never touch
//! each other's manifest or report files.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated working directory.
///
/// The `zoo()` method returns a `Command` whose working directory is the
/// temp dir, making tests parallel-safe.
pub struct TestEnv {
    pub work_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an isolated directory.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the zoo binary rooted in the isolated directory.
    pub fn zoo(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_zoo"));
        cmd.current_dir(self.work_dir.path());
        cmd
    }

    /// Write a manifest file into the working directory and return its path.
    pub fn write_manifest(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.work_dir.path().join(name);
        fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    /// Read a file from the working directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.path().join(name)).unwrap()
    }

    /// Check whether a file exists in the working directory.
    pub fn exists(&self, name: &str) -> bool {
        self.work_dir.path().join(name).exists()
    }

    /// Get the path to the working directory.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
