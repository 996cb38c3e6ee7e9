//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers with a clean environment
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest used by most tests.
pub const SERVER_MANIFEST: &str = "\
items:
  - key: PORT
    description: TCP port to listen on
    default: 8080
    file_key: port
    env_key: TIERCONF_CLI_TEST_PORT
    rule: uint-range:1..65535
  - key: HOST
    default: 127.0.0.1
    file_key: host
    env_key: TIERCONF_CLI_TEST_HOST
  - key: DEBUG
    default: \"false\"
    env_key: TIERCONF_CLI_TEST_DEBUG
    rule: bool
";

/// Environment variables the fixtures read; cleared on every command.
const FIXTURE_ENV: [&str; 5] = [
    "TIERCONF_CLI_TEST_PORT",
    "TIERCONF_CLI_TEST_HOST",
    "TIERCONF_CLI_TEST_DEBUG",
    "TIERCONF_ITEMS",
    "TIERCONF_CONFIG",
];

/// Test environment with an isolated directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder with fixture variables removed.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("tierconf").expect("Failed to find tierconf binary");
        for key in FIXTURE_ENV {
            cmd.env_remove(key);
        }
        cmd.env_remove("TIERCONF_LOG_MODE");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write `content` to `name` under the temp directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Write the standard server manifest.
    pub fn server_manifest(&self) -> PathBuf {
        self.write_file("items.yaml", SERVER_MANIFEST)
    }
}
