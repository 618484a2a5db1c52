//! Shared helpers for the CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding the config file for one test.
pub struct TestFixture {
    _temp_dir: TempDir,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("storefront").join("config.toml");
        Self {
            _temp_dir: temp_dir,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn write_config(&self, content: &str) {
        std::fs::create_dir_all(self.config_path.parent().unwrap()).unwrap();
        std::fs::write(&self.config_path, content).unwrap();
    }

    /// `storefront --config <fixture path>` with the environment cleared of
    /// anything that would redirect config or logging.
    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("storefront");
        cmd.env_remove("STOREFRONT_CONFIG")
            .env_remove("STOREFRONT_LOG")
            .arg("--config")
            .arg(&self.config_path);
        cmd
    }
}
