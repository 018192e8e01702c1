//! Shared testing harness for `slotdirs` integration tests.

use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated slot file plus a scratch area for folders to bind.
pub(crate) struct TestContext {
    root: TempDir,
    config_path: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment. The slot file does not exist yet.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let config_path = root.path().join("config").join("slots.json");
        Self { root, config_path }
    }

    /// Path of the slot file every CLI invocation uses.
    pub(crate) fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Create (if needed) and return a folder under the scratch area.
    pub(crate) fn folder(&self, name: &str) -> PathBuf {
        let path = self.root.path().join("folders").join(name);
        fs::create_dir_all(&path).expect("Failed to create test folder");
        fs::canonicalize(&path).expect("Failed to resolve test folder")
    }

    /// A `slotdirs` command wired to this context's slot file.
    ///
    /// Directories are "opened" with `true`, so nothing is launched.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("slotdirs").expect("Failed to locate slotdirs binary");
        cmd.current_dir(self.root.path())
            .env("SLOTDIRS_CONFIG", &self.config_path)
            .env("SLOTDIRS_OPENER", "true")
            .env("SLOTDIRS_LOG", "off")
            .env_remove("SLOTDIRS_THEME");
        cmd
    }

    /// Write raw text to the slot file.
    pub(crate) fn write_config(&self, content: &str) {
        fs::create_dir_all(self.config_path.parent().unwrap()).unwrap();
        fs::write(&self.config_path, content).expect("Failed to write slot file");
    }

    /// Parsed slot file.
    pub(crate) fn read_config(&self) -> Value {
        let content = fs::read_to_string(&self.config_path).expect("Slot file should exist");
        serde_json::from_str(&content).expect("Slot file should be valid JSON")
    }

    /// Run `slotdirs add <name>` and assert success.
    pub(crate) fn add(&self, name: &str) {
        self.cli().args(["add", name]).assert().success();
    }

    /// Run `slotdirs bind <slot> <path>` and assert success.
    pub(crate) fn bind(&self, slot: u32, path: &Path) {
        self.cli().arg("bind").arg(slot.to_string()).arg(path).assert().success();
    }
}
