// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers: a scratch project with a vault and settings file, and a
//! fluent wrapper around the `vr` binary.

use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Settings header used by most specs: plain `sh`, notices off.
pub const SH_SETTINGS: &str = r#"shell = "sh"
show_notifications = false
"#;

/// A temp directory holding `vault/` and `settings.toml`.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("vault")).unwrap();
        Self { dir }
    }

    /// A project whose settings use `sh` and hold `scripts` (TOML tables).
    pub fn with_scripts(scripts: &str) -> Self {
        let project = Self::empty();
        project.settings(&format!("{SH_SETTINGS}\n{scripts}"));
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn vault(&self) -> PathBuf {
        self.path().join("vault")
    }

    /// Canonical vault path, as the binary reports it
    pub fn vault_canonical(&self) -> PathBuf {
        self.vault().canonicalize().unwrap()
    }

    pub fn config_path(&self) -> PathBuf {
        self.path().join("settings.toml")
    }

    pub fn settings(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).unwrap();
    }

    /// Write a file inside the vault, creating parent directories.
    pub fn file(&self, rel: &str, contents: &str) {
        let path = self.vault().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, contents).unwrap();
    }

    /// Read a file inside the vault
    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.vault().join(rel)).unwrap()
    }

    /// `vr` running inside the vault against this project's settings
    pub fn vr(&self) -> CliBuilder {
        cli().env("VR_CONFIG", self.config_path()).dir(self.vault())
    }
}

/// `vr` with colors off and logging quiet
pub fn cli() -> CliBuilder {
    let mut cmd = assert_cmd::Command::cargo_bin("vr").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("COLOR").env_remove("VR_LOG").env_remove("RUST_LOG");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    pub fn stdin(mut self, input: &str) -> Self {
        self.cmd.write_stdin(input.to_string());
        self
    }

    fn run(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        RunAssert { output }
    }

    /// Run and require exit status 0
    pub fn passes(self) -> RunAssert {
        let run = self.run();
        assert!(run.output.status.success(), "expected success\n{}", run.describe());
        run
    }

    /// Run and require a non-zero exit status
    pub fn fails(self) -> RunAssert {
        let run = self.run();
        assert!(!run.output.status.success(), "expected failure\n{}", run.describe());
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    fn describe(&self) -> String {
        format!(
            "status: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.output.status.code(),
            self.stdout(),
            self.stderr()
        )
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(self.output.status.code(), Some(expected), "{}", self.describe());
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout().contains(needle), "stdout lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr().contains(needle), "stderr lacks {needle:?}\n{}", self.describe());
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).unwrap()
    }
}
